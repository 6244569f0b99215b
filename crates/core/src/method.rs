//! Behavior members
//!
//! A [`Method`] is the callable half of a trait's member set. It receives the
//! value it was looked up on as its receiver, so a method contributed by one
//! trait can read members contributed by another once both are composed.

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::object::MemberAccess;
use crate::value::Value;

type MethodFn = dyn Fn(&dyn MemberAccess, &[Value]) -> Result<Value> + Send + Sync;

/// Shared, immutable behavior member
///
/// Cloning a method is cheap and yields the same function: two clones compare
/// equal, while two separately constructed methods never do, even if their
/// bodies are identical.
#[derive(Clone)]
pub struct Method(Arc<MethodFn>);

impl Method {
    /// Wrap a closure as a method
    ///
    /// # Examples
    ///
    /// ```
    /// use traitmix_core::{Method, Value};
    ///
    /// let greet = Method::new(|this, _args| {
    ///     let name = this.member("name").and_then(Value::as_str).unwrap_or("nobody");
    ///     Ok(Value::from(format!("hello, {}", name)))
    /// });
    /// # let _ = greet;
    /// ```
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&dyn MemberAccess, &[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        Method(Arc::new(f))
    }

    /// Invoke the method with `this` as the receiver
    pub fn invoke(&self, this: &dyn MemberAccess, args: &[Value]) -> Result<Value> {
        (self.0)(this, args)
    }

    /// Whether both handles point at the same function
    pub fn ptr_eq(&self, other: &Method) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Method {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Method({:p})", Arc::as_ptr(&self.0) as *const ())
    }
}
