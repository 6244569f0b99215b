//! Tracing events are emitted under per-component targets.

use std::sync::{Arc, Mutex};

use crate::common::*;
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

#[derive(Clone, Default)]
struct TargetRecorder(Arc<Mutex<Vec<String>>>);

impl<S: Subscriber> Layer<S> for TargetRecorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        self.0
            .lock()
            .unwrap()
            .push(event.metadata().target().to_string());
    }
}

#[test]
fn registry_and_composer_log_under_their_targets() {
    let recorder = TargetRecorder::default();
    let _guard = tracing_subscriber::registry()
        .with(recorder.clone())
        .set_default();

    let registry = TraitRegistry::new();
    registry
        .define("Logged", Value::object([("v", Value::Int(1))]))
        .unwrap();
    Composer::new(&registry).compose(["Logged", "Logged"]).unwrap();

    let targets = recorder.0.lock().unwrap().clone();
    assert!(targets.iter().any(|t| t == "traitmix::registry"));
    assert!(targets.iter().any(|t| t == "traitmix::compose"));
    assert!(targets.iter().all(|t| t.starts_with("traitmix::")));
}
