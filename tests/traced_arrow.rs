//! Tracing integration. Each application of a traced arrow emits one event.

#![cfg(feature = "tracing")]

use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;

use arrows::core::traced::TRACE_TARGET;
use arrows::make;

#[derive(Debug, Default, Clone)]
struct Captured {
    target: String,
    arrow: String,
    input: String,
    output: String,
}

impl Visit for Captured {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "arrow" => self.arrow = value.to_string(),
            "input" => self.input = value.to_string(),
            "output" => self.output = value.to_string(),
            _ => {}
        }
    }

    fn record_debug(&mut self, _field: &Field, _value: &dyn fmt::Debug) {}
}

#[derive(Clone, Default)]
struct CaptureLayer {
    events: Arc<Mutex<Vec<Captured>>>,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut captured = Captured {
            target: event.metadata().target().to_string(),
            ..Captured::default()
        };
        event.record(&mut captured);
        self.events.lock().unwrap().push(captured);
    }
}

fn capture<R>(f: impl FnOnce() -> R) -> (R, Vec<Captured>) {
    let layer = CaptureLayer::default();
    let events = Arc::clone(&layer.events);
    let subscriber = tracing_subscriber::registry().with(layer);
    let result = tracing::subscriber::with_default(subscriber, f);
    let events = events.lock().unwrap().clone();
    (result, events)
}

#[test]
fn test_one_event_per_apply() {
    let inc = make(|x: i32| x + 1).traced("inc");

    let (results, events) = capture(|| (inc.apply(1), inc.apply(2), inc.apply(3)));

    assert_eq!(results, (2, 3, 4));
    assert_eq!(events.len(), 3);
    for event in &events {
        assert_eq!(event.target, TRACE_TARGET);
        assert_eq!(event.arrow, "inc");
        assert_eq!(event.input, "i32");
        assert_eq!(event.output, "i32");
    }
}

#[test]
fn test_events_follow_composition_order() {
    let len = make(|s: String| s.len()).traced("len");
    let even = make(|n: usize| n % 2 == 0).traced("even");
    let chain = (len >> even).second::<char>();

    let (result, events) = capture(|| chain.apply(('k', "abcd".to_string())));

    assert_eq!(result, ('k', true));
    let names: Vec<&str> = events.iter().map(|e| e.arrow.as_str()).collect();
    assert_eq!(names, vec!["len", "even"]);
    assert_eq!(events[0].output, "usize");
    assert_eq!(events[1].output, "bool");
}

#[test]
fn test_untraced_arrows_stay_silent() {
    let inc = make(|x: i32| x + 1);
    let (result, events) = capture(|| inc.apply(1));
    assert_eq!(result, 2);
    assert!(events.is_empty());
}
