//! Tracing bridge to the browser console.
//!
//! The core crate logs through `tracing`; this layer forwards every event to
//! the matching `console.*` method so messages show up in devtools with the
//! right severity.

use std::fmt;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::prelude::*;
use wasm_bindgen::JsValue;

use crate::config::LOG_LEVEL;

/// Collects the message and structured fields of an event.
#[derive(Default)]
struct EventVisitor {
    message: Option<String>,
    fields: Vec<(&'static str, String)>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let rendered = format!("{value:?}");
        if field.name() == "message" {
            self.message = Some(rendered);
        } else {
            self.fields.push((field.name(), rendered));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields.push((field.name(), value.to_string()));
        }
    }
}

/// Format an event as `[target] message key=value ...`.
fn format_line(target: &str, message: Option<&str>, fields: &[(&str, String)]) -> String {
    let mut line = format!("[{}] {}", target, message.unwrap_or_default());
    for (key, value) in fields {
        line.push(' ');
        line.push_str(key);
        line.push('=');
        line.push_str(value);
    }
    line
}

/// Layer writing events to `web_sys::console`.
pub struct ConsoleLayer {
    max_level: Level,
}

impl ConsoleLayer {
    pub fn new(max_level: Level) -> Self {
        Self { max_level }
    }
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        if *meta.level() > self.max_level {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);
        let line = format_line(meta.target(), visitor.message.as_deref(), &visitor.fields);
        let value = JsValue::from_str(&line);

        match *meta.level() {
            Level::ERROR => web_sys::console::error_1(&value),
            Level::WARN => web_sys::console::warn_1(&value),
            Level::INFO => web_sys::console::info_1(&value),
            _ => web_sys::console::debug_1(&value),
        }
    }
}

/// Install the console layer as the global subscriber.
pub fn init() {
    let result = tracing_subscriber::registry()
        .with(ConsoleLayer::new(LOG_LEVEL))
        .try_init();
    if let Err(err) = result {
        web_sys::console::warn_1(&format!("logging already initialized: {err}").into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let fields = vec![("folder", "https://pod.example/".to_string()), ("items", "3".to_string())];
        assert_eq!(
            format_line("podview_core::navigator", Some("listed folder"), &fields),
            "[podview_core::navigator] listed folder folder=https://pod.example/ items=3"
        );
        assert_eq!(format_line("app", None, &[]), "[app] ");
    }
}
