use gloo::console;
use std::fmt;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Browser-console logger with per-component tags
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        console::debug!(Self::format(component, message));
    }

    pub fn info_with_component(component: &str, message: &str) {
        console::info!(Self::format(component, message));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        console::warn!(Self::format(component, message));
    }

    pub fn error_with_component(component: &str, message: &str) {
        console::error!(Self::format(component, message));
    }

    fn format(component: &str, message: &str) -> String {
        format!("[{}] {}", component, message)
    }
}

type Sink = fn(&Level, &str, &str);

/// Forwards `tracing` events (the week engine logs through `tracing`) to [`Logger`],
/// using the event target as the component tag
pub struct ConsoleLayer {
    sink: Sink,
}

impl ConsoleLayer {
    pub fn new() -> Self {
        Self { sink: to_console }
    }
}

impl Default for ConsoleLayer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_console(level: &Level, component: &str, message: &str) {
    match *level {
        Level::ERROR => Logger::error_with_component(component, message),
        Level::WARN => Logger::warn_with_component(component, message),
        Level::INFO => Logger::info_with_component(component, message),
        _ => Logger::debug_with_component(component, message),
    }
}

#[derive(Default)]
struct EventMessage {
    message: String,
    fields: Vec<String>,
}

impl EventMessage {
    fn render(self) -> String {
        if self.fields.is_empty() {
            self.message
        } else {
            format!("{} {}", self.message, self.fields.join(" "))
        }
    }
}

impl Visit for EventMessage {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut message = EventMessage::default();
        event.record(&mut message);
        let metadata = event.metadata();
        (self.sink)(metadata.level(), metadata.target(), &message.render());
    }
}

/// Install the console layer as the global `tracing` subscriber.
///
/// `filter` uses `EnvFilter` directive syntax, e.g. `"info,week_engine=debug"`.
pub fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    if tracing_subscriber::registry()
        .with(filter)
        .with(ConsoleLayer::new())
        .try_init()
        .is_err()
    {
        Logger::warn_with_component("logging", "⚠️ A tracing subscriber was already installed");
    }
}
