use serde::Serialize;
use tracing::trace;

/// Page-observable notification equivalent to a bubbling DOM event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldEvent {
    Input,
    Change,
}

/// Receives exactly one call per successfully filled field.
pub trait ChangeNotifier {
    fn field_changed(&mut self, field_key: &str, events: &[FieldEvent]);
}

/// Discards notifications.
pub struct NullNotifier;

impl ChangeNotifier for NullNotifier {
    fn field_changed(&mut self, _field_key: &str, _events: &[FieldEvent]) {}
}

/// Emits notifications as trace-level log records.
pub struct TracingNotifier;

impl ChangeNotifier for TracingNotifier {
    fn field_changed(&mut self, field_key: &str, events: &[FieldEvent]) {
        trace!(field = %field_key, events = ?events, "dispatch change events");
    }
}

/// Records every notification in order.
#[derive(Debug, Default)]
pub struct EventLog {
    pub entries: Vec<(String, Vec<FieldEvent>)>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count_for(&self, field_key: &str) -> usize {
        self.entries.iter().filter(|(k, _)| k == field_key).count()
    }
}

impl ChangeNotifier for EventLog {
    fn field_changed(&mut self, field_key: &str, events: &[FieldEvent]) {
        self.entries.push((field_key.to_string(), events.to_vec()));
    }
}
