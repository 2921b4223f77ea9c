//! Event handling types for the TUI.
//!
//! Input widgets return [`EventStatus`] from `handle_key_event` so the
//! caller knows whether to fall through to the next handler.

/// Status of an event after being handled by a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    /// The widget used the event; stop propagating it.
    Consumed,
    /// The widget ignored the event; pass it on.
    NotConsumed,
}

impl EventStatus {
    pub fn is_consumed(self) -> bool {
        self == EventStatus::Consumed
    }
}
