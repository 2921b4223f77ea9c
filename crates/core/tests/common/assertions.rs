//! Custom assertion helpers for integration tests.

use af_protocol::ipc::{Event, GenerationId};

/// Assert that events are in the correct sequential order.
///
/// Checks that:
/// 1. GenerationStarted comes first
/// 2. ArticleReady or GenerationFailed comes last
/// 3. Every event carries the same generation id
pub fn assert_event_sequence(events: &[Event]) {
    let (first, last) = match (events.first(), events.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => panic!("Event sequence is empty"),
    };

    assert!(
        matches!(first, Event::GenerationStarted { .. }),
        "First event should be GenerationStarted, got: {:?}",
        first
    );
    assert!(
        last.is_terminal(),
        "Last event should be ArticleReady or GenerationFailed, got: {:?}",
        last
    );

    let id = first.id();
    assert!(
        events.iter().all(|e| e.id() == id),
        "All events should carry id {}, got: {:?}",
        id,
        events
    );
}

/// Whether the sequence contains an OutlineReady event.
pub fn has_outline_ready(events: &[Event]) -> bool {
    events.iter().any(|e| matches!(e, Event::OutlineReady { .. }))
}

/// Extract the generation id from the first GenerationStarted event.
#[allow(dead_code)]
pub fn extract_generation_id(events: &[Event]) -> Option<GenerationId> {
    events.iter().find_map(|e| match e {
        Event::GenerationStarted { id } => Some(*id),
        _ => None,
    })
}
