//! Event handling utilities for the TUI.
//!
//! This module provides functions for handling different types of events:
//! - Core events (from af-core), filtered by generation id
//! - Keyboard events (global shortcuts, then the form)

use crate::widgets::{ArticleForm, FormAction};
use af_protocol::{Event, GenerationId};
use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

/// What the app should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Submit,
    PageUp,
    PageDown,
    Quit,
}

/// How a core event affects the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreUpdate {
    /// The event belongs to an older submission and is dropped.
    Stale,
    Started,
    OutlineReady,
    /// Final text to type out; `failed` marks an error report.
    Finished {
        text: String,
        failed: bool,
        completed_at: Option<DateTime<Utc>>,
    },
}

/// Classify an event received from the core.
pub fn handle_core_event(current_id: Option<GenerationId>, event: Event) -> CoreUpdate {
    if current_id != Some(event.id()) {
        debug!(id = event.id(), ?current_id, "Ignoring stale event");
        return CoreUpdate::Stale;
    }

    match event {
        Event::GenerationStarted { .. } => CoreUpdate::Started,
        Event::OutlineReady { .. } => CoreUpdate::OutlineReady,
        Event::ArticleReady {
            article,
            completed_at,
            ..
        } => CoreUpdate::Finished {
            text: article,
            failed: false,
            completed_at: Some(completed_at),
        },
        Event::GenerationFailed { .. } => {
            let text = event
                .result()
                .map(|result| result.display_text())
                .unwrap_or_default();
            CoreUpdate::Finished {
                text,
                failed: true,
                completed_at: None,
            }
        }
    }
}

/// Handle a keyboard event from the user.
///
/// Global shortcuts are checked first; everything else goes to the form.
pub fn handle_keyboard_event(key_event: KeyEvent, form: &mut ArticleForm) -> KeyAction {
    if key_event.kind != KeyEventKind::Press {
        return KeyAction::None;
    }

    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
    match key_event.code {
        KeyCode::Esc => return KeyAction::Quit,
        KeyCode::Char('c') if ctrl => return KeyAction::Quit,
        KeyCode::Char('g') if ctrl => return KeyAction::Submit,
        KeyCode::PageUp => return KeyAction::PageUp,
        KeyCode::PageDown => return KeyAction::PageDown,
        _ => {}
    }

    match form.handle_key_event(key_event) {
        FormAction::Submit => KeyAction::Submit,
        FormAction::None => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::Focus;
    use af_protocol::{FailureKind, GenerationStage};

    #[test]
    fn test_handle_core_event_ignores_other_ids() {
        let update = handle_core_event(
            Some(2),
            Event::ArticleReady {
                id: 1,
                article: "old".to_string(),
                completed_at: Utc::now(),
            },
        );
        assert_eq!(update, CoreUpdate::Stale);

        let update = handle_core_event(None, Event::GenerationStarted { id: 1 });
        assert_eq!(update, CoreUpdate::Stale);
    }

    #[test]
    fn test_handle_core_event_article_ready() {
        let completed_at = Utc::now();
        let update = handle_core_event(
            Some(3),
            Event::ArticleReady {
                id: 3,
                article: "Body".to_string(),
                completed_at,
            },
        );
        assert_eq!(
            update,
            CoreUpdate::Finished {
                text: "Body".to_string(),
                failed: false,
                completed_at: Some(completed_at),
            }
        );
    }

    #[test]
    fn test_handle_core_event_failure_is_prefixed() {
        let update = handle_core_event(
            Some(1),
            Event::GenerationFailed {
                id: 1,
                stage: GenerationStage::Outline,
                kind: FailureKind::Auth,
                detail: "bad key".to_string(),
            },
        );

        match update {
            CoreUpdate::Finished {
                text,
                failed,
                completed_at,
            } => {
                assert!(completed_at.is_none());
                assert!(failed);
                assert!(text.starts_with("Generation failed during outline (authentication error)"));
                assert!(text.ends_with("bad key"));
            }
            other => panic!("Expected Finished, got {other:?}"),
        }
    }

    #[test]
    fn test_handle_keyboard_event_quit() {
        let mut form = ArticleForm::new();
        assert_eq!(
            handle_keyboard_event(KeyEvent::from(KeyCode::Esc), &mut form),
            KeyAction::Quit
        );
        assert_eq!(
            handle_keyboard_event(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                &mut form
            ),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_ctrl_g_submits_from_any_field() {
        let mut form = ArticleForm::new();
        form.focus = Focus::Notes;
        let action = handle_keyboard_event(
            KeyEvent::new(KeyCode::Char('g'), KeyModifiers::CONTROL),
            &mut form,
        );
        assert_eq!(action, KeyAction::Submit);
        assert_eq!(form.notes.value(), "");
    }

    #[test]
    fn test_plain_keys_reach_the_form() {
        let mut form = ArticleForm::new();
        handle_keyboard_event(KeyEvent::from(KeyCode::Char('q')), &mut form);
        handle_keyboard_event(KeyEvent::from(KeyCode::PageDown), &mut form);
        assert_eq!(form.title.value(), "q");
    }
}
