//! The input form: title, tags, notes and the "Generate Article" button.

use super::text_input::TextInput;
use crate::event::EventStatus;
use af_protocol::GenerationRequest;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const TITLE_LABEL: &str = "Article Title:";
pub const TAGS_LABEL: &str = "Tags (separated by commas):";
pub const NOTES_LABEL: &str = "Article Notes:";
pub const BUTTON_LABEL: &str = "Generate Article";

/// Which part of the form receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Title,
    Tags,
    Notes,
    Button,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Title => Focus::Tags,
            Focus::Tags => Focus::Notes,
            Focus::Notes => Focus::Button,
            Focus::Button => Focus::Title,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Title => Focus::Button,
            Focus::Tags => Focus::Title,
            Focus::Notes => Focus::Tags,
            Focus::Button => Focus::Notes,
        }
    }
}

/// What the form wants the app to do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    None,
    Submit,
}

#[derive(Debug, Clone)]
pub struct ArticleForm {
    pub title: TextInput,
    pub tags: TextInput,
    pub notes: TextInput,
    pub focus: Focus,
}

impl Default for ArticleForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleForm {
    pub fn new() -> Self {
        Self {
            title: TextInput::single_line(TITLE_LABEL),
            tags: TextInput::single_line(TAGS_LABEL),
            notes: TextInput::multi_line(NOTES_LABEL),
            focus: Focus::default(),
        }
    }

    /// Build a request from the raw field values. Nothing is validated.
    pub fn to_request(&self) -> GenerationRequest {
        GenerationRequest::from_fields(self.title.value(), self.tags.value(), self.notes.value())
    }

    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            Focus::Title => Some(&mut self.title),
            Focus::Tags => Some(&mut self.tags),
            Focus::Notes => Some(&mut self.notes),
            Focus::Button => None,
        }
    }

    /// Route pasted text to the focused field.
    pub fn paste(&mut self, text: &str) {
        if let Some(input) = self.focused_input_mut() {
            input.insert_str(text);
        }
    }

    /// Handle focus movement, field editing and the button.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> FormAction {
        if key_event.kind != KeyEventKind::Press {
            return FormAction::None;
        }

        match key_event.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return FormAction::None;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                return FormAction::None;
            }
            _ => {}
        }

        if self.focus == Focus::Button {
            return match key_event.code {
                KeyCode::Enter | KeyCode::Char(' ') => FormAction::Submit,
                _ => FormAction::None,
            };
        }

        let status = self
            .focused_input_mut()
            .map_or(EventStatus::NotConsumed, |input| {
                input.handle_key_event(key_event)
            });

        // Enter in a single-line field moves on to the next one.
        if !status.is_consumed() && key_event.code == KeyCode::Enter {
            self.focus = self.focus.next();
        }
        FormAction::None
    }

    /// Render the form. `enabled` is false while a generation runs.
    pub fn render(&self, frame: &mut Frame, area: Rect, enabled: bool) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Tags
                Constraint::Min(5),    // Notes
                Constraint::Length(3), // Button
            ])
            .split(area);

        self.title
            .render(frame, chunks[0], self.focus == Focus::Title);
        self.tags.render(frame, chunks[1], self.focus == Focus::Tags);
        self.notes
            .render(frame, chunks[2], self.focus == Focus::Notes);
        self.render_button(frame, chunks[3], enabled);
    }

    fn render_button(&self, frame: &mut Frame, area: Rect, enabled: bool) {
        let focused = self.focus == Focus::Button;
        let style = match (enabled, focused) {
            (false, _) => Style::default().fg(Color::DarkGray),
            (true, true) => Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().fg(Color::Yellow),
        };
        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        let button = Paragraph::new(BUTTON_LABEL)
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
        frame.render_widget(button, area);
    }
}
