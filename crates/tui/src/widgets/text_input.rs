//! Labeled text input field.
//!
//! Single-line fields are used for the title and tags; the notes field is
//! multi-line, so `Enter` inserts a newline there instead of being passed
//! on to the form.

use crate::event::EventStatus;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone)]
pub struct TextInput {
    /// Title of the surrounding block, e.g. "Article Title:".
    label: &'static str,
    value: String,
    /// Cursor position in characters, not bytes.
    cursor: usize,
    multiline: bool,
}

impl TextInput {
    pub fn single_line(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            cursor: 0,
            multiline: false,
        }
    }

    pub fn multi_line(label: &'static str) -> Self {
        Self {
            multiline: true,
            ..Self::single_line(label)
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// The raw field content.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    /// Replace the content and move the cursor to the end.
    pub fn set_value(&mut self, value: &str) {
        self.value.clear();
        self.cursor = 0;
        self.insert_str(value);
    }

    /// Insert a character at the cursor position.
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index();
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Insert pasted text. Line breaks become spaces in single-line fields.
    pub fn insert_str(&mut self, text: &str) {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        for c in normalized.chars() {
            match c {
                '\n' if !self.multiline => self.insert_char(' '),
                _ => self.insert_char(c),
            }
        }
    }

    /// Delete the character before the cursor (backspace).
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index();
            self.value.remove(at);
        }
    }

    /// Delete the character under the cursor.
    pub fn delete_forward(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index();
            self.value.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Handle editing keys. Focus movement and submission are left to the
    /// form.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> EventStatus {
        if key_event.kind != KeyEventKind::Press {
            return EventStatus::NotConsumed;
        }
        if key_event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return EventStatus::NotConsumed;
        }

        match key_event.code {
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Enter if self.multiline => self.insert_char('\n'),
            KeyCode::Backspace => self.delete_char(),
            KeyCode::Delete => self.delete_forward(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Home => self.move_cursor_home(),
            KeyCode::End => self.move_cursor_end(),
            _ => return EventStatus::NotConsumed,
        }
        EventStatus::Consumed
    }

    /// Render the field; a focused field gets a highlighted border and the
    /// terminal cursor.
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.label);
        let inner = block.inner(area);

        let paragraph = Paragraph::new(self.value.as_str()).block(block);
        frame.render_widget(paragraph, area);

        if focused && inner.width > 0 && inner.height > 0 {
            let (row, col) = self.cursor_row_col();
            let x = inner.x + (col as u16).min(inner.width - 1);
            let y = inner.y + (row as u16).min(inner.height - 1);
            frame.set_cursor_position(Position::new(x, y));
        }
    }

    /// Line and column of the cursor within the content.
    fn cursor_row_col(&self) -> (usize, usize) {
        let before: String = self.value.chars().take(self.cursor).collect();
        let row = before.matches('\n').count();
        let col = before
            .rsplit('\n')
            .next()
            .map_or(0, |line| line.chars().count());
        (row, col)
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map_or(self.value.len(), |(i, _)| i)
    }
}
