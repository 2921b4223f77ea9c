//! "Generated Article" pane with scrolling support.
//!
//! Shows the loading caption while a generation runs, then the text being
//! typed out. Failures are drawn in red. While `follow` is set the view
//! sticks to the bottom so newly typed lines stay visible; scrolling up
//! releases it.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

pub const ARTICLE_TITLE: &str = "Generated Article";

/// What the pane should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleContent<'a> {
    Caption(&'a str),
    Text { text: &'a str, failed: bool },
}

#[derive(Debug, Clone)]
pub struct ArticleView {
    /// Current scroll offset (number of wrapped lines from the top).
    pub scroll_offset: usize,
    /// Keep the last line in view as text grows.
    pub follow: bool,
    /// Visible lines at the last render; used as the page size.
    page_size: usize,
}

impl ArticleView {
    pub fn new() -> Self {
        Self {
            scroll_offset: 0,
            follow: true,
            page_size: 1,
        }
    }

    /// Render the pane and clamp the scroll offset to the content.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, content: ArticleContent<'_>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(ARTICLE_TITLE);
        let inner = block.inner(area);

        let (text, style) = match content {
            ArticleContent::Caption(caption) => (caption, Style::default().fg(Color::Cyan)),
            ArticleContent::Text { text, failed: true } => (text, Style::default().fg(Color::Red)),
            ArticleContent::Text { text, .. } => (text, Style::default()),
        };

        let paragraph = Paragraph::new(text)
            .style(style)
            .wrap(Wrap { trim: false });
        let total_lines = paragraph.line_count(inner.width);
        let visible_lines = inner.height as usize;
        let max = total_lines.saturating_sub(visible_lines);

        self.page_size = visible_lines.max(1);
        self.scroll_offset = if self.follow {
            max
        } else {
            self.scroll_offset.min(max)
        };
        // Scrolling back to the end picks up new text again.
        if self.scroll_offset >= max {
            self.follow = true;
        }

        let paragraph = paragraph
            .block(block)
            .scroll((self.scroll_offset as u16, 0));
        frame.render_widget(paragraph, area);

        // Only show scrollbar if content exceeds visible area
        if total_lines > visible_lines {
            let mut scrollbar_state = ScrollbarState::default()
                .content_length(max + 1)
                .viewport_content_length(visible_lines)
                .position(self.scroll_offset);

            let scrollbar = Scrollbar::default()
                .orientation(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"));

            frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
        }
    }

    pub fn page_up(&mut self) {
        self.follow = false;
        self.scroll_offset = self.scroll_offset.saturating_sub(self.page_size);
    }

    /// Scroll down a page. The next render clamps to the end of the text.
    pub fn page_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(self.page_size);
    }

    /// Jump back to the top and stick to the bottom as new text arrives.
    pub fn reset(&mut self) {
        self.scroll_offset = 0;
        self.follow = true;
    }
}

impl Default for ArticleView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_to_string(view: &mut ArticleView, content: ArticleContent<'_>, height: u16) -> String {
        let backend = TestBackend::new(40, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| view.render(frame, frame.area(), content))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    fn numbered_lines(n: usize) -> String {
        (0..n)
            .map(|i| format!("Line {i}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_caption() {
        let mut view = ArticleView::new();
        let content = render_to_string(
            &mut view,
            ArticleContent::Caption("Generating article.."),
            10,
        );

        assert!(content.contains("Generated Article"));
        assert!(content.contains("Generating article.."));
    }

    #[test]
    fn test_failure_text_is_red() {
        let mut view = ArticleView::new();
        let backend = TestBackend::new(40, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                view.render(
                    frame,
                    frame.area(),
                    ArticleContent::Text {
                        text: "boom",
                        failed: true,
                    },
                )
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(1, 1)].symbol(), "b");
        assert_eq!(buffer[(1, 1)].fg, Color::Red);
    }

    #[test]
    fn test_follow_keeps_last_line_visible() {
        let mut view = ArticleView::new();
        let text = numbered_lines(20);
        let content = render_to_string(
            &mut view,
            ArticleContent::Text {
                text: &text,
                failed: false,
            },
            7,
        );

        // 5 visible rows out of 20
        assert_eq!(view.scroll_offset, 15);
        assert!(content.contains("Line 19"));
        assert!(!content.contains("Line 0 "));
    }

    #[test]
    fn test_page_up_releases_follow_and_clamps() {
        let mut view = ArticleView::new();
        let text = numbered_lines(20);
        let content = ArticleContent::Text {
            text: &text,
            failed: false,
        };
        render_to_string(&mut view, content, 7);

        view.page_up();
        assert!(!view.follow);
        assert_eq!(view.scroll_offset, 10);

        view.page_up();
        view.page_up();
        view.page_up();
        assert_eq!(view.scroll_offset, 0);

        for _ in 0..10 {
            view.page_down();
        }
        render_to_string(&mut view, content, 7);
        assert_eq!(view.scroll_offset, 15);
        assert!(view.follow);
    }

    #[test]
    fn test_follow_accounts_for_word_wrap() {
        let mut view = ArticleView::new();
        // 38 columns inside the border: three 10-char words per row, so the
        // last word lands on the fourth row.
        let mut text = vec!["abcdefghij"; 9].join(" ");
        text.push_str(" LASTWORDXX");
        let content = render_to_string(
            &mut view,
            ArticleContent::Text {
                text: &text,
                failed: false,
            },
            5,
        );

        assert_eq!(view.scroll_offset, 1);
        assert!(content.contains("LASTWORDXX"));
    }

    #[test]
    fn test_paging_back_to_the_end_resumes_follow() {
        let mut view = ArticleView::new();
        let mut text = numbered_lines(20);
        render_to_string(
            &mut view,
            ArticleContent::Text {
                text: &text,
                failed: false,
            },
            7,
        );

        view.page_up();
        view.page_down();
        render_to_string(
            &mut view,
            ArticleContent::Text {
                text: &text,
                failed: false,
            },
            7,
        );

        text.push_str("\nLine 20\nLine 21\nLine 22");
        let content = render_to_string(
            &mut view,
            ArticleContent::Text {
                text: &text,
                failed: false,
            },
            7,
        );

        assert!(view.follow);
        assert_eq!(view.scroll_offset, 18);
        assert!(content.contains("Line 22"));
    }

    #[test]
    fn test_reset_scrolls_to_top() {
        let mut view = ArticleView::new();
        view.follow = false;
        view.scroll_offset = 42;

        view.reset();
        assert_eq!(view.scroll_offset, 0);
        assert!(view.follow);
    }
}
