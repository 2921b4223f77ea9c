//! TUI application state and event loop.
//!
//! This module defines the main `App` struct that manages the TUI state
//! and the event loop using `tokio::select!` over terminal input, core
//! events and the active animation ticker.

use anyhow::Result;
use af_core::worker::{SubmitError, WorkerHandle};
use af_protocol::{AnimationConfig, Event, GenerationId};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::Duration;
use tokio::select;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio_stream::StreamExt;
use tracing::{debug, error, info, warn};

use crate::animation::{next_tick, AnimationState, AnimationTicker, TickerKind};
use crate::event_handler::{self, CoreUpdate, KeyAction};
use crate::tui::{Tui, TuiEvent};
use crate::widgets::{ArticleContent, ArticleForm, ArticleView};

pub const APP_TITLE: &str = "article-forge";
pub const BUSY_HINT: &str = "A generation is already in progress";
const KEY_HINTS: &str = "Tab: next field  Ctrl+G: generate  PgUp/PgDn: scroll  Esc: quit";

/// Main TUI application state.
pub struct App {
    pub form: ArticleForm,
    pub animation: AnimationState,
    /// Ticker of the current animation phase; `None` while idle.
    ticker: Option<AnimationTicker>,
    pub article_view: ArticleView,
    /// Text typed out so far (or left over from the last generation).
    pub output: String,
    pub output_failed: bool,
    /// Id of the submission whose events are accepted.
    pub current_id: Option<GenerationId>,
    /// One-line message in the footer, replacing the key hints.
    pub status: Option<String>,
    worker: WorkerHandle,
    event_rx: UnboundedReceiver<Event>,
    animation_config: AnimationConfig,
    temperature: f32,
    pub should_exit: bool,
}

impl App {
    /// Create a new App on top of a running generation worker.
    pub fn new(
        worker: WorkerHandle,
        event_rx: UnboundedReceiver<Event>,
        animation_config: AnimationConfig,
        temperature: f32,
    ) -> Self {
        Self {
            form: ArticleForm::new(),
            animation: AnimationState::Idle,
            ticker: None,
            article_view: ArticleView::new(),
            output: String::new(),
            output_failed: false,
            current_id: None,
            status: None,
            worker,
            event_rx,
            animation_config,
            temperature,
            should_exit: false,
        }
    }

    /// Main event loop.
    pub async fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let mut tui_events = tui.event_stream();
        let frames = tui.frame_requester();

        frames.schedule_frame();

        while !self.should_exit {
            select! {
                Some(event) = self.event_rx.recv() => {
                    self.handle_core_event(event);
                    frames.schedule_frame();
                }
                kind = next_tick(&mut self.ticker) => {
                    self.handle_tick(kind);
                    frames.schedule_frame();
                }
                Some(tui_event) = tui_events.next() => {
                    match tui_event {
                        TuiEvent::Key(key_event) => {
                            self.handle_key_event(key_event);
                            frames.schedule_frame();
                        }
                        TuiEvent::Paste(text) => {
                            self.form.paste(&text);
                            frames.schedule_frame();
                        }
                        TuiEvent::Draw => {
                            tui.draw(|frame| self.render(frame))?;
                        }
                    }
                }
                else => break,
            }
        }

        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        match event_handler::handle_keyboard_event(key_event, &mut self.form) {
            KeyAction::None => {}
            KeyAction::Submit => self.submit(),
            KeyAction::PageUp => self.article_view.page_up(),
            KeyAction::PageDown => self.article_view.page_down(),
            KeyAction::Quit => self.should_exit = true,
        }
    }

    /// Start a generation from the current form values.
    ///
    /// Ignored with a status hint unless the animation is idle.
    fn submit(&mut self) {
        if !self.animation.is_idle() {
            debug!(phase = self.animation.phase(), "Submit ignored");
            self.status = Some(BUSY_HINT.to_string());
            return;
        }

        let request = self
            .form
            .to_request()
            .with_temperature(self.temperature);

        let id = match self.worker.submit(request) {
            Ok(id) => id,
            Err(SubmitError::Busy) => {
                self.status = Some(BUSY_HINT.to_string());
                return;
            }
            Err(err @ SubmitError::Closed) => {
                error!(%err, "Cannot submit generation");
                self.status = Some(err.to_string());
                return;
            }
        };

        if let Err(err) = self.animation.start_loading() {
            warn!(%err, "Unexpected animation state");
            return;
        }
        info!(id, "Generation submitted");
        self.current_id = Some(id);
        self.status = None;
        self.ticker = Some(AnimationTicker::loading(self.loading_period()));
    }

    fn handle_core_event(&mut self, event: Event) {
        match event_handler::handle_core_event(self.current_id, event) {
            CoreUpdate::Stale | CoreUpdate::Started => {}
            CoreUpdate::OutlineReady => {
                self.status = Some("Outline ready, writing the article".to_string());
            }
            CoreUpdate::Finished {
                text,
                failed,
                completed_at,
            } => {
                if let Err(err) = self.animation.start_typing(text, failed) {
                    warn!(%err, "Dropping result outside the loading phase");
                    return;
                }
                self.output.clear();
                self.output_failed = failed;
                self.article_view.reset();
                self.status = completed_at
                    .map(|at| format!("Article completed at {}", at.format("%H:%M:%S UTC")));
                self.ticker = Some(AnimationTicker::typing(self.typing_period()));
            }
        }
    }

    fn handle_tick(&mut self, kind: TickerKind) {
        match kind {
            TickerKind::Loading => self.animation.tick_loading(),
            TickerKind::Typing => match self.animation.tick_typing() {
                Some(c) => self.output.push(c),
                None => {
                    self.ticker = None;
                    if let Err(err) = self.animation.finish() {
                        warn!(%err, "Typing ended in an unexpected state");
                    }
                }
            },
        }
    }

    fn loading_period(&self) -> Duration {
        Duration::from_millis(self.animation_config.loading_interval_ms)
    }

    fn typing_period(&self) -> Duration {
        Duration::from_millis(self.animation_config.typing_interval_ms)
    }

    /// Render the TUI: header, form | article, footer.
    fn render(&mut self, frame: &mut Frame) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(0),    // Body
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(rows[1]);

        self.render_header(frame, rows[0]);
        self.form
            .render(frame, columns[0], self.animation.is_idle());

        let caption = self.animation.caption();
        let content = match &caption {
            Some(caption) => ArticleContent::Caption(caption),
            None => ArticleContent::Text {
                text: &self.output,
                failed: self.output_failed,
            },
        };
        self.article_view.render(frame, columns[1], content);

        self.render_footer(frame, rows[2]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header = Paragraph::new(Line::from(Span::styled(
            APP_TITLE,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(header, area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let footer = match &self.status {
            Some(status) => Paragraph::new(status.as_str()).style(Style::default().fg(Color::Yellow)),
            None => Paragraph::new(KEY_HINTS).style(Style::default().fg(Color::DarkGray)),
        };
        frame.render_widget(footer, area);
    }
}
