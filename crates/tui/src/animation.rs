//! Loading and typewriter animation.
//!
//! `AnimationState` is the Idle → Loading → Typing → Idle state machine
//! owned by the UI loop. `AnimationTicker` wraps the single tokio interval
//! that drives whichever phase is active; the app keeps it in an
//! `Option` and replaces it on every transition, so two tickers can never
//! run at once.

use std::time::Duration;
use thiserror::Error;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

/// Text shown while waiting for the service, followed by 0-3 dots.
pub const LOADING_CAPTION: &str = "Generating article";

/// Number of distinct dot counts in the loading caption (0, 1, 2, 3).
const DOT_CYCLE: u8 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Loading {
        dot_count: u8,
    },
    Typing {
        full_text: String,
        revealed: usize,
        failed: bool,
    },
}

/// Rejected state change. The state is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot go from {from} to {to}")]
pub struct TransitionError {
    pub from: &'static str,
    pub to: &'static str,
}

impl AnimationState {
    pub fn phase(&self) -> &'static str {
        match self {
            AnimationState::Idle => "idle",
            AnimationState::Loading { .. } => "loading",
            AnimationState::Typing { .. } => "typing",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, AnimationState::Idle)
    }

    /// Idle → Loading(0).
    pub fn start_loading(&mut self) -> Result<(), TransitionError> {
        match self {
            AnimationState::Idle => {
                *self = AnimationState::Loading { dot_count: 0 };
                Ok(())
            }
            _ => Err(self.rejected("loading")),
        }
    }

    /// Loading → Typing with nothing revealed yet.
    pub fn start_typing(&mut self, full_text: String, failed: bool) -> Result<(), TransitionError> {
        match self {
            AnimationState::Loading { .. } => {
                *self = AnimationState::Typing {
                    full_text,
                    revealed: 0,
                    failed,
                };
                Ok(())
            }
            _ => Err(self.rejected("typing")),
        }
    }

    /// Typing → Idle, only once every character has been revealed.
    pub fn finish(&mut self) -> Result<(), TransitionError> {
        match self {
            AnimationState::Typing {
                full_text,
                revealed,
                ..
            } if *revealed >= full_text.chars().count() => {
                *self = AnimationState::Idle;
                Ok(())
            }
            _ => Err(self.rejected("idle")),
        }
    }

    /// Advance the loading caption by one dot, wrapping after three.
    /// No-op outside the loading phase.
    pub fn tick_loading(&mut self) {
        if let AnimationState::Loading { dot_count } = self {
            *dot_count = (*dot_count + 1) % DOT_CYCLE;
        }
    }

    /// Reveal the next character.
    ///
    /// Returns the character to append to the display, or `None` once the
    /// whole text is out (and outside the typing phase). `revealed` never
    /// moves past the end of the text.
    pub fn tick_typing(&mut self) -> Option<char> {
        match self {
            AnimationState::Typing {
                full_text,
                revealed,
                ..
            } => {
                let next = full_text.chars().nth(*revealed)?;
                *revealed += 1;
                Some(next)
            }
            _ => None,
        }
    }

    /// The loading caption, e.g. `"Generating article.."`.
    pub fn caption(&self) -> Option<String> {
        match self {
            AnimationState::Loading { dot_count } => Some(format!(
                "{LOADING_CAPTION}{}",
                ".".repeat(usize::from(*dot_count))
            )),
            _ => None,
        }
    }

    fn rejected(&self, to: &'static str) -> TransitionError {
        TransitionError {
            from: self.phase(),
            to,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerKind {
    Loading,
    Typing,
}

/// The one periodic timer of the UI loop.
#[derive(Debug)]
pub struct AnimationTicker {
    kind: TickerKind,
    interval: Interval,
}

impl AnimationTicker {
    pub fn loading(period: Duration) -> Self {
        Self::new(TickerKind::Loading, period)
    }

    pub fn typing(period: Duration) -> Self {
        Self::new(TickerKind::Typing, period)
    }

    fn new(kind: TickerKind, period: Duration) -> Self {
        // First tick one period from now rather than immediately.
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { kind, interval }
    }

    pub fn kind(&self) -> TickerKind {
        self.kind
    }

    /// Wait for the next tick.
    pub async fn tick(&mut self) -> TickerKind {
        self.interval.tick().await;
        self.kind
    }
}

/// Tick of the active ticker, or never if there is none.
pub async fn next_tick(ticker: &mut Option<AnimationTicker>) -> TickerKind {
    match ticker {
        Some(ticker) => ticker.tick().await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typing(text: &str) -> AnimationState {
        let mut state = AnimationState::Idle;
        state.start_loading().unwrap();
        state.start_typing(text.to_string(), false).unwrap();
        state
    }

    #[test]
    fn test_full_cycle_visits_every_phase() {
        let mut state = AnimationState::default();
        assert!(state.is_idle());

        state.start_loading().unwrap();
        assert_eq!(state, AnimationState::Loading { dot_count: 0 });

        state.start_typing("ab".to_string(), false).unwrap();
        assert_eq!(state.phase(), "typing");

        assert_eq!(state.tick_typing(), Some('a'));
        assert_eq!(state.tick_typing(), Some('b'));
        assert_eq!(state.tick_typing(), None);

        state.finish().unwrap();
        assert!(state.is_idle());
    }

    #[test]
    fn test_skipping_a_phase_is_rejected() {
        let mut state = AnimationState::Idle;
        let err = state.start_typing("x".to_string(), false).unwrap_err();
        assert_eq!(err.from, "idle");
        assert_eq!(err.to, "typing");
        assert!(state.is_idle(), "state must be unchanged");

        state.start_loading().unwrap();
        assert!(state.start_loading().is_err());
        assert!(state.finish().is_err());
        assert_eq!(state, AnimationState::Loading { dot_count: 0 });
    }

    #[test]
    fn test_finish_requires_all_text_revealed() {
        let mut state = typing("hi");
        state.tick_typing();

        assert!(state.finish().is_err());
        state.tick_typing();
        assert!(state.finish().is_ok());
    }

    #[test]
    fn test_loading_caption_cycles_dots() {
        let mut state = AnimationState::Idle;
        state.start_loading().unwrap();

        let mut captions = Vec::new();
        for _ in 0..6 {
            captions.push(state.caption().unwrap());
            state.tick_loading();
        }

        assert_eq!(
            captions,
            vec![
                "Generating article",
                "Generating article.",
                "Generating article..",
                "Generating article...",
                "Generating article",
                "Generating article.",
            ]
        );
        assert!(captions.windows(2).all(|w| w[0] != w[1]));
    }

    #[test]
    fn test_typing_reveal_is_monotonic_and_stops() {
        let text = "Ünïcode ok";
        let mut state = typing(text);
        let mut out = String::new();
        let mut last = 0;

        while let Some(c) = state.tick_typing() {
            out.push(c);
            if let AnimationState::Typing { revealed, .. } = &state {
                assert_eq!(*revealed, last + 1);
                last = *revealed;
            }
        }

        assert_eq!(out, text);
        assert_eq!(last, text.chars().count());

        // Further ticks never move past the end.
        assert_eq!(state.tick_typing(), None);
        assert!(matches!(state, AnimationState::Typing { revealed, .. } if revealed == last));
    }

    #[test]
    fn test_empty_text_finishes_immediately() {
        let mut state = typing("");
        assert_eq!(state.tick_typing(), None);
        assert!(state.finish().is_ok());
    }

    #[test]
    fn test_ticks_outside_their_phase_are_ignored() {
        let mut state = AnimationState::Idle;
        state.tick_loading();
        assert_eq!(state.tick_typing(), None);
        assert!(state.is_idle());
        assert!(state.caption().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_waits_one_period_before_first_tick() {
        let start = Instant::now();
        let mut ticker = AnimationTicker::loading(Duration::from_millis(500));

        assert_eq!(ticker.tick().await, TickerKind::Loading);
        assert!(start.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_next_tick_uses_active_ticker() {
        let mut ticker = Some(AnimationTicker::typing(Duration::from_millis(30)));
        assert_eq!(next_tick(&mut ticker).await, TickerKind::Typing);

        let mut none: Option<AnimationTicker> = None;
        let pending =
            tokio::time::timeout(Duration::from_secs(1), next_tick(&mut none)).await;
        assert!(pending.is_err());
    }
}
