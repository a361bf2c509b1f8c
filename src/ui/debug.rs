//! UI Debug and State Tracing
//!
//! Provides structured logging for following state changes in the view.
//!
//! # Usage
//!
//! Enable debug logging with `RUST_LOG=ui=debug`
//!
//! # Log Format
//!
//! ```text
//! [UI:msg]    TogglePlay
//! [UI:player] play toggled | Paused → Playing
//! [UI:player] after update | song=Issues playing=false liked=false progress=[23] volume=[75]
//! ```

use crate::player::PlayerState;
use std::fmt;

/// Trait for types that can provide a debug summary.
pub trait DebugSummary {
    fn debug_summary(&self) -> String;
}

impl DebugSummary for PlayerState {
    fn debug_summary(&self) -> String {
        format!(
            "song={} playing={} liked={} progress={} volume={}",
            self.current_song().title,
            self.is_playing(),
            self.is_liked(),
            self.progress(),
            self.volume(),
        )
    }
}

/// State transition event for debugging.
#[derive(Debug, Clone)]
pub struct StateTransition {
    pub component: &'static str,
    pub event: String,
    pub old_state: String,
    pub new_state: String,
}

impl StateTransition {
    /// Transition of a single boolean flag, labelled with `on`/`off` names.
    pub fn flag(
        component: &'static str,
        event: impl Into<String>,
        old: bool,
        labels: (&str, &str),
    ) -> Self {
        let label = |v: bool| (if v { labels.0 } else { labels.1 }).to_string();
        Self {
            component,
            event: event.into(),
            old_state: label(old),
            new_state: label(!old),
        }
    }
}

impl fmt::Display for StateTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[UI:{}] {} | {} → {}",
            self.component, self.event, self.old_state, self.new_state
        )
    }
}

/// Log a UI message being processed.
#[macro_export]
macro_rules! ui_trace_msg {
    ($msg:expr) => {
        tracing::debug!(target: "ui::msg", "[UI:msg] {:?}", $msg);
    };
}

/// Log a state change in a specific component.
#[macro_export]
macro_rules! ui_trace_state {
    ($component:literal, $event:expr, $state:expr) => {
        tracing::debug!(
            target: "ui::state",
            "[UI:{}] {} | {}",
            $component,
            $event,
            $state.debug_summary()
        );
    };
}
