//! UI module for Now Playing.

mod debug;
mod icons;
mod messages;
mod theme;
mod update;
mod views;

use iced::{Element, Task, Theme};

use crate::config::Config;
use crate::player::PlayerState;

pub use messages::Message;

/// The application: one player view and its state.
///
/// State starts from [`PlayerState::default`] on every launch.
pub struct NowPlaying {
    state: PlayerState,
    scale_factor: f64,
}

impl NowPlaying {
    pub fn new(config: &Config) -> (Self, Task<Message>) {
        let state = PlayerState::default();
        tracing::debug!(
            "UI::new() mounted with {}",
            debug::DebugSummary::debug_summary(&state)
        );

        (
            Self {
                state,
                scale_factor: config.appearance.effective_scale(),
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        let song = self.state.current_song();
        format!("{} - {} | Now Playing", song.title, song.artist)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::handle_message(&mut self.state, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        views::player_view(&self.state)
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_mount_starts_from_initial_state() {
        let (mut app, _) = NowPlaying::new(&Config::default());
        let _ = app.update(Message::ToggleLike);
        let _ = app.update(Message::SelectSong(2));

        let (fresh, _) = NowPlaying::new(&Config::default());
        assert_eq!(fresh.state, PlayerState::default());
        assert_ne!(app.state, fresh.state);
    }

    #[test]
    fn title_follows_current_song() {
        let (mut app, _) = NowPlaying::new(&Config::default());
        assert_eq!(app.title(), "Issues - Julia Michaels | Now Playing");
        let _ = app.update(Message::SelectSong(5));
        assert!(app.title().starts_with("Little Did I Know"));
    }

    #[test]
    fn scale_factor_comes_from_config() {
        let mut config = Config::default();
        config.appearance.scale_factor = 1.5;
        let (app, _) = NowPlaying::new(&config);
        assert_eq!(app.scale_factor(), 1.5);
    }
}
