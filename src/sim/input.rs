//! Discrete input events and what they do to the game
//!
//! Input only ever touches the player position and the pause flag; the
//! traffic collection and score belong to `tick`.

use glam::Vec2;

use super::state::GameState;
use super::tick::toggle_pause;

/// Arrow-key directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Unit step in screen space (+y is down)
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
        }
    }
}

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Arrow(Direction),
    Pause,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(Key::Arrow(Direction::Left)),
            "ArrowRight" => Some(Key::Arrow(Direction::Right)),
            "ArrowUp" => Some(Key::Arrow(Direction::Up)),
            "ArrowDown" => Some(Key::Arrow(Direction::Down)),
            "Escape" => Some(Key::Pause),
            _ => None,
        }
    }

    pub fn into_event(self) -> InputEvent {
        match self {
            Key::Arrow(dir) => InputEvent::Move(dir),
            Key::Pause => InputEvent::TogglePause,
        }
    }
}

/// Input surface events (no payload beyond identity)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Move(Direction),
    TogglePause,
    /// Pointer click over the play area
    Click,
    /// Tab hidden or window blurred
    FocusLost,
}

/// Side effects the host must carry out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Flip the background track between playing and paused
    ToggleMusic,
    StopMusic,
}

/// Apply one input event. Events that make no sense in the current phase are dropped.
pub fn handle_input(state: &mut GameState, event: InputEvent) -> Option<Effect> {
    match event {
        InputEvent::Move(dir) => {
            if state.is_running() {
                let viewport = state.viewport;
                state.player.move_by(dir.unit() * state.speed, viewport);
            }
            None
        }
        InputEvent::TogglePause => {
            // Music stops on every toggle, in either direction
            toggle_pause(state).then_some(Effect::StopMusic)
        }
        InputEvent::Click => state.is_running().then_some(Effect::ToggleMusic),
        InputEvent::FocusLost => {
            if state.is_running() {
                log::info!("Auto-paused (focus lost)");
                toggle_pause(state);
                Some(Effect::StopMusic)
            } else {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::entity::Viewport;
    use crate::sim::state::GamePhase;

    fn state() -> GameState {
        GameState::new(&GameConfig::default(), Viewport::new(800.0, 600.0), 1)
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(
            Key::from_key_name("ArrowLeft"),
            Some(Key::Arrow(Direction::Left))
        );
        assert_eq!(Key::from_key_name("Escape"), Some(Key::Pause));
        assert_eq!(Key::from_key_name("a"), None);
        assert_eq!(Key::Pause.into_event(), InputEvent::TogglePause);
    }

    #[test]
    fn test_move_steps_by_speed() {
        let mut state = state();
        handle_input(&mut state, InputEvent::Move(Direction::Right));
        assert_eq!(state.player.pos(), Vec2::new(378.0, 300.0));
        handle_input(&mut state, InputEvent::Move(Direction::Up));
        assert_eq!(state.player.pos(), Vec2::new(378.0, 292.0));
    }

    #[test]
    fn test_move_dropped_while_paused() {
        let mut state = state();
        handle_input(&mut state, InputEvent::TogglePause);
        handle_input(&mut state, InputEvent::Move(Direction::Left));
        assert_eq!(state.player.pos(), Vec2::new(370.0, 300.0));
    }

    #[test]
    fn test_game_over_drops_everything() {
        let mut state = state();
        state.phase = GamePhase::GameOver;
        assert_eq!(handle_input(&mut state, InputEvent::Move(Direction::Down)), None);
        assert_eq!(handle_input(&mut state, InputEvent::TogglePause), None);
        assert_eq!(handle_input(&mut state, InputEvent::Click), None);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.player.pos(), Vec2::new(370.0, 300.0));
    }

    #[test]
    fn test_pause_toggle_stops_music() {
        let mut state = state();
        assert_eq!(
            handle_input(&mut state, InputEvent::TogglePause),
            Some(Effect::StopMusic)
        );
        assert_eq!(state.phase, GamePhase::Paused);
        assert_eq!(handle_input(&mut state, InputEvent::Click), None);
        assert_eq!(
            handle_input(&mut state, InputEvent::TogglePause),
            Some(Effect::StopMusic)
        );
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_click_toggles_music_while_running() {
        let mut state = state();
        assert_eq!(
            handle_input(&mut state, InputEvent::Click),
            Some(Effect::ToggleMusic)
        );
    }

    #[test]
    fn test_focus_lost_only_pauses() {
        let mut state = state();
        assert_eq!(
            handle_input(&mut state, InputEvent::FocusLost),
            Some(Effect::StopMusic)
        );
        assert_eq!(state.phase, GamePhase::Paused);
        // A second blur must not resume
        assert_eq!(handle_input(&mut state, InputEvent::FocusLost), None);
        assert_eq!(state.phase, GamePhase::Paused);
    }
}
