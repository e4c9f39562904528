//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use glam::Vec2;

use super::collision::check_all;
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the game state by one tick.
///
/// Does nothing unless the game is running. Steps run in a fixed order:
/// roads, spawn, player, traffic (then collect the dead), collision.
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !state.is_running() {
        return events;
    }

    state.time_ticks += 1;
    let speed = state.speed;
    let viewport = state.viewport;

    let [first, second] = &mut state.roads;
    let first_wrapped = first.advance(speed, viewport.height);
    let second_wrapped = second.advance(speed, viewport.height);
    // A strip that wrapped re-seats against the other so the pair stays tiled
    match (first_wrapped, second_wrapped) {
        (true, false) => first.tile_against(second, viewport.height),
        (false, true) => second.tile_against(first, viewport.height),
        _ => {}
    }

    if state.roll_spawn() {
        let x = state.random_lane_x();
        let y = -state.traffic_size.y;
        let id = state.spawn_traffic_at(Vec2::new(x, y));
        log::debug!("Traffic car {} spawned at x={:.1}, y={:.1}", id, x, y);
        events.push(GameEvent::TrafficSpawned { id });
    }

    state.player.advance(speed, viewport.height);

    for car in &mut state.traffic {
        car.advance(speed, viewport.height);
    }

    // Collect in a separate pass so nothing is removed mid-iteration
    let mut score = state.score;
    state.traffic.retain(|car| {
        if car.alive {
            return true;
        }
        score += 1;
        events.push(GameEvent::TrafficPassed { id: car.id, score });
        false
    });
    state.score = score;

    if let Some(hit) = check_all(&state.player, &state.traffic) {
        let id = hit.id;
        state.player.alive = false;
        state.phase = GamePhase::GameOver;
        log::info!("Crashed into car {} after {} ticks, score {}", id, state.time_ticks, state.score);
        events.push(GameEvent::Crashed { id });
    }

    events
}

/// Flip between running and paused. Returns true if the phase changed.
///
/// Has no effect once the game is over.
pub fn toggle_pause(state: &mut GameState) -> bool {
    match state.phase {
        GamePhase::Running => {
            state.phase = GamePhase::Paused;
            log::info!("Paused at tick {}", state.time_ticks);
            true
        }
        GamePhase::Paused => {
            state.phase = GamePhase::Running;
            log::info!("Resumed at tick {}", state.time_ticks);
            true
        }
        GamePhase::GameOver => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::entity::Viewport;

    fn quiet_state() -> GameState {
        let config = GameConfig {
            spawn_chance: 0.0,
            ..Default::default()
        };
        let mut state = GameState::new(&config, Viewport::new(800.0, 600.0), 12345);
        // Park the player in the bottom-left corner, clear of test traffic
        state.player.bounds.pos = Vec2::new(0.0, 480.0);
        state
    }

    #[test]
    fn test_traffic_scored_on_crossing_tick() {
        let mut state = quiet_state();
        let id = state.spawn_traffic_at(Vec2::new(600.0, -120.0));

        for _ in 0..16 {
            tick(&mut state);
        }
        assert_eq!(state.traffic[0].pos().y, 8.0);
        assert!(state.traffic[0].alive);
        assert_eq!(state.score, 0);

        // 74 more ticks bring it to y = 600, still on the edge
        for _ in 0..74 {
            tick(&mut state);
        }
        assert_eq!(state.traffic.len(), 1);
        assert_eq!(state.score, 0);

        let events = tick(&mut state);
        assert!(state.traffic.is_empty());
        assert_eq!(state.score, 1);
        assert_eq!(events, vec![GameEvent::TrafficPassed { id, score: 1 }]);
    }

    #[test]
    fn test_score_counts_every_crossing() {
        let mut state = quiet_state();
        state.spawn_traffic_at(Vec2::new(600.0, 596.0));
        state.spawn_traffic_at(Vec2::new(700.0, 599.0));
        state.spawn_traffic_at(Vec2::new(500.0, 100.0));

        let events = tick(&mut state);
        assert_eq!(state.score, 2);
        assert_eq!(state.traffic.len(), 1);
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, GameEvent::TrafficPassed { .. }))
                .count(),
            2
        );
    }

    #[test]
    fn test_collision_ends_game() {
        let config = GameConfig {
            spawn_chance: 0.0,
            player_size: Vec2::new(60.0, 60.0),
            traffic_size: Vec2::new(60.0, 60.0),
            ..Default::default()
        };
        let mut state = GameState::new(&config, Viewport::new(800.0, 600.0), 1);
        state.player.bounds.pos = Vec2::new(400.0, 300.0);
        // Lands on (390, 290) after one tick
        let id = state.spawn_traffic_at(Vec2::new(390.0, 282.0));

        let events = tick(&mut state);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(!state.player.alive);
        assert_eq!(events.last(), Some(&GameEvent::Crashed { id }));

        // Nothing moves after game over
        let ticks = state.time_ticks;
        let roads = state.roads;
        assert!(tick(&mut state).is_empty());
        assert_eq!(state.time_ticks, ticks);
        assert_eq!(state.roads, roads);
    }

    #[test]
    fn test_roads_advance_each_tick() {
        let mut state = quiet_state();
        tick(&mut state);
        assert_eq!(state.roads[0].offset, 8.0);
        assert_eq!(state.roads[1].offset, -592.0);
    }

    #[test]
    fn test_road_strips_stay_tiled() {
        let mut state = quiet_state();
        for n in 1..=400 {
            tick(&mut state);
            let [a, b] = state.roads;
            assert_eq!((a.offset - b.offset).abs(), 600.0, "tick {}", n);
        }
        // After 80 ticks the first strip has wrapped once and sits above the second
        let mut state = quiet_state();
        for _ in 0..80 {
            tick(&mut state);
        }
        assert_eq!(state.roads[1].offset, 40.0);
        assert_eq!(state.roads[0].offset, -560.0);
    }

    #[test]
    fn test_road_tiling_with_uneven_speed() {
        let config = GameConfig {
            spawn_chance: 0.0,
            speed: 7.0,
            ..Default::default()
        };
        let mut state = GameState::new(&config, Viewport::new(800.0, 600.0), 1);
        state.player.bounds.pos = Vec2::new(0.0, 480.0);
        for _ in 0..1000 {
            tick(&mut state);
            let [a, b] = state.roads;
            assert_eq!((a.offset - b.offset).abs(), 600.0);
            assert!(a.offset >= -600.0 && a.offset < 600.0);
            assert!(b.offset >= -600.0 && b.offset < 600.0);
        }
    }

    #[test]
    fn test_spawns_at_top_edge() {
        let config = GameConfig {
            spawn_chance: 1.0,
            ..Default::default()
        };
        let mut state = GameState::new(&config, Viewport::new(800.0, 600.0), 3);
        let events = tick(&mut state);
        assert_eq!(state.traffic.len(), 1);
        assert!(matches!(events[0], GameEvent::TrafficSpawned { .. }));
        // Spawned at -120, then advanced once in the same tick
        let car = &state.traffic[0];
        assert_eq!(car.pos().y, -112.0);
        assert!(car.pos().x >= 0.0 && car.pos().x < 740.0);
    }

    #[test]
    fn test_paused_state_does_not_tick() {
        let mut state = quiet_state();
        state.spawn_traffic_at(Vec2::new(600.0, 0.0));
        assert!(toggle_pause(&mut state));
        assert_eq!(state.phase, GamePhase::Paused);

        tick(&mut state);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.traffic[0].pos().y, 0.0);

        assert!(toggle_pause(&mut state));
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_pause_ignored_after_game_over() {
        let mut state = quiet_state();
        state.phase = GamePhase::GameOver;
        assert!(!toggle_pause(&mut state));
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let config = GameConfig {
            spawn_chance: 0.2,
            ..Default::default()
        };
        let viewport = Viewport::new(800.0, 600.0);
        let mut state1 = GameState::new(&config, viewport, 99999);
        let mut state2 = GameState::new(&config, viewport, 99999);
        state1.player.bounds.pos = Vec2::new(0.0, 0.0);
        state2.player.bounds.pos = Vec2::new(0.0, 0.0);

        for _ in 0..200 {
            let a = tick(&mut state1);
            let b = tick(&mut state2);
            assert_eq!(a, b);
        }
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.traffic.len(), state2.traffic.len());
        assert_eq!(state1.phase, state2.phase);
    }
}
