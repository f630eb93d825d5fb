//! Level progression and game over

use super::events::{GameEvent, SoundCue};
use super::spawn;
use super::state::{AsteroidSize, GamePhase, GameState};

/// Start the next level if no wave is in flight.
///
/// Spawns `level` large asteroids and `level` alien ships away from the
/// ship. Returns `false` (and changes nothing) while either wave is still
/// alive or after the game has ended.
pub fn advance(state: &mut GameState) -> bool {
    if state.is_over() {
        return false;
    }
    if state.asteroid_aims || state.alienship_aims {
        log::debug!(
            "advance ignored: wave in flight (asteroids {}, aliens {})",
            state.registry.asteroid_total(),
            state.registry.alienship_total()
        );
        return false;
    }

    state.level += 1;
    let level = state.level;

    for _ in 0..level {
        let pos = spawn::random_spawn_point(state);
        spawn::spawn_asteroid(state, pos, AsteroidSize::Large);
    }
    for _ in 0..level {
        let pos = spawn::random_spawn_point(state);
        spawn::spawn_alien_ship(state, pos);
    }

    state.asteroid_aims = true;
    state.alienship_aims = true;

    state.events.push(GameEvent::LevelStarted { level });
    state.events.push(GameEvent::Notice {
        text: format!("Level {level}"),
        ticks: state.tuning.level_notice_ticks,
    });
    if level > 1 {
        state.events.push(GameEvent::Sound {
            cue: SoundCue::LevelUp,
        });
    }

    log::info!("Level {} started (score {})", level, state.score);
    true
}

/// Asteroid wave cleared
pub fn asteroids_cleared(state: &mut GameState) {
    state.asteroid_aims = false;
    advance(state);
}

/// Alien wave cleared
pub fn alien_ships_cleared(state: &mut GameState) {
    state.alienship_aims = false;
    advance(state);
}

/// Terminal transition on ship death. Runs at most once.
pub fn end(state: &mut GameState) {
    if state.is_over() {
        return;
    }
    state.phase = GamePhase::GameOver;

    let linger_ticks = state.tuning.game_over_ticks;
    state.events.push(GameEvent::Notice {
        text: "Game Over".to_string(),
        ticks: linger_ticks,
    });
    state.events.push(GameEvent::GameOver {
        score: state.score,
        level: state.level,
        linger_ticks,
    });

    log::info!("Game over at level {} with score {}", state.level, state.score);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::EntityKind;

    #[test]
    fn test_first_advance_spawns_level_one() {
        let mut state = GameState::new(42);
        assert!(advance(&mut state));

        assert_eq!(state.level, 1);
        assert_eq!(state.registry.asteroid_total(), 1);
        assert_eq!(state.registry.alienship_total(), 1);
        assert!(state.asteroid_aims && state.alienship_aims);
        assert!(state.events.contains(&GameEvent::Notice {
            text: "Level 1".to_string(),
            ticks: 150,
        }));
        assert!(!state.events.contains(&GameEvent::Sound {
            cue: SoundCue::LevelUp
        }));
    }

    #[test]
    fn test_advance_is_idempotent_while_wave_in_flight() {
        let mut state = GameState::new(42);
        assert!(advance(&mut state));
        assert!(!advance(&mut state));

        assert_eq!(state.level, 1);
        assert_eq!(state.registry.count(EntityKind::Asteroid), 1);
        assert_eq!(state.registry.count(EntityKind::AlienShip), 1);
    }

    #[test]
    fn test_half_cleared_wave_does_not_advance() {
        let mut state = GameState::new(42);
        advance(&mut state);

        state.asteroid_aims = false;
        assert!(!advance(&mut state));
        assert_eq!(state.level, 1);
    }

    #[test]
    fn test_later_levels_scale_linearly_and_play_cue() {
        let mut state = GameState::new(42);
        advance(&mut state);
        state.asteroid_aims = false;
        alien_ships_cleared(&mut state);

        assert_eq!(state.level, 2);
        assert_eq!(state.registry.asteroid_total(), 3); // one left from level 1
        assert_eq!(state.registry.alienship_total(), 3);
        assert!(state.events.contains(&GameEvent::Sound {
            cue: SoundCue::LevelUp
        }));
    }

    #[test]
    fn test_wave_spawns_keep_clear_of_ship() {
        let mut state = GameState::new(8);
        advance(&mut state);
        let ship = state.ship_pos();
        for e in state.registry.entities() {
            if e.kind() == EntityKind::Ship {
                continue;
            }
            // summed wrapped offsets from the ship are at least the buffer
            let dx = (e.pos.x - ship.x).rem_euclid(1024.0);
            let dy = (e.pos.y - ship.y).rem_euclid(768.0);
            assert!(dx + dy >= 99.9, "{:?} spawned too close", e.kind());
        }
    }

    #[test]
    fn test_end_is_terminal_and_once() {
        let mut state = GameState::new(42);
        advance(&mut state);
        end(&mut state);
        end(&mut state);

        assert_eq!(state.phase, GamePhase::GameOver);
        let overs = state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .count();
        assert_eq!(overs, 1);

        state.asteroid_aims = false;
        state.alienship_aims = false;
        assert!(!advance(&mut state));
        assert_eq!(state.level, 1);
    }
}
