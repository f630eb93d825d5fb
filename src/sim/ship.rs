//! Player ship control: steering, thrust, missiles and the gun bonus

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::events::{GameEvent, SoundCue};
use super::spawn;
use super::state::{EntityId, GameState};
use super::tick::TickInput;
use crate::tuning::Tuning;
use crate::{heading_vector, normalize_degrees};

/// Timers owned by the player's ship
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipController {
    /// Ticks until the next missile may be fired
    pub missile_wait: u32,
    /// Cooldown applied after each shot (shorter while the bonus is active)
    pub missile_delay: u32,
    pub gun_bonus_active: bool,
    /// Ticks of gun bonus left
    pub gun_bonus_time: u32,
    /// Ticks until the next gun bonus appears
    pub bonus_wait: u32,
}

impl ShipController {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            missile_wait: 0,
            missile_delay: tuning.missile_delay,
            gun_bonus_active: false,
            gun_bonus_time: 0,
            bonus_wait: tuning.bonus_period,
        }
    }

    /// Shorten the missile cooldown for `bonus_duration` ticks.
    /// A second pickup restarts the timer; effects never stack.
    pub fn activate_gun_bonus(&mut self, tuning: &Tuning) {
        self.gun_bonus_active = true;
        self.gun_bonus_time = tuning.bonus_duration;
        self.missile_delay = tuning.missile_delay_bonus;
    }

    pub fn deactivate_gun_bonus(&mut self, tuning: &Tuning) {
        self.gun_bonus_active = false;
        self.gun_bonus_time = 0;
        self.missile_delay = tuning.missile_delay;
    }
}

/// Apply one tick of player input and advance the ship's timers
pub fn update(state: &mut GameState, input: &TickInput) {
    let tuning = &state.tuning;
    let Some(ship) = state.registry.get_mut(state.ship_id) else {
        return;
    };

    if input.rotate_left {
        ship.angle = normalize_degrees(ship.angle - tuning.ship_rotation_step);
    }
    if input.rotate_right {
        ship.angle = normalize_degrees(ship.angle + tuning.ship_rotation_step);
    }

    if input.thrust {
        let max = tuning.ship_velocity_max;
        ship.vel += heading_vector(ship.angle) * tuning.ship_velocity_step;
        ship.vel = ship.vel.clamp(Vec2::splat(-max), Vec2::splat(max));
    }

    let (pos, angle) = (ship.pos, ship.angle);

    if input.thrust {
        state.events.push(GameEvent::Sound {
            cue: SoundCue::Thrust,
        });
        spawn::spawn_jet_stream(state, pos, angle);
    }

    if state.ship.missile_wait > 0 {
        state.ship.missile_wait -= 1;
    }

    if input.fire && state.ship.missile_wait == 0 {
        let bonus = state.ship.gun_bonus_active;
        spawn::spawn_missile(state, pos, angle, bonus);
        state.ship.missile_wait = state.ship.missile_delay;
    }

    if state.ship.gun_bonus_active {
        state.ship.gun_bonus_time = state.ship.gun_bonus_time.saturating_sub(1);
        if state.ship.gun_bonus_time == 0 {
            state.ship.deactivate_gun_bonus(&state.tuning);
            log::debug!("gun bonus expired");
            state.events.push(GameEvent::GunBonusExpired);
        }
    }

    if state.ship.bonus_wait > 0 {
        state.ship.bonus_wait -= 1;
    }
    if state.ship.bonus_wait == 0 {
        let id = spawn::spawn_gun_bonus(state);
        log::debug!("gun bonus {:?} spawned", id);
        state.ship.bonus_wait = state.tuning.bonus_period;
    }
}

/// Gun bonus picked up by `collector`. Only the player's ship benefits;
/// anything else is ignored and `false` returned.
pub fn collect_gun_bonus(state: &mut GameState, collector: EntityId) -> bool {
    if collector != state.ship_id || !state.registry.contains(collector) {
        log::debug!("gun bonus activation on {:?} ignored", collector);
        return false;
    }
    state.ship.activate_gun_bonus(&state.tuning);
    state.events.push(GameEvent::GunBonusActivated {
        ticks: state.ship.gun_bonus_time,
    });
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::EntityKind;

    fn fire() -> TickInput {
        TickInput {
            fire: true,
            ..Default::default()
        }
    }

    fn pickup(state: &mut GameState) -> bool {
        let ship = state.ship_id;
        collect_gun_bonus(state, ship)
    }

    fn missiles(state: &GameState) -> usize {
        state.registry.count(EntityKind::Missile)
    }

    #[test]
    fn test_rotation_steps_and_wraps() {
        let mut state = GameState::new(1);
        let left = TickInput {
            rotate_left: true,
            ..Default::default()
        };
        update(&mut state, &left);
        assert_eq!(state.registry.get(state.ship_id).unwrap().angle, 357.0);

        let right = TickInput {
            rotate_right: true,
            ..Default::default()
        };
        update(&mut state, &right);
        update(&mut state, &right);
        assert_eq!(state.registry.get(state.ship_id).unwrap().angle, 3.0);
    }

    #[test]
    fn test_thrust_accelerates_along_heading_and_clamps() {
        let mut state = GameState::new(1);
        let thrust = TickInput {
            thrust: true,
            ..Default::default()
        };
        update(&mut state, &thrust);
        let vel = state.registry.get(state.ship_id).unwrap().vel;
        assert!(vel.x.abs() < 1e-6);
        assert!((vel.y + 0.05).abs() < 1e-6);
        assert_eq!(state.registry.count(EntityKind::JetStream), 1);

        for _ in 0..200 {
            update(&mut state, &thrust);
        }
        let vel = state.registry.get(state.ship_id).unwrap().vel;
        assert_eq!(vel.y, -3.0);
    }

    #[test]
    fn test_clamp_is_per_axis() {
        let mut state = GameState::new(1);
        {
            let ship = state.registry.get_mut(state.ship_id).unwrap();
            ship.angle = 45.0;
            ship.vel = Vec2::new(2.99, -2.99);
        }
        let thrust = TickInput {
            thrust: true,
            ..Default::default()
        };
        update(&mut state, &thrust);
        let vel = state.registry.get(state.ship_id).unwrap().vel;
        assert_eq!(vel, Vec2::new(3.0, -3.0));
    }

    #[test]
    fn test_missile_cooldown_boundary() {
        let mut state = GameState::new(1);

        // tick 0
        update(&mut state, &fire());
        assert_eq!(missiles(&state), 1);
        assert_eq!(state.ship.missile_wait, 25);

        // ticks 1..=24 are blocked
        for _ in 1..25 {
            update(&mut state, &fire());
            assert_eq!(missiles(&state), 1);
        }
        assert_eq!(state.ship.missile_wait, 1);

        // tick 25
        update(&mut state, &fire());
        assert_eq!(missiles(&state), 2);
    }

    #[test]
    fn test_bonus_shortens_cooldown_then_expires() {
        let mut state = GameState::new(1);
        assert!(pickup(&mut state));
        assert_eq!(state.ship.missile_delay, 8);

        update(&mut state, &fire());
        assert_eq!(state.ship.missile_wait, 8);

        for _ in 1..500 {
            update(&mut state, &TickInput::default());
        }
        assert!(!state.ship.gun_bonus_active);
        assert_eq!(state.ship.missile_delay, 25);
        assert!(state.events.contains(&GameEvent::GunBonusExpired));
    }

    #[test]
    fn test_bonus_does_not_stack() {
        let mut state = GameState::new(1);
        pickup(&mut state);
        for _ in 0..100 {
            update(&mut state, &TickInput::default());
        }
        assert_eq!(state.ship.gun_bonus_time, 400);

        pickup(&mut state);
        assert_eq!(state.ship.gun_bonus_time, 500);
        assert_eq!(state.ship.missile_delay, 8);
    }

    #[test]
    fn test_bonus_on_non_ship_is_ignored() {
        let mut state = GameState::new(1);
        let rock = spawn::spawn_asteroid(&mut state, Vec2::ZERO, crate::sim::AsteroidSize::Small);
        assert!(!collect_gun_bonus(&mut state, rock));
        assert!(!state.ship.gun_bonus_active);
    }

    #[test]
    fn test_bonus_missiles_are_flagged() {
        let mut state = GameState::new(1);
        pickup(&mut state);
        update(&mut state, &fire());
        let missile = state
            .registry
            .entities()
            .iter()
            .find(|e| e.kind() == EntityKind::Missile)
            .unwrap();
        assert!(matches!(
            missile.body,
            crate::sim::Body::Missile { bonus: true, .. }
        ));
    }

    #[test]
    fn test_gun_bonus_spawns_every_period() {
        let mut state = GameState::new(1);
        for _ in 0..749 {
            update(&mut state, &TickInput::default());
        }
        assert_eq!(state.registry.count(EntityKind::GunBonus), 0);

        update(&mut state, &TickInput::default());
        assert_eq!(state.registry.count(EntityKind::GunBonus), 1);
        assert_eq!(state.ship.bonus_wait, 750);
    }
}
