//! Entity construction
//!
//! Each helper builds an entity from the tuning and the seeded RNG, then
//! hands it to the registry, which reports the spawn.

use glam::Vec2;
use rand::Rng;

use super::coords::{random_coords, random_drift};
use super::events::{GameEvent, SoundCue};
use super::state::{AsteroidSize, Body, EffectKind, Entity, EntityId, GameState};
use crate::consts::ALIEN_SKINS;
use crate::heading_vector;

/// Asteroid with a random drift; smaller rocks move faster
pub fn spawn_asteroid(state: &mut GameState, pos: Vec2, size: AsteroidSize) -> EntityId {
    let speed = state.tuning.asteroid_speed / size.value() as f32;
    let vel = random_drift(&mut state.rng, speed);
    let entity = Entity::new(Body::Asteroid { size }, pos).with_velocity(vel);
    state.registry.insert(entity, &mut state.events)
}

/// Alien ship with random drift, spin direction and skin
pub fn spawn_alien_ship(state: &mut GameState, pos: Vec2) -> EntityId {
    let vel = random_drift(&mut state.rng, state.tuning.alien_speed);
    let rotation_direction: i8 = if state.rng.random_bool(0.5) { 1 } else { -1 };
    let skin = state.rng.random_range(0..ALIEN_SKINS);
    let entity = Entity::new(
        Body::AlienShip {
            armour: state.tuning.alien_armour,
            rotation_direction,
            skin,
        },
        pos,
    )
    .with_velocity(vel)
    .with_spin(f32::from(rotation_direction) * state.tuning.alien_rotation_step);
    state.registry.insert(entity, &mut state.events)
}

/// Missile launched ahead of the ship along its heading
pub fn spawn_missile(state: &mut GameState, ship_pos: Vec2, angle: f32, bonus: bool) -> EntityId {
    let heading = heading_vector(angle);
    let entity = Entity::new(
        Body::Missile {
            lifetime: state.tuning.missile_lifetime,
            bonus,
        },
        ship_pos + heading * state.tuning.missile_buffer,
    )
    .with_velocity(heading * state.tuning.missile_speed)
    .with_angle(angle);
    state.events.push(GameEvent::Sound {
        cue: SoundCue::MissileLaunch,
    });
    state.registry.insert(entity, &mut state.events)
}

/// Gun bonus somewhere away from the ship's current position
pub fn spawn_gun_bonus(state: &mut GameState) -> EntityId {
    let pos = random_spawn_point(state);
    let entity = Entity::new(
        Body::GunBonus {
            lifetime: state.tuning.bonus_lifetime,
        },
        pos,
    );
    state.events.push(GameEvent::Sound {
        cue: SoundCue::GunBonus,
    });
    state.registry.insert(entity, &mut state.events)
}

/// Random placement at least `spawn_buffer` (in summed offsets) from the ship
pub fn random_spawn_point(state: &mut GameState) -> Vec2 {
    let reference = state.ship_pos();
    random_coords(
        &mut state.rng,
        state.tuning.spawn_buffer,
        reference,
        state.tuning.screen_width,
        state.tuning.screen_height,
    )
}

/// Exhaust plume behind the ship
pub fn spawn_jet_stream(state: &mut GameState, ship_pos: Vec2, angle: f32) -> EntityId {
    let pos = ship_pos - heading_vector(angle) * state.tuning.jet_stream_buffer;
    state.registry.insert_effect(
        EffectKind::JetStream,
        pos,
        angle,
        state.tuning.jet_stream_lifetime,
        &mut state.events,
    )
}

pub fn spawn_explosion(state: &mut GameState, pos: Vec2) -> EntityId {
    state.events.push(GameEvent::Sound {
        cue: SoundCue::Explosion,
    });
    state.registry.insert_effect(
        EffectKind::Explosion,
        pos,
        0.0,
        state.tuning.explosion_lifetime,
        &mut state.events,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::EntityKind;

    #[test]
    fn test_missile_starts_ahead_of_ship() {
        let mut state = GameState::new(1);
        let id = spawn_missile(&mut state, Vec2::new(500.0, 400.0), 90.0, false);
        let m = state.registry.get(id).unwrap();

        assert!((m.pos.x - 560.0).abs() < 1e-3);
        assert!((m.pos.y - 400.0).abs() < 1e-3);
        assert!((m.vel.x - 10.0).abs() < 1e-3);
        assert!(m.vel.y.abs() < 1e-3);
        assert!(matches!(m.body, Body::Missile { lifetime: 25, bonus: false }));
    }

    #[test]
    fn test_bonus_missile_reports_variant() {
        let mut state = GameState::new(1);
        spawn_missile(&mut state, Vec2::ZERO, 0.0, true);
        assert!(state.events.iter().any(|e| matches!(
            e,
            GameEvent::Spawned {
                kind: EntityKind::Missile,
                variant: 1,
                ..
            }
        )));
    }

    #[test]
    fn test_asteroid_speed_scales_with_size() {
        let mut state = GameState::new(11);
        for _ in 0..50 {
            let small = spawn_asteroid(&mut state, Vec2::ZERO, AsteroidSize::Small);
            let large = spawn_asteroid(&mut state, Vec2::ZERO, AsteroidSize::Large);
            let vs = state.registry.get(small).unwrap().vel;
            let vl = state.registry.get(large).unwrap().vel;
            assert!(vs.x.abs() < 2.0 && vs.y.abs() < 2.0);
            assert!(vl.x.abs() < 2.0 / 3.0 && vl.y.abs() < 2.0 / 3.0);
        }
        assert_eq!(state.registry.asteroid_total(), 100);
    }

    #[test]
    fn test_alien_ship_spins_one_way() {
        let mut state = GameState::new(5);
        let id = spawn_alien_ship(&mut state, Vec2::new(10.0, 10.0));
        let alien = state.registry.get(id).unwrap();
        let Body::AlienShip {
            armour,
            rotation_direction,
            skin,
        } = alien.body
        else {
            panic!("not an alien ship");
        };
        assert_eq!(armour, 2);
        assert_eq!(alien.spin, f32::from(rotation_direction));
        assert!(skin < ALIEN_SKINS);
        assert_eq!(state.registry.alienship_total(), 1);
    }

    #[test]
    fn test_jet_stream_trails_ship() {
        let mut state = GameState::new(1);
        spawn_jet_stream(&mut state, Vec2::new(300.0, 300.0), 0.0);
        let effect = &state.registry.effects()[0];
        assert_eq!(effect.kind, EffectKind::JetStream);
        assert!((effect.pos.y - 348.0).abs() < 1e-3);
        assert_eq!(effect.lifetime, 2);
    }

    #[test]
    fn test_gun_bonus_lands_on_screen() {
        let mut state = GameState::new(21);
        for _ in 0..20 {
            let id = spawn_gun_bonus(&mut state);
            let pos = state.registry.get(id).unwrap().pos;
            assert!((0.0..1024.0).contains(&pos.x));
            assert!((0.0..768.0).contains(&pos.y));
        }
    }
}
