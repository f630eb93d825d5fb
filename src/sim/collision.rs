//! Collision resolution
//!
//! Detection happens elsewhere; this module receives the overlapping pairs
//! and decides who dies and what the deaths set off. Each entity kind maps
//! to a death-cascade function in `death_cascade`.

use super::events::{GameEvent, SoundCue};
use super::level;
use super::ship::collect_gun_bonus;
use super::spawn;
use super::state::{Body, Entity, EntityId, EntityKind, GameState};

/// Handler run when an entity of some kind is destroyed (or, for alien
/// ships, hit)
type DeathCascade = fn(&mut GameState, EntityId);

/// Kind → cascade table
fn death_cascade(kind: EntityKind) -> DeathCascade {
    match kind {
        EntityKind::Ship => ship_destroyed,
        EntityKind::Asteroid => asteroid_destroyed,
        EntityKind::AlienShip => alien_ship_hit,
        EntityKind::GunBonus => gun_bonus_destroyed,
        EntityKind::Missile | EntityKind::JetStream | EntityKind::Explosion => explode,
    }
}

/// Normalize to (low, high), drop self-pairs and duplicates, and sort so
/// resolution order does not depend on the detector.
pub fn normalize_pairs(pairs: &[(EntityId, EntityId)]) -> Vec<(EntityId, EntityId)> {
    let mut out: Vec<_> = pairs
        .iter()
        .filter(|(a, b)| a != b)
        .map(|&(a, b)| if a < b { (a, b) } else { (b, a) })
        .collect();
    out.sort_unstable();
    out.dedup();
    out
}

/// Apply the contact rules to every overlapping pair.
///
/// Pairs naming an entity that is already gone (killed earlier this tick,
/// or never existed) are skipped. Resolution stops as soon as the ship
/// dies.
pub fn resolve(state: &mut GameState, pairs: &[(EntityId, EntityId)]) {
    for (a, b) in normalize_pairs(pairs) {
        if state.is_over() {
            break;
        }

        let (Some(kind_a), Some(kind_b)) = (state.registry.kind_of(a), state.registry.kind_of(b))
        else {
            log::trace!("pair ({:?}, {:?}) references a dead entity", a, b);
            continue;
        };

        if !kind_a.is_active_collider() && !kind_b.is_active_collider() {
            continue;
        }

        if kind_a == EntityKind::GunBonus || kind_b == EntityKind::GunBonus {
            let (bonus, other) = if kind_a == EntityKind::GunBonus { (a, b) } else { (b, a) };
            if state.registry.kind_of(other) == Some(EntityKind::Ship) {
                collect_gun_bonus(state, other);
            }
            kill(state, bonus);
            continue;
        }

        // The ship goes last so its victim's cascade still scores
        let (first, second) = if kind_a == EntityKind::Ship { (b, a) } else { (a, b) };
        kill(state, first);
        kill(state, second);
    }
}

/// Dispatch a death through the cascade table. Dead ids are a no-op.
pub fn kill(state: &mut GameState, id: EntityId) {
    if state.is_over() {
        return;
    }
    match state.registry.kind_of(id) {
        Some(kind) => death_cascade(kind)(state, id),
        None => log::trace!("death of {:?} ignored, already gone", id),
    }
}

/// Remove an entity and leave an explosion where it was
fn explode_and_remove(state: &mut GameState, id: EntityId) -> Option<Entity> {
    let entity = state.registry.remove(id, &mut state.events)?;
    spawn::spawn_explosion(state, entity.pos);
    Some(entity)
}

fn explode(state: &mut GameState, id: EntityId) {
    explode_and_remove(state, id);
}

fn ship_destroyed(state: &mut GameState, id: EntityId) {
    if explode_and_remove(state, id).is_some() {
        level::end(state);
    }
}

fn gun_bonus_destroyed(state: &mut GameState, id: EntityId) {
    if state.registry.remove(id, &mut state.events).is_some() {
        state.events.push(GameEvent::Sound {
            cue: SoundCue::GunBonus,
        });
    }
}

fn asteroid_destroyed(state: &mut GameState, id: EntityId) {
    let Some(entity) = explode_and_remove(state, id) else {
        return;
    };
    let Body::Asteroid { size } = entity.body else {
        return;
    };

    state.add_score(size.points(state.tuning.asteroid_points));

    if let Some(child) = size.smaller() {
        for _ in 0..state.tuning.asteroid_spawn {
            spawn::spawn_asteroid(state, entity.pos, child);
        }
    }
    log::trace!(
        "asteroid {:?} ({:?}) destroyed, {} left",
        id,
        size,
        state.registry.asteroid_total()
    );

    if state.registry.asteroid_total() == 0 {
        log::debug!("asteroid wave cleared");
        level::asteroids_cleared(state);
    }
}

/// One hit on an alien ship. Only the hit that exhausts the armour destroys
/// it and can clear the alien wave (a surviving alien keeps the count above
/// zero, so checking on every hit would change nothing).
fn alien_ship_hit(state: &mut GameState, id: EntityId) {
    let Some(entity) = state.registry.get_mut(id) else {
        return;
    };
    let Body::AlienShip { armour, .. } = &mut entity.body else {
        return;
    };
    *armour = armour.saturating_sub(1);
    if *armour > 0 {
        log::trace!("alien ship {:?} hit, armour {}", id, armour);
        return;
    }

    explode_and_remove(state, id);
    state.add_score(state.tuning.alien_points);

    if state.registry.alienship_total() == 0 {
        log::debug!("alien wave cleared");
        level::alien_ships_cleared(state);
    }
}
