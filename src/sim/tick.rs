//! Fixed timestep simulation tick
//!
//! Order within a tick: ship control, motion and wrap, lifetime expiry,
//! overlap detection (external), collision resolution. Level changes and
//! game over fire from inside the collision cascades.

use super::collision;
use super::motion;
use super::registry::Registry;
use super::ship;
use super::state::{EntityId, GameState};

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
    pub fire: bool,
}

/// Supplies the pairs of entities whose bounding areas currently overlap.
///
/// Queried once per tick, after movement, with the registry's collidable
/// entities. Any closure `FnMut(&Registry) -> Vec<(EntityId, EntityId)>`
/// works as a source.
pub trait OverlapSource {
    fn overlapping_pairs(&mut self, registry: &Registry) -> Vec<(EntityId, EntityId)>;
}

impl<F> OverlapSource for F
where
    F: FnMut(&Registry) -> Vec<(EntityId, EntityId)>,
{
    fn overlapping_pairs(&mut self, registry: &Registry) -> Vec<(EntityId, EntityId)> {
        self(registry)
    }
}

/// A source that never reports contact
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverlaps;

impl OverlapSource for NoOverlaps {
    fn overlapping_pairs(&mut self, _registry: &Registry) -> Vec<(EntityId, EntityId)> {
        Vec::new()
    }
}

/// Advance the game state by one tick. Does nothing once the game is over.
pub fn tick<S: OverlapSource + ?Sized>(state: &mut GameState, input: &TickInput, overlaps: &mut S) {
    if state.is_over() {
        return;
    }

    state.time_ticks += 1;

    ship::update(state, input);

    let (width, height) = state.tuning.screen_size();
    motion::step(&mut state.registry, width, height);
    state.registry.expire(&mut state.events);

    let pairs = overlaps.overlapping_pairs(&state.registry);
    collision::resolve(state, &pairs);
}
