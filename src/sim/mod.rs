//! Fixed-tick simulation module
//!
//! All gameplay logic lives here:
//! - Fixed timestep only (one call to `tick` per frame)
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering, audio or input-device dependencies

pub mod collision;
pub mod coords;
pub mod events;
pub mod level;
pub mod motion;
pub mod registry;
pub mod ship;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{kill, resolve};
pub use coords::random_coords;
pub use events::{GameEvent, SoundCue};
pub use level::{advance, end};
pub use registry::Registry;
pub use ship::{ShipController, collect_gun_bonus};
pub use state::{
    AsteroidSize, Body, Effect, EffectKind, Entity, EntityId, EntityKind, GamePhase, GameState,
};
pub use tick::{NoOverlaps, OverlapSource, TickInput, tick};
