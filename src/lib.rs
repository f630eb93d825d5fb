//! Star Battle - an asteroid shooter simulation core
//!
//! Core modules:
//! - `sim`: Fixed-tick simulation (entities, collision resolution, levels)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, audio and overlap detection live outside this crate; the
//! simulation reports everything they need through `sim::GameEvent`.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICKS_PER_SECOND: u32 = 50;

    /// Screen dimensions (y grows downward)
    pub const SCREEN_WIDTH: u32 = 1024;
    pub const SCREEN_HEIGHT: u32 = 768;

    /// Ship handling
    pub const SHIP_ROTATION_STEP: f32 = 3.0; // degrees per tick
    pub const SHIP_VELOCITY_STEP: f32 = 0.05;
    pub const SHIP_VELOCITY_MAX: f32 = 3.0;

    /// Missile cooldown in ticks, normal and while the gun bonus is active
    pub const MISSILE_DELAY: u32 = 25;
    pub const MISSILE_DELAY_BONUS: u32 = 8;
    /// Gap between the ship and a freshly launched missile
    pub const MISSILE_BUFFER: f32 = 60.0;
    pub const MISSILE_SPEED: f32 = 10.0;
    pub const MISSILE_LIFETIME: u32 = 25;

    /// Gun bonus timings (ticks)
    pub const BONUS_PERIOD: u32 = 15 * TICKS_PER_SECOND;
    pub const BONUS_DURATION: u32 = 10 * TICKS_PER_SECOND;
    pub const BONUS_LIFETIME: u32 = 7 * TICKS_PER_SECOND;

    /// Asteroids
    pub const ASTEROID_SPEED: f32 = 2.0;
    pub const ASTEROID_POINTS: u32 = 30;
    /// Children spawned when a non-small asteroid breaks
    pub const ASTEROID_SPAWN: u32 = 2;

    /// Alien ships
    pub const ALIEN_SPEED: f32 = 1.0;
    pub const ALIEN_POINTS: u32 = 50;
    pub const ALIEN_ROTATION_STEP: f32 = 1.0;
    pub const ALIEN_ARMOUR: u8 = 2;
    pub const ALIEN_SKINS: u8 = 6;

    /// Minimum offset from the ship for wave and bonus placement
    pub const SPAWN_BUFFER: u32 = 100;

    /// Cosmetic effects
    pub const JET_STREAM_BUFFER: f32 = 48.0;
    pub const JET_STREAM_LIFETIME: u32 = 2;
    pub const EXPLOSION_LIFETIME: u32 = 9 * 4; // 9 frames, 4 ticks each

    /// On-screen notices (ticks)
    pub const LEVEL_NOTICE_TICKS: u32 = 3 * TICKS_PER_SECOND;
    pub const GAME_OVER_TICKS: u32 = 5 * TICKS_PER_SECOND;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let a = angle.rem_euclid(360.0);
    if a >= 360.0 { 0.0 } else { a }
}

/// Unit vector for a heading in degrees (0 = up, clockwise, screen y down)
#[inline]
pub fn heading_vector(angle: f32) -> Vec2 {
    let (sin, cos) = angle.to_radians().sin_cos();
    Vec2::new(sin, -cos)
}

/// Wrap a coordinate into [0, extent)
#[inline]
pub fn wrap_coord(value: f32, extent: f32) -> f32 {
    let v = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if v >= extent { 0.0 } else { v }
}
