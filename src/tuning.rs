//! Game balance tuning
//!
//! Every gameplay constant lives here so a driver can override it from a
//! JSON file. Missing fields fall back to the values in `consts`. Timers
//! are counted in ticks at the fixed `TICKS_PER_SECOND` rate.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Data-driven game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Screen ===
    pub screen_width: u32,
    pub screen_height: u32,

    // === Ship ===
    /// Degrees turned per tick while a rotate key is held
    pub ship_rotation_step: f32,
    /// Velocity added per tick of thrust
    pub ship_velocity_step: f32,
    /// Per-axis velocity cap
    pub ship_velocity_max: f32,

    // === Missiles ===
    pub missile_delay: u32,
    pub missile_delay_bonus: u32,
    pub missile_buffer: f32,
    pub missile_speed: f32,
    pub missile_lifetime: u32,

    // === Gun bonus ===
    pub bonus_period: u32,
    pub bonus_duration: u32,
    pub bonus_lifetime: u32,

    // === Asteroids ===
    pub asteroid_speed: f32,
    pub asteroid_points: u32,
    pub asteroid_spawn: u32,

    // === Alien ships ===
    pub alien_speed: f32,
    pub alien_points: u32,
    pub alien_rotation_step: f32,
    pub alien_armour: u8,

    // === Placement & effects ===
    pub spawn_buffer: u32,
    pub jet_stream_buffer: f32,
    pub jet_stream_lifetime: u32,
    pub explosion_lifetime: u32,
    pub level_notice_ticks: u32,
    pub game_over_ticks: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            ship_rotation_step: SHIP_ROTATION_STEP,
            ship_velocity_step: SHIP_VELOCITY_STEP,
            ship_velocity_max: SHIP_VELOCITY_MAX,

            missile_delay: MISSILE_DELAY,
            missile_delay_bonus: MISSILE_DELAY_BONUS,
            missile_buffer: MISSILE_BUFFER,
            missile_speed: MISSILE_SPEED,
            missile_lifetime: MISSILE_LIFETIME,

            bonus_period: BONUS_PERIOD,
            bonus_duration: BONUS_DURATION,
            bonus_lifetime: BONUS_LIFETIME,

            asteroid_speed: ASTEROID_SPEED,
            asteroid_points: ASTEROID_POINTS,
            asteroid_spawn: ASTEROID_SPAWN,

            alien_speed: ALIEN_SPEED,
            alien_points: ALIEN_POINTS,
            alien_rotation_step: ALIEN_ROTATION_STEP,
            alien_armour: ALIEN_ARMOUR,

            spawn_buffer: SPAWN_BUFFER,
            jet_stream_buffer: JET_STREAM_BUFFER,
            jet_stream_lifetime: JET_STREAM_LIFETIME,
            explosion_lifetime: EXPLOSION_LIFETIME,
            level_notice_ticks: LEVEL_NOTICE_TICKS,
            game_over_ticks: GAME_OVER_TICKS,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to pretty JSON (handy for writing a starter file)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Whether the values can drive a simulation without degenerate math
    pub fn is_valid(&self) -> bool {
        self.screen_width > 0
            && self.screen_height > 0
            && self.alien_armour > 0
            && self.spawn_buffer <= self.screen_width.min(self.screen_height)
            && self.ship_velocity_max >= 0.0
    }

    /// Screen dimensions as floats
    pub fn screen_size(&self) -> (f32, f32) {
        (self.screen_width as f32, self.screen_height as f32)
    }

    /// Load tuning from a JSON file, falling back to defaults on any problem
    pub fn load_or_default(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read tuning file {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(tuning) if tuning.is_valid() => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Ok(_) => {
                log::warn!("Tuning in {} is out of range, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::error!("Invalid tuning file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
