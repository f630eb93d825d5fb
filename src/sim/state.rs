//! Game state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::events::GameEvent;
use super::registry::Registry;
use super::ship::ShipController;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Ship destroyed; terminal
    GameOver,
}

/// Stable identity of a live entity or effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Kind tag shared by collidable entities and cosmetic effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Ship,
    Asteroid,
    AlienShip,
    Missile,
    GunBonus,
    JetStream,
    Explosion,
}

impl EntityKind {
    /// Kinds that act on what they touch. A contact with neither side
    /// active (rock on rock, rock on alien) has no effect.
    pub fn is_active_collider(self) -> bool {
        matches!(self, EntityKind::Ship | EntityKind::Missile)
    }
}

/// Asteroid sizes; the discriminant is the divisor for speed and points
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AsteroidSize {
    Small = 1,
    Medium = 2,
    Large = 3,
}

impl AsteroidSize {
    pub fn value(self) -> u32 {
        self as u32
    }

    /// Size of the fragments this asteroid breaks into, if any
    pub fn smaller(self) -> Option<Self> {
        match self {
            AsteroidSize::Large => Some(AsteroidSize::Medium),
            AsteroidSize::Medium => Some(AsteroidSize::Small),
            AsteroidSize::Small => None,
        }
    }

    /// Points for destroying an asteroid of this size (floor of base / size)
    pub fn points(self, base: u32) -> u32 {
        base / self.value()
    }

    /// Half of the sprite's bounding box edge
    pub fn half_extent(self) -> f32 {
        match self {
            AsteroidSize::Small => 12.0,
            AsteroidSize::Medium => 22.0,
            AsteroidSize::Large => 40.0,
        }
    }
}

/// Per-kind data of a collidable entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Body {
    Ship,
    Asteroid {
        size: AsteroidSize,
    },
    AlienShip {
        /// Hits left before destruction
        armour: u8,
        /// +1 clockwise, -1 counter-clockwise
        rotation_direction: i8,
        /// Image index chosen at spawn
        skin: u8,
    },
    Missile {
        lifetime: u32,
        /// Fired while the gun bonus was active (different image only)
        bonus: bool,
    },
    GunBonus {
        lifetime: u32,
    },
}

impl Body {
    pub fn kind(&self) -> EntityKind {
        match self {
            Body::Ship => EntityKind::Ship,
            Body::Asteroid { .. } => EntityKind::Asteroid,
            Body::AlienShip { .. } => EntityKind::AlienShip,
            Body::Missile { .. } => EntityKind::Missile,
            Body::GunBonus { .. } => EntityKind::GunBonus,
        }
    }
}

/// A collidable simulated object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Heading in degrees, 0 = up, clockwise
    pub angle: f32,
    /// Degrees added to `angle` each tick
    pub spin: f32,
    pub body: Body,
}

impl Entity {
    /// Create an unregistered entity; the registry assigns its id
    pub fn new(body: Body, pos: Vec2) -> Self {
        Self {
            id: EntityId(0),
            pos,
            vel: Vec2::ZERO,
            angle: 0.0,
            spin: 0.0,
            body,
        }
    }

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_spin(mut self, spin: f32) -> Self {
        self.spin = spin;
        self
    }

    pub fn kind(&self) -> EntityKind {
        self.body.kind()
    }

    /// Half size of the bounding box used for screen wrapping and detection
    pub fn half_extent(&self) -> Vec2 {
        let h = match self.body {
            Body::Ship => 20.0,
            Body::Asteroid { size } => size.half_extent(),
            Body::AlienShip { .. } => 25.0,
            Body::Missile { .. } => 5.0,
            Body::GunBonus { .. } => 15.0,
        };
        Vec2::splat(h)
    }

    /// Image selector reported in spawn notifications
    pub fn variant(&self) -> u8 {
        match self.body {
            Body::Asteroid { size } => size as u8,
            Body::AlienShip { skin, .. } => skin,
            Body::Missile { bonus: true, .. } => 1,
            _ => 0,
        }
    }
}

/// Cosmetic effect kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    JetStream,
    Explosion,
}

impl EffectKind {
    pub fn entity_kind(self) -> EntityKind {
        match self {
            EffectKind::JetStream => EntityKind::JetStream,
            EffectKind::Explosion => EntityKind::Explosion,
        }
    }
}

/// A short-lived, non-colliding visual (not gameplay-affecting)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Effect {
    pub id: EntityId,
    pub kind: EffectKind,
    pub pos: Vec2,
    pub angle: f32,
    /// Ticks left before removal
    pub lifetime: u32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    /// Owner of every live entity and effect
    pub registry: Registry,
    /// Fire/bonus timers of the player's ship
    pub ship: ShipController,
    pub ship_id: EntityId,
    /// Current level (0 before the first wave)
    pub level: u32,
    /// Asteroid wave spawned and not yet cleared
    pub asteroid_aims: bool,
    /// Alien wave spawned and not yet cleared
    pub alienship_aims: bool,
    pub score: u64,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Notifications since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new game; the ship sits at the screen centre, no wave yet
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut registry = Registry::new();
        let mut events = Vec::new();
        let (w, h) = tuning.screen_size();
        let ship_id = registry.insert(Entity::new(Body::Ship, Vec2::new(w / 2.0, h / 2.0)), &mut events);

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            ship: ShipController::new(&tuning),
            tuning,
            registry,
            ship_id,
            level: 0,
            asteroid_aims: false,
            alienship_aims: false,
            score: 0,
            phase: GamePhase::Playing,
            time_ticks: 0,
            events,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Current ship position, or the screen centre once it is gone
    pub fn ship_pos(&self) -> Vec2 {
        match self.registry.get(self.ship_id) {
            Some(ship) => ship.pos,
            None => {
                let (w, h) = self.tuning.screen_size();
                Vec2::new(w / 2.0, h / 2.0)
            }
        }
    }

    /// Add points and notify the HUD
    pub fn add_score(&mut self, points: u32) {
        self.score += u64::from(points);
        self.events.push(GameEvent::ScoreChanged { score: self.score });
    }

    /// Take all notifications produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
