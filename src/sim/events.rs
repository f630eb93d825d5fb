//! Notifications for the presentation layer
//!
//! The simulation never touches rendering or audio. Instead it records what
//! happened during a tick; the driver drains the list and instantiates the
//! matching sprites, sounds and HUD text.

use glam::Vec2;
use serde::Serialize;

use super::state::{EntityId, EntityKind};

/// Sound cues the audio collaborator may play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundCue {
    /// Ship engine while thrusting
    Thrust,
    /// Missile launched
    MissileLaunch,
    /// Something blew up
    Explosion,
    /// A gun bonus appeared or vanished uncollected
    GunBonus,
    /// Advanced past level 1
    LevelUp,
}

/// Everything the outside world needs to know about a tick
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// An entity or effect came into existence.
    ///
    /// `variant` selects the image: asteroid size, alien skin index, or 1
    /// for a missile fired under the gun bonus. Zero otherwise.
    Spawned {
        id: EntityId,
        kind: EntityKind,
        pos: Vec2,
        angle: f32,
        variant: u8,
    },
    /// An entity or effect was removed
    Destroyed {
        id: EntityId,
        kind: EntityKind,
        pos: Vec2,
        angle: f32,
    },
    ScoreChanged { score: u64 },
    LevelStarted { level: u32 },
    /// Transient centred text ("Level 3", "Game Over")
    Notice { text: String, ticks: u32 },
    Sound { cue: SoundCue },
    GunBonusActivated { ticks: u32 },
    GunBonusExpired,
    /// Terminal signal: keep the notice up for `linger_ticks`, then stop the loop
    GameOver {
        score: u64,
        level: u32,
        linger_ticks: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_serialize_with_tag() {
        let json = serde_json::to_string(&GameEvent::LevelStarted { level: 3 }).unwrap();
        assert_eq!(json, r#"{"event":"level_started","level":3}"#);

        let json = serde_json::to_string(&GameEvent::Sound {
            cue: SoundCue::LevelUp,
        })
        .unwrap();
        assert_eq!(json, r#"{"event":"sound","cue":"level_up"}"#);
    }
}
