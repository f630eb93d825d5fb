//! Entity registry
//!
//! Single owner of every live entity and effect. Per-kind population
//! counters change in the same call that inserts or removes the entity, so
//! they can never drift from the actual contents.

use glam::Vec2;

use super::events::{GameEvent, SoundCue};
use super::state::{Body, Effect, EffectKind, Entity, EntityId, EntityKind};

/// Live entities (sorted by id) plus population counters
#[derive(Debug, Clone)]
pub struct Registry {
    entities: Vec<Entity>,
    effects: Vec<Effect>,
    next_id: u32,
    asteroid_total: u32,
    alienship_total: u32,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            effects: Vec::new(),
            next_id: 1,
            asteroid_total: 0,
            alienship_total: 0,
        }
    }

    fn next_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Register an entity, assigning it a fresh id
    pub fn insert(&mut self, mut entity: Entity, events: &mut Vec<GameEvent>) -> EntityId {
        let id = self.next_entity_id();
        entity.id = id;

        match entity.kind() {
            EntityKind::Asteroid => self.asteroid_total += 1,
            EntityKind::AlienShip => self.alienship_total += 1,
            _ => {}
        }

        log::trace!("spawn {:?} {:?} at {}", entity.kind(), id, entity.pos);
        events.push(GameEvent::Spawned {
            id,
            kind: entity.kind(),
            pos: entity.pos,
            angle: entity.angle,
            variant: entity.variant(),
        });

        // Ids only grow, so pushing keeps the list sorted
        self.entities.push(entity);
        id
    }

    /// Register a cosmetic effect
    pub fn insert_effect(
        &mut self,
        kind: EffectKind,
        pos: Vec2,
        angle: f32,
        lifetime: u32,
        events: &mut Vec<GameEvent>,
    ) -> EntityId {
        let id = self.next_entity_id();
        events.push(GameEvent::Spawned {
            id,
            kind: kind.entity_kind(),
            pos,
            angle,
            variant: 0,
        });
        self.effects.push(Effect {
            id,
            kind,
            pos,
            angle,
            lifetime,
        });
        id
    }

    fn index_of(&self, id: EntityId) -> Option<usize> {
        self.entities.binary_search_by_key(&id, |e| e.id).ok()
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.index_of(id).map(|i| &self.entities[i])
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.index_of(id).map(|i| &mut self.entities[i])
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn kind_of(&self, id: EntityId) -> Option<EntityKind> {
        self.get(id).map(Entity::kind)
    }

    /// Remove an entity. Removing one that is already gone is a no-op.
    pub fn remove(&mut self, id: EntityId, events: &mut Vec<GameEvent>) -> Option<Entity> {
        let Some(index) = self.index_of(id) else {
            log::trace!("remove of dead entity {:?} ignored", id);
            return None;
        };
        let entity = self.entities.remove(index);

        match entity.kind() {
            EntityKind::Asteroid => self.asteroid_total -= 1,
            EntityKind::AlienShip => self.alienship_total -= 1,
            _ => {}
        }

        events.push(GameEvent::Destroyed {
            id,
            kind: entity.kind(),
            pos: entity.pos,
            angle: entity.angle,
        });
        Some(entity)
    }

    /// Count down missile, bonus and effect lifetimes, removing what ran out.
    ///
    /// A missile or bonus with `lifetime` n survives n calls and is removed
    /// on the next one, so it is offered to overlap detection n times.
    pub fn expire(&mut self, events: &mut Vec<GameEvent>) {
        let mut expired = Vec::new();
        for entity in &mut self.entities {
            let lifetime = match &mut entity.body {
                Body::Missile { lifetime, .. } | Body::GunBonus { lifetime } => lifetime,
                _ => continue,
            };
            if *lifetime == 0 {
                expired.push(entity.id);
            } else {
                *lifetime -= 1;
            }
        }
        for id in expired {
            let kind = self.remove(id, events).map(|e| e.kind());
            if kind == Some(EntityKind::GunBonus) {
                log::debug!("gun bonus {:?} expired uncollected", id);
                events.push(GameEvent::Sound {
                    cue: SoundCue::GunBonus,
                });
            }
        }

        self.effects.retain_mut(|effect| {
            effect.lifetime = effect.lifetime.saturating_sub(1);
            if effect.lifetime > 0 {
                return true;
            }
            events.push(GameEvent::Destroyed {
                id: effect.id,
                kind: effect.kind.entity_kind(),
                pos: effect.pos,
                angle: effect.angle,
            });
            false
        });
    }

    /// All collidable entities, in id order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entities_mut(&mut self) -> &mut [Entity] {
        &mut self.entities
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    pub fn asteroid_total(&self) -> u32 {
        self.asteroid_total
    }

    pub fn alienship_total(&self) -> u32 {
        self.alienship_total
    }

    /// Number of live entities or effects of a kind
    pub fn count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::JetStream | EntityKind::Explosion => self
                .effects
                .iter()
                .filter(|e| e.kind.entity_kind() == kind)
                .count(),
            _ => self.entities.iter().filter(|e| e.kind() == kind).count(),
        }
    }
}
