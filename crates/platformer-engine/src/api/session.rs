use crate::api::game::GameConfig;
use crate::api::types::{EntityId, GameEvent};
use crate::components::entity::Entity;
use crate::core::lifecycle::KillList;
use crate::core::world::SpatialWorld;

/// Mutable simulation state, passed to `Game::init`, `Game::update`, and
/// every system.
pub struct Session {
    pub world: SpatialWorld,
    pub config: GameConfig,
    /// Destroy notifications produced this frame.
    pub events: Vec<GameEvent>,
    kills: KillList,
    player: Option<EntityId>,
    falling_springs: Vec<EntityId>,
    next_id: u64,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        let events = Vec::with_capacity(config.max_events);
        Self {
            world: SpatialWorld::with_capacity(config.max_instances),
            config,
            events,
            kills: KillList::new(),
            player: None,
            falling_springs: Vec::new(),
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// The current player, if one is alive and not condemned.
    pub fn player(&self) -> Option<EntityId> {
        self.player
    }

    pub(crate) fn set_player(&mut self, id: EntityId) {
        self.player = Some(id);
    }

    /// Springs that have not landed yet, in spawn order.
    pub fn falling_springs(&self) -> &[EntityId] {
        &self.falling_springs
    }

    pub(crate) fn track_falling_spring(&mut self, id: EntityId) {
        self.falling_springs.push(id);
    }

    /// Stop stepping a spring. No-op if it is not tracked.
    pub(crate) fn untrack_spring(&mut self, id: EntityId) {
        self.falling_springs.retain(|&s| s != id);
    }

    /// Queue `id` for removal at the end of the frame.
    ///
    /// Back-references (current player, falling springs) are dropped
    /// immediately. Requests for ids that are already queued or no longer
    /// in the world are ignored; returns whether the request was new.
    pub fn request_destroy(&mut self, id: EntityId) -> bool {
        self.forget(id);
        if !self.world.contains(id) {
            return false;
        }
        let queued = self.kills.request(id);
        if queued {
            log::debug!("destroy requested for {:?}", id);
        }
        queued
    }

    /// True if `id` is waiting for the end-of-frame flush.
    pub fn is_condemned(&self, id: EntityId) -> bool {
        self.kills.contains(id)
    }

    /// Remove `id` right away, outside of any step. Used by spawn rules.
    pub(crate) fn destroy_now(&mut self, id: EntityId) -> Option<Entity> {
        self.forget(id);
        let entity = self.world.remove(id)?;
        log::debug!("destroyed {:?} ({:?}) immediately", id, entity.kind);
        self.push_event(GameEvent::destroyed(&entity));
        Some(entity)
    }

    /// Remove every condemned entity. Called once per frame after all steps.
    /// Returns how many entities left the world.
    pub fn flush(&mut self) -> usize {
        let removed = self.kills.flush(&mut self.world);
        for entity in &removed {
            self.push_event(GameEvent::destroyed(entity));
        }
        if !removed.is_empty() {
            log::debug!("flushed {} entities", removed.len());
        }
        removed.len()
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }

    fn forget(&mut self, id: EntityId) {
        if self.player == Some(id) {
            self.player = None;
        }
        self.untrack_spring(id);
    }

    fn push_event(&mut self, event: GameEvent) {
        if self.events.len() < self.config.max_events {
            self.events.push(event);
        } else {
            log::warn!("event buffer full, dropping {:?}", event);
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
