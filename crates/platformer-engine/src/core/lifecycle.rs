use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::core::world::SpatialWorld;

/// Deferred-destroy queue.
///
/// Entities condemned during a frame stay in the world, visible to every
/// query, until `flush` runs after the last step of that frame.
#[derive(Debug, Default)]
pub struct KillList {
    pending: Vec<EntityId>,
}

impl KillList {
    pub fn new() -> Self {
        Self {
            pending: Vec::with_capacity(16),
        }
    }

    /// Queue `id` for removal. Returns false if it was already queued.
    pub fn request(&mut self, id: EntityId) -> bool {
        if self.pending.contains(&id) {
            return false;
        }
        self.pending.push(id);
        true
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.pending.contains(&id)
    }

    /// Remove every queued entity from `world` and clear the queue.
    /// Returns the entities actually removed, in request order; ids
    /// already gone from the world are skipped.
    pub fn flush(&mut self, world: &mut SpatialWorld) -> Vec<Entity> {
        self.pending
            .drain(..)
            .filter_map(|id| world.remove(id))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::entity::Kind;

    #[test]
    fn request_is_idempotent() {
        let mut kills = KillList::new();
        assert!(kills.request(EntityId(1)));
        assert!(!kills.request(EntityId(1)));
        assert_eq!(kills.len(), 1);
    }

    #[test]
    fn flush_removes_and_clears() {
        let mut world = SpatialWorld::new();
        world.add(Entity::new(EntityId(1), Kind::Wall));
        world.add(Entity::new(EntityId(2), Kind::Spring));
        world.add(Entity::new(EntityId(3), Kind::Player));

        let mut kills = KillList::new();
        kills.request(EntityId(3));
        kills.request(EntityId(1));
        // Still visible until the flush
        assert_eq!(world.len(), 3);

        let removed = kills.flush(&mut world);
        assert_eq!(removed.iter().map(|e| e.id).collect::<Vec<_>>(), vec![EntityId(3), EntityId(1)]);
        assert_eq!(world.len(), 1);
        assert!(kills.is_empty());
    }

    #[test]
    fn flush_skips_entities_already_gone() {
        let mut world = SpatialWorld::new();
        let mut kills = KillList::new();
        kills.request(EntityId(42));
        assert!(kills.flush(&mut world).is_empty());
        assert!(kills.is_empty());
    }
}
