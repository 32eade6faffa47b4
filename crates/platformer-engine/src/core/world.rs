use crate::api::types::EntityId;
use crate::components::entity::{Entity, KindFilter};
use crate::core::bounds::Aabb;

/// Entity storage with overlap queries, using a flat Vec.
/// Designed for small-to-medium entity counts (hundreds, not millions).
///
/// Entities stay in insertion order; every query reports matches in that order.
pub struct SpatialWorld {
    entities: Vec<Entity>,
}

impl SpatialWorld {
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Create a world with a specific entity capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: Vec::with_capacity(capacity),
        }
    }

    /// Add an entity to the world.
    pub fn add(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Remove an entity by ID. Returns the removed entity if found.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let idx = self.index_of(id)?;
        // Ordered removal keeps query results in insertion order.
        Some(self.entities.remove(idx))
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.index_of(id).is_some()
    }

    /// Get a reference to an entity by ID.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Get a mutable reference to an entity by ID.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Iterate over all entities.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// IDs of every entity accepted by `filter`, in insertion order.
    pub fn ids_of(&self, filter: KindFilter) -> Vec<EntityId> {
        self.entities
            .iter()
            .filter(|e| filter.accepts(&e.kind))
            .map(|e| e.id)
            .collect()
    }

    /// IDs of entities accepted by `filter` whose boxes overlap `area`.
    /// `exclude` (normally the querying entity) is never reported.
    pub fn query_overlap(
        &self,
        area: &Aabb,
        exclude: Option<EntityId>,
        filter: KindFilter,
    ) -> Vec<EntityId> {
        self.entities
            .iter()
            .filter(|e| Some(e.id) != exclude)
            .filter(|e| filter.accepts(&e.kind))
            .filter(|e| e.aabb().overlaps(area))
            .map(|e| e.id)
            .collect()
    }

    /// Overlap query using the current box of entity `id`.
    /// Empty when `id` is not in the world.
    pub fn overlapping(&self, id: EntityId, filter: KindFilter) -> Vec<EntityId> {
        match self.get(id) {
            Some(e) => self.query_overlap(&e.aabb(), Some(id), filter),
            None => Vec::new(),
        }
    }

    /// Number of entities in the world.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the world is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    fn index_of(&self, id: EntityId) -> Option<usize> {
        self.entities.iter().position(|e| e.id == id)
    }
}

impl Default for SpatialWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::entity::Kind;
    use glam::Vec2;

    fn wall(id: u64, x: f32, y: f32) -> Entity {
        Entity::new(EntityId(id), Kind::Wall).with_pos(Vec2::new(x, y))
    }

    #[test]
    fn add_and_get() {
        let mut world = SpatialWorld::new();
        world.add(wall(1, 50.0, 100.0));
        let e = world.get(EntityId(1)).unwrap();
        assert_eq!(e.pos, Vec2::new(50.0, 100.0));
        assert!(world.contains(EntityId(1)));
    }

    #[test]
    fn remove_takes_entity_out() {
        let mut world = SpatialWorld::new();
        world.add(wall(1, 0.0, 0.0));
        assert_eq!(world.len(), 1);
        let removed = world.remove(EntityId(1)).unwrap();
        assert_eq!(removed.id, EntityId(1));
        assert!(world.is_empty());
        assert!(world.remove(EntityId(1)).is_none());
    }

    #[test]
    fn query_excludes_self_and_respects_filter() {
        let mut world = SpatialWorld::new();
        world.add(wall(1, 0.0, 0.0));
        world.add(Entity::new(EntityId(2), Kind::Platform).with_pos(Vec2::new(0.0, 0.0)));
        world.add(Entity::new(EntityId(3), Kind::Spring).with_pos(Vec2::new(10.0, 10.0)));

        let all = world.overlapping(EntityId(1), KindFilter::Any);
        assert_eq!(all, vec![EntityId(2), EntityId(3)]);

        let walls = world.overlapping(EntityId(3), KindFilter::GenericWall);
        assert_eq!(walls, vec![EntityId(1), EntityId(2)]);

        let platforms = world.overlapping(EntityId(3), KindFilter::Platform);
        assert_eq!(platforms, vec![EntityId(2)]);
    }

    #[test]
    fn query_order_survives_removal() {
        let mut world = SpatialWorld::new();
        for id in 1..=4 {
            world.add(wall(id, 0.0, 0.0));
        }
        world.remove(EntityId(2));
        let area = Aabb::from_pos_size(Vec2::new(10.0, 10.0), Vec2::ONE);
        let hits = world.query_overlap(&area, None, KindFilter::Any);
        assert_eq!(hits, vec![EntityId(1), EntityId(3), EntityId(4)]);
    }

    #[test]
    fn adjacent_cells_do_not_overlap() {
        let mut world = SpatialWorld::new();
        world.add(wall(1, 0.0, 0.0));
        world.add(wall(2, 50.0, 0.0));
        assert!(world.overlapping(EntityId(1), KindFilter::Any).is_empty());
    }

    #[test]
    fn ids_of_lists_kind_in_insertion_order() {
        let mut world = SpatialWorld::new();
        world.add(Entity::new(EntityId(5), Kind::Spring));
        world.add(wall(6, 0.0, 0.0));
        world.add(Entity::new(EntityId(7), Kind::Spring));
        assert_eq!(world.ids_of(KindFilter::Spring), vec![EntityId(5), EntityId(7)]);
    }

    #[test]
    fn overlapping_unknown_id_is_empty() {
        let world = SpatialWorld::new();
        assert!(world.overlapping(EntityId(9), KindFilter::Any).is_empty());
    }
}
