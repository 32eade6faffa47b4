use bytemuck::{Pod, Zeroable};
use crate::components::entity::Entity;

/// Unique identifier for an entity in the world.
/// Allocated in increasing order, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

/// `GameEvent::kind` for "this entity left the world this frame".
pub const EVENT_DESTROYED: f32 = 1.0;

/// A game event communicated from Rust to the presentation layer via SharedArrayBuffer.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    /// Destroy notification: `a` = entity id, `b` = kind code.
    pub fn destroyed(entity: &Entity) -> Self {
        Self {
            kind: EVENT_DESTROYED,
            a: entity.id.0 as f32,
            b: entity.kind.code() as f32,
            c: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::entity::Kind;

    #[test]
    fn game_event_is_4_floats() {
        assert_eq!(std::mem::size_of::<GameEvent>(), GameEvent::FLOATS * 4);
    }

    #[test]
    fn destroyed_event_carries_id_and_kind() {
        let e = Entity::new(EntityId(7), Kind::Player);
        let ev = GameEvent::destroyed(&e);
        assert_eq!(ev.kind, EVENT_DESTROYED);
        assert_eq!(ev.a, 7.0);
        assert_eq!(ev.b, Kind::Player.code() as f32);
    }
}
