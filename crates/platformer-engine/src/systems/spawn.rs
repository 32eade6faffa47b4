//! Entity creation rules: grid snapping, one wall per cell, one player,
//! and the spawn-collision rule for gravity actors.

use glam::Vec2;
use crate::api::session::Session;
use crate::api::types::EntityId;
use crate::components::entity::{Entity, Kind, KindFilter};
use crate::components::params::{BOLT_SIZE, GRID_CELL};

/// Snap a coordinate down to the wall grid. Negative values snap toward -inf.
pub fn snap_to_grid(coord: f32) -> f32 {
    coord - coord.rem_euclid(GRID_CELL)
}

/// Top-left corner that centers a box of `size` on `point`, rounding the
/// half-size down to whole units.
pub fn centered_on(point: Vec2, size: Vec2) -> Vec2 {
    point - (size / 2.0).floor()
}

/// Place a wall in the grid cell containing `cursor`.
pub fn spawn_wall(session: &mut Session, cursor: Vec2) -> EntityId {
    spawn_generic_wall(session, Kind::Wall, cursor)
}

/// Place a platform in the grid cell containing `cursor`.
pub fn spawn_platform(session: &mut Session, cursor: Vec2) -> EntityId {
    spawn_generic_wall(session, Kind::Platform, cursor)
}

fn spawn_generic_wall(session: &mut Session, kind: Kind, cursor: Vec2) -> EntityId {
    let id = session.next_id();
    let pos = Vec2::new(snap_to_grid(cursor.x), snap_to_grid(cursor.y));
    let entity = Entity::new(id, kind).with_pos(pos);

    let occupant = session
        .world
        .query_overlap(&entity.aabb(), None, KindFilter::GenericWall)
        .first()
        .copied();
    if let Some(old) = occupant {
        log::debug!("{:?} at {} replaces {:?}", kind, pos, old);
        session.destroy_now(old);
    }

    session.world.add(entity);
    log::debug!("spawned {:?} {:?} at {}", kind, id, pos);
    id
}

/// Add a gravity actor at `pos` unless it would overlap anything already
/// in the world, in which case it never enters the world.
fn spawn_gravity_actor(session: &mut Session, kind: Kind, pos: Vec2) -> Option<EntityId> {
    debug_assert!(kind.is_gravity_actor());
    let id = session.next_id();
    let entity = Entity::new(id, kind).with_pos(pos);

    let blockers = session.world.query_overlap(&entity.aabb(), None, KindFilter::Any);
    if !blockers.is_empty() {
        log::debug!("{:?} at {} spawned inside {:?}, discarded", kind, pos, blockers);
        return None;
    }

    session.world.add(entity);
    log::debug!("spawned {:?} {:?} at {}", kind, id, pos);
    Some(id)
}

/// Replace the current player with a new one centered on `cursor`.
/// Returns `None` when the new player spawned inside something.
pub fn spawn_player(session: &mut Session, cursor: Vec2) -> Option<EntityId> {
    for old in session.world.ids_of(KindFilter::Player) {
        session.destroy_now(old);
    }
    let pos = centered_on(cursor, Kind::Player.size());
    let id = spawn_gravity_actor(session, Kind::Player, pos)?;
    session.set_player(id);
    Some(id)
}

/// Drop a spring centered on `cursor`; it is stepped until it lands.
pub fn spawn_spring(session: &mut Session, cursor: Vec2) -> Option<EntityId> {
    let pos = centered_on(cursor, Kind::Spring.size());
    let id = spawn_gravity_actor(session, Kind::Spring, pos)?;
    session.track_falling_spring(id);
    Some(id)
}

/// Drop a turret centered on `cursor`.
pub fn spawn_turret(session: &mut Session, cursor: Vec2) -> Option<EntityId> {
    let kind = Kind::turret();
    let pos = centered_on(cursor, kind.size());
    spawn_gravity_actor(session, kind, pos)
}

/// Fire a bolt centered on `muzzle`. Bolts are exempt from the spawn-collision rule.
pub fn spawn_bolt(session: &mut Session, muzzle: Vec2, direction: f32) -> EntityId {
    let id = session.next_id();
    let pos = centered_on(muzzle, BOLT_SIZE);
    session
        .world
        .add(Entity::new(id, Kind::Bolt { direction }).with_pos(pos));
    log::trace!("bolt {:?} fired at {} heading {}", id, pos, direction);
    id
}
