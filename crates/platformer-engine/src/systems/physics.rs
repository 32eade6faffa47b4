//! Per-entity physics step.
//!
//! Gravity actors move one axis at a time: vertical motion is applied and
//! resolved against walls and platforms first, then horizontal motion, then
//! gravity is added for the next tick. Bolts fly straight and ignore all of
//! this. Removals requested here only take effect at the frame's flush, so
//! every step sees the same set of entities.

use glam::Vec2;
use crate::api::session::Session;
use crate::api::types::EntityId;
use crate::components::entity::{Kind, KindFilter};
use crate::components::params::{GRAVITY, LANDING_GAP, SPRING_IMPULSE, TURRET_MUZZLE_Y};
use crate::core::bounds::Aabb;
use crate::core::world::SpatialWorld;
use crate::systems::spawn::spawn_bolt;

/// Walls and platforms overlapping `area`: every wall first, then every
/// platform, each group in insertion order.
fn colliders(world: &SpatialWorld, area: &Aabb, exclude: EntityId) -> Vec<EntityId> {
    let mut ids = world.query_overlap(area, Some(exclude), KindFilter::Wall);
    ids.extend(world.query_overlap(area, Some(exclude), KindFilter::Platform));
    ids
}

/// Step one entity according to its kind. Walls and platforms never move.
pub fn step_entity(session: &mut Session, id: EntityId) {
    let Some(kind) = session.world.get(id).map(|e| e.kind) else {
        return;
    };
    match kind {
        Kind::Player => step_player(session, id),
        Kind::Spring => step_spring(session, id),
        Kind::Turret { .. } => step_turret(session, id),
        Kind::Bolt { .. } => step_bolt(session, id),
        Kind::Wall | Kind::Platform => {}
    }
}

/// Shared step for Player, Spring and Turret.
pub fn step_gravity_actor(session: &mut Session, id: EntityId) {
    let Some(entity) = session.world.get(id) else {
        return;
    };
    let size = entity.size;
    let mut pos = entity.pos;
    let mut body = entity.body;
    body.resting = false;

    // Vertical pass. The first collider that stops the motion wins (walls
    // before platforms); it zeroes `vy`, so later colliders are ignored.
    pos.y += body.vel.y;
    if body.vel.y != 0.0 {
        let mut probe = Aabb::from_pos_size(pos, size);
        if body.vel.y > 0.0 {
            // Reach the support we were left hovering above last tick.
            probe = probe.extend_down(LANDING_GAP);
        }
        for cid in colliders(&session.world, &probe, id) {
            let Some(collider) = session.world.get(cid) else {
                continue;
            };
            if body.vel.y > 0.0 {
                pos.y = collider.pos.y - size.y - LANDING_GAP;
                body.resting = true;
                body.vel.y = 0.0;
            } else if body.vel.y < 0.0 && collider.kind == Kind::Wall {
                // Platforms let actors pass through from below.
                pos.y = collider.pos.y + collider.size.y;
                body.vel.y = 0.0;
            }
        }
    }

    // Horizontal pass; platforms block sideways motion like walls.
    pos.x += body.vel.x;
    if body.vel.x != 0.0 {
        let area = Aabb::from_pos_size(pos, size);
        for cid in colliders(&session.world, &area, id) {
            let Some(collider) = session.world.get(cid) else {
                continue;
            };
            if body.vel.x > 0.0 {
                pos.x = collider.pos.x - size.x;
                body.vel.x = 0.0;
            } else if body.vel.x < 0.0 {
                pos.x = collider.pos.x + collider.size.x;
                body.vel.x = 0.0;
            }
        }
    }

    body.vel.y += GRAVITY;

    if let Some(entity) = session.world.get_mut(id) {
        entity.pos = pos;
        entity.body = body;
    }
    log::trace!("{:?} at {} vel {} resting={}", id, pos, body.vel, body.resting);

    if pos.y > session.config.world_height {
        log::debug!("{:?} fell out of the world", id);
        session.request_destroy(id);
    }
}

/// Springs under the player launch it before it moves.
pub fn step_player(session: &mut Session, id: EntityId) {
    if !session.world.overlapping(id, KindFilter::Spring).is_empty() {
        if let Some(player) = session.world.get_mut(id) {
            player.body.vel.y = SPRING_IMPULSE;
            player.body.resting = false;
        }
    }
    step_gravity_actor(session, id);
}

/// A spring that has landed takes one last step and is then no longer tracked.
pub fn step_spring(session: &mut Session, id: EntityId) {
    let landed = session.world.get(id).is_some_and(|e| e.body.resting);
    if landed {
        session.untrack_spring(id);
    }
    step_gravity_actor(session, id);
}

/// Fall, count a tick, and fire every `turret_fire_interval` ticks,
/// alternating right and left. A turret that fell out of the world this
/// frame neither counts nor fires; an interval of zero never fires.
pub fn step_turret(session: &mut Session, id: EntityId) {
    step_gravity_actor(session, id);
    if session.is_condemned(id) {
        return;
    }

    let interval = session.config.turret_fire_interval;
    let shot = {
        let Some(turret) = session.world.get_mut(id) else {
            return;
        };
        let muzzle = Vec2::new(
            turret.pos.x + (turret.size.x / 2.0).floor(),
            turret.pos.y + TURRET_MUZZLE_Y,
        );
        match &mut turret.kind {
            Kind::Turret { ticks, direction } => {
                *ticks = ticks.wrapping_add(1);
                if interval != 0 && *ticks % interval == 0 {
                    let fired = *direction;
                    *direction = -*direction;
                    Some((muzzle, fired))
                } else {
                    None
                }
            }
            _ => None,
        }
    };

    if let Some((muzzle, direction)) = shot {
        spawn_bolt(session, muzzle, direction);
    }
}

/// Move horizontally; leave the world, or hit something and take players
/// and other bolts with it. Overlapping only turrets is harmless.
pub fn step_bolt(session: &mut Session, id: EntityId) {
    let speed = session.config.bolt_speed;
    let width = session.config.world_width;
    let x = {
        let Some(bolt) = session.world.get_mut(id) else {
            return;
        };
        let Kind::Bolt { direction } = bolt.kind else {
            return;
        };
        bolt.pos.x += direction * speed;
        bolt.pos.x
    };

    if x > width || x < 0.0 {
        session.request_destroy(id);
    }

    let mut self_destruct = false;
    for target in session.world.overlapping(id, KindFilter::Any) {
        let Some(kind) = session.world.get(target).map(|e| e.kind) else {
            continue;
        };
        if matches!(kind, Kind::Player | Kind::Bolt { .. }) {
            session.request_destroy(target);
        }
        if !matches!(kind, Kind::Turret { .. }) {
            self_destruct = true;
        }
    }
    if self_destruct {
        session.request_destroy(id);
    }
}
