//! Keyboard movement for the current player. Without a player every
//! command is silently ignored.

use crate::api::session::Session;
use crate::components::params::{JUMP_IMPULSE, PLAYER_SPEED};
use crate::input::keys::Arrow;

/// Arrow pressed. Left/right toggle: pressing against the current motion
/// stops the player instead of reversing it. Up jumps, but only from rest.
pub fn press(session: &mut Session, arrow: Arrow) {
    let Some(id) = session.player() else {
        return;
    };
    let Some(player) = session.world.get_mut(id) else {
        return;
    };
    let body = &mut player.body;
    match arrow {
        Arrow::Left => {
            body.vel.x = if body.vel.x > 0.0 { 0.0 } else { -PLAYER_SPEED };
        }
        Arrow::Right => {
            body.vel.x = if body.vel.x < 0.0 { 0.0 } else { PLAYER_SPEED };
        }
        Arrow::Up => {
            if body.resting {
                body.vel.y = JUMP_IMPULSE;
                body.resting = false;
            }
        }
    }
}

/// Arrow released. Either horizontal arrow stops horizontal motion.
pub fn release(session: &mut Session, arrow: Arrow) {
    let Some(id) = session.player() else {
        return;
    };
    let Some(player) = session.world.get_mut(id) else {
        return;
    };
    if matches!(arrow, Arrow::Left | Arrow::Right) {
        player.body.vel.x = 0.0;
    }
}
