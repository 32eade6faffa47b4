use crate::components::entity::Entity;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Build the render buffer from a set of entities, in world order.
/// Entities past the buffer's capacity are skipped.
pub fn build_render_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, buffer: &mut RenderBuffer) {
    buffer.clear();

    let mut dropped = 0usize;
    for entity in entities {
        let [r, g, b] = RenderInstance::rgb(entity.kind.color());
        let instance = RenderInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            width: entity.size.x,
            height: entity.size.y,
            r,
            g,
            b,
            kind: entity.kind.code() as f32,
        };
        if !buffer.push(instance) {
            dropped += 1;
        }
    }

    if dropped > 0 {
        log::warn!("render buffer full, {} entities not drawn", dropped);
    }
}
