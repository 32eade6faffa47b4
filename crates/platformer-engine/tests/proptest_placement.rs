//! Placement rules under arbitrary cursor positions.

use glam::Vec2;
use platformer_engine::systems::spawn;
use platformer_engine::{KindFilter, Session};
use proptest::prelude::*;

proptest! {
    #[test]
    fn walls_and_platforms_land_on_grid(x in 0.0f32..2000.0, y in 0.0f32..2000.0, platform in any::<bool>()) {
        let mut session = Session::default();
        let cursor = Vec2::new(x, y);
        let id = if platform {
            spawn::spawn_platform(&mut session, cursor)
        } else {
            spawn::spawn_wall(&mut session, cursor)
        };
        let pos = session.world.get(id).unwrap().pos;
        prop_assert_eq!(pos.x.rem_euclid(50.0), 0.0);
        prop_assert_eq!(pos.y.rem_euclid(50.0), 0.0);
        prop_assert!(pos.x <= x && x < pos.x + 50.0);
        prop_assert!(pos.y <= y && y < pos.y + 50.0);
    }

    #[test]
    fn one_occupant_per_cell(
        col in 0u32..16,
        row in 0u32..12,
        offsets in prop::collection::vec((0u32..50, 0u32..50, any::<bool>()), 1..8),
    ) {
        let mut session = Session::default();
        let mut last = None;
        for (dx, dy, platform) in offsets {
            let cursor = Vec2::new((col * 50 + dx) as f32, (row * 50 + dy) as f32);
            last = Some(if platform {
                spawn::spawn_platform(&mut session, cursor)
            } else {
                spawn::spawn_wall(&mut session, cursor)
            });
        }
        prop_assert_eq!(session.world.ids_of(KindFilter::GenericWall), vec![last.unwrap()]);
    }

    #[test]
    fn gravity_actors_never_spawn_overlapping(
        walls in prop::collection::vec((0u32..16, 0u32..12), 0..20),
        drops in prop::collection::vec((0.0f32..800.0, 0.0f32..600.0, 0u8..3), 1..20),
    ) {
        let mut session = Session::default();
        for (col, row) in walls {
            spawn::spawn_wall(&mut session, Vec2::new(col as f32 * 50.0, row as f32 * 50.0));
        }
        for (x, y, which) in drops {
            let cursor = Vec2::new(x, y);
            let spawned = match which {
                0 => spawn::spawn_player(&mut session, cursor),
                1 => spawn::spawn_spring(&mut session, cursor),
                _ => spawn::spawn_turret(&mut session, cursor),
            };
            if let Some(id) = spawned {
                prop_assert!(session.world.overlapping(id, KindFilter::Any).is_empty());
            }
        }
        prop_assert!(session.world.ids_of(KindFilter::Player).len() <= 1);
    }
}
