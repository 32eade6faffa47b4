use crate::api::session::Session;
use crate::components::entity::KindFilter;
use crate::systems::physics;

/// One simulation tick.
///
/// Order: the player, then falling springs in spawn order, then turrets and
/// bolts (when enabled), then the kill-list flush. Bolts fired this tick
/// take their first step in the same tick.
pub fn run_frame(session: &mut Session) {
    if let Some(player) = session.player() {
        physics::step_player(session, player);
    }

    // Springs leave the set while it is being walked, so step a snapshot.
    let springs = session.falling_springs().to_vec();
    for spring in springs {
        physics::step_spring(session, spring);
    }

    if session.config.projectiles_enabled {
        for turret in session.world.ids_of(KindFilter::Turret) {
            physics::step_turret(session, turret);
        }
        for bolt in session.world.ids_of(KindFilter::Bolt) {
            physics::step_bolt(session, bolt);
        }
    }

    session.flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::game::GameConfig;
    use crate::systems::spawn::*;
    use glam::Vec2;

    #[test]
    fn springs_all_step_even_when_one_lands() {
        let mut session = Session::default();
        spawn_wall(&mut session, Vec2::new(0.0, 100.0));
        spawn_wall(&mut session, Vec2::new(50.0, 100.0));
        // Hovering just above the wall: lands on the second frame
        let low = spawn_spring(&mut session, Vec2::new(20.0, 97.0)).unwrap();
        let high = spawn_spring(&mut session, Vec2::new(70.0, 20.0)).unwrap();

        let high_y = session.world.get(high).unwrap().pos.y;
        run_frame(&mut session);
        run_frame(&mut session);
        run_frame(&mut session);
        assert!(!session.falling_springs().contains(&low));
        assert!(session.world.get(high).unwrap().pos.y > high_y);
    }

    #[test]
    fn landed_spring_stops_being_stepped() {
        let mut session = Session::default();
        spawn_wall(&mut session, Vec2::new(0.0, 100.0));
        let s = spawn_spring(&mut session, Vec2::new(20.0, 80.0)).unwrap();
        for _ in 0..20 {
            run_frame(&mut session);
        }
        assert!(session.falling_springs().is_empty());
        let resting = session.world.get(s).unwrap().clone();
        assert_eq!(resting.pos.y, 100.0 - 4.0 - 1.0);
        for _ in 0..5 {
            run_frame(&mut session);
        }
        // Untouched: no more gravity accumulates
        assert_eq!(session.world.get(s).unwrap().body, resting.body);
    }

    #[test]
    fn projectiles_can_be_switched_off() {
        let mut session = Session::new(GameConfig {
            projectiles_enabled: false,
            turret_fire_interval: 1,
            ..GameConfig::default()
        });
        let t = spawn_turret(&mut session, Vec2::new(100.0, 100.0)).unwrap();
        let start = session.world.get(t).unwrap().pos;
        for _ in 0..10 {
            run_frame(&mut session);
        }
        assert_eq!(session.world.get(t).unwrap().pos, start);
        assert!(session.world.ids_of(KindFilter::Bolt).is_empty());
    }

    #[test]
    fn unvalidated_zero_interval_does_not_stop_the_frame() {
        let mut session = Session::new(GameConfig {
            turret_fire_interval: 0,
            ..GameConfig::default()
        });
        let t = spawn_turret(&mut session, Vec2::new(100.0, 100.0)).unwrap();
        for _ in 0..3 {
            run_frame(&mut session);
        }
        assert!(session.world.contains(t));
        assert!(session.world.ids_of(KindFilter::Bolt).is_empty());
    }

    #[test]
    fn fallen_player_is_gone_after_the_frame() {
        let mut session = Session::new(GameConfig {
            world_height: 200.0,
            ..GameConfig::default()
        });
        let p = spawn_player(&mut session, Vec2::new(100.0, 150.0)).unwrap();
        let mut frames = 0;
        while session.world.contains(p) {
            run_frame(&mut session);
            frames += 1;
            assert!(frames < 100);
        }
        assert_eq!(session.player(), None);
        assert_eq!(session.events.len(), 1);
    }

    #[test]
    fn new_bolt_steps_in_the_frame_it_is_fired() {
        let mut session = Session::new(GameConfig {
            turret_fire_interval: 1,
            ..GameConfig::default()
        });
        spawn_wall(&mut session, Vec2::new(100.0, 200.0));
        let t = spawn_turret(&mut session, Vec2::new(120.0, 180.0)).unwrap();
        run_frame(&mut session);
        let turret = session.world.get(t).unwrap().clone();
        let bolt = session.world.ids_of(KindFilter::Bolt)[0];
        let muzzle_x = turret.pos.x + 10.0;
        // Fired rightward, already moved one bolt_speed
        assert_eq!(session.world.get(bolt).unwrap().pos.x, muzzle_x - 7.0 + 1.0);
    }
}
