use crate::api::game::{Game, GameConfig};
use crate::api::session::Session;
use crate::input::queue::InputQueue;
use crate::input::router::{Command, InputRouter, SpawnKind};
use crate::systems::{control, frame, spawn};

/// The platformer sandbox: build walls and platforms under the cursor,
/// drop springs and turrets, and run around as the player.
pub struct Platformer {
    config: GameConfig,
    router: InputRouter,
}

impl Platformer {
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self {
            config,
            router: InputRouter::new(),
        }
    }

    pub fn router(&self) -> &InputRouter {
        &self.router
    }
}

impl Default for Platformer {
    fn default() -> Self {
        Self::new()
    }
}

/// Carry out one decoded input command.
pub fn apply_command(session: &mut Session, command: Command) {
    match command {
        Command::Spawn { kind, at } => match kind {
            SpawnKind::Wall => {
                spawn::spawn_wall(session, at);
            }
            SpawnKind::Platform => {
                spawn::spawn_platform(session, at);
            }
            SpawnKind::Player => {
                if spawn::spawn_player(session, at).is_none() {
                    log::info!("no room for a player at {}", at);
                }
            }
            SpawnKind::Spring => {
                spawn::spawn_spring(session, at);
            }
            SpawnKind::Turret => {
                spawn::spawn_turret(session, at);
            }
        },
        Command::Press(arrow) => control::press(session, arrow),
        Command::Release(arrow) => control::release(session, arrow),
    }
}

impl Game for Platformer {
    fn config(&self) -> GameConfig {
        self.config.clone()
    }

    fn init(&mut self, session: &mut Session) {
        log::info!(
            "Platformer: {}x{} world, projectiles {}",
            session.config.world_width,
            session.config.world_height,
            if session.config.projectiles_enabled { "on" } else { "off" }
        );
    }

    fn update(&mut self, session: &mut Session, input: &InputQueue) {
        for event in input.iter() {
            if let Some(command) = self.router.route(event) {
                apply_command(session, command);
            }
        }
        frame::run_frame(session);
    }
}
