use glam::Vec2;
use crate::input::keys::*;
use crate::input::queue::InputEvent;

/// What a spawn key creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnKind {
    Wall,
    Platform,
    Player,
    Spring,
    Turret,
}

impl SpawnKind {
    pub fn from_code(key_code: u32) -> Option<Self> {
        match key_code {
            KEY_W => Some(SpawnKind::Wall),
            KEY_F => Some(SpawnKind::Platform),
            KEY_P => Some(SpawnKind::Player),
            KEY_S => Some(SpawnKind::Spring),
            KEY_L => Some(SpawnKind::Turret),
            _ => None,
        }
    }
}

/// A request for the simulation, decoded from one input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Spawn { kind: SpawnKind, at: Vec2 },
    Press(Arrow),
    Release(Arrow),
}

/// Turns raw input events into commands, tracking the cursor so spawn
/// keys know where to place things.
#[derive(Debug, Default)]
pub struct InputRouter {
    cursor: Vec2,
}

impl InputRouter {
    pub fn new() -> Self {
        Self { cursor: Vec2::ZERO }
    }

    /// Last known cursor position in world units.
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Decode one event. Cursor moves and unmapped keys produce no command.
    pub fn route(&mut self, event: &InputEvent) -> Option<Command> {
        match *event {
            InputEvent::PointerMove { x, y } => {
                self.cursor = Vec2::new(x, y);
                None
            }
            InputEvent::KeyDown { key_code } => {
                if let Some(kind) = SpawnKind::from_code(key_code) {
                    Some(Command::Spawn { kind, at: self.cursor })
                } else {
                    Arrow::from_code(key_code).map(Command::Press)
                }
            }
            InputEvent::KeyUp { key_code } => Arrow::from_code(key_code).map(Command::Release),
        }
    }
}
