use serde::{Deserialize, Serialize};
use crate::api::session::Session;
use crate::input::queue::InputQueue;

/// Configuration for the simulation, provided by the game.
/// Every field has a default, so a partial JSON document is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// World width in game units. Bolts leaving [0, world_width] are removed.
    pub world_width: f32,
    /// World height in game units. Gravity actors falling below it are removed.
    pub world_height: f32,
    /// Maximum number of render instances (default: 512).
    pub max_instances: usize,
    /// Maximum number of game events per frame (default: 64).
    pub max_events: usize,
    /// Bolt travel per tick, multiplied by the firing direction (±1).
    pub bolt_speed: f32,
    /// Ticks between two shots of the same turret.
    pub turret_fire_interval: u32,
    /// Step turrets and bolts each frame. When off, turrets still spawn but
    /// never move or fire.
    pub projectiles_enabled: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: 800.0,
            world_height: 600.0,
            max_instances: 512,
            max_events: 64,
            bolt_speed: 1.0,
            turret_fire_interval: 100,
            projectiles_enabled: true,
        }
    }
}

/// Rejected configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

impl GameConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.world_width > 0.0 && self.world_height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "world must have positive size, got {}x{}",
                self.world_width, self.world_height
            )));
        }
        if self.max_instances == 0 {
            return Err(ConfigError::Invalid("max_instances must be at least 1".to_owned()));
        }
        if !(self.bolt_speed > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "bolt_speed must be positive, got {}",
                self.bolt_speed
            )));
        }
        if self.turret_fire_interval == 0 {
            return Err(ConfigError::Invalid("turret_fire_interval must be at least 1".to_owned()));
        }
        Ok(())
    }
}

/// The core contract a game must fulfill.
pub trait Game {
    /// Return simulation configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state, spawn entities.
    fn init(&mut self, session: &mut Session);

    /// One frame: consume this frame's input, step the world, flush removals.
    fn update(&mut self, session: &mut Session, input: &InputQueue);
}
