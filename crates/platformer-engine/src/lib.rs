pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod platformer;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, ConfigError};
pub use api::session::Session;
pub use api::types::{EntityId, GameEvent};
pub use components::entity::{Entity, Kind, KindFilter, Kinematics};
pub use core::bounds::Aabb;
pub use core::world::SpatialWorld;
pub use core::lifecycle::KillList;
pub use renderer::instance::{RenderInstance, RenderBuffer};
pub use input::queue::{InputEvent, InputQueue};
pub use input::router::{Command, InputRouter, SpawnKind};
pub use bridge::protocol::{FrameHeader, ProtocolLayout};
pub use systems::frame::run_frame;
pub use platformer::Platformer;
