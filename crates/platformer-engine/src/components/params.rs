//! Per-kind tuning constants shared by the spawn and physics systems.
//!
//! Sizes are in world units, velocities in world units per tick.

use glam::Vec2;

// -- Sizes --

pub const WALL_SIZE: Vec2 = Vec2::new(50.0, 50.0);
pub const PLATFORM_SIZE: Vec2 = Vec2::new(50.0, 15.0);
pub const PLAYER_SIZE: Vec2 = Vec2::new(15.0, 30.0);
pub const SPRING_SIZE: Vec2 = Vec2::new(10.0, 4.0);
pub const TURRET_SIZE: Vec2 = Vec2::new(20.0, 35.0);
pub const BOLT_SIZE: Vec2 = Vec2::new(15.0, 5.0);

/// Both grid axes snap to multiples of this, for walls and platforms alike.
pub const GRID_CELL: f32 = 50.0;

// -- Motion --

/// Downward acceleration added to `vy` once per step.
pub const GRAVITY: f32 = 1.0;
pub const PLAYER_SPEED: f32 = 5.0;
pub const JUMP_IMPULSE: f32 = -10.0;
pub const SPRING_IMPULSE: f32 = -15.0;

/// Space left between a landed entity's bottom edge and the top of its support.
pub const LANDING_GAP: f32 = 1.0;

// -- Turret --

/// Vertical offset of the muzzle below the turret's top edge.
pub const TURRET_MUZZLE_Y: f32 = 10.0;
/// Direction of the first bolt a fresh turret fires (+1 = right).
pub const TURRET_FIRST_DIRECTION: f32 = 1.0;

// -- Colors (0xRRGGBB) --

pub const WALL_COLOR: u32 = 0x000000;
pub const PLATFORM_COLOR: u32 = 0xff0000;
pub const PLAYER_COLOR: u32 = 0x00ff00;
pub const SPRING_COLOR: u32 = 0x0000ff;
pub const TURRET_COLOR: u32 = 0xff8800;
pub const BOLT_COLOR: u32 = 0x00ffff;
