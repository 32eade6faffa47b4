use glam::Vec2;
use crate::api::types::EntityId;
use crate::components::params::*;
use crate::core::bounds::Aabb;

/// Per-kind tag, carrying the little state some kinds need on top of the
/// shared kinematics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Kind {
    /// Impenetrable grid block.
    Wall,
    /// Grid block that can be jumped through from below.
    Platform,
    /// Bounce pad; launches the player on contact.
    Spring,
    /// Falls like any gravity actor and fires a bolt every `fire_interval` ticks.
    Turret { ticks: u32, direction: f32 },
    /// Horizontal projectile; ignores gravity.
    Bolt { direction: f32 },
    /// The one controllable actor.
    Player,
}

impl Kind {
    /// A fresh turret that has not fired yet.
    pub fn turret() -> Self {
        Kind::Turret {
            ticks: 0,
            direction: TURRET_FIRST_DIRECTION,
        }
    }

    /// Default footprint of this kind in world units.
    pub fn size(&self) -> Vec2 {
        match self {
            Kind::Wall => WALL_SIZE,
            Kind::Platform => PLATFORM_SIZE,
            Kind::Spring => SPRING_SIZE,
            Kind::Turret { .. } => TURRET_SIZE,
            Kind::Bolt { .. } => BOLT_SIZE,
            Kind::Player => PLAYER_SIZE,
        }
    }

    /// Color tag handed to the presentation layer (0xRRGGBB).
    pub fn color(&self) -> u32 {
        match self {
            Kind::Wall => WALL_COLOR,
            Kind::Platform => PLATFORM_COLOR,
            Kind::Spring => SPRING_COLOR,
            Kind::Turret { .. } => TURRET_COLOR,
            Kind::Bolt { .. } => BOLT_COLOR,
            Kind::Player => PLAYER_COLOR,
        }
    }

    /// Stable numeric code used on the wire.
    pub fn code(&self) -> u32 {
        match self {
            Kind::Wall => 0,
            Kind::Platform => 1,
            Kind::Spring => 2,
            Kind::Turret { .. } => 3,
            Kind::Bolt { .. } => 4,
            Kind::Player => 5,
        }
    }

    /// Walls and platforms: grid-snapped, one per cell.
    pub fn is_generic_wall(&self) -> bool {
        matches!(self, Kind::Wall | Kind::Platform)
    }

    /// Kinds that fall, land, and bump into walls.
    pub fn is_gravity_actor(&self) -> bool {
        matches!(self, Kind::Player | Kind::Spring | Kind::Turret { .. })
    }
}

/// Restricts an overlap query to a kind or a family of kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindFilter {
    Any,
    /// Wall or Platform.
    GenericWall,
    Wall,
    Platform,
    Spring,
    Turret,
    Bolt,
    Player,
}

impl KindFilter {
    pub fn accepts(self, kind: &Kind) -> bool {
        match self {
            KindFilter::Any => true,
            KindFilter::GenericWall => kind.is_generic_wall(),
            KindFilter::Wall => matches!(kind, Kind::Wall),
            KindFilter::Platform => matches!(kind, Kind::Platform),
            KindFilter::Spring => matches!(kind, Kind::Spring),
            KindFilter::Turret => matches!(kind, Kind::Turret { .. }),
            KindFilter::Bolt => matches!(kind, Kind::Bolt { .. }),
            KindFilter::Player => matches!(kind, Kind::Player),
        }
    }
}

/// Kinematic state shared by every moving kind.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Kinematics {
    /// Velocity in world units per tick.
    pub vel: Vec2,
    /// Whether the bottom edge landed on a wall or platform during the last step.
    pub resting: bool,
}

/// A single actor in the world.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    pub kind: Kind,
    /// Top-left corner in world space.
    pub pos: Vec2,
    /// Width and height in world units.
    pub size: Vec2,
    pub body: Kinematics,
}

impl Entity {
    /// Create an entity of `kind` at the origin, sized for its kind.
    pub fn new(id: EntityId, kind: Kind) -> Self {
        Self {
            id,
            kind,
            pos: Vec2::ZERO,
            size: kind.size(),
            body: Kinematics::default(),
        }
    }

    // -- Builder pattern --

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}
