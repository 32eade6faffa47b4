pub mod bounds;
pub mod lifecycle;
pub mod world;
