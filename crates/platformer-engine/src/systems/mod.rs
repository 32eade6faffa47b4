pub mod control;
pub mod frame;
pub mod physics;
pub mod render;
pub mod spawn;
