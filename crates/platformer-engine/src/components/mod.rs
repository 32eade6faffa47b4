pub mod entity;
pub mod params;
