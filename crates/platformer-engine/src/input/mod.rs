pub mod keys;
pub mod queue;
pub mod router;
