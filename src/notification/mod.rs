pub mod components;
pub mod queue;
pub mod types;
