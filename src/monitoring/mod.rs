pub mod canvas;
pub mod components;
pub mod create_monitoring;
pub mod simulation;
pub mod surface;
pub mod threshold;
pub mod types;
