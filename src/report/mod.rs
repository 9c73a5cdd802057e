pub mod components;
pub mod submit;
pub mod types;
