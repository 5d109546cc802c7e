pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod input;
pub mod renderer;
pub mod scenes;
pub mod types;
