//! Configuration loading for the atlas CLI

pub mod loader;

pub use loader::CliConfigLoader;
