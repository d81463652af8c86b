//! Minimal configuration module for atlas core
//!
//! Only exports pure data types. All loading logic is in CLI layer.

pub mod types;

pub use types::{ClientConfig, Credential, DEFAULT_HEADERS};
