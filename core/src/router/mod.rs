//! Router module for mapping locations to views
//!
//! This module provides the route table, exact-match resolution and a
//! browser-style navigation history with back/forward support.

pub mod core;
pub mod history;
pub mod route;

// Re-export commonly used types
pub use self::core::{Router, RouterConfig, RouterResult, RouterState};
pub use history::History;
pub use route::{RouteEntry, RouteMatch, RouteTable};
