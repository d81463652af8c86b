//! Views mounted by the router
//!
//! A view is handed the shared resource client when it is mounted and
//! always settles into a [`ViewOutcome`], so a failed fetch surfaces as a
//! visible error state rather than an endless load.

pub mod list;
pub mod outcome;

pub use list::{ResourceKind, ResourceListView};
pub use outcome::ViewOutcome;

use crate::api::ResourceClient;
use async_trait::async_trait;
use std::fmt;

/// A renderable unit bound to a route
#[async_trait]
pub trait View: Send + Sync + fmt::Debug {
    /// Title shown above the view
    fn title(&self) -> &str;

    /// Fetch whatever the view needs and settle into an outcome
    async fn mount(&self, client: &dyn ResourceClient) -> ViewOutcome;
}
