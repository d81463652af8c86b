//! List views for the three catalog resources

use super::{View, ViewOutcome};
use crate::api::ResourceClient;
use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// The resource lists exposed by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Categories,
    Countries,
    Languages,
}

impl ResourceKind {
    /// All resource kinds, in route table order
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Categories,
        ResourceKind::Countries,
        ResourceKind::Languages,
    ];

    /// Path used both as the route and as the API endpoint
    pub fn path(&self) -> &'static str {
        match self {
            ResourceKind::Categories => "/categories",
            ResourceKind::Countries => "/countries",
            ResourceKind::Languages => "/languages",
        }
    }

    /// Display title
    pub fn title(&self) -> &'static str {
        match self {
            ResourceKind::Categories => "Categories",
            ResourceKind::Countries => "Countries",
            ResourceKind::Languages => "Languages",
        }
    }

    /// One-line summary of the list
    pub fn description(&self) -> &'static str {
        match self {
            ResourceKind::Categories => "All categories",
            ResourceKind::Countries => "All countries",
            ResourceKind::Languages => "All languages",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches('/').to_lowercase().as_str() {
            "categories" => Ok(ResourceKind::Categories),
            "countries" => Ok(ResourceKind::Countries),
            "languages" => Ok(ResourceKind::Languages),
            other => Err(format!("Unknown resource: {}", other)),
        }
    }
}

/// View that fetches and shows one resource list
#[derive(Debug, Clone)]
pub struct ResourceListView {
    kind: ResourceKind,
}

impl ResourceListView {
    /// Create a list view for `kind`
    pub fn new(kind: ResourceKind) -> Self {
        Self { kind }
    }
}

#[async_trait]
impl View for ResourceListView {
    fn title(&self) -> &str {
        self.kind.title()
    }

    async fn mount(&self, client: &dyn ResourceClient) -> ViewOutcome {
        debug!(resource = %self.kind, "Loading list");
        match client.get(self.kind.path()).await {
            Ok(resource) => ViewOutcome::Loaded {
                title: self.title().to_string(),
                resource,
            },
            Err(e) => {
                warn!(resource = %self.kind, error = %e, "Failed to load list");
                ViewOutcome::Failed {
                    title: self.title().to_string(),
                    message: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Method, Resource};
    use crate::error::{RequestError, Result};
    use serde_json::{json, Value};
    use std::sync::Mutex;

    /// Answers every path with a canned payload and records what was asked
    #[derive(Default)]
    struct RecordingClient {
        fail: bool,
        seen: Mutex<Vec<(Method, String)>>,
    }

    #[async_trait]
    impl ResourceClient for RecordingClient {
        async fn request(
            &self,
            method: Method,
            path: &str,
            _body: Option<&Value>,
        ) -> Result<Resource> {
            self.seen.lock().unwrap().push((method, path.to_string()));
            if self.fail {
                return Err(RequestError::Status {
                    method: method.to_string(),
                    url: path.to_string(),
                    status: 500,
                    message: "boom".to_string(),
                }
                .into());
            }
            Ok(json!([{"id": 1, "name": path}]))
        }
    }

    #[test]
    fn test_kind_paths_and_parsing() {
        for kind in ResourceKind::ALL {
            assert_eq!(kind.path().parse::<ResourceKind>(), Ok(kind));
        }
        assert_eq!("Languages".parse::<ResourceKind>(), Ok(ResourceKind::Languages));
        assert!("/cities".parse::<ResourceKind>().is_err());
    }

    #[tokio::test]
    async fn test_mount_fetches_own_path() {
        let client = RecordingClient::default();
        let view = ResourceListView::new(ResourceKind::Countries);

        let outcome = view.mount(&client).await;
        assert_eq!(
            outcome,
            ViewOutcome::Loaded {
                title: "Countries".to_string(),
                resource: json!([{"id": 1, "name": "/countries"}]),
            }
        );
        assert_eq!(
            *client.seen.lock().unwrap(),
            vec![(Method::Get, "/countries".to_string())]
        );
    }

    #[tokio::test]
    async fn test_mount_failure_is_visible() {
        let client = RecordingClient {
            fail: true,
            ..Default::default()
        };
        let view = ResourceListView::new(ResourceKind::Categories);

        match view.mount(&client).await {
            ViewOutcome::Failed { title, message } => {
                assert_eq!(title, "Categories");
                assert!(message.contains("500"));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
