//! Navigator: mounts views as the router moves between locations
//!
//! The router only decides which view is active. The navigator hands the
//! injected client to that view and owns the resulting fetch. When the
//! location changes, the fetch of the view being left is aborted. Opening
//! the location that is already current attaches to the existing load.

use crate::api::ResourceClient;
use crate::error::Result;
use crate::router::{RouteEntry, RouteTable, Router, RouterConfig, RouterState};
use crate::views::{ResourceKind, ResourceListView, View, ViewOutcome};
use futures::future::{AbortHandle, Abortable, Aborted, BoxFuture, Shared};
use futures::FutureExt;
use std::sync::Arc;
use tracing::{debug, info};

/// Shared reference to a view, as stored in the route table
pub type ViewRef = Arc<dyn View>;

/// The application route table: one list view per resource
pub fn catalog_routes() -> RouteTable<ViewRef> {
    ResourceKind::ALL
        .into_iter()
        .fold(RouteTable::new(), |table, kind| {
            table.add_route(
                RouteEntry::new(kind.path(), Arc::new(ResourceListView::new(kind)) as ViewRef)
                    .with_name(kind.title())
                    .with_description(kind.description()),
            )
        })
}

/// A mounted view's load, shared by every caller waiting on it
type Load = Shared<Abortable<BoxFuture<'static, ViewOutcome>>>;

/// A view that is loading; resolves to its outcome
pub struct PendingView {
    path: Option<String>,
    inner: Load,
}

impl PendingView {
    /// Location this view was mounted for
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Wait for the view to settle
    pub async fn outcome(self) -> ViewOutcome {
        match self.inner.await {
            Ok(outcome) => outcome,
            Err(Aborted) => ViewOutcome::Cancelled {
                path: self.path.unwrap_or_default(),
            },
        }
    }
}

/// Drives a router and mounts the active view with the shared client
pub struct Navigator {
    router: Router<ViewRef>,
    client: Arc<dyn ResourceClient>,
    in_flight: Option<(AbortHandle, Load)>,
}

impl Navigator {
    /// Create a navigator over an existing router
    pub fn new(router: Router<ViewRef>, client: Arc<dyn ResourceClient>) -> Self {
        Self {
            router,
            client,
            in_flight: None,
        }
    }

    /// Create a navigator over [`catalog_routes`]
    pub fn catalog(client: Arc<dyn ResourceClient>, config: RouterConfig) -> Result<Self> {
        let router = Router::with_config(catalog_routes(), config)?;
        Ok(Self::new(router, client))
    }

    /// The underlying router
    pub fn router(&self) -> &Router<ViewRef> {
        &self.router
    }

    /// Resolve the initial location
    pub fn start(&mut self, path: &str) -> PendingView {
        info!(path, "Starting at location");
        self.router.start(path);
        self.mount()
    }

    /// Navigate to `path` and mount its view
    ///
    /// When `path` is already the current location the view is not
    /// remounted; the returned view waits on the existing load.
    pub fn open(&mut self, path: &str) -> PendingView {
        if self.router.history().current() == Some(path) {
            if let Some((_, load)) = &self.in_flight {
                debug!(path, "Already at location, reusing load");
                return PendingView {
                    path: Some(path.to_string()),
                    inner: load.clone(),
                };
            }
        }

        info!(path, "Navigating");
        self.router.navigate(path);
        self.mount()
    }

    /// Go back one location, if possible
    pub fn back(&mut self) -> Option<PendingView> {
        self.router.back()?;
        Some(self.mount())
    }

    /// Go forward one location, if possible
    pub fn forward(&mut self) -> Option<PendingView> {
        self.router.forward()?;
        Some(self.mount())
    }

    /// Abort whatever view is still loading
    pub fn cancel(&mut self) {
        if let Some((handle, _)) = self.in_flight.take() {
            debug!("Aborting in-flight view load");
            handle.abort();
        }
    }

    fn mount(&mut self) -> PendingView {
        self.cancel();

        let state = self.router.state();
        let path = state.path().map(str::to_string);
        let future: BoxFuture<'static, ViewOutcome> = match state {
            RouterState::Idle => futures::future::ready(ViewOutcome::Idle).boxed(),
            RouterState::NotFound { path } => {
                futures::future::ready(ViewOutcome::NotFound { path: path.clone() }).boxed()
            }
            RouterState::Mounted { view, .. } => {
                let view = Arc::clone(view);
                let client = Arc::clone(&self.client);
                async move { view.mount(client.as_ref()).await }.boxed()
            }
        };

        let (handle, registration) = AbortHandle::new_pair();
        let load = Abortable::new(future, registration).shared();
        self.in_flight = Some((handle, load.clone()));

        PendingView { path, inner: load }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Method, Resource};
    use crate::error::Result;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Answers with the request path; `/categories` never completes
    #[derive(Default)]
    struct StubClient {
        calls: AtomicUsize,
        hang_on_categories: bool,
    }

    #[async_trait]
    impl ResourceClient for StubClient {
        async fn request(
            &self,
            _method: Method,
            path: &str,
            _body: Option<&Value>,
        ) -> Result<Resource> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.hang_on_categories && path == "/categories" {
                futures::future::pending::<()>().await;
            }
            Ok(json!([{"id": 1, "name": path}]))
        }
    }

    fn navigator(client: Arc<StubClient>) -> Navigator {
        Navigator::catalog(client, RouterConfig::default()).unwrap()
    }

    fn loaded(title: &str, path: &str) -> ViewOutcome {
        ViewOutcome::Loaded {
            title: title.to_string(),
            resource: json!([{"id": 1, "name": path}]),
        }
    }

    #[test]
    fn test_catalog_routes() {
        let table = catalog_routes();
        let paths: Vec<_> = table.entries().iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, ["/categories", "/countries", "/languages"]);

        let entry = table.resolve("/languages").into_result().unwrap();
        assert_eq!(entry.view.title(), "Languages");
        assert_eq!(entry.description.as_deref(), Some("All languages"));
    }

    #[tokio::test]
    async fn test_open_mounts_and_fetches() {
        let client = Arc::new(StubClient::default());
        let mut nav = navigator(client.clone());

        let outcome = nav.open("/countries").outcome().await;
        assert_eq!(outcome, loaded("Countries", "/countries"));
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unknown_route_skips_the_client() {
        let client = Arc::new(StubClient::default());
        let mut nav = navigator(client.clone());

        let outcome = nav.open("/cities").outcome().await;
        assert_eq!(
            outcome,
            ViewOutcome::NotFound {
                path: "/cities".to_string()
            }
        );
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_back_and_forward_remount() {
        let client = Arc::new(StubClient::default());
        let mut nav = navigator(client.clone());

        nav.start("/categories").outcome().await;
        nav.open("/languages").outcome().await;

        let back = nav.back().unwrap().outcome().await;
        assert_eq!(back, loaded("Categories", "/categories"));

        let forward = nav.forward().unwrap().outcome().await;
        assert_eq!(forward, loaded("Languages", "/languages"));
        assert!(nav.forward().is_none());

        assert_eq!(
            nav.back().unwrap().outcome().await,
            loaded("Categories", "/categories")
        );
        assert_eq!(nav.back().unwrap().outcome().await, ViewOutcome::Idle);
        assert!(nav.back().is_none());
    }

    #[tokio::test]
    async fn test_navigating_away_cancels_load() {
        let client = Arc::new(StubClient {
            hang_on_categories: true,
            ..Default::default()
        });
        let mut nav = navigator(client);

        let slow = nav.open("/categories");
        let fast = nav.open("/countries");

        assert_eq!(
            slow.outcome().await,
            ViewOutcome::Cancelled {
                path: "/categories".to_string()
            }
        );
        assert_eq!(fast.outcome().await, loaded("Countries", "/countries"));
    }

    #[tokio::test]
    async fn test_reopening_current_location_shares_load() {
        let client = Arc::new(StubClient {
            hang_on_categories: true,
            ..Default::default()
        });
        let mut nav = navigator(client.clone());

        let first = tokio::spawn(nav.open("/categories").outcome());
        tokio::task::yield_now().await;
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);

        let second = tokio::spawn(nav.open("/categories").outcome());
        tokio::task::yield_now().await;
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
        assert_eq!(nav.router().history().len(), 1);

        let other = nav.open("/countries").outcome().await;
        assert_eq!(other, loaded("Countries", "/countries"));

        let cancelled = ViewOutcome::Cancelled {
            path: "/categories".to_string(),
        };
        assert_eq!(first.await.unwrap(), cancelled);
        assert_eq!(second.await.unwrap(), cancelled);
        assert_eq!(client.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_reopening_settled_location_does_not_refetch() {
        let client = Arc::new(StubClient::default());
        let mut nav = navigator(client.clone());

        let first = nav.open("/languages").outcome().await;
        let again = nav.open("/languages").outcome().await;

        assert_eq!(first, again);
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }
}
