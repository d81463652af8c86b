//! Router implementation for managing navigation state
//!
//! This module provides the core router functionality including
//! state management, navigation, and route resolution.

use super::history::History;
use super::route::{RouteMatch, RouteTable};
use crate::error::RouterError;
use tracing::debug;

/// Type alias for router operation results
pub type RouterResult<T> = Result<T, RouterError>;

/// Current state of the router
#[derive(Debug, Clone, PartialEq)]
pub enum RouterState<V> {
    /// No location resolved yet
    Idle,
    /// A view is active for `path`
    Mounted { path: String, view: V },
    /// `path` has no route; the not-found view is shown
    NotFound { path: String },
}

impl<V> RouterState<V> {
    /// The mounted view, if any
    pub fn view(&self) -> Option<&V> {
        match self {
            RouterState::Mounted { view, .. } => Some(view),
            _ => None,
        }
    }

    /// The location this state was resolved from
    pub fn path(&self) -> Option<&str> {
        match self {
            RouterState::Idle => None,
            RouterState::Mounted { path, .. } | RouterState::NotFound { path } => {
                Some(path.as_str())
            }
        }
    }

    /// Check if a view is mounted
    pub fn is_mounted(&self) -> bool {
        matches!(self, RouterState::Mounted { .. })
    }
}

/// Configuration for the router
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Maximum number of history entries
    pub max_history: usize,
}

impl RouterConfig {
    /// Create a new router configuration
    pub fn new() -> Self {
        Self { max_history: 50 }
    }

    /// Set maximum history size
    pub fn with_max_history(mut self, max_history: usize) -> Self {
        self.max_history = max_history;
        self
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Main router struct that manages navigation state and the route table
#[derive(Debug, Clone)]
pub struct Router<V> {
    /// Immutable route table
    table: RouteTable<V>,
    /// Visited locations
    history: History,
    /// Current router state
    state: RouterState<V>,
}

impl<V: Clone> Router<V> {
    /// Create a new router over `table` with the default configuration
    pub fn new(table: RouteTable<V>) -> RouterResult<Self> {
        Self::with_config(table, RouterConfig::default())
    }

    /// Create a new router with the given configuration
    pub fn with_config(table: RouteTable<V>, config: RouterConfig) -> RouterResult<Self> {
        table.validate()?;

        Ok(Self {
            table,
            history: History::new(config.max_history),
            state: RouterState::Idle,
        })
    }

    /// The route table
    pub fn table(&self) -> &RouteTable<V> {
        &self.table
    }

    /// Get the current router state
    pub fn state(&self) -> &RouterState<V> {
        &self.state
    }

    /// Navigation history
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Look `path` up without changing state
    pub fn resolve(&self, path: &str) -> RouteMatch<'_, V> {
        self.table.resolve(path)
    }

    /// Resolve the initial location, replacing the current history entry
    pub fn start(&mut self, path: &str) -> &RouterState<V> {
        self.replace(path)
    }

    /// Push `path` onto the history and activate its view
    ///
    /// Navigating to the current location leaves history untouched.
    pub fn navigate(&mut self, path: &str) -> &RouterState<V> {
        if self.history.current() == Some(path) {
            debug!(path, "Already at location");
            return &self.state;
        }

        self.history.push(path);
        self.activate()
    }

    /// Replace the current history entry with `path` and activate its view
    pub fn replace(&mut self, path: &str) -> &RouterState<V> {
        self.history.replace(path);
        self.activate()
    }

    /// Go back to the previous location
    pub fn back(&mut self) -> Option<&RouterState<V>> {
        if self.history.back() {
            Some(self.activate())
        } else {
            None
        }
    }

    /// Go forward to the next location
    pub fn forward(&mut self) -> Option<&RouterState<V>> {
        if self.history.forward() {
            Some(self.activate())
        } else {
            None
        }
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    /// Check if we can go forward
    pub fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    /// Resolve the current history entry into the router state
    fn activate(&mut self) -> &RouterState<V> {
        self.state = match self.history.current() {
            None => RouterState::Idle,
            Some(path) => match self.table.resolve(path) {
                RouteMatch::Found(entry) => RouterState::Mounted {
                    path: entry.path.clone(),
                    view: entry.view.clone(),
                },
                RouteMatch::NotFound { path } => RouterState::NotFound { path },
            },
        };

        debug!(state = ?self.state.path(), mounted = self.state.is_mounted(), "Route activated");
        &self.state
    }
}
