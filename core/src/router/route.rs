//! Route definitions and utilities
//!
//! This module defines the route entry and route table types
//! used by the router.

use crate::error::RouterError;

/// Binding of an absolute path to a view
#[derive(Debug, Clone, PartialEq)]
pub struct RouteEntry<V> {
    /// Absolute path, matched by exact string equality
    pub path: String,
    /// View activated when the path matches
    pub view: V,
    /// Human-readable name for this route
    pub name: Option<String>,
    /// Optional description of what this route displays
    pub description: Option<String>,
}

impl<V> RouteEntry<V> {
    /// Create a new route entry for `path`
    pub fn new(path: impl Into<String>, view: V) -> Self {
        Self {
            path: path.into(),
            view,
            name: None,
            description: None,
        }
    }

    /// Set the route name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the description for this route
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Name of the route, falling back to its path
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.path)
    }
}

/// Result of looking a path up in the route table
#[derive(Debug, Clone, PartialEq)]
pub enum RouteMatch<'a, V> {
    /// The first entry whose path equals the requested one
    Found(&'a RouteEntry<V>),
    /// No entry matches
    NotFound { path: String },
}

impl<'a, V> RouteMatch<'a, V> {
    /// Whether a route matched
    pub fn is_found(&self) -> bool {
        matches!(self, RouteMatch::Found(_))
    }

    /// The matched view, if any
    pub fn view(&self) -> Option<&'a V> {
        match self {
            RouteMatch::Found(entry) => Some(&entry.view),
            RouteMatch::NotFound { .. } => None,
        }
    }

    /// Convert into a `Result`, mapping a miss to [`RouterError::RouteNotFound`]
    pub fn into_result(self) -> Result<&'a RouteEntry<V>, RouterError> {
        match self {
            RouteMatch::Found(entry) => Ok(entry),
            RouteMatch::NotFound { path } => Err(RouterError::RouteNotFound(path)),
        }
    }
}

/// Ordered sequence of route entries
#[derive(Debug, Clone, PartialEq)]
pub struct RouteTable<V> {
    entries: Vec<RouteEntry<V>>,
}

impl<V> RouteTable<V> {
    /// Create an empty route table
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a route entry
    pub fn add_route(mut self, entry: RouteEntry<V>) -> Self {
        self.entries.push(entry);
        self
    }

    /// Shorthand for adding an entry with just a path and a view
    pub fn route(self, path: impl Into<String>, view: V) -> Self {
        self.add_route(RouteEntry::new(path, view))
    }

    /// Check that the table is non-empty and every path is absolute and unique
    pub fn validate(&self) -> Result<(), RouterError> {
        if self.entries.is_empty() {
            return Err(RouterError::NoRoutes);
        }

        for (index, entry) in self.entries.iter().enumerate() {
            if !entry.path.starts_with('/') {
                return Err(RouterError::InvalidPath(entry.path.clone()));
            }
            if self.entries[..index].iter().any(|e| e.path == entry.path) {
                return Err(RouterError::DuplicatePath(entry.path.clone()));
            }
        }

        Ok(())
    }

    /// Look `path` up by exact match; the first matching entry wins
    pub fn resolve(&self, path: &str) -> RouteMatch<'_, V> {
        self.entries
            .iter()
            .find(|entry| entry.path == path)
            .map(RouteMatch::Found)
            .unwrap_or_else(|| RouteMatch::NotFound {
                path: path.to_string(),
            })
    }

    /// All entries in table order
    pub fn entries(&self) -> &[RouteEntry<V>] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for RouteTable<V> {
    fn default() -> Self {
        Self::new()
    }
}
