//! Browser-style navigation history
//!
//! Entries are ordered oldest first. The position counts how many entries
//! lie at or behind the current location, so position 0 means no location
//! has been visited yet.

/// Bounded back/forward history of visited paths
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<String>,
    position: usize,
    max_entries: usize,
}

impl History {
    /// Create an empty history holding at most `max_entries` paths
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            position: 0,
            max_entries: max_entries.max(1),
        }
    }

    /// Push a new entry after the current one, discarding forward entries
    pub fn push(&mut self, path: impl Into<String>) {
        self.entries.truncate(self.position);
        self.entries.push(path.into());

        if self.entries.len() > self.max_entries {
            let overflow = self.entries.len() - self.max_entries;
            self.entries.drain(..overflow);
        }

        self.position = self.entries.len();
    }

    /// Replace the current entry, or push one if there is none
    pub fn replace(&mut self, path: impl Into<String>) {
        match self.position.checked_sub(1) {
            Some(index) => self.entries[index] = path.into(),
            None => self.push(path),
        }
    }

    /// Step back one entry; returns false when already at the start
    pub fn back(&mut self) -> bool {
        if self.can_go_back() {
            self.position -= 1;
            true
        } else {
            false
        }
    }

    /// Step forward one entry; returns false when already at the end
    pub fn forward(&mut self) -> bool {
        if self.can_go_forward() {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.position > 0
    }

    /// Check if we can go forward
    pub fn can_go_forward(&self) -> bool {
        self.position < self.entries.len()
    }

    /// Path at the current position
    pub fn current(&self) -> Option<&str> {
        self.position
            .checked_sub(1)
            .map(|index| self.entries[index].as_str())
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no path has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
