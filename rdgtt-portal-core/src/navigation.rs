//! Navigation state
//!
//! Single source of truth for the active path. Every navigation event
//! (menu click, direct entry, back, forward) ends in exactly one call to
//! [`NavigationState::set_active_path`].

use std::collections::VecDeque;

use crate::route_table::ROOT_PATH;
use crate::types::RouteEntry;

/// How many earlier paths the back stack keeps; the oldest are dropped first
pub const HISTORY_CAPACITY: usize = 100;

/// Active path plus back/forward history
#[derive(Debug, Clone)]
pub struct NavigationState {
    active_path: String,
    back: VecDeque<String>,
    forward: Vec<String>,
}

impl NavigationState {
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            active_path: initial_path.into(),
            back: VecDeque::new(),
            forward: Vec::new(),
        }
    }

    /// Store the active path; no validation happens here
    pub fn set_active_path(&mut self, path: impl Into<String>) {
        self.active_path = path.into();
    }

    pub fn active_path(&self) -> &str {
        &self.active_path
    }

    /// Exact match only, so at most one entry of a valid table is selected
    pub fn is_selected(&self, entry: &RouteEntry) -> bool {
        entry.path == self.active_path
    }

    /// Link click or direct entry: push history, clear forward stack.
    ///
    /// Returns `false` when `path` is already active (history untouched).
    pub fn visit(&mut self, path: impl Into<String>) -> bool {
        let path = path.into();
        if path == self.active_path {
            return false;
        }
        let previous = std::mem::take(&mut self.active_path);
        self.push_back(previous);
        self.forward.clear();
        self.set_active_path(path);
        true
    }

    /// Step back; `None` when there is no history
    pub fn back(&mut self) -> Option<&str> {
        let target = self.back.pop_back()?;
        let current = std::mem::take(&mut self.active_path);
        self.forward.push(current);
        self.set_active_path(target);
        Some(&self.active_path)
    }

    /// Step forward; `None` when nothing was undone
    pub fn forward(&mut self) -> Option<&str> {
        let target = self.forward.pop()?;
        let current = std::mem::take(&mut self.active_path);
        self.push_back(current);
        self.set_active_path(target);
        Some(&self.active_path)
    }

    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    fn push_back(&mut self, path: String) {
        if self.back.len() == HISTORY_CAPACITY {
            self.back.pop_front();
        }
        self.back.push_back(path);
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(ROOT_PATH)
    }
}
