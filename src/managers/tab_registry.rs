//! Snapshot registry of open tabs and windows.
//!
//! The host browser is authoritative; the registry only mirrors it by
//! applying inbound tab and window events. Consumers read snapshots and
//! never mutate them.

use crate::types::tab::{Tab, TabId, Window, WindowId};

/// Trait defining the snapshot registry interface.
pub trait TabRegistryTrait {
    fn upsert_tab(&mut self, tab: Tab);
    fn remove_tab(&mut self, tab_id: TabId);
    fn set_active_tab(&mut self, tab_id: TabId, window_id: WindowId);
    fn upsert_window(&mut self, window: Window);
    fn remove_window(&mut self, window_id: WindowId);
    fn set_focused_window(&mut self, window_id: WindowId);
    fn tab(&self, tab_id: TabId) -> Option<&Tab>;
    fn all_tabs(&self) -> &[Tab];
    fn active_tab(&self) -> Option<&Tab>;
    fn tab_count(&self) -> usize;
}

/// In-memory mirror of the browser's tab and window state.
pub struct TabRegistry {
    tabs: Vec<Tab>,
    windows: Vec<Window>,
}

impl TabRegistry {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            windows: Vec::new(),
        }
    }

    /// Replaces the full snapshot set, e.g. from an initial tabs query at
    /// startup.
    pub fn replace(&mut self, tabs: Vec<Tab>, windows: Vec<Window>) {
        self.tabs = tabs;
        self.windows = windows;
    }

    fn find_tab_index(&self, tab_id: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }

    fn focused_window(&self) -> Option<WindowId> {
        self.windows.iter().find(|w| w.focused).map(|w| w.id)
    }
}

impl Default for TabRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TabRegistryTrait for TabRegistry {
    /// Inserts a new snapshot or replaces the existing one with the same id.
    fn upsert_tab(&mut self, tab: Tab) {
        match self.find_tab_index(tab.id) {
            Some(index) => self.tabs[index] = tab,
            None => self.tabs.push(tab),
        }
    }

    /// Drops the snapshot for a closed tab. The visit order is deliberately
    /// untouched; stale ids there sort last.
    fn remove_tab(&mut self, tab_id: TabId) {
        self.tabs.retain(|t| t.id != tab_id);
    }

    /// Marks `tab_id` active within its window, clearing the flag on the
    /// window's other tabs.
    fn set_active_tab(&mut self, tab_id: TabId, window_id: WindowId) {
        for tab in &mut self.tabs {
            if tab.window_id == window_id {
                tab.active = tab.id == tab_id;
            }
        }
    }

    fn upsert_window(&mut self, window: Window) {
        match self.windows.iter().position(|w| w.id == window.id) {
            Some(index) => self.windows[index] = window,
            None => self.windows.push(window),
        }
    }

    fn remove_window(&mut self, window_id: WindowId) {
        self.windows.retain(|w| w.id != window_id);
        self.tabs.retain(|t| t.window_id != window_id);
    }

    fn set_focused_window(&mut self, window_id: WindowId) {
        for window in &mut self.windows {
            window.focused = window.id == window_id;
        }
    }

    fn tab(&self, tab_id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    fn all_tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// The active tab of the focused window, falling back to any active tab
    /// when no window is marked focused.
    fn active_tab(&self) -> Option<&Tab> {
        if let Some(window_id) = self.focused_window() {
            if let Some(tab) = self
                .tabs
                .iter()
                .find(|t| t.active && t.window_id == window_id)
            {
                return Some(tab);
            }
        }
        self.tabs.iter().find(|t| t.active)
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }
}
