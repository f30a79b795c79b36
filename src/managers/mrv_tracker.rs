//! Most-recently-visited order tracking for tabs.
//!
//! The tracker keeps an ordered list of tab identifiers, most recent first,
//! updated on tab-activation events. Identifiers of closed tabs are left in
//! place; consumers treat ids absent from the current tab set as
//! sorting last.

use log::debug;

use crate::types::tab::TabId;

/// Trait defining the visit-order tracking interface.
pub trait MrvTrackerTrait {
    fn on_tab_activated(&mut self, tab_id: TabId);
    fn set_tracking_enabled(&mut self, enabled: bool);
    fn is_tracking_enabled(&self) -> bool;
    fn order(&self) -> Vec<TabId>;
    fn clear(&mut self);
    fn seed_from_active(&mut self, tab_id: Option<TabId>);
}

/// In-memory visit-order tracker.
pub struct MrvTracker {
    order: Vec<TabId>,
    tracking: bool,
}

impl MrvTracker {
    pub fn new(tracking: bool) -> Self {
        Self {
            order: Vec::new(),
            tracking,
        }
    }
}

impl Default for MrvTracker {
    fn default() -> Self {
        Self::new(true)
    }
}

impl MrvTrackerTrait for MrvTracker {
    /// Records an activation: removes `tab_id` from the order if present,
    /// then inserts it at the front. No-op while tracking is disabled.
    fn on_tab_activated(&mut self, tab_id: TabId) {
        if !self.tracking {
            return;
        }
        if let Some(index) = self.order.iter().position(|id| *id == tab_id) {
            self.order.remove(index);
        }
        self.order.insert(0, tab_id);
    }

    /// Toggles whether activation events are recorded. Does not itself
    /// clear the accumulated order; that is a configuration-level decision
    /// made by the background app.
    fn set_tracking_enabled(&mut self, enabled: bool) {
        if self.tracking != enabled {
            debug!("visit tracking {}", if enabled { "enabled" } else { "disabled" });
        }
        self.tracking = enabled;
    }

    fn is_tracking_enabled(&self) -> bool {
        self.tracking
    }

    /// Returns a snapshot copy of the current order, most recent first.
    fn order(&self) -> Vec<TabId> {
        self.order.clone()
    }

    fn clear(&mut self) {
        self.order.clear();
    }

    /// Seeds an empty order with the currently active tab so the visit
    /// order is usable immediately after the background process starts.
    /// No-op when the order already has entries or tracking is disabled.
    fn seed_from_active(&mut self, tab_id: Option<TabId>) {
        if !self.tracking || !self.order.is_empty() {
            return;
        }
        if let Some(id) = tab_id {
            self.order.push(id);
        }
    }
}
