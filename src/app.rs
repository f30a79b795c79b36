//! Background app core.
//!
//! Central struct owning the settings store, visit-order tracker, tab
//! registry and command registry, with lifecycle tied to the background
//! process. All inbound browser events funnel through [`BackgroundApp::handle_event`],
//! one at a time; nothing here is a module-level global.

use log::warn;

use crate::managers::command_registry::{CommandRegistry, CommandRegistryTrait, CMD_TAB_SEARCH};
use crate::managers::mrv_tracker::{MrvTracker, MrvTrackerTrait};
use crate::managers::tab_registry::{TabRegistry, TabRegistryTrait};
use crate::platform::{self, BrowserKind, HostBrowser, SurfaceCapabilities, SurfaceKind};
use crate::services::search_pipeline::{compute_display_list, DisplayList};
use crate::services::settings_store::{SettingsStore, SettingsStoreTrait};
use crate::types::errors::PlatformError;
use crate::types::events::BrowserEvent;
use crate::types::settings::{SettingsChange, SortMethod};
use crate::types::tab::TabId;

/// Owns all background state for the extension.
pub struct BackgroundApp {
    pub settings: SettingsStore,
    pub tracker: MrvTracker,
    pub registry: TabRegistry,
    pub commands: CommandRegistry,
    pub capabilities: SurfaceCapabilities,
}

impl BackgroundApp {
    /// Creates the app for a host browser kind. The capability profile is
    /// resolved here, once, and never re-probed.
    pub fn new(kind: BrowserKind, settings_path: Option<String>) -> Self {
        Self {
            settings: SettingsStore::new(settings_path),
            tracker: MrvTracker::default(),
            registry: TabRegistry::new(),
            commands: CommandRegistry::new(),
            capabilities: platform::capabilities(kind),
        }
    }

    /// Startup sequence: load settings, apply the tracking flag, seed the
    /// visit order from the currently active tab.
    pub fn startup(&mut self) {
        if let Err(e) = self.settings.load() {
            warn!("failed to load settings, using defaults: {}", e);
        }
        self.tracker
            .set_tracking_enabled(self.settings.settings().track_mrv);
        self.tracker
            .seed_from_active(self.registry.active_tab().map(|t| t.id));
    }

    /// Dispatches one inbound browser event. Runs to completion before the
    /// next event is handled; unrecognized input is logged and ignored.
    pub fn handle_event(&mut self, event: BrowserEvent, host: &mut dyn HostBrowser) {
        match event {
            BrowserEvent::TabActivated { tab_id, window_id } => {
                self.registry.set_active_tab(tab_id, window_id);
                self.tracker.on_tab_activated(tab_id);
            }
            BrowserEvent::TabCreated { tab } | BrowserEvent::TabUpdated { tab } => {
                self.registry.upsert_tab(tab);
            }
            BrowserEvent::TabRemoved { tab_id } => {
                // The visit order keeps the stale id; it sorts last once the
                // snapshot is gone.
                self.registry.remove_tab(tab_id);
            }
            BrowserEvent::WindowCreated { window } => {
                self.registry.upsert_window(window);
            }
            BrowserEvent::WindowRemoved { window_id } => {
                self.registry.remove_window(window_id);
            }
            BrowserEvent::WindowFocusChanged { window_id } => {
                self.registry.set_focused_window(window_id);
            }
            BrowserEvent::StorageChanged { key, new_value, .. } => {
                match self.settings.apply_external(&key, new_value.as_ref()) {
                    Ok(Some(change)) => self.apply_settings_change(&change),
                    Ok(None) => {}
                    Err(e) => warn!("ignoring storage change: {}", e),
                }
            }
            BrowserEvent::CommandInvoked { command } => {
                if command == CMD_TAB_SEARCH {
                    platform::open_search_surface(host, &self.capabilities);
                } else if !self.commands.is_registered(&command) {
                    warn!("unrecognized command: {}", command);
                }
            }
            BrowserEvent::ActionClicked { .. } => {
                if let Err(e) = host.open_popup() {
                    warn!("failed to open popup: {}", e);
                }
            }
        }
    }

    /// Applies the tracker-side consequences of a settings change.
    ///
    /// The tracker's `set_tracking_enabled` never clears by itself; the
    /// configuration layer clears here when tracking is disabled.
    pub fn apply_settings_change(&mut self, change: &SettingsChange) {
        match change {
            SettingsChange::TrackingEnabled { new, .. } => {
                self.tracker.set_tracking_enabled(*new);
                if !new {
                    self.tracker.clear();
                }
            }
            SettingsChange::SortMethod { .. } => {}
        }
    }

    /// Changes the tracking flag on behalf of a UI surface.
    pub fn set_tracking_enabled(&mut self, enabled: bool) {
        if self.settings.settings().track_mrv == enabled {
            return;
        }
        match self.settings.set_tracking_enabled(enabled) {
            Ok(()) => {
                self.apply_settings_change(&SettingsChange::TrackingEnabled {
                    old: !enabled,
                    new: enabled,
                });
            }
            Err(e) => warn!("failed to persist tracking flag: {}", e),
        }
    }

    /// Changes the sort method on behalf of a UI surface.
    pub fn set_sort_method(&mut self, method: SortMethod) {
        if let Err(e) = self.settings.set_sort_method(method) {
            warn!("failed to persist sort method: {}", e);
        }
    }

    /// Runs the sort/filter pipeline against current state.
    ///
    /// `active_tab` is the calling surface's own tab; when the caller does
    /// not know it, the registry's active tab is used.
    pub fn display_list(&self, active_tab: Option<TabId>, query: &str) -> DisplayList {
        let active = active_tab.or_else(|| self.registry.active_tab().map(|t| t.id));
        compute_display_list(
            self.registry.all_tabs(),
            active,
            &self.tracker.order(),
            self.settings.settings().sort_method,
            query,
        )
    }

    /// Focuses the target tab's window and activates the tab, closing the
    /// initiating surface when it is a popup.
    pub fn switch_to_tab(
        &mut self,
        host: &mut dyn HostBrowser,
        tab_id: TabId,
        surface: SurfaceKind,
    ) -> Result<(), PlatformError> {
        let window_id = self
            .registry
            .tab(tab_id)
            .map(|t| t.window_id)
            .ok_or(PlatformError::TabNotFound(tab_id))?;
        platform::switch_to_tab(host, tab_id, window_id, surface)
    }
}
