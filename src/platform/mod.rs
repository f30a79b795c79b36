// Host browser abstraction.
// One capability profile per browser family, selected once at startup, so
// the rest of the crate never branches on which host it is running under.

pub mod chromium;
pub mod firefox;
pub mod paths;

use log::warn;

use crate::types::errors::PlatformError;
use crate::types::tab::{TabId, WindowId};

/// Browser family the extension is hosted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserKind {
    Chromium,
    Firefox,
}

/// UI surface a request originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    Popup,
    Sidebar,
}

impl SurfaceKind {
    /// Whether the surface closes itself after a successful tab switch.
    /// A popup dismisses; a sidebar stays open.
    pub fn closes_after_switch(&self) -> bool {
        matches!(self, SurfaceKind::Popup)
    }
}

/// What the host browser offers this extension.
///
/// Resolved once at startup from the browser kind; call sites consult the
/// profile instead of probing APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceCapabilities {
    pub kind: BrowserKind,
    /// Name of the toolbar-button API on this host.
    pub action_api: &'static str,
    /// Whether a persistent side panel / sidebar surface exists.
    pub supports_side_panel: bool,
}

/// Returns the capability profile for a browser kind.
pub fn capabilities(kind: BrowserKind) -> SurfaceCapabilities {
    match kind {
        BrowserKind::Chromium => chromium::capabilities(),
        BrowserKind::Firefox => firefox::capabilities(),
    }
}

/// Outbound calls into the host browser.
///
/// The production implementation forwards these over the extension wire;
/// tests substitute a recording fake.
pub trait HostBrowser {
    fn focus_window(&mut self, window_id: WindowId) -> Result<(), PlatformError>;
    fn activate_tab(&mut self, tab_id: TabId) -> Result<(), PlatformError>;
    fn open_popup(&mut self) -> Result<(), PlatformError>;
    fn open_side_panel(&mut self) -> Result<(), PlatformError>;
    fn close_surface(&mut self, surface: SurfaceKind) -> Result<(), PlatformError>;
}

/// Switches to a tab: focus its window, activate the tab, then close the
/// initiating surface if that surface dismisses itself after a switch.
pub fn switch_to_tab(
    host: &mut dyn HostBrowser,
    tab_id: TabId,
    window_id: WindowId,
    surface: SurfaceKind,
) -> Result<(), PlatformError> {
    host.focus_window(window_id)?;
    host.activate_tab(tab_id)?;
    if surface.closes_after_switch() {
        host.close_surface(surface)?;
    }
    Ok(())
}

/// Opens the search surface, preferring the side panel when the host has
/// one. A missing API is logged and the feature degrades to doing nothing;
/// it is never fatal.
pub fn open_search_surface(host: &mut dyn HostBrowser, caps: &SurfaceCapabilities) {
    let result = if caps.supports_side_panel {
        host.open_side_panel()
    } else {
        host.open_popup()
    };
    if let Err(PlatformError::ApiUnavailable(api)) = &result {
        warn!("search surface disabled, {} API missing on this host", api);
    } else if let Err(e) = result {
        warn!("failed to open search surface: {}", e);
    }
}
