// Capability profile for Firefox hosts.
// The toolbar button is `browser.browserAction`, the persistent surface is
// the sidebar (`sidebarAction`).

use super::{BrowserKind, SurfaceCapabilities};

pub(super) fn capabilities() -> SurfaceCapabilities {
    SurfaceCapabilities {
        kind: BrowserKind::Firefox,
        action_api: "browserAction",
        supports_side_panel: true,
    }
}
