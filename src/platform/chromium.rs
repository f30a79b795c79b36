// Capability profile for Chromium-family hosts.
// Manifest V3: the toolbar button is `chrome.action`, the persistent
// surface is the side panel.

use super::{BrowserKind, SurfaceCapabilities};

pub(super) fn capabilities() -> SurfaceCapabilities {
    SurfaceCapabilities {
        kind: BrowserKind::Chromium,
        action_api: "action",
        supports_side_panel: true,
    }
}
