use serde::{Deserialize, Serialize};

/// Tab identifier assigned by the host browser. Unique while the tab exists;
/// the browser may reuse identifiers after a tab is closed.
pub type TabId = i64;

/// Window identifier assigned by the host browser.
pub type WindowId = i64;

/// Read-only snapshot of one open browser tab.
///
/// The browser process is authoritative for all of these fields; the
/// extension never mutates a snapshot, it only replaces it when an update
/// event arrives. Field names follow the WebExtension wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    pub id: TabId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub fav_icon_url: Option<String>,
    pub window_id: WindowId,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub incognito: bool,
    /// Milliseconds since the epoch of the last visit, when the browser
    /// reports it.
    #[serde(default)]
    pub last_accessed: Option<i64>,
}

/// Read-only snapshot of one browser window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Window {
    pub id: WindowId,
    #[serde(default)]
    pub focused: bool,
    #[serde(default)]
    pub incognito: bool,
}
