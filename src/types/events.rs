use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::tab::{Tab, TabId, Window, WindowId};

/// An inbound event from the host browser.
///
/// The browser delivers these through its callback APIs; the host layer
/// translates each callback into one of these variants so the background
/// app can consume them from a single typed stream and stay testable
/// without a browser runtime. Handlers run to completion one at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum BrowserEvent {
    #[serde(rename_all = "camelCase")]
    TabActivated { tab_id: TabId, window_id: WindowId },
    TabCreated { tab: Tab },
    TabUpdated { tab: Tab },
    #[serde(rename_all = "camelCase")]
    TabRemoved { tab_id: TabId },
    WindowCreated { window: Window },
    #[serde(rename_all = "camelCase")]
    WindowRemoved { window_id: WindowId },
    #[serde(rename_all = "camelCase")]
    WindowFocusChanged { window_id: WindowId },
    #[serde(rename_all = "camelCase")]
    StorageChanged {
        key: String,
        #[serde(default)]
        old_value: Option<Value>,
        #[serde(default)]
        new_value: Option<Value>,
    },
    CommandInvoked { command: String },
    #[serde(rename_all = "camelCase")]
    ActionClicked { tab_id: TabId },
}
