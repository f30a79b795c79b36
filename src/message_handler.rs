//! Request/response messages from UI surfaces.
//!
//! The search window, sidebar and options page talk to the background app
//! with small JSON messages tagged by a `type` field, the extension
//! analogue of `runtime.sendMessage`. `handle_message` dispatches one
//! message and returns the JSON response.

use log::warn;
use serde_json::{json, Value};

use crate::app::BackgroundApp;
use crate::managers::command_registry::CommandRegistryTrait;
use crate::managers::mrv_tracker::MrvTrackerTrait;
use crate::platform::{HostBrowser, SurfaceKind};
use crate::services::settings_store::SettingsStoreTrait;
use crate::types::settings::SortMethod;

fn surface_from(params: &Value) -> SurfaceKind {
    match params.get("surface").and_then(|v| v.as_str()) {
        Some("sidebar") => SurfaceKind::Sidebar,
        _ => SurfaceKind::Popup,
    }
}

/// Dispatches one surface message to the background app.
///
/// Returns `Ok(Value)` with the response payload, or `Err(String)` with an
/// error message. Unrecognized message types are logged and rejected;
/// nothing here is fatal to the background process.
pub fn handle_message(
    app: &mut BackgroundApp,
    host: &mut dyn HostBrowser,
    message: &Value,
) -> Result<Value, String> {
    let msg_type = message
        .get("type")
        .and_then(|v| v.as_str())
        .ok_or("missing message type")?;

    match msg_type {
        "getMrvOrder" => Ok(json!(app.tracker.order())),

        "getDisplayList" => {
            let query = message.get("query").and_then(|v| v.as_str()).unwrap_or("");
            let active_tab = message.get("activeTabId").and_then(|v| v.as_i64());
            let list = app.display_list(active_tab, query);
            Ok(json!({
                "tabs": list.tabs,
                "messages": list.messages.as_slice(),
            }))
        }

        "switchToTab" => {
            let tab_id = message
                .get("tabId")
                .and_then(|v| v.as_i64())
                .ok_or("missing tabId")?;
            let surface = surface_from(message);
            app.switch_to_tab(host, tab_id, surface)
                .map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        "getSettings" => {
            serde_json::to_value(app.settings.settings()).map_err(|e| e.to_string())
        }

        "setSettings" => {
            if let Some(enabled) = message.get("track-mrv").and_then(|v| v.as_bool()) {
                app.set_tracking_enabled(enabled);
            }
            if let Some(raw) = message.get("sort-method").and_then(|v| v.as_str()) {
                let method = SortMethod::parse(raw)
                    .ok_or_else(|| format!("unknown sort method: {}", raw))?;
                app.set_sort_method(method);
            }
            Ok(json!({"ok": true}))
        }

        "getCommands" => {
            let commands: Vec<Value> = app
                .commands
                .list()
                .iter()
                .map(|(name, command)| {
                    json!({
                        "name": name,
                        "description": command.description,
                        "shortcut": command.shortcut,
                    })
                })
                .collect();
            Ok(json!(commands))
        }

        "updateShortcut" => {
            let name = message
                .get("name")
                .and_then(|v| v.as_str())
                .ok_or("missing name")?;
            let keys = message
                .get("shortcut")
                .and_then(|v| v.as_str())
                .ok_or("missing shortcut")?;
            app.commands
                .update_shortcut(name, keys)
                .map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        "resetShortcut" => {
            let name = message
                .get("name")
                .and_then(|v| v.as_str())
                .ok_or("missing name")?;
            app.commands
                .reset_shortcut(name)
                .map_err(|e| e.to_string())?;
            Ok(json!({"ok": true, "shortcut": app.commands.shortcut(name)}))
        }

        other => {
            warn!("unrecognized message type: {}", other);
            Err(format!("unrecognized message type: {}", other))
        }
    }
}
