use serde_json::{json, Value};

use tabswitch::app::BackgroundApp;
use tabswitch::message_handler::handle_message;
use tabswitch::platform::{BrowserKind, HostBrowser, SurfaceKind};
use tabswitch::services::settings_store::SettingsStoreTrait;
use tabswitch::types::errors::PlatformError;
use tabswitch::types::events::BrowserEvent;
use tabswitch::types::settings::SortMethod;
use tabswitch::types::tab::{Tab, TabId, Window, WindowId};

/// Host double that records every outbound call.
#[derive(Default)]
struct RecordingHost {
    calls: Vec<String>,
}

impl HostBrowser for RecordingHost {
    fn focus_window(&mut self, window_id: WindowId) -> Result<(), PlatformError> {
        self.calls.push(format!("focus_window({})", window_id));
        Ok(())
    }

    fn activate_tab(&mut self, tab_id: TabId) -> Result<(), PlatformError> {
        self.calls.push(format!("activate_tab({})", tab_id));
        Ok(())
    }

    fn open_popup(&mut self) -> Result<(), PlatformError> {
        self.calls.push("open_popup".to_string());
        Ok(())
    }

    fn open_side_panel(&mut self) -> Result<(), PlatformError> {
        self.calls.push("open_side_panel".to_string());
        Ok(())
    }

    fn close_surface(&mut self, surface: SurfaceKind) -> Result<(), PlatformError> {
        self.calls.push(format!("close_surface({:?})", surface));
        Ok(())
    }
}

fn tab(id: TabId, title: &str) -> Tab {
    Tab {
        id,
        title: title.to_string(),
        url: format!("https://example.com/{}", id),
        fav_icon_url: None,
        window_id: 1,
        pinned: false,
        active: false,
        incognito: false,
        last_accessed: None,
    }
}

fn temp_settings_path() -> String {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json").to_string_lossy().to_string();
    std::mem::forget(dir);
    path
}

/// A background app with one window and three visited tabs.
fn app_with_tabs(host: &mut RecordingHost) -> BackgroundApp {
    let mut app = BackgroundApp::new(BrowserKind::Chromium, Some(temp_settings_path()));
    app.startup();
    app.handle_event(
        BrowserEvent::WindowCreated {
            window: Window {
                id: 1,
                focused: true,
                incognito: false,
            },
        },
        host,
    );
    for (id, title) in [(1, "Gmail"), (2, "GitHub"), (3, "Calendar")] {
        app.handle_event(BrowserEvent::TabCreated { tab: tab(id, title) }, host);
    }
    for id in [1, 3] {
        app.handle_event(
            BrowserEvent::TabActivated {
                tab_id: id,
                window_id: 1,
            },
            host,
        );
    }
    app
}

#[test]
fn test_get_mrv_order_returns_identifier_array() {
    let mut host = RecordingHost::default();
    let mut app = app_with_tabs(&mut host);
    let result = handle_message(&mut app, &mut host, &json!({"type": "getMrvOrder"})).unwrap();
    assert_eq!(result, json!([3, 1]));
}

#[test]
fn test_get_display_list_excludes_calling_tab() {
    let mut host = RecordingHost::default();
    let mut app = app_with_tabs(&mut host);
    let result = handle_message(
        &mut app,
        &mut host,
        &json!({"type": "getDisplayList", "query": "", "activeTabId": 3}),
    )
    .unwrap();
    let ids: Vec<i64> = result["tabs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect();
    // MRV order is [3, 1]; tab 3 is the caller, tab 2 is unvisited
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_get_display_list_defaults_to_registry_active_tab() {
    let mut host = RecordingHost::default();
    let mut app = app_with_tabs(&mut host);
    let result = handle_message(
        &mut app,
        &mut host,
        &json!({"type": "getDisplayList", "query": ""}),
    )
    .unwrap();
    let ids: Vec<i64> = result["tabs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect();
    // Tab 3 was activated last, so it is the implicit caller
    assert!(!ids.contains(&3));
}

#[test]
fn test_switch_to_tab_from_popup_closes_surface() {
    let mut host = RecordingHost::default();
    let mut app = app_with_tabs(&mut host);
    host.calls.clear();

    let result = handle_message(
        &mut app,
        &mut host,
        &json!({"type": "switchToTab", "tabId": 2, "surface": "popup"}),
    )
    .unwrap();
    assert_eq!(result, json!({"ok": true}));
    assert_eq!(
        host.calls,
        vec![
            "focus_window(1)",
            "activate_tab(2)",
            "close_surface(Popup)"
        ]
    );
}

#[test]
fn test_switch_to_tab_from_sidebar_stays_open() {
    let mut host = RecordingHost::default();
    let mut app = app_with_tabs(&mut host);
    host.calls.clear();

    handle_message(
        &mut app,
        &mut host,
        &json!({"type": "switchToTab", "tabId": 2, "surface": "sidebar"}),
    )
    .unwrap();
    assert_eq!(host.calls, vec!["focus_window(1)", "activate_tab(2)"]);
}

#[test]
fn test_switch_to_unknown_tab_is_an_error() {
    let mut host = RecordingHost::default();
    let mut app = app_with_tabs(&mut host);
    let result = handle_message(
        &mut app,
        &mut host,
        &json!({"type": "switchToTab", "tabId": 99}),
    );
    assert!(result.is_err());
}

#[test]
fn test_set_settings_changes_sort_method() {
    let mut host = RecordingHost::default();
    let mut app = app_with_tabs(&mut host);
    handle_message(
        &mut app,
        &mut host,
        &json!({"type": "setSettings", "sort-method": "Alphabetical"}),
    )
    .unwrap();

    let settings = handle_message(&mut app, &mut host, &json!({"type": "getSettings"})).unwrap();
    assert_eq!(settings["sort-method"], "Alphabetical");
}

#[test]
fn test_disabling_tracking_clears_the_order() {
    let mut host = RecordingHost::default();
    let mut app = app_with_tabs(&mut host);
    handle_message(
        &mut app,
        &mut host,
        &json!({"type": "setSettings", "track-mrv": false}),
    )
    .unwrap();

    let order = handle_message(&mut app, &mut host, &json!({"type": "getMrvOrder"})).unwrap();
    assert_eq!(order, json!([]));
}

#[test]
fn test_set_settings_rejects_unknown_sort_method() {
    let mut host = RecordingHost::default();
    let mut app = app_with_tabs(&mut host);
    let result = handle_message(
        &mut app,
        &mut host,
        &json!({"type": "setSettings", "sort-method": "Newest"}),
    );
    assert!(result.is_err());
    assert_eq!(app.settings.settings().sort_method, SortMethod::MostRecentlyVisited);
}

#[test]
fn test_update_and_reset_shortcut() {
    let mut host = RecordingHost::default();
    let mut app = app_with_tabs(&mut host);
    handle_message(
        &mut app,
        &mut host,
        &json!({"type": "updateShortcut", "name": "tab-search", "shortcut": "Alt+Shift+K"}),
    )
    .unwrap();

    let result = handle_message(
        &mut app,
        &mut host,
        &json!({"type": "resetShortcut", "name": "tab-search"}),
    )
    .unwrap();
    assert_eq!(result["ok"], json!(true));
    assert_ne!(result["shortcut"], json!("Alt+Shift+K"));
}

#[test]
fn test_unrecognized_message_type_rejected() {
    let mut host = RecordingHost::default();
    let mut app = app_with_tabs(&mut host);
    let result = handle_message(&mut app, &mut host, &json!({"type": "getTabHistory"}));
    assert!(result.is_err());
}

#[test]
fn test_missing_message_type_rejected() {
    let mut host = RecordingHost::default();
    let mut app = app_with_tabs(&mut host);
    assert!(handle_message(&mut app, &mut host, &Value::Null).is_err());
    assert!(handle_message(&mut app, &mut host, &json!({})).is_err());
}

#[test]
fn test_storage_change_event_clears_order_when_tracking_disabled() {
    let mut host = RecordingHost::default();
    let mut app = app_with_tabs(&mut host);
    app.handle_event(
        BrowserEvent::StorageChanged {
            key: "track-mrv".to_string(),
            old_value: Some(json!(true)),
            new_value: Some(json!(false)),
        },
        &mut host,
    );

    let order = handle_message(&mut app, &mut host, &json!({"type": "getMrvOrder"})).unwrap();
    assert_eq!(order, json!([]));

    // Further activations are not recorded
    app.handle_event(
        BrowserEvent::TabActivated {
            tab_id: 2,
            window_id: 1,
        },
        &mut host,
    );
    let order = handle_message(&mut app, &mut host, &json!({"type": "getMrvOrder"})).unwrap();
    assert_eq!(order, json!([]));
}

#[test]
fn test_closed_tab_stays_in_order_but_not_in_display_list() {
    let mut host = RecordingHost::default();
    let mut app = app_with_tabs(&mut host);
    app.handle_event(BrowserEvent::TabRemoved { tab_id: 3 }, &mut host);

    let order = handle_message(&mut app, &mut host, &json!({"type": "getMrvOrder"})).unwrap();
    assert_eq!(order, json!([3, 1]));

    let list = handle_message(
        &mut app,
        &mut host,
        &json!({"type": "getDisplayList", "query": "", "activeTabId": 1}),
    )
    .unwrap();
    let ids: Vec<i64> = list["tabs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![2]);
}

#[test]
fn test_tab_search_command_opens_search_surface() {
    let mut host = RecordingHost::default();
    let mut app = app_with_tabs(&mut host);
    host.calls.clear();
    app.handle_event(
        BrowserEvent::CommandInvoked {
            command: "tab-search".to_string(),
        },
        &mut host,
    );
    assert_eq!(host.calls, vec!["open_side_panel"]);
}

#[test]
fn test_unknown_command_is_ignored() {
    let mut host = RecordingHost::default();
    let mut app = app_with_tabs(&mut host);
    host.calls.clear();
    app.handle_event(
        BrowserEvent::CommandInvoked {
            command: "foo-bar".to_string(),
        },
        &mut host,
    );
    assert!(host.calls.is_empty());
}
