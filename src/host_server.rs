//! Background host — newline-delimited JSON over stdin/stdout.
//!
//! The extension's thin JS glue forwards browser events and surface
//! messages here, one JSON object per line, and executes the outbound
//! commands this process emits.
//!
//! Event:    {"event":"tabActivated","tabId":3,"windowId":1}
//! Request:  {"id":1,"message":{"type":"getMrvOrder"}}
//! Response: {"id":1,"result":[...]} or {"id":1,"error":"..."}
//! Command:  {"command":"activateTab","tabId":3}

use std::io::{self, BufRead, Write};

use serde_json::{json, Value};

use tabswitch::app::BackgroundApp;
use tabswitch::message_handler::handle_message;
use tabswitch::platform::{BrowserKind, HostBrowser, SurfaceKind};
use tabswitch::types::errors::PlatformError;
use tabswitch::types::events::BrowserEvent;
use tabswitch::types::tab::{TabId, WindowId};

/// Host implementation that emits outbound browser calls as command lines
/// on stdout for the JS glue to execute.
struct WireHost;

impl WireHost {
    fn emit(&mut self, command: Value) -> Result<(), PlatformError> {
        let mut stdout = io::stdout();
        writeln!(stdout, "{}", command)
            .and_then(|_| stdout.flush())
            .map_err(|e| PlatformError::Transport(e.to_string()))
    }
}

impl HostBrowser for WireHost {
    fn focus_window(&mut self, window_id: WindowId) -> Result<(), PlatformError> {
        self.emit(json!({"command":"focusWindow","windowId":window_id}))
    }

    fn activate_tab(&mut self, tab_id: TabId) -> Result<(), PlatformError> {
        self.emit(json!({"command":"activateTab","tabId":tab_id}))
    }

    fn open_popup(&mut self) -> Result<(), PlatformError> {
        self.emit(json!({"command":"openPopup"}))
    }

    fn open_side_panel(&mut self) -> Result<(), PlatformError> {
        self.emit(json!({"command":"openSidePanel"}))
    }

    fn close_surface(&mut self, surface: SurfaceKind) -> Result<(), PlatformError> {
        let name = match surface {
            SurfaceKind::Popup => "popup",
            SurfaceKind::Sidebar => "sidebar",
        };
        self.emit(json!({"command":"closeSurface","surface":name}))
    }
}

fn browser_kind_from_env() -> BrowserKind {
    match std::env::var("TABSWITCH_BROWSER").as_deref() {
        Ok("firefox") => BrowserKind::Firefox,
        _ => BrowserKind::Chromium,
    }
}

fn respond(id: Value, result: Result<Value, String>) {
    let response = match result {
        Ok(val) => json!({"id": id, "result": val}),
        Err(err) => json!({"id": id, "error": err}),
    };
    println!("{}", response);
    let _ = io::stdout().flush();
}

fn main() {
    env_logger::init();

    let mut app = BackgroundApp::new(browser_kind_from_env(), None);
    let mut host = WireHost;
    app.startup();

    // Signal ready
    let ready = json!({"event":"ready","version":env!("CARGO_PKG_VERSION")});
    println!("{}", ready);
    let _ = io::stdout().flush();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let value: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                respond(Value::Null, Err(format!("parse error: {}", e)));
                continue;
            }
        };

        if value.get("event").is_some() {
            match serde_json::from_value::<BrowserEvent>(value) {
                Ok(event) => app.handle_event(event, &mut host),
                Err(e) => log::warn!("ignoring malformed event: {}", e),
            }
            continue;
        }

        let id = value.get("id").cloned().unwrap_or(Value::Null);
        let message = value.get("message").cloned().unwrap_or(json!({}));
        respond(id, handle_message(&mut app, &mut host, &message));
    }
}
