//! TabSwitch console demo.
//!
//! Walks the background core through a realistic session: events arrive,
//! the visit order updates, and the pipeline produces display lists for a
//! few queries. The real entry point for extension use is the
//! `tabswitch-host` binary.

use tabswitch::app::BackgroundApp;
use tabswitch::managers::mrv_tracker::MrvTrackerTrait;
use tabswitch::managers::tab_registry::TabRegistryTrait;
use tabswitch::platform::{BrowserKind, HostBrowser, SurfaceKind};
use tabswitch::services::settings_store::SettingsStoreTrait;
use tabswitch::types::errors::PlatformError;
use tabswitch::types::events::BrowserEvent;
use tabswitch::types::settings::SortMethod;
use tabswitch::types::tab::{Tab, TabId, Window, WindowId};

/// Demo host that logs outbound browser calls instead of performing them.
struct ConsoleHost;

impl HostBrowser for ConsoleHost {
    fn focus_window(&mut self, window_id: WindowId) -> Result<(), PlatformError> {
        println!("  [host] focus window {}", window_id);
        Ok(())
    }

    fn activate_tab(&mut self, tab_id: TabId) -> Result<(), PlatformError> {
        println!("  [host] activate tab {}", tab_id);
        Ok(())
    }

    fn open_popup(&mut self) -> Result<(), PlatformError> {
        println!("  [host] open popup");
        Ok(())
    }

    fn open_side_panel(&mut self) -> Result<(), PlatformError> {
        println!("  [host] open side panel");
        Ok(())
    }

    fn close_surface(&mut self, surface: SurfaceKind) -> Result<(), PlatformError> {
        println!("  [host] close {:?}", surface);
        Ok(())
    }
}

fn tab(id: TabId, title: &str, url: &str) -> Tab {
    Tab {
        id,
        title: title.to_string(),
        url: url.to_string(),
        fav_icon_url: None,
        window_id: 1,
        pinned: false,
        active: false,
        incognito: false,
        last_accessed: None,
    }
}

fn main() {
    env_logger::init();

    let mut app = BackgroundApp::new(BrowserKind::Chromium, Some("demo_settings.json".into()));
    let mut host = ConsoleHost;
    app.startup();

    println!("TabSwitch demo — capabilities: {:?}", app.capabilities);
    println!();

    // One window, four tabs
    app.handle_event(
        BrowserEvent::WindowCreated {
            window: Window {
                id: 1,
                focused: true,
                incognito: false,
            },
        },
        &mut host,
    );
    for (id, title, url) in [
        (1, "Gmail", "https://mail.google.com"),
        (2, "GitHub", "https://github.com"),
        (3, "Calendar", "https://calendar.google.com"),
        (4, "Rust docs", "https://doc.rust-lang.org"),
    ] {
        app.handle_event(
            BrowserEvent::TabCreated {
                tab: tab(id, title, url),
            },
            &mut host,
        );
    }

    // Visit a few tabs
    for id in [2, 4, 2, 3] {
        app.handle_event(
            BrowserEvent::TabActivated {
                tab_id: id,
                window_id: 1,
            },
            &mut host,
        );
    }
    println!("Visit order (most recent first): {:?}", app.tracker.order());
    println!("Open tabs: {}", app.registry.tab_count());
    println!();

    let list = app.display_list(None, "");
    println!("Display list (most recently visited, no query):");
    for t in &list.tabs {
        println!("  {} — {}", t.id, t.title);
    }
    println!();

    let list = app.display_list(None, "g");
    println!("Display list for query \"g\":");
    for t in &list.tabs {
        println!("  {} — {}", t.id, t.title);
    }
    println!();

    app.set_sort_method(SortMethod::Alphabetical);
    let list = app.display_list(None, "");
    println!(
        "Alphabetical (sort method now {:?}):",
        app.settings.settings().sort_method
    );
    for t in &list.tabs {
        println!("  {} — {}", t.id, t.title);
    }
    println!();

    println!("Switching to tab 4 from the popup:");
    app.switch_to_tab(&mut host, 4, SurfaceKind::Popup)
        .expect("switch failed");

    let _ = std::fs::remove_file("demo_settings.json");
}
