// Platform-specific paths for the background host process.
// Config (Linux): $XDG_CONFIG_HOME/tabswitch or ~/.config/tabswitch
// Config (macOS): ~/Library/Application Support/TabSwitch
// Config (Windows): %APPDATA%/TabSwitch

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for the settings file.
pub fn config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
            PathBuf::from(xdg).join("tabswitch")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
            PathBuf::from(home).join(".config").join("tabswitch")
        }
    }
    #[cfg(target_os = "macos")]
    {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join("Library")
            .join("Application Support")
            .join("TabSwitch")
    }
    #[cfg(target_os = "windows")]
    {
        let appdata = env::var("APPDATA").unwrap_or_else(|_| String::from("."));
        PathBuf::from(appdata).join("TabSwitch")
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        PathBuf::from(".").join("tabswitch")
    }
}
