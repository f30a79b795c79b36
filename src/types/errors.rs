use std::fmt;

use super::tab::{TabId, WindowId};

// === SettingsError ===

/// Errors related to settings persistence.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is not one of the persisted keys.
    InvalidKey(String),
    /// The provided settings value has the wrong type or is unrecognized.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

// === PlatformError ===

/// Errors from the host browser boundary.
#[derive(Debug)]
pub enum PlatformError {
    /// An expected browser API is missing on this host.
    ApiUnavailable(String),
    /// The target tab no longer exists.
    TabNotFound(TabId),
    /// The target window no longer exists.
    WindowNotFound(WindowId),
    /// Failed to deliver a command to the host.
    Transport(String),
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::ApiUnavailable(api) => {
                write!(f, "Browser API unavailable: {}", api)
            }
            PlatformError::TabNotFound(id) => write!(f, "Tab not found: {}", id),
            PlatformError::WindowNotFound(id) => write!(f, "Window not found: {}", id),
            PlatformError::Transport(msg) => write!(f, "Host transport error: {}", msg),
        }
    }
}

impl std::error::Error for PlatformError {}

// === CommandError ===

/// Errors related to keyboard command bindings.
#[derive(Debug)]
pub enum CommandError {
    /// No command is registered under the given name.
    NotFound(String),
    /// The shortcut is already bound to another command.
    Conflict(String),
    /// The provided key combination is invalid.
    InvalidShortcut(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::NotFound(name) => write!(f, "Command not found: {}", name),
            CommandError::Conflict(msg) => write!(f, "Shortcut conflict: {}", msg),
            CommandError::InvalidShortcut(keys) => {
                write!(f, "Invalid shortcut keys: {}", keys)
            }
        }
    }
}

impl std::error::Error for CommandError {}
