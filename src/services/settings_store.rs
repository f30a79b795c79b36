// Settings store for the tab switcher.
// Loads, saves, and updates the two persisted keys, and notifies subscribers
// of every applied change. Settings are stored as a JSON file at the
// platform-specific config path.

use std::fs;
use std::path::Path;
use std::sync::mpsc::{self, Receiver, Sender};

use serde_json::Value;

use crate::platform::paths;
use crate::types::errors::SettingsError;
use crate::types::settings::{SettingsChange, SortMethod, SwitcherSettings};

/// Persisted key for the tracking-enabled flag.
pub const KEY_TRACK_MRV: &str = "track-mrv";
/// Persisted key for the sort method.
pub const KEY_SORT_METHOD: &str = "sort-method";

/// Trait defining the settings store interface.
pub trait SettingsStoreTrait {
    fn load(&mut self) -> Result<SwitcherSettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn settings(&self) -> &SwitcherSettings;
    fn set_tracking_enabled(&mut self, enabled: bool) -> Result<(), SettingsError>;
    fn set_sort_method(&mut self, method: SortMethod) -> Result<(), SettingsError>;
    fn apply_external(
        &mut self,
        key: &str,
        value: Option<&Value>,
    ) -> Result<Option<SettingsChange>, SettingsError>;
    fn subscribe(&mut self) -> Receiver<SettingsChange>;
    fn config_path(&self) -> &str;
}

/// Settings store implementation persisting to JSON on disk.
pub struct SettingsStore {
    config_path: String,
    settings: SwitcherSettings,
    subscribers: Vec<Sender<SettingsChange>>,
}

impl SettingsStore {
    /// Creates a new store.
    ///
    /// If `path_override` is `Some`, uses that path for the settings file.
    /// Otherwise, uses the platform-specific config directory.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = match path_override {
            Some(p) => p,
            None => paths::config_dir()
                .join("settings.json")
                .to_string_lossy()
                .to_string(),
        };

        Self {
            config_path,
            settings: SwitcherSettings::default(),
            subscribers: Vec::new(),
        }
    }

    fn notify(&mut self, change: SettingsChange) {
        // Subscribers whose receiving end is gone are dropped here.
        self.subscribers
            .retain(|subscriber| subscriber.send(change.clone()).is_ok());
    }
}

impl SettingsStoreTrait for SettingsStore {
    /// Loads settings from the JSON file.
    ///
    /// A missing file yields defaults; a malformed file is a
    /// serialization error.
    fn load(&mut self) -> Result<SwitcherSettings, SettingsError> {
        let path = Path::new(&self.config_path);

        if !path.exists() {
            self.settings = SwitcherSettings::default();
            return Ok(self.settings.clone());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| SettingsError::IoError(format!("Failed to read settings file: {}", e)))?;

        let settings: SwitcherSettings = serde_json::from_str(&content).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to parse settings file: {}", e))
        })?;

        self.settings = settings;
        Ok(self.settings.clone())
    }

    /// Saves the current settings, creating parent directories if needed.
    fn save(&self) -> Result<(), SettingsError> {
        let path = Path::new(&self.config_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SettingsError::IoError(format!("Failed to create settings directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;

        fs::write(path, json)
            .map_err(|e| SettingsError::IoError(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    fn settings(&self) -> &SwitcherSettings {
        &self.settings
    }

    /// Updates the tracking flag, persists, and notifies subscribers.
    ///
    /// Disabling tracking while the sort method is MostRecentlyVisited also
    /// flips the sort method to Alphabetical; MRV sort is unusable without
    /// tracking data.
    fn set_tracking_enabled(&mut self, enabled: bool) -> Result<(), SettingsError> {
        let old = self.settings.track_mrv;
        if old == enabled {
            return Ok(());
        }
        self.settings.track_mrv = enabled;

        let mut changes = vec![SettingsChange::TrackingEnabled { old, new: enabled }];
        if !enabled && self.settings.sort_method == SortMethod::MostRecentlyVisited {
            self.settings.sort_method = SortMethod::Alphabetical;
            changes.push(SettingsChange::SortMethod {
                old: SortMethod::MostRecentlyVisited,
                new: SortMethod::Alphabetical,
            });
        }

        self.save()?;
        for change in changes {
            self.notify(change);
        }
        Ok(())
    }

    /// Updates the sort method, persists, and notifies subscribers.
    fn set_sort_method(&mut self, method: SortMethod) -> Result<(), SettingsError> {
        let old = self.settings.sort_method;
        if old == method {
            return Ok(());
        }
        self.settings.sort_method = method;
        self.save()?;
        self.notify(SettingsChange::SortMethod { old, new: method });
        Ok(())
    }

    /// Applies a change reported by the host storage area (someone else
    /// wrote the key). Updates the in-memory value and notifies subscribers
    /// without writing back, since the storage area already holds the new
    /// value. Returns the applied change, or `None` when the stored value
    /// equals the current one.
    fn apply_external(
        &mut self,
        key: &str,
        value: Option<&Value>,
    ) -> Result<Option<SettingsChange>, SettingsError> {
        match key {
            KEY_TRACK_MRV => {
                // A removed key falls back to the default, like a fresh install.
                let new = match value {
                    Some(v) => v.as_bool().ok_or_else(|| {
                        SettingsError::InvalidValue(format!("{} must be a boolean", KEY_TRACK_MRV))
                    })?,
                    None => SwitcherSettings::default().track_mrv,
                };
                let old = self.settings.track_mrv;
                if old == new {
                    return Ok(None);
                }
                self.settings.track_mrv = new;
                let change = SettingsChange::TrackingEnabled { old, new };
                self.notify(change.clone());
                Ok(Some(change))
            }
            KEY_SORT_METHOD => {
                let new = match value {
                    Some(v) => {
                        let raw = v.as_str().ok_or_else(|| {
                            SettingsError::InvalidValue(format!(
                                "{} must be a string",
                                KEY_SORT_METHOD
                            ))
                        })?;
                        SortMethod::parse(raw).ok_or_else(|| {
                            SettingsError::InvalidValue(format!("unknown sort method: {}", raw))
                        })?
                    }
                    None => SwitcherSettings::default().sort_method,
                };
                let old = self.settings.sort_method;
                if old == new {
                    return Ok(None);
                }
                self.settings.sort_method = new;
                let change = SettingsChange::SortMethod { old, new };
                self.notify(change.clone());
                Ok(Some(change))
            }
            other => Err(SettingsError::InvalidKey(other.to_string())),
        }
    }

    /// Hands out a change-notification stream. Every applied change is sent
    /// to all live subscribers.
    fn subscribe(&mut self) -> Receiver<SettingsChange> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    fn config_path(&self) -> &str {
        &self.config_path
    }
}
