//! Keyboard command registry.
//!
//! Tracks the extension's named commands and their shortcuts, with conflict
//! detection and platform-specific modifier adaptation. The options surface
//! edits bindings through this registry; the background app consults it when
//! a command-invoked event arrives.

use std::collections::HashMap;

use crate::types::errors::CommandError;

/// Command that opens the tab search surface.
pub const CMD_TAB_SEARCH: &str = "tab-search";

/// One registered command with its current and default shortcut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub description: String,
    pub shortcut: String,
    pub default_shortcut: String,
}

/// Trait defining command registry operations.
pub trait CommandRegistryTrait {
    fn update_shortcut(&mut self, name: &str, keys: &str) -> Result<(), CommandError>;
    fn reset_shortcut(&mut self, name: &str) -> Result<(), CommandError>;
    fn shortcut(&self, name: &str) -> Option<&str>;
    fn list(&self) -> &HashMap<String, Command>;
    fn has_conflict(&self, keys: &str, exclude: Option<&str>) -> Option<String>;
    fn is_registered(&self, name: &str) -> bool;
}

/// In-memory command registry seeded with the extension's defaults.
pub struct CommandRegistry {
    commands: HashMap<String, Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        let mut commands = HashMap::new();
        commands.insert(
            CMD_TAB_SEARCH.to_string(),
            Command {
                description: "Open the tab search box".to_string(),
                shortcut: Self::adapt_for_platform("Ctrl+Shift+Space"),
                default_shortcut: Self::adapt_for_platform("Ctrl+Shift+Space"),
            },
        );
        Self { commands }
    }

    /// Adapts modifier keys for the current platform.
    fn adapt_for_platform(keys: &str) -> String {
        if cfg!(target_os = "macos") {
            keys.replace("Ctrl+", "Cmd+")
        } else {
            keys.to_string()
        }
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistryTrait for CommandRegistry {
    /// Rebinds a command to a new shortcut, rejecting empty keys and
    /// shortcuts already bound to another command.
    fn update_shortcut(&mut self, name: &str, keys: &str) -> Result<(), CommandError> {
        if keys.is_empty() {
            return Err(CommandError::InvalidShortcut(
                "Keys cannot be empty".to_string(),
            ));
        }
        if !self.commands.contains_key(name) {
            return Err(CommandError::NotFound(name.to_string()));
        }
        if let Some(holder) = self.has_conflict(keys, Some(name)) {
            return Err(CommandError::Conflict(format!(
                "'{}' is already bound to '{}'",
                keys, holder
            )));
        }
        let adapted = Self::adapt_for_platform(keys);
        if let Some(command) = self.commands.get_mut(name) {
            command.shortcut = adapted;
        }
        Ok(())
    }

    /// Restores a command's default shortcut.
    fn reset_shortcut(&mut self, name: &str) -> Result<(), CommandError> {
        let command = self
            .commands
            .get_mut(name)
            .ok_or_else(|| CommandError::NotFound(name.to_string()))?;
        command.shortcut = command.default_shortcut.clone();
        Ok(())
    }

    fn shortcut(&self, name: &str) -> Option<&str> {
        self.commands.get(name).map(|c| c.shortcut.as_str())
    }

    fn list(&self) -> &HashMap<String, Command> {
        &self.commands
    }

    fn has_conflict(&self, keys: &str, exclude: Option<&str>) -> Option<String> {
        let adapted = Self::adapt_for_platform(keys);
        for (name, command) in &self.commands {
            if command.shortcut == adapted {
                if let Some(excluded) = exclude {
                    if name == excluded {
                        continue;
                    }
                }
                return Some(name.clone());
            }
        }
        None
    }

    fn is_registered(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }
}
