// State managers for the tab switcher.
// Managers handle stateful concerns: the visit order, tab snapshots, commands.

pub mod command_registry;
pub mod mrv_tracker;
pub mod tab_registry;
