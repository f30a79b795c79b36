// Services for the tab switcher.
// Services provide core functionality: settings persistence, fuzzy matching,
// the sort/filter pipeline.

pub mod fuzzy;
pub mod search_pipeline;
pub mod settings_store;
