use serde::{Deserialize, Serialize};

/// Strategy used to order the displayed tab list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortMethod {
    Alphabetical,
    MostRecentlyVisited,
    FuzzySearchScore,
}

impl SortMethod {
    /// The string stored under the `sort-method` settings key.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMethod::Alphabetical => "Alphabetical",
            SortMethod::MostRecentlyVisited => "MostRecentlyVisited",
            SortMethod::FuzzySearchScore => "FuzzySearchScore",
        }
    }

    /// Parses a stored `sort-method` value. Returns `None` for anything
    /// that is not one of the three known methods.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Alphabetical" => Some(SortMethod::Alphabetical),
            "MostRecentlyVisited" => Some(SortMethod::MostRecentlyVisited),
            "FuzzySearchScore" => Some(SortMethod::FuzzySearchScore),
            _ => None,
        }
    }
}

/// User settings for the tab switcher.
///
/// Persisted as two flat keys with no schema versioning, matching the
/// layout of the extension's local storage area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitcherSettings {
    /// Whether tab activations are recorded into the visit order.
    #[serde(rename = "track-mrv", default = "default_track_mrv")]
    pub track_mrv: bool,
    /// Which ordering the search surface displays.
    #[serde(rename = "sort-method", default = "default_sort_method")]
    pub sort_method: SortMethod,
}

fn default_track_mrv() -> bool {
    true
}

fn default_sort_method() -> SortMethod {
    SortMethod::MostRecentlyVisited
}

impl Default for SwitcherSettings {
    fn default() -> Self {
        Self {
            track_mrv: true,
            sort_method: SortMethod::MostRecentlyVisited,
        }
    }
}

/// One applied settings change, delivered to subscribers of the store's
/// change-notification stream.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsChange {
    TrackingEnabled { old: bool, new: bool },
    SortMethod { old: SortMethod, new: SortMethod },
}
