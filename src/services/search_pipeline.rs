//! Tab sort/filter pipeline.
//!
//! A pure function of its inputs, re-run on every keystroke or data change:
//! exclude the caller's own tab, sort by the configured method, then filter
//! or re-rank by the query. Degenerate inputs (no tabs, no query, no visit
//! order) pass through without error; the only signal is an advisory
//! warning when the visit order is empty.

use crate::services::fuzzy::fuzzy_score;
use crate::types::message::{Message, MessageLog};
use crate::types::settings::SortMethod;
use crate::types::tab::{Tab, TabId};

/// Maximum number of tabs returned for a non-empty query, to bound UI
/// rendering cost.
pub const MAX_RESULTS: usize = 10;

/// Pipeline output: the tabs to display plus accumulated diagnostics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    pub tabs: Vec<Tab>,
    pub messages: MessageLog,
}

/// Produces the tab list a search surface should display.
///
/// `active_tab` is the caller's own tab; it is always excluded so the user
/// is not offered a switch to the tab they are already viewing. Sorting is
/// stable throughout: ties keep the tabs' original relative order.
pub fn compute_display_list(
    all_tabs: &[Tab],
    active_tab: Option<TabId>,
    mrv_order: &[TabId],
    sort_method: SortMethod,
    query: &str,
) -> DisplayList {
    let mut messages = MessageLog::new();
    let mut tabs: Vec<Tab> = all_tabs
        .iter()
        .filter(|tab| Some(tab.id) != active_tab)
        .cloned()
        .collect();

    match sort_method {
        SortMethod::Alphabetical => {
            tabs.sort_by(|a, b| a.title.cmp(&b.title));
        }
        SortMethod::MostRecentlyVisited => {
            if mrv_order.is_empty() {
                messages.push(Message::warning(
                    "Most Recently Visited sort is enabled, but no tabs have been visited yet.",
                    "Visit at least one tab to populate the visit order.",
                ));
            } else {
                // Stable sort: tabs absent from the order keep their original
                // relative order after all present tabs.
                tabs.sort_by_key(|tab| {
                    mrv_order
                        .iter()
                        .position(|id| *id == tab.id)
                        .unwrap_or(usize::MAX)
                });
            }
        }
        // Ordering is decided by the query ranking below; without a query
        // the original order stands.
        SortMethod::FuzzySearchScore => {}
    }

    if !query.is_empty() {
        let mut scored: Vec<(usize, Tab)> = tabs
            .into_iter()
            .filter_map(|tab| fuzzy_score(&tab.title, query).map(|score| (score, tab)))
            .collect();
        if sort_method == SortMethod::FuzzySearchScore {
            scored.sort_by_key(|(score, _)| *score);
        }
        tabs = scored.into_iter().map(|(_, tab)| tab).collect();
        tabs.truncate(MAX_RESULTS);
    }

    DisplayList { tabs, messages }
}
