//! Approximate string matching for search-as-you-type queries.
//!
//! A candidate matches when every pattern character appears in it in order,
//! case-insensitively. The score is the position of the first matched
//! character plus the gaps between matches, so lower is better and an exact
//! prefix match scores 0.

/// Returns true when all of `pattern`'s characters appear in `target` in
/// order (case-insensitive). An empty pattern matches everything.
pub fn fuzzy_matches(target: &str, pattern: &str) -> bool {
    fuzzy_score(target, pattern).is_some()
}

/// Scores `target` against `pattern`. `None` means no match.
pub fn fuzzy_score(target: &str, pattern: &str) -> Option<usize> {
    if pattern.is_empty() {
        return Some(0);
    }
    let target_chars: Vec<char> = target.to_lowercase().chars().collect();
    let pattern_chars: Vec<char> = pattern.to_lowercase().chars().collect();

    let mut pattern_idx = 0;
    let mut first_match_pos = None;
    let mut total_gaps = 0;
    let mut last_match_pos: Option<usize> = None;

    for (i, &c) in target_chars.iter().enumerate() {
        if pattern_idx < pattern_chars.len() && c == pattern_chars[pattern_idx] {
            if first_match_pos.is_none() {
                first_match_pos = Some(i);
            }
            if let Some(last) = last_match_pos {
                total_gaps += i - last - 1;
            }
            last_match_pos = Some(i);
            pattern_idx += 1;
        }
    }

    if pattern_idx == pattern_chars.len() {
        Some(first_match_pos.unwrap_or(0) + total_gaps)
    } else {
        None
    }
}
