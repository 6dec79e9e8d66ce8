//! Fuzzy subsequence matcher behind the command palette.
//!
//! A query matches when all of its characters appear in the candidate in
//! order (case-insensitive). The score rewards consecutive runs and hits on
//! word starts, so "boo" ranks "Bookings" above "Dashboard".

/// Score `query` against `candidate`. `None` means no match; higher is
/// better. An empty query matches everything with score 0.
pub fn fuzzy_match(query: &str, candidate: &str) -> Option<i32> {
    let query: Vec<char> = query.trim().to_lowercase().chars().collect();
    if query.is_empty() {
        return Some(0);
    }
    let candidate: Vec<char> = candidate.to_lowercase().chars().collect();

    let mut score = 0;
    let mut pos = 0usize;
    let mut prev_hit: Option<usize> = None;

    for &qc in &query {
        let hit = (pos..candidate.len()).find(|&i| candidate[i] == qc)?;

        score += 1;
        if prev_hit == Some(hit.wrapping_sub(1)) {
            // Consecutive run.
            score += 2;
        }
        if hit == 0 || matches!(candidate.get(hit.wrapping_sub(1)), Some(' ' | '-' | '_' | '/')) {
            // Word start.
            score += 3;
        }

        prev_hit = Some(hit);
        pos = hit + 1;
    }

    // Shorter candidates win ties between equal hit patterns.
    score -= (candidate.len() / 8) as i32;
    Some(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_returns_none() {
        assert_eq!(fuzzy_match("xyz", "Dashboard"), None);
    }

    #[test]
    fn test_subsequence_matches_case_insensitive() {
        assert!(fuzzy_match("dash", "Dashboard").is_some());
        assert!(fuzzy_match("DASH", "dashboard").is_some());
    }

    #[test]
    fn test_out_of_order_does_not_match() {
        assert_eq!(fuzzy_match("db", "bad"), None);
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert_eq!(fuzzy_match("", "anything"), Some(0));
        assert_eq!(fuzzy_match("   ", "anything"), Some(0));
    }

    #[test]
    fn test_consecutive_run_beats_scattered() {
        let consecutive = fuzzy_match("book", "Bookings").unwrap();
        let scattered = fuzzy_match("book", "Basketball hook").unwrap();
        assert!(consecutive > scattered);
    }

    #[test]
    fn test_word_start_beats_middle() {
        let at_start = fuzzy_match("co", "Open courts").unwrap();
        let in_middle = fuzzy_match("co", "falcons").unwrap();
        assert!(at_start > in_middle);
    }
}
