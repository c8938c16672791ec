use std::collections::HashSet;

use strsim::jaro_winkler;

use crate::planner::constants::{MATCH_THRESHOLD, SUGGESTION_THRESHOLD};

fn words(text: &str) -> HashSet<&str> {
    text.split_whitespace().collect()
}

/// Fraction of the candidate's words that also appear in the query.
///
/// Returns 0.0 for a candidate with no words.
pub fn overlap_score(query: &str, candidate: &str) -> f64 {
    let candidate_words = words(candidate);
    if candidate_words.is_empty() {
        return 0.0;
    }
    let query_words = words(query);
    let shared = query_words.intersection(&candidate_words).count();
    shared as f64 / candidate_words.len() as f64
}

/// Pick the candidate with the strictly highest overlap score.
///
/// Equal scores keep the earlier candidate, so callers control the tie-break
/// through iteration order. Scores at or below the threshold are rejected.
pub fn best_match<'a, I>(query: &str, candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<&'a str> = None;
    let mut best_score = 0.0;

    for candidate in candidates {
        let score = overlap_score(query, candidate);
        if score > best_score {
            best = Some(candidate);
            best_score = score;
        }
    }

    best.filter(|_| best_score > MATCH_THRESHOLD)
}

/// Closest candidate by Jaro-Winkler similarity, for error hints.
pub fn suggest<'a, I>(query: &str, candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    candidates
        .into_iter()
        .map(|c| (c, jaro_winkler(query, c)))
        .filter(|(_, sim)| *sim >= SUGGESTION_THRESHOLD)
        .fold(None, |best: Option<(&str, f64)>, (c, sim)| match best {
            Some((_, best_sim)) if best_sim >= sim => best,
            _ => Some((c, sim)),
        })
        .map(|(c, _)| c)
}
