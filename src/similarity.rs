//! Text similarity between an outline node and a source passage.
//!
//! Outline nodes are summaries, so the scorer favours containment (a node that
//! abbreviates a longer passage) and falls back to a blend of
//! longest-common-substring and token overlap.
//!
//! The scorer is called as `similarity(node_text, candidate_text)`
//! consistently; the blended rule is not symmetric.

use std::collections::HashSet;

use crate::text::normalize;

/// Base score when the query is contained in the candidate.
const CONTAINED_IN_CANDIDATE_BASE: f64 = 0.8;
/// Base score when the candidate is contained in the query.
const CONTAINS_CANDIDATE_BASE: f64 = 0.7;
const CONTAINMENT_LENGTH_WEIGHT: f64 = 0.1;

const LCS_WEIGHT: f64 = 0.5;
const TOKEN_WEIGHT: f64 = 0.5;

const TOKEN_EXACT: f64 = 1.0;
const TOKEN_CONTAINED: f64 = 0.8;
const TOKEN_PARTIAL: f64 = 0.2;
/// Tokens shorter than this never earn partial credit.
const PARTIAL_MIN_TOKEN_LEN: usize = 3;

/// Similarity in `[0, 1]` between a query (`a`) and a candidate (`b`).
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = normalize(a);
    let b = normalize(b);
    normalized_similarity(&a, &b)
}

/// [`similarity`] over strings that are already normalized.
pub fn normalized_similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (a_len, b_len) = (a_chars.len(), b_chars.len());

    if b.contains(a) {
        return CONTAINED_IN_CANDIDATE_BASE
            + CONTAINMENT_LENGTH_WEIGHT * (a_len as f64 / b_len as f64);
    }
    if a.contains(b) {
        return CONTAINS_CANDIDATE_BASE
            + CONTAINMENT_LENGTH_WEIGHT * (b_len as f64 / a_len as f64);
    }

    let lcs_ratio = lcs_chars(&a_chars, &b_chars) as f64 / a_len.max(b_len) as f64;
    let overlap = token_overlap(a, b);

    (LCS_WEIGHT * lcs_ratio + TOKEN_WEIGHT * overlap).clamp(0.0, 1.0)
}

/// Length of the longest common substring (contiguous run) of two strings,
/// counted in characters.
pub fn lcs(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    lcs_chars(&a, &b)
}

/// Classic O(m·n) dynamic program, keeping a single previous row.
fn lcs_chars(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    let mut best = 0;

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb { prev[j] + 1 } else { 0 };
            best = best.max(curr[j + 1]);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}

/// Weighted share of `a`'s tokens that find a counterpart among `b`'s.
fn token_overlap(a: &str, b: &str) -> f64 {
    let a_tokens: Vec<&str> = a.split_whitespace().collect();
    if a_tokens.is_empty() {
        return 0.0;
    }
    let b_tokens: Vec<&str> = b.split_whitespace().collect();
    let b_set: HashSet<&str> = b_tokens.iter().copied().collect();

    let matched: f64 = a_tokens
        .iter()
        .map(|token| token_credit(token, &b_tokens, &b_set))
        .sum();

    matched / a_tokens.len() as f64
}

fn token_credit(token: &str, b_tokens: &[&str], b_set: &HashSet<&str>) -> f64 {
    if b_set.contains(token) {
        return TOKEN_EXACT;
    }
    if b_tokens
        .iter()
        .any(|other| other.contains(token) || token.contains(other))
    {
        return TOKEN_CONTAINED;
    }

    let token_chars: Vec<char> = token.chars().collect();
    if token_chars.len() < PARTIAL_MIN_TOKEN_LEN {
        return 0.0;
    }
    let partial = b_tokens.iter().any(|other| {
        let other_chars: Vec<char> = other.chars().collect();
        if other_chars.len() < PARTIAL_MIN_TOKEN_LEN {
            return false;
        }
        let shorter = token_chars.len().min(other_chars.len()) as f64;
        let needed = (PARTIAL_MIN_TOKEN_LEN as f64).min(0.6 * shorter);
        lcs_chars(&token_chars, &other_chars) as f64 >= needed
    });

    if partial {
        TOKEN_PARTIAL
    } else {
        0.0
    }
}
