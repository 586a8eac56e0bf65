//! Per-tier candidate scoring and winner selection.
//!
//! Every tier works on an immutable [`SourceDocument`] and returns
//! candidates; nothing here touches presentation state.

use std::cmp::Ordering;

use super::window::SearchWindow;
use crate::config::{AlignConfig, TagWeights};
use crate::dom::{ElementId, ElementRole, SourceDocument, SourceElement};
use crate::similarity::normalized_similarity;
use crate::text::{char_len, normalize};

/// A scored source element, created per search and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCandidate {
    pub element: ElementId,
    pub score: f64,
    /// Index distance from the window target (0 outside the position tier)
    pub distance: usize,
    pub role: ElementRole,
}

/// Structural weight for an element role.
pub fn tag_weight(role: ElementRole, weights: &TagWeights) -> f64 {
    match role {
        ElementRole::Heading(1 | 2) => weights.heading,
        ElementRole::Heading(_) => weights.sub_heading,
        ElementRole::Paragraph => weights.paragraph,
        ElementRole::ListItem => weights.list_item,
        ElementRole::TableCell | ElementRole::Generic => weights.other,
    }
}

/// Descending by score, lower index first on ties.
fn by_score_desc(a: &MatchCandidate, b: &MatchCandidate) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.element.cmp(&b.element))
}

fn base_score(query: &str, element: &SourceElement) -> f64 {
    normalized_similarity(query, &normalize(&element.text)) * 100.0
}

/// Tier 1: score elements inside `window`, boosted by proximity to the
/// predicted index and by heading structure, then keep a small cluster.
pub fn position_aware(
    query: &str,
    level: u32,
    doc: &SourceDocument,
    window: &SearchWindow,
    cfg: &AlignConfig,
) -> Vec<MatchCandidate> {
    let tier = &cfg.position;
    let half = window.half.max(1) as f64;

    let mut scored: Vec<MatchCandidate> = doc
        .elements
        .get(window.start..=window.end)
        .unwrap_or_default()
        .iter()
        .filter(|e| char_len(&e.text) >= tier.min_text_len)
        .filter_map(|e| {
            let distance = window.distance(e.id.index());
            let closeness = (1.0 - distance as f64 / half).max(0.0);
            let position_bonus = 1.0 + closeness * tier.position_bonus;
            let heading_bonus = match (e.role.is_heading(), level) {
                (true, 0..=2) => tier.top_heading_bonus,
                (true, 3) => tier.heading_bonus,
                _ => 1.0,
            };
            let score = base_score(query, e)
                * tag_weight(e.role, &cfg.tag_weights)
                * position_bonus
                * heading_bonus;
            (score > tier.threshold).then_some(MatchCandidate {
                element: e.id,
                score,
                distance,
                role: e.role,
            })
        })
        .collect();

    scored.sort_by(by_score_desc);
    let mut selected = select_cluster(scored, cfg);
    selected.sort_by_key(|m| m.element);
    selected
}

/// Greedy cluster selection: the top match, plus neighbours that hold at
/// least `adjacent_ratio` of its score, plus distant matches that hold at
/// least `distant_ratio`.
fn select_cluster(sorted: Vec<MatchCandidate>, cfg: &AlignConfig) -> Vec<MatchCandidate> {
    let tier = &cfg.position;
    if tier.max_matches == 0 {
        return Vec::new();
    }
    let mut iter = sorted.into_iter();
    let Some(top) = iter.next() else {
        return Vec::new();
    };
    let top_score = top.score;
    let mut selected = vec![top];

    for candidate in iter {
        if selected.len() >= tier.max_matches {
            break;
        }
        let adjacent = selected
            .iter()
            .any(|s| s.element.index().abs_diff(candidate.element.index()) <= tier.adjacency);
        let needed = if adjacent {
            tier.adjacent_ratio
        } else {
            tier.distant_ratio
        };
        if candidate.score >= needed * top_score {
            selected.push(candidate);
        }
    }

    selected
}

/// Tier 2: unwindowed best matches without positional bonuses.
pub fn global_best(query: &str, doc: &SourceDocument, cfg: &AlignConfig) -> Vec<MatchCandidate> {
    let tier = &cfg.global;

    let mut scored: Vec<MatchCandidate> = doc
        .elements
        .iter()
        .filter(|e| char_len(&e.text) >= tier.min_text_len)
        .filter_map(|e| {
            let score = base_score(query, e) * tag_weight(e.role, &cfg.tag_weights);
            (score > tier.threshold).then_some(MatchCandidate {
                element: e.id,
                score,
                distance: 0,
                role: e.role,
            })
        })
        .collect();

    scored.sort_by(by_score_desc);
    let Some(best) = scored.first().map(|m| m.score) else {
        return scored;
    };
    scored.retain(|m| m.score >= tier.keep_ratio * best);
    scored.truncate(tier.max_matches);
    scored
}

/// Tier 3: literal keyword presence blended with similarity.
pub fn relaxed_keywords(
    query: &str,
    keywords: &[String],
    doc: &SourceDocument,
    cfg: &AlignConfig,
) -> Vec<MatchCandidate> {
    let tier = &cfg.keyword;
    if keywords.is_empty() {
        return Vec::new();
    }
    let lowered: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

    let mut scored: Vec<MatchCandidate> = doc
        .elements
        .iter()
        .filter(|e| char_len(&e.text) >= tier.min_text_len)
        .filter_map(|e| {
            let haystack = e.text.to_lowercase();
            let hits = lowered.iter().filter(|k| haystack.contains(k.as_str())).count();
            let match_ratio = hits as f64 / lowered.len() as f64;
            let sim = normalized_similarity(query, &normalize(&e.text));
            let score = match_ratio * tier.keyword_weight + sim * tier.similarity_weight;
            (score > tier.threshold).then_some(MatchCandidate {
                element: e.id,
                score,
                distance: 0,
                role: e.role,
            })
        })
        .collect();

    scored.sort_by(by_score_desc);
    scored.truncate(tier.max_matches);
    scored
}
