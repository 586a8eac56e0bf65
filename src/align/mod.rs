//! Source alignment: from an outline node to the source elements it most
//! likely summarizes.
//!
//! Three tiers run in order and each only when the previous found nothing:
//!
//! 1. position-aware — windowed around the node's predicted location
//! 2. global        — best matches anywhere in the document
//! 3. keyword       — relaxed literal keyword presence
//!
//! [`locate`] is pure: it reads immutable snapshots and returns candidates.

pub mod scorer;
pub mod window;

pub use scorer::MatchCandidate;
pub use window::SearchWindow;

use std::fmt;

use crate::config::AlignConfig;
use crate::dom::SourceDocument;
use crate::outline::OutlineIndex;
use crate::text::{extract_keywords, normalize};

/// Which tier produced an alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    PositionAware,
    Global,
    Keyword,
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PositionAware => "position-aware",
            Self::Global => "global",
            Self::Keyword => "keyword",
        })
    }
}

/// Winners of a successful search. `locate` never returns an empty
/// `matches`; the first entry is the primary match.
#[derive(Debug, Clone)]
pub struct Alignment {
    pub tier: MatchTier,
    pub matches: Vec<MatchCandidate>,
    pub window: Option<SearchWindow>,
}

impl Alignment {
    pub fn primary(&self) -> Option<&MatchCandidate> {
        self.matches.first()
    }
}

/// Everything one search needs, borrowed from the caller's snapshots.
#[derive(Debug, Clone, Copy)]
pub struct AlignRequest<'a> {
    pub node_text: &'a str,
    pub level: u32,
    pub outline: &'a OutlineIndex,
    pub document: &'a SourceDocument,
}

/// Locate the source elements for an outline node. `None` means every tier
/// came up empty.
pub fn locate(req: AlignRequest<'_>, cfg: &AlignConfig) -> Option<Alignment> {
    let query = normalize(req.node_text);
    if query.is_empty() || req.document.is_empty() {
        return None;
    }

    let ratio = req.outline.position_ratio(req.node_text);
    let keywords = extract_keywords(req.node_text);
    let window = SearchWindow::derive(ratio, req.level, req.document.len(), &cfg.window);

    if let Some(ref w) = window {
        let matches = scorer::position_aware(&query, req.level, req.document, w, cfg);
        log::debug!(
            "Position tier: ratio={:?} window={}..={} target={} -> {} matches",
            ratio,
            w.start,
            w.end,
            w.target,
            matches.len()
        );
        if !matches.is_empty() {
            return Some(Alignment {
                tier: MatchTier::PositionAware,
                matches,
                window,
            });
        }
    } else {
        log::debug!("No outline position for {:?}, skipping to global tier", req.node_text);
    }

    let matches = scorer::global_best(&query, req.document, cfg);
    log::debug!("Global tier -> {} matches", matches.len());
    if !matches.is_empty() {
        return Some(Alignment {
            tier: MatchTier::Global,
            matches,
            window,
        });
    }

    let matches = scorer::relaxed_keywords(&query, &keywords, req.document, cfg);
    log::debug!("Keyword tier {:?} -> {} matches", keywords, matches.len());
    if !matches.is_empty() {
        return Some(Alignment {
            tier: MatchTier::Keyword,
            matches,
            window,
        });
    }

    None
}
