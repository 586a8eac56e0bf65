//! Tuning knobs for the alignment engine.
//!
//! Every threshold, window size and bonus is hand-calibrated rather than
//! derived, so all of them are exposed here and can be overridden from a JSON
//! file. Any field left out of the file keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Error while loading a tuning file.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read tuning file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Candidate search window sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Ratios below this are treated as "start of outline"
    pub start_ratio: f64,
    /// Ratios above this are treated as "end of outline"
    pub end_ratio: f64,
    /// Target index (fraction of N) for start-of-outline nodes
    pub start_anchor: f64,
    /// Target index (fraction of N) for end-of-outline nodes
    pub end_anchor: f64,
    /// Half-window (fraction of N) at the outline extremes
    pub edge_half_fraction: f64,
    /// Half-window (fraction of N) elsewhere
    pub half_fraction: f64,
    /// Lower bound for any half-window, in elements
    pub min_half: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            start_ratio: 0.05,
            end_ratio: 0.95,
            start_anchor: 0.1,
            end_anchor: 0.9,
            edge_half_fraction: 0.2,
            half_fraction: 0.15,
            min_half: 15,
        }
    }
}

/// Multipliers applied per element role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagWeights {
    /// h1, h2
    pub heading: f64,
    /// h3..h6
    pub sub_heading: f64,
    pub paragraph: f64,
    pub list_item: f64,
    pub other: f64,
}

impl Default for TagWeights {
    fn default() -> Self {
        Self {
            heading: 1.3,
            sub_heading: 1.2,
            paragraph: 1.1,
            list_item: 1.05,
            other: 1.0,
        }
    }
}

/// Tier 1: windowed, position-aware scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionTierConfig {
    pub min_text_len: usize,
    pub threshold: f64,
    /// Maximum extra weight for an element sitting on the target index
    pub position_bonus: f64,
    /// Heading bonus when the node level is <= 2
    pub top_heading_bonus: f64,
    /// Heading bonus when the node level is 3
    pub heading_bonus: f64,
    /// Index distance under which a match counts as adjacent
    pub adjacency: usize,
    pub adjacent_ratio: f64,
    pub distant_ratio: f64,
    pub max_matches: usize,
}

impl Default for PositionTierConfig {
    fn default() -> Self {
        Self {
            min_text_len: 5,
            threshold: 15.0,
            position_bonus: 0.6,
            top_heading_bonus: 1.3,
            heading_bonus: 1.2,
            adjacency: 3,
            adjacent_ratio: 0.4,
            distant_ratio: 0.6,
            max_matches: 3,
        }
    }
}

/// Tier 2: whole-document best match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalTierConfig {
    pub min_text_len: usize,
    pub threshold: f64,
    pub keep_ratio: f64,
    pub max_matches: usize,
}

impl Default for GlobalTierConfig {
    fn default() -> Self {
        Self {
            min_text_len: 5,
            threshold: 30.0,
            keep_ratio: 0.6,
            max_matches: 8,
        }
    }
}

/// Tier 3: relaxed keyword matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordTierConfig {
    pub min_text_len: usize,
    pub keyword_weight: f64,
    pub similarity_weight: f64,
    pub threshold: f64,
    pub max_matches: usize,
}

impl Default for KeywordTierConfig {
    fn default() -> Self {
        Self {
            min_text_len: 10,
            keyword_weight: 50.0,
            similarity_weight: 50.0,
            threshold: 20.0,
            max_matches: 5,
        }
    }
}

/// Complete engine tuning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignConfig {
    pub window: WindowConfig,
    pub tag_weights: TagWeights,
    pub position: PositionTierConfig,
    pub global: GlobalTierConfig,
    pub keyword: KeywordTierConfig,
}

impl AlignConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }
}
