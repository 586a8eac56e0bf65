//! Text canonicalization shared by the scorers.
//!
//! - `normalize` — case/punctuation/whitespace folding before comparison
//! - `keywords`  — salient-token extraction for the relaxed fallback tier

pub mod normalize;
pub mod keywords;

pub use keywords::extract_keywords;
pub use normalize::normalize;

/// Length in Unicode scalar values. All length ratios in the engine use this
/// so CJK text is measured per character, not per UTF-8 byte.
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
