/// Usage errors: the request cannot be served at all.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    /// Blank, or nothing left once punctuation is stripped
    #[error("outline node text is empty")]
    EmptyNodeText,
    #[error("outline has no nodes")]
    EmptyOutline,
}

/// Non-fatal outcomes of a highlight request. None of these leave stale
/// decorations behind.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AlignError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
    /// Every tier came up empty: the node has no literal counterpart in the
    /// source (typically a synthesized summary node).
    #[error("no source passage matches {node:?}")]
    NoMatchFound { node: String },
    #[error("source panel is missing or hidden")]
    PanelUnavailable,
    #[error("matches found but none could be decorated ({faults} faults)")]
    DecorationFailed { faults: usize },
}

impl AlignError {
    /// Whether the caller did something wrong, as opposed to the content not
    /// lining up.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
