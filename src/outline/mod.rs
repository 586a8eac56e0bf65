//! Outline snapshot and position index.
//!
//! The outline is re-read from its serialized (markdown heading) form on
//! every engine call, so edits made elsewhere are always reflected.

use crate::text::char_len;

/// One heading-level entry of the generated outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineNode {
    pub level: u32,
    pub text: String,
}

impl OutlineNode {
    pub fn new(level: u32, text: impl Into<String>) -> Self {
        Self {
            level: level.max(1),
            text: text.into(),
        }
    }
}

/// Ordered outline nodes in reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outline {
    pub nodes: Vec<OutlineNode>,
}

impl Outline {
    /// Parse heading-style lines (`#` count = level). Non-heading lines and
    /// fenced code blocks are ignored.
    pub fn parse(serialized: &str) -> Self {
        let mut nodes = Vec::new();
        let mut in_fence = false;

        for line in serialized.lines() {
            let trimmed = line.trim_start();
            if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
                in_fence = !in_fence;
                continue;
            }
            if in_fence {
                continue;
            }
            if let Some(node) = parse_heading(trimmed) {
                nodes.push(node);
            }
        }

        Self { nodes }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn index(&self) -> OutlineIndex {
        OutlineIndex::from_outline(self)
    }
}

fn parse_heading(line: &str) -> Option<OutlineNode> {
    let level = line.chars().take_while(|&c| c == '#').count();
    if level == 0 {
        return None;
    }
    let rest = &line[level..];
    // "#tag" is not a heading
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let text = rest.trim();
    if text.is_empty() {
        return None;
    }
    Some(OutlineNode::new(level as u32, text))
}

/// Collaborator that can hand out the current serialized outline.
pub trait OutlineSource {
    fn serialized_outline(&self) -> String;

    fn snapshot(&self) -> Outline {
        Outline::parse(&self.serialized_outline())
    }
}

impl OutlineSource for String {
    fn serialized_outline(&self) -> String {
        self.clone()
    }
}

impl OutlineSource for &str {
    fn serialized_outline(&self) -> String {
        (*self).to_string()
    }
}

/// Flattened node texts used to estimate where a node sits in the outline.
#[derive(Debug, Clone, Default)]
pub struct OutlineIndex {
    entries: Vec<String>,
}

impl OutlineIndex {
    pub fn from_outline(outline: &Outline) -> Self {
        Self {
            entries: outline.nodes.iter().map(|n| n.text.trim().to_string()).collect(),
        }
    }

    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: texts.into_iter().map(|s| s.into().trim().to_string()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best-effort lookup of `node_text`: exact match first, else the entry
    /// with the best containment length ratio (earliest wins ties).
    pub fn find(&self, node_text: &str) -> Option<usize> {
        let needle = node_text.trim();
        if needle.is_empty() {
            return None;
        }
        if let Some(idx) = self.entries.iter().position(|e| e == needle) {
            return Some(idx);
        }

        let needle_len = char_len(needle);
        let mut best: Option<(usize, f64)> = None;
        for (idx, entry) in self.entries.iter().enumerate() {
            if entry.is_empty() || !(entry.contains(needle) || needle.contains(entry.as_str())) {
                continue;
            }
            let entry_len = char_len(entry);
            let score = needle_len.min(entry_len) as f64 / needle_len.max(entry_len) as f64;
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((idx, score));
            }
        }
        best.map(|(idx, _)| idx)
    }

    /// Fractional rank of `node_text` in `[0, 1]`, or `None` when the index
    /// is empty or the node cannot be found.
    pub fn position_ratio(&self, node_text: &str) -> Option<f64> {
        let idx = self.find(node_text)?;
        if self.entries.len() <= 1 {
            return Some(0.0);
        }
        Some(idx as f64 / (self.entries.len() - 1) as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_heading_levels() {
        let outline = Outline::parse("# Intro\n## History\nsome prose\n### Early days  \n");
        assert_eq!(
            outline.nodes,
            vec![
                OutlineNode::new(1, "Intro"),
                OutlineNode::new(2, "History"),
                OutlineNode::new(3, "Early days"),
            ]
        );
    }

    #[test]
    fn skips_tags_empty_headings_and_fences() {
        let outline = Outline::parse("#hashtag\n##   \n```\n# not a node\n```\n# Real");
        assert_eq!(outline.nodes, vec![OutlineNode::new(1, "Real")]);
    }

    #[test]
    fn exact_match_ratio() {
        let index = OutlineIndex::from_texts(["a", "b", "c", "d", "e"]);
        assert_eq!(index.position_ratio("c"), Some(0.5));
        assert_eq!(index.position_ratio("e"), Some(1.0));
    }

    #[test]
    fn single_node_ratio_is_zero() {
        let index = OutlineIndex::from_texts(["Only"]);
        assert_eq!(index.position_ratio("Only"), Some(0.0));
    }

    #[test]
    fn containment_prefers_closest_length() {
        let index = OutlineIndex::from_texts(["Memory", "Memory safety", "Memory safety in Rust"]);
        assert_eq!(index.find("safety in Rust"), Some(2));
        assert_eq!(index.find("Memory safety in"), Some(1));
        assert_eq!(index.find("safety"), Some(1));
    }

    #[test]
    fn unknown_when_missing_or_empty() {
        assert_eq!(OutlineIndex::default().position_ratio("x"), None);
        let index = OutlineIndex::from_texts(["alpha", "beta"]);
        assert_eq!(index.position_ratio("gamma"), None);
        assert_eq!(index.position_ratio("   "), None);
    }

    #[test]
    fn outline_source_reparses() {
        let serialized = String::from("# A\n## B");
        assert_eq!(serialized.snapshot().len(), 2);
    }
}
