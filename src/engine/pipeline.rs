use std::time::Duration;

use crate::align::{locate, AlignRequest, MatchCandidate, MatchTier};
use crate::config::AlignConfig;
use crate::dom::ElementId;
use crate::error::{AlignError, InvalidInput};
use crate::highlight::{HighlightController, SourcePanel};
use crate::outline::OutlineSource;
use crate::text::normalize;

/// Successful highlight: which tier matched, what was scored and what ended
/// up decorated.
#[derive(Debug, Clone)]
pub struct HighlightReport {
    pub tier: MatchTier,
    pub matches: Vec<MatchCandidate>,
    pub decorated: Vec<ElementId>,
    pub primary: ElementId,
    pub faults: usize,
}

impl HighlightReport {
    /// Number of elements actually decorated.
    pub fn count(&self) -> usize {
        self.decorated.len()
    }
}

/// The alignment engine: Outline snapshot → Position → Window → Tiers → Highlight
///
/// Owns the presentation adapter and the highlight controller, so every
/// decoration change goes through `&mut self`.
pub struct SourceAligner<O, P> {
    outline: O,
    panel: P,
    config: AlignConfig,
    controller: HighlightController,
}

impl<O: OutlineSource, P: SourcePanel> SourceAligner<O, P> {
    pub fn new(outline: O, panel: P) -> Self {
        Self {
            outline,
            panel,
            config: AlignConfig::default(),
            controller: HighlightController::new(),
        }
    }

    /// Override the tuning constants.
    pub fn with_config(mut self, config: AlignConfig) -> Self {
        self.config = config;
        self
    }

    /// Delay before the primary match is brought into view.
    pub fn with_scroll_delay(mut self, delay: Duration) -> Self {
        self.controller = HighlightController::new().with_scroll_delay(delay);
        self
    }

    pub fn outline(&self) -> &O {
        &self.outline
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut P {
        &mut self.panel
    }

    pub fn controller(&self) -> &HighlightController {
        &self.controller
    }

    /// Locate and highlight the source passages for an outline node.
    ///
    /// Previous highlights are always removed, except when the request is
    /// rejected as invalid, which leaves all state untouched.
    pub fn highlight_source_paragraph(
        &mut self,
        node_text: &str,
        node_level: u32,
    ) -> Result<HighlightReport, AlignError> {
        let node_text = node_text.trim();
        if normalize(node_text).is_empty() {
            log::debug!("Highlight request rejected: {}", InvalidInput::EmptyNodeText);
            return Err(InvalidInput::EmptyNodeText.into());
        }

        let outline = self.outline.snapshot();
        if outline.is_empty() {
            log::debug!("Highlight request rejected: {}", InvalidInput::EmptyOutline);
            return Err(InvalidInput::EmptyOutline.into());
        }

        if !self.panel.is_visible() && !self.panel.force_visible() {
            log::warn!("Source panel unavailable, cannot highlight {:?}", node_text);
            self.controller.clear(&mut self.panel);
            return Err(AlignError::PanelUnavailable);
        }

        self.controller.clear(&mut self.panel);

        let document = self.panel.snapshot();
        let index = outline.index();
        let request = AlignRequest {
            node_text,
            level: node_level,
            outline: &index,
            document: &document,
        };

        let Some(alignment) = locate(request, &self.config) else {
            log::info!(
                "No source match for {:?} (level {}) across {} elements",
                node_text,
                node_level,
                document.len()
            );
            return Err(AlignError::NoMatchFound {
                node: node_text.to_string(),
            });
        };

        // Decoration follows the tier's order: document order for the
        // position tier, score order for global and keyword. The first
        // decorated element is the primary.
        let ids: Vec<ElementId> = alignment.matches.iter().map(|m| m.element).collect();
        let applied = self.controller.highlight(&mut self.panel, &ids, node_level);

        let Some(primary) = applied.primary else {
            return Err(AlignError::DecorationFailed {
                faults: applied.faults,
            });
        };

        log::debug!(
            "Highlighted {} element(s) for {:?} via {} tier, primary {}",
            applied.decorated.len(),
            node_text,
            alignment.tier,
            primary
        );

        Ok(HighlightReport {
            tier: alignment.tier,
            matches: alignment.matches,
            decorated: applied.decorated,
            primary,
            faults: applied.faults,
        })
    }

    /// Remove every highlight from the source panel. Safe to call at any
    /// time; returns the number of elements restored.
    pub fn clear_source_highlight(&mut self) -> usize {
        self.controller.clear(&mut self.panel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{ElementRole, SourceDocument};
    use crate::highlight::{ElementStyle, MemoryPanel, PresentationFault, ScrollRequest};

    fn scenario() -> SourceAligner<&'static str, MemoryPanel> {
        let doc = SourceDocument::from_elements([
            (ElementRole::Heading(1), "Introduction"),
            (ElementRole::Paragraph, "Some text"),
            (ElementRole::Heading(2), "Historical background"),
        ]);
        SourceAligner::new("# Intro\n## History", MemoryPanel::new(doc))
    }

    #[test]
    fn empty_node_text_changes_nothing() {
        let mut aligner = scenario();
        aligner.highlight_source_paragraph("History", 2).unwrap();
        let err = aligner.highlight_source_paragraph("   ", 2).unwrap_err();
        assert_eq!(err, AlignError::InvalidInput(InvalidInput::EmptyNodeText));
        // the earlier highlight survives an invalid request
        assert_eq!(aligner.panel().highlighted_elements(), vec![ElementId(2)]);
    }

    #[test]
    fn punctuation_only_node_is_invalid() {
        let mut aligner = scenario();
        aligner.highlight_source_paragraph("History", 2).unwrap();
        let err = aligner.highlight_source_paragraph("!!! ...", 2).unwrap_err();
        assert_eq!(err, AlignError::InvalidInput(InvalidInput::EmptyNodeText));
        assert_eq!(aligner.panel().highlighted_elements(), vec![ElementId(2)]);
        assert!(aligner.controller().is_highlighted());
    }

    #[test]
    fn global_tier_decorates_in_score_order() {
        let doc = SourceDocument::from_elements([
            (ElementRole::Paragraph, "garbage collection pauses in detail and more"),
            (ElementRole::Paragraph, "garbage collection pauses"),
        ]);
        let mut aligner = SourceAligner::new("# Other topic", MemoryPanel::new(doc));
        let report = aligner
            .highlight_source_paragraph("garbage collection pauses", 2)
            .unwrap();
        assert_eq!(report.tier, MatchTier::Global);
        assert_eq!(report.decorated, vec![ElementId(1), ElementId(0)]);
        assert_eq!(report.primary, ElementId(1));
    }

    #[test]
    fn empty_outline_is_invalid() {
        let mut aligner = SourceAligner::new("no headings here", MemoryPanel::new(SourceDocument::default()));
        assert_eq!(
            aligner.highlight_source_paragraph("Anything", 1).unwrap_err(),
            AlignError::InvalidInput(InvalidInput::EmptyOutline)
        );
    }

    #[test]
    fn hidden_panel_is_forced_visible() {
        let doc = SourceDocument::from_elements([(ElementRole::Heading(2), "Historical background")]);
        let mut aligner = SourceAligner::new("## History", MemoryPanel::new(doc).hidden(true));
        let report = aligner.highlight_source_paragraph("History", 2).unwrap();
        assert!(aligner.panel().is_visible());
        assert_eq!(report.primary, ElementId(0));
    }

    #[test]
    fn panel_that_stays_hidden_is_reported() {
        let doc = SourceDocument::from_elements([(ElementRole::Heading(2), "Historical background")]);
        let mut aligner = SourceAligner::new("## History", MemoryPanel::new(doc).hidden(false));
        assert_eq!(
            aligner.highlight_source_paragraph("History", 2).unwrap_err(),
            AlignError::PanelUnavailable
        );
    }

    #[test]
    fn no_match_clears_previous_highlight() {
        let mut aligner = scenario();
        aligner.highlight_source_paragraph("History", 2).unwrap();
        let err = aligner.highlight_source_paragraph("xyzzy", 2).unwrap_err();
        assert_eq!(err, AlignError::NoMatchFound { node: "xyzzy".into() });
        assert!(aligner.panel().highlighted_elements().is_empty());
        assert!(!aligner.controller().is_highlighted());
    }

    #[test]
    fn scroll_delay_is_configurable() {
        let mut aligner = scenario().with_scroll_delay(Duration::from_millis(5));
        aligner.highlight_source_paragraph("History", 2).unwrap();
        assert_eq!(
            aligner.panel().scroll_requests().last(),
            Some(&ScrollRequest {
                element: ElementId(2),
                delay: Duration::from_millis(5),
            })
        );
    }

    /// Panel that refuses every write.
    struct ReadOnlyPanel(MemoryPanel);

    impl SourcePanel for ReadOnlyPanel {
        fn is_visible(&self) -> bool {
            true
        }
        fn force_visible(&mut self) -> bool {
            true
        }
        fn snapshot(&self) -> SourceDocument {
            self.0.snapshot()
        }
        fn style(&self, element: ElementId) -> Result<ElementStyle, PresentationFault> {
            self.0.style(element)
        }
        fn set_style(&mut self, element: ElementId, _: ElementStyle) -> Result<(), PresentationFault> {
            Err(PresentationFault::new(element, "read-only"))
        }
        fn highlighted_elements(&self) -> Vec<ElementId> {
            Vec::new()
        }
        fn bring_into_view(&mut self, _: ScrollRequest) {}
    }

    #[test]
    fn all_faults_is_decoration_failure() {
        let doc = SourceDocument::from_elements([(ElementRole::Heading(2), "Historical background")]);
        let mut aligner = SourceAligner::new("## History", ReadOnlyPanel(MemoryPanel::new(doc)));
        assert_eq!(
            aligner.highlight_source_paragraph("History", 2).unwrap_err(),
            AlignError::DecorationFailed { faults: 1 }
        );
    }
}
