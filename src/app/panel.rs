//! `SourcePanel` implementation backing the egui source view.
//!
//! Decoration state lives in an in-memory panel; the deferred scroll request
//! is kept as a deadline and consumed by the first frame drawn after it.

use std::time::Instant;

use mindmap_lens::dom::{ElementId, SourceDocument};
use mindmap_lens::highlight::{ElementStyle, MemoryPanel, PresentationFault, ScrollRequest, SourcePanel};

pub struct ViewerPanel {
    inner: MemoryPanel,
    pending_scroll: Option<(ElementId, Instant)>,
}

impl ViewerPanel {
    pub fn new(document: SourceDocument) -> Self {
        Self {
            inner: MemoryPanel::new(document),
            pending_scroll: None,
        }
    }

    pub fn document(&self) -> &SourceDocument {
        self.inner.document()
    }

    pub fn style_of(&self, element: ElementId) -> ElementStyle {
        self.inner.style_of(element).copied().unwrap_or_default()
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.inner.set_visible(visible);
        if !visible {
            self.pending_scroll = None;
        }
    }

    /// When the pending scroll becomes due, if any.
    pub fn scroll_deadline(&self) -> Option<Instant> {
        self.pending_scroll.map(|(_, due)| due)
    }

    /// Take the pending scroll target once its delay has elapsed.
    pub fn take_due_scroll(&mut self, now: Instant) -> Option<ElementId> {
        match self.pending_scroll {
            Some((element, due)) if due <= now => {
                self.pending_scroll = None;
                Some(element)
            }
            _ => None,
        }
    }
}

impl SourcePanel for ViewerPanel {
    fn is_visible(&self) -> bool {
        self.inner.is_visible()
    }

    fn force_visible(&mut self) -> bool {
        self.inner.force_visible()
    }

    fn snapshot(&self) -> SourceDocument {
        self.inner.snapshot()
    }

    fn style(&self, element: ElementId) -> Result<ElementStyle, PresentationFault> {
        self.inner.style(element)
    }

    fn set_style(&mut self, element: ElementId, style: ElementStyle) -> Result<(), PresentationFault> {
        self.inner.set_style(element, style)
    }

    fn highlighted_elements(&self) -> Vec<ElementId> {
        self.inner.highlighted_elements()
    }

    fn bring_into_view(&mut self, request: ScrollRequest) {
        self.pending_scroll = Some((request.element, Instant::now() + request.delay));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindmap_lens::dom::ElementRole;
    use std::time::Duration;

    #[test]
    fn scroll_waits_for_delay() {
        let doc = SourceDocument::from_elements([(ElementRole::Paragraph, "text")]);
        let mut panel = ViewerPanel::new(doc);
        panel.bring_into_view(ScrollRequest {
            element: ElementId(0),
            delay: Duration::from_secs(60),
        });
        assert_eq!(panel.take_due_scroll(Instant::now()), None);
        let later = Instant::now() + Duration::from_secs(61);
        assert_eq!(panel.take_due_scroll(later), Some(ElementId(0)));
        assert_eq!(panel.take_due_scroll(later), None);
    }

    #[test]
    fn hiding_drops_pending_scroll() {
        let doc = SourceDocument::from_elements([(ElementRole::Paragraph, "text")]);
        let mut panel = ViewerPanel::new(doc);
        panel.bring_into_view(ScrollRequest {
            element: ElementId(0),
            delay: Duration::ZERO,
        });
        panel.set_visible(false);
        assert_eq!(panel.scroll_deadline(), None);
    }
}
