//! Presentation adapter seam.
//!
//! The alignment core never touches the UI. Whatever renders the source
//! document implements [`SourcePanel`]; the highlight controller is its only
//! writer of decoration state.

use std::time::Duration;

use super::theme::{HighlightTheme, Rgba};
use crate::dom::{ElementId, SourceDocument};

/// Decoration failed on a single element. Recovered locally by the
/// controller; never aborts the rest of the batch.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("presentation fault on element {element}: {message}")]
pub struct PresentationFault {
    pub element: ElementId,
    pub message: String,
}

impl PresentationFault {
    pub fn new(element: ElementId, message: impl Into<String>) -> Self {
        Self {
            element,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Rgba,
}

/// Decoration fields of one rendered element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementStyle {
    pub background: Option<Rgba>,
    pub border: Option<Border>,
    /// Set while the element carries an outline highlight
    pub highlight: Option<HighlightTheme>,
}

impl ElementStyle {
    /// This style with `theme` painted over it.
    pub fn highlighted(self, theme: HighlightTheme) -> Self {
        let paint = theme.style();
        Self {
            background: Some(paint.background),
            border: Some(Border {
                width: paint.border_width,
                color: paint.border,
            }),
            highlight: Some(theme),
        }
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlight.is_some()
    }

    /// Strip highlight decoration from a style whose pre-highlight state is
    /// unknown: fields still holding the theme's paint are reset, anything
    /// else is left alone.
    pub fn without_highlight(self) -> Self {
        let Some(theme) = self.highlight else {
            return self;
        };
        let paint = theme.style();
        Self {
            background: self.background.filter(|c| *c != paint.background),
            border: self
                .border
                .filter(|b| b.color != paint.border || b.width != paint.border_width),
            highlight: None,
        }
    }
}

/// Deferred "bring into view" for the primary match. Honoured by the panel
/// once `delay` has elapsed so layout can settle first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub element: ElementId,
    pub delay: Duration,
}

/// A rendered source document that can be read and decorated.
pub trait SourcePanel {
    fn is_visible(&self) -> bool;

    /// Try to make a hidden panel visible; returns whether it now is.
    fn force_visible(&mut self) -> bool;

    /// Live snapshot of the panel's text-bearing elements.
    fn snapshot(&self) -> SourceDocument;

    fn style(&self, element: ElementId) -> Result<ElementStyle, PresentationFault>;

    fn set_style(&mut self, element: ElementId, style: ElementStyle) -> Result<(), PresentationFault>;

    /// Every element currently carrying a highlight, tracked or not.
    fn highlighted_elements(&self) -> Vec<ElementId>;

    fn bring_into_view(&mut self, request: ScrollRequest);
}

/// In-memory panel: the headless CLI backend and the test double.
#[derive(Debug, Clone)]
pub struct MemoryPanel {
    document: SourceDocument,
    styles: Vec<ElementStyle>,
    visible: bool,
    can_show: bool,
    scrolls: Vec<ScrollRequest>,
}

impl MemoryPanel {
    pub fn new(document: SourceDocument) -> Self {
        let styles = vec![ElementStyle::default(); document.len()];
        Self {
            document,
            styles,
            visible: true,
            can_show: true,
            scrolls: Vec::new(),
        }
    }

    /// Start hidden; `can_show` controls whether `force_visible` succeeds.
    pub fn hidden(mut self, can_show: bool) -> Self {
        self.visible = false;
        self.can_show = can_show;
        self
    }

    pub fn with_style(mut self, element: ElementId, style: ElementStyle) -> Self {
        if let Some(slot) = self.styles.get_mut(element.index()) {
            *slot = style;
        }
        self
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn document(&self) -> &SourceDocument {
        &self.document
    }

    pub fn style_of(&self, element: ElementId) -> Option<&ElementStyle> {
        self.styles.get(element.index())
    }

    pub fn scroll_requests(&self) -> &[ScrollRequest] {
        &self.scrolls
    }
}

impl SourcePanel for MemoryPanel {
    fn is_visible(&self) -> bool {
        self.visible
    }

    fn force_visible(&mut self) -> bool {
        if self.can_show {
            self.visible = true;
        }
        self.visible
    }

    fn snapshot(&self) -> SourceDocument {
        self.document.clone()
    }

    fn style(&self, element: ElementId) -> Result<ElementStyle, PresentationFault> {
        self.styles
            .get(element.index())
            .copied()
            .ok_or_else(|| PresentationFault::new(element, "no such element"))
    }

    fn set_style(&mut self, element: ElementId, style: ElementStyle) -> Result<(), PresentationFault> {
        let slot = self
            .styles
            .get_mut(element.index())
            .ok_or_else(|| PresentationFault::new(element, "no such element"))?;
        *slot = style;
        Ok(())
    }

    fn highlighted_elements(&self) -> Vec<ElementId> {
        self.styles
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_highlighted())
            .map(|(i, _)| ElementId(i))
            .collect()
    }

    fn bring_into_view(&mut self, request: ScrollRequest) {
        self.scrolls.push(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::ElementRole;

    #[test]
    fn strip_keeps_foreign_decoration() {
        let own = Rgba::rgba(1, 2, 3, 255);
        let styled = ElementStyle {
            background: Some(own),
            ..ElementStyle::default()
        };
        let mut lit = styled.highlighted(HighlightTheme::Level2);
        lit.background = Some(own);
        let stripped = lit.without_highlight();
        assert_eq!(stripped.background, Some(own));
        assert_eq!(stripped.border, None);
        assert!(!stripped.is_highlighted());
    }

    #[test]
    fn strip_is_noop_without_highlight() {
        let plain = ElementStyle::default();
        assert_eq!(plain.without_highlight(), plain);
    }

    #[test]
    fn memory_panel_faults_on_unknown_element() {
        let mut panel = MemoryPanel::new(SourceDocument::from_elements([(ElementRole::Paragraph, "x")]));
        assert!(panel.style(ElementId(5)).is_err());
        assert!(panel.set_style(ElementId(5), ElementStyle::default()).is_err());
    }

    #[test]
    fn hidden_panel_respects_can_show() {
        let doc = SourceDocument::default();
        let mut stuck = MemoryPanel::new(doc.clone()).hidden(false);
        assert!(!stuck.force_visible());
        let mut shy = MemoryPanel::new(doc).hidden(true);
        assert!(shy.force_visible());
    }
}
