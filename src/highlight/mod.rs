//! Highlight controller.
//!
//! Two states: Idle (no [`HighlightState`]) and Highlighted. Applying a new
//! highlight always tears down the previous one first, so highlights never
//! stack. Clearing restores every tracked element and then sweeps the panel
//! for untracked leftovers.

pub mod panel;
pub mod theme;

pub use panel::{Border, ElementStyle, MemoryPanel, PresentationFault, ScrollRequest, SourcePanel};
pub use theme::{HighlightTheme, Rgba};

use std::time::Duration;

use crate::dom::ElementId;

/// Default delay before the primary match is scrolled into view.
pub const DEFAULT_SCROLL_DELAY: Duration = Duration::from_millis(100);

/// What an element looked like before it was highlighted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestoreRecord {
    pub element: ElementId,
    pub prior: ElementStyle,
}

/// The currently decorated elements, in application order.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightState {
    pub records: Vec<RestoreRecord>,
    pub primary: ElementId,
    pub theme: HighlightTheme,
}

impl HighlightState {
    pub fn elements(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.records.iter().map(|r| r.element)
    }
}

/// Result of one `highlight` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Applied {
    pub decorated: Vec<ElementId>,
    pub primary: Option<ElementId>,
    /// Elements skipped because the panel refused to read or write them
    pub faults: usize,
}

#[derive(Debug)]
pub struct HighlightController {
    state: Option<HighlightState>,
    scroll_delay: Duration,
}

impl Default for HighlightController {
    fn default() -> Self {
        Self::new()
    }
}

impl HighlightController {
    pub fn new() -> Self {
        Self {
            state: None,
            scroll_delay: DEFAULT_SCROLL_DELAY,
        }
    }

    pub fn with_scroll_delay(mut self, delay: Duration) -> Self {
        self.scroll_delay = delay;
        self
    }

    pub fn is_highlighted(&self) -> bool {
        self.state.is_some()
    }

    pub fn state(&self) -> Option<&HighlightState> {
        self.state.as_ref()
    }

    /// Decorate `elements` (first = primary) with the theme for `level`.
    pub fn highlight<P>(&mut self, panel: &mut P, elements: &[ElementId], level: u32) -> Applied
    where
        P: SourcePanel + ?Sized,
    {
        if self.state.is_some() {
            self.clear(panel);
        }

        let theme = HighlightTheme::for_level(level);
        let mut applied = Applied::default();
        let mut records = Vec::with_capacity(elements.len());

        for &element in elements {
            let prior = match panel.style(element) {
                Ok(style) => style.without_highlight(),
                Err(fault) => {
                    log::warn!("Skipping highlight: {}", fault);
                    applied.faults += 1;
                    continue;
                }
            };
            if let Err(fault) = panel.set_style(element, prior.highlighted(theme)) {
                log::warn!("Skipping highlight: {}", fault);
                applied.faults += 1;
                continue;
            }
            records.push(RestoreRecord { element, prior });
            applied.decorated.push(element);
        }

        if let Some(&primary) = applied.decorated.first() {
            panel.bring_into_view(ScrollRequest {
                element: primary,
                delay: self.scroll_delay,
            });
            applied.primary = Some(primary);
            self.state = Some(HighlightState {
                records,
                primary,
                theme,
            });
        }

        applied
    }

    /// Restore tracked elements, then strip any leftover highlight anywhere
    /// in the panel. Safe to call when idle. Returns the number of elements
    /// touched.
    pub fn clear<P>(&mut self, panel: &mut P) -> usize
    where
        P: SourcePanel + ?Sized,
    {
        let mut touched = 0;

        if let Some(state) = self.state.take() {
            for record in state.records.iter().rev() {
                match panel.set_style(record.element, record.prior) {
                    Ok(()) => touched += 1,
                    Err(fault) => log::warn!("Restore failed: {}", fault),
                }
            }
        }

        for element in panel.highlighted_elements() {
            let restored = panel
                .style(element)
                .and_then(|style| panel.set_style(element, style.without_highlight()));
            match restored {
                Ok(()) => {
                    log::debug!("Swept untracked highlight from {}", element);
                    touched += 1;
                }
                Err(fault) => log::warn!("Sweep failed: {}", fault),
            }
        }

        touched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{ElementRole, SourceDocument};

    fn panel(n: usize) -> MemoryPanel {
        MemoryPanel::new(SourceDocument::from_elements(
            (0..n).map(|i| (ElementRole::Paragraph, format!("paragraph {i}"))),
        ))
    }

    #[test]
    fn highlight_decorates_and_scrolls_primary() {
        let mut p = panel(4);
        let mut ctl = HighlightController::new();
        let applied = ctl.highlight(&mut p, &[ElementId(1), ElementId(2)], 2);

        assert_eq!(applied.decorated, vec![ElementId(1), ElementId(2)]);
        assert_eq!(applied.primary, Some(ElementId(1)));
        assert_eq!(p.highlighted_elements(), vec![ElementId(1), ElementId(2)]);
        assert_eq!(p.style_of(ElementId(1)).unwrap().highlight, Some(HighlightTheme::Level2));
        assert_eq!(
            p.scroll_requests(),
            &[ScrollRequest {
                element: ElementId(1),
                delay: DEFAULT_SCROLL_DELAY,
            }]
        );
        assert!(ctl.is_highlighted());
    }

    #[test]
    fn clear_restores_prior_style() {
        let own = Rgba::rgba(10, 20, 30, 255);
        let prior = ElementStyle {
            background: Some(own),
            ..ElementStyle::default()
        };
        let mut p = panel(3).with_style(ElementId(0), prior);
        let mut ctl = HighlightController::new();
        ctl.highlight(&mut p, &[ElementId(0)], 1);
        assert_ne!(p.style_of(ElementId(0)), Some(&prior));

        ctl.clear(&mut p);
        assert_eq!(p.style_of(ElementId(0)), Some(&prior));
        assert!(!ctl.is_highlighted());
    }

    #[test]
    fn clear_twice_is_safe() {
        let mut p = panel(3);
        let mut ctl = HighlightController::new();
        ctl.highlight(&mut p, &[ElementId(0)], 1);
        ctl.clear(&mut p);
        assert_eq!(ctl.clear(&mut p), 0);
        assert!(p.highlighted_elements().is_empty());
    }

    #[test]
    fn clear_when_idle_is_noop() {
        let mut p = panel(2);
        assert_eq!(HighlightController::new().clear(&mut p), 0);
    }

    #[test]
    fn second_highlight_replaces_first() {
        let mut p = panel(6);
        let mut ctl = HighlightController::new();
        ctl.highlight(&mut p, &[ElementId(0), ElementId(1)], 1);
        ctl.highlight(&mut p, &[ElementId(4)], 3);
        assert_eq!(p.highlighted_elements(), vec![ElementId(4)]);
        assert_eq!(ctl.state().map(|s| s.primary), Some(ElementId(4)));
    }

    #[test]
    fn sweep_removes_untracked_leftovers() {
        let stale = ElementStyle::default().highlighted(HighlightTheme::Level3);
        let mut p = panel(3).with_style(ElementId(2), stale);
        let mut ctl = HighlightController::new();
        assert_eq!(ctl.clear(&mut p), 1);
        assert_eq!(p.style_of(ElementId(2)), Some(&ElementStyle::default()));
    }

    #[test]
    fn faulty_element_does_not_stop_batch() {
        let mut p = panel(2);
        let mut ctl = HighlightController::new();
        let applied = ctl.highlight(&mut p, &[ElementId(9), ElementId(1)], 1);
        assert_eq!(applied.faults, 1);
        assert_eq!(applied.decorated, vec![ElementId(1)]);
        assert_eq!(applied.primary, Some(ElementId(1)));
    }

    #[test]
    fn nothing_decorated_stays_idle() {
        let mut p = panel(1);
        let mut ctl = HighlightController::new();
        let applied = ctl.highlight(&mut p, &[ElementId(7)], 1);
        assert!(applied.decorated.is_empty());
        assert!(!ctl.is_highlighted());
        assert!(p.scroll_requests().is_empty());
    }
}
