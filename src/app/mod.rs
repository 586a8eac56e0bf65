//! `LensApp` — the side-by-side outline / source viewer.
//!
//! - `panel`   — `SourcePanel` implementation for the source view
//! - `toolbar` — source visibility, clear, status line
//! - `outline` — clickable outline tree (left side panel)
//! - `source`  — decorated source document (central panel)

pub mod panel;
pub mod toolbar;
pub mod outline;
pub mod source;

use std::time::Instant;

use eframe::egui;
use mindmap_lens::outline::{Outline, OutlineSource};
use mindmap_lens::{AlignError, HighlightReport, SourceAligner};

use panel::ViewerPanel;

pub struct LensApp {
    pub aligner: SourceAligner<String, ViewerPanel>,
    /// Parsed copy of the aligner's outline, for drawing
    pub outline: Outline,
    pub selected: Option<usize>,
    pub status: String,
    pub dark_mode: bool,
}

impl LensApp {
    pub fn new(aligner: SourceAligner<String, ViewerPanel>) -> Self {
        let outline = aligner.outline().snapshot();
        let status = format!(
            "{} outline nodes, {} source elements",
            outline.len(),
            aligner.panel().document().len()
        );
        Self {
            aligner,
            outline,
            selected: None,
            status,
            dark_mode: false,
        }
    }

    /// Highlight the source passages for outline node `idx`.
    pub fn select_node(&mut self, idx: usize, ctx: &egui::Context) {
        let Some(node) = self.outline.nodes.get(idx).cloned() else {
            return;
        };
        self.selected = Some(idx);
        let result = self.aligner.highlight_source_paragraph(&node.text, node.level);
        self.status = describe(&node.text, &result);
        if let Some(due) = self.aligner.panel().scroll_deadline() {
            ctx.request_repaint_after(due.saturating_duration_since(Instant::now()));
        }
    }

    pub fn clear_highlight(&mut self) {
        self.selected = None;
        let restored = self.aligner.clear_source_highlight();
        self.status = format!("Cleared {} highlighted element(s)", restored);
    }

    pub fn set_source_visible(&mut self, visible: bool) {
        if !visible {
            self.clear_highlight();
        }
        self.aligner.panel_mut().set_visible(visible);
    }
}

fn describe(node: &str, result: &Result<HighlightReport, AlignError>) -> String {
    match result {
        Ok(report) => format!(
            "\"{}\": {} match(es) via {} tier",
            crate::ui::truncate_str(node, 40),
            report.count(),
            report.tier
        ),
        Err(AlignError::NoMatchFound { .. }) => format!(
            "\"{}\": no matching passage in the source",
            crate::ui::truncate_str(node, 40)
        ),
        Err(e) => e.to_string(),
    }
}

impl eframe::App for LensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui);
        });

        egui::SidePanel::left("outline")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| {
                self.draw_outline(ui, ctx);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_source(ui, ctx);
        });
    }
}
