//! Source document rendering for `LensApp`.

use std::time::Instant;

use eframe::egui;
use mindmap_lens::highlight::SourcePanel;

use super::LensApp;
use crate::ui::{element_frame, role_text};

impl LensApp {
    /// Decorated source elements; honours a due scroll request.
    pub fn draw_source(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let panel = self.aligner.panel_mut();
        if !panel.is_visible() {
            ui.centered_and_justified(|ui| {
                ui.label("Source panel hidden");
            });
            return;
        }

        let now = Instant::now();
        let scroll_to = panel.take_due_scroll(now);
        if let Some(due) = panel.scroll_deadline() {
            ctx.request_repaint_after(due.saturating_duration_since(now));
        }

        let panel = self.aligner.panel();
        let document = panel.document();
        if !document.title.is_empty() {
            ui.heading(&document.title);
            ui.separator();
        }

        egui::ScrollArea::vertical()
            .id_salt("source_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for element in &document.elements {
                    let style = panel.style_of(element.id);
                    let response = element_frame(&style)
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.label(role_text(element.role, &element.text));
                        })
                        .response;
                    if scroll_to == Some(element.id) {
                        response.scroll_to_me(Some(egui::Align::Center));
                    }
                    ui.add_space(4.0);
                }
            });
    }
}
