//! Outline tree rendering for `LensApp`.

use eframe::egui;

use super::LensApp;
use crate::ui::outline_text;

impl LensApp {
    /// Clickable outline nodes, indented by level.
    pub fn draw_outline(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.heading("Outline");
        ui.separator();

        let mut clicked = None;
        egui::ScrollArea::vertical()
            .id_salt("outline_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (idx, node) in self.outline.nodes.iter().enumerate() {
                    ui.horizontal(|ui| {
                        ui.add_space(node.level.saturating_sub(1) as f32 * 14.0);
                        let selected = self.selected == Some(idx);
                        if ui
                            .selectable_label(selected, outline_text(node.level, &node.text))
                            .clicked()
                        {
                            clicked = Some(idx);
                        }
                    });
                }
            });

        if let Some(idx) = clicked {
            self.select_node(idx, ctx);
        }
    }
}
