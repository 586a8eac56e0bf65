//! Toolbar rendering for `LensApp`.

use eframe::egui;
use mindmap_lens::highlight::SourcePanel;

use super::LensApp;

impl LensApp {
    /// Render the top toolbar strip.
    pub fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(4.0);

            let mut visible = self.aligner.panel().is_visible();
            if ui.toggle_value(&mut visible, "Source").changed() {
                self.set_source_visible(visible);
            }

            if ui
                .add_enabled(
                    self.aligner.controller().is_highlighted(),
                    egui::Button::new("Clear highlight"),
                )
                .clicked()
            {
                self.clear_highlight();
            }

            let dark_label = if self.dark_mode { "\u{263E}" } else { "\u{2600}" };
            if ui.button(dark_label).clicked() {
                self.dark_mode = !self.dark_mode;
            }

            ui.separator();
            ui.label(&self.status);
        });
    }
}
