//! Stateless egui helpers shared by the outline and source panels.

use mindmap_lens::dom::ElementRole;
use mindmap_lens::highlight::{ElementStyle, Rgba};

pub fn to_color32(c: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

/// Frame painting an element's current decoration.
pub fn element_frame(style: &ElementStyle) -> egui::Frame {
    let mut frame = egui::Frame::none().inner_margin(6.0).rounding(4.0);
    if let Some(bg) = style.background {
        frame = frame.fill(to_color32(bg));
    }
    if let Some(border) = style.border {
        frame = frame.stroke(egui::Stroke::new(border.width, to_color32(border.color)));
    }
    frame
}

/// Display text for a source element, sized by its role.
pub fn role_text(role: ElementRole, text: &str) -> egui::RichText {
    match role {
        ElementRole::Heading(1) => egui::RichText::new(text).size(28.0).strong(),
        ElementRole::Heading(2) => egui::RichText::new(text).size(22.0).strong(),
        ElementRole::Heading(_) => egui::RichText::new(text).size(18.0),
        ElementRole::ListItem => egui::RichText::new(format!("\u{2022} {}", text)),
        ElementRole::TableCell => egui::RichText::new(text).monospace(),
        ElementRole::Paragraph | ElementRole::Generic => egui::RichText::new(text),
    }
}

/// Display text for an outline node, sized by its level.
pub fn outline_text(level: u32, text: &str) -> egui::RichText {
    match level {
        0 | 1 => egui::RichText::new(text).size(18.0).strong(),
        2 => egui::RichText::new(text).size(16.0),
        _ => egui::RichText::new(text).size(14.0),
    }
}

/// Truncate a string to `max_chars`, appending "..." if truncated.
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let t: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", t)
    }
}
