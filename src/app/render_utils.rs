use eframe::egui::{Color32, Painter, Rect};

/// Colors for the scene, passed into the renderer as one table rather than
/// scattered through the drawing code.
#[derive(Clone, Copy, Debug)]
pub(super) struct Palette {
    pub background: Color32,
    pub node_default: Color32,
    pub node_dimmed: Color32,
    pub node_highlight: Color32,
    pub link_default: Color32,
    pub link_highlight: Color32,
    pub text: Color32,
    pub search_accent: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(26, 26, 26),
            node_default: Color32::from_rgb(105, 179, 162),
            node_dimmed: Color32::from_rgb(42, 69, 66),
            node_highlight: Color32::from_rgb(255, 127, 80),
            link_default: Color32::from_rgb(153, 153, 153),
            link_highlight: Color32::from_rgb(255, 127, 80),
            text: Color32::from_rgb(245, 245, 245),
            search_accent: Color32::from_rgb(103, 196, 255),
        }
    }
}

pub(super) fn with_opacity(color: Color32, opacity: f32) -> Color32 {
    color.gamma_multiply(opacity.clamp(0.0, 1.0))
}

pub(super) fn draw_background(painter: &Painter, rect: Rect, palette: &Palette) {
    painter.rect_filled(rect, 0.0, palette.background);
}
