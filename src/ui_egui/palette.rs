use egui::{Color32, Visuals};

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Colors for one render pass, derived from the host's egui visuals so the
/// bar follows whatever theme the embedding application runs.
#[derive(Clone, Copy)]
pub(crate) struct NavBarPalette {
    pub focused_bg: Color32,
    pub focused_text: Color32,
    pub text: Color32,
    pub group_border: Color32,
}

impl NavBarPalette {
    pub fn from_visuals(visuals: &Visuals) -> Self {
        Self {
            focused_bg: visuals.selection.bg_fill,
            focused_text: visuals.selection.stroke.color,
            text: visuals.widgets.inactive.fg_stroke.color,
            group_border: with_alpha(visuals.widgets.inactive.bg_stroke.color, 160),
        }
    }
}
