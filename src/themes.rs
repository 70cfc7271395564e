use egui::epaint::Shadow;
use egui::style::Selection;
use egui::{Color32, RichText, Stroke, Style, TextStyle, Visuals};

mod style;
pub use style::Styled;

/// Effective text appearance for one slot of the dropdown field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldText {
    pub text_style: TextStyle,
    pub color: Color32,
    pub strong: bool,
}

impl FieldText {
    pub fn new(text_style: TextStyle, color: Color32) -> Self {
        Self {
            text_style,
            color,
            strong: false,
        }
    }

    pub fn strong(mut self) -> Self {
        self.strong = true;
        self
    }

    /// Apply this appearance to a piece of text.
    pub fn rich(&self, text: impl Into<String>) -> RichText {
        let rich = RichText::new(text)
            .text_style(self.text_style.clone())
            .color(self.color);
        if self.strong {
            rich.strong()
        } else {
            rich
        }
    }
}

/// Semantic style for the `DropdownField` widget.
///
/// Every field has a theme-derived default; see the `From<&Style>`
/// implementation below. A caller-supplied value always wins.
#[derive(Clone, Debug)]
pub struct DropdownStyle {
    /// Appearance of unselected menu rows.
    pub item_text: FieldText,
    /// Appearance of the row matching the current value.
    pub selected_text: FieldText,
    /// Appearance of the closed button's text.
    pub button_text: FieldText,
    /// Fill behind the field and its menu.
    pub fill: Color32,
    pub outline: Color32,
    pub icon_color: Color32,
    pub disabled_icon_color: Color32,
    pub corner_radius: f32,
    /// Shadow under the open menu.
    pub menu_shadow: Shadow,
}

impl From<&Style> for DropdownStyle {
    fn from(style: &Style) -> Self {
        let visuals = &style.visuals;
        let text_color = visuals.widgets.inactive.fg_stroke.color;
        let accent = visuals.selection.stroke.color;
        let item_text = FieldText::new(TextStyle::Body, text_color);
        // Selected rows overlay the accent color and strong weight on the
        // plain item appearance.
        let selected_text = FieldText {
            color: accent,
            ..item_text.clone()
        }
        .strong();

        Self {
            item_text,
            selected_text,
            button_text: FieldText::new(TextStyle::Button, text_color),
            fill: visuals.window_fill,
            outline: visuals.widgets.inactive.bg_stroke.color,
            icon_color: text_color,
            disabled_icon_color: blend(text_color, visuals.window_fill, 0.55),
            // The ambient theme's own field shape. Corner radii are uniform
            // in every theme we ship, so one corner is representative.
            corner_radius: f32::from(visuals.widgets.inactive.corner_radius.nw),
            menu_shadow: visuals.popup_shadow,
        }
    }
}

// Color utilities: simple sRGB linear interpolation for quick palette derivation
pub fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let r = (a.r() as f32 * (1.0 - t) + b.r() as f32 * t).round() as u8;
    let g = (a.g() as f32 * (1.0 - t) + b.g() as f32 * t).round() as u8;
    let bch = (a.b() as f32 * (1.0 - t) + b.b() as f32 * t).round() as u8;
    Color32::from_rgb(r, g, bch)
}

/// Build visuals from a three-color palette for a clean, workshop feel.
pub fn workbench(
    foreground: Color32,
    background: Color32,
    accent: Color32,
    mut base_visuals: Visuals,
) -> Visuals {
    let border = blend(foreground, background, 0.4);
    let surface = blend(background, foreground, 0.04);
    let control_fill_hover = blend(background, foreground, 0.08);
    let selection_fill = blend(background, accent, 0.18);
    let shadow_color = blend(background, foreground, 0.5);

    base_visuals.window_fill = background;
    base_visuals.panel_fill = background;
    base_visuals.faint_bg_color = surface;
    base_visuals.extreme_bg_color = control_fill_hover;
    base_visuals.selection = Selection {
        bg_fill: selection_fill,
        stroke: Stroke::new(1.5, accent),
    };
    base_visuals.window_stroke = Stroke::new(1.0, border);
    base_visuals.menu_corner_radius = 2.0.into();
    base_visuals.popup_shadow = Shadow {
        offset: [3, 3],
        blur: 0,
        spread: 0,
        color: shadow_color,
    };

    let border_stroke = Stroke::new(1.0, border);
    let hover_stroke = Stroke::new(1.4, border);
    let active_stroke = Stroke::new(1.4, accent);
    let fg_stroke = Stroke::new(1.0, foreground);

    base_visuals.widgets.noninteractive.bg_fill = surface;
    base_visuals.widgets.noninteractive.weak_bg_fill = surface;
    base_visuals.widgets.noninteractive.bg_stroke = border_stroke;
    base_visuals.widgets.noninteractive.fg_stroke = fg_stroke;
    base_visuals.widgets.noninteractive.corner_radius = 0.0.into();

    base_visuals.widgets.inactive.bg_fill = background;
    base_visuals.widgets.inactive.weak_bg_fill = background;
    base_visuals.widgets.inactive.bg_stroke = border_stroke;
    base_visuals.widgets.inactive.fg_stroke = fg_stroke;
    base_visuals.widgets.inactive.corner_radius = 2.0.into();

    base_visuals.widgets.hovered.bg_fill = control_fill_hover;
    base_visuals.widgets.hovered.weak_bg_fill = control_fill_hover;
    base_visuals.widgets.hovered.bg_stroke = hover_stroke;
    base_visuals.widgets.hovered.fg_stroke = fg_stroke;
    base_visuals.widgets.hovered.corner_radius = 2.0.into();

    base_visuals.widgets.active.bg_fill = control_fill_hover;
    base_visuals.widgets.active.weak_bg_fill = control_fill_hover;
    base_visuals.widgets.active.bg_stroke = active_stroke;
    base_visuals.widgets.active.fg_stroke = fg_stroke;
    base_visuals.widgets.active.corner_radius = 2.0.into();

    base_visuals.widgets.open.bg_fill = control_fill_hover;
    base_visuals.widgets.open.weak_bg_fill = control_fill_hover;
    base_visuals.widgets.open.bg_stroke = active_stroke;
    base_visuals.widgets.open.fg_stroke = fg_stroke;
    base_visuals.widgets.open.corner_radius = 2.0.into();

    base_visuals
}

pub fn workbench_light() -> Style {
    let mut style = Style::default();

    let foreground = Color32::from_rgb(0x1c, 0x1c, 0x1c);
    let background = Color32::from_rgb(0xf4, 0xf2, 0xee);
    let accent = Color32::from_rgb(0xd9, 0x6d, 0x1f);

    style.visuals = workbench(foreground, background, accent, Visuals::light());
    style.spacing.item_spacing = egui::vec2(12.0, 10.0);
    style.spacing.button_padding = egui::vec2(12.0, 8.0);
    style.spacing.interact_size = egui::vec2(34.0, 26.0);
    style.animation_time = 0.12;
    style
}

pub fn workbench_dark() -> Style {
    let mut style = Style::default();

    let foreground = Color32::from_rgb(0xec, 0xe9, 0xe2);
    let background = Color32::from_rgb(0x26, 0x27, 0x2d);
    let accent = Color32::from_rgb(0xe0, 0x80, 0x30);

    style.visuals = workbench(foreground, background, accent, Visuals::dark());
    style.spacing.item_spacing = egui::vec2(12.0, 10.0);
    style.spacing.button_padding = egui::vec2(12.0, 8.0);
    style.spacing.interact_size = egui::vec2(34.0, 26.0);
    style.animation_time = 0.12;
    style
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_endpoints() {
        let a = Color32::from_rgb(10, 20, 30);
        let b = Color32::from_rgb(200, 100, 50);
        assert_eq!(blend(a, b, 0.0), a);
        assert_eq!(blend(a, b, 1.0), b);
    }

    #[test]
    fn theme_derivation_uses_ambient_values() {
        let theme = workbench_light();
        let resolved = DropdownStyle::from(&theme);

        assert_eq!(resolved.item_text.text_style, TextStyle::Body);
        assert_eq!(resolved.button_text.text_style, TextStyle::Button);
        assert_eq!(resolved.fill, theme.visuals.window_fill);
        assert_eq!(
            resolved.outline,
            theme.visuals.widgets.inactive.bg_stroke.color
        );
        assert_eq!(resolved.menu_shadow, theme.visuals.popup_shadow);
        assert_eq!(
            resolved.corner_radius,
            f32::from(theme.visuals.widgets.inactive.corner_radius.nw)
        );
    }

    #[test]
    fn selected_text_overlays_accent_and_weight() {
        let theme = workbench_dark();
        let resolved = DropdownStyle::from(&theme);

        assert_eq!(
            resolved.selected_text.color,
            theme.visuals.selection.stroke.color
        );
        assert!(resolved.selected_text.strong);
        assert!(!resolved.item_text.strong);
        assert_eq!(
            resolved.selected_text.text_style,
            resolved.item_text.text_style
        );
    }

    #[test]
    fn workbench_presets_keep_their_modes() {
        assert!(!workbench_light().visuals.dark_mode);
        assert!(workbench_dark().visuals.dark_mode);
    }
}
