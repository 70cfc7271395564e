use egui::epaint::Shadow;
use egui::{
    vec2, Align, Align2, Color32, Margin, Response, RichText, Sense, Shape, Stroke, Style,
    TextStyle, Ui, Vec2, Widget,
};

use crate::themes::{DropdownStyle, FieldText, Styled};
use crate::widgets::decoration::{self, FieldDecoration, TrailingSlot};

const ICON_SIZE: f32 = 16.0;

/// An icon slot of the field: either a text glyph or an image.
#[derive(Clone)]
pub enum FieldIcon<'a> {
    Glyph(RichText),
    Image(egui::Image<'a>),
}

impl FieldIcon<'_> {
    fn show(&self, ui: &mut Ui, tint: Color32) {
        match self {
            FieldIcon::Glyph(glyph) => {
                ui.label(glyph.clone().color(tint));
            }
            FieldIcon::Image(image) => {
                ui.add(
                    image
                        .clone()
                        .tint(tint)
                        .fit_to_exact_size(Vec2::splat(ICON_SIZE)),
                );
            }
        }
    }
}

impl<'a> From<RichText> for FieldIcon<'a> {
    fn from(glyph: RichText) -> Self {
        FieldIcon::Glyph(glyph)
    }
}

impl<'a> From<&str> for FieldIcon<'a> {
    fn from(glyph: &str) -> Self {
        FieldIcon::Glyph(RichText::new(glyph.to_owned()))
    }
}

impl<'a> From<egui::Image<'a>> for FieldIcon<'a> {
    fn from(image: egui::Image<'a>) -> Self {
        FieldIcon::Image(image)
    }
}

/// A themeable dropdown form field wrapping [`egui::ComboBox`].
///
/// The host control owns the menu overlay, open state, keyboard navigation
/// and focus; this widget resolves the field's style against the ambient
/// theme, assembles the decoration (label, hint, padding, prefix and trailing
/// icons) and notifies the caller when the selection changes. Selection state
/// belongs to the caller; the widget is rebuilt every frame.
#[must_use = "You should put this widget in a ui with `ui.add(widget);`"]
pub struct DropdownField<'a, T> {
    items: &'a [T],
    selected: &'a mut Option<T>,
    display: Box<dyn Fn(&T) -> String + 'a>,

    on_change: Option<Box<dyn FnMut(Option<&T>) + 'a>>,
    validator: Option<Box<dyn Fn(Option<&T>) -> Option<String> + 'a>>,
    hint: Option<RichText>,
    label: Option<RichText>,
    enabled: bool,
    autofocus: bool,
    salt: egui::Id,

    width: Option<f32>,
    margin: Margin,
    align: Align,
    menu_max_height: Option<f32>,
    item_padding: Option<Vec2>,

    prefix: Option<FieldIcon<'a>>,
    prefix_padding: Margin,
    suffix: Option<FieldIcon<'a>>,
    show_arrow: bool,
    arrow_glyph: Option<String>,
    icon_spacing: f32,

    style: Option<DropdownStyle>,
    item_text: Option<FieldText>,
    selected_text: Option<FieldText>,
    button_text: Option<FieldText>,
    fill: Option<Color32>,
    icon_color: Option<Color32>,
    disabled_icon_color: Option<Color32>,
    corner_radius: Option<f32>,
    menu_shadow: Option<Shadow>,
    elevation: Option<f32>,
    decoration: Option<FieldDecoration>,
}

impl<'a, T> DropdownField<'a, T> {
    pub fn new(
        items: &'a [T],
        selected: &'a mut Option<T>,
        display: impl Fn(&T) -> String + 'a,
    ) -> Self {
        Self {
            items,
            selected,
            display: Box::new(display),
            on_change: None,
            validator: None,
            hint: None,
            label: None,
            enabled: true,
            autofocus: false,
            salt: egui::Id::new("combofield"),
            width: None,
            margin: Margin::ZERO,
            align: Align::Min,
            menu_max_height: None,
            item_padding: None,
            prefix: None,
            prefix_padding: Margin::symmetric(8, 0),
            suffix: None,
            show_arrow: true,
            arrow_glyph: None,
            icon_spacing: 6.0,
            style: None,
            item_text: None,
            selected_text: None,
            button_text: None,
            fill: None,
            icon_color: None,
            disabled_icon_color: None,
            corner_radius: None,
            menu_shadow: None,
            elevation: None,
            decoration: None,
        }
    }

    /// Button text while no value is selected.
    pub fn hint(mut self, hint: impl Into<RichText>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Label rendered above the field.
    pub fn label_text(mut self, label: impl Into<RichText>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Called with the new selection after the user picks a row.
    pub fn on_change(mut self, on_change: impl FnMut(Option<&T>) + 'a) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    /// Error text returned here is rendered under the field in the theme's
    /// error color. The callback is opaque; if it panics, the panic
    /// propagates to the caller.
    pub fn validator(mut self, validator: impl Fn(Option<&T>) -> Option<String> + 'a) -> Self {
        self.validator = Some(Box::new(validator));
        self
    }

    /// A disabled field never invokes `on_change` and tints its icons with
    /// the disabled icon color.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Request focus the first time the field is shown.
    pub fn autofocus(mut self, autofocus: bool) -> Self {
        self.autofocus = autofocus;
        self
    }

    /// Distinguishes several fields in the same scope; also the focus handle.
    pub fn id_salt(mut self, salt: impl std::hash::Hash) -> Self {
        self.salt = egui::Id::new(salt);
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Outer margin around the whole field, label and error text included.
    pub fn margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    /// Horizontal alignment of the field within the available width.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Maximum height of the open menu before it scrolls.
    pub fn menu_max_height(mut self, height: f32) -> Self {
        self.menu_max_height = Some(height);
        self
    }

    /// Padding around each menu row.
    pub fn item_padding(mut self, padding: Vec2) -> Self {
        self.item_padding = Some(padding);
        self
    }

    /// Leading icon. It supplies the field's left inset, so the decoration's
    /// own left padding is dropped.
    pub fn prefix(mut self, icon: impl Into<FieldIcon<'a>>) -> Self {
        self.prefix = Some(icon.into());
        self
    }

    pub fn prefix_padding(mut self, padding: Margin) -> Self {
        self.prefix_padding = padding;
        self
    }

    /// Trailing icon rendered before the dropdown arrow.
    pub fn suffix(mut self, icon: impl Into<FieldIcon<'a>>) -> Self {
        self.suffix = Some(icon.into());
        self
    }

    /// Whether the dropdown arrow is rendered at all.
    pub fn show_arrow(mut self, show_arrow: bool) -> Self {
        self.show_arrow = show_arrow;
        self
    }

    /// Replace the default arrow with a text glyph.
    pub fn arrow_glyph(mut self, glyph: impl Into<String>) -> Self {
        self.arrow_glyph = Some(glyph.into());
        self
    }

    /// Spacing between the trailing icons.
    pub fn icon_spacing(mut self, spacing: f32) -> Self {
        self.icon_spacing = spacing;
        self
    }

    /// Appearance of unselected menu rows.
    pub fn item_text(mut self, text: FieldText) -> Self {
        self.item_text = Some(text);
        self
    }

    /// Appearance of the row matching the current value.
    pub fn selected_text(mut self, text: FieldText) -> Self {
        self.selected_text = Some(text);
        self
    }

    /// Appearance of the closed button's text.
    pub fn button_text(mut self, text: FieldText) -> Self {
        self.button_text = Some(text);
        self
    }

    /// Fill behind the field and its menu.
    pub fn fill(mut self, fill: Color32) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn icon_color(mut self, color: Color32) -> Self {
        self.icon_color = Some(color);
        self
    }

    pub fn disabled_icon_color(mut self, color: Color32) -> Self {
        self.disabled_icon_color = Some(color);
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    /// Explicit shadow under the open menu; wins over `elevation`.
    pub fn menu_shadow(mut self, shadow: Shadow) -> Self {
        self.menu_shadow = Some(shadow);
        self
    }

    /// Menu shadow strength when no explicit shadow is given.
    pub fn elevation(mut self, elevation: f32) -> Self {
        self.elevation = Some(elevation);
        self
    }

    /// Full decoration override; the prefix-inset rule still applies on top.
    pub fn decoration(mut self, decoration: FieldDecoration) -> Self {
        self.decoration = Some(decoration);
        self
    }

    /// Effective style: the full override if given, else theme-derived, with
    /// the individual builder knobs layered on top.
    fn resolved_style(&self, theme: &Style) -> DropdownStyle {
        let mut resolved = self
            .style
            .clone()
            .unwrap_or_else(|| DropdownStyle::from(theme));
        if let Some(text) = self.item_text.clone() {
            resolved.item_text = text;
        }
        if let Some(text) = self.selected_text.clone() {
            resolved.selected_text = text;
        }
        if let Some(text) = self.button_text.clone() {
            resolved.button_text = text;
        }
        if let Some(fill) = self.fill {
            resolved.fill = fill;
        }
        if let Some(color) = self.icon_color {
            resolved.icon_color = color;
        }
        if let Some(color) = self.disabled_icon_color {
            resolved.disabled_icon_color = color;
        }
        if let Some(radius) = self.corner_radius {
            resolved.corner_radius = radius;
        }
        if let Some(shadow) = self.menu_shadow {
            resolved.menu_shadow = shadow;
        } else if let Some(elevation) = self.elevation {
            resolved.menu_shadow = elevation_shadow(elevation, resolved.menu_shadow.color);
        }
        resolved
    }

    fn resolved_decoration(&self, style: &DropdownStyle) -> FieldDecoration {
        let decoration = self.decoration.clone().unwrap_or_else(|| {
            FieldDecoration::synthesized(self.hint.clone(), self.label.clone(), style)
        });
        if self.prefix.is_some() {
            decoration.without_left_inset()
        } else {
            decoration
        }
    }

    fn icon_tint(&self, style: &DropdownStyle) -> Color32 {
        if self.enabled {
            style.icon_color
        } else {
            style.disabled_icon_color
        }
    }

    fn current_label(&self) -> Option<String> {
        self.selected.as_ref().map(|value| (self.display)(value))
    }
}

impl<T: PartialEq> DropdownField<'_, T> {
    fn is_selected(&self, item: &T) -> bool {
        self.selected.as_ref() == Some(item)
    }

    /// The row matching the current value gets the selected appearance,
    /// every other row the plain item appearance.
    fn row_appearance<'s>(&self, item: &T, style: &'s DropdownStyle) -> &'s FieldText {
        if self.is_selected(item) {
            &style.selected_text
        } else {
            &style.item_text
        }
    }

    fn row_text(&self, item: &T, style: &DropdownStyle) -> RichText {
        self.row_appearance(item, style).rich((self.display)(item))
    }
}

impl<T: Clone> Styled for DropdownField<'_, T> {
    type Style = DropdownStyle;

    fn styled(mut self, style: Self::Style) -> Self {
        self.style = Some(style);
        self
    }
}

impl<T: PartialEq + Clone> Widget for DropdownField<'_, T> {
    fn ui(self, ui: &mut Ui) -> Response {
        let resolved = self.resolved_style(ui.style().as_ref());
        let decoration = self.resolved_decoration(&resolved);
        let trailing = decoration::resolve_trailing(self.suffix.is_some(), self.show_arrow);
        let icon_tint = self.icon_tint(&resolved);

        let rows: Vec<(RichText, String, bool)> = self
            .items
            .iter()
            .map(|item| {
                (
                    self.row_text(item, &resolved),
                    (self.display)(item),
                    self.is_selected(item),
                )
            })
            .collect();

        let Self {
            items,
            selected,
            display,
            mut on_change,
            validator,
            enabled,
            autofocus,
            salt,
            width,
            margin,
            align,
            menu_max_height,
            item_padding,
            prefix,
            prefix_padding,
            suffix,
            arrow_glyph,
            icon_spacing,
            ..
        } = self;

        let outer = egui::Frame::new().outer_margin(margin);
        outer
            .show(ui, |ui| {
                ui.with_layout(egui::Layout::top_down(align), |ui| {
                    if let Some(label) = decoration.label.clone() {
                        ui.label(label);
                    }

                    let response = ui
                        .add_enabled_ui(enabled, |ui| {
                            let frame = egui::Frame::new()
                                .fill(decoration.fill)
                                .stroke(decoration.outline)
                                .corner_radius(decoration.corner_radius)
                                .inner_margin(decoration.content_padding);

                            frame
                                .show(ui, |ui| {
                                    ui.horizontal(|ui| {
                                        if let Some(prefix) = &prefix {
                                            egui::Frame::new()
                                                .inner_margin(prefix_padding)
                                                .show(ui, |ui| prefix.show(ui, icon_tint));
                                        }

                                        let button_text = match selected.as_ref() {
                                            Some(value) => {
                                                resolved.button_text.rich((display)(value))
                                            }
                                            None => decoration
                                                .hint
                                                .clone()
                                                .unwrap_or_else(|| RichText::new(""))
                                                .weak(),
                                        };

                                        let mut combo = egui::ComboBox::from_id_salt(salt)
                                            .selected_text(button_text);
                                        if let Some(width) = width {
                                            combo = combo.width(width);
                                        }
                                        if let Some(height) = menu_max_height {
                                            combo = combo.height(height);
                                        }
                                        if trailing.suppresses_control_icon() {
                                            combo =
                                                combo.icon(|_ui, _rect, _visuals, _is_open| {});
                                        } else if let Some(glyph) = arrow_glyph.clone() {
                                            combo = combo.icon(
                                                move |ui: &Ui, rect, _visuals, _is_open| {
                                                    ui.painter().text(
                                                        rect.center(),
                                                        Align2::CENTER_CENTER,
                                                        glyph,
                                                        arrow_font(ui.style()),
                                                        icon_tint,
                                                    );
                                                },
                                            );
                                        }

                                        let mut picked: Option<T> = None;
                                        let mut response = ui
                                            .scope(|ui| {
                                                // Flatten the host control into the field's own
                                                // chrome; the outer frame is the single outline.
                                                ui.spacing_mut().button_padding = vec2(0.0, 0.0);

                                                let visuals = ui.visuals_mut();
                                                visuals.popup_shadow = resolved.menu_shadow;
                                                visuals.window_fill = resolved.fill;

                                                let widgets = &mut visuals.widgets;
                                                let fill = decoration.fill;
                                                let radius = decoration.corner_radius;

                                                widgets.inactive.bg_fill = fill;
                                                widgets.inactive.weak_bg_fill = fill;
                                                widgets.inactive.bg_stroke = Stroke::NONE;
                                                widgets.inactive.corner_radius = radius.into();

                                                widgets.hovered.bg_fill = fill;
                                                widgets.hovered.weak_bg_fill = fill;
                                                widgets.hovered.bg_stroke = Stroke::NONE;
                                                widgets.hovered.corner_radius = radius.into();

                                                widgets.active.bg_fill = fill;
                                                widgets.active.weak_bg_fill = fill;
                                                widgets.active.bg_stroke = Stroke::NONE;
                                                widgets.active.corner_radius = radius.into();

                                                widgets.open.bg_fill = fill;
                                                widgets.open.weak_bg_fill = fill;
                                                widgets.open.bg_stroke = Stroke::NONE;
                                                widgets.open.corner_radius = radius.into();

                                                combo
                                                    .show_ui(ui, |ui| {
                                                        if let Some(padding) = item_padding {
                                                            ui.spacing_mut().button_padding =
                                                                padding;
                                                        }
                                                        for (index, (text, label, is_selected)) in
                                                            rows.iter().enumerate()
                                                        {
                                                            if ui
                                                                .selectable_label(
                                                                    *is_selected,
                                                                    text.clone(),
                                                                )
                                                                .clicked()
                                                            {
                                                                log::debug!(
                                                                    "dropdown field: selected {label:?}"
                                                                );
                                                                picked = Some(items[index].clone());
                                                            }
                                                        }
                                                    })
                                                    .response
                                            })
                                            .inner;

                                        if let Some(value) = picked {
                                            *selected = Some(value);
                                            if let Some(on_change) = on_change.as_mut() {
                                                on_change(selected.as_ref());
                                            }
                                            response.mark_changed();
                                        }

                                        if autofocus && enabled {
                                            let seen_id = response.id.with("autofocus");
                                            let seen = ui.data_mut(|data| {
                                                let seen = data
                                                    .get_temp::<bool>(seen_id)
                                                    .unwrap_or(false);
                                                data.insert_temp(seen_id, true);
                                                seen
                                            });
                                            if !seen {
                                                response.request_focus();
                                            }
                                        }

                                        match trailing {
                                            TrailingSlot::Suffix => {
                                                if let Some(suffix) = &suffix {
                                                    suffix.show(ui, icon_tint);
                                                }
                                            }
                                            TrailingSlot::SuffixAndArrow => {
                                                ui.scope(|ui| {
                                                    ui.spacing_mut().item_spacing.x = icon_spacing;
                                                    if let Some(suffix) = &suffix {
                                                        suffix.show(ui, icon_tint);
                                                    }
                                                    match &arrow_glyph {
                                                        Some(glyph) => {
                                                            draw_arrow_glyph(ui, glyph, icon_tint);
                                                        }
                                                        None => draw_row_arrow(ui, icon_tint),
                                                    }
                                                });
                                                ui.add_space(decoration::TRAILING_END_PAD);
                                            }
                                            TrailingSlot::ControlArrow | TrailingSlot::Empty => {}
                                        }

                                        response
                                    })
                                    .inner
                                })
                                .inner
                        })
                        .inner;

                    if let Some(validator) = &validator {
                        if let Some(message) = validator(selected.as_ref()) {
                            let error_color = ui.visuals().error_fg_color;
                            ui.label(RichText::new(message).small().color(error_color));
                        }
                    }

                    response
                })
                .inner
            })
            .inner
    }
}

/// Font for a custom arrow glyph; shared by the control's icon slot and the
/// trailing row so the glyph keeps its size in both.
fn arrow_font(style: &Style) -> egui::FontId {
    TextStyle::Button.resolve(style)
}

/// Custom arrow glyph when it shares the decoration row with a suffix icon.
fn draw_arrow_glyph(ui: &mut Ui, glyph: &str, color: Color32) {
    let font_id = arrow_font(ui.style());
    let (rect, _response) = ui.allocate_exact_size(Vec2::splat(ICON_SIZE), Sense::hover());
    if ui.is_rect_visible(rect) {
        ui.painter()
            .text(rect.center(), Align2::CENTER_CENTER, glyph, font_id, color);
    }
}

/// Default arrow when it shares the decoration row with a suffix icon.
fn draw_row_arrow(ui: &mut Ui, color: Color32) {
    let (rect, _response) = ui.allocate_exact_size(Vec2::splat(ICON_SIZE), Sense::hover());
    if ui.is_rect_visible(rect) {
        let tri = egui::Rect::from_center_size(
            rect.center(),
            vec2(rect.width() * 0.5, rect.height() * 0.3),
        );
        ui.painter().add(Shape::convex_polygon(
            vec![tri.left_top(), tri.right_top(), tri.center_bottom()],
            color,
            Stroke::NONE,
        ));
    }
}

fn elevation_shadow(elevation: f32, color: Color32) -> Shadow {
    let offset = (elevation * 0.5).round().clamp(0.0, i8::MAX as f32) as i8;
    let blur = elevation.round().clamp(0.0, u8::MAX as f32) as u8;
    Shadow {
        offset: [0, offset],
        blur,
        spread: 0,
        color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::workbench_light;

    const FLAVORS: [&str; 3] = ["vanilla", "hazelnut", "mocha"];

    fn field<'a>(selected: &'a mut Option<&'static str>) -> DropdownField<'a, &'static str> {
        DropdownField::new(&FLAVORS, selected, |flavor| flavor.to_uppercase())
    }

    #[test]
    fn explicit_values_win_over_theme_defaults() {
        let theme = workbench_light();
        let mut selected = None;
        let monospace = FieldText::new(TextStyle::Monospace, Color32::WHITE);
        let widget = field(&mut selected)
            .fill(Color32::RED)
            .icon_color(Color32::GREEN)
            .disabled_icon_color(Color32::BLUE)
            .corner_radius(7.5)
            .button_text(monospace.clone());

        let resolved = widget.resolved_style(&theme);
        assert_eq!(resolved.button_text, monospace);
        assert_eq!(resolved.fill, Color32::RED);
        assert_eq!(resolved.icon_color, Color32::GREEN);
        assert_eq!(resolved.disabled_icon_color, Color32::BLUE);
        assert_eq!(resolved.corner_radius, 7.5);

        // Untouched knobs still come from the theme.
        let derived = DropdownStyle::from(&theme);
        assert_eq!(resolved.item_text, derived.item_text);
        assert_eq!(resolved.outline, derived.outline);
    }

    #[test]
    fn full_style_override_is_used_verbatim() {
        let theme = workbench_light();
        let mut bundle = DropdownStyle::from(&theme);
        bundle.fill = Color32::GOLD;
        bundle.corner_radius = 0.0;

        let mut selected = None;
        let widget = field(&mut selected).styled(bundle.clone());
        let resolved = widget.resolved_style(&theme);
        assert_eq!(resolved.fill, bundle.fill);
        assert_eq!(resolved.corner_radius, bundle.corner_radius);
    }

    #[test]
    fn explicit_shadow_wins_over_elevation() {
        let theme = workbench_light();
        let shadow = Shadow {
            offset: [2, 9],
            blur: 3,
            spread: 1,
            color: Color32::BLACK,
        };

        let mut selected = None;
        let widget = field(&mut selected).elevation(12.0).menu_shadow(shadow);
        assert_eq!(widget.resolved_style(&theme).menu_shadow, shadow);

        let mut selected = None;
        let widget = field(&mut selected).elevation(12.0);
        let resolved = widget.resolved_style(&theme);
        assert_eq!(resolved.menu_shadow.blur, 12);
        assert_eq!(resolved.menu_shadow.offset, [0, 6]);
    }

    #[test]
    fn prefix_drops_the_decorations_left_inset() {
        let theme = workbench_light();
        let mut selected = None;
        let widget = field(&mut selected).prefix("☕");
        let style = widget.resolved_style(&theme);
        let decoration = widget.resolved_decoration(&style);
        assert_eq!(decoration.content_padding.left, 0);
        assert_ne!(decoration.content_padding.right, 0);
    }

    #[test]
    fn explicit_decoration_is_the_starting_point() {
        let theme = workbench_light();
        let style = DropdownStyle::from(&theme);
        let mut custom = FieldDecoration::synthesized(None, None, &style);
        custom.fill = Color32::KHAKI;
        custom.content_padding = Margin::same(3);

        let mut selected = None;
        let widget = field(&mut selected).decoration(custom.clone());
        let resolved = widget.resolved_decoration(&style);
        assert_eq!(resolved.fill, Color32::KHAKI);
        assert_eq!(resolved.content_padding, Margin::same(3));

        // The prefix rule still applies on top of the override.
        let mut selected = None;
        let widget = field(&mut selected).decoration(custom).prefix("☕");
        let resolved = widget.resolved_decoration(&style);
        assert_eq!(resolved.content_padding.left, 0);
        assert_eq!(resolved.content_padding.right, 3);
    }

    #[test]
    fn menu_rows_use_the_display_function_and_selection_style() {
        let theme = workbench_light();
        let mut selected = Some("mocha");
        let widget = field(&mut selected);
        let style = widget.resolved_style(&theme);

        assert_eq!(widget.row_text(&"mocha", &style).text(), "MOCHA");
        assert_eq!(widget.row_text(&"vanilla", &style).text(), "VANILLA");
        assert_eq!(*widget.row_appearance(&"mocha", &style), style.selected_text);
        assert_eq!(*widget.row_appearance(&"vanilla", &style), style.item_text);
        assert_eq!(*widget.row_appearance(&"hazelnut", &style), style.item_text);
    }

    #[test]
    fn no_selection_styles_every_row_as_plain() {
        let theme = workbench_light();
        let mut selected = None;
        let widget = field(&mut selected);
        let style = widget.resolved_style(&theme);
        for flavor in FLAVORS.iter() {
            assert_eq!(*widget.row_appearance(flavor, &style), style.item_text);
        }
    }

    #[test]
    fn arrow_glyph_font_is_shared_between_slots() {
        let theme = workbench_light();
        assert_eq!(arrow_font(&theme), TextStyle::Button.resolve(&theme));
    }

    #[test]
    fn button_label_comes_from_the_display_function() {
        let mut selected = Some("mocha");
        let widget = field(&mut selected);
        assert_eq!(widget.current_label().as_deref(), Some("MOCHA"));

        let mut selected = None;
        let widget = field(&mut selected);
        assert_eq!(widget.current_label(), None);
    }

    #[test]
    fn disabled_field_selects_the_disabled_icon_color() {
        let theme = workbench_light();
        let mut selected = None;
        let widget = field(&mut selected).enabled(false);
        let style = widget.resolved_style(&theme);
        assert_eq!(widget.icon_tint(&style), style.disabled_icon_color);

        let mut selected = None;
        let widget = field(&mut selected);
        let style = widget.resolved_style(&theme);
        assert_eq!(widget.icon_tint(&style), style.icon_color);
    }
}
