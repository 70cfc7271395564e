use egui::{Color32, Margin, RichText, Stroke};

use crate::themes::DropdownStyle;

/// Trailing pad after a combined suffix/arrow row.
pub(crate) const TRAILING_END_PAD: f32 = 4.0;

/// Visual chrome around the field's content area.
///
/// Synthesized from the resolved style unless the caller supplies one, in
/// which case the supplied decoration is the starting point and only the
/// prefix-inset rule below still applies.
#[derive(Clone, Debug)]
pub struct FieldDecoration {
    pub content_padding: Margin,
    pub fill: Color32,
    pub outline: Stroke,
    pub corner_radius: f32,
    /// Shown as the button text while no value is selected.
    pub hint: Option<RichText>,
    /// Shown above the field.
    pub label: Option<RichText>,
}

impl FieldDecoration {
    pub fn synthesized(
        hint: Option<RichText>,
        label: Option<RichText>,
        style: &DropdownStyle,
    ) -> Self {
        Self {
            content_padding: Margin::symmetric(12, 8),
            fill: style.fill,
            outline: Stroke::new(1.0, style.outline),
            corner_radius: style.corner_radius,
            hint,
            label,
        }
    }

    /// A prefix icon supplies the visual left inset instead of the padding.
    pub(crate) fn without_left_inset(mut self) -> Self {
        self.content_padding.left = 0;
        self
    }
}

/// Which slot renders the trailing icons.
///
/// Invariant: the decoration row and the host control's icon slot are never
/// populated at the same time, so the control cannot draw a duplicate arrow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrailingSlot {
    /// The host control paints the arrow in its own icon slot.
    ControlArrow,
    /// Decoration row holding the suffix icon alone.
    Suffix,
    /// Decoration row holding suffix then arrow, left to right.
    SuffixAndArrow,
    /// Neither slot is populated.
    Empty,
}

impl TrailingSlot {
    /// True when the host control's icon slot must be emptied.
    pub(crate) fn suppresses_control_icon(self) -> bool {
        !matches!(self, TrailingSlot::ControlArrow)
    }
}

pub fn resolve_trailing(has_suffix: bool, show_arrow: bool) -> TrailingSlot {
    match (has_suffix, show_arrow) {
        (true, false) => TrailingSlot::Suffix,
        (true, true) => TrailingSlot::SuffixAndArrow,
        (false, true) => TrailingSlot::ControlArrow,
        (false, false) => TrailingSlot::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::workbench_light;

    #[test]
    fn trailing_slot_matrix() {
        assert_eq!(resolve_trailing(true, false), TrailingSlot::Suffix);
        assert_eq!(resolve_trailing(true, true), TrailingSlot::SuffixAndArrow);
        assert_eq!(resolve_trailing(false, true), TrailingSlot::ControlArrow);
        assert_eq!(resolve_trailing(false, false), TrailingSlot::Empty);
    }

    #[test]
    fn only_the_delegated_arrow_keeps_the_control_icon() {
        for (suffix, arrow) in [(true, false), (true, true), (false, false)] {
            assert!(resolve_trailing(suffix, arrow).suppresses_control_icon());
        }
        assert!(!resolve_trailing(false, true).suppresses_control_icon());
    }

    #[test]
    fn prefix_zeroes_only_the_left_inset() {
        let style = DropdownStyle::from(&workbench_light());
        let decoration = FieldDecoration::synthesized(None, None, &style);
        let padded = decoration.clone().without_left_inset();

        assert_eq!(padded.content_padding.left, 0);
        assert_eq!(padded.content_padding.right, decoration.content_padding.right);
        assert_eq!(padded.content_padding.top, decoration.content_padding.top);
        assert_eq!(
            padded.content_padding.bottom,
            decoration.content_padding.bottom
        );
    }

    #[test]
    fn synthesized_decoration_inherits_the_resolved_style() {
        let style = DropdownStyle::from(&workbench_light());
        let decoration =
            FieldDecoration::synthesized(Some(RichText::new("Pick one")), None, &style);

        assert_eq!(decoration.fill, style.fill);
        assert_eq!(decoration.outline.color, style.outline);
        assert_eq!(decoration.corner_radius, style.corner_radius);
        assert!(decoration.hint.is_some());
        assert!(decoration.label.is_none());
    }
}
