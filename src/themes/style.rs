/// Traits and helpers for widget-level styles derived from our theme.

/// Provide a per-widget override API.
///
/// A widget resolves its style from the ambient [`egui::Style`] unless the
/// caller hands it a full bundle through this trait, in which case the bundle
/// is used verbatim.
pub trait Styled {
    type Style: Clone;
    fn styled(self, style: Self::Style) -> Self;
}
