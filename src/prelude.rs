//! Convenience re-exports for the common case.

pub use crate::themes::{workbench_dark, workbench_light, DropdownStyle, FieldText, Styled};
pub use crate::widgets::{DropdownField, FieldDecoration, FieldIcon, TrailingSlot};
