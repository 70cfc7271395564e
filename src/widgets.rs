pub mod decoration;
pub mod dropdown;

pub use decoration::{resolve_trailing, FieldDecoration, TrailingSlot};
pub use dropdown::{DropdownField, FieldIcon};
