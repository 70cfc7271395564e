//! A themeable dropdown form field for [`egui`].
//!
//! [`DropdownField`](widgets::DropdownField) wraps [`egui::ComboBox`], which
//! keeps ownership of the menu overlay, open state, keyboard navigation and
//! focus. Around it this crate layers the form-field chrome: a label, a hint,
//! prefix and suffix icons, padding, outline, corner radius, a menu shadow
//! and a validation message. Every visual knob has a default derived from the
//! ambient [`egui::Style`], so an undecorated field follows the application
//! theme; individual builder methods or a full [`themes::DropdownStyle`]
//! bundle override it.
//!
//! ```
//! use combofield::prelude::*;
//!
//! let roasts = ["light", "medium", "dark"];
//! egui::__run_test_ui(|ui| {
//!     let mut selected: Option<&str> = None;
//!     ui.add(
//!         DropdownField::new(&roasts, &mut selected, |roast| roast.to_string())
//!             .label_text("Roast")
//!             .hint("Pick a roast")
//!             .id_salt("roast"),
//!     );
//! });
//! ```

pub mod prelude;
pub mod themes;
pub mod widgets;
