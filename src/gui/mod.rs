//! Screen-space UI widgets
//!
//! Procedurally drawn widgets (SDL2 rects plus the built-in bitmap font):
//! buttons, toggle buttons, keyboard/mouse-navigable button menus, paged
//! text boxes, and single-line input boxes.
//!
//! Every widget follows the same pattern: a `XxxStyle` struct with
//! `Default`, a `new()` constructor plus a `with_style()` alternative, and a
//! `render(&mut self, canvas, ..)` that draws with the crate's [`Result`]
//! type.
//!
//! [`Result`]: crate::Result

pub mod button;
pub mod input_box;
pub mod menu;
pub mod text_box;

pub use button::{Button, ButtonStyle, MenuButton, ToggleButton, ToggleButtonStyle};
pub use input_box::InputBox;
pub use menu::ButtonMenu;
pub use text_box::{TextBox, TextBoxStyle};
