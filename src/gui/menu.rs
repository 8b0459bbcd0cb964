//! Button menu component
//!
//! An ordered list of buttons plus a selection index, with wrap-around
//! keyboard navigation and mouse hit testing. The menu is a composable
//! component rather than a screen of its own: a [`Screen`](crate::Screen)
//! implementation forwards its key and mouse hooks here and matches on the
//! activated index.
//!
//! # Example
//!
//! ```no_run
//! # fn demo(canvas: &mut sdl2::render::Canvas<sdl2::video::Window>) -> sdl2_tools::Result<()> {
//! use sdl2::keyboard::Keycode;
//! use sdl2::rect::Rect;
//! use sdl2_tools::gui::{Button, ButtonMenu};
//!
//! let mut menu = ButtonMenu::new(vec![
//!     Button::new("START", Rect::new(100, 60, 120, 40)),
//!     Button::new("QUIT", Rect::new(100, 120, 120, 40)),
//! ]);
//!
//! if let Some(index) = menu.handle_key(Keycode::Return) {
//!     match index {
//!         0 => { /* start the game */ }
//!         _ => { /* quit */ }
//!     }
//! }
//! menu.render(canvas, true)?;
//! # Ok(())
//! # }
//! ```

use sdl2::keyboard::Keycode;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::error::Result;
use crate::gui::button::{Button, MenuButton};
use crate::point::Point;

/// A keyboard- and mouse-navigable list of buttons.
///
/// Generic over the button type so a menu can hold [`Button`]s,
/// [`ToggleButton`](crate::gui::ToggleButton)s, or `Box<dyn MenuButton>` for
/// a mix.
pub struct ButtonMenu<W: MenuButton = Button> {
    buttons: Vec<W>,
    selected: usize,
}

impl<W: MenuButton> ButtonMenu<W> {
    /// Creates a menu with the first button selected. An empty menu is
    /// legal and inert until buttons are pushed.
    pub fn new(buttons: Vec<W>) -> ButtonMenu<W> {
        ButtonMenu {
            buttons,
            selected: 0,
        }
    }

    /// Moves the selection down, wrapping to the top.
    pub fn select_next(&mut self) {
        if !self.buttons.is_empty() {
            self.selected = (self.selected + 1) % self.buttons.len();
        }
    }

    /// Moves the selection up, wrapping to the bottom.
    pub fn select_previous(&mut self) {
        if !self.buttons.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.buttons.len() - 1);
        }
    }

    /// Presses the currently selected button and returns its index.
    pub fn activate(&mut self) -> Option<usize> {
        let button = self.buttons.get_mut(self.selected)?;
        button.press();
        Some(self.selected)
    }

    /// Routes a key-down event: Down/Right select the next button, Up/Left
    /// the previous, Return/Space press the selection.
    ///
    /// Returns the index of the button activated by this key, if any.
    pub fn handle_key(&mut self, keycode: Keycode) -> Option<usize> {
        match keycode {
            Keycode::Down | Keycode::Right => {
                self.select_next();
                None
            }
            Keycode::Up | Keycode::Left => {
                self.select_previous();
                None
            }
            Keycode::Return | Keycode::Space => self.activate(),
            _ => None,
        }
    }

    /// Routes a mouse click in game pixels: the hit button (if any) becomes
    /// the selection and is pressed.
    pub fn handle_click(&mut self, pos: Point) -> Option<usize> {
        let sdl_pos = sdl2::rect::Point::from(pos);
        for (i, button) in self.buttons.iter_mut().enumerate() {
            if button.rect().contains_point(sdl_pos) {
                self.selected = i;
                button.press();
                return Some(i);
            }
        }
        None
    }

    /// Draws every button; when `highlight_selected` is set, the selected
    /// button is forced into its highlight color.
    pub fn render(&mut self, canvas: &mut Canvas<Window>, highlight_selected: bool) -> Result<()> {
        let selected = self.selected;
        for (i, button) in self.buttons.iter_mut().enumerate() {
            let override_highlight = if highlight_selected && i == selected {
                Some(true)
            } else {
                None
            };
            button.render(canvas, override_highlight)?;
        }
        Ok(())
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn buttons(&self) -> &[W] {
        &self.buttons
    }

    pub fn buttons_mut(&mut self) -> &mut [W] {
        &mut self.buttons
    }

    pub fn push(&mut self, button: W) {
        self.buttons.push(button);
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::rect::Rect;

    fn three_button_menu() -> ButtonMenu {
        ButtonMenu::new(vec![
            Button::new("A", Rect::new(0, 0, 40, 20)),
            Button::new("B", Rect::new(0, 30, 40, 20)),
            Button::new("C", Rect::new(0, 60, 40, 20)),
        ])
    }

    #[test]
    fn test_selection_wraps_forward() {
        let mut menu = three_button_menu();
        menu.select_next();
        menu.select_next();
        assert_eq!(menu.selected_index(), 2);
        menu.select_next();
        assert_eq!(menu.selected_index(), 0);
    }

    #[test]
    fn test_selection_wraps_backward() {
        let mut menu = three_button_menu();
        menu.select_previous();
        assert_eq!(menu.selected_index(), 2);
    }

    #[test]
    fn test_arrow_keys_move_selection() {
        let mut menu = three_button_menu();
        assert_eq!(menu.handle_key(Keycode::Down), None);
        assert_eq!(menu.selected_index(), 1);
        assert_eq!(menu.handle_key(Keycode::Right), None);
        assert_eq!(menu.selected_index(), 2);
        assert_eq!(menu.handle_key(Keycode::Up), None);
        assert_eq!(menu.selected_index(), 1);
        assert_eq!(menu.handle_key(Keycode::Left), None);
        assert_eq!(menu.selected_index(), 0);
    }

    #[test]
    fn test_return_activates_selection() {
        let mut menu = three_button_menu();
        menu.select_next();
        assert_eq!(menu.handle_key(Keycode::Return), Some(1));
        assert!(menu.buttons()[1].is_clicked());
    }

    #[test]
    fn test_space_activates_selection() {
        let mut menu = three_button_menu();
        assert_eq!(menu.handle_key(Keycode::Space), Some(0));
    }

    #[test]
    fn test_unrelated_key_is_ignored() {
        let mut menu = three_button_menu();
        assert_eq!(menu.handle_key(Keycode::X), None);
        assert_eq!(menu.selected_index(), 0);
    }

    #[test]
    fn test_click_selects_and_activates() {
        let mut menu = three_button_menu();
        assert_eq!(menu.handle_click(Point::new(10.0, 40.0)), Some(1));
        assert_eq!(menu.selected_index(), 1);
        assert!(menu.buttons()[1].is_clicked());
    }

    #[test]
    fn test_click_outside_every_button() {
        let mut menu = three_button_menu();
        assert_eq!(menu.handle_click(Point::new(200.0, 200.0)), None);
        assert_eq!(menu.selected_index(), 0);
    }

    #[test]
    fn test_empty_menu_is_inert() {
        let mut menu: ButtonMenu = ButtonMenu::new(Vec::new());
        menu.select_next();
        menu.select_previous();
        assert_eq!(menu.handle_key(Keycode::Return), None);
        assert_eq!(menu.handle_click(Point::ZERO), None);
    }
}
