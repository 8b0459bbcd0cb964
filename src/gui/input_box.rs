//! Single-line text capture
//!
//! `InputBox` renders like a [`TextBox`](crate::gui::TextBox) but its
//! content comes from the keyboard. Feed it key-down events for the editing
//! keys (Backspace, Return, Escape) and SDL2 `TextInput` events for the
//! characters themselves; read the result with [`value`](InputBox::value)
//! once [`is_done`](InputBox::is_done) reports true.

use sdl2::keyboard::Keycode;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::error::Result;
use crate::gui::text_box::{render_wrapped, TextBoxStyle};

/// A text box that accumulates typed input.
///
/// # Example
///
/// ```no_run
/// # fn demo(canvas: &mut sdl2::render::Canvas<sdl2::video::Window>) -> sdl2_tools::Result<()> {
/// use sdl2::keyboard::Keycode;
/// use sdl2::rect::Rect;
/// use sdl2_tools::gui::InputBox;
///
/// let mut name_entry = InputBox::new(Rect::new(20, 20, 280, 40));
/// name_entry.handle_text_input("Ada");
/// name_entry.handle_key(Keycode::Return);
/// assert!(name_entry.is_done());
/// assert_eq!(name_entry.value(), "Ada");
/// name_entry.render(canvas)?;
/// # Ok(())
/// # }
/// ```
pub struct InputBox {
    value: String,
    rect: Rect,
    style: TextBoxStyle,
    done: bool,
}

impl InputBox {
    /// Creates an empty input box with default styling.
    pub fn new(rect: Rect) -> InputBox {
        InputBox::with_style(rect, TextBoxStyle::default())
    }

    /// Creates an empty input box with custom styling.
    pub fn with_style(rect: Rect, style: TextBoxStyle) -> InputBox {
        InputBox {
            value: String::new(),
            rect,
            style,
            done: false,
        }
    }

    /// Routes a key-down event.
    ///
    /// - Escape clears the value and the done flag
    /// - Return marks the input done
    /// - Backspace removes the last character
    pub fn handle_key(&mut self, keycode: Keycode) {
        match keycode {
            Keycode::Escape => self.reset(),
            Keycode::Return => self.done = true,
            Keycode::Backspace => {
                self.value.pop();
            }
            _ => {}
        }
    }

    /// Appends the printable ASCII characters of an SDL2 `TextInput` event;
    /// everything else is ignored.
    pub fn handle_text_input(&mut self, text: &str) {
        for c in text.chars() {
            if c.is_ascii_graphic() || c == ' ' {
                self.value.push(c);
            }
        }
    }

    /// Draws the box and the value typed so far.
    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<()> {
        render_wrapped(canvas, self.rect, &self.style, &self.value)
    }

    /// Clears the value and the done flag.
    pub fn reset(&mut self) {
        self.value.clear();
        self.done = false;
    }

    /// The text entered so far.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// True once Return has been pressed.
    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_box() -> InputBox {
        InputBox::new(Rect::new(0, 0, 200, 40))
    }

    #[test]
    fn test_text_input_appends() {
        let mut input = input_box();
        input.handle_text_input("HI");
        input.handle_text_input(" THERE");
        assert_eq!(input.value(), "HI THERE");
    }

    #[test]
    fn test_non_printable_input_ignored() {
        let mut input = input_box();
        input.handle_text_input("A\u{7}B\t");
        assert_eq!(input.value(), "AB");
    }

    #[test]
    fn test_backspace_removes_last_char() {
        let mut input = input_box();
        input.handle_text_input("ABC");
        input.handle_key(Keycode::Backspace);
        assert_eq!(input.value(), "AB");
    }

    #[test]
    fn test_backspace_on_empty_value() {
        let mut input = input_box();
        input.handle_key(Keycode::Backspace);
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_return_marks_done() {
        let mut input = input_box();
        input.handle_text_input("DONE");
        assert!(!input.is_done());
        input.handle_key(Keycode::Return);
        assert!(input.is_done());
        assert_eq!(input.value(), "DONE");
    }

    #[test]
    fn test_escape_resets() {
        let mut input = input_box();
        input.handle_text_input("OOPS");
        input.handle_key(Keycode::Return);
        input.handle_key(Keycode::Escape);
        assert!(!input.is_done());
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut input = input_box();
        input.handle_key(Keycode::F1);
        input.handle_key(Keycode::Left);
        assert_eq!(input.value(), "");
        assert!(!input.is_done());
    }
}
