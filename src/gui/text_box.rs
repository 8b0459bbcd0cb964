//! Word-wrapped text display
//!
//! `TextBox` shows a sequence of text pages inside a styled box, wrapping
//! each page to the box's inner width. Advancing past the last page marks
//! the box done, after which it draws nothing — the dialogue-box pattern.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::error::Result;
use crate::font::BitmapFont;
use crate::gui::button::draw_outline;
use crate::point::Point;

/// Visual configuration for a [`TextBox`] (and [`InputBox`](crate::gui::InputBox)).
#[derive(Debug, Clone)]
pub struct TextBoxStyle {
    /// Box background color.
    pub background_color: Color,

    /// Text color.
    pub text_color: Color,

    /// Border thickness; 0 disables the border.
    pub border_size: u32,

    /// Border color.
    pub border_color: Color,

    /// Inner padding between the box edge and the text, per axis.
    pub padding: Point,

    /// Bitmap font scale.
    pub text_scale: u32,

    /// Center each line horizontally instead of left-aligning it.
    pub center_text: bool,
}

impl Default for TextBoxStyle {
    fn default() -> Self {
        TextBoxStyle {
            background_color: Color::RGB(160, 160, 160),
            text_color: Color::RGB(0, 0, 0),
            border_size: 0,
            border_color: Color::RGB(0, 0, 0),
            padding: Point::new(10.0, 10.0),
            text_scale: 2,
            center_text: false,
        }
    }
}

/// Wraps `text` to lines no wider than `max_width` pixels in `font`.
///
/// Greedy: characters accumulate until the line would reach the limit, then
/// the line breaks at the last space inside it when there is one (the space
/// stays on the ended line). Explicit `\n` characters force breaks. A single
/// word wider than the limit is split mid-word rather than overflowing.
pub(crate) fn wrap_text(font: BitmapFont, text: &str, max_width: u32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut chars: Vec<char> = text.chars().collect();

    while !chars.is_empty() {
        let len = chars.len();
        let mut i = 1;
        while (i as u32 + 1) * font.char_width() <= max_width && i < len && chars[i] != '\n' {
            i += 1;
        }

        if i < len && chars[i] == '\n' {
            // Forced break: drop the newline itself.
            chars.remove(i);
        } else if i < len {
            // Width break: back up to the last space that fits.
            if let Some(space) = chars[..i].iter().rposition(|&c| c == ' ') {
                if space > 0 {
                    i = space + 1;
                }
            }
        }

        lines.push(chars[..i].iter().collect());
        chars.drain(..i);
    }

    lines
}

/// Draws a styled box and `text` word-wrapped into its padded interior.
/// Shared by [`TextBox`] and [`InputBox`](crate::gui::InputBox).
pub(crate) fn render_wrapped(
    canvas: &mut Canvas<Window>,
    rect: Rect,
    style: &TextBoxStyle,
    text: &str,
) -> Result<()> {
    canvas.set_draw_color(style.background_color);
    canvas.fill_rect(rect)?;
    if style.border_size > 0 {
        draw_outline(canvas, rect, style.border_size, style.border_color)?;
    }

    let font = BitmapFont::new(style.text_scale);
    let pad_x = style.padding.x as i32;
    let pad_y = style.padding.y as i32;
    let inner_width = (rect.width() as i32 - 2 * pad_x).max(0) as u32;
    let center_x = rect.x() + pad_x + inner_width as i32 / 2;

    let mut y = rect.y() + pad_y;
    for line in wrap_text(font, text, inner_width) {
        let x = if style.center_text {
            center_x - font.text_width(&line) as i32 / 2
        } else {
            rect.x() + pad_x
        };
        font.render(canvas, &line, x, y, style.text_color)?;
        y += font.line_height() as i32;
    }
    Ok(())
}

/// A styled box displaying pages of word-wrapped text.
///
/// # Example
///
/// ```no_run
/// # fn demo(canvas: &mut sdl2::render::Canvas<sdl2::video::Window>) -> sdl2_tools::Result<()> {
/// use sdl2::rect::Rect;
/// use sdl2_tools::gui::TextBox;
///
/// let mut dialogue = TextBox::new(
///     vec![
///         "An old pyramid hums as you approach.".to_string(),
///         "It does not seem happy to see you.".to_string(),
///     ],
///     Rect::new(20, 260, 600, 90),
/// );
///
/// dialogue.render(canvas)?;
/// dialogue.advance(); // second page
/// dialogue.advance(); // done; renders nothing from here on
/// # Ok(())
/// # }
/// ```
pub struct TextBox {
    pages: Vec<String>,
    rect: Rect,
    style: TextBoxStyle,
    page_index: usize,
    done: bool,
}

impl TextBox {
    /// Creates a text box with default styling. A box with no pages starts
    /// done.
    pub fn new(pages: Vec<String>, rect: Rect) -> TextBox {
        TextBox::with_style(pages, rect, TextBoxStyle::default())
    }

    /// Creates a text box with custom styling.
    pub fn with_style(pages: Vec<String>, rect: Rect, style: TextBoxStyle) -> TextBox {
        let done = pages.is_empty();
        TextBox {
            pages,
            rect,
            style,
            page_index: 0,
            done,
        }
    }

    /// Draws the box and the current page. A finished box draws nothing.
    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<()> {
        if self.done {
            return Ok(());
        }
        render_wrapped(canvas, self.rect, &self.style, &self.pages[self.page_index])
    }

    /// Moves to the next page; past the last page the box becomes done.
    pub fn advance(&mut self) {
        if self.done {
            return;
        }
        self.page_index += 1;
        if self.page_index >= self.pages.len() {
            self.done = true;
        }
    }

    /// Back to the first page, not done.
    pub fn reset(&mut self) {
        self.page_index = 0;
        self.done = self.pages.is_empty();
    }

    pub fn current_page(&self) -> Option<&str> {
        if self.done {
            None
        } else {
            self.pages.get(self.page_index).map(String::as_str)
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn style(&self) -> &TextBoxStyle {
        &self.style
    }
}
