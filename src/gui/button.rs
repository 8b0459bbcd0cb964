//! Clickable buttons
//!
//! Buttons are procedural widgets: a filled (or outlined) rect, an optional
//! border, and a centered bitmap-font label. Styling follows the
//! style-struct pattern: construct with defaults, override what you need
//! with struct update syntax.
//!
//! Buttons do not store callbacks. Pressing one flags it; menus report the
//! activated index back to the caller, which matches on it. The clicked
//! color shows for the next rendered frame, then clears.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::error::Result;
use crate::font::BitmapFont;
use crate::point::Point;

/// Draws `thickness` nested outline rects, the double-border look used
/// across the crate's widgets.
pub(crate) fn draw_outline(
    canvas: &mut Canvas<Window>,
    rect: Rect,
    thickness: u32,
    color: Color,
) -> Result<()> {
    canvas.set_draw_color(color);
    for i in 0..thickness as i32 {
        let shrink = 2 * i;
        if rect.width() as i32 <= shrink || rect.height() as i32 <= shrink {
            break;
        }
        canvas.draw_rect(Rect::new(
            rect.x() + i,
            rect.y() + i,
            rect.width() - shrink as u32,
            rect.height() - shrink as u32,
        ))?;
    }
    Ok(())
}

/// Fills `rect`, or outlines it `line_width` deep when `line_width > 0`.
fn draw_body(
    canvas: &mut Canvas<Window>,
    rect: Rect,
    line_width: u32,
    color: Color,
) -> Result<()> {
    if line_width == 0 {
        canvas.set_draw_color(color);
        canvas.fill_rect(rect)?;
        Ok(())
    } else {
        draw_outline(canvas, rect, line_width, color)
    }
}

fn draw_centered_label(
    canvas: &mut Canvas<Window>,
    rect: Rect,
    label: &str,
    font: BitmapFont,
    color: Color,
) -> Result<()> {
    let (text_w, text_h) = font.size(label);
    font.render(
        canvas,
        label,
        rect.center().x() - text_w as i32 / 2,
        rect.center().y() - text_h as i32 / 2,
        color,
    )
}

/// Anything a [`ButtonMenu`](crate::gui::ButtonMenu) can hold: plain buttons
/// and toggle buttons share this surface.
pub trait MenuButton {
    /// The clickable area.
    fn rect(&self) -> Rect;

    /// Activates the button (click or Return/Space on the selection).
    fn press(&mut self);

    /// Draws the button. `override_highlight` forces the highlight state:
    /// `Some(true)` for the menu's keyboard selection, `Some(false)` to
    /// suppress hover highlighting, `None` to use the button's own state.
    fn render(
        &mut self,
        canvas: &mut Canvas<Window>,
        override_highlight: Option<bool>,
    ) -> Result<()>;
}

impl<W: MenuButton + ?Sized> MenuButton for Box<W> {
    fn rect(&self) -> Rect {
        (**self).rect()
    }

    fn press(&mut self) {
        (**self).press()
    }

    fn render(
        &mut self,
        canvas: &mut Canvas<Window>,
        override_highlight: Option<bool>,
    ) -> Result<()> {
        (**self).render(canvas, override_highlight)
    }
}

/// Visual configuration for a [`Button`].
#[derive(Debug, Clone)]
pub struct ButtonStyle {
    /// Body color when idle.
    pub fill_color: Color,

    /// Body color while highlighted (hover or keyboard selection).
    pub highlight_color: Color,

    /// Body color for the frame after a press.
    pub clicked_color: Color,

    /// Label color.
    pub text_color: Color,

    /// Bitmap font scale for the label.
    pub text_scale: u32,

    /// Body outline width; 0 draws a solid fill.
    pub line_width: u32,

    /// Border thickness; 0 disables the border.
    pub border_size: u32,

    /// Border color.
    pub border_color: Color,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        ButtonStyle {
            fill_color: Color::RGB(255, 255, 255),
            highlight_color: Color::RGB(150, 150, 150),
            clicked_color: Color::RGB(100, 100, 100),
            text_color: Color::RGB(0, 0, 0),
            text_scale: 2,
            line_width: 0,
            border_size: 0,
            border_color: Color::RGB(0, 0, 0),
        }
    }
}

/// A clickable push button.
///
/// # Example
///
/// ```no_run
/// # fn demo(canvas: &mut sdl2::render::Canvas<sdl2::video::Window>) -> sdl2_tools::Result<()> {
/// use sdl2::rect::Rect;
/// use sdl2_tools::gui::{Button, ButtonStyle};
///
/// let mut start = Button::with_style(
///     "START",
///     Rect::new(100, 60, 120, 40),
///     ButtonStyle {
///         border_size: 2,
///         ..Default::default()
///     },
/// );
/// start.render(canvas, None)?;
/// # Ok(())
/// # }
/// ```
pub struct Button {
    pub label: String,
    rect: Rect,
    style: ButtonStyle,
    clicked: bool,
    highlight: bool,
}

impl Button {
    /// Creates a button with default styling.
    pub fn new(label: impl Into<String>, rect: Rect) -> Button {
        Button::with_style(label, rect, ButtonStyle::default())
    }

    /// Creates a button with custom styling.
    pub fn with_style(label: impl Into<String>, rect: Rect, style: ButtonStyle) -> Button {
        Button {
            label: label.into(),
            rect,
            style,
            clicked: false,
            highlight: false,
        }
    }

    /// True if `point` (in game pixels) is inside the button.
    pub fn contains(&self, point: Point) -> bool {
        self.rect.contains_point(sdl2::rect::Point::from(point))
    }

    /// Sets the hover highlight, typically from the current mouse position.
    pub fn set_highlight(&mut self, highlight: bool) {
        self.highlight = highlight;
    }

    /// True while the press flash from [`press`](Button::press) is pending.
    pub fn is_clicked(&self) -> bool {
        self.clicked
    }

    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Activates the button: the clicked color shows for the next rendered
    /// frame.
    pub fn press(&mut self) {
        self.clicked = true;
    }

    /// Draws the button; see [`MenuButton::render`] for `override_highlight`.
    pub fn render(
        &mut self,
        canvas: &mut Canvas<Window>,
        override_highlight: Option<bool>,
    ) -> Result<()> {
        let highlighted = override_highlight.unwrap_or(self.highlight);
        let body_color = if self.clicked {
            self.style.clicked_color
        } else if highlighted {
            self.style.highlight_color
        } else {
            self.style.fill_color
        };
        // The clicked flash lasts exactly one rendered frame.
        self.clicked = false;

        draw_body(canvas, self.rect, self.style.line_width, body_color)?;
        if self.style.border_size > 0 {
            draw_outline(canvas, self.rect, self.style.border_size, self.style.border_color)?;
        }
        draw_centered_label(
            canvas,
            self.rect,
            &self.label,
            BitmapFont::new(self.style.text_scale),
            self.style.text_color,
        )
    }
}

impl MenuButton for Button {
    fn rect(&self) -> Rect {
        Button::rect(self)
    }

    fn press(&mut self) {
        Button::press(self)
    }

    fn render(
        &mut self,
        canvas: &mut Canvas<Window>,
        override_highlight: Option<bool>,
    ) -> Result<()> {
        Button::render(self, canvas, override_highlight)
    }
}

/// Visual configuration for a [`ToggleButton`], split per state.
#[derive(Debug, Clone)]
pub struct ToggleButtonStyle {
    pub on_fill_color: Color,
    pub off_fill_color: Color,
    pub on_highlight_color: Color,
    pub off_highlight_color: Color,
    pub on_text_color: Color,
    pub off_text_color: Color,
    pub on_border_color: Color,
    pub off_border_color: Color,
    pub text_scale: u32,
    pub line_width: u32,
    pub border_size: u32,
}

impl Default for ToggleButtonStyle {
    fn default() -> Self {
        ToggleButtonStyle {
            on_fill_color: Color::RGB(255, 255, 255),
            off_fill_color: Color::RGB(255, 255, 255),
            on_highlight_color: Color::RGB(150, 150, 150),
            off_highlight_color: Color::RGB(150, 150, 150),
            on_text_color: Color::RGB(0, 0, 0),
            off_text_color: Color::RGB(0, 0, 0),
            on_border_color: Color::RGB(0, 0, 0),
            off_border_color: Color::RGB(0, 0, 0),
            text_scale: 2,
            line_width: 0,
            border_size: 0,
        }
    }
}

/// A two-state button: pressing it flips between the on and off label and
/// colors.
pub struct ToggleButton {
    pub on_label: String,
    pub off_label: String,
    rect: Rect,
    style: ToggleButtonStyle,
    toggled: bool,
    highlight: bool,
}

impl ToggleButton {
    pub fn new(on_label: impl Into<String>, off_label: impl Into<String>, rect: Rect) -> ToggleButton {
        ToggleButton::with_style(on_label, off_label, rect, ToggleButtonStyle::default())
    }

    pub fn with_style(
        on_label: impl Into<String>,
        off_label: impl Into<String>,
        rect: Rect,
        style: ToggleButtonStyle,
    ) -> ToggleButton {
        ToggleButton {
            on_label: on_label.into(),
            off_label: off_label.into(),
            rect,
            style,
            toggled: false,
            highlight: false,
        }
    }

    /// Starts the button in the toggled-on state.
    pub fn toggled(mut self) -> ToggleButton {
        self.toggled = true;
        self
    }

    pub fn is_toggled(&self) -> bool {
        self.toggled
    }

    /// Sets the state directly without counting as a press.
    pub fn set_toggled(&mut self, toggled: bool) {
        self.toggled = toggled;
    }

    pub fn contains(&self, point: Point) -> bool {
        self.rect.contains_point(sdl2::rect::Point::from(point))
    }

    pub fn set_highlight(&mut self, highlight: bool) {
        self.highlight = highlight;
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Activates the button: flips between on and off.
    pub fn press(&mut self) {
        self.toggled = !self.toggled;
    }

    /// Draws the button in its current state; see [`MenuButton::render`]
    /// for `override_highlight`.
    pub fn render(
        &mut self,
        canvas: &mut Canvas<Window>,
        override_highlight: Option<bool>,
    ) -> Result<()> {
        let highlighted = override_highlight.unwrap_or(self.highlight);
        let (fill, highlight, text_color, border_color, label) = if self.toggled {
            (
                self.style.on_fill_color,
                self.style.on_highlight_color,
                self.style.on_text_color,
                self.style.on_border_color,
                self.on_label.as_str(),
            )
        } else {
            (
                self.style.off_fill_color,
                self.style.off_highlight_color,
                self.style.off_text_color,
                self.style.off_border_color,
                self.off_label.as_str(),
            )
        };
        let body_color = if highlighted { highlight } else { fill };

        draw_body(canvas, self.rect, self.style.line_width, body_color)?;
        if self.style.border_size > 0 {
            draw_outline(canvas, self.rect, self.style.border_size, border_color)?;
        }
        draw_centered_label(
            canvas,
            self.rect,
            label,
            BitmapFont::new(self.style.text_scale),
            text_color,
        )
    }
}

impl MenuButton for ToggleButton {
    fn rect(&self) -> Rect {
        ToggleButton::rect(self)
    }

    fn press(&mut self) {
        ToggleButton::press(self)
    }

    fn render(
        &mut self,
        canvas: &mut Canvas<Window>,
        override_highlight: Option<bool>,
    ) -> Result<()> {
        ToggleButton::render(self, canvas, override_highlight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_button_style() {
        let style = ButtonStyle::default();
        assert_eq!(style.fill_color, Color::RGB(255, 255, 255));
        assert_eq!(style.line_width, 0);
        assert_eq!(style.border_size, 0);
    }

    #[test]
    fn test_button_contains_point() {
        let button = Button::new("OK", Rect::new(10, 10, 40, 20));
        assert!(button.contains(Point::new(10.0, 10.0)));
        assert!(button.contains(Point::new(49.0, 29.0)));
        assert!(!button.contains(Point::new(50.0, 10.0)));
        assert!(!button.contains(Point::new(9.0, 10.0)));
    }

    #[test]
    fn test_press_sets_clicked() {
        let mut button = Button::new("OK", Rect::new(0, 0, 10, 10));
        assert!(!button.is_clicked());
        button.press();
        assert!(button.is_clicked());
    }

    #[test]
    fn test_toggle_button_flips_on_press() {
        let mut toggle = ToggleButton::new("ON", "OFF", Rect::new(0, 0, 10, 10));
        assert!(!toggle.is_toggled());
        toggle.press();
        assert!(toggle.is_toggled());
        toggle.press();
        assert!(!toggle.is_toggled());
    }

    #[test]
    fn test_toggle_button_initial_state() {
        let toggle = ToggleButton::new("ON", "OFF", Rect::new(0, 0, 10, 10)).toggled();
        assert!(toggle.is_toggled());
    }
}
