//! Widget demo: a button menu, a toggle, an input box, and a dialogue-style
//! text box wired into one screen.
//!
//! Arrow keys + Return drive the menu, clicking works too. GREET asks for a
//! name, then plays a two-page dialogue.
//!
//! Run with `cargo run --example widgets`.

use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2_tools::gui::{
    Button, ButtonMenu, ButtonStyle, InputBox, MenuButton, TextBox, TextBoxStyle, ToggleButton,
};
use sdl2_tools::{FrameContext, GameWindow, Point, Result, Screen};

const GREET: usize = 0;
const SOUND: usize = 1;
const QUIT: usize = 2;

struct WidgetDemo {
    menu: ButtonMenu<Box<dyn MenuButton>>,
    name_entry: InputBox,
    dialogue: Option<TextBox>,
    entering_name: bool,
}

impl WidgetDemo {
    fn new() -> WidgetDemo {
        let style = ButtonStyle {
            border_size: 2,
            ..Default::default()
        };
        let buttons: Vec<Box<dyn MenuButton>> = vec![
            Box::new(Button::with_style(
                "GREET",
                Rect::new(220, 80, 200, 48),
                style.clone(),
            )),
            Box::new(ToggleButton::new(
                "SOUND: ON",
                "SOUND: OFF",
                Rect::new(220, 150, 200, 48),
            )),
            Box::new(Button::with_style("QUIT", Rect::new(220, 220, 200, 48), style)),
        ];

        WidgetDemo {
            menu: ButtonMenu::new(buttons),
            name_entry: InputBox::with_style(
                Rect::new(170, 300, 300, 44),
                TextBoxStyle {
                    border_size: 2,
                    ..Default::default()
                },
            ),
            dialogue: None,
            entering_name: false,
        }
    }

    fn activate(&mut self, ctx: &mut FrameContext<'_>, index: usize) {
        match index {
            GREET => {
                self.entering_name = true;
                self.name_entry.reset();
            }
            SOUND => {} // the toggle handles itself
            QUIT => ctx.quit(),
            _ => {}
        }
    }
}

impl Screen for WidgetDemo {
    fn update(&mut self, ctx: &mut FrameContext<'_>) -> Result<()> {
        ctx.canvas.set_draw_color(Color::RGB(25, 30, 45));
        ctx.canvas.clear();

        self.menu.render(ctx.canvas, true)?;

        if self.entering_name {
            self.name_entry.render(ctx.canvas)?;
            if self.name_entry.is_done() {
                let name = self.name_entry.value().to_string();
                self.dialogue = Some(TextBox::with_style(
                    vec![
                        format!("HELLO {}! WELCOME TO THE WIDGET DEMO.", name),
                        "THIS TEXT BOX WRAPS LONG LINES AND ADVANCES \
                         PAGE BY PAGE WHEN YOU PRESS RETURN."
                            .to_string(),
                    ],
                    Rect::new(40, 360, 560, 100),
                    TextBoxStyle {
                        center_text: true,
                        border_size: 2,
                        ..Default::default()
                    },
                ));
                self.entering_name = false;
            }
        }

        if let Some(dialogue) = &self.dialogue {
            dialogue.render(ctx.canvas)?;
        }
        Ok(())
    }

    fn key_down(&mut self, ctx: &mut FrameContext<'_>, keycode: Keycode) -> Result<()> {
        if self.entering_name {
            self.name_entry.handle_key(keycode);
            return Ok(());
        }
        if let Some(dialogue) = &mut self.dialogue {
            if keycode == Keycode::Return {
                dialogue.advance();
                if dialogue.is_done() {
                    self.dialogue = None;
                }
                return Ok(());
            }
        }
        if let Some(index) = self.menu.handle_key(keycode) {
            self.activate(ctx, index);
        }
        Ok(())
    }

    fn mouse_button_down(
        &mut self,
        ctx: &mut FrameContext<'_>,
        button: MouseButton,
        pos: Point,
    ) -> Result<()> {
        if button == MouseButton::Left && !self.entering_name {
            if let Some(index) = self.menu.handle_click(pos) {
                self.activate(ctx, index);
            }
        }
        Ok(())
    }

    fn text_input(&mut self, _ctx: &mut FrameContext<'_>, text: &str) -> Result<()> {
        if self.entering_name {
            self.name_entry.handle_text_input(text);
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let mut window = GameWindow::new("widgets", Point::new(640.0, 480.0), None, 30)?;
    window.run(&mut WidgetDemo::new())
}
