//! Fixed-timestep screen loop
//!
//! [`GameWindow`] owns the SDL context, window, canvas, and event pump, and
//! drives the per-frame cycle: poll input events, dispatch them to a
//! [`Screen`]'s hooks, call its `update`, present the frame, then sleep off
//! the rest of the frame budget. One frame completes before the next
//! begins; everything time-based in the crate counts these frames.
//!
//! A `Screen` is one state of an application (main menu, gameplay, pause)
//! and implements only the hooks it cares about. Swapping screens is just
//! calling [`GameWindow::run`] again with a different one.
//!
//! When `window_size` is smaller than the real window, the canvas logical
//! size is set so the screen draws in game pixels and SDL scales them up —
//! chunky-pixel rendering without any manual blitting.
//!
//! # Example
//!
//! ```no_run
//! use sdl2::keyboard::Keycode;
//! use sdl2_tools::{FrameContext, GameWindow, Point, Result, Screen};
//!
//! struct Hello;
//!
//! impl Screen for Hello {
//!     fn update(&mut self, ctx: &mut FrameContext<'_>) -> Result<()> {
//!         ctx.canvas.set_draw_color(sdl2::pixels::Color::RGB(0, 0, 100));
//!         ctx.canvas.clear();
//!         Ok(())
//!     }
//!
//!     fn key_down(&mut self, ctx: &mut FrameContext<'_>, keycode: Keycode) -> Result<()> {
//!         if keycode == Keycode::Escape {
//!             ctx.quit();
//!         }
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> Result<()> {
//!     let mut window = GameWindow::new("hello", Point::new(600.0, 600.0), None, 30)?;
//!     window.run(&mut Hello)
//! }
//! ```

use std::time::{Duration, Instant};

use log::{debug, warn};
use sdl2::event::Event;
use sdl2::image::InitFlag;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::{EventPump, Sdl};

use crate::error::{Error, Result};
use crate::point::Point;

/// The per-frame view a [`Screen`] works with: the canvas to draw on plus
/// the frame's facts.
pub struct FrameContext<'a> {
    /// The drawing target, in game pixels.
    pub canvas: &'a mut Canvas<Window>,

    /// The drawable size in game pixels.
    pub window_size: Point,

    /// Frames completed since the loop started.
    pub ticks: u64,

    /// Mouse position in game pixels.
    pub mouse_position: Point,

    quit: &'a mut bool,
}

impl FrameContext<'_> {
    /// Requests a clean loop exit; [`GameWindow::run`] returns after this
    /// frame completes.
    pub fn quit(&mut self) {
        *self.quit = true;
    }
}

/// One application state driven by [`GameWindow::run`].
///
/// Only [`update`](Screen::update) is required; the event hooks default to
/// no-ops. Events are dispatched before `update` within the same frame.
pub trait Screen {
    /// Called once per frame after event dispatch; draw and advance state
    /// here.
    fn update(&mut self, ctx: &mut FrameContext<'_>) -> Result<()>;

    /// A key went down.
    fn key_down(&mut self, _ctx: &mut FrameContext<'_>, _keycode: Keycode) -> Result<()> {
        Ok(())
    }

    /// A key came up.
    fn key_up(&mut self, _ctx: &mut FrameContext<'_>, _keycode: Keycode) -> Result<()> {
        Ok(())
    }

    /// A mouse button went down at `pos` (game pixels).
    fn mouse_button_down(
        &mut self,
        _ctx: &mut FrameContext<'_>,
        _button: MouseButton,
        _pos: Point,
    ) -> Result<()> {
        Ok(())
    }

    /// A mouse button came up at `pos` (game pixels).
    fn mouse_button_up(
        &mut self,
        _ctx: &mut FrameContext<'_>,
        _button: MouseButton,
        _pos: Point,
    ) -> Result<()> {
        Ok(())
    }

    /// Typed text arrived (SDL2 `TextInput`); feed this to
    /// [`InputBox::handle_text_input`](crate::gui::InputBox::handle_text_input).
    fn text_input(&mut self, _ctx: &mut FrameContext<'_>, _text: &str) -> Result<()> {
        Ok(())
    }

    /// Routes one SDL2 event to the hooks above. Override to intercept
    /// events the default dispatch ignores; a window close request calls
    /// [`FrameContext::quit`].
    fn handle_event(&mut self, ctx: &mut FrameContext<'_>, event: &Event) -> Result<()> {
        match event {
            Event::Quit { .. } => {
                ctx.quit();
                Ok(())
            }
            Event::KeyDown {
                keycode: Some(keycode),
                ..
            } => self.key_down(ctx, *keycode),
            Event::KeyUp {
                keycode: Some(keycode),
                ..
            } => self.key_up(ctx, *keycode),
            Event::MouseButtonDown {
                mouse_btn, x, y, ..
            } => self.mouse_button_down(ctx, *mouse_btn, Point::new(*x as f32, *y as f32)),
            Event::MouseButtonUp {
                mouse_btn, x, y, ..
            } => self.mouse_button_up(ctx, *mouse_btn, Point::new(*x as f32, *y as f32)),
            Event::TextInput { text, .. } => self.text_input(ctx, text),
            _ => Ok(()),
        }
    }
}

/// The SDL window, canvas, and fixed-rate loop.
pub struct GameWindow {
    _sdl: Sdl,
    _image_context: sdl2::image::Sdl2ImageContext,
    canvas: Canvas<Window>,
    event_pump: EventPump,
    real_window_size: Point,
    window_size: Point,
    window_scale: Point,
    frame_rate: u32,
    game_ticks: u64,
    running: bool,
}

impl GameWindow {
    /// Opens a centered window of `real_window_size` physical pixels.
    ///
    /// A `window_size` smaller (or larger) than the real size sets the
    /// canvas logical size: drawing happens in game pixels and SDL scales
    /// to the window. `None` draws 1:1.
    pub fn new(
        title: &str,
        real_window_size: Point,
        window_size: Option<Point>,
        frame_rate: u32,
    ) -> Result<GameWindow> {
        let sdl = sdl2::init().map_err(Error::Sdl)?;
        GameWindow::build(sdl, title, real_window_size, window_size, frame_rate)
    }

    /// Opens a window of `window_size` game pixels at the largest integer
    /// scale that fits the desktop, with a 10% margin for taskbars and
    /// decorations. The scale is clamped to 2..=6 and falls back to 2 when
    /// the display mode cannot be queried.
    pub fn fit_to_display(title: &str, window_size: Point, frame_rate: u32) -> Result<GameWindow> {
        let sdl = sdl2::init().map_err(Error::Sdl)?;
        let video = sdl.video().map_err(Error::Sdl)?;

        let scale = match video.desktop_display_mode(0) {
            Ok(mode) => {
                let usable_w = (mode.w as f32 * 0.9) as i32;
                let usable_h = (mode.h as f32 * 0.9) as i32;
                let max_scale_w = usable_w / window_size.x.max(1.0) as i32;
                let max_scale_h = usable_h / window_size.y.max(1.0) as i32;
                max_scale_w.min(max_scale_h).clamp(2, 6)
            }
            Err(e) => {
                warn!("could not query display mode ({e}), using 2x scale");
                2
            }
        };

        GameWindow::build(
            sdl,
            title,
            window_size * scale as f32,
            Some(window_size),
            frame_rate,
        )
    }

    fn build(
        sdl: Sdl,
        title: &str,
        real_window_size: Point,
        window_size: Option<Point>,
        frame_rate: u32,
    ) -> Result<GameWindow> {
        if frame_rate == 0 {
            return Err(Error::InvalidParam("frame rate must be at least 1".into()));
        }
        if real_window_size.x < 1.0 || real_window_size.y < 1.0 {
            return Err(Error::InvalidParam(
                "window size must be at least 1x1".into(),
            ));
        }
        if let Some(size) = window_size {
            if size.x < 1.0 || size.y < 1.0 {
                return Err(Error::InvalidParam(
                    "game pixel size must be at least 1x1".into(),
                ));
            }
        }

        let video = sdl.video().map_err(Error::Sdl)?;
        let image_context = sdl2::image::init(InitFlag::PNG | InitFlag::JPG).map_err(Error::Sdl)?;

        let window = video
            .window(
                title,
                real_window_size.x as u32,
                real_window_size.y as u32,
            )
            .position_centered()
            .build()?;
        let mut canvas = window.into_canvas().build()?;

        let scaled = window_size.is_some_and(|size| size != real_window_size);
        let window_size = if scaled {
            window_size.unwrap_or(real_window_size)
        } else {
            real_window_size
        };
        if scaled {
            canvas.set_logical_size(window_size.x as u32, window_size.y as u32)?;
        }

        // Integer scale for translating raw mouse coordinates; never below 1
        // so a shrunken window degrades to 1:1 rather than dividing by zero.
        let mut window_scale = (real_window_size / window_size).floor();
        window_scale.x = window_scale.x.max(1.0);
        window_scale.y = window_scale.y.max(1.0);

        let event_pump = sdl.event_pump().map_err(Error::Sdl)?;

        debug!(
            "window {}x{} at {}x{} game pixels, {} fps",
            real_window_size.x, real_window_size.y, window_size.x, window_size.y, frame_rate
        );

        Ok(GameWindow {
            _sdl: sdl,
            _image_context: image_context,
            canvas,
            event_pump,
            real_window_size,
            window_size,
            window_scale,
            frame_rate,
            game_ticks: 0,
            running: false,
        })
    }

    /// Runs the loop until the screen requests [`FrameContext::quit`] or an
    /// update returns an error.
    pub fn run(&mut self, screen: &mut dyn Screen) -> Result<()> {
        debug!("screen loop starting at {} fps", self.frame_rate);
        self.running = true;
        let frame_budget = Duration::from_secs(1) / self.frame_rate;

        while self.running {
            let frame_start = Instant::now();

            let events: Vec<Event> = self.event_pump.poll_iter().collect();
            let mouse_state = self.event_pump.mouse_state();
            let mouse_position =
                Point::new(mouse_state.x() as f32, mouse_state.y() as f32) / self.window_scale;

            let mut quit = false;
            {
                let mut ctx = FrameContext {
                    canvas: &mut self.canvas,
                    window_size: self.window_size,
                    ticks: self.game_ticks,
                    mouse_position,
                    quit: &mut quit,
                };
                for event in &events {
                    screen.handle_event(&mut ctx, event)?;
                }
                screen.update(&mut ctx)?;
            }
            if quit {
                self.running = false;
            }

            self.canvas.present();
            self.game_ticks = self.game_ticks.wrapping_add(1);

            // Overrunning frames present immediately; there is no catch-up.
            if let Some(remaining) = frame_budget.checked_sub(frame_start.elapsed()) {
                std::thread::sleep(remaining);
            }
        }

        debug!("screen loop stopped after {} ticks", self.game_ticks);
        Ok(())
    }

    /// Current mouse position in game pixels.
    pub fn mouse_position(&self) -> Point {
        let state = self.event_pump.mouse_state();
        Point::new(state.x() as f32, state.y() as f32) / self.window_scale
    }

    /// For loading textures (animation frames, sprites).
    pub fn texture_creator(&self) -> TextureCreator<WindowContext> {
        self.canvas.texture_creator()
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas<Window> {
        &mut self.canvas
    }

    /// Size of the drawable area in game pixels.
    pub fn window_size(&self) -> Point {
        self.window_size
    }

    /// Size of the window in physical pixels.
    pub fn real_window_size(&self) -> Point {
        self.real_window_size
    }

    /// Physical pixels per game pixel, per axis.
    pub fn window_scale(&self) -> Point {
        self.window_scale
    }

    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    /// Frames completed since the first [`run`](GameWindow::run).
    pub fn ticks(&self) -> u64 {
        self.game_ticks
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}
