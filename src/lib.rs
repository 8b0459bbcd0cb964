//! Building blocks for SDL2 applications
//!
//! A convenience layer over the `sdl2` crate for small 2D games and tools:
//!
//! - [`Point`] — a 2D vector value type with full operator support,
//!   rotation, distances, and Bézier sampling
//! - [`GameWindow`] / [`Screen`] — a fixed-timestep screen loop with event
//!   dispatch hooks and chunky-pixel logical scaling
//! - [`gui`] — procedurally drawn widgets: buttons, toggle buttons, button
//!   menus, word-wrapped text boxes, input boxes
//! - [`BitmapFont`] — the built-in 5x7 font the widgets draw with
//! - [`Particle`] / [`Circle`] — short-lived visual-effect primitives
//! - [`Animation`] — a frame-by-frame sprite player fed by image files or a
//!   JSON config
//! - [`Group`] — broadcast [`Update`]/[`Render`] calls (or any closure)
//!   across a non-empty collection
//! - [`Ticker`] — "once every N frames" cadence for recurring effects
//!
//! Everything time-based counts game ticks (one per frame of the screen
//! loop), so behavior is deterministic at the configured frame rate.

pub mod animation;
pub mod error;
pub mod font;
pub mod group;
pub mod gui;
pub mod particle;
pub mod point;
pub mod screen;
pub mod ticker;

pub use animation::{Animation, AnimationConfig, FrameClock, FrameEntry};
pub use error::{Error, Result};
pub use font::BitmapFont;
pub use group::{Group, Render, Update};
pub use particle::{Circle, Particle};
pub use point::{bezier_points, Point};
pub use screen::{FrameContext, GameWindow, Screen};
pub use ticker::Ticker;
