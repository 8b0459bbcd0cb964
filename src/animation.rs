//! Frame-by-frame sprite animation
//!
//! An [`Animation`] owns one texture per frame and a [`FrameClock`] that
//! advances through them in game ticks (one tick per screen-loop frame).
//! Frames can come from a directory scan ([`Animation::from_dir`]) or from a
//! JSON config file ([`AnimationConfig`]), and each frame carries its own
//! duration, so a long hold on the first frame followed by a quick flicker
//! is just `[30, 7, 7, 7]`.
//!
//! `FrameClock` is independent of SDL2 and drives anything that steps
//! through timed frames.

use std::path::Path;

use log::debug;
use sdl2::image::LoadTexture;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::group::{Render, Update};

/// File extensions [`Animation::from_dir`] treats as frames.
const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "bmp"];

/// The timing core of an animation: per-frame durations in game ticks, a
/// frame index, and an optional repetition budget.
///
/// Completing a full cycle consumes one repetition; at zero the clock
/// freezes on frame 0 and reports [`is_finished`](FrameClock::is_finished).
/// A clock with no repetition budget loops forever.
#[derive(Debug, Clone)]
pub struct FrameClock {
    durations: Vec<u32>,
    index: usize,
    until_next: u32,
    repetitions: Option<u32>,
    finished: bool,
}

impl FrameClock {
    /// Creates a clock over `durations` (in ticks, each at least 1).
    ///
    /// `repetitions: None` loops forever; `Some(0)` starts finished.
    pub fn new(durations: Vec<u32>, repetitions: Option<u32>) -> Result<FrameClock> {
        if durations.is_empty() {
            return Err(Error::InvalidParam(
                "animation needs at least one frame".into(),
            ));
        }
        if durations.contains(&0) {
            return Err(Error::InvalidParam(
                "frame durations must be at least 1 tick".into(),
            ));
        }
        let until_next = durations[0];
        Ok(FrameClock {
            durations,
            index: 0,
            until_next,
            repetitions,
            finished: repetitions == Some(0),
        })
    }

    /// Counts one game tick; advances the frame when its duration elapses.
    pub fn update(&mut self) {
        if self.finished {
            return;
        }
        self.until_next -= 1;
        if self.until_next == 0 {
            self.index = (self.index + 1) % self.durations.len();
            self.until_next = self.durations[self.index];
            if self.index == 0 {
                if let Some(repetitions) = &mut self.repetitions {
                    *repetitions -= 1;
                    if *repetitions == 0 {
                        self.finished = true;
                    }
                }
            }
        }
    }

    /// Restarts at frame 0 with the repetition budget untouched.
    pub fn reset(&mut self) {
        self.index = 0;
        self.until_next = self.durations[0];
    }

    pub fn frame_index(&self) -> usize {
        self.index
    }

    pub fn frame_count(&self) -> usize {
        self.durations.len()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

/// One frame entry in an [`AnimationConfig`]: an image path (relative to the
/// config's base directory) and how many ticks it stays on screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameEntry {
    pub file: String,
    pub ticks: u32,
}

/// JSON-loadable animation description.
///
/// ```json
/// {
///     "frames": [
///         { "file": "blink_0.png", "ticks": 30 },
///         { "file": "blink_1.png", "ticks": 7 }
///     ],
///     "repetitions": null
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    pub frames: Vec<FrameEntry>,
    /// `null` repeats forever.
    pub repetitions: Option<u32>,
}

impl AnimationConfig {
    /// Reads and parses a config file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<AnimationConfig> {
        let content = std::fs::read_to_string(path)?;
        let config: AnimationConfig = serde_json::from_str(&content)?;
        Ok(config)
    }
}

/// Loads a texture with the file path attached to any failure.
fn load_texture<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    path: &Path,
) -> Result<Texture<'a>> {
    texture_creator
        .load_texture(path)
        .map_err(|e| Error::Sdl(format!("failed to load {}: {}", path.display(), e)))
}

/// A frame-by-frame animation player: one texture per frame plus a
/// [`FrameClock`].
///
/// # Example
///
/// ```no_run
/// # fn demo(
/// #     canvas: &mut sdl2::render::Canvas<sdl2::video::Window>,
/// #     texture_creator: &sdl2::render::TextureCreator<sdl2::video::WindowContext>,
/// # ) -> sdl2_tools::Result<()> {
/// use sdl2::rect::Rect;
/// use sdl2_tools::Animation;
///
/// // assets/explosion holds 0.png through 3.png
/// let mut explosion = Animation::from_dir(
///     texture_creator,
///     "assets/explosion",
///     &[30, 7, 7, 7],
///     Some(1),
/// )?;
///
/// // Every frame of the screen loop:
/// explosion.render(canvas, Rect::new(100, 100, 64, 64))?;
/// explosion.update();
/// # Ok(())
/// # }
/// ```
pub struct Animation<'a> {
    textures: Vec<Texture<'a>>,
    clock: FrameClock,
}

impl<'a> Animation<'a> {
    /// Builds an animation from already-loaded textures; `frame_ticks` must
    /// pair up with them one-to-one.
    pub fn from_textures(
        textures: Vec<Texture<'a>>,
        frame_ticks: &[u32],
        repetitions: Option<u32>,
    ) -> Result<Animation<'a>> {
        if textures.len() != frame_ticks.len() {
            return Err(Error::FrameCountMismatch {
                expected: frame_ticks.len(),
                found: textures.len(),
            });
        }
        Ok(Animation {
            textures,
            clock: FrameClock::new(frame_ticks.to_vec(), repetitions)?,
        })
    }

    /// Loads every image file in `dir`, sorted by file name, as the frames
    /// of the animation.
    ///
    /// Errors if the number of images does not match `frame_ticks.len()`.
    pub fn from_dir(
        texture_creator: &'a TextureCreator<WindowContext>,
        dir: impl AsRef<Path>,
        frame_ticks: &[u32],
        repetitions: Option<u32>,
    ) -> Result<Animation<'a>> {
        let dir = dir.as_ref();
        let mut paths: Vec<_> = std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
                    .unwrap_or(false)
            })
            .collect();
        paths.sort();

        if paths.len() != frame_ticks.len() {
            return Err(Error::FrameCountMismatch {
                expected: frame_ticks.len(),
                found: paths.len(),
            });
        }
        debug!("loading {} animation frames from {}", paths.len(), dir.display());

        let textures = paths
            .iter()
            .map(|path| load_texture(texture_creator, path))
            .collect::<Result<Vec<_>>>()?;
        Animation::from_textures(textures, frame_ticks, repetitions)
    }

    /// Loads the frames listed in `config`, with paths taken relative to
    /// `base_dir`.
    pub fn from_config(
        texture_creator: &'a TextureCreator<WindowContext>,
        config: &AnimationConfig,
        base_dir: impl AsRef<Path>,
    ) -> Result<Animation<'a>> {
        let base_dir = base_dir.as_ref();
        let textures = config
            .frames
            .iter()
            .map(|frame| load_texture(texture_creator, &base_dir.join(&frame.file)))
            .collect::<Result<Vec<_>>>()?;
        let ticks: Vec<u32> = config.frames.iter().map(|frame| frame.ticks).collect();
        Animation::from_textures(textures, &ticks, config.repetitions)
    }

    /// The texture of the current frame.
    pub fn texture(&self) -> &Texture<'a> {
        &self.textures[self.clock.frame_index()]
    }

    /// Draws the current frame into `dest`.
    pub fn render(&self, canvas: &mut Canvas<Window>, dest: Rect) -> Result<()> {
        canvas.copy(self.texture(), None, dest)?;
        Ok(())
    }

    /// Counts one game tick.
    pub fn update(&mut self) {
        self.clock.update();
    }

    /// Restarts the animation at its first frame.
    pub fn reset(&mut self) {
        self.clock.reset();
    }

    pub fn frame_index(&self) -> usize {
        self.clock.frame_index()
    }

    pub fn is_finished(&self) -> bool {
        self.clock.is_finished()
    }
}

impl Update for Animation<'_> {
    fn update(&mut self) {
        Animation::update(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_clock_rejects_empty_and_zero_durations() {
        assert!(FrameClock::new(Vec::new(), None).is_err());
        assert!(FrameClock::new(vec![3, 0, 3], None).is_err());
    }

    #[test]
    fn test_clock_advances_after_duration() {
        let mut clock = FrameClock::new(vec![2, 3], None).expect("valid clock");
        assert_eq!(clock.frame_index(), 0);
        clock.update();
        assert_eq!(clock.frame_index(), 0);
        clock.update();
        assert_eq!(clock.frame_index(), 1);
        // Second frame holds for 3 ticks.
        clock.update();
        clock.update();
        assert_eq!(clock.frame_index(), 1);
        clock.update();
        assert_eq!(clock.frame_index(), 0);
    }

    #[test]
    fn test_clock_loops_forever_without_budget() {
        let mut clock = FrameClock::new(vec![1, 1], None).expect("valid clock");
        for _ in 0..100 {
            clock.update();
        }
        assert!(!clock.is_finished());
    }

    #[test]
    fn test_clock_finishes_after_repetitions() {
        let mut clock = FrameClock::new(vec![1, 1], Some(2)).expect("valid clock");
        // Each cycle takes 2 ticks; two cycles finish the clock.
        for _ in 0..4 {
            assert!(!clock.is_finished());
            clock.update();
        }
        assert!(clock.is_finished());
        // A finished clock freezes.
        let index = clock.frame_index();
        clock.update();
        assert_eq!(clock.frame_index(), index);
    }

    #[test]
    fn test_clock_with_zero_repetitions_starts_finished() {
        let clock = FrameClock::new(vec![5], Some(0)).expect("valid clock");
        assert!(clock.is_finished());
    }

    #[test]
    fn test_clock_reset_restarts_loop() {
        let mut clock = FrameClock::new(vec![1, 1, 1], None).expect("valid clock");
        clock.update();
        clock.update();
        assert_eq!(clock.frame_index(), 2);
        clock.reset();
        assert_eq!(clock.frame_index(), 0);
        clock.update();
        assert_eq!(clock.frame_index(), 1);
    }

    #[test]
    fn test_config_loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{
                "frames": [
                    {{ "file": "0.png", "ticks": 30 }},
                    {{ "file": "1.png", "ticks": 7 }}
                ],
                "repetitions": 2
            }}"#
        )
        .expect("write config");

        let config = AnimationConfig::load_from_file(file.path()).expect("parse config");
        assert_eq!(config.frames.len(), 2);
        assert_eq!(config.frames[0].file, "0.png");
        assert_eq!(config.frames[1].ticks, 7);
        assert_eq!(config.repetitions, Some(2));
    }

    #[test]
    fn test_config_null_repetitions_means_forever() {
        let config: AnimationConfig = serde_json::from_str(
            r#"{ "frames": [{ "file": "a.png", "ticks": 1 }], "repetitions": null }"#,
        )
        .expect("parse config");
        assert_eq!(config.repetitions, None);
    }

    #[test]
    fn test_config_missing_file_errors() {
        assert!(AnimationConfig::load_from_file("no/such/config.json").is_err());
    }
}
