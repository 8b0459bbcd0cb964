//! Crate-wide error type
//!
//! SDL2's canvas and texture APIs report failures as plain `String`s; this
//! module funnels those, I/O, and config parsing into one enum so every
//! fallible call in the crate can use `?`.

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for every fallible operation in the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// An SDL2 call failed (window creation, canvas drawing, texture loading).
    #[error("sdl error: {0}")]
    Sdl(String),

    /// Invalid argument caught at construction time.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// Animation frame durations and loaded images must pair up one-to-one.
    #[error("frame count mismatch: {expected} frame durations for {found} images")]
    FrameCountMismatch { expected: usize, found: usize },

    /// A group needs at least one member to broadcast to.
    #[error("group must contain at least one member")]
    EmptyGroup,

    /// Propagated I/O errors (directory scans, config files).
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Malformed JSON config.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Error::Sdl(message)
    }
}

impl From<sdl2::video::WindowBuildError> for Error {
    fn from(e: sdl2::video::WindowBuildError) -> Self {
        Error::Sdl(e.to_string())
    }
}

impl From<sdl2::IntegerOrSdlError> for Error {
    fn from(e: sdl2::IntegerOrSdlError) -> Self {
        Error::Sdl(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sdl_string_conversion() {
        let err: Error = String::from("out of memory").into();
        assert!(matches!(err, Error::Sdl(_)));
        assert!(format!("{}", err).contains("out of memory"));
    }

    #[test]
    fn test_frame_count_mismatch_message() {
        let err = Error::FrameCountMismatch {
            expected: 4,
            found: 3,
        };
        let msg = format!("{}", err);
        assert!(msg.contains('4'));
        assert!(msg.contains('3'));
    }
}
