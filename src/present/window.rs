//! On-screen sink backed by `minifb`.

use super::{Dimensions, Frame, PresentationSink};
use crate::error::{Error, Result};
use minifb::{Key, KeyRepeat, Window, WindowOptions};
use std::fmt;

/// Owns an OS window and blits each frame into it.
///
/// The window closes when the sink is dropped.
pub struct WindowSink {
    window: Window,
}

impl WindowSink {
    /// Open a resizable window, at least [`Dimensions::MIN_WINDOW`] in size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Presentation`] if the window cannot be created.
    pub fn new(title: &str, size: Dimensions) -> Result<Self> {
        let size = size.at_least_min();
        let window = Window::new(
            title,
            size.width as usize,
            size.height as usize,
            WindowOptions {
                resize: true,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| Error::Presentation(format!("failed to create window: {e}")))?;

        log::debug!("opened {}x{} window", size.width, size.height);
        Ok(Self { window })
    }

    /// Whether the window is still open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// Whether the user closed the window or pressed Escape or Q.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        !self.window.is_open()
            || self.window.is_key_down(Key::Escape)
            || self.window.is_key_pressed(Key::Q, KeyRepeat::No)
    }

    /// Current drawable size, never below [`Dimensions::MIN_WINDOW`].
    ///
    /// Callers forward changes to the rasterizer's canvas.
    #[must_use]
    pub fn size(&self) -> Dimensions {
        let (width, height) = self.window.get_size();
        Dimensions::new(
            u32::try_from(width).unwrap_or(u32::MAX),
            u32::try_from(height).unwrap_or(u32::MAX),
        )
        .at_least_min()
    }
}

impl fmt::Debug for WindowSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowSink")
            .field("size", &self.size())
            .finish_non_exhaustive()
    }
}

impl PresentationSink for WindowSink {
    fn present(&mut self, frame: &Frame<'_>) -> Result<()> {
        if frame.pixels().is_empty() {
            self.window.update();
            return Ok(());
        }
        self.window
            .update_with_buffer(frame.pixels(), frame.width() as usize, frame.height() as usize)
            .map_err(|e| Error::Presentation(e.to_string()))
    }
}
