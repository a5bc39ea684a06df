//! glyphwrap - measure text with real font metrics and wrap it to a width.
//!
//! # Example
//! ```no_run
//! use glyphwrap::GlyphWrapper;
//!
//! let mut wrapper = GlyphWrapper::default();
//! wrapper.load_sync().unwrap();
//!
//! let lines = wrapper.wrap("Lorem ipsum dolor sit amet", 12.0, 100.0).unwrap();
//! assert_eq!(lines, ["Lorem ipsum", "dolor sit amet"]);
//! ```

mod error;
mod font;
mod metrics;
mod pt;
mod text;
mod wrap;

use std::path::PathBuf;
use std::thread::JoinHandle;

use tracing::debug;

pub use error::{GlyphwrapError, Result};
pub use font::{FontSource, LoadedFont, SystemFont, load_font_from_file, load_system_font};
pub use metrics::FontMetrics;
pub use pt::Pt;
pub use text::compute_width;
pub use wrap::{
    DEFAULT_FONT_SIZE, DEFAULT_MAX_WIDTH, Token, Tokens, WrapOptions, normalize_line_breaks,
    wrap_lines,
};

#[derive(Debug)]
enum FontState {
    Unloaded(FontSource),
    Loaded(LoadedFont),
}

/// Measures and wraps text with a single font.
///
/// A wrapper starts out unloaded. Call [`GlyphWrapper::load_sync`] or
/// [`GlyphWrapper::load`] before measuring; both are no-ops once a load has
/// succeeded. Measuring an unloaded wrapper returns
/// [`GlyphwrapError::NotLoaded`].
#[derive(Debug)]
pub struct GlyphWrapper {
    state: FontState,
}

impl Default for GlyphWrapper {
    /// Uses the system's DejaVu Sans, or another sans-serif face.
    fn default() -> Self {
        Self::new(FontSource::default())
    }
}

impl From<LoadedFont> for GlyphWrapper {
    fn from(font: LoadedFont) -> Self {
        Self {
            state: FontState::Loaded(font),
        }
    }
}

impl GlyphWrapper {
    pub fn new(source: FontSource) -> Self {
        Self {
            state: FontState::Unloaded(source),
        }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::new(FontSource::path(path))
    }

    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        Self::new(FontSource::bytes(data))
    }

    /// An installed font, e.g. `SystemFont::dejavu("DejaVuSerif", "Bold")`.
    pub fn from_system(font: SystemFont) -> Self {
        Self::new(FontSource::System(font))
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, FontState::Loaded(_))
    }

    /// Reads and parses the font on the calling thread.
    ///
    /// On failure the wrapper stays unloaded and the error is returned as is.
    pub fn load_sync(&mut self) -> Result<()> {
        let FontState::Unloaded(source) = &mut self.state else {
            return Ok(());
        };
        let font = source.open()?;
        debug!(units_per_em = font.units_per_em, "font loaded");
        self.state = FontState::Loaded(font);
        Ok(())
    }

    /// Loads the font on a background thread.
    pub fn load(mut self) -> PendingLoad {
        let handle = std::thread::spawn(move || {
            self.load_sync()?;
            Ok(self)
        });
        PendingLoad { handle }
    }

    /// The loaded font.
    pub fn metrics(&self) -> Result<&LoadedFont> {
        match &self.state {
            FontState::Loaded(font) => Ok(font),
            FontState::Unloaded(_) => Err(GlyphwrapError::NotLoaded),
        }
    }

    /// Width of `text` at `font_size`, in the unit of `font_size`.
    pub fn compute_width(&self, text: &str, font_size: impl Into<Pt>) -> Result<Pt> {
        let font = self.metrics()?;
        Ok(compute_width(font, text, font_size.into()))
    }

    /// Greedily wraps `text` into lines no wider than `max_width`.
    ///
    /// See [`wrap_lines`] for the exact rules.
    pub fn wrap(
        &self,
        text: &str,
        font_size: impl Into<Pt>,
        max_width: impl Into<Pt>,
    ) -> Result<Vec<String>> {
        self.wrap_with(text, &WrapOptions::new(font_size, max_width))
    }

    pub fn wrap_with(&self, text: &str, options: &WrapOptions) -> Result<Vec<String>> {
        let font = self.metrics()?;
        Ok(wrap_lines(font, text, options.font_size, options.max_width))
    }

    /// Re-measures each line, e.g. the output of [`GlyphWrapper::wrap`].
    pub fn line_widths<I, S>(&self, lines: I, font_size: impl Into<Pt>) -> Result<Vec<Pt>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let font = self.metrics()?;
        let font_size = font_size.into();
        Ok(lines
            .into_iter()
            .map(|line| compute_width(font, line.as_ref(), font_size))
            .collect())
    }
}

/// A font load running on a background thread.
#[derive(Debug)]
pub struct PendingLoad {
    handle: JoinHandle<Result<GlyphWrapper>>,
}

impl PendingLoad {
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Blocks until the load finishes.
    pub fn wait(self) -> Result<GlyphWrapper> {
        self.handle
            .join()
            .map_err(|_| GlyphwrapError::LoaderPanicked)?
    }
}
