use std::path::PathBuf;

/// Errors raised while loading a font or measuring with it.
#[derive(thiserror::Error, Debug)]
pub enum GlyphwrapError {
    #[error("Failed to load font from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse font: {0}")]
    InvalidFont(#[from] ab_glyph::InvalidFont),
    #[error("Font does not declare a usable units-per-em value")]
    MissingUnitsPerEm,
    #[error("No installed font matches {0}")]
    NoSystemFont(String),
    #[error("Font is not loaded yet. Call load() or load_sync() first.")]
    NotLoaded,
    #[error("Font loading thread panicked")]
    LoaderPanicked,
}

pub type Result<T> = std::result::Result<T, GlyphwrapError>;
