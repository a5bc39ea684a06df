use std::path::{Path, PathBuf};

use ab_glyph::{Font as _, FontArc, FontVec};
use tracing::debug;

use crate::error::{GlyphwrapError, Result};

/// Where a font's bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// A TTF/OTF file on disk. `face_index` selects a face inside a collection.
    Path { path: PathBuf, face_index: u32 },
    /// Font bytes already in memory. They are handed to the parser on the
    /// first load attempt and not kept afterwards.
    Bytes { data: Vec<u8>, face_index: u32 },
    /// A face installed on the system, looked up by family and style.
    System(SystemFont),
}

impl Default for FontSource {
    fn default() -> Self {
        FontSource::System(SystemFont::default())
    }
}

/// Family and style of an installed font.
///
/// The default is DejaVu Sans Book, falling back to any sans-serif face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemFont {
    /// Family names, tried in order.
    pub families: Vec<String>,
    pub weight: u16,
    pub italic: bool,
    pub condensed: bool,
    /// Accept any sans-serif face when none of `families` is installed.
    pub sans_serif_fallback: bool,
}

impl Default for SystemFont {
    fn default() -> Self {
        Self {
            families: vec![
                "DejaVu Sans".to_owned(),
                "Arial".to_owned(),
                "Helvetica".to_owned(),
            ],
            weight: 400,
            italic: false,
            condensed: false,
            sans_serif_fallback: true,
        }
    }
}

impl SystemFont {
    pub fn family(name: impl Into<String>) -> Self {
        Self {
            families: vec![name.into()],
            sans_serif_fallback: false,
            ..Self::default()
        }
    }

    pub fn with_weight(mut self, weight: u16) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// A DejaVu variant named the way its files are, e.g.
    /// `dejavu("DejaVuSerif", "Bold")` or `dejavu("DejaVuSansMono", "Oblique")`.
    ///
    /// Faces are split on camel case after the `DejaVu` prefix; a trailing
    /// `Condensed` selects the condensed stretch. Style words `Bold`,
    /// `ExtraLight`, `Oblique` and `Italic` combine; an empty style or `Book`
    /// is the regular face.
    pub fn dejavu(face: &str, style: &str) -> Self {
        let words = match face.strip_prefix("DejaVu") {
            Some(rest) => split_camel_case(rest),
            None => face.split_whitespace().filter(|w| *w != "DejaVu").collect(),
        };
        let condensed = words.last() == Some(&"Condensed");

        let mut family = String::from("DejaVu");
        for word in &words {
            family.push(' ');
            family.push_str(word);
        }
        let mut families = vec![family];
        if condensed {
            // Some builds file the condensed faces under the base family.
            let base = families[0].trim_end_matches(" Condensed").to_owned();
            families.push(base);
        }

        let weight = if style.contains("ExtraLight") {
            200
        } else if style.contains("Bold") {
            700
        } else {
            400
        };

        Self {
            families,
            weight,
            italic: style.contains("Oblique") || style.contains("Italic"),
            condensed,
            sans_serif_fallback: false,
        }
    }
}

fn split_camel_case(s: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = 0;
    for (i, ch) in s.char_indices().skip(1) {
        let prev_lower = s[..i].chars().next_back().is_some_and(char::is_lowercase);
        if ch.is_uppercase() && prev_lower {
            words.push(&s[start..i]);
            start = i;
        }
    }
    if start < s.len() {
        words.push(&s[start..]);
    }
    words
}

impl FontSource {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        FontSource::Path {
            path: path.into(),
            face_index: 0,
        }
    }

    pub fn bytes(data: impl Into<Vec<u8>>) -> Self {
        FontSource::Bytes {
            data: data.into(),
            face_index: 0,
        }
    }

    pub fn with_face_index(mut self, index: u32) -> Self {
        match &mut self {
            FontSource::Path { face_index, .. } | FontSource::Bytes { face_index, .. } => {
                *face_index = index;
            }
            FontSource::System(_) => {}
        }
        self
    }

    /// Reads and parses the font.
    ///
    /// `Bytes` sources give up their buffer here, so a failed parse leaves
    /// them empty.
    pub(crate) fn open(&mut self) -> Result<LoadedFont> {
        match self {
            FontSource::Path { path, face_index } => {
                let data = load_font_from_file(path)?;
                LoadedFont::from_vec(data, *face_index)
            }
            FontSource::Bytes { data, face_index } => {
                LoadedFont::from_vec(std::mem::take(data), *face_index)
            }
            FontSource::System(query) => {
                let (data, face_index) = load_system_font(query)?;
                LoadedFont::from_vec(data, face_index)
            }
        }
    }
}

/// A parsed font ready for measuring.
///
/// Cheap to clone and safe to share between threads.
#[derive(Clone)]
pub struct LoadedFont {
    pub(crate) font: FontArc,
    pub(crate) units_per_em: f32,
}

impl std::fmt::Debug for LoadedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedFont")
            .field("units_per_em", &self.units_per_em)
            .field("glyph_count", &self.font.glyph_count())
            .finish()
    }
}

impl LoadedFont {
    pub fn from_vec(data: Vec<u8>, face_index: u32) -> Result<Self> {
        let font = FontVec::try_from_vec_and_index(data, face_index)?;
        Self::from_font(FontArc::new(font))
    }

    pub fn from_font(font: FontArc) -> Result<Self> {
        let units_per_em = font
            .units_per_em()
            .filter(|upem| *upem > 0.0)
            .ok_or(GlyphwrapError::MissingUnitsPerEm)?;
        Ok(Self { font, units_per_em })
    }

    pub fn font(&self) -> &FontArc {
        &self.font
    }
}

pub fn load_font_from_file(path: &Path) -> Result<Vec<u8>> {
    debug!(path = %path.display(), "reading font file");
    std::fs::read(path).map_err(|source| GlyphwrapError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Finds an installed face matching `query`.
///
/// Returns the face's bytes and its index within the file.
pub fn load_system_font(query: &SystemFont) -> Result<(Vec<u8>, u32)> {
    use fontdb::{Database, Family, Query, Stretch, Style, Weight};

    let mut db = Database::new();
    db.load_system_fonts();

    let mut families: Vec<Family<'_>> = query
        .families
        .iter()
        .map(|name| Family::Name(name.as_str()))
        .collect();
    if query.sans_serif_fallback {
        families.push(Family::SansSerif);
    }

    let id = db
        .query(&Query {
            families: &families,
            weight: Weight(query.weight),
            stretch: if query.condensed {
                Stretch::Condensed
            } else {
                Stretch::Normal
            },
            style: if query.italic {
                Style::Oblique
            } else {
                Style::Normal
            },
        })
        .ok_or_else(|| GlyphwrapError::NoSystemFont(query.families.join(", ")))?;

    if let Some(face) = db.face(id) {
        debug!(face = %face.post_script_name, index = face.index, "resolved system font");
    }

    db.with_face_data(id, |data, index| (data.to_vec(), index))
        .ok_or_else(|| GlyphwrapError::NoSystemFont(query.families.join(", ")))
}
