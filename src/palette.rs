//! Named, editable palettes.
//!
//! A [`Palette`] is created by one generation operation
//! ([`Palette::generate`]) and afterwards only grows or shrinks one
//! color at a time, between [`MIN_COLORS`] and [`MAX_COLORS`].

use std::time::{SystemTime, UNIX_EPOCH};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::{harmony, Color, Error, HarmonyKind, Result};

pub mod export;
pub use export::ExportFormat;

/// Maximum number of colors a palette can hold.
pub const MAX_COLORS: usize = 8;
/// A palette never becomes empty.
pub const MIN_COLORS: usize = 1;

/// How a palette was generated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaletteCategory {
    Random,
    Harmony,
    Custom,
}

/// Generation operation creating a new palette.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaletteMode {
    /// Five random colors.
    Random,
    /// The five colors of a harmony of `base`.
    Harmony { base: String, kind: HarmonyKind },
    /// A single color, to be extended with [`Palette::push`].
    Custom { base: String },
}

/// An ordered list of colors with a name.  Duplicates are allowed.
///
/// # Example
///
/// ```
/// use color_harmony::{HarmonyKind, Palette, PaletteMode};
/// let mut p = Palette::generate(PaletteMode::Harmony {
///     base: "#3498db".into(), kind: HarmonyKind::Triadic });
/// assert_eq!(p.name(), "Triadic Harmony");
/// assert_eq!(p.len(), 5);
/// p.push("#ffffff").unwrap();
/// p.remove(0).unwrap();
/// assert_eq!(p.colors()[0].hex(), "#db3398");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "PaletteRepr")]
pub struct Palette {
    id: u64,
    name: String,
    colors: Vec<Color>,
    /// Milliseconds since the UNIX epoch.
    created_at: u64,
    category: PaletteCategory,
}

/// Unchecked form of [`Palette`] read from JSON.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaletteRepr {
    id: u64,
    name: String,
    colors: Vec<Color>,
    created_at: u64,
    category: PaletteCategory,
}

impl TryFrom<PaletteRepr> for Palette {
    type Error = Error;

    fn try_from(p: PaletteRepr) -> Result<Self> {
        let n = p.colors.len();
        if !(MIN_COLORS ..= MAX_COLORS).contains(&n) {
            return Err(Error::ColorCount(n))
        }
        Ok(Palette { id: p.id, name: p.name, colors: p.colors,
                     created_at: p.created_at, category: p.category })
    }
}

/// Milliseconds since the UNIX epoch (0 if the clock is before it).
pub(crate) fn now_millis() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as u64)
}

impl Palette {
    /// Generate a palette stamped with the current time, drawing random
    /// colors from the thread-local generator.
    pub fn generate(mode: PaletteMode) -> Self {
        Self::generate_with(mode, &mut rand::thread_rng(), now_millis())
    }

    /// Generate a palette with an explicit random generator and
    /// creation time (milliseconds since the UNIX epoch).  The time is
    /// also used as the id.
    pub fn generate_with<R: Rng>(mode: PaletteMode, rng: &mut R,
                                 created_at: u64) -> Self {
        let (name, category, colors) = match mode {
            PaletteMode::Random =>
                (format!("Random Palette {created_at}"),
                 PaletteCategory::Random,
                 harmony::generate_random_palette_with(rng).to_vec()),
            PaletteMode::Harmony { base, kind } =>
                (format!("{} Harmony", kind.title()),
                 PaletteCategory::Harmony,
                 harmony::generate_harmony(&base, kind).to_vec()),
            PaletteMode::Custom { base } =>
                ("Custom Palette".to_string(),
                 PaletteCategory::Custom,
                 vec![Color::from_hex(&base)]),
        };
        debug!(%name, len = colors.len(), "generated palette");
        Palette { id: created_at, name, colors, created_at, category }
    }

    #[inline]
    pub fn id(&self) -> u64 { self.id }

    pub(crate) fn set_id(&mut self, id: u64) { self.id = id }

    #[inline]
    pub fn name(&self) -> &str { &self.name }

    #[inline]
    pub fn category(&self) -> PaletteCategory { self.category }

    /// Creation time in milliseconds since the UNIX epoch.
    #[inline]
    pub fn created_at(&self) -> u64 { self.created_at }

    #[inline]
    pub fn colors(&self) -> &[Color] { &self.colors }

    #[inline]
    pub fn len(&self) -> usize { self.colors.len() }

    /// Always `false`: palettes are created, edited and deserialized
    /// with at least [`MIN_COLORS`] colors.
    #[inline]
    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, Color> { self.colors.iter() }

    /// Append the color `hex` (malformed hex gives black).  Fails when
    /// the palette already holds [`MAX_COLORS`] colors.
    pub fn push(&mut self, hex: &str) -> Result<&Color> {
        if self.colors.len() >= MAX_COLORS {
            return Err(Error::PaletteFull(MAX_COLORS))
        }
        self.colors.push(Color::from_hex(hex));
        debug!(id = self.id, len = self.colors.len(), "color added");
        Ok(&self.colors[self.colors.len() - 1])
    }

    /// Remove and return the color at `index`.  The last remaining
    /// color cannot be removed.
    pub fn remove(&mut self, index: usize) -> Result<Color> {
        let len = self.colors.len();
        if index >= len { return Err(Error::IndexOutOfRange { index, len }) }
        if len <= MIN_COLORS { return Err(Error::LastColor) }
        let c = self.colors.remove(index);
        debug!(id = self.id, index, "color removed");
        Ok(c)
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter { self.colors.iter() }
}
