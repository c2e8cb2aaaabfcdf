//! Color conversions, harmony palettes and hash-seeded pattern grids.
//!
//! - [`Color`]: a hex color with its RGB and HSL views.
//! - [`convert`]: hex ↔ RGB ↔ HSL.
//! - [`harmony`]: [`generate_harmony`] and [`generate_random_palette`].
//! - [`Palette`]: a named, editable list of colors and its
//!   [`export`](palette::export)s.
//! - [`pattern`]: [`generate_pattern`], a decorative 25×25 grid
//!   derived from a string (it does not encode the string).
//! - [`store`]: key-value persistence of palettes.
//!
//! All conversion and generation functions are pure and never fail;
//! malformed hex input is read as black.

use std::fmt;
use std::str::FromStr;
use rgb::RGB8;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub mod convert;
mod error;
pub mod harmony;
pub mod palette;
pub mod pattern;
pub mod prng;
pub mod store;

pub use error::{Error, Result};
pub use harmony::{generate_harmony, generate_random_palette, HarmonyKind};
pub use palette::{Palette, PaletteCategory, PaletteMode};
pub use pattern::{generate_pattern, PatternGrid};

/// A color in the HSL color space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash,
         Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees, in \[0, 360).
    pub h: u16,
    /// Saturation in percent, in \[0, 100\].
    pub s: u8,
    /// Lightness in percent, in \[0, 100\].
    pub l: u8,
}

impl Hsl {
    /// Create an HSL triple, wrapping the hue and clamping `s` and `l`.
    pub fn new(h: i32, s: i32, l: i32) -> Self {
        Hsl { h: h.rem_euclid(360) as u16,
              s: s.clamp(0, 100) as u8,
              l: l.clamp(0, 100) as u8 }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

/// An immutable color.
///
/// The hex string is the canonical representation; [`Color::rgb`] and
/// [`Color::hsl`] are derived from it when the color is created.
///
/// # Example
///
/// ```
/// use color_harmony::{Color, Hsl};
/// let c = Color::from_hex("#3498DB");
/// assert_eq!(c.hex(), "#3498db");
/// assert_eq!(c.hsl(), Hsl { h: 204, s: 70, l: 53 });
/// // Malformed input silently gives black.
/// assert_eq!(Color::from_hex("oops").hex(), "#000000");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    hex: String,
    rgb: RGB8,
    hsl: Hsl,
}

const BLACK: &str = "#000000";
const WHITE: &str = "#ffffff";

impl Color {
    /// Create a color from `#RRGGBB` or `RRGGBB` (any case).
    /// Malformed input gives black.
    pub fn from_hex(hex: &str) -> Self {
        Self::from_rgb(convert::hex_to_rgb(hex))
    }

    pub fn from_rgb(rgb: RGB8) -> Self {
        Color { hex: convert::rgb_to_hex(rgb),
                rgb,
                hsl: convert::rgb_to_hsl(rgb.r, rgb.g, rgb.b) }
    }

    /// Create a color from HSL.  The hue wraps modulo 360, `s` and `l`
    /// are clamped to \[0, 100\].  Because of rounding, the resulting
    /// [`Color::hsl`] may differ from the arguments by one unit.
    pub fn from_hsl(h: i32, s: i32, l: i32) -> Self {
        Self::from_rgb(convert::hsl_to_rgb(h, s, l))
    }

    /// Lowercase `#rrggbb`.
    #[inline]
    pub fn hex(&self) -> &str { &self.hex }

    #[inline]
    pub fn rgb(&self) -> RGB8 { self.rgb }

    #[inline]
    pub fn hsl(&self) -> Hsl { self.hsl }

    /// Perceived brightness in \[0, 255\] (ITU-R BT.601 weights).
    pub fn brightness(&self) -> f64 {
        let RGB8 { r, g, b } = self.rgb;
        (r as f64 * 299. + g as f64 * 587. + b as f64 * 114.) / 1000.
    }

    /// Hex of the text color readable on top of this color: black on
    /// bright colors, white otherwise.
    pub fn contrast_text(&self) -> &'static str {
        if self.brightness() > 128. { BLACK } else { WHITE }
    }

    /// Convert the color to grayscale.
    pub fn to_gray(&self) -> Self {
        let RGB8 { r, g, b } = self.rgb;
        let x = (0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64)
            .round() as u8;
        Self::from_rgb(RGB8::new(x, x, x))
    }
}

impl Default for Color {
    fn default() -> Self { Color::from_rgb(RGB8::new(0, 0, 0)) }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Strict parsing: unlike [`Color::from_hex`], malformed input is
    /// an error.
    fn from_str(s: &str) -> Result<Self> {
        convert::parse_hex(s).map(Color::from_rgb)
    }
}

impl From<RGB8> for Color {
    fn from(rgb: RGB8) -> Self { Color::from_rgb(rgb) }
}

#[derive(Serialize)]
struct ColorRef<'a> {
    hex: &'a str,
    rgb: RGB8,
    hsl: Hsl,
}

#[derive(Deserialize)]
struct HexOnly {
    hex: String,
}

/// Serialized as `{"hex": …, "rgb": {"r", "g", "b"}, "hsl": {"h", "s", "l"}}`.
/// Only `hex` is read back; the other views are derived again.
impl Serialize for Color {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        ColorRef { hex: &self.hex, rgb: self.rgb, hsl: self.hsl }.serialize(s)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let HexOnly { hex } = HexOnly::deserialize(d)?;
        Ok(Color::from_hex(&hex))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_hex() {
        assert_eq!(Color::from_hex("ABCDEF").hex(), "#abcdef");
        assert_eq!(Color::from_hex("#zzzzzz"), Color::default());
        assert_eq!(Color::from_hex("#3498db").rgb(), RGB8::new(52, 152, 219));
    }

    #[test]
    fn from_hsl_wraps_and_clamps() {
        assert_eq!(Color::from_hsl(360, 100, 50).hex(), "#ff0000");
        assert_eq!(Color::from_hsl(-240, 200, 50).hex(), "#00ff00");
        assert_eq!(Hsl::new(-30, 120, -1), Hsl { h: 330, s: 100, l: 0 });
    }

    #[test]
    fn strict_from_str() {
        assert_eq!("#00FF00".parse::<Color>().unwrap().hex(), "#00ff00");
        assert!("#00FF0".parse::<Color>().is_err());
        assert!("black".parse::<Color>().is_err());
    }

    #[test]
    fn contrast() {
        assert_eq!(Color::from_hex("#ffffff").contrast_text(), "#000000");
        assert_eq!(Color::from_hex("#000000").contrast_text(), "#ffffff");
        assert_eq!(Color::from_hex("#3498db").contrast_text(), "#000000");
        // Brightness exactly 128 is not "bright".
        assert_eq!(Color::from_hex("#808080").contrast_text(), "#ffffff");
    }

    #[test]
    fn gray() {
        let g = Color::from_hex("#ff0000").to_gray();
        assert_eq!(g.rgb(), RGB8::new(76, 76, 76));
        assert_eq!(g.hsl().s, 0);
    }

    #[test]
    fn display() {
        assert_eq!(Color::from_hex("#3498db").to_string(), "#3498db");
        assert_eq!(Hsl { h: 204, s: 70, l: 53 }.to_string(),
                   "hsl(204, 70%, 53%)");
    }

    #[test]
    fn serde_shape() {
        let c = Color::from_hex("#3498db");
        let v = serde_json::to_value(&c).unwrap();
        assert_eq!(v, serde_json::json!({
            "hex": "#3498db",
            "rgb": { "r": 52, "g": 152, "b": 219 },
            "hsl": { "h": 204, "s": 70, "l": 53 }
        }));
        let back: Color = serde_json::from_value(v).unwrap();
        assert_eq!(back, c);
        let bare: Color = serde_json::from_str(r##"{"hex":"#FF0000"}"##).unwrap();
        assert_eq!(bare.hsl(), Hsl { h: 0, s: 100, l: 50 });
    }
}
