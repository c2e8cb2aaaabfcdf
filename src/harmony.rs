//! Color harmonies: palettes of five colors derived from a base color
//! by rotating its hue and shifting its saturation and lightness.

use std::fmt;
use std::str::FromStr;
use rand::Rng;
use serde::{Deserialize, Serialize};
use crate::{Color, Error, Hsl};

/// Number of colors in a generated palette.
pub const PALETTE_LEN: usize = 5;

/// Rule used to derive related colors from a base hue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyKind {
    /// The opposite hue and softened variants.
    Complementary,
    /// Hues 120° apart.
    Triadic,
    /// Neighboring hues, ±30° and ±60°.
    Analogous,
    /// The base hue with varied saturation and lightness.
    Monochromatic,
}

impl HarmonyKind {
    pub const ALL: [HarmonyKind; 4] = [
        HarmonyKind::Complementary, HarmonyKind::Triadic,
        HarmonyKind::Analogous, HarmonyKind::Monochromatic];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            HarmonyKind::Complementary => "complementary",
            HarmonyKind::Triadic => "triadic",
            HarmonyKind::Analogous => "analogous",
            HarmonyKind::Monochromatic => "monochromatic",
        }
    }

    /// Capitalized name, e.g. “Triadic”.
    pub fn title(self) -> &'static str {
        match self {
            HarmonyKind::Complementary => "Complementary",
            HarmonyKind::Triadic => "Triadic",
            HarmonyKind::Analogous => "Analogous",
            HarmonyKind::Monochromatic => "Monochromatic",
        }
    }

    fn rules(self) -> &'static [Rule; PALETTE_LEN - 1] {
        match self {
            HarmonyKind::Complementary => &COMPLEMENTARY,
            HarmonyKind::Triadic => &TRIADIC,
            HarmonyKind::Analogous => &ANALOGOUS,
            HarmonyKind::Monochromatic => &MONOCHROMATIC,
        }
    }
}

impl fmt::Display for HarmonyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HarmonyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        HarmonyKind::ALL.into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownHarmony(s.to_string()))
    }
}

/// Change of a saturation or lightness percentage.
#[derive(Clone, Copy)]
enum Shift {
    Keep,
    /// Subtract, but do not go below the floor.
    Down { by: i32, floor: i32 },
    /// Add, but do not go above the ceiling.
    Up { by: i32, ceil: i32 },
}

impl Shift {
    fn apply(self, v: u8) -> i32 {
        let v = v as i32;
        match self {
            Shift::Keep => v,
            Shift::Down { by, floor } => (v - by).max(floor),
            Shift::Up { by, ceil } => (v + by).min(ceil),
        }
    }
}

/// Derivation of one color: hue rotation, saturation and lightness
/// shifts.
#[derive(Clone, Copy)]
struct Rule {
    hue: i32,
    s: Shift,
    l: Shift,
}

impl Rule {
    fn derive(&self, base: Hsl) -> Color {
        Color::from_hsl(base.h as i32 + self.hue,
                        self.s.apply(base.s), self.l.apply(base.l))
    }
}

const fn rotate(hue: i32) -> Rule { Rule { hue, s: Shift::Keep, l: Shift::Keep } }

const fn down(by: i32, floor: i32) -> Shift { Shift::Down { by, floor } }

const fn up(by: i32, ceil: i32) -> Shift { Shift::Up { by, ceil } }

const COMPLEMENTARY: [Rule; 4] = [
    rotate(180),
    Rule { hue: 0, s: down(30, 20), l: up(20, 80) },
    Rule { hue: 180, s: down(30, 20), l: up(20, 80) },
    Rule { hue: 0, s: down(50, 10), l: down(20, 20) },
];

const TRIADIC: [Rule; 4] = [
    rotate(120),
    rotate(240),
    Rule { hue: 0, s: down(20, 20), l: up(15, 80) },
    Rule { hue: 120, s: down(20, 20), l: up(15, 80) },
];

const ANALOGOUS: [Rule; 4] = [rotate(30), rotate(-30), rotate(60), rotate(-60)];

const MONOCHROMATIC: [Rule; 4] = [
    Rule { hue: 0, s: Shift::Keep, l: up(30, 90) },
    Rule { hue: 0, s: Shift::Keep, l: down(30, 10) },
    Rule { hue: 0, s: down(30, 20), l: Shift::Keep },
    Rule { hue: 0, s: up(20, 100), l: Shift::Keep },
];

/// Derive a harmony from `base_hex`.  The base color comes first,
/// followed by four derived colors.  Malformed hex is read as black.
///
/// # Example
///
/// ```
/// use color_harmony::{generate_harmony, HarmonyKind};
/// let p = generate_harmony("#3498db", HarmonyKind::Complementary);
/// assert_eq!(p[0].hex(), "#3498db");
/// assert_eq!(p[1].hsl().h, (p[0].hsl().h + 180) % 360);
/// ```
pub fn generate_harmony(base_hex: &str, kind: HarmonyKind)
                        -> [Color; PALETTE_LEN] {
    harmony_of(&Color::from_hex(base_hex), kind)
}

/// Same as [`generate_harmony`] for an already built [`Color`].
pub fn harmony_of(base: &Color, kind: HarmonyKind) -> [Color; PALETTE_LEN] {
    let hsl = base.hsl();
    let [r0, r1, r2, r3] = kind.rules();
    [base.clone(), r0.derive(hsl), r1.derive(hsl), r2.derive(hsl),
     r3.derive(hsl)]
}

/// A random color with hue in \[0, 360), saturation in \[50, 100) and
/// lightness in \[30, 70).
pub fn random_color_with<R: Rng>(rng: &mut R) -> Color {
    let h = rng.gen_range(0 .. 360);
    let s = rng.gen_range(50 .. 100);
    let l = rng.gen_range(30 .. 70);
    Color::from_hsl(h, s, l)
}

/// Five independent random colors drawn with `rng`
/// (see [`random_color_with`]).
pub fn generate_random_palette_with<R: Rng>(
    rng: &mut R) -> [Color; PALETTE_LEN] {
    std::array::from_fn(|_| random_color_with(&mut *rng))
}

/// Five independent random colors from the thread-local generator.
pub fn generate_random_palette() -> [Color; PALETTE_LEN] {
    generate_random_palette_with(&mut rand::thread_rng())
}
