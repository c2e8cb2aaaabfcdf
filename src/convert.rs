//! Conversions between hex strings, RGB and HSL.
//!
//! The lenient functions ([`hex_to_rgb`], [`rgb_to_hsl`],
//! [`hsl_to_hex`]) never fail: malformed hex is read as black and
//! numeric inputs are wrapped or clamped into range.

use rgb::RGB8;
use crate::{Error, Hsl};

/// Strip an optional leading `#` and check that exactly 6 ASCII hex
/// digits remain.
fn hex_digits(hex: &str) -> Result<&str, Error> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if let Some(c) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(Error::InvalidHex(c))
    }
    if digits.len() != 6 { return Err(Error::InvalidLength(digits.len())) }
    Ok(digits)
}

/// Strict hex parsing: 6 hex digits, optional `#`, any case.
///
/// # Example
///
/// ```
/// use color_harmony::convert::parse_hex;
/// use rgb::RGB8;
/// assert_eq!(parse_hex("#3498DB").unwrap(), RGB8::new(0x34, 0x98, 0xdb));
/// assert!(parse_hex("#12").is_err());
/// ```
pub fn parse_hex(hex: &str) -> Result<RGB8, Error> {
    let d = hex_digits(hex)?;
    let byte = |i: usize| u8::from_str_radix(&d[i .. i + 2], 16)
        .map_err(|_| Error::InvalidHex(d.as_bytes()[i] as char));
    Ok(RGB8::new(byte(0)?, byte(2)?, byte(4)?))
}

/// Parse `#RRGGBB` or `RRGGBB` (any case).  Anything else gives black.
///
/// ```
/// use color_harmony::convert::hex_to_rgb;
/// use rgb::RGB8;
/// assert_eq!(hex_to_rgb("ff8000"), RGB8::new(255, 128, 0));
/// assert_eq!(hex_to_rgb("zzzzzz"), RGB8::new(0, 0, 0));
/// ```
pub fn hex_to_rgb(hex: &str) -> RGB8 {
    parse_hex(hex).unwrap_or(RGB8 { r: 0, g: 0, b: 0 })
}

/// Whether `s` is exactly `#` followed by 6 hex digits.
pub fn is_valid_hex(s: &str) -> bool {
    s.starts_with('#') && hex_digits(s).is_ok()
}

/// Lowercase `#rrggbb`.
pub fn rgb_to_hex(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

/// CSS functional notation `rgb(r, g, b)`.
pub fn rgb_css(c: RGB8) -> String {
    format!("rgb({}, {}, {})", c.r, c.g, c.b)
}

/// Convert RGB channels to HSL with hue in whole degrees and
/// saturation/lightness in whole percents.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = r as f64 / 255.;
    let g = g as f64 / 255.;
    let b = b as f64 / 255.;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.;
    let (h, s) = if max == min {
        (0., 0.) // achromatic
    } else {
        let d = max - min;
        let s = if l > 0.5 { d / (2. - max - min) } else { d / (max + min) };
        let h = if max == r { (g - b) / d + if g < b { 6. } else { 0. } }
                else if max == g { (b - r) / d + 2. }
                else { (r - g) / d + 4. };
        (h / 6., s)
    };
    // A hue just below 1 rounds to 360°, which is 0°.
    let h = (h * 360.).round() as u16 % 360;
    Hsl { h, s: (s * 100.).round() as u8, l: (l * 100.).round() as u8 }
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0. { t += 1. }
    if t > 1. { t -= 1. }
    if t < 1. / 6. { p + (q - p) * 6. * t }
    else if t < 1. / 2. { q }
    else if t < 2. / 3. { p + (q - p) * (2. / 3. - t) * 6. }
    else { p }
}

/// Convert HSL to RGB.  The hue is taken modulo 360, saturation and
/// lightness are clamped to \[0, 100\].
pub fn hsl_to_rgb(h: i32, s: i32, l: i32) -> RGB8 {
    let h = h.rem_euclid(360) as f64 / 360.;
    let s = s.clamp(0, 100) as f64 / 100.;
    let l = l.clamp(0, 100) as f64 / 100.;
    let q = if l < 0.5 { l * (1. + s) } else { l + s - l * s };
    let p = 2. * l - q;
    let channel = |t: f64| (hue_to_rgb(p, q, t) * 255.).round().clamp(0., 255.) as u8;
    RGB8::new(channel(h + 1. / 3.), channel(h), channel(h - 1. / 3.))
}

/// Convert HSL to a lowercase `#rrggbb` string (see [`hsl_to_rgb`]).
///
/// ```
/// use color_harmony::convert::hsl_to_hex;
/// assert_eq!(hsl_to_hex(0, 100, 50), "#ff0000");
/// assert_eq!(hsl_to_hex(-120, 100, 50), "#0000ff");
/// ```
pub fn hsl_to_hex(h: i32, s: i32, l: i32) -> String {
    rgb_to_hex(hsl_to_rgb(h, s, l))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn max_channel_error(a: RGB8, b: RGB8) -> u8 {
        a.r.abs_diff(b.r).max(a.g.abs_diff(b.g)).max(a.b.abs_diff(b.b))
    }

    fn round_trip(c: RGB8) -> RGB8 {
        let hsl = rgb_to_hsl(c.r, c.g, c.b);
        hex_to_rgb(&hsl_to_hex(hsl.h as i32, hsl.s as i32, hsl.l as i32))
    }

    #[test]
    fn parse_valid_hex() {
        assert_eq!(hex_to_rgb("#3498db"), RGB8::new(52, 152, 219));
        assert_eq!(hex_to_rgb("3498DB"), RGB8::new(52, 152, 219));
        assert_eq!(hex_to_rgb("#FFFFFF"), RGB8::new(255, 255, 255));
    }

    #[test]
    fn malformed_hex_is_black() {
        for s in ["zzzzzz", "#12", "", "#", "#1234567", "##123456",
                  "#12345g", " 123456", "#ｆｆｆｆｆｆ"] {
            assert_eq!(hex_to_rgb(s), RGB8::new(0, 0, 0), "{s:?}");
        }
    }

    #[test]
    fn strict_parse_errors() {
        assert!(matches!(parse_hex("#12"), Err(Error::InvalidLength(2))));
        assert!(matches!(parse_hex("#12345g"), Err(Error::InvalidHex('g'))));
        assert!(matches!(parse_hex(""), Err(Error::InvalidLength(0))));
    }

    #[test]
    fn valid_hex_requires_hash() {
        assert!(is_valid_hex("#a1B2c3"));
        assert!(!is_valid_hex("a1b2c3"));
        assert!(!is_valid_hex("#a1b2c"));
    }

    #[test]
    fn formatting() {
        assert_eq!(rgb_to_hex(RGB8::new(0, 10, 255)), "#000aff");
        assert_eq!(rgb_css(RGB8::new(0, 10, 255)), "rgb(0, 10, 255)");
    }

    #[test]
    fn hsl_of_extremes() {
        assert_eq!(rgb_to_hsl(0, 0, 0), Hsl { h: 0, s: 0, l: 0 });
        assert_eq!(rgb_to_hsl(255, 255, 255), Hsl { h: 0, s: 0, l: 100 });
        assert_eq!(rgb_to_hsl(255, 0, 0), Hsl { h: 0, s: 100, l: 50 });
        assert_eq!(rgb_to_hsl(0, 255, 0), Hsl { h: 120, s: 100, l: 50 });
        assert_eq!(rgb_to_hsl(0, 0, 255), Hsl { h: 240, s: 100, l: 50 });
        assert_eq!(rgb_to_hsl(0x34, 0x98, 0xdb), Hsl { h: 204, s: 70, l: 53 });
    }

    #[test]
    fn hue_never_reaches_360() {
        // Red with a tiny blue component: hue ≈ 359.7°.
        let hsl = rgb_to_hsl(255, 0, 1);
        assert!(hsl.h < 360);
        for r in (0 ..= 255).step_by(3) {
            for b in (0 ..= 255).step_by(3) {
                assert!(rgb_to_hsl(r, 0, b).h < 360);
            }
        }
    }

    #[test]
    fn hsl_inputs_are_normalized() {
        assert_eq!(hsl_to_hex(360, 100, 50), hsl_to_hex(0, 100, 50));
        assert_eq!(hsl_to_hex(-30, 100, 50), hsl_to_hex(330, 100, 50));
        assert_eq!(hsl_to_hex(10, 150, 50), hsl_to_hex(10, 100, 50));
        assert_eq!(hsl_to_hex(10, 50, -5), "#000000");
        assert_eq!(hsl_to_hex(10, 50, 120), "#ffffff");
    }

    #[test]
    fn known_hsl_to_hex() {
        assert_eq!(hsl_to_hex(0, 100, 50), "#ff0000");
        assert_eq!(hsl_to_hex(120, 100, 50), "#00ff00");
        assert_eq!(hsl_to_hex(240, 100, 50), "#0000ff");
        assert_eq!(hsl_to_hex(24, 70, 53), "#db7633");
        assert_eq!(hsl_to_hex(204, 70, 53), "#3398db");
    }

    #[test]
    fn round_trip_gray_and_primaries_within_one() {
        for v in 0 ..= 255 {
            let c = RGB8::new(v, v, v);
            assert!(max_channel_error(c, round_trip(c)) <= 1, "{c:?}");
        }
        for hex in ["#ff0000", "#00ff00", "#0000ff", "#ffff00", "#00ffff",
                    "#ff00ff", "#000000", "#ffffff"] {
            let c = hex_to_rgb(hex);
            assert_eq!(round_trip(c), c, "{hex}");
        }
    }

    #[test]
    fn round_trip_bounded_error() {
        // Whole-number h/s/l cannot resolve every RGB color: dark,
        // saturated colors lose up to 5 units per channel.
        for g in 0 ..= 255 {
            for b in 0 ..= 255 {
                let c = RGB8::new(2, g, b);
                assert!(max_channel_error(c, round_trip(c)) <= 5, "{c:?}");
            }
        }
        for r in (0 ..= 255).step_by(5) {
            for g in (0 ..= 255).step_by(5) {
                for b in (0 ..= 255).step_by(5) {
                    let c = RGB8::new(r, g, b);
                    assert!(max_channel_error(c, round_trip(c)) <= 5, "{c:?}");
                }
            }
        }
    }

    #[test]
    fn round_trip_worst_case() {
        let c = RGB8::new(2, 228, 230);
        assert_eq!(max_channel_error(c, round_trip(c)), 5);
    }
}
