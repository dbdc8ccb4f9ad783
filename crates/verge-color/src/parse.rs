// SPDX-License-Identifier: MIT
//
// Color string parsing.
//
// Supported notations (case-insensitive, surrounding whitespace ignored):
//
//   #rgb, #rrggbb          hex, leading '#' optional
//   rgb(r, g, b)           integer channels 0–255
//   hsl(h, s%, l%)         h any angle (wrapped), s and l 0–100
//   rebeccapurple, …       CSS named colors
//
// Alpha notations (#rgba, #rrggbbaa, rgba(), hsla()) are rejected: a Color
// has no alpha channel, and silently dropping one would change the color a
// caller meant.

use std::sync::LazyLock;

use regex::Regex;

use crate::color::Color;
use crate::error::ColorError;
use crate::named;
use crate::space;

static RGB_FUNC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$")
        .expect("rgb() pattern is a valid regex")
});

static HSL_FUNC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^hsl\(\s*(-?\d+(?:\.\d+)?)(?:deg)?\s*,\s*(\d+(?:\.\d+)?)%\s*,\s*(\d+(?:\.\d+)?)%\s*\)$",
    )
    .expect("hsl() pattern is a valid regex")
});

/// Parse any supported notation into a [`Color`].
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorInput`] carrying the original input
/// when nothing matches.
pub fn parse_color(input: &str) -> Result<Color, ColorError> {
    let s = input.trim().to_ascii_lowercase();
    if s.is_empty() {
        return Err(ColorError::invalid(input));
    }

    let parsed = if s.starts_with("rgb(") {
        parse_rgb_func(&s)
    } else if s.starts_with("hsl(") {
        parse_hsl_func(&s)
    } else {
        parse_hex(&s).or_else(|| named::lookup(&s).map(Color::from_u32))
    };

    parsed.ok_or_else(|| ColorError::invalid(input))
}

// ─── Hex ─────────────────────────────────────────────────────────────────────

/// Parse `#rgb` / `#rrggbb` (the `#` is optional).
fn parse_hex(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();

    match bytes.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            Some(Color::from_rgb8(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RRGGBB
        6 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            Some(Color::from_rgb8(r, g, b))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Functional notations ────────────────────────────────────────────────────

fn parse_rgb_func(s: &str) -> Option<Color> {
    let caps = RGB_FUNC.captures(s)?;
    let channel = |i: usize| -> Option<u8> { caps.get(i)?.as_str().parse::<u8>().ok() };
    Some(Color::from_rgb8(channel(1)?, channel(2)?, channel(3)?))
}

fn parse_hsl_func(s: &str) -> Option<Color> {
    let caps = HSL_FUNC.captures(s)?;
    let number = |i: usize| -> Option<f64> { caps.get(i)?.as_str().parse::<f64>().ok() };

    let h = number(1)?;
    let s = number(2)?;
    let l = number(3)?;
    // A long enough digit string parses to infinity; it has no angle to wrap.
    if !h.is_finite() {
        return None;
    }
    if !(0.0..=100.0).contains(&s) || !(0.0..=100.0).contains(&l) {
        return None;
    }

    let (r, g, b) = space::hsl_to_rgb(h, s / 100.0, l / 100.0);
    Some(Color::from_rgb_f64(r, g, b))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use pretty_assertions::assert_eq;

    fn rgb_of(input: &str) -> Rgb {
        parse_color(input).unwrap().rgb()
    }

    #[test]
    fn hex_six_digit() {
        assert_eq!(rgb_of("#ff8000"), Rgb { r: 255, g: 128, b: 0 });
        assert_eq!(rgb_of("FF8000"), Rgb { r: 255, g: 128, b: 0 });
    }

    #[test]
    fn hex_three_digit_expands() {
        assert_eq!(rgb_of("#f80"), Rgb { r: 255, g: 136, b: 0 });
    }

    #[test]
    fn hex_rejects_alpha_and_bad_lengths() {
        for bad in ["#ff000080", "#f008", "#12345", "#1234567", "#", "#ggg"] {
            assert!(parse_color(bad).is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn rgb_function() {
        assert_eq!(rgb_of("rgb(255, 0, 128)"), Rgb { r: 255, g: 0, b: 128 });
        assert_eq!(rgb_of("RGB( 1 ,2,3 )"), Rgb { r: 1, g: 2, b: 3 });
    }

    #[test]
    fn rgb_function_rejects_out_of_range_and_junk() {
        for bad in ["rgb(256, 0, 0)", "rgb(-1, 0, 0)", "rgb(1, 2)", "rgb(1, 2, 3, 4)", "rgb(a, b, c)"] {
            assert!(parse_color(bad).is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn hsl_function() {
        assert_eq!(rgb_of("hsl(0, 100%, 50%)"), Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(rgb_of("hsl(120, 100%, 50%)"), Rgb { r: 0, g: 255, b: 0 });
        assert_eq!(rgb_of("hsl(240deg, 100%, 50%)"), Rgb { r: 0, g: 0, b: 255 });
        assert_eq!(rgb_of("hsl(0, 0%, 100%)"), Rgb { r: 255, g: 255, b: 255 });
    }

    #[test]
    fn hsl_function_wraps_hue() {
        assert_eq!(rgb_of("hsl(480, 100%, 50%)"), rgb_of("hsl(120, 100%, 50%)"));
        assert_eq!(rgb_of("hsl(-120, 100%, 50%)"), rgb_of("hsl(240, 100%, 50%)"));
    }

    #[test]
    fn hsl_function_rejects_out_of_range() {
        assert!(parse_color("hsl(0, 101%, 50%)").is_err());
        assert!(parse_color("hsl(0, 50, 50)").is_err());
    }

    #[test]
    fn hsl_function_rejects_hue_that_overflows() {
        let huge = "9".repeat(400);
        assert!(parse_color(&format!("hsl({huge}, 100%, 50%)")).is_err());
        assert!(parse_color(&format!("hsl(-{huge}, 100%, 50%)")).is_err());
    }

    #[test]
    fn hsl_roundtrip_through_format() {
        let c = parse_color("#006156").unwrap();
        let back = parse_color(&c.format(crate::ColorFormat::Hsl)).unwrap();
        let Rgb { r, g, b } = back.rgb();
        assert!(r <= 1 && g.abs_diff(97) <= 2 && b.abs_diff(86) <= 2, "{back}");
    }

    #[test]
    fn named_colors() {
        assert_eq!(parse_color("red").unwrap().hex(), "#ff0000");
        assert_eq!(parse_color("  RebeccaPurple ").unwrap().hex(), "#663399");
        assert_eq!(parse_color("teal").unwrap().hex(), "#008080");
    }

    #[test]
    fn empty_and_unknown_fail_with_original_input() {
        assert_eq!(
            parse_color("  ").unwrap_err(),
            ColorError::InvalidColorInput("  ".into())
        );
        assert_eq!(
            parse_color("blurple").unwrap_err(),
            ColorError::InvalidColorInput("blurple".into())
        );
    }
}
