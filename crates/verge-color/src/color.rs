// SPDX-License-Identifier: MIT
//
// verge color model — one immutable value, three agreeing notations.
//
// A Color carries its canonical hex string together with the rounded RGB and
// HSL triples derived from it. Every constructor funnels through
// `Color::from_rgb8`, so the three fields can never drift apart: the 8-bit
// RGB triple is the source of truth, hex and HSL are computed from it once.
//
// Adjustments (lighten, darken, saturation, hue) run in float color spaces
// and quantize back to 8-bit at the end:
//
//   lighten / darken      → CIE Lab lightness, 18 units per step
//   adjust_saturation     → CIE LCh chroma,    18 units per step
//   with_hue              → float HSL hue, saturation and lightness kept
//
// Out-of-gamut results are clamped per channel before rounding.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;
use crate::parse;
use crate::space;

/// Lab lightness / LCh chroma units moved by one unit of adjustment amount.
pub const ADJUST_STEP: f64 = 18.0;

// ─── Channel triples ─────────────────────────────────────────────────────────

/// 8-bit sRGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL rounded to integers: `h` in [0, 360), `s` and `l` in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

// ─── ColorFormat ─────────────────────────────────────────────────────────────

/// Output notation for [`Color::format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    /// `#rrggbb`
    #[default]
    Hex,
    /// `rgb(r, g, b)`
    Rgb,
    /// `hsl(h, s%, l%)`
    Hsl,
}

impl ColorFormat {
    /// Lowercase name of the format.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
        }
    }
}

impl FromStr for ColorFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "rgb" => Ok(Self::Rgb),
            "hsl" => Ok(Self::Hsl),
            other => Err(format!("unknown color format: {other}")),
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// An immutable color value in three agreeing notations.
///
/// `hex` is canonical (lowercase `#rrggbb`) and is what equality and
/// serialization key on; `rgb` and `hsl` are the rounded integer triples
/// derived from the same point.
///
/// # Examples
///
/// ```
/// use verge_color::{Color, ColorFormat};
///
/// let teal = Color::parse("#006156").unwrap();
/// assert_eq!(teal.format(ColorFormat::Rgb), "rgb(0, 97, 86)");
/// assert_eq!(teal.format(ColorFormat::Hsl), "hsl(173, 100%, 19%)");
///
/// let named = Color::parse("rebeccapurple").unwrap();
/// assert_eq!(named.hex(), "#663399");
///
/// // Adjustments return new values.
/// let lighter = teal.lighten(1.0);
/// assert!(lighter.hsl().l > teal.hsl().l);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawColor")]
pub struct Color {
    hex: String,
    hsl: Hsl,
    rgb: Rgb,
}

/// Wire shape accepted on deserialization. Only `hex` is trusted; the other
/// fields are re-derived so a hand-edited document cannot break the
/// three-notation invariant.
#[derive(Deserialize)]
struct RawColor {
    hex: String,
}

impl TryFrom<RawColor> for Color {
    type Error = ColorError;

    fn try_from(raw: RawColor) -> Result<Self, Self::Error> {
        Self::parse(&raw.hex)
    }
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Build a color from 8-bit sRGB channels. Every other constructor ends
    /// up here.
    #[must_use]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        let (h, s, l) = space::rgb_to_hsl(r, g, b);
        Self {
            hex: format!("#{r:02x}{g:02x}{b:02x}"),
            hsl: Hsl {
                h: round_hue(h),
                s: round_percent(s),
                l: round_percent(l),
            },
            rgb: Rgb { r, g, b },
        }
    }

    /// Build a color from a packed `0xRRGGBB` value.
    #[must_use]
    pub fn from_u32(packed: u32) -> Self {
        let [_, r, g, b] = packed.to_be_bytes();
        Self::from_rgb8(r, g, b)
    }

    /// Build a color from float sRGB channels in 0.0–255.0, clamping
    /// out-of-gamut values and rounding to the nearest integer.
    #[must_use]
    pub fn from_rgb_f64(r: f64, g: f64, b: f64) -> Self {
        Self::from_rgb8(space::to_u8(r), space::to_u8(g), space::to_u8(b))
    }

    /// Parse a CSS-like color string.
    ///
    /// Accepts 3- or 6-digit hex (with or without `#`), `rgb(r, g, b)`,
    /// `hsl(h, s%, l%)`, and the CSS named colors. Case and surrounding
    /// whitespace are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorInput`] if the string matches none
    /// of the supported notations.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        parse::parse_color(input)
    }

    /// Pure white, `#ffffff`.
    #[must_use]
    pub fn white() -> Self {
        Self::from_rgb8(255, 255, 255)
    }

    /// Pure black, `#000000`.
    #[must_use]
    pub fn black() -> Self {
        Self::from_rgb8(0, 0, 0)
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    /// Canonical lowercase `#rrggbb`.
    #[inline]
    #[must_use]
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Rounded 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Rounded HSL.
    #[inline]
    #[must_use]
    pub const fn hsl(&self) -> Hsl {
        self.hsl
    }

    /// Unrounded HSL computed from the 8-bit channels: `h` in degrees,
    /// `s` and `l` in [0, 1]. Achromatic colors report a hue of 0.
    #[must_use]
    pub fn hsl_f64(&self) -> (f64, f64, f64) {
        space::rgb_to_hsl(self.rgb.r, self.rgb.g, self.rgb.b)
    }

    /// CIE Lab (D65) coordinates.
    #[must_use]
    pub fn to_lab(&self) -> (f64, f64, f64) {
        space::rgb_to_lab(
            f64::from(self.rgb.r),
            f64::from(self.rgb.g),
            f64::from(self.rgb.b),
        )
    }

    /// Whether all three channels are equal.
    #[must_use]
    pub const fn is_gray(&self) -> bool {
        self.rgb.r == self.rgb.g && self.rgb.g == self.rgb.b
    }

    // ─── Formatting ──────────────────────────────────────────────────────

    /// Render in the given notation.
    ///
    /// The literal shapes (`rgb(r, g, b)`, `hsl(h, s%, l%)`) are what CSS and
    /// design-token exporters expect; do not change the spacing.
    #[must_use]
    pub fn format(&self, format: ColorFormat) -> String {
        match format {
            ColorFormat::Hex => self.hex.clone(),
            ColorFormat::Rgb => {
                let Rgb { r, g, b } = self.rgb;
                format!("rgb({r}, {g}, {b})")
            }
            ColorFormat::Hsl => {
                let Hsl { h, s, l } = self.hsl;
                format!("hsl({h}, {s}%, {l}%)")
            }
        }
    }

    // ─── Perceptual Adjustments ──────────────────────────────────────────

    /// Raise CIE Lab lightness by `18 × amount`. Negative amounts darken.
    #[must_use]
    pub fn lighten(&self, amount: f64) -> Self {
        let (l, a, b) = self.to_lab();
        let (r, g, bl) = space::lab_to_rgb(ADJUST_STEP.mul_add(amount, l), a, b);
        Self::from_rgb_f64(r, g, bl)
    }

    /// Lower CIE Lab lightness by `18 × amount`.
    #[must_use]
    pub fn darken(&self, amount: f64) -> Self {
        self.lighten(-amount)
    }

    /// Shift CIE LCh chroma by `18 × amount` (floored at zero). Negative
    /// amounts desaturate.
    #[must_use]
    pub fn adjust_saturation(&self, amount: f64) -> Self {
        let (l, a, b) = self.to_lab();
        let (l, c, h) = space::lab_to_lch(l, a, b);
        let c = ADJUST_STEP.mul_add(amount, c).max(0.0);
        let (l, a, b) = space::lch_to_lab(l, c, h);
        let (r, g, bl) = space::lab_to_rgb(l, a, b);
        Self::from_rgb_f64(r, g, bl)
    }

    /// Replace the HSL hue, keeping the float saturation and lightness.
    ///
    /// This is a rotation around the HSL color wheel; achromatic colors come
    /// back unchanged because they have no saturation to rotate.
    #[must_use]
    pub fn with_hue(&self, degrees: f64) -> Self {
        let (_, s, l) = self.hsl_f64();
        let (r, g, b) = space::hsl_to_rgb(degrees, s, l);
        Self::from_rgb_f64(r, g, b)
    }

    /// Rotate the HSL hue by `degrees` (wraps around 360°).
    #[must_use]
    pub fn rotate_hue(&self, degrees: f64) -> Self {
        let (h, _, _) = self.hsl_f64();
        self.with_hue(space::normalize_hue(h + degrees))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Default for Color {
    /// Default is black.
    fn default() -> Self {
        Self::black()
    }
}

// ─── Free-function surface ───────────────────────────────────────────────────

/// Parse a color string. See [`Color::parse`].
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorInput`] on unsupported input.
pub fn parse_color(input: &str) -> Result<Color, ColorError> {
    Color::parse(input)
}

/// Render a color in the given notation. See [`Color::format`].
#[must_use]
pub fn format_color(color: &Color, format: ColorFormat) -> String {
    color.format(format)
}

/// Whether `input` parses as a color. Never panics.
#[must_use]
pub fn is_valid_color(input: &str) -> bool {
    Color::parse(input).is_ok()
}

// ─── Rounding ────────────────────────────────────────────────────────────────

/// Round a hue to whole degrees, folding 360 back to 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_hue(h: f64) -> u16 {
    // Safe: normalize_hue keeps h in [0, 360) so the rounded value fits.
    let h = space::normalize_hue(h).round() as u16;
    if h >= 360 { 0 } else { h }
}

/// Round a [0, 1] fraction to a whole percentage.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_percent(v: f64) -> u8 {
    // Safe: clamp keeps the value within 0..=100.
    (v * 100.0).round().clamp(0.0, 100.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
