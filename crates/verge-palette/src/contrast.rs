//! WCAG 2.x contrast checking for foreground/background pairs.
//!
//! - Relative luminance from 8-bit sRGB (0.03928 linearization knee)
//! - Contrast ratio in [1, 21], symmetric in its arguments
//! - Normal-text conformance levels: AAA >= 7, AA >= 4.5
//!
//! The suggestion search walks CIE Lab lightness in cumulative steps of the
//! same size [`Color::darken`] uses, first darker, then lighter, and stops
//! at the first candidate that clears the target. It is advisory: when nothing clears the
//! target the original color comes back unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};
use verge_color::color::ADJUST_STEP;
use verge_color::{Color, space};

/// Default minimum ratio for [`suggest_accessible_color`] (WCAG AA).
pub const DEFAULT_TARGET_RATIO: f64 = 4.5;

/// Minimum ratio for AA conformance (normal text).
pub const AA_RATIO: f64 = 4.5;
/// Minimum ratio for AAA conformance (normal text).
pub const AAA_RATIO: f64 = 7.0;

/// Candidates tried in each direction by [`suggest_accessible_color`],
/// counting the original.
const SUGGEST_ATTEMPTS: usize = 10;
/// Lightness adjustment added per attempt.
const SUGGEST_STEP: f64 = 0.2;

/// WCAG conformance level, ordered `Fail < Aa < Aaa`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ContrastLevel {
    #[serde(rename = "fail")]
    Fail,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

impl ContrastLevel {
    /// Classify a contrast ratio.
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= AAA_RATIO {
            Self::Aaa
        } else if ratio >= AA_RATIO {
            Self::Aa
        } else {
            Self::Fail
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fail => "fail",
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        }
    }

    /// AA or better.
    #[must_use]
    pub const fn is_accessible(self) -> bool {
        !matches!(self, Self::Fail)
    }
}

impl fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of [`check_contrast`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastResult {
    /// Ratio rounded to two decimals.
    pub ratio: f64,
    pub level: ContrastLevel,
    pub is_accessible: bool,
}

// ---------------------------------------------------------------------------
// Luminance and ratio
// ---------------------------------------------------------------------------

/// Linearize one 8-bit sRGB channel the way WCAG 2.x defines it.
#[inline]
fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color per WCAG 2.x, in [0, 1].
///
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
#[must_use]
pub fn relative_luminance(color: &Color) -> f64 {
    let rgb = color.rgb();
    0.2126f64.mul_add(
        linearize(rgb.r),
        0.7152f64.mul_add(linearize(rgb.g), 0.0722 * linearize(rgb.b)),
    )
}

/// WCAG contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0]. The formula is:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// The result does not depend on argument order.
#[must_use]
pub fn contrast_ratio(a: &Color, b: &Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Check `foreground` against `background`.
///
/// The reported ratio is rounded to two decimals; the level is classified
/// from the exact ratio, so a ratio of 4.499 reports `4.5` yet fails.
#[must_use]
pub fn check_contrast(foreground: &Color, background: &Color) -> ContrastResult {
    let ratio = contrast_ratio(foreground, background);
    let level = ContrastLevel::from_ratio(ratio);
    ContrastResult {
        ratio: (ratio * 100.0).round() / 100.0,
        level,
        is_accessible: level.is_accessible(),
    }
}

// ---------------------------------------------------------------------------
// Text color helpers
// ---------------------------------------------------------------------------

/// Pick white or black text for `background`, whichever contrasts more.
/// Ties go to black.
#[must_use]
pub fn find_accessible_text_color(background: &Color) -> Color {
    let white = Color::white();
    let black = Color::black();
    if contrast_ratio(&white, background) > contrast_ratio(&black, background) {
        white
    } else {
        black
    }
}

/// Find a lightness-adjusted variant of `original` with at least
/// `target_ratio` contrast against `background`.
///
/// Walks darker first: each attempt tests the current candidate, then
/// lowers its Lab lightness by `18 × 0.2` starting from the previous step.
/// The walk is repeated upward from the original if ten darker attempts
/// fail, and `original` comes back when neither direction reaches the
/// target.
#[must_use]
pub fn suggest_accessible_color(original: &Color, background: &Color, target_ratio: f64) -> Color {
    let meets = |c: &Color| contrast_ratio(c, background) >= target_ratio;
    if meets(original) {
        return original.clone();
    }

    [-SUGGEST_STEP, SUGGEST_STEP]
        .into_iter()
        .find_map(|step| lightness_walk(original, step).find(|c| meets(c)))
        .unwrap_or_else(|| {
            log::debug!(
                "no variant of {original} reaches {target_ratio}:1 on {background}, keeping it"
            );
            original.clone()
        })
}

/// Candidates 1.. of a cumulative Lab lightness walk from `original`.
///
/// Channels stay unrounded between steps and are clamped to the sRGB
/// gamut after each one; only the yielded colors are quantized.
fn lightness_walk(original: &Color, amount: f64) -> impl Iterator<Item = Color> {
    let rgb = original.rgb();
    let start = (f64::from(rgb.r), f64::from(rgb.g), f64::from(rgb.b));

    std::iter::successors(Some(start), move |&(r, g, b)| {
        let (l, a, bl) = space::rgb_to_lab(r, g, b);
        let (r, g, b) = space::lab_to_rgb(ADJUST_STEP.mul_add(amount, l), a, bl);
        Some((r.clamp(0.0, 255.0), g.clamp(0.0, 255.0), b.clamp(0.0, 255.0)))
    })
    .skip(1)
    .take(SUGGEST_ATTEMPTS - 1)
    .map(|(r, g, b)| Color::from_rgb_f64(r, g, b))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
