//! Color-vision deficiency simulation and perceptual distinguishability.
//!
//! Dichromacies and anomalous trichromacies use the Machado, Oliveira &
//! Fernandes (2009) 3x3 matrices applied directly to gamma-encoded sRGB in
//! [0, 1]. The two monochromacies use NTSC luma: achromatopsia collapses to a
//! gray, achromatomaly keeps 30% of each channel and blends in 70% luma.
//!
//! Simulation never fails. String entry points fall back to returning their
//! input (or "distinguishable") when it does not parse, and log a warning.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use verge_color::space::to_u8;
use verge_color::{Color, delta_e};

use crate::palette::ColorPalette;

/// Default CIEDE2000 distance above which two colors count as
/// distinguishable.
pub const DEFAULT_DISTINGUISH_THRESHOLD: f64 = 10.0;

type Matrix = [[f64; 3]; 3];

// Machado et al. 2009, severity 1.0 for the -opias, 0.6 for the -omalies.
const PROTANOPIA: Matrix = [
    [0.152_286, 1.052_583, -0.204_868],
    [0.114_503, 0.786_281, 0.099_216],
    [-0.003_882, -0.048_116, 1.051_998],
];
const DEUTERANOPIA: Matrix = [
    [0.367_322, 0.860_646, -0.227_968],
    [0.280_085, 0.672_501, 0.047_413],
    [-0.011_82, 0.042_94, 0.968_881],
];
const TRITANOPIA: Matrix = [
    [1.255_528, -0.076_749, -0.178_779],
    [-0.078_411, 0.930_809, 0.147_602],
    [0.004_733, 0.691_367, 0.303_9],
];
const PROTANOMALY: Matrix = [
    [0.458_064, 0.679_578, -0.137_642],
    [0.092_785, 0.846_313, 0.060_902],
    [-0.007_494, -0.016_807, 1.024_301],
];
const DEUTERANOMALY: Matrix = [
    [0.547_494, 0.607_765, -0.155_259],
    [0.181_692, 0.781_742, 0.036_566],
    [-0.010_41, 0.027_275, 0.983_136],
];
const TRITANOMALY: Matrix = [
    [1.017_277, 0.027_029, -0.044_306],
    [-0.006_113, 0.958_479, 0.047_634],
    [0.006_379, 0.248_708, 0.744_913],
];

/// Share of the original channel kept by achromatomaly.
const ACHROMATOMALY_KEEP: f64 = 0.3;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// How severely a condition affects color discrimination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        })
    }
}

/// Descriptive metadata for a [`ColorBlindnessType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorBlindnessInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub prevalence: &'static str,
    pub severity: Severity,
}

/// A simulated color-vision condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorBlindnessType {
    #[default]
    Normal,
    Protanopia,
    Deuteranopia,
    Tritanopia,
    Achromatopsia,
    Protanomaly,
    Deuteranomaly,
    Tritanomaly,
    Achromatomaly,
}

impl ColorBlindnessType {
    pub const ALL: [Self; 9] = [
        Self::Normal,
        Self::Protanopia,
        Self::Deuteranopia,
        Self::Tritanopia,
        Self::Achromatopsia,
        Self::Protanomaly,
        Self::Deuteranomaly,
        Self::Tritanomaly,
        Self::Achromatomaly,
    ];

    /// Lowercase identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Protanopia => "protanopia",
            Self::Deuteranopia => "deuteranopia",
            Self::Tritanopia => "tritanopia",
            Self::Achromatopsia => "achromatopsia",
            Self::Protanomaly => "protanomaly",
            Self::Deuteranomaly => "deuteranomaly",
            Self::Tritanomaly => "tritanomaly",
            Self::Achromatomaly => "achromatomaly",
        }
    }

    #[must_use]
    pub const fn info(self) -> &'static ColorBlindnessInfo {
        match self {
            Self::Normal => &ColorBlindnessInfo {
                name: "Normal Vision",
                description: "Full color vision with all cone types functioning normally",
                prevalence: "~92% of population",
                severity: Severity::Mild,
            },
            Self::Protanopia => &ColorBlindnessInfo {
                name: "Protanopia",
                description: "Complete absence of L-cones (red-blind)",
                prevalence: "~1% of males",
                severity: Severity::Severe,
            },
            Self::Deuteranopia => &ColorBlindnessInfo {
                name: "Deuteranopia",
                description: "Complete absence of M-cones (green-blind)",
                prevalence: "~1% of males",
                severity: Severity::Severe,
            },
            Self::Tritanopia => &ColorBlindnessInfo {
                name: "Tritanopia",
                description: "Complete absence of S-cones (blue-blind)",
                prevalence: "~0.01% of population",
                severity: Severity::Severe,
            },
            Self::Achromatopsia => &ColorBlindnessInfo {
                name: "Achromatopsia",
                description: "Complete color blindness (monochromacy)",
                prevalence: "~0.003% of population",
                severity: Severity::Severe,
            },
            Self::Protanomaly => &ColorBlindnessInfo {
                name: "Protanomaly",
                description: "Shifted L-cone sensitivity (red-weak)",
                prevalence: "~1% of males",
                severity: Severity::Mild,
            },
            Self::Deuteranomaly => &ColorBlindnessInfo {
                name: "Deuteranomaly",
                description: "Shifted M-cone sensitivity (green-weak)",
                prevalence: "~5% of males",
                severity: Severity::Moderate,
            },
            Self::Tritanomaly => &ColorBlindnessInfo {
                name: "Tritanomaly",
                description: "Shifted S-cone sensitivity (blue-weak)",
                prevalence: "~0.01% of population",
                severity: Severity::Mild,
            },
            Self::Achromatomaly => &ColorBlindnessInfo {
                name: "Achromatomaly",
                description: "Blue cone monochromacy (partial color blindness)",
                prevalence: "~0.001% of population",
                severity: Severity::Moderate,
            },
        }
    }

    const fn matrix(self) -> Option<&'static Matrix> {
        match self {
            Self::Protanopia => Some(&PROTANOPIA),
            Self::Deuteranopia => Some(&DEUTERANOPIA),
            Self::Tritanopia => Some(&TRITANOPIA),
            Self::Protanomaly => Some(&PROTANOMALY),
            Self::Deuteranomaly => Some(&DEUTERANOMALY),
            Self::Tritanomaly => Some(&TRITANOMALY),
            Self::Normal | Self::Achromatopsia | Self::Achromatomaly => None,
        }
    }
}

impl FromStr for ColorBlindnessType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| format!("unknown color blindness type: {s}"))
    }
}

impl fmt::Display for ColorBlindnessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// ---------------------------------------------------------------------------
// Simulation
// ---------------------------------------------------------------------------

/// Normalized (0..1) gamma-encoded channels.
fn unit_rgb(color: &Color) -> [f64; 3] {
    let rgb = color.rgb();
    [rgb.r, rgb.g, rgb.b].map(|c| f64::from(c) / 255.0)
}

/// NTSC luma of normalized channels.
fn luma([r, g, b]: [f64; 3]) -> f64 {
    0.299f64.mul_add(r, 0.587f64.mul_add(g, 0.114 * b))
}

fn from_unit(channels: [f64; 3]) -> Color {
    let [r, g, b] = channels.map(|c| to_u8(c.clamp(0.0, 1.0) * 255.0));
    Color::from_rgb8(r, g, b)
}

fn apply_matrix(m: &Matrix, [r, g, b]: [f64; 3]) -> [f64; 3] {
    m.map(|row| row[0].mul_add(r, row[1].mul_add(g, row[2] * b)))
}

/// How `color` appears to someone with `kind`.
#[must_use]
pub fn simulate_color(color: &Color, kind: ColorBlindnessType) -> Color {
    let rgb = unit_rgb(color);
    match kind {
        ColorBlindnessType::Normal => color.clone(),
        ColorBlindnessType::Achromatopsia => {
            let y = luma(rgb);
            from_unit([y, y, y])
        }
        ColorBlindnessType::Achromatomaly => {
            let y = luma(rgb) * (1.0 - ACHROMATOMALY_KEEP);
            from_unit(rgb.map(|c| ACHROMATOMALY_KEEP.mul_add(c, y)))
        }
        _ => match kind.matrix() {
            Some(m) => from_unit(apply_matrix(m, rgb)),
            None => color.clone(),
        },
    }
}

/// Simulate a color given in any parseable notation and return its hex.
///
/// `Normal` returns `input` untouched. Unparseable input is also returned
/// untouched (with a warning), so this never fails.
#[must_use]
pub fn simulate_color_blindness(input: &str, kind: ColorBlindnessType) -> String {
    if kind == ColorBlindnessType::Normal {
        return input.to_owned();
    }
    match Color::parse(input) {
        Ok(color) => simulate_color(&color, kind).hex().to_owned(),
        Err(e) => {
            log::warn!("cannot simulate {kind}: {e}; returning input unchanged");
            input.to_owned()
        }
    }
}

/// Simulate every color slot of `palette`. Identity metadata is kept.
#[must_use]
pub fn simulate_palette(palette: &ColorPalette, kind: ColorBlindnessType) -> ColorPalette {
    if kind == ColorBlindnessType::Normal {
        return palette.clone();
    }
    palette.map_colors(|c| simulate_color(c, kind))
}

// ---------------------------------------------------------------------------
// Distinguishability
// ---------------------------------------------------------------------------

/// Whether `a` and `b` remain more than `threshold` CIEDE2000 units apart
/// once both are simulated under `kind`.
#[must_use]
pub fn colors_distinguishable(a: &Color, b: &Color, kind: ColorBlindnessType, threshold: f64) -> bool {
    delta_e(&simulate_color(a, kind), &simulate_color(b, kind)) > threshold
}

/// [`are_colors_distinguishable_with_threshold`] at
/// [`DEFAULT_DISTINGUISH_THRESHOLD`].
#[must_use]
pub fn are_colors_distinguishable(a: &str, b: &str, kind: ColorBlindnessType) -> bool {
    are_colors_distinguishable_with_threshold(a, b, kind, DEFAULT_DISTINGUISH_THRESHOLD)
}

/// String-input distinguishability check.
///
/// Fails open: if either input does not parse, the pair is reported as
/// distinguishable and a warning is logged.
#[must_use]
pub fn are_colors_distinguishable_with_threshold(
    a: &str,
    b: &str,
    kind: ColorBlindnessType,
    threshold: f64,
) -> bool {
    match (Color::parse(a), Color::parse(b)) {
        (Ok(a), Ok(b)) => colors_distinguishable(&a, &b, kind, threshold),
        (Err(e), _) | (_, Err(e)) => {
            log::warn!("cannot compare colors under {kind}: {e}; assuming distinguishable");
            true
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
