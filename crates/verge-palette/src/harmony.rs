//! Color harmony rules — pure hue rotation around the HSL wheel.
//!
//! Each rule takes a base color and produces an ordered set of related
//! colors by rotating the base hue by fixed offsets while holding HSL
//! saturation and lightness. Offset 0 always yields the base color itself,
//! untouched by any round trip.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use verge_color::Color;

/// A named rule for selecting related hues around the color wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HarmonyKind {
    /// Base plus its opposite (2 colors).
    Complementary,
    /// Neighbors 30° either side of the base (3 colors).
    #[default]
    Analogous,
    /// 120° spacing (3 colors).
    Triadic,
    /// The two hues flanking the complement by 30° (3 colors).
    SplitComplementary,
}

impl HarmonyKind {
    /// Every harmony rule, in display order.
    pub const ALL: [Self; 4] = [
        Self::Complementary,
        Self::Analogous,
        Self::Triadic,
        Self::SplitComplementary,
    ];

    /// Hue offsets in degrees, in output order.
    #[must_use]
    pub const fn offsets(self) -> &'static [f64] {
        match self {
            Self::Complementary => &[0.0, 180.0],
            Self::Analogous => &[-30.0, 0.0, 30.0],
            Self::Triadic => &[0.0, 120.0, 240.0],
            Self::SplitComplementary => &[0.0, 150.0, 210.0],
        }
    }

    /// Kebab-case name of this rule.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::SplitComplementary => "split-complementary",
        }
    }

    /// Apply this rule to `base`. See [`generate_harmony`].
    #[must_use]
    pub fn generate(self, base: &Color) -> Vec<Color> {
        generate_harmony(base, self)
    }
}

impl FromStr for HarmonyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| format!("unknown harmony type: {s}"))
    }
}

impl fmt::Display for HarmonyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Produce the ordered color set for `kind`.
///
/// The rotation uses the unrounded HSL hue of `base` (0 for grays, which
/// rotate to themselves). Offset 0 returns a clone of `base`.
#[must_use]
pub fn generate_harmony(base: &Color, kind: HarmonyKind) -> Vec<Color> {
    kind.offsets()
        .iter()
        .map(|&offset| if offset == 0.0 { base.clone() } else { base.rotate_hue(offset) })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use verge_color::space::hue_diff;

    fn color(s: &str) -> Color {
        Color::parse(s).unwrap()
    }

    fn hue(c: &Color) -> f64 {
        f64::from(c.hsl().h)
    }

    #[test]
    fn output_lengths() {
        let base = color("#3366cc");
        assert_eq!(generate_harmony(&base, HarmonyKind::Complementary).len(), 2);
        assert_eq!(generate_harmony(&base, HarmonyKind::Analogous).len(), 3);
        assert_eq!(generate_harmony(&base, HarmonyKind::Triadic).len(), 3);
        assert_eq!(generate_harmony(&base, HarmonyKind::SplitComplementary).len(), 3);
    }

    #[test]
    fn base_is_kept_verbatim() {
        let base = color("#006156");
        for kind in HarmonyKind::ALL {
            let set = generate_harmony(&base, kind);
            assert!(set.contains(&base), "{kind} lost its base color");
        }
        assert_eq!(generate_harmony(&base, HarmonyKind::Analogous)[1], base);
    }

    #[test]
    fn complementary_of_red_is_cyan() {
        let set = generate_harmony(&color("#ff0000"), HarmonyKind::Complementary);
        assert_eq!(set[1].hex(), "#00ffff");
    }

    #[test]
    fn triadic_hues_are_120_apart() {
        for base in ["#ff0000", "#3366cc", "#e67e22", "#8e44ad"] {
            let set = generate_harmony(&color(base), HarmonyKind::Triadic);
            for (i, j) in [(0, 1), (1, 2), (0, 2)] {
                let d = hue_diff(hue(&set[i]), hue(&set[j]));
                assert!((d - 120.0).abs() <= 1.0, "{base}: hues {i},{j} differ by {d}");
            }
        }
    }

    #[test]
    fn analogous_flanks_by_30() {
        let base = color("#3366cc");
        let set = generate_harmony(&base, HarmonyKind::Analogous);
        assert!((hue_diff(hue(&set[0]), hue(&base)) - 30.0).abs() <= 1.0);
        assert!((hue_diff(hue(&set[2]), hue(&base)) - 30.0).abs() <= 1.0);
    }

    #[test]
    fn split_complementary_flanks_the_complement() {
        let base = color("#ff0000");
        let set = generate_harmony(&base, HarmonyKind::SplitComplementary);
        assert!((hue(&set[1]) - 150.0).abs() <= 1.0);
        assert!((hue(&set[2]) - 210.0).abs() <= 1.0);
    }

    #[test]
    fn rotation_holds_saturation_and_lightness() {
        let base = color("#e67e22");
        for c in generate_harmony(&base, HarmonyKind::Triadic) {
            assert!(c.hsl().s.abs_diff(base.hsl().s) <= 1, "{c}");
            assert!(c.hsl().l.abs_diff(base.hsl().l) <= 1, "{c}");
        }
    }

    #[test]
    fn grays_rotate_to_themselves() {
        let gray = color("#777777");
        for c in generate_harmony(&gray, HarmonyKind::Triadic) {
            assert_eq!(c, gray);
        }
    }

    #[test]
    fn rule_rotates_base_by_its_offsets() {
        let base = color("#1976d2");
        for kind in HarmonyKind::ALL {
            let expected: Vec<Color> = kind
                .offsets()
                .iter()
                .map(|&offset| if offset == 0.0 { base.clone() } else { base.rotate_hue(offset) })
                .collect();
            assert_eq!(kind.generate(&base), expected, "{kind}");
        }
        assert_eq!(kind_hex(HarmonyKind::Complementary, "#ff0000"), ["#ff0000", "#00ffff"]);
    }

    fn kind_hex(kind: HarmonyKind, base: &str) -> Vec<String> {
        kind.generate(&color(base)).iter().map(|c| c.hex().to_owned()).collect()
    }

    #[test]
    fn names_roundtrip() {
        for kind in HarmonyKind::ALL {
            assert_eq!(kind.name().parse::<HarmonyKind>(), Ok(kind));
        }
        assert!("tetradic".parse::<HarmonyKind>().is_err());
        assert_eq!(HarmonyKind::default(), HarmonyKind::Analogous);
    }
}
