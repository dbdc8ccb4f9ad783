//! Whole-palette accessibility audits.
//!
//! A contrast report checks the six foreground/background pairings a UI
//! built from the palette actually renders; a distinguishability report
//! checks the six pairings that must stay apart under a simulated
//! color-vision condition. Both are computed for one [`ThemeMode`].

use serde::Serialize;
use verge_color::{Color, delta_e};

use crate::contrast::{ContrastResult, check_contrast};
use crate::palette::{ColorPalette, PaletteSlot, ThemeMode};
use crate::vision::{
    ColorBlindnessType, DEFAULT_DISTINGUISH_THRESHOLD, colors_distinguishable, simulate_color,
};

/// One audited foreground/background pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastEntry {
    pub label: &'static str,
    pub foreground: Color,
    pub background: Color,
    pub result: ContrastResult,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastReport {
    pub mode: ThemeMode,
    pub entries: Vec<ContrastEntry>,
}

impl ContrastReport {
    /// Number of pairs reaching AA or better.
    #[must_use]
    pub fn passed(&self) -> usize {
        self.entries.iter().filter(|e| e.result.is_accessible).count()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.len()
    }
}

/// One audited pair under simulation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistinguishabilityEntry {
    pub label: &'static str,
    pub first: Color,
    pub second: Color,
    /// The pair as seen under the simulated condition.
    pub simulated: (Color, Color),
    pub delta_e: f64,
    pub distinguishable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistinguishabilityReport {
    pub mode: ThemeMode,
    pub kind: ColorBlindnessType,
    pub entries: Vec<DistinguishabilityEntry>,
}

impl DistinguishabilityReport {
    /// Number of pairs that stay distinguishable.
    #[must_use]
    pub fn passed(&self) -> usize {
        self.entries.iter().filter(|e| e.distinguishable).count()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.len()
    }
}

// ---------------------------------------------------------------------------
// Pairings
// ---------------------------------------------------------------------------

fn contrast_pairs(mode: ThemeMode) -> [(&'static str, PaletteSlot, PaletteSlot); 6] {
    use PaletteSlot::{Accent, Background, Primary, Secondary, Surface, Text};
    [
        ("Text on Background", Text(mode), Background(mode)),
        ("Primary on Background", Primary, Background(mode)),
        ("Secondary on Background", Secondary, Background(mode)),
        ("Accent on Background", Accent, Background(mode)),
        ("Text on Surface", Text(mode), Surface(mode)),
        ("Primary on Surface", Primary, Surface(mode)),
    ]
}

fn distinguish_pairs(mode: ThemeMode) -> [(&'static str, PaletteSlot, PaletteSlot); 6] {
    use PaletteSlot::{Accent, Background, Primary, Secondary, Surface, Text};
    [
        ("Primary vs Background", Primary, Background(mode)),
        ("Secondary vs Background", Secondary, Background(mode)),
        ("Accent vs Background", Accent, Background(mode)),
        ("Primary vs Secondary", Primary, Secondary),
        ("Text vs Background", Text(mode), Background(mode)),
        ("Text vs Surface", Text(mode), Surface(mode)),
    ]
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

/// WCAG contrast for the palette's rendered pairings in `mode`.
#[must_use]
pub fn contrast_report(palette: &ColorPalette, mode: ThemeMode) -> ContrastReport {
    let entries = contrast_pairs(mode)
        .into_iter()
        .map(|(label, fg, bg)| {
            let foreground = palette.get(fg).clone();
            let background = palette.get(bg).clone();
            let result = check_contrast(&foreground, &background);
            ContrastEntry { label, foreground, background, result }
        })
        .collect();
    ContrastReport { mode, entries }
}

/// Distinguishability of the palette's key pairings under `kind`, using
/// [`DEFAULT_DISTINGUISH_THRESHOLD`].
#[must_use]
pub fn distinguishability_report(
    palette: &ColorPalette,
    mode: ThemeMode,
    kind: ColorBlindnessType,
) -> DistinguishabilityReport {
    let entries = distinguish_pairs(mode)
        .into_iter()
        .map(|(label, a, b)| {
            let first = palette.get(a).clone();
            let second = palette.get(b).clone();
            let distinguishable =
                colors_distinguishable(&first, &second, kind, DEFAULT_DISTINGUISH_THRESHOLD);
            let simulated = (simulate_color(&first, kind), simulate_color(&second, kind));
            DistinguishabilityEntry {
                label,
                delta_e: delta_e(&simulated.0, &simulated.1),
                first,
                second,
                simulated,
                distinguishable,
            }
        })
        .collect();
    DistinguishabilityReport { mode, kind, entries }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harmony::HarmonyKind;
    use crate::palette::generate_color_palette;
    use crate::preset::preset;
    use pretty_assertions::assert_eq;

    fn palette() -> ColorPalette {
        generate_color_palette(&Color::from_u32(0x1976D2), HarmonyKind::Triadic)
    }

    #[test]
    fn contrast_report_covers_six_pairs() {
        let report = contrast_report(&palette(), ThemeMode::Light);
        assert_eq!(report.total(), 6);
        let labels: Vec<_> = report.entries.iter().map(|e| e.label).collect();
        assert_eq!(labels[0], "Text on Background");
        assert_eq!(labels[5], "Primary on Surface");
    }

    #[test]
    fn neutral_text_pairs_pass_in_both_modes() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            let report = contrast_report(&palette(), mode);
            let text = &report.entries[0];
            assert_eq!(text.foreground, *palette().text.get(mode));
            assert!(text.result.is_accessible, "{mode}: {:?}", text.result);
            assert!(report.entries[4].result.is_accessible, "{mode}");
        }
    }

    #[test]
    fn passed_counts_accessible_entries() {
        let report = contrast_report(&palette(), ThemeMode::Dark);
        let expected = report.entries.iter().filter(|e| e.result.level.is_accessible()).count();
        assert_eq!(report.passed(), expected);
        assert!(report.passed() <= report.total());
    }

    #[test]
    fn normal_vision_keeps_key_pairs_apart() {
        let p = preset("material").unwrap().apply(&palette());
        let report = distinguishability_report(&p, ThemeMode::Light, ColorBlindnessType::Normal);
        assert_eq!(report.total(), 6);
        assert_eq!(report.passed(), 6);
        for entry in &report.entries {
            assert_eq!(entry.simulated, (entry.first.clone(), entry.second.clone()));
        }
    }

    #[test]
    fn achromatopsia_merges_same_luma_pair() {
        let mut p = palette();
        p.primary = Color::from_u32(0xFF0000);
        p.secondary = Color::from_u32(0x4C4C4C);
        let report =
            distinguishability_report(&p, ThemeMode::Light, ColorBlindnessType::Achromatopsia);
        let pair = report
            .entries
            .iter()
            .find(|e| e.label == "Primary vs Secondary")
            .unwrap();
        assert!(!pair.distinguishable, "delta {}", pair.delta_e);
        assert!(report.passed() < report.total());
    }

    #[test]
    fn entries_agree_with_pairwise_check() {
        let p = palette();
        for kind in ColorBlindnessType::ALL {
            let report = distinguishability_report(&p, ThemeMode::Dark, kind);
            for entry in &report.entries {
                let expected = colors_distinguishable(
                    &entry.first,
                    &entry.second,
                    kind,
                    DEFAULT_DISTINGUISH_THRESHOLD,
                );
                assert_eq!(entry.distinguishable, expected, "{kind}: {}", entry.label);
                assert_eq!(entry.distinguishable, entry.delta_e > DEFAULT_DISTINGUISH_THRESHOLD);
            }
        }
    }
}
