//! Named design-system presets — fixed palettes from well-known systems.
//!
//! Applying a preset overlays all nine of its colors onto an existing
//! palette and tags it with the preset's [`ThemeType`]; the palette keeps its
//! own id, name and timestamp.

use verge_color::Color;

use crate::palette::{ColorPalette, ModePair, ThemeType};

/// Packed 0xRRGGBB colors for one preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetColors {
    pub primary: u32,
    pub secondary: u32,
    pub accent: u32,
    /// (light, dark)
    pub background: (u32, u32),
    pub text: (u32, u32),
    pub surface: (u32, u32),
}

/// A ready-made palette configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePreset {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub theme: ThemeType,
    pub colors: PresetColors,
}

static PRESETS: [ThemePreset; 4] = [
    ThemePreset {
        id: "material",
        name: "Material Design",
        description: "Google's Material Design color system",
        theme: ThemeType::Material,
        colors: PresetColors {
            primary: 0x1976D2,
            secondary: 0xDC004E,
            accent: 0xFF5722,
            background: (0xFAFAFA, 0x121212),
            text: (0x212121, 0xFFFFFF),
            surface: (0xFFFFFF, 0x1E1E1E),
        },
    },
    ThemePreset {
        id: "tailwind",
        name: "Tailwind CSS",
        description: "Default Tailwind CSS color palette",
        theme: ThemeType::Tailwind,
        colors: PresetColors {
            primary: 0x3B82F6,
            secondary: 0x8B5CF6,
            accent: 0x10B981,
            background: (0xFFFFFF, 0x0F172A),
            text: (0x1F2937, 0xF9FAFB),
            surface: (0xF8FAFC, 0x1E293B),
        },
    },
    ThemePreset {
        id: "ios",
        name: "iOS Design",
        description: "Apple's iOS design system colors",
        theme: ThemeType::Ios,
        colors: PresetColors {
            primary: 0x007AFF,
            secondary: 0x5856D6,
            accent: 0xFF3B30,
            background: (0xF2F2F7, 0x000000),
            text: (0x000000, 0xFFFFFF),
            surface: (0xFFFFFF, 0x1C1C1E),
        },
    },
    ThemePreset {
        id: "neumorphism",
        name: "Neumorphism",
        description: "Soft UI design with subtle shadows",
        theme: ThemeType::Neumorphism,
        colors: PresetColors {
            primary: 0x6C5CE7,
            secondary: 0xA29BFE,
            accent: 0xFD79A8,
            background: (0xE3E3E3, 0x2C2C2C),
            text: (0x2D3436, 0xDDD6FE),
            surface: (0xE3E3E3, 0x3A3A3A),
        },
    },
];

/// Look up a preset by id.
///
/// Returns `None` if the id is not recognized.
#[must_use]
pub fn preset(id: &str) -> Option<&'static ThemePreset> {
    let id = id.trim();
    PRESETS.iter().find(|p| p.id.eq_ignore_ascii_case(id))
}

/// All presets, in display order.
#[must_use]
pub fn presets() -> &'static [ThemePreset] {
    &PRESETS
}

/// List all preset ids.
#[must_use]
pub fn preset_ids() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|p| p.id)
}

impl ThemePreset {
    /// Overlay this preset's colors onto `palette`.
    #[must_use]
    pub fn apply(&self, palette: &ColorPalette) -> ColorPalette {
        let c = &self.colors;
        let pair = |(light, dark): (u32, u32)| ModePair::new(Color::from_u32(light), Color::from_u32(dark));
        ColorPalette {
            primary: Color::from_u32(c.primary),
            secondary: Color::from_u32(c.secondary),
            accent: Color::from_u32(c.accent),
            background: pair(c.background),
            text: pair(c.text),
            surface: pair(c.surface),
            theme: Some(self.theme),
            ..palette.clone()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harmony::HarmonyKind;
    use crate::palette::generate_color_palette;
    use pretty_assertions::assert_eq;

    fn base_palette() -> ColorPalette {
        generate_color_palette(&Color::from_u32(0x336699), HarmonyKind::Triadic)
    }

    #[test]
    fn all_presets_resolve() {
        for id in preset_ids() {
            let p = preset(id);
            assert!(p.is_some(), "Preset '{id}' failed to resolve");
        }
        assert_eq!(preset_ids().count(), 4);
    }

    #[test]
    fn unknown_returns_none() {
        assert!(preset("nonexistent").is_none());
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(preset("iOS").map(|p| p.name), Some("iOS Design"));
    }

    #[test]
    fn apply_overlays_colors_and_keeps_identity() {
        let base = base_palette();
        let material = preset("material").unwrap().apply(&base);

        assert_eq!(material.id, base.id);
        assert_eq!(material.name, base.name);
        assert_eq!(material.created_at, base.created_at);
        assert_eq!(material.theme, Some(ThemeType::Material));

        assert_eq!(material.primary.hex(), "#1976d2");
        assert_eq!(material.secondary.hex(), "#dc004e");
        assert_eq!(material.accent.hex(), "#ff5722");
        assert_eq!(material.background.light.hex(), "#fafafa");
        assert_eq!(material.background.dark.hex(), "#121212");
        assert_eq!(material.text.dark.hex(), "#ffffff");
        assert_eq!(material.surface.dark.hex(), "#1e1e1e");
    }

    #[test]
    fn neumorphism_dark_text() {
        let p = preset("neumorphism").unwrap().apply(&base_palette());
        assert_eq!(p.text.dark.hex(), "#ddd6fe");
        assert_eq!(p.background.light, p.surface.light);
    }

    #[test]
    fn applying_twice_is_idempotent() {
        let tailwind = preset("tailwind").unwrap();
        let once = tailwind.apply(&base_palette());
        assert_eq!(tailwind.apply(&once), once);
    }
}
