//! Palette assembly — from a base color and a harmony rule to a complete,
//! role-assigned palette.
//!
//! The brand roles (primary / secondary / accent) come from the harmony set.
//! The neutral roles (background / text / surface, each with a light and a
//! dark variant) are fixed constants that ignore the base color entirely, so
//! every generated palette starts from the same readable baseline.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use verge_color::{Color, ColorError};

use crate::harmony::HarmonyKind;

/// Saturation adjustment used for `secondary` when the harmony set has no
/// second color.
pub const SECONDARY_FALLBACK_SATURATION: f64 = -0.3;
/// Lightening applied to the base when the harmony set has no third color.
pub const ACCENT_FALLBACK_LIGHTEN: f64 = 0.5;
/// Saturation boost applied after [`ACCENT_FALLBACK_LIGHTEN`].
pub const ACCENT_FALLBACK_SATURATION: f64 = 0.2;

/// Name given to freshly generated palettes.
pub const GENERATED_NAME: &str = "Generated Palette";

// Fixed neutrals, packed 0xRRGGBB.
const BACKGROUND_LIGHT: u32 = 0x00FF_FFFF;
const BACKGROUND_DARK: u32 = 0x000F_0F0F;
const TEXT_LIGHT: u32 = 0x001A_1A1A;
const TEXT_DARK: u32 = 0x00F0_F0F0;
const SURFACE_LIGHT: u32 = 0x00F8_F9FA;
const SURFACE_DARK: u32 = 0x001A_1A1A;

// ---------------------------------------------------------------------------
// Supporting types
// ---------------------------------------------------------------------------

/// Light or dark presentation of a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme mode: {other}")),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Design-system tag carried by a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeType {
    Material,
    Tailwind,
    Ios,
    Neumorphism,
    Custom,
}

impl ThemeType {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Material => "material",
            Self::Tailwind => "tailwind",
            Self::Ios => "ios",
            Self::Neumorphism => "neumorphism",
            Self::Custom => "custom",
        }
    }
}

/// One color per theme mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModePair {
    pub light: Color,
    pub dark: Color,
}

impl ModePair {
    #[must_use]
    pub const fn new(light: Color, dark: Color) -> Self {
        Self { light, dark }
    }

    /// The member for `mode`.
    #[must_use]
    pub const fn get(&self, mode: ThemeMode) -> &Color {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }

    fn map(&self, f: &mut impl FnMut(&Color) -> Color) -> Self {
        Self {
            light: f(&self.light),
            dark: f(&self.dark),
        }
    }
}

/// Addresses one of the nine color slots of a [`ColorPalette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteSlot {
    Primary,
    Secondary,
    Accent,
    Background(ThemeMode),
    Text(ThemeMode),
    Surface(ThemeMode),
}

impl fmt::Display for PaletteSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => f.write_str("primary"),
            Self::Secondary => f.write_str("secondary"),
            Self::Accent => f.write_str("accent"),
            Self::Background(mode) => write!(f, "background.{mode}"),
            Self::Text(mode) => write!(f, "text.{mode}"),
            Self::Surface(mode) => write!(f, "surface.{mode}"),
        }
    }
}

// ---------------------------------------------------------------------------
// ColorPalette
// ---------------------------------------------------------------------------

/// A complete palette: three brand colors plus light/dark neutrals.
///
/// Immutable by convention; "editing" builds a new palette (see
/// [`ColorPalette::map_colors`] and [`crate::preset::ThemePreset::apply`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPalette {
    pub id: String,
    pub name: String,
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub background: ModePair,
    pub text: ModePair,
    pub surface: ModePair,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeType>,
}

impl ColorPalette {
    /// Assemble a palette with a fresh id and timestamp.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        primary: Color,
        secondary: Color,
        accent: Color,
        neutrals: Neutrals,
        theme: Option<ThemeType>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            primary,
            secondary,
            accent,
            background: neutrals.background,
            text: neutrals.text,
            surface: neutrals.surface,
            created_at: Utc::now(),
            theme,
        }
    }

    /// All nine slots with their colors, brand roles first.
    #[must_use]
    pub fn slots(&self) -> [(PaletteSlot, &Color); 9] {
        [
            (PaletteSlot::Primary, &self.primary),
            (PaletteSlot::Secondary, &self.secondary),
            (PaletteSlot::Accent, &self.accent),
            (PaletteSlot::Background(ThemeMode::Light), &self.background.light),
            (PaletteSlot::Background(ThemeMode::Dark), &self.background.dark),
            (PaletteSlot::Text(ThemeMode::Light), &self.text.light),
            (PaletteSlot::Text(ThemeMode::Dark), &self.text.dark),
            (PaletteSlot::Surface(ThemeMode::Light), &self.surface.light),
            (PaletteSlot::Surface(ThemeMode::Dark), &self.surface.dark),
        ]
    }

    /// Color in a given slot.
    #[must_use]
    pub const fn get(&self, slot: PaletteSlot) -> &Color {
        match slot {
            PaletteSlot::Primary => &self.primary,
            PaletteSlot::Secondary => &self.secondary,
            PaletteSlot::Accent => &self.accent,
            PaletteSlot::Background(mode) => self.background.get(mode),
            PaletteSlot::Text(mode) => self.text.get(mode),
            PaletteSlot::Surface(mode) => self.surface.get(mode),
        }
    }

    /// Build a new palette by transforming every color slot. Identity
    /// metadata (id, name, timestamp, theme tag) is carried over.
    #[must_use]
    pub fn map_colors(&self, mut f: impl FnMut(&Color) -> Color) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            primary: f(&self.primary),
            secondary: f(&self.secondary),
            accent: f(&self.accent),
            background: self.background.map(&mut f),
            text: self.text.map(&mut f),
            surface: self.surface.map(&mut f),
            created_at: self.created_at,
            theme: self.theme,
        }
    }
}

/// The six neutral colors of a palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neutrals {
    pub background: ModePair,
    pub text: ModePair,
    pub surface: ModePair,
}

impl Default for Neutrals {
    /// The fixed baseline used by every generated palette.
    fn default() -> Self {
        Self {
            background: ModePair::new(
                Color::from_u32(BACKGROUND_LIGHT),
                Color::from_u32(BACKGROUND_DARK),
            ),
            text: ModePair::new(Color::from_u32(TEXT_LIGHT), Color::from_u32(TEXT_DARK)),
            surface: ModePair::new(
                Color::from_u32(SURFACE_LIGHT),
                Color::from_u32(SURFACE_DARK),
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Generate a palette from `base` using `kind`.
///
/// - primary: `base`, unchanged
/// - secondary: harmony[1], or `base` desaturated by 0.3
/// - accent: harmony[2], or `base` lightened by 0.5 then saturated by 0.2
/// - background / text / surface: the fixed [`Neutrals`] baseline
#[must_use]
pub fn generate_color_palette(base: &Color, kind: HarmonyKind) -> ColorPalette {
    let mut harmony = kind.generate(base).into_iter().skip(1);

    let secondary = harmony
        .next()
        .unwrap_or_else(|| base.adjust_saturation(SECONDARY_FALLBACK_SATURATION));
    let accent = harmony.next().unwrap_or_else(|| {
        base.lighten(ACCENT_FALLBACK_LIGHTEN)
            .adjust_saturation(ACCENT_FALLBACK_SATURATION)
    });

    log::debug!(
        "generated {kind} palette from {base}: secondary {secondary}, accent {accent}"
    );

    ColorPalette::new(
        GENERATED_NAME,
        base.clone(),
        secondary,
        accent,
        Neutrals::default(),
        Some(ThemeType::Custom),
    )
}

/// Parse `input` and generate a palette from it.
///
/// # Errors
///
/// Propagates [`ColorError::InvalidColorInput`] from the parser.
pub fn generate_palette_from_str(
    input: &str,
    kind: HarmonyKind,
) -> Result<ColorPalette, ColorError> {
    let base = Color::parse(input)?;
    Ok(generate_color_palette(&base, kind))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
