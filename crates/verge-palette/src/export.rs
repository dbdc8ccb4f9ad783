//! Palette exporters — CSS custom properties, a Tailwind config, plain JSON
//! and Figma design tokens.
//!
//! Each exporter returns the file content together with a suggested file
//! name derived from the palette name (lowercased, whitespace runs replaced
//! by `-`).

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use verge_color::{Color, Hsl, Rgb};

use crate::palette::{ColorPalette, ModePair, ThemeType};

/// Tailwind shade → alpha suffix appended to the hex. Shade 500 is the
/// opaque color.
const TAILWIND_SHADES: [(u16, &str); 10] = [
    (50, "0D"),
    (100, "1A"),
    (200, "33"),
    (300, "4D"),
    (400, "66"),
    (500, ""),
    (600, "CC"),
    (700, "B3"),
    (800, "99"),
    (900, "80"),
];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize palette: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportKind {
    #[default]
    Json,
    Css,
    Tailwind,
    Figma,
}

impl ExportKind {
    pub const ALL: [Self; 4] = [Self::Json, Self::Css, Self::Tailwind, Self::Figma];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Css => "css",
            Self::Tailwind => "tailwind",
            Self::Figma => "figma",
        }
    }

    const fn file_suffix(self) -> &'static str {
        match self {
            Self::Json => "palette.json",
            Self::Css => "palette.css",
            Self::Tailwind => "tailwind.config.js",
            Self::Figma => "figma-tokens.json",
        }
    }
}

impl FromStr for ExportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| format!("unknown export format: {s}"))
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Exporter knobs. Each exporter reads only the options that apply to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// JSON: include the `metadata` block.
    pub include_metadata: bool,
    /// JSON: emit on a single line.
    pub minified: bool,
    /// CSS: prepended to every variable and utility class name.
    pub prefix: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { include_metadata: true, minified: false, prefix: String::new() }
    }
}

/// A rendered export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub kind: ExportKind,
    pub content: String,
    pub filename: String,
}

/// Render `palette` in the given format.
///
/// # Errors
///
/// Returns [`ExportError::Serialize`] if JSON serialization fails.
pub fn export_palette(
    palette: &ColorPalette,
    kind: ExportKind,
    options: &ExportOptions,
) -> Result<Export, ExportError> {
    let content = match kind {
        ExportKind::Json => to_json(palette, options)?,
        ExportKind::Css => to_css(palette, &options.prefix),
        ExportKind::Tailwind => to_tailwind(palette),
        ExportKind::Figma => to_figma(palette)?,
    };
    Ok(Export { kind, content, filename: filename(&palette.name, kind) })
}

/// `"My Brand  Colors"` + CSS → `"my-brand-colors-palette.css"`.
#[must_use]
pub fn filename(name: &str, kind: ExportKind) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_space = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.extend(ch.to_lowercase());
            in_space = false;
        }
    }
    format!("{slug}-{}", kind.file_suffix())
}

// ─── CSS ─────────────────────────────────────────────────────────────────────

fn css_brand_vars(prefix: &str, role: &str, color: &Color) -> String {
    let Rgb { r, g, b } = color.rgb();
    let Hsl { h, s, l } = color.hsl();
    format!(
        "  --{prefix}color-{role}: {hex};\n  \
         --{prefix}color-{role}-rgb: {r}, {g}, {b};\n  \
         --{prefix}color-{role}-hsl: {h}, {s}%, {l}%;\n",
        hex = color.hex(),
    )
}

fn css_neutral_vars(prefix: &str, bg: &Color, text: &Color, surface: &Color) -> String {
    format!(
        "  --{prefix}color-background: {bg};\n  \
         --{prefix}color-text: {text};\n  \
         --{prefix}color-surface: {surface};\n"
    )
}

fn to_css(palette: &ColorPalette, prefix: &str) -> String {
    let p = prefix;
    let mut css = format!("/* {} Color Palette */\n:root {{\n", palette.name);

    css.push_str("  /* Primary Colors */\n");
    css.push_str(&css_brand_vars(p, "primary", &palette.primary));
    css.push_str("\n  /* Secondary Colors */\n");
    css.push_str(&css_brand_vars(p, "secondary", &palette.secondary));
    css.push_str("\n  /* Accent Colors */\n");
    css.push_str(&css_brand_vars(p, "accent", &palette.accent));
    css.push_str("\n  /* Light Theme */\n");
    css.push_str(&css_neutral_vars(
        p,
        &palette.background.light,
        &palette.text.light,
        &palette.surface.light,
    ));
    css.push_str("}\n\n[data-theme=\"dark\"] {\n  /* Dark Theme */\n");
    css.push_str(&css_neutral_vars(
        p,
        &palette.background.dark,
        &palette.text.dark,
        &palette.surface.dark,
    ));
    css.push_str("}\n\n/* Utility Classes */\n");

    let rule = |class: &str, property: &str, var: &str| {
        format!(".{p}{class} {{ {property}: var(--{p}color-{var}); }}\n")
    };
    for role in ["primary", "secondary", "accent", "background", "surface"] {
        css.push_str(&rule(&format!("bg-{role}"), "background-color", role));
    }
    css.push('\n');
    for role in ["primary", "secondary", "accent"] {
        css.push_str(&rule(&format!("text-{role}"), "color", role));
    }
    css.push_str(&rule("text-foreground", "color", "text"));
    css.push('\n');
    for role in ["primary", "secondary", "accent"] {
        css.push_str(&rule(&format!("border-{role}"), "border-color", role));
    }
    css
}

// ─── Tailwind ────────────────────────────────────────────────────────────────

fn tailwind_scale(role: &str, color: &Color) -> String {
    let hex = color.hex();
    let mut out = format!("        {role}: {{\n          DEFAULT: '{hex}',\n");
    for (shade, alpha) in TAILWIND_SHADES {
        out.push_str(&format!("          {shade}: '{hex}{alpha}',\n"));
    }
    out.push_str("        },\n");
    out
}

fn tailwind_pair(key: &str, pair: &ModePair) -> String {
    format!(
        "        {key}: {{\n          light: '{}',\n          dark: '{}',\n        }}",
        pair.light, pair.dark
    )
}

fn to_tailwind(palette: &ColorPalette) -> String {
    let mut js = format!(
        "// {} Tailwind CSS Configuration\nmodule.exports = {{\n  theme: {{\n    extend: {{\n      colors: {{\n",
        palette.name
    );
    js.push_str(&tailwind_scale("primary", &palette.primary));
    js.push_str(&tailwind_scale("secondary", &palette.secondary));
    js.push_str(&tailwind_scale("accent", &palette.accent));
    js.push_str(&tailwind_pair("background", &palette.background));
    js.push_str(",\n");
    js.push_str(&tailwind_pair("foreground", &palette.text));
    js.push_str(",\n");
    js.push_str(&tailwind_pair("surface", &palette.surface));
    js.push_str("\n      }\n    }\n  }\n}");
    js
}

// ─── JSON ────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonMetadata<'a> {
    name: &'a str,
    id: &'a str,
    created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    theme: Option<ThemeType>,
}

#[derive(Serialize)]
struct JsonColors<'a> {
    primary: &'a Color,
    secondary: &'a Color,
    accent: &'a Color,
    background: &'a ModePair,
    text: &'a ModePair,
    surface: &'a ModePair,
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<JsonMetadata<'a>>,
    colors: JsonColors<'a>,
}

fn to_json(palette: &ColorPalette, options: &ExportOptions) -> Result<String, ExportError> {
    let doc = JsonDocument {
        metadata: options.include_metadata.then(|| JsonMetadata {
            name: &palette.name,
            id: &palette.id,
            created_at: palette.created_at,
            theme: palette.theme,
        }),
        colors: JsonColors {
            primary: &palette.primary,
            secondary: &palette.secondary,
            accent: &palette.accent,
            background: &palette.background,
            text: &palette.text,
            surface: &palette.surface,
        },
    };
    let content = if options.minified {
        serde_json::to_string(&doc)?
    } else {
        serde_json::to_string_pretty(&doc)?
    };
    Ok(content)
}

// ─── Figma tokens ────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct Token<'a> {
    value: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    description: String,
}

impl<'a> Token<'a> {
    fn color(color: &'a Color, description: impl Into<String>) -> Self {
        Self { value: color.hex(), kind: "color", description: description.into() }
    }
}

#[derive(Serialize)]
struct BrandTokens<'a> {
    primary: Token<'a>,
    secondary: Token<'a>,
    accent: Token<'a>,
}

#[derive(Serialize)]
struct ModeTokens<'a> {
    background: Token<'a>,
    text: Token<'a>,
    surface: Token<'a>,
}

#[derive(Serialize)]
struct ColorGroup<T> {
    color: T,
}

#[derive(Serialize)]
struct FigmaTokens<'a> {
    global: ColorGroup<BrandTokens<'a>>,
    light: ColorGroup<ModeTokens<'a>>,
    dark: ColorGroup<ModeTokens<'a>>,
}

fn mode_tokens<'a>(theme: &str, bg: &'a Color, text: &'a Color, surface: &'a Color) -> ModeTokens<'a> {
    ModeTokens {
        background: Token::color(bg, format!("{theme} theme background")),
        text: Token::color(text, format!("{theme} theme text")),
        surface: Token::color(surface, format!("{theme} theme surface")),
    }
}

fn to_figma(palette: &ColorPalette) -> Result<String, ExportError> {
    let tokens = FigmaTokens {
        global: ColorGroup {
            color: BrandTokens {
                primary: Token::color(&palette.primary, "Primary brand color"),
                secondary: Token::color(&palette.secondary, "Secondary brand color"),
                accent: Token::color(&palette.accent, "Accent color for highlights"),
            },
        },
        light: ColorGroup {
            color: mode_tokens(
                "Light",
                &palette.background.light,
                &palette.text.light,
                &palette.surface.light,
            ),
        },
        dark: ColorGroup {
            color: mode_tokens(
                "Dark",
                &palette.background.dark,
                &palette.text.dark,
                &palette.surface.dark,
            ),
        },
    };
    Ok(serde_json::to_string_pretty(&tokens)?)
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
    use serde_json::Value;

    fn palette() -> ColorPalette {
        generate_color_palette(&Color::from_u32(0x1976D2), HarmonyKind::Triadic)
    }

    fn export(kind: ExportKind, options: &ExportOptions) -> Export {
        export_palette(&palette(), kind, options).unwrap()
    }

    #[test]
    fn every_export_mentions_every_hex() {
        let p = palette();
        for kind in ExportKind::ALL {
            let out = export_palette(&p, kind, &ExportOptions::default()).unwrap();
            for (slot, color) in p.slots() {
                assert!(out.content.contains(color.hex()), "{kind} is missing {slot} {color}");
            }
        }
    }

    #[test]
    fn filenames() {
        assert_eq!(filename("Generated Palette", ExportKind::Css), "generated-palette-palette.css");
        assert_eq!(filename("My  Brand\tKit", ExportKind::Json), "my-brand-kit-palette.json");
        assert_eq!(
            filename("Ocean", ExportKind::Tailwind),
            "ocean-tailwind.config.js"
        );
        assert_eq!(filename("Ocean", ExportKind::Figma), "ocean-figma-tokens.json");
    }

    #[test]
    fn css_variables_and_prefix() {
        let options = ExportOptions { prefix: "ds-".into(), ..ExportOptions::default() };
        let css = export(ExportKind::Css, &options).content;
        assert!(css.starts_with("/* Generated Palette Color Palette */\n:root {"));
        assert!(css.contains("  --ds-color-primary: #1976d2;\n"));
        assert!(css.contains("  --ds-color-primary-rgb: 25, 118, 210;\n"));
        assert!(css.contains("--ds-color-primary-hsl: "));
        assert!(css.contains("[data-theme=\"dark\"] {"));
        assert!(css.contains("  --ds-color-background: #0f0f0f;\n"));
        assert!(css.contains(".ds-text-foreground { color: var(--ds-color-text); }"));
        assert!(css.contains(".ds-border-accent { border-color: var(--ds-color-accent); }"));
    }

    #[test]
    fn css_light_block_precedes_dark_block() {
        let css = export(ExportKind::Css, &ExportOptions::default()).content;
        let light = css.find("--color-background: #ffffff").unwrap();
        let dark = css.find("--color-background: #0f0f0f").unwrap();
        assert!(light < dark);
    }

    #[test]
    fn tailwind_shades() {
        let js = export(ExportKind::Tailwind, &ExportOptions::default()).content;
        assert!(js.contains("module.exports = {"));
        assert!(js.contains("DEFAULT: '#1976d2',"));
        assert!(js.contains("50: '#1976d20D',"));
        assert!(js.contains("500: '#1976d2',"));
        assert!(js.contains("900: '#1976d280',"));
        assert!(js.contains("foreground: {\n          light: '#1a1a1a',"));
    }

    #[test]
    fn json_with_metadata() {
        let p = palette();
        let out = export_palette(&p, ExportKind::Json, &ExportOptions::default()).unwrap();
        let doc: Value = serde_json::from_str(&out.content).unwrap();
        assert_eq!(doc["metadata"]["name"], "Generated Palette");
        assert_eq!(doc["metadata"]["id"], p.id.as_str());
        assert_eq!(doc["metadata"]["theme"], "custom");
        assert!(doc["metadata"]["createdAt"].is_string());
        assert_eq!(doc["colors"]["primary"]["hex"], "#1976d2");
        assert_eq!(doc["colors"]["surface"]["light"]["hex"], "#f8f9fa");
        assert!(out.content.contains('\n'));
    }

    #[test]
    fn json_minified_without_metadata() {
        let options = ExportOptions { include_metadata: false, minified: true, ..ExportOptions::default() };
        let out = export(ExportKind::Json, &options);
        assert!(!out.content.contains('\n'));
        let doc: Value = serde_json::from_str(&out.content).unwrap();
        assert!(doc.get("metadata").is_none());
        assert!(doc.get("colors").is_some());
    }

    #[test]
    fn figma_token_tree() {
        let out = export(ExportKind::Figma, &ExportOptions::default());
        let doc: Value = serde_json::from_str(&out.content).unwrap();
        assert_eq!(doc["global"]["color"]["primary"]["value"], "#1976d2");
        assert_eq!(doc["global"]["color"]["accent"]["description"], "Accent color for highlights");
        assert_eq!(doc["light"]["color"]["text"]["type"], "color");
        assert_eq!(doc["dark"]["color"]["surface"]["description"], "Dark theme surface");
        assert_eq!(doc["dark"]["color"]["background"]["value"], "#0f0f0f");
    }

    #[test]
    fn kind_parsing() {
        for kind in ExportKind::ALL {
            assert_eq!(kind.name().parse::<ExportKind>(), Ok(kind));
        }
        assert!("yaml".parse::<ExportKind>().is_err());
    }
}
