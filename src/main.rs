// SPDX-License-Identifier: MIT
//
// verge — color palettes and accessibility checks from the command line.
//
// This is the main binary that wires together the two library crates:
//
//   verge-color   → Color value type, parsing, formatting, CIEDE2000
//   verge-palette → harmonies, palettes, presets, WCAG contrast,
//                   color-vision simulation, audits, exports, share codes
//
// Every subcommand renders its whole output into a String first (`run`),
// then `main` prints it. Errors surface through anyhow with context and a
// non-zero exit code.
//
// Logging goes through `log`; RUST_LOG controls the filter (default
// `warn`), and `--verbose` forces `debug`.

use std::fmt::Write as _;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::LevelFilter;

use verge_color::{Color, ColorFormat, delta_e};
use verge_palette::audit::{contrast_report, distinguishability_report};
use verge_palette::contrast::{
    DEFAULT_TARGET_RATIO, check_contrast, contrast_ratio, find_accessible_text_color,
    suggest_accessible_color,
};
use verge_palette::export::{ExportKind, ExportOptions, export_palette};
use verge_palette::palette::{ColorPalette, ThemeMode, generate_color_palette};
use verge_palette::preset::{self, presets};
use verge_palette::share::{decode_share, encode_share};
use verge_palette::vision::{
    ColorBlindnessType, DEFAULT_DISTINGUISH_THRESHOLD, colors_distinguishable, simulate_color,
};
use verge_palette::HarmonyKind;

#[derive(Parser, Debug)]
#[command(name = "verge")]
#[command(about = "Generate color palettes and check them for accessibility", long_about = None)]
struct Cli {
    /// Log at debug level regardless of RUST_LOG
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Generate a palette from a base color
    Generate {
        color: String,
        /// complementary, analogous, triadic or split-complementary
        #[arg(long, default_value = "analogous")]
        harmony: HarmonyKind,
        /// Overlay a preset (see `verge presets`)
        #[arg(long)]
        preset: Option<String>,
        /// hex, rgb or hsl
        #[arg(long, default_value = "hex")]
        format: ColorFormat,
    },
    /// WCAG contrast between a foreground and a background
    Contrast { foreground: String, background: String },
    /// Find a lightness-adjusted color that reaches a contrast target
    Suggest {
        color: String,
        background: String,
        #[arg(long, default_value_t = DEFAULT_TARGET_RATIO)]
        target: f64,
    },
    /// Show how a color looks under color-vision deficiencies
    Simulate {
        color: String,
        /// A single condition; all of them when omitted
        #[arg(long = "type")]
        kind: Option<ColorBlindnessType>,
    },
    /// Check whether two colors stay apart under a condition
    Distinguish {
        first: String,
        second: String,
        #[arg(long = "type", default_value = "normal")]
        kind: ColorBlindnessType,
        #[arg(long, default_value_t = DEFAULT_DISTINGUISH_THRESHOLD)]
        threshold: f64,
    },
    /// Contrast and distinguishability report for a generated palette
    Audit {
        color: String,
        #[arg(long, default_value = "analogous")]
        harmony: HarmonyKind,
        #[arg(long, default_value = "light")]
        mode: ThemeMode,
        #[arg(long = "type", default_value = "deuteranopia")]
        kind: ColorBlindnessType,
    },
    /// Export a generated palette
    Export {
        color: String,
        #[arg(long, default_value = "analogous")]
        harmony: HarmonyKind,
        /// json, css, tailwind or figma
        #[arg(long, default_value = "json")]
        kind: ExportKind,
        /// CSS variable and class prefix
        #[arg(long, default_value = "")]
        prefix: String,
        #[arg(long)]
        minified: bool,
        #[arg(long)]
        no_metadata: bool,
    },
    /// Print a share code for a generated palette, or decode one
    Share {
        /// A base color, or a share code / URL with --decode
        input: String,
        #[arg(long, default_value = "analogous")]
        harmony: HarmonyKind,
        #[arg(long)]
        decode: bool,
    },
    /// List the built-in presets
    Presets,
}

// ─── Helpers ────────────────────────────────────────────────────────────────

fn parse(input: &str) -> Result<Color> {
    Color::parse(input).with_context(|| format!("cannot read {input:?} as a color"))
}

fn build_palette(input: &str, harmony: HarmonyKind, preset_id: Option<&str>) -> Result<ColorPalette> {
    let palette = generate_color_palette(&parse(input)?, harmony);
    match preset_id {
        None => Ok(palette),
        Some(id) => match preset::preset(id) {
            Some(p) => Ok(p.apply(&palette)),
            None => bail!("unknown preset {id:?}"),
        },
    }
}

fn render_palette(out: &mut String, palette: &ColorPalette, format: ColorFormat) -> Result<()> {
    let theme = palette.theme.map_or("none", |t| t.name());
    writeln!(out, "{} ({theme})", palette.name)?;
    for (slot, color) in palette.slots() {
        writeln!(out, "  {:<18} {}", slot.to_string(), color.format(format))?;
    }
    Ok(())
}

const fn yes_no(b: bool) -> &'static str {
    if b { "yes" } else { "no" }
}

// ─── Commands ───────────────────────────────────────────────────────────────

fn run(command: Command) -> Result<String> {
    let mut out = String::new();
    match command {
        Command::Generate { color, harmony, preset, format } => {
            let palette = build_palette(&color, harmony, preset.as_deref())?;
            render_palette(&mut out, &palette, format)?;
        }

        Command::Contrast { foreground, background } => {
            let fg = parse(&foreground)?;
            let bg = parse(&background)?;
            let result = check_contrast(&fg, &bg);
            writeln!(out, "{fg} on {bg}")?;
            writeln!(out, "  ratio       {:.2}:1", result.ratio)?;
            writeln!(out, "  level       {}", result.level)?;
            writeln!(out, "  accessible  {}", yes_no(result.is_accessible))?;
            writeln!(out, "  best text   {}", find_accessible_text_color(&bg))?;
        }

        Command::Suggest { color, background, target } => {
            let original = parse(&color)?;
            let bg = parse(&background)?;
            let suggested = suggest_accessible_color(&original, &bg, target);
            let ratio = contrast_ratio(&suggested, &bg);
            writeln!(out, "{suggested} ({ratio:.2}:1 on {bg})")?;
            if ratio < target {
                writeln!(out, "  no variant reaches {target}:1; original kept")?;
            }
        }

        Command::Simulate { color, kind } => {
            let c = parse(&color)?;
            let kinds = kind.map_or_else(|| ColorBlindnessType::ALL.to_vec(), |k| vec![k]);
            for kind in kinds {
                let info = kind.info();
                writeln!(
                    out,
                    "{:<14} {}  {} ({}, {})",
                    kind.id(),
                    simulate_color(&c, kind),
                    info.name,
                    info.prevalence,
                    info.severity
                )?;
            }
        }

        Command::Distinguish { first, second, kind, threshold } => {
            let a = parse(&first)?;
            let b = parse(&second)?;
            let (sa, sb) = (simulate_color(&a, kind), simulate_color(&b, kind));
            writeln!(out, "{a} vs {b} under {kind}: {sa} vs {sb}")?;
            writeln!(out, "  delta E       {:.2}", delta_e(&sa, &sb))?;
            writeln!(
                out,
                "  distinguishable {}",
                yes_no(colors_distinguishable(&a, &b, kind, threshold))
            )?;
        }

        Command::Audit { color, harmony, mode, kind } => {
            let palette = build_palette(&color, harmony, None)?;
            let contrast = contrast_report(&palette, mode);
            writeln!(out, "Contrast ({mode}): {}/{} pass", contrast.passed(), contrast.total())?;
            for e in &contrast.entries {
                writeln!(
                    out,
                    "  {:<24} {:>6.2}:1  {}",
                    e.label, e.result.ratio, e.result.level
                )?;
            }
            let vision = distinguishability_report(&palette, mode, kind);
            writeln!(
                out,
                "Distinguishable under {kind} ({mode}): {}/{}",
                vision.passed(),
                vision.total()
            )?;
            for e in &vision.entries {
                writeln!(
                    out,
                    "  {:<24} {:>6.2}  {}",
                    e.label,
                    e.delta_e,
                    yes_no(e.distinguishable)
                )?;
            }
        }

        Command::Export { color, harmony, kind, prefix, minified, no_metadata } => {
            let palette = build_palette(&color, harmony, None)?;
            let options = ExportOptions { include_metadata: !no_metadata, minified, prefix };
            let export = export_palette(&palette, kind, &options)
                .with_context(|| format!("exporting {kind}"))?;
            log::info!("suggested filename: {}", export.filename);
            writeln!(out, "{}", export.content)?;
        }

        Command::Share { input, harmony, decode } => {
            if decode {
                let palette = decode_share(&input)
                    .context("decoding share code")?
                    .to_palette()
                    .context("share code holds an invalid color")?;
                render_palette(&mut out, &palette, ColorFormat::Hex)?;
            } else {
                let palette = build_palette(&input, harmony, None)?;
                writeln!(out, "{}", encode_share(&palette)?)?;
            }
        }

        Command::Presets => {
            for p in presets() {
                writeln!(out, "{:<12} {:<16} {}", p.id, p.name, p.description)?;
            }
        }
    }
    Ok(out)
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.format_timestamp_millis().init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    print!("{}", run(cli.command)?);
    Ok(())
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse_args(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("verge").chain(args.iter().copied())).unwrap()
    }

    fn run_args(args: &[&str]) -> Result<String> {
        run(parse_args(args).command)
    }

    // ── Argument parsing ──────────────────────────────────────────────────

    #[test]
    fn generate_defaults() {
        let cli = parse_args(&["generate", "#006156"]);
        assert!(!cli.verbose);
        assert_eq!(
            cli.command,
            Command::Generate {
                color: "#006156".into(),
                harmony: HarmonyKind::Analogous,
                preset: None,
                format: ColorFormat::Hex,
            }
        );
    }

    #[test]
    fn typed_flags_parse() {
        let cli = parse_args(&["-v", "audit", "red", "--harmony", "split-complementary", "--mode", "dark", "--type", "tritanopia"]);
        assert!(cli.verbose);
        assert_eq!(
            cli.command,
            Command::Audit {
                color: "red".into(),
                harmony: HarmonyKind::SplitComplementary,
                mode: ThemeMode::Dark,
                kind: ColorBlindnessType::Tritanopia,
            }
        );
    }

    #[test]
    fn unknown_enum_values_are_rejected() {
        let args = ["verge", "generate", "red", "--harmony", "tetradic"];
        assert!(Cli::try_parse_from(args).is_err());
        let args = ["verge", "simulate", "red", "--type", "colorblind"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    // ── Command output ────────────────────────────────────────────────────

    #[test]
    fn generate_prints_all_slots() {
        let out = run_args(&["generate", "#006156"]).unwrap();
        assert!(out.starts_with("Generated Palette (custom)\n"));
        assert!(out.contains("primary"));
        assert!(out.contains("#006156"));
        assert!(out.contains("surface.dark"));
        assert_eq!(out.lines().count(), 10);
    }

    #[test]
    fn generate_with_preset_and_format() {
        let out = run_args(&["generate", "#006156", "--preset", "material", "--format", "rgb"]).unwrap();
        assert!(out.starts_with("Generated Palette (material)\n"));
        assert!(out.contains("rgb(25, 118, 210)"));
    }

    #[test]
    fn unknown_preset_is_an_error() {
        let err = run_args(&["generate", "red", "--preset", "bootstrap"]).unwrap_err();
        assert!(err.to_string().contains("bootstrap"));
    }

    #[test]
    fn invalid_color_carries_context() {
        let err = run_args(&["contrast", "nope", "#fff"]).unwrap_err();
        assert!(err.to_string().contains("\"nope\""), "{err}");
    }

    #[test]
    fn contrast_white_on_black() {
        let out = run_args(&["contrast", "#ffffff", "#000000"]).unwrap();
        assert!(out.contains("21.00:1"));
        assert!(out.contains("AAA"));
        assert!(out.contains("best text   #ffffff"));
    }

    #[test]
    fn simulate_all_kinds() {
        let out = run_args(&["simulate", "#ff0000"]).unwrap();
        assert_eq!(out.lines().count(), ColorBlindnessType::ALL.len());
        assert!(out.contains("achromatopsia  #4c4c4c"));
    }

    #[test]
    fn distinguish_same_luma_under_achromatopsia() {
        let out = run_args(&["distinguish", "#ff0000", "#4c4c4c", "--type", "achromatopsia"]).unwrap();
        assert!(out.contains("distinguishable no"));
    }

    #[test]
    fn audit_reports_six_pairs_each() {
        let out = run_args(&["audit", "#1976d2"]).unwrap();
        assert!(out.contains("/6 pass"));
        assert!(out.contains("Text vs Surface"));
    }

    #[test]
    fn export_css_with_prefix() {
        let out = run_args(&["export", "#1976d2", "--kind", "css", "--prefix", "ds-"]).unwrap();
        assert!(out.contains("--ds-color-primary: #1976d2;"));
    }

    #[test]
    fn share_roundtrip_through_cli() {
        let code = run_args(&["share", "#1976d2", "--harmony", "triadic"]).unwrap();
        let out = run_args(&["share", code.trim(), "--decode"]).unwrap();
        assert!(out.contains("#1976d2"));
    }

    #[test]
    fn presets_listed() {
        let out = run_args(&["presets"]).unwrap();
        for id in preset::preset_ids() {
            assert!(out.contains(id));
        }
    }
}
