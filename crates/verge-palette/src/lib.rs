//! # verge-palette — Palette, Accessibility and Color-Vision Engine
//!
//! Generates complete UI palettes from a single base color and checks them
//! for accessibility. One parameter shift (base color, harmony rule, preset)
//! produces an entirely new palette with the same role layout.
//!
//! # Architecture
//!
//! ```text
//! base Color + HarmonyKind
//!     │
//!     ▼
//! harmony.rs:  rotate the base hue into a related color set (pure math)
//!     │
//!     ▼
//! palette.rs:  assign colors to roles (primary/secondary/accent + neutrals)
//!     │        preset.rs overlays fixed design-system palettes
//!     ▼
//! contrast.rs: WCAG luminance, ratios, AA/AAA levels, suggestions
//! vision.rs:   color-vision deficiency simulation, CIEDE2000 checks
//!     │
//!     ▼
//! audit.rs:    whole-palette contrast / distinguishability reports
//! export.rs:   CSS, Tailwind, JSON, Figma tokens
//! share.rs:    base64 share codes
//! ```
//!
//! # Failure model
//!
//! Only parsing fails loudly ([`verge_color::ColorError`]). Simulation,
//! accessible-color suggestion and distinguishability checks always return
//! a value, falling back to their input (or "distinguishable") and logging
//! a warning through `log`.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Hue/lightness/chroma variable names are inherently similar.
#![allow(clippy::similar_names)]
// Packed 0xRRGGBB literals read better without digit separators.
#![allow(clippy::unreadable_literal)]

pub mod audit;
pub mod contrast;
pub mod export;
pub mod harmony;
pub mod palette;
pub mod preset;
pub mod share;
pub mod vision;

pub use contrast::{ContrastLevel, ContrastResult, check_contrast, contrast_ratio};
pub use export::{Export, ExportKind, ExportOptions, export_palette};
pub use harmony::{HarmonyKind, generate_harmony};
pub use palette::{ColorPalette, ModePair, ThemeMode, ThemeType, generate_color_palette};
pub use preset::{ThemePreset, preset};
pub use share::{SharePayload, decode_share, encode_share};
pub use vision::{ColorBlindnessType, simulate_color, simulate_color_blindness};
