// SPDX-License-Identifier: MIT
//
// verge-color — the color model underneath verge.
//
// One value type, `Color`, carrying its canonical hex string together with
// the rounded RGB and HSL triples derived from the same 8-bit point. Every
// higher layer (harmony generation, contrast checking, color-vision
// simulation, exporters) consumes this type and nothing else.
//
// Module map:
//
//   color  → Color, Rgb, Hsl, ColorFormat, Lab/LCh adjustments
//   parse  → hex / rgb() / hsl() / named-color parsing
//   named  → the CSS named-color table
//   space  → pure color-space math (HSL, linear sRGB, Lab, LCh)
//   delta  → CIEDE2000 perceptual difference
//   error  → ColorError, the only failure this crate produces
//
// Everything here is pure and synchronous. The only shared state is the
// lazily compiled regexes in `parse`, which are read-only once built.

pub mod color;
pub mod delta;
pub mod error;
pub mod named;
pub mod parse;
pub mod space;

pub use color::{format_color, is_valid_color, parse_color, Color, ColorFormat, Hsl, Rgb};
pub use delta::delta_e;
pub use error::ColorError;
