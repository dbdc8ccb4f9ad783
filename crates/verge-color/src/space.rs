// SPDX-License-Identifier: MIT
//
// Color-space math for verge-color.
//
// Single-character variable names (r, g, b, h, s, l, a, c, x, y, z) are the
// standard mathematical convention in color science.
#![allow(clippy::many_single_char_names)]
//
// Conversion pipeline:
//
//   8-bit sRGB ↔ float HSL
//   8-bit sRGB ↔ linear sRGB ↔ XYZ (D65) ↔ CIE Lab ↔ CIE LCh
//
// Lab uses the D65 reference white and the 6/29 knee, the same constants
// CSS tooling and design-token exporters use, so a lightness step taken here
// matches a step taken in a designer's tool. All functions are pure and work
// on f64; rounding to 8-bit happens only at the Color boundary.

// ─── Reference constants ────────────────────────────────────────────────────

/// D65 reference white, X component.
const XN: f64 = 0.950_470;
/// D65 reference white, Y component.
const YN: f64 = 1.0;
/// D65 reference white, Z component.
const ZN: f64 = 1.088_830;

/// 4/29 — offset of the linear segment of the Lab transfer function.
const T0: f64 = 0.137_931_034;
/// 6/29 — knee of the inverse Lab transfer function.
const T1: f64 = 0.206_896_552;
/// 3 × (6/29)² — slope of the linear segment.
const T2: f64 = 0.128_418_55;
/// (6/29)³ — knee of the forward Lab transfer function.
const T3: f64 = 0.008_856_452;

// ─── Hue helpers ────────────────────────────────────────────────────────────

/// Normalize a hue angle to the range [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

/// Absolute hue difference (shortest arc on the color wheel).
#[inline]
#[must_use]
pub fn hue_diff(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

// ─── Linear sRGB ↔ sRGB (Gamma) ─────────────────────────────────────────────

/// Convert a single sRGB component (0.0–1.0) to linear light.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a single linear-light component to sRGB (0.0–1.0, unclamped).
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055f64.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

// ─── sRGB ↔ HSL ─────────────────────────────────────────────────────────────

/// Convert 8-bit sRGB to float HSL.
///
/// Returns `(h, s, l)` with `h` in degrees [0, 360) and `s`, `l` in [0, 1].
/// Achromatic input has an undefined hue; it is reported as 0.
#[must_use]
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if (max - min).abs() < f64::EPSILON {
        return (0.0, 0.0, l);
    }

    let delta = max - min;
    let s = if l < 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    let h = if (r - max).abs() < f64::EPSILON {
        (g - b) / delta
    } else if (g - max).abs() < f64::EPSILON {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    (normalize_hue(h * 60.0), s, l)
}

/// Convert float HSL to sRGB channels in 0.0–255.0 (not yet rounded).
///
/// `h` is in degrees (any angle), `s` and `l` in [0, 1].
#[must_use]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    if s <= 0.0 {
        let v = l * 255.0;
        return (v, v, v);
    }

    let t2 = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let t1 = 2.0f64.mul_add(l, -t2);
    let h = normalize_hue(h) / 360.0;

    let channel = |t: f64| -> f64 {
        let t = if t < 0.0 {
            t + 1.0
        } else if t > 1.0 {
            t - 1.0
        } else {
            t
        };
        let c = if 6.0 * t < 1.0 {
            ((t2 - t1) * 6.0).mul_add(t, t1)
        } else if 2.0 * t < 1.0 {
            t2
        } else if 3.0 * t < 2.0 {
            ((t2 - t1) * (2.0 / 3.0 - t)).mul_add(6.0, t1)
        } else {
            t1
        };
        c * 255.0
    };

    (
        channel(h + 1.0 / 3.0),
        channel(h),
        channel(h - 1.0 / 3.0),
    )
}

// ─── sRGB ↔ CIE Lab ─────────────────────────────────────────────────────────

#[inline]
fn xyz_to_lab_f(t: f64) -> f64 {
    if t > T3 { t.cbrt() } else { t / T2 + T0 }
}

#[inline]
fn lab_to_xyz_f(t: f64) -> f64 {
    if t > T1 { t * t * t } else { T2 * (t - T0) }
}

/// Convert sRGB channels (0.0–255.0) to CIE Lab (D65).
///
/// Returns `(l, a, b)` with `l` in [0, 100].
#[must_use]
pub fn rgb_to_lab(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let r = srgb_to_linear(r / 255.0);
    let g = srgb_to_linear(g / 255.0);
    let b = srgb_to_linear(b / 255.0);

    let x = xyz_to_lab_f(0.180_437_5f64.mul_add(b, 0.412_456_4f64.mul_add(r, 0.357_576_1 * g)) / XN);
    let y = xyz_to_lab_f(0.072_175_0f64.mul_add(b, 0.212_672_9f64.mul_add(r, 0.715_152_2 * g)) / YN);
    let z = xyz_to_lab_f(0.950_304_1f64.mul_add(b, 0.019_333_9f64.mul_add(r, 0.119_192_0 * g)) / ZN);

    let l = 116.0f64.mul_add(y, -16.0);
    (l.max(0.0), 500.0 * (x - y), 200.0 * (y - z))
}

/// Convert CIE Lab (D65) to sRGB channels in 0.0–255.0.
///
/// The result may fall outside the sRGB gamut; callers clamp.
#[must_use]
pub fn lab_to_rgb(l: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let y = (l + 16.0) / 116.0;
    let x = y + a / 500.0;
    let z = y - b / 200.0;

    let x = XN * lab_to_xyz_f(x);
    let y = YN * lab_to_xyz_f(y);
    let z = ZN * lab_to_xyz_f(z);

    let r = 0.498_531_4f64.mul_add(-z, 3.240_454_2f64.mul_add(x, -(1.537_138_5 * y)));
    let g = 0.041_556_0f64.mul_add(z, (-0.969_266_0f64).mul_add(x, 1.876_010_8 * y));
    let bl = 1.057_225_2f64.mul_add(z, 0.055_643_4f64.mul_add(x, -(0.204_025_9 * y)));

    (
        linear_to_srgb(r) * 255.0,
        linear_to_srgb(g) * 255.0,
        linear_to_srgb(bl) * 255.0,
    )
}

// ─── Lab ↔ LCh ──────────────────────────────────────────────────────────────

/// Convert Lab a, b components to LCh chroma and hue (degrees).
///
/// Near-zero chroma has no meaningful hue; it is reported as 0.
#[must_use]
pub fn lab_to_lch(l: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let c = a.hypot(b);
    let h = if (c * 10_000.0).round() == 0.0 {
        0.0
    } else {
        normalize_hue(b.atan2(a).to_degrees())
    };
    (l, c, h)
}

/// Convert LCh back to Lab.
#[must_use]
pub fn lch_to_lab(l: f64, c: f64, h: f64) -> (f64, f64, f64) {
    let h_rad = h.to_radians();
    (l, c * h_rad.cos(), c * h_rad.sin())
}

// ─── Quantization ───────────────────────────────────────────────────────────

/// Clamp a 0.0–255.0 channel into gamut and round to the nearest integer.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn to_u8(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
