// SPDX-License-Identifier: MIT
//
// Perceptual color difference — CIEDE2000.
//
// Single-letter names follow the formula as published (Sharma, Wu, Dalal
// 2005), which makes the code easy to check against the paper's test data.
#![allow(clippy::many_single_char_names)]

use crate::color::Color;

/// 25⁷, the chroma normalizer in the G and R_C terms.
const POW25_7: f64 = 6_103_515_625.0;

/// CIEDE2000 difference between two colors (kL = kC = kH = 1).
///
/// Values below ~1 are imperceptible, around 2 barely noticeable, and above
/// 10 the colors read as clearly different. The result is clamped to
/// [0, 100].
#[must_use]
pub fn delta_e(a: &Color, b: &Color) -> f64 {
    ciede2000(a.to_lab(), b.to_lab())
}

/// CIEDE2000 difference between two CIE Lab triples.
#[must_use]
pub fn ciede2000(lab1: (f64, f64, f64), lab2: (f64, f64, f64)) -> f64 {
    let (l1, a1, b1) = lab1;
    let (l2, a2, b2) = lab2;

    let avg_l = (l1 + l2) / 2.0;
    let c1 = a1.hypot(b1);
    let c2 = a2.hypot(b2);
    let avg_c = (c1 + c2) / 2.0;

    let avg_c7 = avg_c.powi(7);
    let g = 0.5 * (1.0 - (avg_c7 / (avg_c7 + POW25_7)).sqrt());
    let a1p = a1 * (1.0 + g);
    let a2p = a2 * (1.0 + g);

    let c1p = a1p.hypot(b1);
    let c2p = a2p.hypot(b2);
    let avg_cp = (c1p + c2p) / 2.0;

    let h1p = hue_degrees(b1, a1p);
    let h2p = hue_degrees(b2, a2p);

    let avg_hp = if (h1p - h2p).abs() > 180.0 {
        (h1p + h2p + 360.0) / 2.0
    } else {
        (h1p + h2p) / 2.0
    };

    let t = 0.20f64.mul_add(
        -(4.0f64.mul_add(avg_hp, -63.0)).to_radians().cos(),
        0.32f64.mul_add(
            (3.0f64.mul_add(avg_hp, 6.0)).to_radians().cos(),
            0.24f64.mul_add(
                (2.0 * avg_hp).to_radians().cos(),
                0.17f64.mul_add(-(avg_hp - 30.0).to_radians().cos(), 1.0),
            ),
        ),
    );

    let mut dhp = h2p - h1p;
    if dhp.abs() > 180.0 {
        dhp = if h2p <= h1p { dhp + 360.0 } else { dhp - 360.0 };
    }
    let dhp = 2.0 * (c1p * c2p).sqrt() * (dhp.to_radians() / 2.0).sin();

    let dl = l2 - l1;
    let dcp = c2p - c1p;

    let l50 = (avg_l - 50.0).powi(2);
    let sl = 1.0 + (0.015 * l50) / (20.0 + l50).sqrt();
    let sc = 0.045f64.mul_add(avg_cp, 1.0);
    let sh = (0.015 * avg_cp).mul_add(t, 1.0);

    let delta_theta = 30.0 * (-((avg_hp - 275.0) / 25.0).powi(2)).exp();
    let avg_cp7 = avg_cp.powi(7);
    let rc = 2.0 * (avg_cp7 / (avg_cp7 + POW25_7)).sqrt();
    let rt = -rc * (2.0 * delta_theta.to_radians()).sin();

    let tl = dl / sl;
    let tc = dcp / sc;
    let th = dhp / sh;

    let result = (rt * tc).mul_add(th, th.mul_add(th, tl.mul_add(tl, tc * tc))).sqrt();
    if result.is_nan() { 0.0 } else { result.clamp(0.0, 100.0) }
}

/// Hue angle in degrees [0, 360) of an (a', b) pair.
#[inline]
fn hue_degrees(b: f64, ap: f64) -> f64 {
    if b == 0.0 && ap == 0.0 {
        return 0.0;
    }
    let h = b.atan2(ap).to_degrees();
    if h >= 0.0 { h } else { h + 360.0 }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    // Pairs from Sharma, Wu & Dalal's CIEDE2000 test data set.
    #[test]
    fn reference_pairs() {
        let cases = [
            ((50.0, 2.6772, -79.7751), (50.0, 0.0, -82.7485), 2.0425),
            ((50.0, 3.1571, -77.2803), (50.0, 0.0, -82.7485), 2.8615),
            ((50.0, 2.8361, -74.0200), (50.0, 0.0, -82.7485), 3.4412),
            ((50.0, -1.3802, -84.2814), (50.0, 0.0, -82.7485), 1.0000),
            ((50.0, 0.0, 0.0), (50.0, -1.0, 2.0), 2.3669),
            ((50.0, 2.5, 0.0), (73.0, 25.0, -18.0), 27.1492),
            ((60.2574, -34.0099, 36.2677), (60.4626, -34.1751, 39.4387), 1.2644),
            ((22.7233, 20.0904, -46.6940), (23.0331, 14.9730, -42.5619), 2.0373),
        ];
        for (lab1, lab2, expected) in cases {
            let got = ciede2000(lab1, lab2);
            assert!(approx_eq(got, expected, 1e-3), "{lab1:?} vs {lab2:?}: {got} != {expected}");
        }
    }

    #[test]
    fn identical_colors_have_zero_distance() {
        let c = Color::from_rgb8(12, 140, 200);
        assert!(approx_eq(delta_e(&c, &c), 0.0, 1e-9));
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Color::from_rgb8(200, 30, 30);
        let b = Color::from_rgb8(30, 160, 60);
        assert!(approx_eq(delta_e(&a, &b), delta_e(&b, &a), 1e-9));
    }

    #[test]
    fn black_and_white_are_maximally_apart() {
        let d = delta_e(&Color::black(), &Color::white());
        assert!(d > 99.0, "black/white delta: {d}");
    }

    #[test]
    fn near_grays_are_close() {
        let d = delta_e(&Color::from_rgb8(0x77, 0x77, 0x77), &Color::from_rgb8(0x80, 0x80, 0x80));
        assert!(d < 5.0, "near grays delta: {d}");
    }
}
