//! Conversion between RGBA and the HSLA and CMYK color models.
//!
//! The functions in this module operate on normalized RGBA coordinates, i.e.,
//! channel values divided by the maximum channel value, and on HSLA/CMYK
//! coordinates with hue in degrees and everything else in percent. Keeping
//! them independent of bit depth lets [`Rgba`](crate::Rgba) handle packing
//! and rounding in one place.

use crate::Float;

/// Convert normalized RGBA coordinates to HSLA.
///
/// Hue is in degrees `0..360`, whereas saturation, lightness, and alpha are
/// percentages `0..=100`. Achromatic colors have zero hue and saturation.
pub(crate) fn rgba_to_hsla(rgba: &[Float; 4]) -> [Float; 4] {
    let [r, g, b, a] = *rgba;

    let cmax = r.max(g).max(b);
    let cmin = r.min(g).min(b);
    let delta = cmax - cmin;

    let lightness = (cmax + cmin) / 2.0;

    let (hue, saturation) = if delta == 0.0 {
        (0.0, 0.0)
    } else {
        let saturation = delta / (1.0 - lightness.mul_add(2.0, -1.0).abs());
        let hue = if cmax == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if cmax == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        (hue, saturation)
    };

    [hue, saturation * 100.0, lightness * 100.0, a * 100.0]
}

/// Convert HSLA coordinates to normalized RGBA.
///
/// This function expects the same units as [`rgba_to_hsla`] produces. It
/// computes each RGB coordinate by offsetting the hue by a third of a turn and
/// looking up the result in the piecewise linear hue function, which has one
/// piece per hue sextant.
pub(crate) fn hsla_to_rgba(hsla: &[Float; 4]) -> [Float; 4] {
    let h = hsla[0] / 360.0;
    let s = hsla[1] / 100.0;
    let l = hsla[2] / 100.0;
    let a = hsla[3] / 100.0;

    if s == 0.0 {
        return [l, l, l, a];
    }

    #[inline]
    fn hue_to_rgb(p: Float, q: Float, mut t: Float) -> Float {
        if t < 0.0 {
            t += 1.0;
        }
        if 1.0 < t {
            t -= 1.0;
        }

        if t < 1.0 / 6.0 {
            (q - p).mul_add(6.0 * t, p)
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            (q - p).mul_add((2.0 / 3.0 - t) * 6.0, p)
        } else {
            p
        }
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l.mul_add(-s, l + s)
    };
    let p = l.mul_add(2.0, -q);

    [
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
        a,
    ]
}

/// Convert normalized RGB coordinates to CMYK percentages.
///
/// Pure black has no cyan, magenta, or yellow at all, which also avoids
/// dividing by zero.
pub(crate) fn rgb_to_cmyk(rgb: &[Float; 3]) -> [Float; 4] {
    let [r, g, b] = *rgb;
    let k = 1.0 - r.max(g).max(b);

    if 1.0 <= k {
        return [0.0, 0.0, 0.0, 100.0];
    }

    let convert = |value: Float| (1.0 - value - k) / (1.0 - k) * 100.0;
    [convert(r), convert(g), convert(b), k * 100.0]
}

#[cfg(test)]
mod test {
    use super::{hsla_to_rgba, rgb_to_cmyk, rgba_to_hsla};
    use crate::assert_close_enough;
    use crate::Float;

    #[test]
    fn test_primaries() {
        let red = rgba_to_hsla(&[1.0, 0.0, 0.0, 1.0]);
        assert_eq!(red, [0.0, 100.0, 50.0, 100.0]);

        let green = rgba_to_hsla(&[0.0, 1.0, 0.0, 1.0]);
        assert_eq!(green, [120.0, 100.0, 50.0, 100.0]);

        let blue = rgba_to_hsla(&[0.0, 0.0, 1.0, 0.5]);
        assert_eq!(blue, [240.0, 100.0, 50.0, 50.0]);

        let magenta = rgba_to_hsla(&[1.0, 0.0, 1.0, 1.0]);
        assert_eq!(magenta[0], 300.0);

        let gray = rgba_to_hsla(&[0.5, 0.5, 0.5, 1.0]);
        assert_eq!(gray, [0.0, 0.0, 50.0, 100.0]);
    }

    #[test]
    fn test_round_trip() {
        let samples: [[Float; 4]; 4] = [
            [0.2, 0.4, 0.6, 1.0],
            [0.9, 0.1, 0.3, 0.25],
            [0.5, 0.75, 0.25, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ];

        for sample in samples {
            let [r, g, b, a] = hsla_to_rgba(&rgba_to_hsla(&sample));
            assert_close_enough!(r, sample[0]);
            assert_close_enough!(g, sample[1]);
            assert_close_enough!(b, sample[2]);
            assert_close_enough!(a, sample[3]);
        }
    }

    #[test]
    fn test_cmyk() {
        assert_eq!(rgb_to_cmyk(&[0.0, 0.0, 0.0]), [0.0, 0.0, 0.0, 100.0]);
        assert_eq!(rgb_to_cmyk(&[1.0, 1.0, 1.0]), [0.0, 0.0, 0.0, 0.0]);
        assert_eq!(rgb_to_cmyk(&[1.0, 0.0, 0.0]), [0.0, 100.0, 100.0, 0.0]);

        let [c, m, y, k] = rgb_to_cmyk(&[0.0, 0.5, 0.25]);
        assert_close_enough!(c, 100.0);
        assert_close_enough!(m, 0.0);
        assert_close_enough!(y, 50.0);
        assert_close_enough!(k, 50.0);
    }
}
