//! Separable blend modes.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use tracing::trace;

use crate::error::{ArgumentError, IncompatibleColorsError};
use crate::{Float, Rgba};

/// The complementary term `x * (1 - a)`.
#[inline]
fn comp(x: Float, alpha: Float) -> Float {
    x * (1.0 - alpha)
}

#[inline]
fn screen(b: Float, f: Float) -> Float {
    b.mul_add(-f, b + f)
}

fn hard_light(b: Float, f: Float) -> Float {
    if f <= 0.5 {
        2.0 * b * f
    } else {
        screen(b, f.mul_add(2.0, -1.0))
    }
}

fn color_dodge(b: Float, f: Float) -> Float {
    if b == 0.0 {
        0.0
    } else if 1.0 <= f {
        1.0
    } else {
        (b / (1.0 - f)).min(1.0)
    }
}

fn color_burn(b: Float, f: Float) -> Float {
    if 1.0 <= b {
        1.0
    } else if f <= 0.0 {
        0.0
    } else {
        1.0 - ((1.0 - b) / f).min(1.0)
    }
}

fn soft_light(b: Float, f: Float) -> Float {
    if f <= 0.5 {
        // b - (1 - 2f) * b * (1 - b)
        (f.mul_add(-2.0, 1.0) * b).mul_add(b - 1.0, b)
    } else {
        let d = if b <= 0.25 {
            b.mul_add(16.0, -12.0).mul_add(b, 4.0) * b
        } else {
            b.sqrt()
        };
        f.mul_add(2.0, -1.0).mul_add(d - b, b)
    }
}

// ====================================================================================================================

/// A blend mode.
///
/// Blend modes combine a background with a foreground color, one channel at a
/// time. They are defined on channel values normalized to `0..=1`, including
/// alpha.
///
///   * [`BlendMode::Normal`] paints the foreground over the background:
///     `F * fgA + B * (1 - fgA)`.
///   * [`BlendMode::Screen`] inverts, multiplies alpha-weighted values, and
///     inverts again: `1 - (1 - B * bgA) * (1 - F * fgA)`.
///   * [`BlendMode::Darken`] and [`BlendMode::Lighten`] pick the minimum and
///     maximum of the alpha-weighted values `B * bgA` and `F * fgA`, and add
///     the complementary terms `F * (1 - bgA) + B * (1 - fgA)`.
///   * All other modes compute their mixing function on the plain channel
///     values and add the same complementary terms. The mixing functions
///     follow the W3C's Compositing and Blending specification, with
///     [`BlendMode::Multiply`] computing `B * F`.
///
/// The results are clamped to `0..=1`. The alpha of the blended color is the
/// larger of the two alphas.
///
/// The order of variants, which is also the order of [`BlendMode::all`],
/// groups darkening modes before lightening modes before contrast and
/// inversion modes.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, ord, module = "pinkie")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BlendMode {
    #[default]
    Normal,
    Darken,
    Multiply,
    ColorBurn,
    Lighten,
    Screen,
    ColorDodge,
    Overlay,
    SoftLight,
    HardLight,
    Difference,
    Exclusion,
}

const ALL_MODES: [BlendMode; 12] = [
    BlendMode::Normal,
    BlendMode::Darken,
    BlendMode::Multiply,
    BlendMode::ColorBurn,
    BlendMode::Lighten,
    BlendMode::Screen,
    BlendMode::ColorDodge,
    BlendMode::Overlay,
    BlendMode::SoftLight,
    BlendMode::HardLight,
    BlendMode::Difference,
    BlendMode::Exclusion,
];

#[cfg(not(feature = "pyffi"))]
impl BlendMode {
    /// Get an iterator over all blend modes in order.
    pub fn all() -> BlendModeIterator {
        BlendModeIterator::new()
    }
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl BlendMode {
    /// Get an iterator over all blend modes in order.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn all() -> BlendModeIterator {
        BlendModeIterator::new()
    }

    /// Parse a blend mode from its name. <i class=python-only>Python
    /// only!</i>
    ///
    /// This method implements the same functionality as `BlendMode`'s
    /// [`BlendMode as FromStr`](enum.BlendMode.html#impl-FromStr-for-BlendMode)
    /// and is available in Python only.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn parse(s: &str) -> Result<Self, ArgumentError> {
        use std::str::FromStr;

        Self::from_str(s)
    }

    /// Get this blend mode's name.
    ///
    /// Names are lowercase and hyphenated, e.g., `color-dodge`.
    pub const fn name(&self) -> &'static str {
        use BlendMode::*;

        match *self {
            Normal => "normal",
            Darken => "darken",
            Multiply => "multiply",
            ColorBurn => "color-burn",
            Lighten => "lighten",
            Screen => "screen",
            ColorDodge => "color-dodge",
            Overlay => "overlay",
            SoftLight => "soft-light",
            HardLight => "hard-light",
            Difference => "difference",
            Exclusion => "exclusion",
        }
    }

    /// Blend a single channel.
    ///
    /// All four arguments must be normalized to `0..=1`. The result is
    /// clamped to the same range.
    pub fn blend_channel(
        &self,
        background: Float,
        foreground: Float,
        background_alpha: Float,
        foreground_alpha: Float,
    ) -> Float {
        use BlendMode::*;

        let (b, f) = (background, foreground);
        let (ba, fa) = (background_alpha, foreground_alpha);

        let result = match *self {
            Normal => f.mul_add(fa, comp(b, fa)),
            Screen => 1.0 - (1.0 - b * ba) * (1.0 - f * fa),
            Darken => (b * ba).min(f * fa) + comp(f, ba) + comp(b, fa),
            Lighten => (b * ba).max(f * fa) + comp(f, ba) + comp(b, fa),
            _ => self.mix(b, f) + comp(f, ba) + comp(b, fa),
        };

        result.clamp(0.0, 1.0)
    }

    /// Compose the background and foreground colors.
    ///
    /// This method blends red, green, and blue with [`BlendMode::blend_channel`]
    /// and rounds the results back to integers. The alpha channel of the
    /// result is the larger of the two alpha channels. Both colors must have
    /// the same number of bits per channel.
    ///
    /// ```
    /// # use pinkie::{BlendMode, Rgba};
    /// # use pinkie::error::IncompatibleColorsError;
    /// let background = Rgba::from_hex("55f6a3", 8)?;
    /// let foreground = Rgba::from_hex("ffb157", 8)?;
    /// let product = BlendMode::Multiply.compose(&background, &foreground)?;
    /// assert_eq!(product.to_hex_alpha(), "55AB38FF");
    ///
    /// let deep = foreground.convert_depth(16)?;
    /// assert_eq!(
    ///     BlendMode::Multiply.compose(&background, &deep),
    ///     Err(IncompatibleColorsError::new(8, 16))
    /// );
    /// # Ok::<(), pinkie::error::ColorError>(())
    /// ```
    pub fn compose(
        &self,
        background: &Rgba,
        foreground: &Rgba,
    ) -> Result<Rgba, IncompatibleColorsError> {
        background.check_compatible(foreground)?;

        let [br, bg, bb, ba] = background.to_normalized();
        let [fr, fg, fb, fa] = foreground.to_normalized();
        let max = background.max_channel_value() as Float;
        let scale = |value: Float| (value * max).round() as u32;

        let result = Rgba::from_parts(
            [
                scale(self.blend_channel(br, fr, ba, fa)),
                scale(self.blend_channel(bg, fg, ba, fa)),
                scale(self.blend_channel(bb, fb, ba, fa)),
                background.alpha().max(foreground.alpha()),
            ],
            background.bits(),
        );

        trace!(mode = self.name(), %background, %foreground, %result, "blended colors");
        Ok(result)
    }

    /// Convert this blend mode to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("BlendMode.{:?}", self)
    }

    /// Convert this blend mode to its name. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        self.name().to_owned()
    }
}

impl BlendMode {
    /// The mixing function for modes that add complementary terms.
    fn mix(&self, b: Float, f: Float) -> Float {
        use BlendMode::*;

        match *self {
            Multiply => b * f,
            ColorBurn => color_burn(b, f),
            ColorDodge => color_dodge(b, f),
            Overlay => hard_light(f, b),
            SoftLight => soft_light(b, f),
            HardLight => hard_light(b, f),
            Difference => (b - f).abs(),
            Exclusion => (-2.0 * b).mul_add(f, b + f),
            Normal | Darken | Lighten | Screen => f,
        }
    }
}

impl std::str::FromStr for BlendMode {
    type Err = ArgumentError;

    /// Parse a blend mode from its name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_MODES
            .iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or(ArgumentError::UnknownBlendMode)
    }
}

impl std::fmt::Display for BlendMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ====================================================================================================================

/// An iterator over all blend modes.
///
/// This iterator is fused, i.e., after returning `None` once, it will keep
/// returning `None`. This iterator also is exact, i.e., its `size_hint()`
/// returns the exact number of remaining items.
#[cfg_attr(feature = "pyffi", pyclass(module = "pinkie"))]
#[derive(Debug)]
pub struct BlendModeIterator {
    index: usize,
}

impl BlendModeIterator {
    fn new() -> Self {
        Self { index: 0 }
    }
}

impl Iterator for BlendModeIterator {
    type Item = BlendMode;

    fn next(&mut self) -> Option<Self::Item> {
        let mode = ALL_MODES.get(self.index).copied();
        if mode.is_some() {
            self.index += 1;
        }
        mode
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = ALL_MODES.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl std::iter::ExactSizeIterator for BlendModeIterator {
    fn len(&self) -> usize {
        ALL_MODES.len() - self.index
    }
}

impl std::iter::FusedIterator for BlendModeIterator {}

#[cfg(feature = "pyffi")]
#[pymethods]
impl BlendModeIterator {
    /// Get the number of remaining blend modes. <i class=python-only>Python
    /// only!</i>
    pub fn __len__(&self) -> usize {
        self.len()
    }

    /// Return this iterator. <i class=python-only>Python only!</i>
    pub fn __iter__(slf: PyRef<'_, Self>) -> PyRef<'_, Self> {
        slf
    }

    /// Return the next blend mode. <i class=python-only>Python only!</i>
    pub fn __next__(mut slf: PyRefMut<'_, Self>) -> Option<BlendMode> {
        slf.next()
    }

    /// Get a debug representation for this iterator. <i
    /// class=python-only>Python only!</i>
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

#[cfg(test)]
mod test {
    use super::BlendMode;
    use crate::error::{ArgumentError, ColorError, IncompatibleColorsError};
    use crate::{assert_close_enough, Rgba};

    #[test]
    fn test_names() -> Result<(), ArgumentError> {
        assert_eq!(BlendMode::all().len(), 12);
        for mode in BlendMode::all() {
            assert_eq!(mode.name().parse::<BlendMode>()?, mode);
            assert_eq!(mode.to_string(), mode.name());
        }

        assert_eq!("Color-Dodge".parse::<BlendMode>()?, BlendMode::ColorDodge);
        assert_eq!(
            "colour-dodge".parse::<BlendMode>(),
            Err(ArgumentError::UnknownBlendMode)
        );

        let mut modes = BlendMode::all();
        assert_eq!(modes.nth(3), Some(BlendMode::ColorBurn));
        assert_eq!(modes.len(), 8);
        assert_eq!(modes.last(), Some(BlendMode::Exclusion));
        Ok(())
    }

    #[test]
    fn test_channel() {
        assert_close_enough!(BlendMode::Normal.blend_channel(0.2, 0.6, 1.0, 0.5), 0.4);
        assert_close_enough!(BlendMode::Screen.blend_channel(0.5, 0.5, 1.0, 1.0), 0.75);
        assert_close_enough!(BlendMode::Multiply.blend_channel(0.5, 0.5, 1.0, 1.0), 0.25);
        assert_close_enough!(BlendMode::Darken.blend_channel(0.3, 0.6, 1.0, 1.0), 0.3);
        assert_close_enough!(BlendMode::Lighten.blend_channel(0.3, 0.6, 1.0, 1.0), 0.6);
        assert_close_enough!(BlendMode::Difference.blend_channel(0.3, 0.8, 1.0, 1.0), 0.5);
        assert_close_enough!(BlendMode::Exclusion.blend_channel(0.5, 0.5, 1.0, 1.0), 0.5);
        assert_close_enough!(BlendMode::ColorDodge.blend_channel(0.25, 0.5, 1.0, 1.0), 0.5);
        assert_close_enough!(BlendMode::ColorBurn.blend_channel(0.75, 0.5, 1.0, 1.0), 0.5);
        assert_close_enough!(BlendMode::Overlay.blend_channel(0.25, 0.5, 1.0, 1.0), 0.25);
        assert_close_enough!(BlendMode::HardLight.blend_channel(0.5, 0.25, 1.0, 1.0), 0.25);
        assert_close_enough!(BlendMode::SoftLight.blend_channel(0.25, 0.5, 1.0, 1.0), 0.25);

        // Complementary terms push the result out of range.
        assert_close_enough!(BlendMode::Multiply.blend_channel(1.0, 1.0, 0.0, 0.0), 1.0);
    }

    #[test]
    fn test_opaque() -> Result<(), ColorError> {
        let background = Rgba::from_hex("55f6a3", 8)?;
        let foreground = Rgba::from_hex("ffb157", 8)?;

        let expected = [
            "FFB157FF", "55B157FF", "55AB38FF", "55F200FF", "FFF6A3FF", "FFFCC2FF",
            "FFFFF7FF", "AAF986FF", "93F890FF", "FFF96FFF", "AA454CFF", "AA518BFF",
        ];

        for (mode, hex) in BlendMode::all().zip(expected) {
            let color = background.blend(&foreground, mode)?;
            assert_eq!(color.to_hex_alpha(), hex, "{}", mode);
        }
        Ok(())
    }

    #[test]
    fn test_translucent() -> Result<(), ColorError> {
        let background = Rgba::from_hex("55f6a380", 8)?;
        let foreground = Rgba::from_hex("ffb15780", 8)?;

        let normal = background.blend(&foreground, BlendMode::Normal)?;
        assert_eq!(normal.to_hex_alpha(), "AAD37D80");
        let screen = background.blend(&foreground, BlendMode::Screen)?;
        assert_eq!(screen.to_hex_alpha(), "95A96F80");
        let multiply = background.blend(&foreground, BlendMode::Multiply)?;
        assert_eq!(multiply.to_hex_alpha(), "FEFFB480");

        let opaque = foreground.with_alpha(255);
        for background in [background, Rgba::rgba8(0, 0, 0, 0), Rgba::rgb8(9, 99, 199)] {
            let color = background.blend(&opaque, BlendMode::Normal)?;
            assert_eq!(color.rgb(), opaque.rgb());
            assert_eq!(color.alpha(), 255);
        }
        Ok(())
    }

    #[test]
    fn test_incompatible() -> Result<(), ColorError> {
        let narrow = Rgba::from_hex("f00", 4)?;
        let wide = Rgba::from_hex("0000ffff0000", 16)?;
        assert_eq!(
            BlendMode::Screen.compose(&narrow, &wide),
            Err(IncompatibleColorsError::new(4, 16))
        );
        Ok(())
    }
}
