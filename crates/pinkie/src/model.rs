//! The HSLA and CMYK color models.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{check_bits, hsla_to_rgba, max_value};
use crate::error::ColorFormatError;
use crate::{Float, Rgba};

/// Wrap a hue into `0..360`, mapping not-a-number and infinities to zero.
fn normalize_hue(value: Float) -> Float {
    if !value.is_finite() {
        return 0.0;
    }

    let hue = value.rem_euclid(360.0);
    // rem_euclid() may round tiny negative values up to 360.
    if 360.0 <= hue {
        0.0
    } else {
        hue
    }
}

/// Clamp a percentage into `0..=100`, mapping not-a-number to zero.
fn normalize_percent(value: Float) -> Float {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Round a normalized quantity, degrees or percent, to the nearest integer.
#[inline]
fn round_quantity(value: Float) -> u32 {
    value.round() as u32
}

// ====================================================================================================================

/// A color in the HSL color model with alpha.
///
/// Hue is in degrees and always wrapped into `0..360`. Saturation, lightness,
/// and alpha are percentages clamped to `0..=100`. All four are stored at full
/// precision, so that converting from [`Rgba`] and back does not accumulate
/// rounding errors. Consequently, the accessors return fractional values, and
/// the integer view is only available through [`Hsla::rounded`]. Equality
/// testing, hashing, and display all use those rounded integers:
///
/// ```
/// # use pinkie::Hsla;
/// let orange = Hsla::new(30.2, 100.0, 50.0, 100.0);
/// assert_eq!(orange, Hsla::new(29.8, 100.0, 50.0, 100.0));
/// assert_eq!(orange.rounded(), [30, 100, 50, 100]);
/// assert_eq!(format!("{}", orange), "hsla(30, 100, 50, 100)");
///
/// let wrapped = Hsla::new(-90.0, 120.0, -3.0, 100.0);
/// assert_eq!(wrapped.rounded(), [270, 100, 0, 100]);
/// ```
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, hash, module = "pinkie"))]
#[derive(Clone, Copy, Debug)]
pub struct Hsla {
    hue: Float,
    saturation: Float,
    lightness: Float,
    alpha: Float,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Hsla {
    /// Create a new HSLA color.
    ///
    /// This constructor normalizes the hue and clamps the other three
    /// quantities.
    #[cfg(feature = "pyffi")]
    #[new]
    #[pyo3(signature = (hue, saturation, lightness, alpha=100.0))]
    pub fn new(hue: Float, saturation: Float, lightness: Float, alpha: Float) -> Self {
        Self {
            hue: normalize_hue(hue),
            saturation: normalize_percent(saturation),
            lightness: normalize_percent(lightness),
            alpha: normalize_percent(alpha),
        }
    }

    /// Create a new HSLA color.
    ///
    /// This constructor normalizes the hue and clamps the other three
    /// quantities.
    #[cfg(not(feature = "pyffi"))]
    pub fn new(hue: Float, saturation: Float, lightness: Float, alpha: Float) -> Self {
        Self {
            hue: normalize_hue(hue),
            saturation: normalize_percent(saturation),
            lightness: normalize_percent(lightness),
            alpha: normalize_percent(alpha),
        }
    }

    /// Create a new random, fully opaque HSLA color. <i
    /// class=python-only>Python only!</i>
    #[cfg(all(feature = "pyffi", feature = "rand"))]
    #[staticmethod]
    #[pyo3(name = "random")]
    pub fn py_random() -> Self {
        Self::random()
    }

    /// Get the hue in degrees.
    #[inline]
    pub const fn hue(&self) -> Float {
        self.hue
    }

    /// Get the saturation in percent.
    #[inline]
    pub const fn saturation(&self) -> Float {
        self.saturation
    }

    /// Get the lightness in percent.
    #[inline]
    pub const fn lightness(&self) -> Float {
        self.lightness
    }

    /// Get the alpha in percent.
    #[inline]
    pub const fn alpha(&self) -> Float {
        self.alpha
    }

    /// Get hue, saturation, lightness, and alpha rounded to integers.
    ///
    /// A hue that rounds up to 360 becomes 0.
    pub fn rounded(&self) -> [u32; 4] {
        [
            round_quantity(self.hue) % 360,
            round_quantity(self.saturation),
            round_quantity(self.lightness),
            round_quantity(self.alpha),
        ]
    }

    /// Create a copy with the given hue.
    pub fn with_hue(&self, hue: Float) -> Self {
        Self {
            hue: normalize_hue(hue),
            ..*self
        }
    }

    /// Create a copy with the given saturation.
    pub fn with_saturation(&self, saturation: Float) -> Self {
        Self {
            saturation: normalize_percent(saturation),
            ..*self
        }
    }

    /// Create a copy with the given lightness.
    pub fn with_lightness(&self, lightness: Float) -> Self {
        Self {
            lightness: normalize_percent(lightness),
            ..*self
        }
    }

    /// Create a copy with the given alpha.
    pub fn with_alpha(&self, alpha: Float) -> Self {
        Self {
            alpha: normalize_percent(alpha),
            ..*self
        }
    }

    /// Rotate the hue by the given number of degrees.
    ///
    /// Positive degrees rotate counter-clockwise around the color wheel,
    /// negative degrees clockwise. The result always wraps into `0..360`.
    pub fn rotate(&self, degrees: Float) -> Self {
        self.with_hue(self.hue + degrees)
    }

    /// Get the complementary color, i.e., the color with the opposite hue.
    ///
    /// ```
    /// # use pinkie::Hsla;
    /// let red = Hsla::new(0.0, 100.0, 50.0, 100.0);
    /// assert_eq!(red.complementary().rounded(), [180, 100, 50, 100]);
    /// ```
    pub fn complementary(&self) -> Self {
        self.rotate(180.0)
    }

    /// Spread `num` colors across `angle` degrees, starting from the
    /// complementary hue.
    ///
    /// This method divides the angle into `num + 1` equal parts. Color `i`
    /// sits at the complementary hue plus `angle / (num + 1) * (i + 1)`, so
    /// neither the complementary color nor the far end of the angle is
    /// included.
    ///
    /// ```
    /// # use pinkie::Hsla;
    /// let red = Hsla::new(0.0, 100.0, 50.0, 100.0);
    /// let hues: Vec<_> = red.hue_range(2, 360.0).iter().map(|c| c.rounded()[0]).collect();
    /// assert_eq!(hues, vec![300, 60]);
    /// ```
    pub fn hue_range(&self, num: usize, angle: Float) -> Vec<Self> {
        let anchor = self.complementary();
        let step = angle / (num + 1) as Float;
        (1..=num)
            .map(|index| anchor.rotate(step * index as Float))
            .collect()
    }

    /// Convert this color to RGBA with the given number of bits per channel.
    pub fn to_rgba(&self, bits: u32) -> Result<Rgba, ColorFormatError> {
        let bits = check_bits(bits)?;
        Ok(Rgba::from_parts(self.to_channels(bits), bits))
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Convert this color to its string representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl Hsla {
    /// Create a new random, fully opaque HSLA color. <i class=rust-only>Rust
    /// only!</i>
    #[cfg(feature = "rand")]
    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    /// Create a new random, fully opaque HSLA color with the given random
    /// number generator. <i class=rust-only>Rust only!</i>
    #[cfg(feature = "rand")]
    pub fn random_with<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(
            rng.random_range(0.0..360.0),
            rng.random_range(0.0..=100.0),
            rng.random_range(0.0..=100.0),
            100.0,
        )
    }

    /// Update the hue. <i class=rust-only>Rust only!</i>
    pub fn set_hue(&mut self, hue: Float) {
        self.hue = normalize_hue(hue);
    }

    /// Update the saturation. <i class=rust-only>Rust only!</i>
    pub fn set_saturation(&mut self, saturation: Float) {
        self.saturation = normalize_percent(saturation);
    }

    /// Update the lightness. <i class=rust-only>Rust only!</i>
    pub fn set_lightness(&mut self, lightness: Float) {
        self.lightness = normalize_percent(lightness);
    }

    /// Update the alpha. <i class=rust-only>Rust only!</i>
    pub fn set_alpha(&mut self, alpha: Float) {
        self.alpha = normalize_percent(alpha);
    }

    /// Convert to channels for an already validated bit depth.
    pub(crate) fn to_channels(&self, bits: u32) -> [u32; 4] {
        let max = max_value(bits) as Float;
        let [r, g, b, a] =
            hsla_to_rgba(&[self.hue, self.saturation, self.lightness, self.alpha]);
        let scale = |value: Float| (value.clamp(0.0, 1.0) * max).round() as u32;
        [scale(r), scale(g), scale(b), scale(a)]
    }
}

impl From<Rgba> for Hsla {
    fn from(value: Rgba) -> Self {
        value.to_hsla()
    }
}

impl PartialEq for Hsla {
    fn eq(&self, other: &Self) -> bool {
        self.rounded() == other.rounded()
    }
}

impl Eq for Hsla {}

impl std::hash::Hash for Hsla {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.rounded().hash(state);
    }
}

impl std::fmt::Display for Hsla {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [h, s, l, a] = self.rounded();
        write!(f, "hsla({}, {}, {}, {})", h, s, l, a)
    }
}

// ====================================================================================================================

/// A color in the CMYK color model.
///
/// All four quantities are percentages. Since conversion only goes from
/// [`Rgba`] to CMYK, this type is mostly useful for display:
///
/// ```
/// # use pinkie::Rgba;
/// let green = Rgba::rgb8(0x44, 0xc7, 0x1a);
/// let cmyk = green.to_cmyk();
/// assert_eq!(cmyk.rounded(), [66, 0, 87, 22]);
/// assert_eq!(format!("{}", cmyk), "cmyk(66, 0, 87, 22)");
/// ```
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, hash, module = "pinkie"))]
#[derive(Clone, Copy, Debug)]
pub struct Cmyk {
    cyan: Float,
    magenta: Float,
    yellow: Float,
    key: Float,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Cmyk {
    /// Create a new CMYK color, clamping each quantity to `0..=100`.
    #[cfg(feature = "pyffi")]
    #[new]
    pub fn new(cyan: Float, magenta: Float, yellow: Float, key: Float) -> Self {
        Self {
            cyan: normalize_percent(cyan),
            magenta: normalize_percent(magenta),
            yellow: normalize_percent(yellow),
            key: normalize_percent(key),
        }
    }

    /// Create a new CMYK color, clamping each quantity to `0..=100`.
    #[cfg(not(feature = "pyffi"))]
    pub fn new(cyan: Float, magenta: Float, yellow: Float, key: Float) -> Self {
        Self {
            cyan: normalize_percent(cyan),
            magenta: normalize_percent(magenta),
            yellow: normalize_percent(yellow),
            key: normalize_percent(key),
        }
    }

    /// Get the cyan in percent.
    #[inline]
    pub const fn cyan(&self) -> Float {
        self.cyan
    }

    /// Get the magenta in percent.
    #[inline]
    pub const fn magenta(&self) -> Float {
        self.magenta
    }

    /// Get the yellow in percent.
    #[inline]
    pub const fn yellow(&self) -> Float {
        self.yellow
    }

    /// Get the key, i.e., black, in percent.
    #[inline]
    pub const fn key(&self) -> Float {
        self.key
    }

    /// Get cyan, magenta, yellow, and key rounded to integers.
    pub fn rounded(&self) -> [u32; 4] {
        [
            round_quantity(self.cyan),
            round_quantity(self.magenta),
            round_quantity(self.yellow),
            round_quantity(self.key),
        ]
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Convert this color to its string representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl From<Rgba> for Cmyk {
    fn from(value: Rgba) -> Self {
        value.to_cmyk()
    }
}

impl PartialEq for Cmyk {
    fn eq(&self, other: &Self) -> bool {
        self.rounded() == other.rounded()
    }
}

impl Eq for Cmyk {}

impl std::hash::Hash for Cmyk {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.rounded().hash(state);
    }
}

impl std::fmt::Display for Cmyk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [c, m, y, k] = self.rounded();
        write!(f, "cmyk({}, {}, {}, {})", c, m, y, k)
    }
}

#[cfg(test)]
mod test {
    use super::{Cmyk, Hsla};
    use crate::error::ColorFormatError;
    use crate::{assert_close_enough, Float, Rgba};

    #[test]
    fn test_normalization() {
        let color = Hsla::new(725.0, -10.0, 150.0, Float::NAN);
        assert_close_enough!(color.hue(), 5.0);
        assert_close_enough!(color.saturation(), 0.0);
        assert_close_enough!(color.lightness(), 100.0);
        assert_close_enough!(color.alpha(), 0.0);

        let mut color = Hsla::new(359.7, 50.0, 50.0, 100.0);
        assert_eq!(color.rounded(), [0, 50, 50, 100]);

        color.set_hue(-1e-20);
        assert_close_enough!(color.hue(), 0.0);
        color.set_alpha(101.0);
        assert_close_enough!(color.alpha(), 100.0);
    }

    #[test]
    fn test_conversion() -> Result<(), ColorFormatError> {
        let green = Rgba::from_hex("44c71a", 8)?;
        let hsla = green.to_hsla();
        assert_eq!(hsla.rounded(), [105, 77, 44, 100]);
        assert_eq!(hsla.to_string(), "hsla(105, 77, 44, 100)");
        assert_eq!(hsla.to_rgba(8)?, green);
        assert_eq!(hsla.to_rgba(6), Err(ColorFormatError::UnsupportedBitDepth));

        assert_eq!(Cmyk::from(green), Cmyk::new(66.0, 0.0, 87.0, 22.0));
        assert_eq!(Rgba::rgb8(0, 0, 0).to_cmyk().rounded(), [0, 0, 0, 100]);
        Ok(())
    }

    #[test]
    fn test_round_trip() -> Result<(), ColorFormatError> {
        for r in (0..=255).step_by(15) {
            for g in (0..=255).step_by(17) {
                for b in (0..=255).step_by(51) {
                    let color = Rgba::from_channels(&[r, g, b, 128], 8)?;
                    let back = color.to_hsla().to_rgba(8)?;
                    for (c1, c2) in color.rgba().iter().zip(back.rgba().iter()) {
                        assert!(c1.abs_diff(*c2) <= 1, "{} vs {}", color, back);
                    }
                }
            }
        }
        Ok(())
    }

    #[test]
    fn test_hue_rotation() {
        let blue = Hsla::new(240.0, 100.0, 50.0, 100.0);
        assert_eq!(blue.complementary().rounded()[0], 60);
        assert_eq!(blue.rotate(150.0).rounded()[0], 30);
        assert_eq!(blue.rotate(-250.0).rounded()[0], 350);

        let hues: Vec<_> = blue
            .hue_range(3, 120.0)
            .iter()
            .map(|c| c.rounded()[0])
            .collect();
        assert_eq!(hues, vec![90, 120, 150]);
        assert!(blue.hue_range(0, 90.0).is_empty());
    }

    #[cfg(feature = "rand")]
    #[test]
    fn test_random() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let color = Hsla::random_with(&mut rng);
            assert!((0.0..360.0).contains(&color.hue()));
            assert!((0.0..=100.0).contains(&color.saturation()));
            assert!((0.0..=100.0).contains(&color.lightness()));
            assert_close_enough!(color.alpha(), 100.0);
        }
    }
}
