#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use tracing::debug;

use crate::core::{
    check_bits, clamp_channel, format_hex, mask_packed, max_value, pack, parse_hex,
    replace_channel, rescale, rgb_to_cmyk, rgba_to_hsla, unpack,
};
use crate::error::{ArgumentError, ColorError, ColorFormatError, IncompatibleColorsError};
use crate::{BlendMode, Cmyk, Float, Hsla};

/// The conventional angle for split-complementary and analogous harmonies.
const DEFAULT_HARMONY_ANGLE: Float = 30.0;

/// A packed RGBA color.
///
/// An `Rgba` color stores its red, green, blue, and alpha channels in a single
/// `u128`. Red occupies the least significant bits, followed by green, blue,
/// and alpha. The number of bits per channel is fixed at construction. It must
/// be a multiple of 4 between 4 and 32, so that each channel maps onto whole
/// hexadecimal digits.
///
/// # Construction
///
/// Colors can be created from packed integers, hexadecimal strings, and
/// channel sequences. Channel values are always clamped to `0..=max`, where
/// `max` is [`Rgba::max_channel_value`], and a missing alpha channel means
/// fully opaque:
///
/// ```
/// # use pinkie::Rgba;
/// # use pinkie::error::ColorFormatError;
/// let packed = Rgba::from_packed(0xff6c_52ff, 8)?;
/// let hex = Rgba::from_hex("ff526c", 8)?;
/// let channels = Rgba::from_channels(&[255, 82, 108], 8)?;
/// assert_eq!(packed, hex);
/// assert_eq!(hex, channels);
///
/// let clamped = Rgba::from_channels(&[-1, 0x1_0000, 42, 7], 16)?;
/// assert_eq!(clamped.rgba(), [0, 0xffff, 42, 7]);
///
/// assert_eq!(Rgba::from_hex("ff526c", 6), Err(ColorFormatError::UnsupportedBitDepth));
/// assert_eq!(Rgba::from_hex("ff526", 8), Err(ColorFormatError::UnexpectedLength));
/// assert_eq!(Rgba::from_channels(&[1, 2], 8), Err(ColorFormatError::UnexpectedChannelCount));
/// # Ok::<(), ColorFormatError>(())
/// ```
///
/// # Equality and Ordering
///
/// Two colors are equal if they have the same packed value and bits per
/// channel. Ordering compares the packed values first and the bits per channel
/// second. It is useful for sorting colors into a canonical order but has no
/// perceptual meaning.
///
/// # Combining Colors
///
/// Blending and distance require that both colors have the same number of bits
/// per channel. Use [`Rgba::convert_depth`] to make them match.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, ord, sequence, module = "pinkie")
)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rgba {
    packed: u128,
    bits: u32,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Rgba {
    /// Create a new color from a hexadecimal string, an integer, or a
    /// sequence of channel values. <i class=python-only>Python only!</i>
    ///
    /// This constructor tries each of the three in turn and dispatches to
    /// [`Rgba::from_hex`], [`Rgba::from_packed`], or [`Rgba::from_channels`].
    #[cfg(feature = "pyffi")]
    #[new]
    #[pyo3(signature = (value, bits=8))]
    pub fn py_new(value: &Bound<'_, PyAny>, bits: u32) -> PyResult<Self> {
        if let Ok(hex) = value.extract::<String>() {
            return Ok(Self::from_hex(&hex, bits)?);
        }
        if let Ok(packed) = value.extract::<u128>() {
            return Ok(Self::from_packed(packed, bits)?);
        }

        let channels = value.extract::<Vec<i64>>()?;
        Ok(Self::from_channels(&channels, bits)?)
    }

    /// Create a new random, fully opaque color. <i class=python-only>Python
    /// only!</i>
    #[cfg(all(feature = "pyffi", feature = "rand"))]
    #[staticmethod]
    #[pyo3(name = "random", signature = (bits=8))]
    pub fn py_random(bits: u32) -> Result<Self, ColorFormatError> {
        Self::random(bits)
    }

    /// Get the number of bits per channel.
    #[inline]
    pub const fn bits(&self) -> u32 {
        self.bits
    }

    /// Get the maximum channel value, i.e., `2^bits - 1`.
    #[inline]
    pub const fn max_channel_value(&self) -> u32 {
        max_value(self.bits)
    }

    /// Get the packed integer.
    #[inline]
    pub const fn packed(&self) -> u128 {
        self.packed
    }

    /// Get the red channel.
    #[inline]
    pub const fn red(&self) -> u32 {
        unpack(self.packed, self.bits)[0]
    }

    /// Get the green channel.
    #[inline]
    pub const fn green(&self) -> u32 {
        unpack(self.packed, self.bits)[1]
    }

    /// Get the blue channel.
    #[inline]
    pub const fn blue(&self) -> u32 {
        unpack(self.packed, self.bits)[2]
    }

    /// Get the alpha channel.
    #[inline]
    pub const fn alpha(&self) -> u32 {
        unpack(self.packed, self.bits)[3]
    }

    /// Get the red, green, and blue channels.
    pub const fn rgb(&self) -> [u32; 3] {
        let [r, g, b, _] = unpack(self.packed, self.bits);
        [r, g, b]
    }

    /// Get all four channels.
    pub const fn rgba(&self) -> [u32; 4] {
        unpack(self.packed, self.bits)
    }

    /// Create a copy with the given red channel, clamped to range.
    pub fn with_red(&self, value: i64) -> Self {
        self.with_channel(0, value)
    }

    /// Create a copy with the given green channel, clamped to range.
    pub fn with_green(&self, value: i64) -> Self {
        self.with_channel(1, value)
    }

    /// Create a copy with the given blue channel, clamped to range.
    pub fn with_blue(&self, value: i64) -> Self {
        self.with_channel(2, value)
    }

    /// Create a copy with the given alpha channel, clamped to range.
    pub fn with_alpha(&self, value: i64) -> Self {
        self.with_channel(3, value)
    }

    /// Format the red, green, and blue channels as uppercase hexadecimal
    /// digits.
    ///
    /// Each channel takes `bits / 4` digits, zero-padded on the left. There is
    /// no leading `#`.
    ///
    /// ```
    /// # use pinkie::Rgba;
    /// let color = Rgba::rgba8(10, 0, 255, 128);
    /// assert_eq!(color.to_hex(), "0A00FF");
    /// assert_eq!(color.to_hex_alpha(), "0A00FF80");
    /// ```
    pub fn to_hex(&self) -> String {
        format_hex(&self.rgb(), self.bits)
    }

    /// Format all four channels as uppercase hexadecimal digits.
    pub fn to_hex_alpha(&self) -> String {
        format_hex(&self.rgba(), self.bits)
    }

    /// Convert this color to another number of bits per channel.
    ///
    /// Each channel is scaled by `2^bits / 2^self.bits` and clamped to the new
    /// maximum. Widening and then narrowing again restores the original
    /// channels.
    ///
    /// ```
    /// # use pinkie::Rgba;
    /// let color = Rgba::rgb8(0x12, 0x34, 0x56);
    /// let wide = color.convert_depth(16)?;
    /// assert_eq!(wide.to_hex_alpha(), "120034005600FF00");
    /// assert_eq!(wide.convert_depth(8)?, color);
    /// # Ok::<(), pinkie::error::ColorFormatError>(())
    /// ```
    pub fn convert_depth(&self, bits: u32) -> Result<Self, ColorFormatError> {
        let bits = check_bits(bits)?;
        let channels = self.rgba().map(|c| rescale(c, self.bits, bits));
        Ok(Self::from_parts(channels, bits))
    }

    /// Compute the perceived brightness with the HSP model.
    ///
    /// The result is `sqrt(0.299 * R² + 0.587 * G² + 0.114 * B²)` over the
    /// raw channel values and hence falls into `0..=max_channel_value()`.
    pub fn brightness(&self) -> Float {
        let [r, g, b] = self.rgb().map(|c| c as Float);
        let sum = 0.114 * b * b;
        let sum = (0.587 * g).mul_add(g, sum);
        let sum = (0.299 * r).mul_add(r, sum);
        sum.sqrt()
    }

    /// Determine whether this color is light.
    ///
    /// A color is light if its [brightness](Rgba::brightness) exceeds the
    /// threshold, which defaults to half the maximum channel value.
    ///
    /// ```
    /// # use pinkie::Rgba;
    /// assert!(Rgba::rgb8(255, 255, 255).is_light(None));
    /// assert!(!Rgba::rgb8(0, 0, 0).is_light(None));
    /// assert!(!Rgba::rgb8(200, 200, 200).is_light(Some(220.0)));
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn is_light(&self, threshold: Option<Float>) -> bool {
        self.exceeds_brightness(threshold)
    }

    /// Determine whether this color is light.
    ///
    /// A color is light if its brightness exceeds the threshold, which
    /// defaults to half the maximum channel value.
    #[cfg(feature = "pyffi")]
    #[pyo3(signature = (threshold=None))]
    pub fn is_light(&self, threshold: Option<Float>) -> bool {
        self.exceeds_brightness(threshold)
    }

    /// Convert this color to HSLA.
    pub fn to_hsla(&self) -> Hsla {
        let [h, s, l, a] = rgba_to_hsla(&self.to_normalized());
        Hsla::new(h, s, l, a)
    }

    /// Convert this color to CMYK, ignoring alpha.
    pub fn to_cmyk(&self) -> Cmyk {
        let [r, g, b, _] = self.to_normalized();
        let [c, m, y, k] = rgb_to_cmyk(&[r, g, b]);
        Cmyk::new(c, m, y, k)
    }

    /// Snap this color to the closest web-safe color.
    ///
    /// Web-safe colors have channels that are multiples of 51 in 8-bit terms.
    /// This method rounds red, green, and blue to the nearest such value,
    /// scaled to this color's bits per channel. It preserves alpha.
    ///
    /// ```
    /// # use pinkie::Rgba;
    /// let color = Rgba::rgba8(0x44, 0xc7, 0x1a, 0x80);
    /// assert_eq!(color.to_web().rgba(), [51, 204, 51, 0x80]);
    /// ```
    pub fn to_web(&self) -> Self {
        let max = self.max_channel_value() as Float;
        let snap = |value: u32| {
            let level = (value as Float / max * 5.0).round();
            (level / 5.0 * max).round() as u32
        };

        let [r, g, b, a] = self.rgba();
        Self::from_parts([snap(r), snap(g), snap(b), a], self.bits)
    }

    /// Get the complementary color.
    ///
    /// This method rotates the hue by 180 degrees.
    pub fn complementary(&self) -> Self {
        self.with_rotated_hue(180.0)
    }

    /// Get the two split-complementary colors.
    ///
    /// They sit `angle` degrees, 30 by default, on either side of the
    /// complementary color.
    ///
    /// ```
    /// # use pinkie::Rgba;
    /// let [left, right] = Rgba::rgb8(255, 82, 108).split_complementary(None);
    /// assert_eq!(left.to_hex(), "52FF8E");
    /// assert_eq!(right.to_hex(), "52C3FF");
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn split_complementary(&self, angle: Option<Float>) -> [Self; 2] {
        self.split_around_complement(angle.unwrap_or(DEFAULT_HARMONY_ANGLE))
    }

    /// Get the two split-complementary colors.
    ///
    /// They sit `angle` degrees, 30 by default, on either side of the
    /// complementary color.
    #[cfg(feature = "pyffi")]
    #[pyo3(signature = (angle=None))]
    pub fn split_complementary(&self, angle: Option<Float>) -> [Self; 2] {
        self.split_around_complement(angle.unwrap_or(DEFAULT_HARMONY_ANGLE))
    }

    /// Get the two colors that form a triad with this color, i.e., rotated by
    /// 120 and 240 degrees.
    pub fn triadic(&self) -> [Self; 2] {
        [self.with_rotated_hue(120.0), self.with_rotated_hue(240.0)]
    }

    /// Get the three colors that form a rectangle with this color, i.e.,
    /// rotated by 90, 180, and 270 degrees.
    pub fn tetradic(&self) -> [Self; 3] {
        [
            self.with_rotated_hue(90.0),
            self.with_rotated_hue(180.0),
            self.with_rotated_hue(270.0),
        ]
    }

    /// Get the analogous colors.
    ///
    /// The result is centered on this color. Its first element is rotated
    /// `angle` degrees, 30 by default, backwards, its middle element is this
    /// color unchanged, and its last element is rotated `angle` degrees
    /// forwards.
    ///
    /// ```
    /// # use pinkie::Rgba;
    /// let pink = Rgba::rgb8(255, 82, 108);
    /// let [before, middle, after] = pink.analogous(None);
    /// assert_eq!(middle, pink);
    /// assert_eq!(before.to_hex(), "FF52C3");
    /// assert_eq!(after.to_hex(), "FF8E52");
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn analogous(&self, angle: Option<Float>) -> [Self; 3] {
        self.flank(angle.unwrap_or(DEFAULT_HARMONY_ANGLE))
    }

    /// Get the analogous colors.
    ///
    /// The result is centered on this color, which is its middle element.
    /// The other two are rotated `angle` degrees, 30 by default, backwards
    /// and forwards.
    #[cfg(feature = "pyffi")]
    #[pyo3(signature = (angle=None))]
    pub fn analogous(&self, angle: Option<Float>) -> [Self; 3] {
        self.flank(angle.unwrap_or(DEFAULT_HARMONY_ANGLE))
    }

    /// Spread `num` colors across `angle` degrees starting from the
    /// complementary color.
    ///
    /// See [`Hsla::hue_range`] for details.
    pub fn hue_range(&self, num: usize, angle: Float) -> Vec<Self> {
        self.to_hsla()
            .hue_range(num, angle)
            .iter()
            .map(|hsla| Self::from_parts(hsla.to_channels(self.bits), self.bits))
            .collect()
    }

    /// Compute the Euclidean distance to the other color across all four
    /// channels.
    pub fn distance(&self, other: &Self) -> Result<Float, IncompatibleColorsError> {
        self.check_compatible(other)?;
        Ok((self.squared_distance(other) as Float).sqrt())
    }

    /// Blend this color as background with the other color as foreground.
    ///
    /// See [`BlendMode::compose`] for details.
    pub fn blend(&self, other: &Self, mode: BlendMode) -> Result<Self, IncompatibleColorsError> {
        mode.compose(self, other)
    }

    /// Find the candidate closest to this color. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "closest")]
    pub fn py_closest(&self, candidates: Vec<Self>) -> Result<Self, ColorError> {
        self.closest(&candidates)
    }

    /// Find the candidate furthest from this color. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "furthest")]
    pub fn py_furthest(&self, candidates: Vec<Self>) -> Result<Self, ColorError> {
        self.furthest(&candidates)
    }

    /// Get the number of channels, which is always 4. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __len__(&self) -> usize {
        4
    }

    /// Get the channel at the given index. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __getitem__(&self, index: isize) -> PyResult<u32> {
        let channels = self.rgba();
        match index {
            -4..=-1 => Ok(channels[(4 + index) as usize]),
            0..=3 => Ok(channels[index as usize]),
            _ => Err(pyo3::exceptions::PyIndexError::new_err(
                "channel index should be between -4 and 3",
            )),
        }
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

// --------------------------------------------------------------------------------------------------------------------

// Use a separate block, so that methods are not exposed to Python.
impl Rgba {
    /// Create a new color from the packed integer. <i class=rust-only>Rust
    /// only!</i>
    ///
    /// Any bits beyond the four channels are dropped.
    pub const fn from_packed(packed: u128, bits: u32) -> Result<Self, ColorFormatError> {
        match check_bits(bits) {
            Ok(bits) => Ok(Self {
                packed: mask_packed(packed, bits),
                bits,
            }),
            Err(error) => Err(error),
        }
    }

    /// Create a new, fully opaque color with 8 bits per channel. <i
    /// class=rust-only>Rust only!</i>
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba8(r, g, b, 0xff)
    }

    /// Create a new color with 8 bits per channel. <i class=rust-only>Rust
    /// only!</i>
    pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            packed: pack([r as u32, g as u32, b as u32, a as u32], 8),
            bits: 8,
        }
    }

    /// Parse a color from its hexadecimal representation. <i
    /// class=rust-only>Rust only!</i>
    ///
    /// The string may start with a `#`. It must have `bits / 4` hexadecimal
    /// digits for each of three or four channels. With three channels, the
    /// color is fully opaque.
    pub fn from_hex(s: &str, bits: u32) -> Result<Self, ColorFormatError> {
        let bits = check_bits(bits)?;
        let channels = parse_hex(s, bits)?;
        Ok(Self::from_parts(channels, bits))
    }

    /// Create a new color from three or four channel values. <i
    /// class=rust-only>Rust only!</i>
    ///
    /// Each value is clamped to `0..=max_value`. With three channels, the
    /// color is fully opaque.
    pub fn from_channels(channels: &[i64], bits: u32) -> Result<Self, ColorFormatError> {
        let bits = check_bits(bits)?;
        let (r, g, b, alpha) = match *channels {
            [r, g, b] => (r, g, b, max_value(bits)),
            [r, g, b, a] => (r, g, b, clamp_channel(a, bits)),
            _ => return Err(ColorFormatError::UnexpectedChannelCount),
        };

        let [r, g, b] = [r, g, b].map(|c| clamp_channel(c, bits));
        Ok(Self::from_parts([r, g, b, alpha], bits))
    }

    /// Create a new random, fully opaque color. <i class=rust-only>Rust
    /// only!</i>
    #[cfg(feature = "rand")]
    pub fn random(bits: u32) -> Result<Self, ColorFormatError> {
        Self::random_with(&mut rand::rng(), bits)
    }

    /// Create a new random, fully opaque color with the given random number
    /// generator. <i class=rust-only>Rust only!</i>
    #[cfg(feature = "rand")]
    pub fn random_with<R: rand::Rng + ?Sized>(
        rng: &mut R,
        bits: u32,
    ) -> Result<Self, ColorFormatError> {
        let bits = check_bits(bits)?;
        let max = max_value(bits);
        Ok(Self::from_parts(
            [
                rng.random_range(0..=max),
                rng.random_range(0..=max),
                rng.random_range(0..=max),
                max,
            ],
            bits,
        ))
    }

    /// Update the red channel, clamping the value. <i class=rust-only>Rust
    /// only!</i>
    pub fn set_red(&mut self, value: i64) {
        *self = self.with_red(value);
    }

    /// Update the green channel, clamping the value. <i class=rust-only>Rust
    /// only!</i>
    pub fn set_green(&mut self, value: i64) {
        *self = self.with_green(value);
    }

    /// Update the blue channel, clamping the value. <i class=rust-only>Rust
    /// only!</i>
    pub fn set_blue(&mut self, value: i64) {
        *self = self.with_blue(value);
    }

    /// Update the alpha channel, clamping the value. <i class=rust-only>Rust
    /// only!</i>
    pub fn set_alpha(&mut self, value: i64) {
        *self = self.with_alpha(value);
    }

    /// Find the candidate closest to this color. <i class=rust-only>Rust
    /// only!</i>
    ///
    /// This method compares exact squared distances across all four channels.
    /// On a tie, the earlier candidate wins. It fails if there are no
    /// candidates or a candidate has a different number of bits per channel.
    ///
    /// ```
    /// # use pinkie::Rgba;
    /// # use pinkie::error::{ArgumentError, ColorError};
    /// let pink = Rgba::from_hex("ff526c", 8)?;
    /// let candidates = [Rgba::from_hex("4fc10a", 8)?, Rgba::from_hex("bb57a2", 8)?];
    /// assert_eq!(pink.closest(&candidates)?.to_hex(), "BB57A2");
    /// assert_eq!(pink.furthest(&candidates)?.to_hex(), "4FC10A");
    /// assert_eq!(pink.closest(&[] as &[Rgba]), Err(ColorError::Argument(ArgumentError::NoCandidates)));
    /// # Ok::<(), ColorError>(())
    /// ```
    pub fn closest<'c, C>(&self, candidates: C) -> Result<Self, ColorError>
    where
        C: IntoIterator<Item = &'c Self>,
    {
        self.search(candidates, |distance, best| distance < best)
    }

    /// Find the candidate furthest from this color. <i class=rust-only>Rust
    /// only!</i>
    ///
    /// This method works like [`Rgba::closest`], only that it maximizes the
    /// distance.
    pub fn furthest<'c, C>(&self, candidates: C) -> Result<Self, ColorError>
    where
        C: IntoIterator<Item = &'c Self>,
    {
        self.search(candidates, |distance, best| best < distance)
    }

    fn search<'c, C, F>(&self, candidates: C, mut is_better: F) -> Result<Self, ColorError>
    where
        C: IntoIterator<Item = &'c Self>,
        F: FnMut(u128, u128) -> bool,
    {
        let mut best: Option<(u128, Self)> = None;

        for candidate in candidates {
            self.check_compatible(candidate)?;
            let distance = self.squared_distance(candidate);
            let replace = match best {
                None => true,
                Some((best_distance, _)) => is_better(distance, best_distance),
            };
            if replace {
                best = Some((distance, *candidate));
            }
        }

        match best {
            Some((_, color)) => Ok(color),
            None => {
                debug!(color = %self, "color search without candidates");
                Err(ArgumentError::NoCandidates.into())
            }
        }
    }

    /// Create a new color from in-range channels and validated bits.
    #[inline]
    pub(crate) const fn from_parts(channels: [u32; 4], bits: u32) -> Self {
        Self {
            packed: pack(channels, bits),
            bits,
        }
    }

    /// Get all four channels divided by the maximum channel value.
    pub(crate) fn to_normalized(&self) -> [Float; 4] {
        let max = self.max_channel_value() as Float;
        self.rgba().map(|c| c as Float / max)
    }

    /// Ensure that the other color has the same number of bits per channel.
    pub(crate) fn check_compatible(&self, other: &Self) -> Result<(), IncompatibleColorsError> {
        if self.bits == other.bits {
            Ok(())
        } else {
            debug!(
                expected = self.bits,
                actual = other.bits,
                "rejecting colors with different bit depths"
            );
            Err(IncompatibleColorsError::new(self.bits, other.bits))
        }
    }

    /// Compute the squared distance for colors with the same bits.
    fn squared_distance(&self, other: &Self) -> u128 {
        self.rgba()
            .iter()
            .zip(other.rgba().iter())
            .map(|(c1, c2)| {
                let delta = c1.abs_diff(*c2) as u128;
                delta * delta
            })
            .sum()
    }

    fn with_channel(&self, index: usize, value: i64) -> Self {
        Self {
            packed: replace_channel(self.packed, self.bits, index, clamp_channel(value, self.bits)),
            bits: self.bits,
        }
    }

    fn with_rotated_hue(&self, degrees: Float) -> Self {
        let hsla = self.to_hsla().rotate(degrees);
        Self::from_parts(hsla.to_channels(self.bits), self.bits)
    }

    fn exceeds_brightness(&self, threshold: Option<Float>) -> bool {
        let threshold = threshold.unwrap_or_else(|| self.max_channel_value() as Float / 2.0);
        threshold < self.brightness()
    }

    fn split_around_complement(&self, angle: Float) -> [Self; 2] {
        [
            self.with_rotated_hue(180.0 - angle),
            self.with_rotated_hue(180.0 + angle),
        ]
    }

    fn flank(&self, angle: Float) -> [Self; 3] {
        [
            self.with_rotated_hue(-angle),
            *self,
            self.with_rotated_hue(angle),
        ]
    }
}

impl std::str::FromStr for Rgba {
    type Err = ColorFormatError;

    /// Parse a color with 8 bits per channel from its hexadecimal
    /// representation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s, 8)
    }
}

impl TryFrom<&str> for Rgba {
    type Error = ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_hex(value, 8)
    }
}

impl From<[u8; 3]> for Rgba {
    fn from(value: [u8; 3]) -> Self {
        Self::rgb8(value[0], value[1], value[2])
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(value: [u8; 4]) -> Self {
        Self::rgba8(value[0], value[1], value[2], value[3])
    }
}

impl From<Rgba> for u128 {
    fn from(value: Rgba) -> Self {
        value.packed
    }
}

impl std::fmt::Debug for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b, a] = self.rgba();
        write!(f, "Rgba({}, [{}, {}, {}, {}])", self.bits, r, g, b, a)
    }
}

impl std::fmt::Display for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b, a] = self.rgba();
        write!(f, "rgba({}, {}, {}, {})", r, g, b, a)
    }
}
