//! Ordered collections of colors.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use tracing::debug;

use crate::core::check_bits;
use crate::error::{ArgumentError, ColorError, ColorFormatError, IncompatibleColorsError};
use crate::Rgba;

/// The 216 web-safe colors.
///
/// Each channel takes one of the six values 0, 51, 102, 153, 204, and 255.
/// The colors are ordered by red, then green, then blue, so that the color at
/// index `36 * r + 6 * g + b` has channels `51 * r`, `51 * g`, and `51 * b`.
pub const WEB_COLORS: [Rgba; 216] = {
    let mut colors = [Rgba::rgb8(0, 0, 0); 216];
    let mut index = 0;
    while index < 216 {
        let r = (index / 36) as u8;
        let g = (index / 6 % 6) as u8;
        let b = (index % 6) as u8;
        colors[index] = Rgba::rgb8(51 * r, 51 * g, 51 * b);
        index += 1;
    }
    colors
};

/// A palette.
///
/// A palette is an ordered sequence of colors that all have the same number
/// of bits per channel. Besides adding and removing colors one by one,
/// palettes can be generated with [`Palette::web`], [`Palette::random`], and
/// [`Palette::gradient`]:
///
/// ```
/// # use pinkie::{Palette, Rgba};
/// # use pinkie::error::ColorError;
/// let mut palette = Palette::with_colors(
///     &[Rgba::from_hex("ffffff", 8)?, Rgba::from_hex("4c66a1", 8)?],
///     8,
/// )?;
/// palette.add(Rgba::from_hex("16c235", 8)?)?;
/// assert!(palette.remove(&Rgba::from_hex("ffffff", 8)?));
///
/// let hex: Vec<_> = palette.iter().map(Rgba::to_hex).collect();
/// assert_eq!(hex, ["4C66A1", "16C235"]);
/// # Ok::<(), ColorError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyclass(eq, sequence, module = "pinkie"))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    bits: u32,
    colors: Vec<Rgba>,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Palette {
    /// Create a new palette with the given colors. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[new]
    #[pyo3(signature = (colors=Vec::new(), bits=8))]
    pub fn py_new(colors: Vec<Rgba>, bits: u32) -> Result<Self, ColorError> {
        Self::with_colors(&colors, bits)
    }

    /// Create a palette with the 216 web-safe colors.
    ///
    /// The colors have 8 bits per channel and come from [`WEB_COLORS`].
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn web() -> Self {
        debug!("generating web-safe palette");
        Self {
            bits: 8,
            colors: WEB_COLORS.to_vec(),
        }
    }

    /// Create a palette with `count` random, fully opaque colors. <i
    /// class=python-only>Python only!</i>
    #[cfg(all(feature = "pyffi", feature = "rand"))]
    #[staticmethod]
    #[pyo3(name = "random", signature = (count, bits=8))]
    pub fn py_random(count: usize, bits: u32) -> Result<Self, ColorFormatError> {
        Self::random(count, bits)
    }

    /// Create a linear gradient from `start` to `end` with `steps` colors.
    ///
    /// The gradient includes both end points. Color `i` interpolates every
    /// channel, including alpha, at `i / (steps - 1)` and truncates the
    /// result. This method fails if there are fewer than two steps or the
    /// end points have different bits per channel.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn gradient(start: &Rgba, end: &Rgba, steps: usize) -> Result<Self, ColorError> {
        Self::interpolate(start, end, steps)
    }

    /// Get the number of bits per channel.
    #[inline]
    pub const fn bits(&self) -> u32 {
        self.bits
    }

    /// Get the number of colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Determine whether this palette has no colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Append the color to this palette.
    ///
    /// The color must have the same number of bits per channel as the
    /// palette. Duplicates are fine.
    pub fn add(&mut self, color: Rgba) -> Result<(), IncompatibleColorsError> {
        if color.bits() != self.bits {
            debug!(
                expected = self.bits,
                actual = color.bits(),
                "rejecting palette color with different bit depth"
            );
            return Err(IncompatibleColorsError::new(self.bits, color.bits()));
        }

        self.colors.push(color);
        Ok(())
    }

    /// Remove the first occurrence of the color from this palette.
    ///
    /// This method returns `true` if it removed a color.
    pub fn remove(&mut self, color: &Rgba) -> bool {
        match self.colors.iter().position(|c| c == color) {
            Some(index) => {
                self.colors.remove(index);
                true
            }
            None => false,
        }
    }

    /// Determine whether this palette contains the color.
    pub fn contains(&self, color: &Rgba) -> bool {
        self.colors.contains(color)
    }

    /// Get the number of colors. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __len__(&self) -> usize {
        self.len()
    }

    /// Get the color at the given index. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __getitem__(&self, index: isize) -> PyResult<Rgba> {
        let length = self.colors.len() as isize;
        let index = if index < 0 { length + index } else { index };
        if (0..length).contains(&index) {
            Ok(self.colors[index as usize])
        } else {
            Err(pyo3::exceptions::PyIndexError::new_err(
                "palette index should be within bounds",
            ))
        }
    }

    /// Determine whether this palette contains the color. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __contains__(&self, color: Rgba) -> bool {
        self.contains(&color)
    }

    /// Get an iterator over the colors. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __iter__(&self) -> PaletteIterator {
        self.clone().into_iter()
    }

    /// Convert this palette to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

#[cfg(not(feature = "pyffi"))]
impl Palette {
    /// Create a palette with the 216 web-safe colors.
    ///
    /// The colors have 8 bits per channel and come from [`WEB_COLORS`].
    pub fn web() -> Self {
        debug!("generating web-safe palette");
        Self {
            bits: 8,
            colors: WEB_COLORS.to_vec(),
        }
    }

    /// Create a linear gradient from `start` to `end` with `steps` colors.
    ///
    /// The gradient includes both end points. Color `i` interpolates every
    /// channel, including alpha, at `i / (steps - 1)` and truncates the
    /// result. This method fails if there are fewer than two steps or the
    /// end points have different bits per channel.
    ///
    /// ```
    /// # use pinkie::{Palette, Rgba};
    /// # use pinkie::error::{ArgumentError, ColorError};
    /// let start = Rgba::rgb8(255, 0, 0);
    /// let end = Rgba::rgb8(0, 0, 255);
    /// let gradient = Palette::gradient(&start, &end, 5)?;
    ///
    /// let hex: Vec<_> = gradient.iter().map(Rgba::to_hex).collect();
    /// assert_eq!(hex, ["FF0000", "BF003F", "7F007F", "3F00BF", "0000FF"]);
    ///
    /// assert_eq!(
    ///     Palette::gradient(&start, &end, 1),
    ///     Err(ColorError::Argument(ArgumentError::TooFewSteps))
    /// );
    /// # Ok::<(), ColorError>(())
    /// ```
    pub fn gradient(start: &Rgba, end: &Rgba, steps: usize) -> Result<Self, ColorError> {
        Self::interpolate(start, end, steps)
    }
}

// Use a separate block, so that methods are not exposed to Python.
impl Palette {
    /// Create a new, empty palette. <i class=rust-only>Rust only!</i>
    pub fn new(bits: u32) -> Result<Self, ColorFormatError> {
        Ok(Self {
            bits: check_bits(bits)?,
            colors: Vec::new(),
        })
    }

    /// Create a new palette with the given colors. <i class=rust-only>Rust
    /// only!</i>
    ///
    /// All colors must have the given number of bits per channel.
    pub fn with_colors<'c, C>(colors: C, bits: u32) -> Result<Self, ColorError>
    where
        C: IntoIterator<Item = &'c Rgba>,
    {
        let mut palette = Self::new(bits)?;
        for color in colors {
            palette.add(*color)?;
        }
        Ok(palette)
    }

    /// Create a palette with `count` random, fully opaque colors. <i
    /// class=rust-only>Rust only!</i>
    #[cfg(feature = "rand")]
    pub fn random(count: usize, bits: u32) -> Result<Self, ColorFormatError> {
        Self::random_with(&mut rand::rng(), count, bits)
    }

    /// Create a palette with `count` random, fully opaque colors drawn from
    /// the given random number generator. <i class=rust-only>Rust only!</i>
    #[cfg(feature = "rand")]
    pub fn random_with<R: rand::Rng + ?Sized>(
        rng: &mut R,
        count: usize,
        bits: u32,
    ) -> Result<Self, ColorFormatError> {
        let bits = check_bits(bits)?;
        debug!(count, bits, "generating random palette");

        let colors = (0..count)
            .map(|_| Rgba::random_with(&mut *rng, bits))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { bits, colors })
    }

    /// Get the colors. <i class=rust-only>Rust only!</i>
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    /// Get an iterator over the colors. <i class=rust-only>Rust only!</i>
    pub fn iter(&self) -> std::slice::Iter<'_, Rgba> {
        self.colors.iter()
    }

    fn interpolate(start: &Rgba, end: &Rgba, steps: usize) -> Result<Self, ColorError> {
        start.check_compatible(end)?;
        if steps < 2 {
            debug!(steps, "rejecting gradient with too few steps");
            return Err(ArgumentError::TooFewSteps.into());
        }

        let bits = start.bits();
        debug!(%start, %end, steps, "generating gradient palette");

        let last = (steps - 1) as u128;
        let from = start.rgba();
        let to = end.rgba();

        let colors = (0..steps)
            .map(|step| {
                let step = step as u128;
                let mut channels = [0_u32; 4];
                for (channel, (&c1, &c2)) in channels.iter_mut().zip(from.iter().zip(to.iter())) {
                    // The weighted sum is never negative, so division truncates.
                    let sum = c1 as u128 * (last - step) + c2 as u128 * step;
                    *channel = (sum / last) as u32;
                }
                Rgba::from_parts(channels, bits)
            })
            .collect();

        Ok(Self { bits, colors })
    }
}

impl AsRef<[Rgba]> for Palette {
    fn as_ref(&self) -> &[Rgba] {
        &self.colors
    }
}

impl std::ops::Index<usize> for Palette {
    type Output = Rgba;

    fn index(&self, index: usize) -> &Self::Output {
        &self.colors[index]
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Rgba;
    type IntoIter = std::slice::Iter<'a, Rgba>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

impl IntoIterator for Palette {
    type Item = Rgba;
    type IntoIter = PaletteIterator;

    fn into_iter(self) -> Self::IntoIter {
        PaletteIterator {
            colors: self.colors.into_iter(),
        }
    }
}

// ====================================================================================================================

/// An iterator over the colors of a palette, which it owns.
///
/// This iterator is fused and exact.
#[cfg_attr(feature = "pyffi", pyclass(module = "pinkie"))]
#[derive(Debug)]
pub struct PaletteIterator {
    colors: std::vec::IntoIter<Rgba>,
}

impl Iterator for PaletteIterator {
    type Item = Rgba;

    fn next(&mut self) -> Option<Self::Item> {
        self.colors.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.colors.size_hint()
    }
}

impl std::iter::ExactSizeIterator for PaletteIterator {
    fn len(&self) -> usize {
        self.colors.len()
    }
}

impl std::iter::FusedIterator for PaletteIterator {}

#[cfg(feature = "pyffi")]
#[pymethods]
impl PaletteIterator {
    /// Get the number of remaining colors. <i class=python-only>Python
    /// only!</i>
    pub fn __len__(&self) -> usize {
        self.len()
    }

    /// Return this iterator. <i class=python-only>Python only!</i>
    pub fn __iter__(slf: PyRef<'_, Self>) -> PyRef<'_, Self> {
        slf
    }

    /// Return the next color. <i class=python-only>Python only!</i>
    pub fn __next__(mut slf: PyRefMut<'_, Self>) -> Option<Rgba> {
        slf.next()
    }
}

#[cfg(test)]
mod test {
    use super::{Palette, WEB_COLORS};
    use crate::error::{ArgumentError, ColorError, ColorFormatError, IncompatibleColorsError};
    use crate::Rgba;

    #[test]
    fn test_web() {
        let palette = Palette::web();
        assert_eq!(palette.len(), 216);
        assert_eq!(palette.bits(), 8);
        assert_eq!(palette, Palette::web());

        for color in &palette {
            for channel in color.rgb() {
                assert!(
                    [0, 51, 102, 153, 204, 255].contains(&channel),
                    "{} is not web-safe",
                    color
                );
            }
            assert_eq!(color.alpha(), 255);
            assert_eq!(color.to_web(), *color);
        }

        let mut sorted = WEB_COLORS.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 216);

        assert_eq!(WEB_COLORS[0], Rgba::rgb8(0, 0, 0));
        assert_eq!(WEB_COLORS[36 * 5 + 6 * 2 + 1], Rgba::rgb8(255, 102, 51));
        assert_eq!(WEB_COLORS[215], Rgba::rgb8(255, 255, 255));
    }

    #[test]
    fn test_management() -> Result<(), ColorError> {
        let white = Rgba::from_hex("ffffff", 8)?;
        let blue = Rgba::from_hex("4c66a1", 8)?;
        let green = Rgba::from_hex("16c235", 8)?;

        let mut palette = Palette::with_colors(&[white, blue], 8)?;
        palette.add(green)?;
        assert_eq!(palette.colors(), &[white, blue, green]);
        assert!(palette.contains(&white));

        assert!(palette.remove(&white));
        assert!(!palette.remove(&white));
        assert!(!palette.contains(&white));
        assert_eq!(palette.len(), 2);
        assert_eq!(palette[1], green);
        assert_eq!(palette.as_ref(), &[blue, green]);

        let deep = green.convert_depth(16)?;
        assert_eq!(palette.add(deep), Err(IncompatibleColorsError::new(8, 16)));
        assert_eq!(
            Palette::with_colors(&[blue, deep], 8),
            Err(ColorError::Incompatible(IncompatibleColorsError::new(8, 16)))
        );
        assert_eq!(Palette::new(3), Err(ColorFormatError::UnsupportedBitDepth));

        let empty = Palette::new(16)?;
        assert!(empty.is_empty());
        assert_eq!(empty.into_iter().len(), 0);
        Ok(())
    }

    #[test]
    fn test_gradient() -> Result<(), ColorError> {
        let start = Rgba::from_hex("ff0000", 8)?;
        let end = Rgba::from_hex("0000ff", 8)?;
        let gradient = Palette::gradient(&start, &end, 5)?;

        assert_eq!(gradient.len(), 5);
        assert_eq!(gradient[0], start);
        assert_eq!(gradient[4], end);

        let hex: Vec<_> = gradient.iter().map(Rgba::to_hex).collect();
        assert_eq!(hex, ["FF0000", "BF003F", "7F007F", "3F00BF", "0000FF"]);

        for pair in gradient.colors().windows(2) {
            assert!(pair[1].red() <= pair[0].red(), "red should decrease");
            assert!(pair[0].blue() <= pair[1].blue(), "blue should increase");
        }

        let faded = Palette::gradient(&start.with_alpha(0), &start, 3)?;
        let alphas: Vec<_> = faded.into_iter().map(|c| c.alpha()).collect();
        assert_eq!(alphas, [0, 127, 255]);

        let pair = Palette::gradient(&start, &end, 2)?;
        assert_eq!(pair.colors(), &[start, end]);

        assert_eq!(
            Palette::gradient(&start, &end, 1),
            Err(ColorError::Argument(ArgumentError::TooFewSteps))
        );
        assert_eq!(
            Palette::gradient(&start, &end.convert_depth(16)?, 5),
            Err(ColorError::Incompatible(IncompatibleColorsError::new(8, 16)))
        );
        Ok(())
    }

    #[cfg(feature = "rand")]
    #[test]
    fn test_random() -> Result<(), ColorFormatError> {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut rng = StdRng::seed_from_u64(216);
        let palette = Palette::random_with(&mut rng, 7, 16)?;
        assert_eq!(palette.len(), 7);
        assert!(palette.iter().all(|c| c.bits() == 16 && c.alpha() == 0xffff));

        let mut rng = StdRng::seed_from_u64(216);
        assert_eq!(Palette::random_with(&mut rng, 7, 16)?, palette);

        assert!(Palette::random(0, 8)?.is_empty());
        assert_eq!(
            Palette::random(3, 0),
            Err(ColorFormatError::UnsupportedBitDepth)
        );
        Ok(())
    }
}
