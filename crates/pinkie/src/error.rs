//! Utility module with pinkie's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An erroneous color format.
///
/// This error covers all the ways construction of an [`Rgba`](crate::Rgba)
/// color can fail before a single channel is packed, i.e., an unsupported bit
/// depth, a hexadecimal string with the wrong number of digits or with
/// non-hexadecimal characters, and a channel sequence of the wrong length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A bit depth that is zero, not a multiple of 4, or larger than 32. For
    /// example, 6 bits per channel cannot be written as whole hexadecimal
    /// digits.
    UnsupportedBitDepth,

    /// A hexadecimal color with neither three nor four channels' worth of
    /// digits. For 8 bits per channel, that means neither 6 nor 8 digits.
    UnexpectedLength,

    /// A hexadecimal color with a character that is not a hexadecimal digit.
    /// For example, `ff00gg` has two such characters.
    MalformedHex,

    /// A channel sequence with neither 3 nor 4 elements.
    UnexpectedChannelCount,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match *self {
            UnsupportedBitDepth => {
                f.write_str("bits per channel should be a multiple of 4 between 4 and 32")
            }
            UnexpectedLength => f.write_str(
                "hexadecimal color should have digits for 3 or 4 channels but has a different number",
            ),
            MalformedHex => {
                f.write_str("hexadecimal color should contain only hexadecimal digits but does not")
            }
            UnexpectedChannelCount => {
                f.write_str("channel sequence should have 3 or 4 elements but has a different number")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An invalid argument.
///
/// This error covers empty inputs and unknown names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgumentError {
    /// A closest or furthest color search without any candidates.
    NoCandidates,

    /// A gradient with fewer than two steps, which cannot include both
    /// endpoints.
    TooFewSteps,

    /// A name that does not match any blend mode.
    UnknownBlendMode,
}

impl std::fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Self::NoCandidates => f.write_str("color search should have candidates but has none"),
            Self::TooFewSteps => f.write_str("gradient should have at least 2 steps"),
            Self::UnknownBlendMode => {
                f.write_str("blend mode name should be known but is not")
            }
        }
    }
}

impl std::error::Error for ArgumentError {}

#[cfg(feature = "pyffi")]
impl From<ArgumentError> for PyErr {
    fn from(value: ArgumentError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An error indicating colors with different bit depths.
///
/// Blending two colors, measuring the distance between them, and adding a
/// color to a palette all require the same number of bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IncompatibleColorsError {
    pub expected: u32,
    pub actual: u32,
}

impl IncompatibleColorsError {
    /// Create a new incompatible colors error.
    pub const fn new(expected: u32, actual: u32) -> Self {
        Self { expected, actual }
    }
}

impl std::fmt::Display for IncompatibleColorsError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "colors should have {} bits per channel but one has {}",
            self.expected, self.actual
        ))
    }
}

impl std::error::Error for IncompatibleColorsError {}

#[cfg(feature = "pyffi")]
impl From<IncompatibleColorsError> for PyErr {
    fn from(value: IncompatibleColorsError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// Any of pinkie's errors.
///
/// Some operations, e.g., [`Rgba::closest`](crate::Rgba::closest) or
/// [`Palette::gradient`](crate::Palette::gradient), can fail in more than one
/// way. They return this wrapper, which exposes the wrapped error as its
/// source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorError {
    Format(ColorFormatError),
    Argument(ArgumentError),
    Incompatible(IncompatibleColorsError),
}

impl From<ColorFormatError> for ColorError {
    fn from(value: ColorFormatError) -> Self {
        Self::Format(value)
    }
}

impl From<ArgumentError> for ColorError {
    fn from(value: ArgumentError) -> Self {
        Self::Argument(value)
    }
}

impl From<IncompatibleColorsError> for ColorError {
    fn from(value: IncompatibleColorsError) -> Self {
        Self::Incompatible(value)
    }
}

impl std::fmt::Display for ColorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Format(ref e) => e.fmt(f),
            Self::Argument(ref e) => e.fmt(f),
            Self::Incompatible(ref e) => e.fmt(f),
        }
    }
}

impl std::error::Error for ColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Self::Format(ref e) => Some(e),
            Self::Argument(ref e) => Some(e),
            Self::Incompatible(ref e) => Some(e),
        }
    }
}

#[cfg(feature = "pyffi")]
impl From<ColorError> for PyErr {
    fn from(value: ColorError) -> Self {
        match value {
            ColorError::Format(e) => e.into(),
            ColorError::Argument(e) => e.into(),
            ColorError::Incompatible(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{ArgumentError, ColorError, ColorFormatError, IncompatibleColorsError};
    use std::error::Error;

    #[test]
    fn test_display() {
        assert_eq!(
            IncompatibleColorsError::new(8, 16).to_string(),
            "colors should have 8 bits per channel but one has 16"
        );
        assert_eq!(
            ColorError::from(ArgumentError::TooFewSteps).to_string(),
            "gradient should have at least 2 steps"
        );
    }

    #[test]
    fn test_source() {
        let error = ColorError::from(ColorFormatError::MalformedHex);
        let source = error.source().map(|e| e.to_string());
        assert_eq!(source, Some(ColorFormatError::MalformedHex.to_string()));
    }
}
