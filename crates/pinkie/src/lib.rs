//! # Pinkie 🩷
//!
//! Pinkie packs colors into integers and then does colorful things with them.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. Enable the `pyffi` feature for a version that also covers Python
integration."
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**."
)]
//!
//!
//! ## 1. Overview
//!
//! Pinkie's main abstractions are:
//!
//!   * [`Rgba`] is a **packed color**. It stores red, green, blue, and alpha
//!     channels in a single unsigned integer with a configurable number of
//!     bits per channel. Its methods cover channel access, hexadecimal
//!     formatting, bit depth conversion, perceived brightness, color
//!     harmonies, and nearest/furthest color search.
//!   * [`Hsla`] and [`Cmyk`] are the **alternative color models**. HSLA is
//!     convertible in both directions, CMYK only from RGBA.
//!   * [`BlendMode`] enumerates the twelve **separable blend modes**, from
//!     [`BlendMode::Normal`] to [`BlendMode::Exclusion`], and
//!     [`Rgba::blend`] composes two colors with them.
//!   * [`Palette`] is an **ordered collection** of colors with the same bit
//!     depth. It comes with generators for the 216 web-safe colors, random
//!     colors, and linear gradients.
//!
//!
//! ## 2. Packed Colors
//!
//! Create colors from hexadecimal strings, integers, or channel sequences.
//! Channel values outside the range for the bit depth are clamped:
//!
//! ```
//! # use pinkie::Rgba;
//! let pink = Rgba::from_hex("#ff526c", 8)?;
//! assert_eq!(pink.rgb(), [255, 82, 108]);
//! assert_eq!(pink.alpha(), 255);
//!
//! let clamped = Rgba::from_channels(&[300, -5, 108], 8)?;
//! assert_eq!(clamped.rgb(), [255, 0, 108]);
//!
//! let deep = pink.convert_depth(16)?;
//! assert_eq!(deep.to_hex(), "FF0052006C00");
//! # Ok::<(), pinkie::error::ColorFormatError>(())
//! ```
//!
//!
//! ## 3. Harmonies and Blending
//!
//! Harmonies rotate the hue in HSLA and convert back:
//!
//! ```
//! # use pinkie::{BlendMode, Rgba};
//! let pink = Rgba::rgb8(255, 82, 108);
//! assert_eq!(pink.complementary().to_hex(), "52FFE5");
//!
//! let [left, right] = pink.triadic();
//! assert_eq!(left.to_hex(), "6CFF52");
//! assert_eq!(right.to_hex(), "526CFF");
//!
//! let blended = pink.blend(&Rgba::rgb8(0, 0, 255), BlendMode::Normal)?;
//! assert_eq!(blended.to_hex(), "0000FF");
//! # Ok::<(), pinkie::error::IncompatibleColorsError>(())
//! ```
//!
//!
//! ## 4. Feature Flags
//!
//!   * `f64` (default) makes [`Float`] an `f64` instead of an `f32`.
//!   * `rand` (default) enables random colors through the `rand` crate.
//!   * `pyffi` builds the Python extension module through PyO3.
//!
//! Pinkie emits `debug` and `trace` events through `tracing`, but never
//! installs a subscriber.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod blend;
mod core;
pub mod error;
mod model;
mod palette;
mod rgba;

pub use blend::{BlendMode, BlendModeIterator};
#[doc(hidden)]
pub use core::to_eq_bits;
pub use model::{Cmyk, Hsla};
pub use palette::{Palette, PaletteIterator, WEB_COLORS};
pub use rgba::Rgba;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// Initialize the Python module.
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn pinkie(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<BlendMode>()?;
    m.add_class::<BlendModeIterator>()?;
    m.add_class::<Cmyk>()?;
    m.add_class::<Hsla>()?;
    m.add_class::<Palette>()?;
    m.add_class::<PaletteIterator>()?;
    m.add_class::<Rgba>()?;
    Ok(())
}
