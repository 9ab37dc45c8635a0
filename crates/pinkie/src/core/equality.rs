use crate::{Bits, Float};

/// The factor for reducing precision before comparing floating point numbers.
#[cfg(feature = "f64")]
const ROUNDING_FACTOR: Float = 1e9;
#[cfg(not(feature = "f64"))]
const ROUNDING_FACTOR: Float = 1e3;

/// Assert that two floating point quantities are equal up to rounding.
///
/// Both quantities are reduced with [`to_eq_bits`] before comparison, which
/// treats not-a-number as zero, ignores the sign of zero, and drops digits
/// beyond the ninth decimal (the third with `f32`).
///
/// # Panics
///
/// This macro panics if the reduced quantities differ. The message shows both
/// original quantities on separate lines.
#[macro_export]
macro_rules! assert_close_enough {
    ($left:expr, $right:expr $(,)?) => {
        let (left, right) = ($left, $right);
        assert_eq!(
            $crate::to_eq_bits(left),
            $crate::to_eq_bits(right),
            "quantities differ:\n{:?}\n{:?}",
            left,
            right
        );
    };
}

/// Reduce a floating point number to bits suitable for equality testing.
///
/// This function is public only so that [`assert_close_enough`] can reach it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(value: Float) -> Bits {
    let value = if value.is_nan() {
        0.0
    } else {
        (ROUNDING_FACTOR * value).round()
    };

    // Adding positive zero turns negative zero positive.
    (value + 0.0).to_bits()
}

#[cfg(test)]
mod test {
    use super::to_eq_bits;
    use crate::Float;

    #[test]
    fn test_to_eq_bits() {
        assert_eq!(to_eq_bits(Float::NAN), to_eq_bits(0.0));
        assert_eq!(to_eq_bits(-0.0), to_eq_bits(0.0));
        assert_eq!(to_eq_bits(0.1 + 0.2), to_eq_bits(0.3));
        assert_ne!(to_eq_bits(0.3), to_eq_bits(0.31));
    }
}
