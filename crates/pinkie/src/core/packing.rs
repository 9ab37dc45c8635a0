//! Packing four channels into one unsigned integer.
//!
//! A color with `bits` bits per channel occupies the `4 * bits` least
//! significant bits of a `u128`. Red comes first, i.e., in the least
//! significant position, followed by green, blue, and alpha. Every function in
//! this module assumes that `bits` has been validated with [`check_bits`].

use crate::error::ColorFormatError;

/// The largest supported number of bits per channel.
pub(crate) const MAX_BITS: u32 = 32;

/// Validate the number of bits per channel.
pub(crate) const fn check_bits(bits: u32) -> Result<u32, ColorFormatError> {
    if bits == 0 || bits % 4 != 0 || MAX_BITS < bits {
        Err(ColorFormatError::UnsupportedBitDepth)
    } else {
        Ok(bits)
    }
}

/// Determine the maximum channel value for the number of bits per channel.
#[inline]
pub(crate) const fn max_value(bits: u32) -> u32 {
    ((1_u64 << bits) - 1) as u32
}

/// Clamp an arbitrary integer to the channel range `0..=max_value(bits)`.
#[inline]
pub(crate) fn clamp_channel(value: i64, bits: u32) -> u32 {
    value.clamp(0, max_value(bits) as i64) as u32
}

/// Drop all bits beyond the four channels.
#[inline]
pub(crate) const fn mask_packed(value: u128, bits: u32) -> u128 {
    let width = 4 * bits;
    if width == u128::BITS {
        value
    } else {
        value & ((1_u128 << width) - 1)
    }
}

/// Pack the four channels, which must already be in range.
pub(crate) const fn pack(channels: [u32; 4], bits: u32) -> u128 {
    let mut packed = 0_u128;
    let mut index = 0;
    while index < 4 {
        packed |= (channels[index] as u128) << (bits * index as u32);
        index += 1;
    }
    packed
}

/// Unpack the four channels.
pub(crate) const fn unpack(packed: u128, bits: u32) -> [u32; 4] {
    let mask = max_value(bits) as u128;
    let mut channels = [0_u32; 4];
    let mut index = 0;
    while index < 4 {
        channels[index] = ((packed >> (bits * index as u32)) & mask) as u32;
        index += 1;
    }
    channels
}

/// Replace the channel with the given index, which must be `0..=3`.
#[inline]
pub(crate) const fn replace_channel(packed: u128, bits: u32, index: usize, value: u32) -> u128 {
    let shift = bits * index as u32;
    let mask = (max_value(bits) as u128) << shift;
    (packed & !mask) | ((value as u128) << shift)
}

/// Rescale a channel value from one bit depth to another.
///
/// The value is multiplied by `2^to / 2^from`, which amounts to a shift, and
/// clamped to the maximum value for the target depth.
#[inline]
pub(crate) fn rescale(value: u32, from: u32, to: u32) -> u32 {
    if from <= to {
        ((value as u64) << (to - from)).min(max_value(to) as u64) as u32
    } else {
        value >> (from - to)
    }
}

#[cfg(test)]
mod test {
    use super::{check_bits, clamp_channel, mask_packed, max_value, pack, replace_channel, rescale, unpack};
    use crate::error::ColorFormatError;

    #[test]
    fn test_bits() {
        assert_eq!(check_bits(8), Ok(8));
        assert_eq!(check_bits(32), Ok(32));
        assert_eq!(check_bits(0), Err(ColorFormatError::UnsupportedBitDepth));
        assert_eq!(check_bits(6), Err(ColorFormatError::UnsupportedBitDepth));
        assert_eq!(check_bits(36), Err(ColorFormatError::UnsupportedBitDepth));

        assert_eq!(max_value(4), 0xf);
        assert_eq!(max_value(8), 0xff);
        assert_eq!(max_value(16), 0xffff);
        assert_eq!(max_value(32), u32::MAX);
    }

    #[test]
    fn test_packing() {
        let packed = pack([0x11, 0x22, 0x33, 0x44], 8);
        assert_eq!(packed, 0x4433_2211);
        assert_eq!(unpack(packed, 8), [0x11, 0x22, 0x33, 0x44]);

        let packed = replace_channel(packed, 8, 2, 0xcc);
        assert_eq!(unpack(packed, 8), [0x11, 0x22, 0xcc, 0x44]);

        let wide = pack([u32::MAX, 0, 1, u32::MAX], 32);
        assert_eq!(unpack(wide, 32), [u32::MAX, 0, 1, u32::MAX]);
        assert_eq!(mask_packed(wide, 32), wide);
        assert_eq!(mask_packed(0x1_0000_0000_u128 | 0xff, 8), 0xff);
    }

    #[test]
    fn test_clamping_and_rescaling() {
        assert_eq!(clamp_channel(-12, 8), 0);
        assert_eq!(clamp_channel(300, 8), 255);
        assert_eq!(clamp_channel(300, 16), 300);

        assert_eq!(rescale(0xff, 8, 16), 0xff00);
        assert_eq!(rescale(0xff00, 16, 8), 0xff);
        assert_eq!(rescale(0xf, 4, 8), 0xf0);
        assert_eq!(rescale(0xffff, 16, 4), 0xf);
    }
}
