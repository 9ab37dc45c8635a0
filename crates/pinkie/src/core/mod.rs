mod conversion;
mod equality;
mod packing;
mod string;

// conversion
pub(crate) use conversion::{hsla_to_rgba, rgba_to_hsla, rgb_to_cmyk};

// equality
pub use equality::to_eq_bits;

// packing
pub(crate) use packing::{
    check_bits, clamp_channel, mask_packed, max_value, pack, replace_channel, rescale, unpack,
};

// string
pub(crate) use string::{format_hex, parse_hex};
