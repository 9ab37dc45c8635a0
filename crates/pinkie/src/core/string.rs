use super::max_value;
use crate::error::ColorFormatError;

/// Parse a color in hexadecimal notation.
///
/// Each channel takes `bits / 4` hexadecimal digits. The string must have
/// digits for either three or four channels, optionally preceded by `#`. If
/// the alpha channel is missing, it defaults to the maximum channel value,
/// i.e., the color is opaque. Since every channel has exactly as many bits as
/// its digits can express, parsed channels are always in range.
pub(crate) fn parse_hex(s: &str, bits: u32) -> Result<[u32; 4], ColorFormatError> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let digits = (bits / 4) as usize;

    let count = if s.len() == 3 * digits {
        3
    } else if s.len() == 4 * digits {
        4
    } else {
        return Err(ColorFormatError::UnexpectedLength);
    };

    // from_str_radix() also accepts a leading plus sign.
    if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorFormatError::MalformedHex);
    }

    let mut channels = [max_value(bits); 4];
    for (index, channel) in channels.iter_mut().take(count).enumerate() {
        let t = s
            .get(digits * index..digits * (index + 1))
            .ok_or(ColorFormatError::MalformedHex)?;
        *channel = u32::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;
    }

    Ok(channels)
}

/// Format the channels in upper case hexadecimal notation, zero-padding each
/// channel to `bits / 4` digits.
pub(crate) fn format_hex(channels: &[u32], bits: u32) -> String {
    let width = (bits / 4) as usize;
    channels
        .iter()
        .map(|c| format!("{:0width$X}", c, width = width))
        .collect()
}
