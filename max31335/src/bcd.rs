//! Packed binary-coded-decimal conversions.

/// Convert a packed BCD register value to binary.
///
/// Non-value bits are stripped with `mask` before conversion.
///
/// # Example
///
/// ```
/// use max31335::bcd;
///
/// // seconds register: bit 7 is not part of the value
/// assert_eq!(bcd::decode(0xD9, 0x7F), 59);
/// assert_eq!(bcd::decode(0x42, 0xFF), 42);
/// ```
#[must_use]
pub const fn decode(byte: u8, mask: u8) -> u8 {
    let byte: u8 = byte & mask;
    (byte >> 4) * 10 + (byte & 0xF)
}

/// Convert a binary value in `0..=99` to packed BCD.
///
/// Values greater than 99 do not fit in two BCD digits; callers validate
/// before encoding.
///
/// # Example
///
/// ```
/// use max31335::bcd;
///
/// assert_eq!(bcd::encode(59), 0x59);
/// assert_eq!(bcd::encode(0), 0x00);
/// ```
#[must_use]
pub const fn encode(bin: u8) -> u8 {
    debug_assert!(bin <= 99);
    ((bin / 10) << 4) | (bin % 10)
}
