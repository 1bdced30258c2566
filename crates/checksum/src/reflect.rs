//! Bit reflection.
//!
//! "Reflected" means bit-reversed: bit 0 of the input becomes bit `width - 1`
//! of the output. CRC variants that process data LSB-first are modelled by
//! reflecting every input byte and, at the end, the whole register.

// SAFETY: indexing a 256-entry table with a `u8` (or a `while i < 256` index)
// is always in bounds. Clippy cannot prove this in const fn contexts.
#![allow(clippy::indexing_slicing)]

/// Reflect (bit-reverse) the lower `width` bits of `value`.
///
/// Bits above `width` are ignored. `width` values above 32 are clamped.
///
/// ```
/// use checksum::reflect_bits;
///
/// assert_eq!(reflect_bits(0b0001, 4), 0b1000);
/// assert_eq!(reflect_bits(0x04C1_1DB7, 32), 0xEDB8_8320);
/// ```
#[must_use]
pub const fn reflect_bits(value: u32, width: u8) -> u32 {
  let width = if width > 32 { 32 } else { width };
  let mut result = 0u32;
  let mut i = 0u8;
  while i < width {
    if (value >> i) & 1 != 0 {
      result |= 1 << (width - 1 - i);
    }
    i += 1;
  }
  result
}

/// Byte bit-reversal table: `REFLECT_TABLE[b]` is `b` with MSB and LSB swapped.
pub const REFLECT_TABLE: [u8; 256] = {
  let mut table = [0u8; 256];
  let mut i = 0usize;
  while i < 256 {
    table[i] = reflect_bits(i as u32, 8) as u8;
    i += 1;
  }
  table
};

/// Reflect a single byte via [`REFLECT_TABLE`].
#[inline(always)]
#[must_use]
pub const fn reflect_byte(byte: u8) -> u8 {
  REFLECT_TABLE[byte as usize]
}
