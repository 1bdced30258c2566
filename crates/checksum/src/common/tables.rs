//! CRC lookup table generation.
//!
//! A table entry `T[i]` is the register obtained by placing byte `i` in the top
//! 8 bits of an otherwise empty register and running 8 rounds of polynomial
//! division. Because division over GF(2) is linear, the effect of feeding one
//! byte through the bitwise algorithm collapses to a single lookup:
//!
//! ```text
//! crc' = (crc << 8) ^ T[(crc >> (width - 8)) ^ byte]
//! ```

use crate::register::Register;

/// Number of entries in a byte-indexed lookup table.
pub const LUT_SIZE: usize = 256;

/// A byte-indexed lookup table for a `W`-bit register.
pub type LookupTable<W> = [W; LUT_SIZE];

/// Compute a single lookup table entry.
#[inline]
#[must_use]
pub fn table_entry<W: Register>(poly: W, index: u8) -> W {
  let mut crc = W::from_top_byte(index);
  for _ in 0..8 {
    crc = crc.div_round(poly);
  }
  crc
}

/// Build the 256-entry lookup table for `poly`.
///
/// The polynomial is in normal (MSB-first) form without the implicit top bit.
#[must_use]
pub fn build_lookup_table<W: Register>(poly: W) -> LookupTable<W> {
  core::array::from_fn(|i| table_entry(poly, i as u8))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn crc8_table_known_entries() {
    // CRC-8 (poly 0x07): well-known first row
    let table = build_lookup_table(0x07u8);
    assert_eq!(&table[..8], &[0x00, 0x07, 0x0E, 0x09, 0x1C, 0x1B, 0x12, 0x15]);
    assert_eq!(table[255], 0xF3);
  }

  #[test]
  fn crc16_ccitt_table_known_entries() {
    let table = build_lookup_table(0x1021u16);
    assert_eq!(&table[..4], &[0x0000, 0x1021, 0x2042, 0x3063]);
    assert_eq!(table[255], 0x1EF0);
  }

  #[test]
  fn crc32_table_known_entries() {
    // Normal (non-reflected) CRC-32 table, as used by BZIP2/MPEG-2
    let table = build_lookup_table(0x04C1_1DB7u32);
    assert_eq!(table[1], 0x04C1_1DB7);
    assert_eq!(table[2], 0x0982_3B6E);
    assert_eq!(table[255], 0xB1F7_40B4);
  }

  #[test]
  fn entry_one_is_polynomial() {
    assert_eq!(table_entry(0x31u8, 1), 0x31);
    assert_eq!(table_entry(0x8005u16, 1), 0x8005);
    assert_eq!(table_entry(0x1EDC_6F41u32, 1), 0x1EDC_6F41);
  }

  #[test]
  fn tables_are_linear() {
    let t8 = build_lookup_table(0x9Bu8);
    let t16 = build_lookup_table(0x3D65u16);
    let t32 = build_lookup_table(0x8141_41ABu32);
    assert_eq!(t8[0], 0);
    assert_eq!(t16[0], 0);
    assert_eq!(t32[0], 0);
    for a in 0..LUT_SIZE {
      for b in [0x01usize, 0x5A, 0x80, 0xFF] {
        assert_eq!(t8[a ^ b], t8[a] ^ t8[b]);
        assert_eq!(t16[a ^ b], t16[a] ^ t16[b]);
        assert_eq!(t32[a ^ b], t32[a] ^ t32[b]);
      }
    }
  }
}
