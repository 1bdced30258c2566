//! Bitwise reference implementation of the Rocksoft CRC model.
//!
//! The engine is verified against this module. Its structure differs from the
//! engine:
//!
//! - Reflected CRCs (`refin == refout == true`) run LSB-first, shifting right
//!   with the reflected polynomial and reflected initial value. No per-byte
//!   reflection ever happens.
//! - Everything else runs MSB-first in a `u32` with an explicit width mask.
//!
//! Being `const fn`, it also pins known check values at compile time.
//!
//! # CRC Model
//!
//! | Parameter | Description |
//! |-----------|-------------|
//! | `width`   | CRC width in bits (8, 16, 32) |
//! | `poly`    | Generator polynomial, normal form |
//! | `init`    | Initial register value |
//! | `refin`   | Reflect input bytes |
//! | `refout`  | Reflect output before final XOR |
//! | `xorout`  | Final XOR value |

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use crate::{
  params::CrcParams,
  reflect::{reflect_bits, reflect_byte},
};

/// Mask with the low `width` bits set.
#[must_use]
pub const fn width_mask(width: u8) -> u32 {
  if width >= 32 { u32::MAX } else { (1u32 << width) - 1 }
}

/// Bitwise CRC over `data` (LSB-first, reflected form).
///
/// `poly` and `init` must already be reflected. Returns the raw register.
#[must_use]
pub const fn crc_reflected(poly: u32, init: u32, data: &[u8]) -> u32 {
  let mut crc = init;
  let mut i = 0usize;
  while i < data.len() {
    crc ^= data[i] as u32;
    let mut bit = 0u32;
    while bit < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
      bit += 1;
    }
    i += 1;
  }
  crc
}

/// Bitwise CRC over `data` (MSB-first, normal form).
///
/// When `refin` is set, each byte is reflected before it enters the register.
/// Returns the raw register masked to `width` bits.
#[must_use]
pub const fn crc_normal(width: u8, poly: u32, init: u32, refin: bool, data: &[u8]) -> u32 {
  let mask = width_mask(width);
  let top = 1u32 << (width - 1);
  let shift = width - 8;

  let mut crc = init & mask;
  let mut i = 0usize;
  while i < data.len() {
    let byte = if refin { reflect_byte(data[i]) } else { data[i] };
    crc ^= (byte as u32) << shift;
    let mut bit = 0u32;
    while bit < 8 {
      crc = if crc & top != 0 { (crc << 1) ^ poly } else { crc << 1 };
      crc &= mask;
      bit += 1;
    }
    i += 1;
  }
  crc
}

/// Full CRC (init, data, reflection, final XOR) for an arbitrary parameter set.
///
/// Widths other than 8, 16 and 32 are not meaningful here; callers validate.
#[must_use]
pub const fn crc(
  width: u8,
  poly: u32,
  init: u32,
  refin: bool,
  refout: bool,
  xorout: u32,
  data: &[u8],
) -> u32 {
  let mask = width_mask(width);
  let poly = poly & mask;
  let init = init & mask;

  let raw = if refin && refout {
    crc_reflected(reflect_bits(poly, width), reflect_bits(init, width), data)
  } else {
    let raw = crc_normal(width, poly, init, refin, data);
    if refout { reflect_bits(raw, width) } else { raw }
  };

  (raw ^ xorout) & mask
}

/// Reference CRC of `data` under `params`.
#[must_use]
pub const fn compute(params: &CrcParams, data: &[u8]) -> u32 {
  crc(
    params.width,
    params.polynomial,
    params.initial,
    params.reflect_in,
    params.reflect_out,
    params.xor_out,
    data,
  )
}

/// Reference check value (`"123456789"`) for `params`.
#[must_use]
pub const fn check(params: &CrcParams) -> u32 {
  compute(params, traits::CHECK_INPUT)
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

const CHECK_INPUT: &[u8] = traits::CHECK_INPUT;

// CRC-8: poly=0x07 init=0x00 refin=false refout=false xorout=0x00
const _: () = assert!(crc(8, 0x07, 0x00, false, false, 0x00, CHECK_INPUT) == 0xF4);

// CRC-16/XMODEM: poly=0x1021 init=0x0000 refin=false refout=false xorout=0x0000
const _: () = assert!(crc(16, 0x1021, 0x0000, false, false, 0x0000, CHECK_INPUT) == 0x31C3);

// CRC-16/MODBUS: poly=0x8005 init=0xFFFF refin=true refout=true xorout=0x0000
const _: () = assert!(crc(16, 0x8005, 0xFFFF, true, true, 0x0000, CHECK_INPUT) == 0x4B37);

// CRC-32: poly=0x04C11DB7 init=0xFFFFFFFF refin=true refout=true xorout=0xFFFFFFFF
const _: () = assert!(crc(32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, CHECK_INPUT) == 0xCBF4_3926);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn width_masks() {
    assert_eq!(width_mask(8), 0xFF);
    assert_eq!(width_mask(16), 0xFFFF);
    assert_eq!(width_mask(32), 0xFFFF_FFFF);
  }

  #[test]
  fn empty_input_is_init_xor_out() {
    assert_eq!(crc(16, 0x1021, 0x1D0F, false, false, 0x0000, &[]), 0x1D0F);
    assert_eq!(crc(32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, &[]), 0);
    // refout without refin still reflects the untouched init
    assert_eq!(crc(8, 0x07, 0x01, false, true, 0x00, &[]), 0x80);
  }

  #[test]
  fn reflected_and_normal_forms_agree() {
    // For refin == refout == true, the MSB-first path with per-byte reflection
    // and a final register reflection must equal the LSB-first path.
    let data = b"The quick brown fox jumps over the lazy dog";
    let cases: [(u8, u32, u32); 4] = [
      (8, 0x31, 0x00),
      (16, 0x8005, 0xFFFF),
      (16, 0x1021, 0xB2AA),
      (32, 0x1EDC_6F41, 0xFFFF_FFFF),
    ];
    for (width, poly, init) in cases {
      let lsb = crc_reflected(reflect_bits(poly, width), reflect_bits(init, width), data);
      let msb = reflect_bits(crc_normal(width, poly, init, true, data), width);
      assert_eq!(lsb, msb, "width {width} poly {poly:#x}");
    }
  }

  #[test]
  fn incremental_normal() {
    let data = b"The quick brown fox jumps over the lazy dog";
    let oneshot = crc_normal(16, 0x1021, 0xFFFF, false, data);

    for split in 1..data.len() {
      let first = crc_normal(16, 0x1021, 0xFFFF, false, &data[..split]);
      let second = crc_normal(16, 0x1021, first, false, &data[split..]);
      assert_eq!(second, oneshot, "Incremental mismatch at split {split}");
    }
  }

  #[test]
  fn well_known_check_values() {
    // CRC-32/BZIP2
    assert_eq!(crc(32, 0x04C1_1DB7, 0xFFFF_FFFF, false, false, 0xFFFF_FFFF, CHECK_INPUT), 0xFC89_1918);
    // CRC-32C
    assert_eq!(crc(32, 0x1EDC_6F41, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, CHECK_INPUT), 0xE306_9283);
    // CRC-16/ARC
    assert_eq!(crc(16, 0x8005, 0x0000, true, true, 0x0000, CHECK_INPUT), 0xBB3D);
    // CRC-8/MAXIM
    assert_eq!(crc(8, 0x31, 0x00, true, true, 0x00, CHECK_INPUT), 0xA1);
  }

  #[test]
  fn handles_large_input() {
    let data: [u8; 1024] = core::array::from_fn(|i| (i as u8).wrapping_mul(17));
    let _ = crc(8, 0x07, 0x00, false, false, 0x00, &data);
    let _ = crc(16, 0x8005, 0xFFFF, true, true, 0x0000, &data);
    let _ = crc(32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, &data);
  }
}
