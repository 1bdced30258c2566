//! CRC algorithm parameters.
//!
//! This module defines the parameter record for a CRC algorithm following the
//! conventions from the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/).
//! Named variants live in [`crate::catalog`].

use traits::ParamsError;

use crate::{
  common::reference::{self, width_mask},
  reflect::reflect_bits,
};

/// CRC algorithm parameters.
///
/// This struct captures all the parameters needed to define a CRC algorithm.
///
/// # Parameters
///
/// - `width`: Number of bits in the CRC register (8, 16 or 32)
/// - `polynomial`: The generator polynomial, normal form, without the implicit high bit
/// - `initial`: Initial value for the CRC register
/// - `reflect_in`: If true, reflect each input byte before processing
/// - `reflect_out`: If true, reflect the final CRC before XOR
/// - `xor_out`: Value to XOR with the final CRC
/// - `check`: CRC of the ASCII string `"123456789"`
///
/// Integer fields are stored as `u32` and masked to `width` bits by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CrcParams {
  /// Catalogue name (e.g. `"CRC-16/MODBUS"`).
  pub name: &'static str,
  /// Other names the same parameter set is known by.
  pub aliases: &'static [&'static str],
  /// Width in bits (8, 16, or 32).
  pub width: u8,
  /// Generator polynomial (without implicit high bit).
  pub polynomial: u32,
  /// Initial value for the CRC register.
  pub initial: u32,
  /// Reflect input bytes before processing.
  pub reflect_in: bool,
  /// Reflect final CRC before XOR.
  pub reflect_out: bool,
  /// XOR value applied to final CRC.
  pub xor_out: u32,
  /// Checksum of `"123456789"`.
  pub check: u32,
}

impl CrcParams {
  /// Build an ad-hoc parameter set.
  ///
  /// Values are masked to `width` bits and the check value is computed with
  /// the bitwise reference, so this is usable in `const` context.
  ///
  /// ```
  /// use checksum::CrcParams;
  ///
  /// const KERMIT: CrcParams = CrcParams::custom(16, 0x1021, 0x0000, true, true, 0x0000);
  /// assert_eq!(KERMIT.check, 0x2189);
  /// ```
  #[must_use]
  pub const fn custom(
    width: u8,
    polynomial: u32,
    initial: u32,
    reflect_in: bool,
    reflect_out: bool,
    xor_out: u32,
  ) -> Self {
    let mask = width_mask(width);
    let mut params = Self {
      name: "custom",
      aliases: &[],
      width,
      polynomial: polynomial & mask,
      initial: initial & mask,
      reflect_in,
      reflect_out,
      xor_out: xor_out & mask,
      check: 0,
    };
    if matches!(width, 8 | 16 | 32) {
      params.check = reference::check(&params);
    }
    params
  }

  /// Same parameters under a different name.
  #[must_use]
  pub const fn named(mut self, name: &'static str) -> Self {
    self.name = name;
    self
  }

  /// Mask with the low `width` bits set.
  #[must_use]
  pub const fn mask(&self) -> u32 {
    width_mask(self.width)
  }

  /// Returns the reflected polynomial (bit-reversed).
  ///
  /// For reflected CRCs, the polynomial is processed in bit-reversed form.
  #[must_use]
  pub const fn polynomial_reflected(&self) -> u32 {
    reflect_bits(self.polynomial, self.width)
  }

  /// Reject widths the engine cannot instantiate.
  pub const fn validate(&self) -> Result<(), ParamsError> {
    match self.width {
      8 | 16 | 32 => Ok(()),
      width => Err(ParamsError::UnsupportedWidth { width }),
    }
  }

  /// Whether `name` matches this record's name or one of its aliases
  /// (ASCII case-insensitive).
  #[must_use]
  pub fn matches_name(&self, name: &str) -> bool {
    let name = name.trim();
    self.name.eq_ignore_ascii_case(name) || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
  }
}
