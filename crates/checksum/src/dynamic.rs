//! Runtime-width CRC engine.
//!
//! [`AnyCrc`] wraps one of the three fixed-width engines, selected once at
//! construction from a width known only at runtime (a catalogue record, a
//! configuration file, a command line). Results are widened to `u32`.

use core::fmt;

use traits::{Checksum, ParamsError};

use crate::{catalog, config, engine::Crc, params::CrcParams};

/// A CRC engine whose register width is chosen at runtime.
///
/// ```
/// use checksum::AnyCrc;
///
/// let crc = AnyCrc::new(16, 0x1021, 0x0000, false, false, 0x0000, true)?;
/// assert_eq!(crc.calculate(b"123456789"), 0x31C3);
///
/// assert!(AnyCrc::new(24, 0x864CFB, 0xB704CE, false, false, 0, true).is_err());
/// # Ok::<(), checksum::ParamsError>(())
/// ```
#[derive(Clone, Debug)]
pub enum AnyCrc {
  /// 8-bit register.
  Crc8(Crc<u8>),
  /// 16-bit register.
  Crc16(Crc<u16>),
  /// 32-bit register.
  Crc32(Crc<u32>),
}

impl AnyCrc {
  /// Create an engine of the given `width` from explicit parameters.
  ///
  /// `polynomial`, `init_value` and `xor_output` are masked to `width` bits.
  ///
  /// # Errors
  ///
  /// [`ParamsError::UnsupportedWidth`] unless `width` is 8, 16 or 32.
  pub fn new(
    width: u8,
    polynomial: u32,
    init_value: u32,
    reflect_input: bool,
    reflect_output: bool,
    xor_output: u32,
    use_lut: bool,
  ) -> Result<Self, ParamsError> {
    let params = CrcParams::custom(width, polynomial, init_value, reflect_input, reflect_output, xor_output);
    Self::from_params(&params, use_lut)
  }

  /// Create an engine from a parameter record.
  ///
  /// # Errors
  ///
  /// [`ParamsError::UnsupportedWidth`] unless `params.width` is 8, 16 or 32.
  pub fn from_params(params: &CrcParams, use_lut: bool) -> Result<Self, ParamsError> {
    params.validate()?;
    Ok(match params.width {
      8 => Self::Crc8(Crc::with_params(params, use_lut)?),
      16 => Self::Crc16(Crc::with_params(params, use_lut)?),
      _ => Self::Crc32(Crc::with_params(params, use_lut)?),
    })
  }

  /// Create an engine from a parameter record using the configured default
  /// strategy.
  ///
  /// # Errors
  ///
  /// See [`from_params`](Self::from_params).
  pub fn preset(params: &CrcParams) -> Result<Self, ParamsError> {
    Self::from_params(params, config::get().use_lut())
  }

  /// Create an engine for a catalogued variant, by name or alias.
  ///
  /// # Errors
  ///
  /// [`ParamsError::UnknownAlgorithm`] if the name is not catalogued.
  pub fn from_name(name: &str) -> Result<Self, ParamsError> {
    let params = catalog::find(name).ok_or(ParamsError::UnknownAlgorithm)?;
    Self::preset(params)
  }

  /// Compute the CRC of `data`, widened to `u32`.
  #[must_use]
  pub fn calculate(&self, data: &[u8]) -> u32 {
    match self {
      Self::Crc8(crc) => u32::from(crc.calculate(data)),
      Self::Crc16(crc) => u32::from(crc.calculate(data)),
      Self::Crc32(crc) => crc.calculate(data),
    }
  }

  /// Register width in bits.
  #[must_use]
  pub const fn width(&self) -> u8 {
    match self {
      Self::Crc8(_) => 8,
      Self::Crc16(_) => 16,
      Self::Crc32(_) => 32,
    }
  }

  /// Catalogue name, or `"custom"`.
  #[must_use]
  pub const fn name(&self) -> &'static str {
    match self {
      Self::Crc8(crc) => crc.name(),
      Self::Crc16(crc) => crc.name(),
      Self::Crc32(crc) => crc.name(),
    }
  }

  /// Name of the computation strategy: `"table"` or `"bitwise"`.
  #[must_use]
  pub const fn backend_name(&self) -> &'static str {
    match self {
      Self::Crc8(crc) => crc.backend_name(),
      Self::Crc16(crc) => crc.backend_name(),
      Self::Crc32(crc) => crc.backend_name(),
    }
  }

  /// The engine's parameters as a record.
  #[must_use]
  pub fn params(&self) -> CrcParams {
    match self {
      Self::Crc8(crc) => crc.params(),
      Self::Crc16(crc) => crc.params(),
      Self::Crc32(crc) => crc.params(),
    }
  }
}

impl Checksum for AnyCrc {
  type Output = u32;

  #[inline]
  fn width(&self) -> u8 {
    AnyCrc::width(self)
  }

  #[inline]
  fn calculate(&self, data: &[u8]) -> u32 {
    AnyCrc::calculate(self, data)
  }
}

impl fmt::Display for AnyCrc {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Crc8(crc) => fmt::Display::fmt(crc, f),
      Self::Crc16(crc) => fmt::Display::fmt(crc, f),
      Self::Crc32(crc) => fmt::Display::fmt(crc, f),
    }
  }
}

impl From<Crc<u8>> for AnyCrc {
  fn from(crc: Crc<u8>) -> Self {
    Self::Crc8(crc)
  }
}

impl From<Crc<u16>> for AnyCrc {
  fn from(crc: Crc<u16>) -> Self {
    Self::Crc16(crc)
  }
}

impl From<Crc<u32>> for AnyCrc {
  fn from(crc: Crc<u32>) -> Self {
    Self::Crc32(crc)
  }
}

#[cfg(test)]
mod tests {
  extern crate std;

  use std::string::ToString;

  use super::*;
  use crate::catalog::{CATALOG, CRC8_MAXIM, CRC16_MODBUS};

  #[test]
  fn new_rejects_unsupported_widths() {
    for width in [0u8, 4, 7, 12, 24, 31, 64] {
      assert_eq!(
        AnyCrc::new(width, 0x07, 0, false, false, 0, true).unwrap_err(),
        ParamsError::UnsupportedWidth { width }
      );
    }
  }

  #[test]
  fn new_masks_to_width() {
    let crc = AnyCrc::new(8, 0xFF07, 0xFF00, false, false, 0xAB00, true).unwrap();
    let params = crc.params();
    assert_eq!(params.polynomial, 0x07);
    assert_eq!(params.initial, 0x00);
    assert_eq!(params.xor_out, 0x00);
    assert_eq!(crc.calculate(b"123456789"), 0xF4);
  }

  #[test]
  fn dispatches_by_width() {
    let c8 = AnyCrc::from_params(&CRC8_MAXIM, false).unwrap();
    let c16 = AnyCrc::from_params(&CRC16_MODBUS, true).unwrap();
    assert!(matches!(c8, AnyCrc::Crc8(_)));
    assert!(matches!(c16, AnyCrc::Crc16(_)));
    assert_eq!(c8.width(), 8);
    assert_eq!(c16.width(), 16);
    assert_eq!(c8.backend_name(), "bitwise");
    assert_eq!(c16.backend_name(), "table");
  }

  #[test]
  fn whole_catalog_through_any() {
    for params in CATALOG {
      for use_lut in [false, true] {
        let crc = AnyCrc::from_params(params, use_lut).unwrap();
        assert_eq!(crc.check(), params.check, "{} lut={use_lut}", params.name);
        assert_eq!(crc.name(), params.name);
      }
    }
  }

  #[test]
  fn from_name_unknown() {
    assert_eq!(AnyCrc::from_name("CRC-5/USB").unwrap_err(), ParamsError::UnknownAlgorithm);
    assert_eq!(AnyCrc::from_name("CRC-32/POSIX").unwrap().width(), 32);
  }

  #[test]
  fn display_delegates() {
    let crc = AnyCrc::from(Crc::<u16>::with_params(&CRC16_MODBUS, false).unwrap());
    assert_eq!(
      crc.to_string(),
      "<CRC-16/MODBUS : Poly(0x8005), Init(0xFFFF), Ref_In(true), Ref_Out(true), XorOut(0x0000), LUT(false)>"
    );
  }
}
