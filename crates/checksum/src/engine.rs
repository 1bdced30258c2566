//! The parameterized CRC engine.
//!
//! [`Crc<W>`] implements the Rocksoft model for a `W`-bit register with two
//! interchangeable strategies selected at construction:
//!
//! | Strategy | Per byte | Memory |
//! |----------|----------|--------|
//! | table | 1 lookup | 256 × `W` |
//! | bitwise | 8 shift/XOR rounds | 0 |
//!
//! Both strategies produce bit-identical results for the same parameters and
//! input. The engine is immutable after construction and is `Send + Sync`.

// SAFETY: the only indexing is into a 256-entry table with a `u8` index.
#![allow(clippy::indexing_slicing)]

use core::fmt;

use traits::{Checksum, ParamsError};

use crate::{
  catalog,
  common::tables::{LUT_SIZE, LookupTable, build_lookup_table},
  config,
  params::CrcParams,
  reflect::{reflect_bits, reflect_byte},
  register::Register,
};

/// A CRC engine over a `W`-bit register (`u8`, `u16` or `u32`).
///
/// # Examples
///
/// ```
/// use checksum::Crc;
///
/// // CRC-16/MODBUS
/// let modbus = Crc::<u16>::new(0x8005, 0xFFFF, true, true, 0x0000, true);
/// assert_eq!(modbus.calculate(b"123456789"), 0x4B37);
///
/// // Same parameters, bitwise strategy
/// let bitwise = Crc::<u16>::new(0x8005, 0xFFFF, true, true, 0x0000, false);
/// assert_eq!(bitwise.calculate(b"123456789"), 0x4B37);
/// ```
#[derive(Clone)]
pub struct Crc<W: Register> {
  name: &'static str,
  polynomial: W,
  init_value: W,
  reflect_input: bool,
  reflect_output: bool,
  xor_output: W,
  /// `Some` iff the table strategy was requested.
  table: Option<LookupTable<W>>,
}

impl<W: Register> Crc<W> {
  /// Create an engine from explicit parameters.
  ///
  /// Values are already masked by the register type. When `use_lut` is set
  /// the lookup table is built here, once.
  #[must_use]
  pub fn new(
    polynomial: W,
    init_value: W,
    reflect_input: bool,
    reflect_output: bool,
    xor_output: W,
    use_lut: bool,
  ) -> Self {
    let table = if use_lut {
      log::trace!(
        "building {}-bit lookup table for poly {:#x}",
        W::BITS,
        polynomial.widen()
      );
      Some(build_lookup_table(polynomial))
    } else {
      None
    };

    Self {
      name: "custom",
      polynomial,
      init_value,
      reflect_input,
      reflect_output,
      xor_output,
      table,
    }
  }

  /// Create an engine from a parameter record.
  ///
  /// # Errors
  ///
  /// Returns [`ParamsError::WidthMismatch`] if `params.width` differs from
  /// the register width.
  pub fn with_params(params: &CrcParams, use_lut: bool) -> Result<Self, ParamsError> {
    if params.width != W::BITS {
      params.validate()?;
      return Err(ParamsError::WidthMismatch {
        expected: W::BITS,
        found: params.width,
      });
    }

    let mut crc = Self::new(
      W::truncate(params.polynomial),
      W::truncate(params.initial),
      params.reflect_in,
      params.reflect_out,
      W::truncate(params.xor_out),
      use_lut,
    );
    crc.name = params.name;
    Ok(crc)
  }

  /// Create an engine from a parameter record using the configured default
  /// strategy (see [`config`]).
  ///
  /// # Errors
  ///
  /// See [`with_params`](Self::with_params).
  pub fn preset(params: &CrcParams) -> Result<Self, ParamsError> {
    Self::with_params(params, config::get().use_lut())
  }

  /// Create an engine for a catalogued variant, by name or alias.
  ///
  /// ```
  /// use checksum::Crc;
  ///
  /// let crc32 = Crc::<u32>::from_name("CRC-32")?;
  /// assert_eq!(crc32.calculate(b"123456789"), 0xCBF4_3926);
  ///
  /// assert!(Crc::<u16>::from_name("CRC-32").is_err());
  /// # Ok::<(), checksum::ParamsError>(())
  /// ```
  ///
  /// # Errors
  ///
  /// [`ParamsError::UnknownAlgorithm`] if the name is not catalogued,
  /// [`ParamsError::WidthMismatch`] if it names a variant of another width.
  pub fn from_name(name: &str) -> Result<Self, ParamsError> {
    let params = catalog::find(name).ok_or(ParamsError::UnknownAlgorithm)?;
    Self::preset(params)
  }

  /// Compute the CRC of `data`.
  ///
  /// Empty input yields the initial value (reflected if `reflect_output`)
  /// XOR the output mask.
  #[must_use]
  pub fn calculate(&self, data: &[u8]) -> W {
    let crc = match &self.table {
      Some(table) => self.update_table(table, data),
      None => self.update_bitwise(data),
    };
    self.finalize(crc)
  }

  #[inline]
  fn input_byte(&self, byte: u8) -> u8 {
    if self.reflect_input { reflect_byte(byte) } else { byte }
  }

  #[inline]
  fn update_table(&self, table: &LookupTable<W>, data: &[u8]) -> W {
    let mut crc = self.init_value;
    for &byte in data {
      let index = crc.top_byte() ^ self.input_byte(byte);
      crc = crc.shl_byte() ^ table[usize::from(index)];
    }
    crc
  }

  #[inline]
  fn update_bitwise(&self, data: &[u8]) -> W {
    let mut crc = self.init_value;
    for &byte in data {
      crc = crc ^ W::from_top_byte(self.input_byte(byte));
      for _ in 0..8 {
        crc = crc.div_round(self.polynomial);
      }
    }
    crc
  }

  #[inline]
  fn finalize(&self, crc: W) -> W {
    let crc = if self.reflect_output {
      W::truncate(reflect_bits(crc.widen(), W::BITS))
    } else {
      crc
    };
    crc ^ self.xor_output
  }

  /// Catalogue name, or `"custom"` for ad-hoc engines.
  #[must_use]
  pub const fn name(&self) -> &'static str {
    self.name
  }

  /// Generator polynomial (normal form).
  #[must_use]
  pub const fn polynomial(&self) -> W {
    self.polynomial
  }

  /// Initial register value.
  #[must_use]
  pub const fn init_value(&self) -> W {
    self.init_value
  }

  /// Whether input bytes are reflected.
  #[must_use]
  pub const fn reflect_input(&self) -> bool {
    self.reflect_input
  }

  /// Whether the final register is reflected.
  #[must_use]
  pub const fn reflect_output(&self) -> bool {
    self.reflect_output
  }

  /// Final XOR mask.
  #[must_use]
  pub const fn xor_output(&self) -> W {
    self.xor_output
  }

  /// Whether the table strategy is in use.
  #[must_use]
  pub const fn uses_lut(&self) -> bool {
    self.table.is_some()
  }

  /// The lookup table, if the table strategy is in use.
  #[must_use]
  pub const fn lookup_table(&self) -> Option<&LookupTable<W>> {
    self.table.as_ref()
  }

  /// Name of the computation strategy: `"table"` or `"bitwise"`.
  #[must_use]
  pub const fn backend_name(&self) -> &'static str {
    if self.uses_lut() { "table" } else { "bitwise" }
  }

  /// The engine's parameters as a record (check value recomputed).
  #[must_use]
  pub fn params(&self) -> CrcParams {
    CrcParams {
      name: self.name,
      aliases: &[],
      width: W::BITS,
      polynomial: self.polynomial.widen(),
      initial: self.init_value.widen(),
      reflect_in: self.reflect_input,
      reflect_out: self.reflect_output,
      xor_out: self.xor_output.widen(),
      check: self.calculate(traits::CHECK_INPUT).widen(),
    }
  }

  /// A `Display` adapter that prints the lookup table, 8 entries per row.
  ///
  /// Prints nothing when the engine uses the bitwise strategy.
  #[must_use]
  pub fn table_display(&self) -> TableDisplay<'_, W> {
    TableDisplay { table: self.table.as_ref() }
  }
}

impl<W: Register> Checksum for Crc<W> {
  type Output = W;

  #[inline]
  fn width(&self) -> u8 {
    W::BITS
  }

  #[inline]
  fn calculate(&self, data: &[u8]) -> W {
    Crc::calculate(self, data)
  }
}

/// Number of hex digits for a `bits`-wide value.
const fn hex_digits(bits: u8) -> usize {
  (bits as usize).div_ceil(4)
}

/// `<NAME : Poly(0x8005), Init(0xFFFF), Ref_In(true), Ref_Out(true), XorOut(0x0000), LUT(true)>`
impl<W: Register> fmt::Display for Crc<W> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let digits = hex_digits(W::BITS);
    write!(
      f,
      "<{} : Poly(0x{:0digits$X}), Init(0x{:0digits$X}), Ref_In({}), Ref_Out({}), XorOut(0x{:0digits$X}), LUT({})>",
      self.name,
      self.polynomial,
      self.init_value,
      self.reflect_input,
      self.reflect_output,
      self.xor_output,
      self.uses_lut(),
    )
  }
}

impl<W: Register> fmt::Debug for Crc<W> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Crc")
      .field("name", &self.name)
      .field("width", &W::BITS)
      .field("polynomial", &format_args!("{:#X}", self.polynomial))
      .field("init_value", &format_args!("{:#X}", self.init_value))
      .field("reflect_input", &self.reflect_input)
      .field("reflect_output", &self.reflect_output)
      .field("xor_output", &format_args!("{:#X}", self.xor_output))
      .field("backend", &self.backend_name())
      .finish()
  }
}

/// Lookup table printer returned by [`Crc::table_display`].
#[derive(Clone, Copy)]
pub struct TableDisplay<'a, W: Register> {
  table: Option<&'a LookupTable<W>>,
}

impl<W: Register> fmt::Display for TableDisplay<'_, W> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    const PER_ROW: usize = 8;

    let Some(table) = self.table else {
      return Ok(());
    };
    let digits = hex_digits(W::BITS);
    for row in table.chunks(PER_ROW) {
      for entry in row {
        write!(f, "0x{entry:0digits$X}, ")?;
      }
      writeln!(f)?;
    }
    Ok(())
  }
}

impl<W: Register> fmt::Debug for TableDisplay<'_, W> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("TableDisplay")
      .field("rows", &self.table.map_or(0, |_| LUT_SIZE / 8))
      .finish()
  }
}

#[cfg(test)]
mod tests {
  extern crate std;

  use std::{format, string::ToString, vec::Vec};

  use super::*;
  use crate::catalog::{CRC8, CRC16_MODBUS, CRC16_XMODEM, CRC32};

  const CHECK: &[u8] = b"123456789";

  #[test]
  fn known_vectors_both_strategies() {
    for use_lut in [false, true] {
      assert_eq!(Crc::<u8>::new(0x07, 0x00, false, false, 0x00, use_lut).calculate(CHECK), 0xF4);
      assert_eq!(Crc::<u16>::new(0x1021, 0x0000, false, false, 0x0000, use_lut).calculate(CHECK), 0x31C3);
      assert_eq!(Crc::<u16>::new(0x8005, 0xFFFF, true, true, 0x0000, use_lut).calculate(CHECK), 0x4B37);
      assert_eq!(
        Crc::<u32>::new(0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, use_lut).calculate(CHECK),
        0xCBF4_3926
      );
    }
  }

  #[test]
  fn empty_input_identity() {
    let crc = Crc::<u16>::new(0x1021, 0x1D0F, false, false, 0x0000, true);
    assert_eq!(crc.calculate(&[]), 0x1D0F);

    let crc = Crc::<u16>::new(0x1021, 0x1D0F, false, true, 0x00FF, false);
    assert_eq!(crc.calculate(&[]), 0x1D0F_u16.reverse_bits() ^ 0x00FF);

    let crc = Crc::<u32>::new(0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, true);
    assert_eq!(crc.calculate(&[]), 0);
  }

  #[test]
  fn crc8_table_path_handles_full_shift() {
    // For an 8-bit register `crc << 8` is zero and the index is `crc ^ byte`.
    let table = Crc::<u8>::new(0x31, 0xFF, false, false, 0x00, true);
    let bitwise = Crc::<u8>::new(0x31, 0xFF, false, false, 0x00, false);
    let data: Vec<u8> = (0u8..=255).collect();
    assert_eq!(table.calculate(&data), bitwise.calculate(&data));
  }

  #[test]
  fn with_params_width_checks() {
    assert!(Crc::<u16>::with_params(&CRC16_MODBUS, true).is_ok());
    assert_eq!(
      Crc::<u8>::with_params(&CRC32, true).unwrap_err(),
      ParamsError::WidthMismatch { expected: 8, found: 32 }
    );
    let odd = CrcParams::custom(24, 0x86_4CFB, 0xB7_04CE, false, false, 0);
    assert_eq!(
      Crc::<u32>::with_params(&odd, false).unwrap_err(),
      ParamsError::UnsupportedWidth { width: 24 }
    );
  }

  #[test]
  fn with_params_masks_wide_values() {
    let params = CrcParams {
      polynomial: 0xFFFF_1021,
      initial: 0xABCD_0000,
      xor_out: 0x1_0000,
      ..CRC16_XMODEM
    };
    let crc = Crc::<u16>::with_params(&params, true).unwrap();
    assert_eq!(crc.polynomial(), 0x1021);
    assert_eq!(crc.init_value(), 0x0000);
    assert_eq!(crc.xor_output(), 0x0000);
    assert_eq!(crc.calculate(CHECK), 0x31C3);
  }

  #[test]
  fn from_name_resolves_aliases() {
    let crc = Crc::<u32>::from_name("crc-32/iscsi").unwrap();
    assert_eq!(crc.name(), "CRC-32C");
    assert_eq!(crc.calculate(CHECK), 0xE306_9283);
    assert_eq!(Crc::<u32>::from_name("nope").unwrap_err(), ParamsError::UnknownAlgorithm);
  }

  #[test]
  fn lookup_table_presence_follows_flag() {
    let lut = Crc::<u8>::with_params(&CRC8, true).unwrap();
    let bit = Crc::<u8>::with_params(&CRC8, false).unwrap();
    assert!(lut.uses_lut());
    assert_eq!(lut.backend_name(), "table");
    assert_eq!(lut.lookup_table().map(|t| t[1]), Some(0x07));
    assert!(!bit.uses_lut());
    assert_eq!(bit.backend_name(), "bitwise");
    assert!(bit.lookup_table().is_none());
  }

  #[test]
  fn params_round_trip() {
    let crc = Crc::<u16>::with_params(&CRC16_MODBUS, false).unwrap();
    let params = crc.params();
    assert_eq!(params.name, CRC16_MODBUS.name);
    assert_eq!(params.width, 16);
    assert_eq!(params.polynomial, CRC16_MODBUS.polynomial);
    assert_eq!(params.initial, CRC16_MODBUS.initial);
    assert_eq!(params.check, CRC16_MODBUS.check);
  }

  #[test]
  fn display_descriptor() {
    let crc = Crc::<u16>::with_params(&CRC16_MODBUS, true).unwrap();
    assert_eq!(
      crc.to_string(),
      "<CRC-16/MODBUS : Poly(0x8005), Init(0xFFFF), Ref_In(true), Ref_Out(true), XorOut(0x0000), LUT(true)>"
    );

    let crc = Crc::<u8>::new(0x07, 0x00, false, false, 0x55, false);
    assert_eq!(
      crc.to_string(),
      "<custom : Poly(0x07), Init(0x00), Ref_In(false), Ref_Out(false), XorOut(0x55), LUT(false)>"
    );

    let crc = Crc::<u32>::with_params(&CRC32, false).unwrap();
    assert_eq!(
      crc.to_string(),
      "<CRC-32 : Poly(0x04C11DB7), Init(0xFFFFFFFF), Ref_In(true), Ref_Out(true), XorOut(0xFFFFFFFF), LUT(false)>"
    );
  }

  #[test]
  fn debug_mentions_backend() {
    let crc = Crc::<u8>::with_params(&CRC8, true).unwrap();
    let dbg = format!("{crc:?}");
    assert!(dbg.contains("backend: \"table\""), "{dbg}");
    assert!(dbg.contains("polynomial: 0x7"), "{dbg}");
  }

  #[test]
  fn table_display_rows() {
    let crc = Crc::<u8>::with_params(&CRC8, true).unwrap();
    let text = crc.table_display().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 32);
    assert_eq!(lines[0], "0x00, 0x07, 0x0E, 0x09, 0x1C, 0x1B, 0x12, 0x15, ");

    let crc = Crc::<u32>::with_params(&CRC32, true).unwrap();
    let text = crc.table_display().to_string();
    assert!(text.starts_with("0x00000000, 0x04C11DB7, 0x09823B6E, "));

    let bitwise = Crc::<u16>::with_params(&CRC16_MODBUS, false).unwrap();
    assert_eq!(bitwise.table_display().to_string(), "");
  }

  #[test]
  fn checksum_trait_check() {
    fn check_of<C: Checksum>(c: &C) -> C::Output {
      c.check()
    }
    let crc = Crc::<u16>::with_params(&CRC16_XMODEM, true).unwrap();
    assert_eq!(check_of(&crc), 0x31C3);
    assert_eq!(Checksum::width(&crc), 16);
  }

  #[test]
  fn engine_is_send_sync_clone() {
    fn assert_send_sync<T: Send + Sync + Clone>() {}
    assert_send_sync::<Crc<u8>>();
    assert_send_sync::<Crc<u16>>();
    assert_send_sync::<Crc<u32>>();
  }

  #[test]
  fn shared_across_threads() {
    let crc = Crc::<u32>::with_params(&CRC32, true).unwrap();
    let crc = &crc;
    std::thread::scope(|s| {
      let handles: Vec<_> = (0..4).map(|_| s.spawn(move || crc.calculate(CHECK))).collect();
      for h in handles {
        assert_eq!(h.join().unwrap(), 0xCBF4_3926);
      }
    });
  }
}
