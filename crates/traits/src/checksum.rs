//! Non-cryptographic checksum trait.
//!
//! A [`Checksum`] is a configured, immutable engine: it is built once and then
//! evaluated over complete buffers. There is no hidden running state between
//! calls, so a shared reference can be used from any number of threads.

use core::fmt::Debug;

/// Standard input for catalogue check values.
pub const CHECK_INPUT: &[u8] = b"123456789";

/// One-shot checksum engine.
///
/// # Usage
///
/// ```rust,ignore
/// use checksum::{Checksum, Crc};
///
/// let modbus = Crc::<u16>::new(0x8005, 0xFFFF, true, true, 0x0000, true);
/// assert_eq!(modbus.calculate(b"123456789"), 0x4B37);
/// ```
///
/// # Implementor Requirements
///
/// - `calculate()` must be a pure function of the engine parameters and `data`
/// - `calculate()` must never return a value wider than `width()` bits
pub trait Checksum {
  /// The checksum output type.
  ///
  /// `u8`, `u16` or `u32` for fixed-width engines; `u32` for engines whose
  /// width is only known at runtime.
  type Output: Copy + Eq + Debug + Default;

  /// Register width in bits.
  #[must_use]
  fn width(&self) -> u8;

  /// Compute the checksum of `data`.
  #[must_use]
  fn calculate(&self, data: &[u8]) -> Self::Output;

  /// Checksum of the ASCII string `"123456789"`.
  ///
  /// This is the "check" value published for every catalogued CRC variant.
  #[inline]
  #[must_use]
  fn check(&self) -> Self::Output {
    self.calculate(CHECK_INPUT)
  }
}
