//! CRC register widths.
//!
//! The engine is generic over [`Register`], which is implemented for exactly
//! three unsigned integer types: `u8`, `u16` and `u32`. Fixing the width at
//! the type level means every mask is implied by the integer type itself and
//! the hot loop never branches on width.

use core::{
  fmt::{Debug, UpperHex},
  hash::Hash,
  ops::BitXor,
};

mod sealed {
  pub trait Sealed {}

  impl Sealed for u8 {}
  impl Sealed for u16 {}
  impl Sealed for u32 {}
}

/// An unsigned integer usable as a CRC register.
///
/// This trait is sealed; it cannot be implemented outside this crate.
pub trait Register:
  sealed::Sealed
  + Copy
  + Eq
  + Hash
  + Default
  + Debug
  + UpperHex
  + BitXor<Output = Self>
  + Send
  + Sync
  + 'static
{
  /// Register width in bits.
  const BITS: u8;

  /// Truncate a wider value to the register width.
  fn truncate(value: u32) -> Self;

  /// Zero-extend to `u32`.
  fn widen(self) -> u32;

  /// Place `byte` in the top 8 bits of the register.
  fn from_top_byte(byte: u8) -> Self;

  /// The top 8 bits of the register.
  fn top_byte(self) -> u8;

  /// Shift left by one byte, discarding bits shifted past the width.
  fn shl_byte(self) -> Self;

  /// One round of polynomial division: shift left one bit and, if the bit
  /// shifted out was set, XOR in `poly`.
  fn div_round(self, poly: Self) -> Self;
}

macro_rules! impl_register {
  ($($ty:ty),* $(,)?) => {$(
    impl Register for $ty {
      const BITS: u8 = <$ty>::BITS as u8;

      #[inline(always)]
      fn truncate(value: u32) -> Self {
        value as $ty
      }

      #[inline(always)]
      fn widen(self) -> u32 {
        u32::from(self)
      }

      #[inline(always)]
      fn from_top_byte(byte: u8) -> Self {
        <$ty>::from(byte) << (<$ty>::BITS - 8)
      }

      #[inline(always)]
      fn top_byte(self) -> u8 {
        (self >> (<$ty>::BITS - 8)) as u8
      }

      #[inline(always)]
      fn shl_byte(self) -> Self {
        // A u8 register loses every bit; `checked_shl` reports that as None.
        self.checked_shl(8).unwrap_or(0)
      }

      #[inline(always)]
      fn div_round(self, poly: Self) -> Self {
        const TOP: $ty = 1 << (<$ty>::BITS - 1);
        if self & TOP != 0 { (self << 1) ^ poly } else { self << 1 }
      }
    }
  )*};
}

impl_register!(u8, u16, u32);
