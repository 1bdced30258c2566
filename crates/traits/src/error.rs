//! Error types for engine construction.
//!
//! Parameter values (polynomial, initial value, output XOR) are masked to the
//! register width rather than rejected. The only construction failures are
//! structural: an unsupported width, a record/register width mismatch, or an
//! unknown catalogue name.

use core::fmt;

/// Invalid CRC engine parameters.
///
/// # Examples
///
/// ```
/// use traits::ParamsError;
///
/// fn validate(width: u8) -> Result<u8, ParamsError> {
///   match width {
///     8 | 16 | 32 => Ok(width),
///     _ => Err(ParamsError::UnsupportedWidth { width }),
///   }
/// }
///
/// assert!(validate(16).is_ok());
/// assert_eq!(validate(24), Err(ParamsError::UnsupportedWidth { width: 24 }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParamsError {
  /// Register width is not one of 8, 16 or 32 bits.
  UnsupportedWidth {
    /// The rejected width.
    width: u8,
  },
  /// A parameter record was applied to a register of a different width.
  WidthMismatch {
    /// Width of the register type.
    expected: u8,
    /// Width declared by the record.
    found: u8,
  },
  /// No catalogued algorithm has the requested name.
  UnknownAlgorithm,
}

impl fmt::Display for ParamsError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      Self::UnsupportedWidth { width } => {
        write!(f, "unsupported CRC width {width} (expected 8, 16 or 32)")
      }
      Self::WidthMismatch { expected, found } => {
        write!(f, "CRC width mismatch: register is {expected}-bit, parameters are {found}-bit")
      }
      Self::UnknownAlgorithm => f.write_str("unknown CRC algorithm"),
    }
  }
}

impl core::error::Error for ParamsError {}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{format, string::ToString};

  use super::*;

  #[test]
  fn display_unsupported_width() {
    let err = ParamsError::UnsupportedWidth { width: 12 };
    assert_eq!(err.to_string(), "unsupported CRC width 12 (expected 8, 16 or 32)");
  }

  #[test]
  fn display_width_mismatch() {
    let err = ParamsError::WidthMismatch { expected: 16, found: 32 };
    assert_eq!(
      err.to_string(),
      "CRC width mismatch: register is 16-bit, parameters are 32-bit"
    );
  }

  #[test]
  fn display_unknown_algorithm() {
    assert_eq!(ParamsError::UnknownAlgorithm.to_string(), "unknown CRC algorithm");
  }

  #[test]
  fn debug_impl() {
    let dbg = format!("{:?}", ParamsError::UnsupportedWidth { width: 64 });
    assert_eq!(dbg, "UnsupportedWidth { width: 64 }");
  }

  #[test]
  fn trait_bounds() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    fn assert_error<T: core::error::Error>() {}

    assert_send::<ParamsError>();
    assert_sync::<ParamsError>();
    assert_error::<ParamsError>();
  }

  #[test]
  fn error_has_no_source() {
    use core::error::Error;

    let err = ParamsError::UnknownAlgorithm;
    assert!(err.source().is_none());
  }

  #[test]
  fn result_err_path() {
    fn lookup() -> Result<(), ParamsError> {
      Err(ParamsError::UnknownAlgorithm)
    }
    let err = lookup().expect_err("lookup must fail");
    assert_eq!(err, ParamsError::UnknownAlgorithm);
  }
}
