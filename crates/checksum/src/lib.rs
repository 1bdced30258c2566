//! Parameterized CRC-8, CRC-16 and CRC-32 checksums.
//!
//! One engine, [`Crc<W>`], implements the classic (Rocksoft) CRC model for
//! any polynomial, initial value, input/output reflection and output XOR. The
//! register width is the type parameter: `u8`, `u16` or `u32`.
//!
//! # Strategies
//!
//! | Strategy | Selected by | Per byte |
//! |----------|-------------|----------|
//! | table | `use_lut = true` | one 256-entry table lookup |
//! | bitwise | `use_lut = false` | eight shift/XOR rounds |
//!
//! Both strategies are required to produce identical results; the bitwise
//! strategy needs no table memory.
//!
//! # Catalogue
//!
//! | Width | Examples |
//! |-------|----------|
//! | 8 | CRC-8, CRC-8/MAXIM, CRC-8/ROHC |
//! | 16 | CRC-16/MODBUS, CRC-16/XMODEM, CRC-16/X-25 |
//! | 32 | CRC-32, CRC-32C, CRC-32/BZIP2 |
//!
//! See [`catalog`] for the full list.
//!
//! # Example
//!
//! ```rust
//! use checksum::{AnyCrc, Crc, catalog};
//!
//! // Ad-hoc parameters (CRC-32/ISO-HDLC)
//! let crc32 = Crc::<u32>::new(0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, true);
//! assert_eq!(crc32.calculate(b"123456789"), 0xCBF4_3926);
//!
//! // Catalogue record, bitwise strategy
//! let modbus = Crc::<u16>::with_params(&catalog::CRC16_MODBUS, false)?;
//! assert_eq!(modbus.calculate(b"123456789"), 0x4B37);
//!
//! // Width chosen at runtime
//! let any = AnyCrc::from_name("CRC-8")?;
//! assert_eq!(any.calculate(b"123456789"), 0xF4);
//! # Ok::<(), checksum::ParamsError>(())
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded use
//! (environment overrides in [`config`] are then unavailable):
//!
//! ```toml
//! [dependencies]
//! checksum = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod catalog;
mod common;
pub mod config;
mod dynamic;
mod engine;
mod params;
mod reflect;
mod register;

#[doc(hidden)]
pub mod __internal {
  pub use crate::common::reference;
}

pub use common::tables::{LUT_SIZE, LookupTable, build_lookup_table, table_entry};
pub use dynamic::AnyCrc;
pub use engine::{Crc, TableDisplay};
pub use params::CrcParams;
pub use reflect::{REFLECT_TABLE, reflect_bits, reflect_byte};
pub use register::Register;
// Re-export traits for convenience
pub use traits::{CHECK_INPUT, Checksum, ParamsError};
