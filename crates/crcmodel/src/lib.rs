//! Parameterized CRC checksums in pure Rust.
//!
//! `crcmodel` computes CRC-8, CRC-16 and CRC-32 for any set of Rocksoft model
//! parameters, with a byte-wise lookup table or a table-free bitwise
//! strategy. Zero dependencies beyond `log`, `no_std` compatible.
//!
//! # Quick Start
//!
//! ```
//! use crcmodel::{AnyCrc, Checksum, Crc, catalog};
//!
//! // Explicit parameters
//! let crc = Crc::<u16>::new(0x8005, 0xFFFF, true, true, 0x0000, true);
//! assert_eq!(crc.calculate(b"123456789"), 0x4B37);
//!
//! // Named variant
//! let crc32 = Crc::<u32>::with_params(&catalog::CRC32, false)?;
//! assert_eq!(crc32.check(), 0xCBF4_3926);
//!
//! // Runtime width
//! let any = AnyCrc::new(8, 0x07, 0x00, false, false, 0x00, true)?;
//! assert_eq!(any.calculate(b"123456789"), 0xF4);
//! # Ok::<(), crcmodel::ParamsError>(())
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | Enables the `CRCMODEL_STRATEGY` environment override |
//!
//! ## `no_std` Usage
//!
//! ```toml
//! [dependencies]
//! crcmodel = { version = "0.1", default-features = false }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

pub use checksum::{
  AnyCrc, CHECK_INPUT, Checksum, Crc, CrcParams, LUT_SIZE, LookupTable, ParamsError, REFLECT_TABLE, Register,
  TableDisplay, build_lookup_table, catalog, config, reflect_bits, reflect_byte, table_entry,
};
