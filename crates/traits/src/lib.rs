//! Core traits for crcmodel.
//!
//! This crate provides the foundational contract that every CRC engine in the
//! workspace conforms to. It is `no_std` compatible and has zero dependencies.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`Checksum`] | One-shot checksum over a complete byte buffer |
//! | [`ParamsError`] | Construction-time parameter rejection |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod checksum;
pub mod error;

pub use checksum::{CHECK_INPUT, Checksum};
pub use error::ParamsError;
