//! Common building blocks shared by the engine and its test oracles.
//!
//! - Lookup table construction for every register width
//! - A const-evaluable bitwise reference implementation

pub mod reference;
pub mod tables;
