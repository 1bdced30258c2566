//! Basic checksum usage: ad-hoc parameters, catalogue lookups, runtime width.
//!
//! Run with: `cargo run --example basic -p checksum`

use checksum::{AnyCrc, Checksum, Crc, ParamsError, catalog};

fn main() -> Result<(), ParamsError> {
  println!("=== Checksum Basic Examples ===\n");

  explicit_parameters();
  catalogue_lookups()?;
  runtime_width()?;
  Ok(())
}

/// Build engines straight from the six model parameters.
fn explicit_parameters() {
  println!("--- Explicit Parameters ---\n");

  let data = b"123456789";

  // CRC-8 (SMBus)
  let crc8 = Crc::<u8>::new(0x07, 0x00, false, false, 0x00, true);
  println!("CRC-8:          0x{:02X}", crc8.calculate(data));
  assert_eq!(crc8.calculate(data), 0xF4);

  // CRC-16/XMODEM
  let xmodem = Crc::<u16>::new(0x1021, 0x0000, false, false, 0x0000, true);
  println!("CRC-16/XMODEM:  0x{:04X}", xmodem.calculate(data));
  assert_eq!(xmodem.calculate(data), 0x31C3);

  // CRC-32 (ISO-HDLC), bitwise strategy: no lookup table is built
  let crc32 = Crc::<u32>::new(0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, false);
  println!("CRC-32:         0x{:08X}  ({})", crc32.calculate(data), crc32.backend_name());
  assert_eq!(crc32.calculate(data), 0xCBF4_3926);

  println!();
}

/// Use the named catalogue.
fn catalogue_lookups() -> Result<(), ParamsError> {
  println!("--- Catalogue ---\n");

  let modbus = Crc::<u16>::with_params(&catalog::CRC16_MODBUS, true)?;
  println!("{modbus}");
  println!("  check: 0x{:04X}", modbus.check());

  // Aliases resolve case-insensitively
  let castagnoli = Crc::<u32>::from_name("crc-32/iscsi")?;
  println!("{castagnoli}");
  println!("  check: 0x{:08X}", castagnoli.check());

  // First rows of the CRC-8 lookup table
  let crc8 = Crc::<u8>::with_params(&catalog::CRC8, true)?;
  for line in crc8.table_display().to_string().lines().take(2) {
    println!("  {line}");
  }

  println!();
  Ok(())
}

/// Pick the width at runtime.
fn runtime_width() -> Result<(), ParamsError> {
  println!("--- Runtime Width ---\n");

  for name in ["CRC-8/MAXIM", "CRC-16/X-25", "CRC-32/BZIP2"] {
    let crc = AnyCrc::from_name(name)?;
    println!("{name:<14} width={:<2} 0x{:08X}", crc.width(), crc.calculate(b"hello world"));
  }

  match AnyCrc::new(24, 0x86_4CFB, 0xB7_04CE, false, false, 0, true) {
    Ok(_) => unreachable!("24-bit registers are not supported"),
    Err(err) => println!("width 24: {err}"),
  }

  Ok(())
}
