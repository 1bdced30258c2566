//! Differential fuzzing against the `crc` crate.

#![no_main]

use checksum::{Crc, catalog};
use libfuzzer_sys::fuzz_target;

static CRC8: crc::Crc<u8> = crc::Crc::<u8>::new(&crc::CRC_8_SMBUS);
static CRC16_MODBUS: crc::Crc<u16> = crc::Crc::<u16>::new(&crc::CRC_16_MODBUS);
static CRC16_XMODEM: crc::Crc<u16> = crc::Crc::<u16>::new(&crc::CRC_16_XMODEM);
static CRC32: crc::Crc<u32> = crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC);
static CRC32_BZIP2: crc::Crc<u32> = crc::Crc::<u32>::new(&crc::CRC_32_BZIP2);

fuzz_target!(|data: &[u8]| {
  for use_lut in [true, false] {
    let ours = Crc::<u8>::with_params(&catalog::CRC8, use_lut).unwrap();
    assert_eq!(ours.calculate(data), CRC8.checksum(data), "CRC-8 lut={use_lut}");

    let ours = Crc::<u16>::with_params(&catalog::CRC16_MODBUS, use_lut).unwrap();
    assert_eq!(ours.calculate(data), CRC16_MODBUS.checksum(data), "CRC-16/MODBUS lut={use_lut}");

    let ours = Crc::<u16>::with_params(&catalog::CRC16_XMODEM, use_lut).unwrap();
    assert_eq!(ours.calculate(data), CRC16_XMODEM.checksum(data), "CRC-16/XMODEM lut={use_lut}");

    let ours = Crc::<u32>::with_params(&catalog::CRC32, use_lut).unwrap();
    assert_eq!(ours.calculate(data), CRC32.checksum(data), "CRC-32 lut={use_lut}");

    let ours = Crc::<u32>::with_params(&catalog::CRC32_BZIP2, use_lut).unwrap();
    assert_eq!(ours.calculate(data), CRC32_BZIP2.checksum(data), "CRC-32/BZIP2 lut={use_lut}");
  }
});
