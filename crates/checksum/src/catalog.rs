//! Catalogue of named CRC variants.
//!
//! Every entry is a plain [`CrcParams`] record; the engine consumes them via
//! [`Crc::with_params`](crate::Crc::with_params) or
//! [`AnyCrc::from_params`](crate::AnyCrc::from_params). Names follow the
//! historical spelling, with the current
//! [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/) names as
//! aliases.
//!
//! | Width | Variants |
//! |-------|----------|
//! | 8 | 10 |
//! | 16 | 23 |
//! | 32 | 9 |

use crate::params::CrcParams;

macro_rules! crc_params {
  (
    $name:literal $([$($alias:literal),* $(,)?])?,
    width: $width:literal,
    poly: $poly:literal,
    init: $init:literal,
    refin: $refin:literal,
    refout: $refout:literal,
    xorout: $xorout:literal,
    check: $check:literal $(,)?
  ) => {
    CrcParams {
      name: $name,
      aliases: &[$($($alias),*)?],
      width: $width,
      polynomial: $poly,
      initial: $init,
      reflect_in: $refin,
      reflect_out: $refout,
      xor_out: $xorout,
      check: $check,
    }
  };
}

// ─────────────────────────────────────────────────────────────────────────────
// CRC-8
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-8 (SMBus).
pub const CRC8: CrcParams = crc_params!("CRC-8" ["CRC-8/SMBUS"],
  width: 8, poly: 0x07, init: 0x00, refin: false, refout: false, xorout: 0x00, check: 0xF4);
/// CRC-8/CDMA2000.
pub const CRC8_CDMA2000: CrcParams = crc_params!("CRC-8/CDMA2000",
  width: 8, poly: 0x9B, init: 0xFF, refin: false, refout: false, xorout: 0x00, check: 0xDA);
/// CRC-8/DARC.
pub const CRC8_DARC: CrcParams = crc_params!("CRC-8/DARC",
  width: 8, poly: 0x39, init: 0x00, refin: true, refout: true, xorout: 0x00, check: 0x15);
/// CRC-8/DVB-S2.
pub const CRC8_DVB_S2: CrcParams = crc_params!("CRC-8/DVB-S2",
  width: 8, poly: 0xD5, init: 0x00, refin: false, refout: false, xorout: 0x00, check: 0xBC);
/// CRC-8/EBU (AES/EBU, Tech 3250).
pub const CRC8_EBU: CrcParams = crc_params!("CRC-8/EBU" ["CRC-8/TECH-3250", "CRC-8/AES"],
  width: 8, poly: 0x1D, init: 0xFF, refin: true, refout: true, xorout: 0x00, check: 0x97);
/// CRC-8/I-CODE.
pub const CRC8_I_CODE: CrcParams = crc_params!("CRC-8/I-CODE",
  width: 8, poly: 0x1D, init: 0xFD, refin: false, refout: false, xorout: 0x00, check: 0x7E);
/// CRC-8/ITU (ITU-T I.432.1).
pub const CRC8_ITU: CrcParams = crc_params!("CRC-8/ITU" ["CRC-8/I-432-1"],
  width: 8, poly: 0x07, init: 0x00, refin: false, refout: false, xorout: 0x55, check: 0xA1);
/// CRC-8/MAXIM (1-Wire).
pub const CRC8_MAXIM: CrcParams = crc_params!("CRC-8/MAXIM" ["CRC-8/MAXIM-DOW", "DOW-CRC"],
  width: 8, poly: 0x31, init: 0x00, refin: true, refout: true, xorout: 0x00, check: 0xA1);
/// CRC-8/ROHC.
pub const CRC8_ROHC: CrcParams = crc_params!("CRC-8/ROHC",
  width: 8, poly: 0x07, init: 0xFF, refin: true, refout: true, xorout: 0x00, check: 0xD0);
/// CRC-8/WCDMA.
pub const CRC8_WCDMA: CrcParams = crc_params!("CRC-8/WCDMA",
  width: 8, poly: 0x9B, init: 0x00, refin: true, refout: true, xorout: 0x00, check: 0x25);

// ─────────────────────────────────────────────────────────────────────────────
// CRC-16
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-16/CCITT-FALSE.
pub const CRC16_CCITT_FALSE: CrcParams = crc_params!("CRC-16/CCITT-FALSE" ["CRC-16/IBM-3740", "CRC-16/AUTOSAR"],
  width: 16, poly: 0x1021, init: 0xFFFF, refin: false, refout: false, xorout: 0x0000, check: 0x29B1);
/// CRC-16/ARC.
pub const CRC16_ARC: CrcParams = crc_params!("CRC-16/ARC" ["CRC-16", "CRC-16/LHA", "CRC-IBM"],
  width: 16, poly: 0x8005, init: 0x0000, refin: true, refout: true, xorout: 0x0000, check: 0xBB3D);
/// CRC-16/AUG-CCITT.
pub const CRC16_AUG_CCITT: CrcParams = crc_params!("CRC-16/AUG-CCITT" ["CRC-16/SPI-FUJITSU"],
  width: 16, poly: 0x1021, init: 0x1D0F, refin: false, refout: false, xorout: 0x0000, check: 0xE5CC);
/// CRC-16/BUYPASS.
pub const CRC16_BUYPASS: CrcParams = crc_params!("CRC-16/BUYPASS" ["CRC-16/UMTS", "CRC-16/VERIFONE"],
  width: 16, poly: 0x8005, init: 0x0000, refin: false, refout: false, xorout: 0x0000, check: 0xFEE8);
/// CRC-16/CDMA2000.
pub const CRC16_CDMA2000: CrcParams = crc_params!("CRC-16/CDMA2000",
  width: 16, poly: 0xC867, init: 0xFFFF, refin: false, refout: false, xorout: 0x0000, check: 0x4C06);
/// CRC-16/DDS-110.
pub const CRC16_DDS_110: CrcParams = crc_params!("CRC-16/DDS-110",
  width: 16, poly: 0x8005, init: 0x800D, refin: false, refout: false, xorout: 0x0000, check: 0x9ECF);
/// CRC-16/DECT-R.
pub const CRC16_DECT_R: CrcParams = crc_params!("CRC-16/DECT-R" ["R-CRC-16"],
  width: 16, poly: 0x0589, init: 0x0000, refin: false, refout: false, xorout: 0x0001, check: 0x007E);
/// CRC-16/DECT-X.
pub const CRC16_DECT_X: CrcParams = crc_params!("CRC-16/DECT-X" ["X-CRC-16"],
  width: 16, poly: 0x0589, init: 0x0000, refin: false, refout: false, xorout: 0x0000, check: 0x007F);
/// CRC-16/DNP.
pub const CRC16_DNP: CrcParams = crc_params!("CRC-16/DNP",
  width: 16, poly: 0x3D65, init: 0x0000, refin: true, refout: true, xorout: 0xFFFF, check: 0xEA82);
/// CRC-16/EN-13757.
pub const CRC16_EN_13757: CrcParams = crc_params!("CRC-16/EN-13757",
  width: 16, poly: 0x3D65, init: 0x0000, refin: false, refout: false, xorout: 0xFFFF, check: 0xC2B7);
/// CRC-16/GENIBUS.
pub const CRC16_GENIBUS: CrcParams = crc_params!("CRC-16/GENIBUS" ["CRC-16/DARC", "CRC-16/EPC", "CRC-16/I-CODE"],
  width: 16, poly: 0x1021, init: 0xFFFF, refin: false, refout: false, xorout: 0xFFFF, check: 0xD64E);
/// CRC-16/MAXIM.
pub const CRC16_MAXIM: CrcParams = crc_params!("CRC-16/MAXIM" ["CRC-16/MAXIM-DOW"],
  width: 16, poly: 0x8005, init: 0x0000, refin: true, refout: true, xorout: 0xFFFF, check: 0x44C2);
/// CRC-16/MCRF4XX.
pub const CRC16_MCRF4XX: CrcParams = crc_params!("CRC-16/MCRF4XX",
  width: 16, poly: 0x1021, init: 0xFFFF, refin: true, refout: true, xorout: 0x0000, check: 0x6F91);
/// CRC-16/RIELLO.
pub const CRC16_RIELLO: CrcParams = crc_params!("CRC-16/RIELLO",
  width: 16, poly: 0x1021, init: 0xB2AA, refin: true, refout: true, xorout: 0x0000, check: 0x63D0);
/// CRC-16/T10-DIF.
pub const CRC16_T10_DIF: CrcParams = crc_params!("CRC-16/T10-DIF",
  width: 16, poly: 0x8BB7, init: 0x0000, refin: false, refout: false, xorout: 0x0000, check: 0xD0DB);
/// CRC-16/TELEDISK.
pub const CRC16_TELEDISK: CrcParams = crc_params!("CRC-16/TELEDISK",
  width: 16, poly: 0xA097, init: 0x0000, refin: false, refout: false, xorout: 0x0000, check: 0x0FB3);
/// CRC-16/TMS37157.
pub const CRC16_TMS37157: CrcParams = crc_params!("CRC-16/TMS37157",
  width: 16, poly: 0x1021, init: 0x89EC, refin: true, refout: true, xorout: 0x0000, check: 0x26B1);
/// CRC-16/USB.
pub const CRC16_USB: CrcParams = crc_params!("CRC-16/USB",
  width: 16, poly: 0x8005, init: 0xFFFF, refin: true, refout: true, xorout: 0xFFFF, check: 0xB4C8);
/// CRC-A (ISO/IEC 14443-3 Type A).
pub const CRC_A: CrcParams = crc_params!("CRC-A" ["CRC-16/ISO-IEC-14443-3-A"],
  width: 16, poly: 0x1021, init: 0xC6C6, refin: true, refout: true, xorout: 0x0000, check: 0xBF05);
/// CRC-16/KERMIT.
pub const CRC16_KERMIT: CrcParams = crc_params!("CRC-16/KERMIT" ["CRC-16/CCITT", "CRC-16/CCITT-TRUE", "CRC-CCITT"],
  width: 16, poly: 0x1021, init: 0x0000, refin: true, refout: true, xorout: 0x0000, check: 0x2189);
/// CRC-16/MODBUS.
pub const CRC16_MODBUS: CrcParams = crc_params!("CRC-16/MODBUS" ["MODBUS"],
  width: 16, poly: 0x8005, init: 0xFFFF, refin: true, refout: true, xorout: 0x0000, check: 0x4B37);
/// CRC-16/X-25.
pub const CRC16_X_25: CrcParams = crc_params!("CRC-16/X-25" ["CRC-16/IBM-SDLC", "CRC-16/ISO-HDLC", "CRC-B"],
  width: 16, poly: 0x1021, init: 0xFFFF, refin: true, refout: true, xorout: 0xFFFF, check: 0x906E);
/// CRC-16/XMODEM.
pub const CRC16_XMODEM: CrcParams = crc_params!("CRC-16/XMODEM" ["CRC-16/ACORN", "CRC-16/LTE", "XMODEM", "ZMODEM"],
  width: 16, poly: 0x1021, init: 0x0000, refin: false, refout: false, xorout: 0x0000, check: 0x31C3);

// ─────────────────────────────────────────────────────────────────────────────
// CRC-32
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-32 (ISO-HDLC) - Ethernet, gzip, zip, PNG.
pub const CRC32: CrcParams = crc_params!("CRC-32" ["CRC-32/ISO-HDLC", "CRC-32/ADCCP", "PKZIP"],
  width: 32, poly: 0x04C1_1DB7, init: 0xFFFF_FFFF, refin: true, refout: true, xorout: 0xFFFF_FFFF, check: 0xCBF4_3926);
/// CRC-32/BZIP2.
pub const CRC32_BZIP2: CrcParams = crc_params!("CRC-32/BZIP2" ["CRC-32/AAL5", "CRC-32/DECT-B"],
  width: 32, poly: 0x04C1_1DB7, init: 0xFFFF_FFFF, refin: false, refout: false, xorout: 0xFFFF_FFFF, check: 0xFC89_1918);
/// CRC-32C (Castagnoli) - iSCSI, SCTP, ext4, Btrfs.
pub const CRC32_C: CrcParams = crc_params!("CRC-32C" ["CRC-32/ISCSI", "CRC-32/CASTAGNOLI"],
  width: 32, poly: 0x1EDC_6F41, init: 0xFFFF_FFFF, refin: true, refout: true, xorout: 0xFFFF_FFFF, check: 0xE306_9283);
/// CRC-32D.
pub const CRC32_D: CrcParams = crc_params!("CRC-32D" ["CRC-32/BASE91-D"],
  width: 32, poly: 0xA833_982B, init: 0xFFFF_FFFF, refin: true, refout: true, xorout: 0xFFFF_FFFF, check: 0x8731_5576);
/// CRC-32/JAMCRC.
pub const CRC32_JAMCRC: CrcParams = crc_params!("CRC-32/JAMCRC",
  width: 32, poly: 0x04C1_1DB7, init: 0xFFFF_FFFF, refin: true, refout: true, xorout: 0x0000_0000, check: 0x340B_C6D9);
/// CRC-32/MPEG-2.
pub const CRC32_MPEG_2: CrcParams = crc_params!("CRC-32/MPEG-2",
  width: 32, poly: 0x04C1_1DB7, init: 0xFFFF_FFFF, refin: false, refout: false, xorout: 0x0000_0000, check: 0x0376_E6E7);
/// CRC-32/POSIX (`cksum`).
pub const CRC32_POSIX: CrcParams = crc_params!("CRC-32/POSIX" ["CRC-32/CKSUM"],
  width: 32, poly: 0x04C1_1DB7, init: 0x0000_0000, refin: false, refout: false, xorout: 0xFFFF_FFFF, check: 0x765E_7680);
/// CRC-32Q (AIXM).
pub const CRC32_Q: CrcParams = crc_params!("CRC-32Q" ["CRC-32/AIXM"],
  width: 32, poly: 0x8141_41AB, init: 0x0000_0000, refin: false, refout: false, xorout: 0x0000_0000, check: 0x3010_BF7F);
/// CRC-32/XFER.
pub const CRC32_XFER: CrcParams = crc_params!("CRC-32/XFER",
  width: 32, poly: 0x0000_00AF, init: 0x0000_0000, refin: false, refout: false, xorout: 0x0000_0000, check: 0xBD0B_E338);

/// Every catalogued variant, grouped by width.
pub const CATALOG: &[CrcParams] = &[
  CRC8,
  CRC8_CDMA2000,
  CRC8_DARC,
  CRC8_DVB_S2,
  CRC8_EBU,
  CRC8_I_CODE,
  CRC8_ITU,
  CRC8_MAXIM,
  CRC8_ROHC,
  CRC8_WCDMA,
  CRC16_CCITT_FALSE,
  CRC16_ARC,
  CRC16_AUG_CCITT,
  CRC16_BUYPASS,
  CRC16_CDMA2000,
  CRC16_DDS_110,
  CRC16_DECT_R,
  CRC16_DECT_X,
  CRC16_DNP,
  CRC16_EN_13757,
  CRC16_GENIBUS,
  CRC16_MAXIM,
  CRC16_MCRF4XX,
  CRC16_RIELLO,
  CRC16_T10_DIF,
  CRC16_TELEDISK,
  CRC16_TMS37157,
  CRC16_USB,
  CRC_A,
  CRC16_KERMIT,
  CRC16_MODBUS,
  CRC16_X_25,
  CRC16_XMODEM,
  CRC32,
  CRC32_BZIP2,
  CRC32_C,
  CRC32_D,
  CRC32_JAMCRC,
  CRC32_MPEG_2,
  CRC32_POSIX,
  CRC32_Q,
  CRC32_XFER,
];

/// Look up a variant by name or alias (ASCII case-insensitive).
///
/// ```
/// use checksum::catalog;
///
/// let modbus = catalog::find("crc-16/modbus").unwrap();
/// assert_eq!(modbus.check, 0x4B37);
/// assert_eq!(catalog::find("CRC-32/ISCSI").unwrap().name, "CRC-32C");
/// assert!(catalog::find("CRC-64/XZ").is_none());
/// ```
#[must_use]
pub fn find(name: &str) -> Option<&'static CrcParams> {
  CATALOG.iter().find(|params| params.matches_name(name))
}

/// All variants with the given register width.
pub fn by_width(width: u8) -> impl Iterator<Item = &'static CrcParams> {
  CATALOG.iter().filter(move |params| params.width == width)
}
