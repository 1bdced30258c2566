//! Runtime configuration (strategy overrides).
//!
//! Engines built with an explicit `use_lut` flag always honor it. The
//! catalogue shortcuts ([`Crc::preset`](crate::Crc::preset),
//! [`Crc::from_name`](crate::Crc::from_name) and their [`AnyCrc`](crate::AnyCrc)
//! counterparts) pick their strategy from here instead.
//!
//! # Environment
//!
//! | Variable | Values |
//! |----------|--------|
//! | `CRCMODEL_STRATEGY` | `auto`, `table` (`lut`), `bitwise` (`direct`, `reference`) |
//!
//! The environment is read once per process (requires the `std` feature).
//! Without `std` the default ([`Strategy::Auto`]) is used.

/// Environment variable holding the strategy override.
pub const STRATEGY_ENV: &str = "CRCMODEL_STRATEGY";

/// Computation strategy selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
  /// Use the default strategy (the lookup table).
  #[default]
  Auto,
  /// Byte-at-a-time lookup table.
  Table,
  /// Bit-by-bit polynomial division; no table memory.
  Bitwise,
}

impl Strategy {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Table => "table",
      Self::Bitwise => "bitwise",
    }
  }

  /// Parse an override value (ASCII case-insensitive, surrounding whitespace ignored).
  ///
  /// Returns `None` for empty or unrecognized values.
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.is_empty() {
      return None;
    }

    if value.eq_ignore_ascii_case("auto") {
      return Some(Self::Auto);
    }
    if value.eq_ignore_ascii_case("table") || value.eq_ignore_ascii_case("lut") {
      return Some(Self::Table);
    }
    if value.eq_ignore_ascii_case("bitwise")
      || value.eq_ignore_ascii_case("direct")
      || value.eq_ignore_ascii_case("reference")
    {
      return Some(Self::Bitwise);
    }

    None
  }

  /// Resolve `Auto` to a concrete strategy.
  #[must_use]
  pub const fn resolve(self) -> Self {
    match self {
      Self::Auto | Self::Table => Self::Table,
      Self::Bitwise => Self::Bitwise,
    }
  }
}

/// Effective runtime configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrcConfig {
  /// Requested strategy (env/programmatic).
  pub requested: Strategy,
  /// Concrete strategy used by the catalogue shortcuts; never `Auto`.
  pub effective: Strategy,
}

impl CrcConfig {
  /// Configuration for a requested strategy.
  #[must_use]
  pub const fn new(requested: Strategy) -> Self {
    Self {
      requested,
      effective: requested.resolve(),
    }
  }

  /// Whether engines built from this configuration use the lookup table.
  #[must_use]
  pub const fn use_lut(&self) -> bool {
    matches!(self.effective, Strategy::Table)
  }
}

impl Default for CrcConfig {
  fn default() -> Self {
    Self::new(Strategy::Auto)
  }
}

#[cfg(feature = "std")]
fn read_env_overrides() -> Strategy {
  let Ok(value) = std::env::var(STRATEGY_ENV) else {
    return Strategy::Auto;
  };

  match Strategy::parse(&value) {
    Some(strategy) => {
      log::debug!("{STRATEGY_ENV}={value:?}: using {} strategy", strategy.as_str());
      strategy
    }
    None => {
      if !value.trim().is_empty() {
        log::warn!("{STRATEGY_ENV}={value:?} not recognized; using auto");
      }
      Strategy::Auto
    }
  }
}

/// Cached process-wide configuration.
#[inline]
#[must_use]
pub fn get() -> CrcConfig {
  #[cfg(feature = "std")]
  {
    use std::sync::OnceLock;
    static CACHED: OnceLock<CrcConfig> = OnceLock::new();
    *CACHED.get_or_init(|| CrcConfig::new(read_env_overrides()))
  }

  #[cfg(not(feature = "std"))]
  {
    CrcConfig::default()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_values() {
    assert_eq!(Strategy::parse("auto"), Some(Strategy::Auto));
    assert_eq!(Strategy::parse("TABLE"), Some(Strategy::Table));
    assert_eq!(Strategy::parse(" lut "), Some(Strategy::Table));
    assert_eq!(Strategy::parse("Bitwise"), Some(Strategy::Bitwise));
    assert_eq!(Strategy::parse("direct"), Some(Strategy::Bitwise));
    assert_eq!(Strategy::parse("reference"), Some(Strategy::Bitwise));
    assert_eq!(Strategy::parse(""), None);
    assert_eq!(Strategy::parse("   "), None);
    assert_eq!(Strategy::parse("slice16"), None);
  }

  #[test]
  fn as_str_round_trips() {
    for s in [Strategy::Auto, Strategy::Table, Strategy::Bitwise] {
      assert_eq!(Strategy::parse(s.as_str()), Some(s));
    }
  }

  #[test]
  fn auto_resolves_to_table() {
    let cfg = CrcConfig::default();
    assert_eq!(cfg.requested, Strategy::Auto);
    assert_eq!(cfg.effective, Strategy::Table);
    assert!(cfg.use_lut());
  }

  #[test]
  fn bitwise_disables_lut() {
    let cfg = CrcConfig::new(Strategy::Bitwise);
    assert_eq!(cfg.effective, Strategy::Bitwise);
    assert!(!cfg.use_lut());
  }

  #[test]
  fn get_is_stable() {
    let a = get();
    let b = get();
    assert_eq!(a, b);
    assert_ne!(a.effective, Strategy::Auto);
  }
}
