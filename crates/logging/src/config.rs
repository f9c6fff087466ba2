//! crates/logging/src/config.rs
//! Verbosity configuration combining info and debug levels.

use super::levels::{DebugFlag, DebugLevels, InfoFlag, InfoLevels};

/// Combined verbosity configuration for info and debug flags.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerbosityConfig {
    /// Info flag levels.
    pub info: InfoLevels,
    /// Debug flag levels.
    pub debug: DebugLevels,
}

impl VerbosityConfig {
    /// Create a new configuration from a verbose level (the count of `-v`).
    ///
    /// - 0: warnings only
    /// - 1: input names and totals
    /// - 2: adds per-input digest and I/O summaries
    /// - 3+: adds every chunk read and padding decision
    pub fn from_verbose_level(level: u8) -> Self {
        let mut config = Self::default();

        if level >= 1 {
            config.info.name = 1;
            config.info.stats = 1;
        }
        if level >= 2 {
            config.debug.digest = 2;
            config.debug.io = 2;
        }
        if level >= 3 {
            config.debug.set_all(3);
        }

        config
    }

    /// Apply a single info flag token (e.g., "name", "stats0").
    pub fn apply_info_flag(&mut self, token: &str) -> Result<(), String> {
        let (name, level) = parse_flag_token(token)?;

        if name == "all" {
            self.info.set_all(level);
            return Ok(());
        }

        let flag = InfoFlag::ALL
            .into_iter()
            .find(|flag| flag.as_str() == name)
            .ok_or_else(|| format!("unknown info flag: {name}"))?;

        self.info.set(flag, level);
        Ok(())
    }

    /// Apply a single debug flag token (e.g., "io3", "pad").
    pub fn apply_debug_flag(&mut self, token: &str) -> Result<(), String> {
        let (name, level) = parse_flag_token(token)?;

        if name == "all" {
            self.debug.set_all(level);
            return Ok(());
        }

        let flag = DebugFlag::ALL
            .into_iter()
            .find(|flag| flag.as_str() == name)
            .ok_or_else(|| format!("unknown debug flag: {name}"))?;

        self.debug.set(flag, level);
        Ok(())
    }

    /// Reports whether the info flag is at or above `level`.
    pub const fn info_gte(&self, flag: InfoFlag, level: u8) -> bool {
        self.info.get(flag) >= level
    }

    /// Reports whether the debug flag is at or above `level`.
    pub const fn debug_gte(&self, flag: DebugFlag, level: u8) -> bool {
        self.debug.get(flag) >= level
    }
}

/// Parse a flag token like "io2" into ("io", 2) or "name" into ("name", 1).
fn parse_flag_token(token: &str) -> Result<(&str, u8), String> {
    if token.is_empty() {
        return Err("empty flag token".to_string());
    }

    // Find where the digits start
    let digit_start = token.find(|c: char| c.is_ascii_digit());

    match digit_start {
        Some(0) => Err(format!("flag token missing name: {token}")),
        Some(pos) => {
            let name = &token[..pos];
            let level_str = &token[pos..];
            let level = level_str
                .parse::<u8>()
                .map_err(|_| format!("invalid level in flag token: {token}"))?;
            Ok((name, level))
        }
        None => Ok((token, 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_verbose_level_0() {
        let config = VerbosityConfig::from_verbose_level(0);
        assert_eq!(config, VerbosityConfig::default());
    }

    #[test]
    fn test_from_verbose_level_1() {
        let config = VerbosityConfig::from_verbose_level(1);
        assert_eq!(config.info.name, 1);
        assert_eq!(config.info.stats, 1);
        assert_eq!(config.debug, DebugLevels::default());
    }

    #[test]
    fn test_from_verbose_level_2() {
        let config = VerbosityConfig::from_verbose_level(2);
        assert_eq!(config.debug.digest, 2);
        assert_eq!(config.debug.io, 2);
        assert_eq!(config.debug.pad, 0);
    }

    #[test]
    fn test_from_verbose_level_3_and_higher() {
        for level in [3, 4, u8::MAX] {
            let config = VerbosityConfig::from_verbose_level(level);
            assert!(DebugFlag::ALL.iter().all(|&f| config.debug_gte(f, 3)));
            assert!(config.info_gte(InfoFlag::Name, 1));
        }
    }

    #[test]
    fn test_parse_flag_token() {
        assert_eq!(parse_flag_token("io"), Ok(("io", 1)));
        assert_eq!(parse_flag_token("io3"), Ok(("io", 3)));
        assert_eq!(parse_flag_token("stats0"), Ok(("stats", 0)));
        assert!(parse_flag_token("").is_err());
        assert!(parse_flag_token("3").is_err());
        assert!(parse_flag_token("io999").is_err());
    }

    #[test]
    fn test_apply_info_flag() {
        let mut config = VerbosityConfig::default();
        config.apply_info_flag("stats2").unwrap();
        assert_eq!(config.info.stats, 2);
        config.apply_info_flag("all").unwrap();
        assert_eq!(config.info.name, 1);
        assert!(config.apply_info_flag("bogus").is_err());
    }

    #[test]
    fn test_apply_debug_flag() {
        let mut config = VerbosityConfig::default();
        config.apply_debug_flag("pad3").unwrap();
        assert_eq!(config.debug.pad, 3);
        config.apply_debug_flag("all0").unwrap();
        assert_eq!(config.debug, DebugLevels::default());
        assert_eq!(
            config.apply_debug_flag("recv"),
            Err("unknown debug flag: recv".to_string())
        );
    }
}
