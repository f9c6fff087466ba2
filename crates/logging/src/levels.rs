//! crates/logging/src/levels.rs
//! Flag enums and level structures for info and debug verbosity.

use std::fmt;

/// Info flags for user-facing diagnostic categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InfoFlag {
    /// Names of inputs as they are hashed.
    Name,
    /// Totals after all inputs are hashed.
    Stats,
}

/// Debug flags for internal diagnostic categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DebugFlag {
    /// Per-input digest completion and worker scheduling.
    Digest,
    /// File opens and chunk reads.
    Io,
    /// Padding tail construction.
    Pad,
}

impl InfoFlag {
    /// Every info flag, in display order.
    pub const ALL: [Self; 2] = [Self::Name, Self::Stats];

    /// Token used on the command line and in rendered output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Stats => "stats",
        }
    }
}

impl DebugFlag {
    /// Every debug flag, in display order.
    pub const ALL: [Self; 3] = [Self::Digest, Self::Io, Self::Pad];

    /// Token used on the command line and in rendered output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Digest => "digest",
            Self::Io => "io",
            Self::Pad => "pad",
        }
    }
}

impl fmt::Display for InfoFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for DebugFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Info verbosity levels for each flag.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InfoLevels {
    /// Input name level.
    pub name: u8,
    /// Statistics level.
    pub stats: u8,
}

impl InfoLevels {
    /// Get the level for a specific flag.
    pub const fn get(&self, flag: InfoFlag) -> u8 {
        match flag {
            InfoFlag::Name => self.name,
            InfoFlag::Stats => self.stats,
        }
    }

    /// Set the level for a specific flag.
    pub fn set(&mut self, flag: InfoFlag, level: u8) {
        match flag {
            InfoFlag::Name => self.name = level,
            InfoFlag::Stats => self.stats = level,
        }
    }

    /// Set all flags to the specified level.
    pub fn set_all(&mut self, level: u8) {
        self.name = level;
        self.stats = level;
    }
}

/// Debug verbosity levels for each flag.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DebugLevels {
    /// Digest completion level.
    pub digest: u8,
    /// I/O operations level.
    pub io: u8,
    /// Padding level.
    pub pad: u8,
}

impl DebugLevels {
    /// Get the level for a specific flag.
    pub const fn get(&self, flag: DebugFlag) -> u8 {
        match flag {
            DebugFlag::Digest => self.digest,
            DebugFlag::Io => self.io,
            DebugFlag::Pad => self.pad,
        }
    }

    /// Set the level for a specific flag.
    pub fn set(&mut self, flag: DebugFlag, level: u8) {
        match flag {
            DebugFlag::Digest => self.digest = level,
            DebugFlag::Io => self.io = level,
            DebugFlag::Pad => self.pad = level,
        }
    }

    /// Set all flags to the specified level.
    pub fn set_all(&mut self, level: u8) {
        self.digest = level;
        self.io = level;
        self.pad = level;
    }
}
