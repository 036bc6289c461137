//! Log severity levels.
//!
//! # Ordering
//! ```text
//! Debug < Info < Warn < Error < DPanic < Panic < Fatal
//! ```
//!
//! # Design Decisions
//! - `#[repr(u8)]` so a level fits in a single atomic word
//! - Parsing is an exact lookup on the lower-cased name, no nearest match
//! - Serialized as the lower-case canonical name

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Minimum severity of a log record.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Severity {
    Debug = 0,
    #[default]
    Info = 1,
    Warn = 2,
    Error = 3,
    /// Panics after emission in debug builds only.
    DPanic = 4,
    /// Panics after emission.
    Panic = 5,
    /// Terminates the process after emission.
    Fatal = 6,
}

/// Name table used by [`Severity::from_str`]. Keys are lower case.
///
/// The empty string has no entry and is rejected rather than read as `info`.
const NAMES: &[(&str, Severity)] = &[
    ("debug", Severity::Debug),
    ("info", Severity::Info),
    ("warn", Severity::Warn),
    ("warning", Severity::Warn),
    ("error", Severity::Error),
    ("dpanic", Severity::DPanic),
    ("panic", Severity::Panic),
    ("fatal", Severity::Fatal),
];

/// Returned when a name does not match any severity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown level: {0:?}")]
pub struct UnknownSeverity(pub String);

impl Severity {
    /// Every level, lowest first.
    pub const ALL: [Severity; 7] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::DPanic,
        Severity::Panic,
        Severity::Fatal,
    ];

    /// Canonical lower-case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
            Severity::DPanic => "dpanic",
            Severity::Panic => "panic",
            Severity::Fatal => "fatal",
        }
    }

    /// Decode a value previously produced by `level as u8`.
    pub const fn from_u8(val: u8) -> Option<Severity> {
        match val {
            0 => Some(Severity::Debug),
            1 => Some(Severity::Info),
            2 => Some(Severity::Warn),
            3 => Some(Severity::Error),
            4 => Some(Severity::DPanic),
            5 => Some(Severity::Panic),
            6 => Some(Severity::Fatal),
            _ => None,
        }
    }

    /// Map a `tracing` level onto the severity scale.
    ///
    /// `TRACE` has no counterpart and is treated as `Debug`.
    pub fn from_tracing(level: tracing::Level) -> Severity {
        if level == tracing::Level::ERROR {
            Severity::Error
        } else if level == tracing::Level::WARN {
            Severity::Warn
        } else if level == tracing::Level::INFO {
            Severity::Info
        } else {
            Severity::Debug
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_ascii_lowercase();
        NAMES
            .iter()
            .find(|(name, _)| *name == normalized)
            .map(|(_, level)| *level)
            .ok_or_else(|| UnknownSeverity(s.to_string()))
    }
}

impl TryFrom<String> for Severity {
    type Error = UnknownSeverity;

    fn try_from(value: String) -> Result<Self, UnknownSeverity> {
        value.parse()
    }
}

impl From<Severity> for &'static str {
    fn from(level: Severity) -> Self {
        level.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
        assert!(Severity::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("DEBUG".parse::<Severity>(), Ok(Severity::Debug));
        assert_eq!("Info".parse::<Severity>(), Ok(Severity::Info));
        assert_eq!("wArN".parse::<Severity>(), Ok(Severity::Warn));
        assert_eq!("FATAL".parse::<Severity>(), Ok(Severity::Fatal));
    }

    #[test]
    fn test_parse_alias() {
        assert_eq!("warning".parse::<Severity>(), Ok(Severity::Warn));
        assert_eq!("WARNING".parse::<Severity>(), Ok(Severity::Warn));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            "nonsense".parse::<Severity>(),
            Err(UnknownSeverity("nonsense".into()))
        );
        assert!("".parse::<Severity>().is_err());
        assert!("inf".parse::<Severity>().is_err());
        assert!(" info".parse::<Severity>().is_err());
    }

    #[test]
    fn test_name_roundtrip() {
        for level in Severity::ALL {
            assert_eq!(level.as_str().parse::<Severity>(), Ok(level));
            assert_eq!(Severity::from_u8(level as u8), Some(level));
        }
        assert_eq!(Severity::from_u8(7), None);
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Severity::Warn).unwrap();
        assert_eq!(json, "\"warn\"");

        let level: Severity = serde_json::from_str("\"ERROR\"").unwrap();
        assert_eq!(level, Severity::Error);

        assert!(serde_json::from_str::<Severity>("\"loud\"").is_err());
        assert_eq!(Severity::try_from(String::from("Fatal")), Ok(Severity::Fatal));
    }

    #[test]
    fn test_from_tracing() {
        assert_eq!(Severity::from_tracing(tracing::Level::TRACE), Severity::Debug);
        assert_eq!(Severity::from_tracing(tracing::Level::WARN), Severity::Warn);
        assert_eq!(Severity::from_tracing(tracing::Level::ERROR), Severity::Error);
    }
}
