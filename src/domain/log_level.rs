//! Log levels of the three logging surfaces and the total mappings between them.
//!
//! - [`Severity`]: the application backend, named in configuration.
//! - [`SqlLogLevel`]: what the ORM expects from its logger.
//! - [`CacheLogLevel`]: what the cache driver expects from its logger.
//!
//! `Severity` is richer than the other two. `Critical` narrows to `Err` and
//! `Notice` narrows to `Warning`; that loss is intended and one-way.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid log level: {0:?}")]
pub struct LevelParseError(pub String);

/// Application backend severity. Ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Debug,
    Info,
    Notice,
    Warning,
    Error,
    Critical,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Notice => "NOTICE",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = LevelParseError;

    /// Case-insensitive: `debug`, `DEBUG` and `Debug` are the same level.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "NOTICE" => Ok(Self::Notice),
            "WARNING" => Ok(Self::Warning),
            "ERROR" => Ok(Self::Error),
            "CRITICAL" => Ok(Self::Critical),
            _ => Err(LevelParseError(s.to_string())),
        }
    }
}

/// Level the ORM reads from its logger.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlLogLevel {
    Debug = 0,
    Info = 1,
    Warning = 2,
    Err = 3,
    Off = 4,
    Unknown = 5,
}

impl SqlLogLevel {
    /// Decodes a stored ordinal. Out-of-range values are `Unknown`.
    pub fn from_repr(raw: u8) -> Self {
        match raw {
            0 => Self::Debug,
            1 => Self::Info,
            2 => Self::Warning,
            3 => Self::Err,
            4 => Self::Off,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Err => "error",
            Self::Off => "off",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SqlLogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Severity> for SqlLogLevel {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Critical | Severity::Error => Self::Err,
            Severity::Warning | Severity::Notice => Self::Warning,
            Severity::Info => Self::Info,
            Severity::Debug => Self::Debug,
        }
    }
}

/// Level the cache driver reads from its logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheLogLevel {
    Debug,
    Info,
    Warning,
    Err,
    Off,
    Unknown,
}

impl fmt::Display for CacheLogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&SqlLogLevel::from(*self), f)
    }
}

impl From<SqlLogLevel> for CacheLogLevel {
    fn from(level: SqlLogLevel) -> Self {
        match level {
            SqlLogLevel::Debug => Self::Debug,
            SqlLogLevel::Info => Self::Info,
            SqlLogLevel::Warning => Self::Warning,
            SqlLogLevel::Err => Self::Err,
            SqlLogLevel::Off => Self::Off,
            SqlLogLevel::Unknown => Self::Unknown,
        }
    }
}

impl From<CacheLogLevel> for SqlLogLevel {
    fn from(level: CacheLogLevel) -> Self {
        match level {
            CacheLogLevel::Debug => Self::Debug,
            CacheLogLevel::Info => Self::Info,
            CacheLogLevel::Warning => Self::Warning,
            CacheLogLevel::Err => Self::Err,
            CacheLogLevel::Off => Self::Off,
            CacheLogLevel::Unknown => Self::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const ALL_SQL: [SqlLogLevel; 6] = [
        SqlLogLevel::Debug,
        SqlLogLevel::Info,
        SqlLogLevel::Warning,
        SqlLogLevel::Err,
        SqlLogLevel::Off,
        SqlLogLevel::Unknown,
    ];

    #[rstest]
    #[case("debug")]
    #[case("DEBUG")]
    #[case("Debug")]
    #[case(" dEbUg ")]
    fn test_parse_is_case_insensitive(#[case] name: &str) {
        assert_eq!(name.parse::<Severity>(), Ok(Severity::Debug));
    }

    #[test]
    fn test_parse_all_names() {
        for severity in [
            Severity::Debug,
            Severity::Info,
            Severity::Notice,
            Severity::Warning,
            Severity::Error,
            Severity::Critical,
        ] {
            assert_eq!(severity.as_str().parse::<Severity>(), Ok(severity));
        }
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "verbose".parse::<Severity>().unwrap_err();
        assert_eq!(err, LevelParseError("verbose".to_string()));
        assert_eq!(err.to_string(), "invalid log level: \"verbose\"");
        assert!("warn".parse::<Severity>().is_err());
    }

    #[test]
    fn test_severity_order() {
        assert!(Severity::Critical > Severity::Error);
        assert!(Severity::Error > Severity::Warning);
        assert!(Severity::Warning > Severity::Notice);
        assert!(Severity::Notice > Severity::Info);
        assert!(Severity::Info > Severity::Debug);
    }

    #[rstest]
    #[case(Severity::Critical, SqlLogLevel::Err)]
    #[case(Severity::Error, SqlLogLevel::Err)]
    #[case(Severity::Warning, SqlLogLevel::Warning)]
    #[case(Severity::Notice, SqlLogLevel::Warning)]
    #[case(Severity::Info, SqlLogLevel::Info)]
    #[case(Severity::Debug, SqlLogLevel::Debug)]
    fn test_severity_to_sql(#[case] severity: Severity, #[case] expected: SqlLogLevel) {
        assert_eq!(SqlLogLevel::from(severity), expected);
    }

    #[test]
    fn test_sql_cache_round_trip() {
        for level in ALL_SQL {
            assert_eq!(SqlLogLevel::from(CacheLogLevel::from(level)), level);
        }
    }

    #[test]
    fn test_from_repr_is_total() {
        for level in ALL_SQL {
            assert_eq!(SqlLogLevel::from_repr(level as u8), level);
        }
        assert_eq!(SqlLogLevel::from_repr(6), SqlLogLevel::Unknown);
        assert_eq!(SqlLogLevel::from_repr(u8::MAX), SqlLogLevel::Unknown);
    }

    #[test]
    fn test_display() {
        assert_eq!(SqlLogLevel::Err.to_string(), "error");
        assert_eq!(CacheLogLevel::Off.to_string(), "off");
        assert_eq!(Severity::Notice.to_string(), "NOTICE");
    }
}
