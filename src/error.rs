// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    InvalidArgument(InvalidArgument),
}

/// Rejected caller input at the notification boundary.
///
/// Each variant carries the offending raw value so it can be echoed back
/// to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidArgument {
    /// Severity text is not one of success/error/warning/info.
    Severity(String),

    /// Position text is not one of the six screen anchors.
    Position(String),

    /// Duration text could not be read as whole milliseconds.
    Duration(String),

    /// Duration was negative.
    NegativeDuration(i64),
}

impl InvalidArgument {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            InvalidArgument::Severity(_) => "error-invalid-severity",
            InvalidArgument::Position(_) => "error-invalid-position",
            InvalidArgument::Duration(_) => "error-invalid-duration",
            InvalidArgument::NegativeDuration(_) => "error-negative-duration",
        }
    }
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidArgument::Severity(raw) => write!(f, "unknown severity: {:?}", raw),
            InvalidArgument::Position(raw) => write!(f, "unknown position: {:?}", raw),
            InvalidArgument::Duration(raw) => write!(f, "invalid duration: {:?}", raw),
            InvalidArgument::NegativeDuration(ms) => {
                write!(f, "duration must not be negative: {} ms", ms)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::InvalidArgument(e) => write!(f, "Invalid Argument: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<InvalidArgument> for Error {
    fn from(err: InvalidArgument) -> Self {
        Error::InvalidArgument(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn invalid_argument_wraps_into_error() {
        let err: Error = InvalidArgument::NegativeDuration(-5).into();
        assert_eq!(
            format!("{}", err),
            "Invalid Argument: duration must not be negative: -5 ms"
        );
    }

    #[test]
    fn invalid_argument_display_echoes_raw_value() {
        let err = InvalidArgument::Position("middle".into());
        assert!(format!("{}", err).contains("middle"));
    }

    #[test]
    fn invalid_argument_i18n_keys() {
        assert_eq!(
            InvalidArgument::Severity(String::new()).i18n_key(),
            "error-invalid-severity"
        );
        assert_eq!(
            InvalidArgument::Position(String::new()).i18n_key(),
            "error-invalid-position"
        );
        assert_eq!(
            InvalidArgument::Duration(String::new()).i18n_key(),
            "error-invalid-duration"
        );
        assert_eq!(
            InvalidArgument::NegativeDuration(-1).i18n_key(),
            "error-negative-duration"
        );
    }
}
