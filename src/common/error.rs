//! Error types for the simulator.

use thiserror::Error;

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors raised by the simulator.
///
/// Every failure is reported synchronously to the caller. A failing call
/// leaves the simulator exactly as it was before the call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Frame count or page size below 1, or an unrecognized policy name.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A step or statistics request arrived before `initialize`.
    #[error("simulator has not been initialized")]
    Uninitialized,

    /// A reference string token is not a non-negative page number.
    #[error("malformed reference string: {0}")]
    MalformedReference(String),

    /// Every frame is allocated but the policy produced no victim.
    ///
    /// This indicates a bug: a full store always has a victim.
    #[error("replacement policy found no victim in a full frame store")]
    NoVictim,
}

impl Error {
    /// Whether this is a configuration error.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Configuration("frame count must be at least 1".into());
        assert_eq!(
            format!("{}", err),
            "configuration error: frame count must be at least 1"
        );

        let err = Error::Uninitialized;
        assert_eq!(format!("{}", err), "simulator has not been initialized");
    }

    #[test]
    fn test_is_configuration() {
        assert!(Error::Configuration(String::new()).is_configuration());
        assert!(!Error::Uninitialized.is_configuration());
        assert!(!Error::NoVictim.is_configuration());
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail() -> Result<u32> {
            Ok(42)
        }

        assert_eq!(might_fail(), Ok(42));
    }
}
