//! Run configuration for the crossing solvers.

use thiserror::Error;

/// Errors from resolving the run configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown crossing method: {0}")]
    UnknownMethod(String),
}

/// Which solver(s) a run executes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Naive,
    Shielding,
    Both,
}

/// Configuration for solver selection and output volume.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Crossing method: "naive", "shielding", or "both"
    pub method: String,
    /// Verbosity level (see `logging`).
    pub verbosity: u8,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            method: "both".to_string(),
            verbosity: 0,
        }
    }
}

impl RunConfig {
    /// Resolve the method string to a [`Method`].
    pub fn resolve_method(&self) -> Result<Method, ConfigError> {
        match self.method.as_str() {
            "naive" => Ok(Method::Naive),
            "shielding" => Ok(Method::Shielding),
            "both" => Ok(Method::Both),
            _ => Err(ConfigError::UnknownMethod(self.method.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_config(method: &str) -> RunConfig {
        RunConfig {
            method: method.to_string(),
            verbosity: 0,
        }
    }

    #[test]
    fn test_default_runs_both() {
        assert_eq!(RunConfig::default().resolve_method(), Ok(Method::Both));
    }

    #[test]
    fn test_resolve_known_methods() {
        assert_eq!(make_config("naive").resolve_method(), Ok(Method::Naive));
        assert_eq!(
            make_config("shielding").resolve_method(),
            Ok(Method::Shielding)
        );
        assert_eq!(make_config("both").resolve_method(), Ok(Method::Both));
    }

    #[test]
    fn test_unknown_method_error() {
        let result = make_config("brute_force").resolve_method();
        assert_eq!(
            result,
            Err(ConfigError::UnknownMethod("brute_force".to_string()))
        );
    }
}
