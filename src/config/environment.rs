//! Contentful environment definitions.
//!
//! This module provides the [`Environment`] enum for specifying which
//! Contentful environment a query targets.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Contentful environment.
///
/// Environments are isolated copies of a space's content model and entries.
/// Queries target exactly one environment, selected by the URL path segment
/// `/environments/{environment}`. This client supports the two environments
/// provisioned for the space.
///
/// # Example
///
/// ```rust
/// use contentful_graphql::Environment;
///
/// // Master is the default
/// assert_eq!(Environment::default(), Environment::Master);
///
/// // Parse from string
/// let env: Environment = "dev".parse().unwrap();
/// assert_eq!(env, Environment::Dev);
///
/// // Display as the URL path segment
/// assert_eq!(format!("{}", Environment::Master), "master");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Environment {
    /// The `master` environment, serving production content.
    #[default]
    Master,
    /// The `dev` environment, used for content-model changes in progress.
    Dev,
}

impl Environment {
    /// Returns the environment name as used in the endpoint URL path.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Master => "master",
            Self::Dev => "dev",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "master" => Ok(Self::Master),
            "dev" => Ok(Self::Dev),
            other => Err(ConfigError::InvalidEnvironment {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_master() {
        assert_eq!(Environment::default(), Environment::Master);
    }

    #[test]
    fn test_display_matches_url_path_segment() {
        assert_eq!(Environment::Master.to_string(), "master");
        assert_eq!(Environment::Dev.to_string(), "dev");
    }

    #[test]
    fn test_as_str_is_const_accessible() {
        const MASTER: &str = Environment::Master.as_str();
        assert_eq!(MASTER, "master");
    }

    #[test]
    fn test_parse_known_environments() {
        assert_eq!("master".parse::<Environment>().unwrap(), Environment::Master);
        assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Dev);
    }

    #[test]
    fn test_parse_rejects_unknown_environment() {
        let result = "staging".parse::<Environment>();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvironment { value }) if value == "staging"
        ));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Master".parse::<Environment>().is_err());
        assert!("DEV".parse::<Environment>().is_err());
    }
}
