// src/demo/config.rs
use std::{env, fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scenario {
    Success,
    Problem,
    #[default]
    Both,
}

impl Scenario {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Problem => "problem",
            Self::Both => "both",
        }
    }

    #[must_use]
    pub const fn runs_success(self) -> bool {
        matches!(self, Self::Success | Self::Both)
    }

    #[must_use]
    pub const fn runs_problem(self) -> bool {
        matches!(self, Self::Problem | Self::Both)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scenario {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "success" => Ok(Self::Success),
            "problem" => Ok(Self::Problem),
            "both" => Ok(Self::Both),
            other => Err(ConfigError::Invalid(format!(
                "DEMO_SCENARIO must be one of success, problem, both (got '{other}')"
            ))),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DemoConfig {
    scenario: Scenario,
    problem_code: Option<String>,
}

impl DemoConfig {
    /// Build configuration from `DEMO_SCENARIO` and `DEMO_PROBLEM_CODE`.
    ///
    /// # Errors
    ///
    /// See [`DemoConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for an unknown scenario or a blank
    /// problem code.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let scenario = match lookup("DEMO_SCENARIO") {
            Some(raw) => raw.parse()?,
            None => Scenario::default(),
        };

        let problem_code = match lookup("DEMO_PROBLEM_CODE") {
            Some(code) if code.trim().is_empty() => {
                return Err(ConfigError::Invalid("DEMO_PROBLEM_CODE cannot be empty".into()));
            }
            other => other,
        };

        Ok(Self {
            scenario,
            problem_code,
        })
    }

    #[must_use]
    pub const fn scenario(&self) -> Scenario {
        self.scenario
    }

    #[must_use]
    pub fn problem_code(&self) -> Option<&str> {
        self.problem_code.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = DemoConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.scenario(), Scenario::Both);
        assert_eq!(config.problem_code(), None);
    }

    #[test]
    fn reads_scenario_and_code() {
        let config = DemoConfig::from_lookup(lookup_from(&[
            ("DEMO_SCENARIO", "Problem"),
            ("DEMO_PROBLEM_CODE", "Order.Rejected"),
        ]))
        .unwrap();
        assert_eq!(config.scenario(), Scenario::Problem);
        assert!(!config.scenario().runs_success());
        assert_eq!(config.problem_code(), Some("Order.Rejected"));
    }

    #[test]
    fn rejects_unknown_scenario() {
        let err =
            DemoConfig::from_lookup(lookup_from(&[("DEMO_SCENARIO", "sometimes")])).unwrap_err();
        assert!(err.to_string().contains("sometimes"));
    }

    #[test]
    fn rejects_blank_problem_code() {
        let err =
            DemoConfig::from_lookup(lookup_from(&[("DEMO_PROBLEM_CODE", "  ")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid("DEMO_PROBLEM_CODE cannot be empty".into())
        );
    }
}
