//! Argument declarations with fail-fast validation

use crate::error::ConfigurationError;

/// A declared launch argument: default value, optional choice restriction,
/// and a human-readable description.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub name: String,
    pub default: String,
    pub choices: Option<Vec<String>>,
    pub description: String,
}

impl Argument {
    /// Declare an unrestricted argument.
    pub fn new(
        name: impl Into<String>,
        default: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            default: default.into(),
            choices: None,
            description: description.into(),
        }
    }

    /// Declare an argument restricted to an enumerated set of values.
    pub fn with_choices(
        name: impl Into<String>,
        default: impl Into<String>,
        choices: &[&str],
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            default: default.into(),
            choices: Some(choices.iter().map(|s| s.to_string()).collect()),
            description: description.into(),
        }
    }

    /// Check the default against the restricted choices. Called at
    /// declaration time so a bad default fails before any use.
    pub(crate) fn validate_default(&self) -> Result<(), ConfigurationError> {
        if let Some(choices) = &self.choices {
            if !choices.contains(&self.default) {
                return Err(ConfigurationError::DefaultOutsideChoices {
                    name: self.name.clone(),
                    default: self.default.clone(),
                    choices: choices.clone(),
                });
            }
        }
        Ok(())
    }

    /// Check a resolved value (override or default) against the restricted
    /// choices.
    pub(crate) fn validate_value(&self, value: &str) -> Result<(), ConfigurationError> {
        if let Some(choices) = &self.choices {
            if !choices.iter().any(|c| c == value) {
                return Err(ConfigurationError::ValueOutsideChoices {
                    name: self.name.clone(),
                    value: value.to_string(),
                    choices: choices.clone(),
                });
            }
        }
        Ok(())
    }
}
