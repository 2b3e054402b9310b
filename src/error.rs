//! Error types for the launch-configuration resolver

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("Argument '{0}' is already declared")]
    DuplicateName(String),

    #[error("Default '{default}' for argument '{name}' is not an allowed choice (allowed: {choices:?})")]
    DefaultOutsideChoices {
        name: String,
        default: String,
        choices: Vec<String>,
    },

    #[error("Value '{value}' for argument '{name}' is not an allowed choice (allowed: {choices:?})")]
    ValueOutsideChoices {
        name: String,
        value: String,
        choices: Vec<String>,
    },

    #[error("Override supplied for undeclared argument '{0}'. Did you misspell the argument name?")]
    UnknownArgument(String),

    #[error("'{0}' is neither a declared argument nor a derived value")]
    UnresolvedReference(String),
}

#[derive(Error, Debug)]
pub enum DerivedValueError {
    #[error("Package '{0}' not found. Ensure the package is installed and sourced.")]
    PackageNotFound(String),

    #[error("Failed to run templating command '{program}': {source}")]
    CommandSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Templating command '{program}' failed ({status}): {stderr}")]
    CommandFailed {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("Templating command '{program}' produced non-UTF-8 output")]
    NonUtf8Output { program: String },
}

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Derived value error: {0}")]
    DerivedValue(#[from] DerivedValueError),
}

pub type Result<T> = std::result::Result<T, ResolveError>;
