//! Error types for the core crate

use clap::error::ErrorKind;
use thiserror::Error;

/// Mistakes in how arguments were declared.
///
/// These surface while the parser is being assembled, before any input is
/// scanned, and are never recoverable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required_args is missing")]
    MissingRequiredArgs,

    #[error("required_args must be a list of strings, got {0}")]
    RequiredArgsNotList(String),

    #[error("required_args[{index}] must be a string, got {actual}")]
    NonStringRequiredArg { index: usize, actual: String },

    #[error("required_args must name at least one argument")]
    EmptyRequiredArgs,

    #[error("required_args[{index}] is blank")]
    BlankRequiredArg { index: usize },

    #[error("argument '{0}' is registered more than once")]
    DuplicateArg(String),

    #[error("option '{option}' is used by both '{first}' and '{second}'")]
    DuplicateOption {
        option: String,
        first: String,
        second: String,
    },

    #[error("'{dependent}' requires '{required}', which is not a registered argument")]
    UnknownRequiredArg { dependent: String, required: String },

    #[error("'{0}' cannot require itself")]
    SelfRequirement(String),

    #[error("'{dependent}' requires '{required}', which is itself a dependent argument")]
    RequiresDependent { dependent: String, required: String },

    #[error("invalid argument definition: {0}")]
    InvalidDefinition(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::InvalidDefinition(err.to_string())
    }
}

/// Failures while scanning the command line
#[derive(Error, Debug)]
pub enum ParseError {
    #[error(transparent)]
    Clap(#[from] clap::Error),

    #[error("failed to read matches: {0}")]
    Matches(#[from] clap::parser::MatchesError),
}

impl ParseError {
    /// Print the error and exit the process, the way clap does
    pub fn exit(&self) -> ! {
        match self {
            ParseError::Clap(err) => err.exit(),
            ParseError::Matches(err) => matches_to_clap(err).exit(),
        }
    }
}

/// Wrap a lookup failure so it prints like any other clap error
fn matches_to_clap(err: &clap::parser::MatchesError) -> clap::Error {
    clap::Error::raw(
        ErrorKind::InvalidValue,
        format!("failed to read matches: {}\n", err),
    )
}
