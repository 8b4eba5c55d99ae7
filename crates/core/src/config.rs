//! Declarative dependent-argument definitions
//!
//! Definitions are read from JSON so that a program can extend its command
//! line without recompiling:
//!
//! ```json
//! {
//!   "dependents": [
//!     { "id": "output", "long": "output", "required_args": ["format"] }
//!   ]
//! }
//! ```

use serde::Deserialize;
use std::path::Path;

use crate::dependent::{DependentArg, RequiredArgs};
use crate::errors::ConfigError;

fn default_num_args() -> usize {
    1
}

/// One dependent argument as written in a definition file
#[derive(Debug, Clone, Deserialize)]
pub struct DependentArgConfig {
    pub id: String,

    #[serde(default)]
    pub long: Option<String>,

    #[serde(default)]
    pub short: Option<char>,

    #[serde(default)]
    pub aliases: Vec<String>,

    /// Kept as raw JSON so a missing, null or mixed-type list reports a
    /// precise error instead of a generic deserialization failure
    #[serde(default)]
    pub required_args: serde_json::Value,

    #[serde(default = "default_num_args")]
    pub num_args: usize,

    #[serde(default)]
    pub help: Option<String>,

    #[serde(default)]
    pub value_name: Option<String>,
}

impl TryFrom<DependentArgConfig> for DependentArg {
    type Error = ConfigError;

    fn try_from(config: DependentArgConfig) -> Result<Self, Self::Error> {
        let required = RequiredArgs::try_from(&config.required_args)?;
        let mut arg = DependentArg::with_required(config.id, required).num_args(config.num_args);

        if let Some(long) = config.long {
            arg = arg.long(long);
        }
        if let Some(short) = config.short {
            arg = arg.short(short);
        }
        for alias in config.aliases {
            arg = arg.alias(alias);
        }
        if let Some(help) = config.help {
            arg = arg.help(help);
        }
        if let Some(name) = config.value_name {
            arg = arg.value_name(name);
        }
        Ok(arg)
    }
}

/// Top-level shape of a definition file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DefinitionFile {
    #[serde(default)]
    pub dependents: Vec<DependentArgConfig>,
}

impl DefinitionFile {
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|err| {
            ConfigError::InvalidDefinition(format!("{}: {}", path.display(), err))
        })?;
        Self::from_json(&content)
    }

    /// Validate every entry, failing on the first bad one
    pub fn into_dependents(self) -> Result<Vec<DependentArg>, ConfigError> {
        self.dependents.into_iter().map(DependentArg::try_from).collect()
    }
}
