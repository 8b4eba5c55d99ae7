//! Dependent argument declarations
//!
//! A [`DependentArg`] is accepted only when at least one of the arguments it
//! names in its [`RequiredArgs`] was supplied. Both types validate their input
//! up front so that a bad declaration fails while the parser is being built.

use clap::builder::ValueRange;
use clap::{Arg, ArgAction};

use crate::errors::ConfigError;

/// The non-empty, ordered list of argument ids a dependent argument needs
/// (any one of them is enough)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredArgs(Vec<String>);

impl RequiredArgs {
    pub fn new<I, S>(names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(ConfigError::EmptyRequiredArgs);
        }
        if let Some(index) = names.iter().position(|n| n.trim().is_empty()) {
            return Err(ConfigError::BlankRequiredArg { index });
        }
        Ok(Self(names))
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|n| n == id)
    }
}

impl TryFrom<&serde_json::Value> for RequiredArgs {
    type Error = ConfigError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        let items = match value {
            serde_json::Value::Null => return Err(ConfigError::MissingRequiredArgs),
            serde_json::Value::Array(items) => items,
            other => return Err(ConfigError::RequiredArgsNotList(json_kind(other).to_string())),
        };

        let mut names = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match item.as_str() {
                Some(name) => names.push(name.to_string()),
                None => {
                    return Err(ConfigError::NonStringRequiredArg {
                        index,
                        actual: json_kind(item).to_string(),
                    })
                }
            }
        }
        Self::new(names)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Declaration of an argument whose acceptance depends on other arguments
#[derive(Debug, Clone)]
pub struct DependentArg {
    id: String,
    long: Option<String>,
    short: Option<char>,
    aliases: Vec<String>,
    required: RequiredArgs,
    num_args: ValueRange,
    help: Option<String>,
    value_name: Option<String>,
}

impl DependentArg {
    /// Declare `id`, accepted only if one of `required` is present.
    ///
    /// Without `long` or `short` the argument is positional.
    pub fn new<I, S>(id: impl Into<String>, required: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::with_required(id, RequiredArgs::new(required)?))
    }

    pub fn with_required(id: impl Into<String>, required: RequiredArgs) -> Self {
        Self {
            id: id.into(),
            long: None,
            short: None,
            aliases: Vec::new(),
            required,
            num_args: ValueRange::SINGLE,
            help: None,
            value_name: None,
        }
    }

    pub fn long(mut self, long: impl Into<String>) -> Self {
        self.long = Some(long.into());
        self
    }

    pub fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// How many values one occurrence consumes (defaults to exactly one)
    pub fn num_args(mut self, range: impl Into<ValueRange>) -> Self {
        self.num_args = range.into();
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn value_name(mut self, name: impl Into<String>) -> Self {
        self.value_name = Some(name.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn required(&self) -> &RequiredArgs {
        &self.required
    }

    pub fn get_num_args(&self) -> ValueRange {
        self.num_args
    }

    pub fn get_long(&self) -> Option<&str> {
        self.long.as_deref()
    }

    pub fn get_short(&self) -> Option<char> {
        self.short
    }

    pub fn get_aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Whether `--name` selects this argument
    pub fn matches_long(&self, name: &str) -> bool {
        self.long.as_deref() == Some(name) || self.aliases.iter().any(|a| a == name)
    }

    pub fn is_positional(&self) -> bool {
        self.long.is_none() && self.short.is_none()
    }

    /// The option string shown to users: `--long`, else `-s`, else the id
    pub fn display_name(&self) -> String {
        match (&self.long, self.short) {
            (Some(long), _) => format!("--{}", long),
            (None, Some(short)) => format!("-{}", short),
            (None, None) => self.id.clone(),
        }
    }

    /// Whether one occurrence yields a list rather than a single value
    pub(crate) fn is_multi_valued(&self) -> bool {
        self.num_args.max_values() > 1
    }

    /// Build the clap argument used during the scanning pass.
    ///
    /// Every occurrence is appended so the last one can win at capture time
    /// instead of clap rejecting the repeat.
    pub(crate) fn to_clap_arg(&self, requires: &[String]) -> Arg {
        let mut arg = Arg::new(self.id.clone())
            .action(ArgAction::Append)
            .num_args(self.num_args);

        if let Some(long) = &self.long {
            arg = arg.long(long.clone());
        }
        if let Some(short) = self.short {
            arg = arg.short(short);
        }
        for alias in &self.aliases {
            arg = arg.alias(alias.clone());
        }
        if let Some(name) = &self.value_name {
            arg = arg.value_name(name.clone());
        }

        let suffix = format!("[requires one of: {}]", requires.join(", "));
        let help = match &self.help {
            Some(help) => format!("{} {}", help, suffix),
            None => suffix,
        };
        arg.help(help)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_required_args_rejects_empty() {
        let err = RequiredArgs::new(Vec::<String>::new()).unwrap_err();
        assert_eq!(err, ConfigError::EmptyRequiredArgs);
    }

    #[test]
    fn test_required_args_rejects_blank() {
        let err = RequiredArgs::new(["primary1", "  "]).unwrap_err();
        assert_eq!(err, ConfigError::BlankRequiredArg { index: 1 });
    }

    #[test]
    fn test_required_args_from_json() {
        let required = RequiredArgs::try_from(&json!(["primary1", "primary2"])).unwrap();
        assert_eq!(required.names(), ["primary1", "primary2"]);
        assert!(required.contains("primary2"));
    }

    #[test]
    fn test_required_args_from_json_null() {
        let err = RequiredArgs::try_from(&json!(null)).unwrap_err();
        assert_eq!(err, ConfigError::MissingRequiredArgs);
    }

    #[test]
    fn test_required_args_from_json_not_list() {
        let err = RequiredArgs::try_from(&json!("primary1")).unwrap_err();
        assert_eq!(err, ConfigError::RequiredArgsNotList("string".to_string()));
    }

    #[test]
    fn test_required_args_from_json_mixed_types() {
        let err = RequiredArgs::try_from(&json!(["primary1", 2])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::NonStringRequiredArg {
                index: 1,
                actual: "number".to_string()
            }
        );
    }

    #[test]
    fn test_display_name() {
        let arg = DependentArg::new("dependent", ["primary1"]).unwrap();
        assert!(arg.is_positional());
        assert_eq!(arg.display_name(), "dependent");
        assert_eq!(arg.clone().short('d').display_name(), "-d");
        assert_eq!(arg.short('d').long("dep").display_name(), "--dep");
    }

    #[test]
    fn test_clap_arg_help_lists_requirements() {
        let arg = DependentArg::new("dependent", ["primary1"])
            .unwrap()
            .long("dependent")
            .help("A value")
            .to_clap_arg(&["--primary1".to_string()]);
        assert_eq!(
            arg.get_help().map(|h| h.to_string()),
            Some("A value [requires one of: --primary1]".to_string())
        );
        assert_eq!(arg.get_long(), Some("dependent"));
    }
}
