//! A clap command extended with dependent arguments
//!
//! ```no_run
//! use clap::{Arg, ArgAction};
//! use depargs_core::{DependentArg, DependentParser};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let parser = DependentParser::builder("demo")
//!     .arg(Arg::new("primary1").long("primary1").action(ArgAction::SetTrue))
//!     .arg(Arg::new("primary2").long("primary2").action(ArgAction::SetTrue))
//!     .dependent(DependentArg::new("dependent", ["primary1", "primary2"])?.long("dependent"))
//!     .build()?;
//!
//! let mut ns = parser.try_parse_from(["demo", "--dependent", "value", "--primary2"])?;
//! ns.resolve();
//! assert_eq!(ns.get_str("dependent"), Some("value"));
//! # Ok(())
//! # }
//! ```

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::collections::{HashMap, HashSet};
use std::ffi::OsString;
use std::sync::Arc;
use tracing::debug;

use crate::dependent::DependentArg;
use crate::errors::{ConfigError, ParseError};
use crate::namespace::{Capture, Namespace};
use crate::table::ArgTable;
use crate::types::Value;

/// How an ordinary argument's value is read back out of clap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlainKind {
    Flag,
    Count,
    Values { multiple: bool },
}

#[derive(Debug, Clone)]
struct PlainArg {
    id: String,
    kind: PlainKind,
}

impl PlainArg {
    fn from_arg(arg: &Arg) -> Option<Self> {
        let kind = match arg.get_action() {
            ArgAction::SetTrue | ArgAction::SetFalse => PlainKind::Flag,
            ArgAction::Count => PlainKind::Count,
            ArgAction::Set => PlainKind::Values {
                multiple: arg.get_num_args().is_some_and(|r| r.max_values() > 1),
            },
            ArgAction::Append => PlainKind::Values { multiple: true },
            // help, version and anything else that never carries a value
            _ => return None,
        };
        Some(Self {
            id: arg.get_id().as_str().to_string(),
            kind,
        })
    }

    fn read(&self, matches: &ArgMatches) -> Result<Option<Value>, ParseError> {
        let value = match self.kind {
            PlainKind::Flag => matches
                .try_get_one::<bool>(&self.id)?
                .map(|b| Value::Bool(*b)),
            PlainKind::Count => matches
                .try_get_one::<u8>(&self.id)?
                .map(|n| Value::Count(*n)),
            PlainKind::Values { multiple } => {
                matches.try_get_raw(&self.id)?.map(|raw| {
                    let values: Vec<String> = raw.map(|v| v.to_string_lossy().into_owned()).collect();
                    to_value(values, multiple)
                })
            }
        };
        Ok(value)
    }
}

fn to_value(mut values: Vec<String>, multiple: bool) -> Value {
    if multiple {
        Value::List(values)
    } else if values.is_empty() {
        Value::Str(String::new())
    } else {
        Value::Str(values.swap_remove(0))
    }
}

/// Every option spelling in use, mapped to the id that owns it
#[derive(Debug, Default)]
struct OptionRegistry {
    owners: HashMap<String, String>,
}

impl OptionRegistry {
    fn claim(&mut self, option: String, id: &str) -> Result<(), ConfigError> {
        match self.owners.get(&option) {
            Some(first) if first != id => Err(ConfigError::DuplicateOption {
                option,
                first: first.clone(),
                second: id.to_string(),
            }),
            _ => {
                self.owners.insert(option, id.to_string());
                Ok(())
            }
        }
    }

    fn claim_arg(&mut self, arg: &Arg) -> Result<(), ConfigError> {
        let id = arg.get_id().as_str();
        if let Some(long) = arg.get_long() {
            self.claim(format!("--{}", long), id)?;
        }
        for alias in arg.get_all_aliases().unwrap_or_default() {
            self.claim(format!("--{}", alias), id)?;
        }
        if let Some(short) = arg.get_short() {
            self.claim(format!("-{}", short), id)?;
        }
        for alias in arg.get_all_short_aliases().unwrap_or_default() {
            self.claim(format!("-{}", alias), id)?;
        }
        Ok(())
    }

    fn claim_dependent(&mut self, dependent: &DependentArg) -> Result<(), ConfigError> {
        let id = dependent.id();
        if let Some(long) = dependent.get_long() {
            self.claim(format!("--{}", long), id)?;
        }
        for alias in dependent.get_aliases() {
            self.claim(format!("--{}", alias), id)?;
        }
        if let Some(short) = dependent.get_short() {
            self.claim(format!("-{}", short), id)?;
        }
        Ok(())
    }

    /// The flags clap adds on its own when building the command
    fn claim_generated(&mut self, command: &Command, ids: &HashSet<String>) -> Result<(), ConfigError> {
        if !command.is_disable_help_flag_set() && !ids.contains("help") {
            self.claim("--help".to_string(), "help")?;
            self.claim("-h".to_string(), "help")?;
        }
        let has_version = command.get_version().is_some() || command.get_long_version().is_some();
        if has_version && !command.is_disable_version_flag_set() && !ids.contains("version") {
            self.claim("--version".to_string(), "version")?;
            self.claim("-V".to_string(), "version")?;
        }
        Ok(())
    }
}

/// Collects arguments before validating them all in [`build`](Self::build)
#[derive(Debug)]
pub struct ParserBuilder {
    command: Command,
    dependents: Vec<DependentArg>,
}

impl ParserBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            command: Command::new(name.into()),
            dependents: Vec::new(),
        }
    }

    /// Start from an existing command, keeping its arguments and settings
    pub fn from_command(command: Command) -> Self {
        Self {
            command,
            dependents: Vec::new(),
        }
    }

    pub fn about(mut self, about: impl Into<String>) -> Self {
        self.command = self.command.about(about.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.command = self.command.version(version.into());
        self
    }

    /// Add an ordinary argument
    pub fn arg(mut self, arg: Arg) -> Self {
        self.command = self.command.arg(arg);
        self
    }

    /// Add an argument that is only accepted alongside its requirements
    pub fn dependent(mut self, dependent: DependentArg) -> Self {
        self.dependents.push(dependent);
        self
    }

    pub fn dependents(mut self, dependents: impl IntoIterator<Item = DependentArg>) -> Self {
        self.dependents.extend(dependents);
        self
    }

    /// Validate every declaration and produce the parser.
    ///
    /// Fails on duplicate ids or option strings, on requirements naming
    /// unregistered or dependent arguments, and on dependent arguments that
    /// take no value.
    pub fn build(self) -> Result<DependentParser, ConfigError> {
        let Self {
            mut command,
            dependents,
        } = self;

        let mut table = ArgTable::new();
        let mut options = OptionRegistry::default();
        let mut seen = HashSet::new();
        for arg in command.get_arguments() {
            let id = arg.get_id().as_str();
            if !seen.insert(id.to_string()) {
                return Err(ConfigError::DuplicateArg(id.to_string()));
            }
            options.claim_arg(arg)?;
            table.insert_arg(arg);
        }
        options.claim_generated(&command, &seen)?;

        let dependent_ids: HashSet<&str> = dependents.iter().map(DependentArg::id).collect();
        for dependent in &dependents {
            if !seen.insert(dependent.id().to_string()) {
                return Err(ConfigError::DuplicateArg(dependent.id().to_string()));
            }
            if !dependent.get_num_args().takes_values() {
                return Err(ConfigError::InvalidDefinition(format!(
                    "'{}' must take at least one value",
                    dependent.id()
                )));
            }
            options.claim_dependent(dependent)?;
            table.insert(dependent.id(), dependent.display_name());
        }

        for dependent in &dependents {
            for required in dependent.required().names() {
                if required == dependent.id() {
                    return Err(ConfigError::SelfRequirement(required.clone()));
                }
                if dependent_ids.contains(required.as_str()) {
                    return Err(ConfigError::RequiresDependent {
                        dependent: dependent.id().to_string(),
                        required: required.clone(),
                    });
                }
                if !table.contains(required) {
                    return Err(ConfigError::UnknownRequiredArg {
                        dependent: dependent.id().to_string(),
                        required: required.clone(),
                    });
                }
            }
        }

        for dependent in &dependents {
            let requires = table.display_names(dependent.required().names());
            command = command.arg(dependent.to_clap_arg(&requires));
        }
        command.build();

        let plain = command
            .get_arguments()
            .filter(|arg| !dependent_ids.contains(arg.get_id().as_str()))
            .filter_map(PlainArg::from_arg)
            .collect();

        let value_shorts = command
            .get_arguments()
            .filter(|arg| arg.get_action().takes_values())
            .flat_map(|arg| {
                let mut shorts = arg.get_all_short_aliases().unwrap_or_default();
                shorts.extend(arg.get_short());
                shorts
            })
            .collect();

        Ok(DependentParser {
            command,
            plain,
            value_shorts,
            dependents: dependents.into_iter().map(Arc::new).collect(),
            table: Arc::new(table),
        })
    }
}

/// Scans a command line in one pass, deferring dependent arguments
#[derive(Debug, Clone)]
pub struct DependentParser {
    command: Command,
    plain: Vec<PlainArg>,
    /// Shorts whose argument takes a value, ending a `-abc` cluster
    value_shorts: HashSet<char>,
    dependents: Vec<Arc<DependentArg>>,
    table: Arc<ArgTable>,
}

impl DependentParser {
    pub fn builder(name: impl Into<String>) -> ParserBuilder {
        ParserBuilder::new(name)
    }

    pub fn table(&self) -> &ArgTable {
        &self.table
    }

    pub fn command(&self) -> &Command {
        &self.command
    }

    pub fn render_help(&self) -> String {
        self.command.clone().render_help().to_string()
    }

    /// Scan `args` (including the binary name).
    ///
    /// The returned namespace still holds pending dependent arguments; call
    /// [`Namespace::resolve`] before reading them.
    pub fn try_parse_from<I, T>(&self, args: I) -> Result<Namespace, ParseError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let argv: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let matches = self.command.clone().try_get_matches_from(&argv)?;
        self.scan(&matches, &argv)
    }

    /// Like [`try_parse_from`](Self::try_parse_from), exiting on error
    pub fn parse_from<I, T>(&self, args: I) -> Namespace
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        self.try_parse_from(args).unwrap_or_else(|err| err.exit())
    }

    /// Parse the process arguments, exiting on error
    pub fn parse(&self) -> Namespace {
        self.parse_from(std::env::args_os())
    }

    /// The option string the user last typed for `dependent`.
    ///
    /// Mirrors clap's tokenizing: `--name[=value]` matches longs and aliases,
    /// a `-abc` cluster is read until a value-taking short, and `--` ends
    /// option processing.
    fn typed_option(&self, argv: &[OsString], dependent: &DependentArg) -> Option<String> {
        let mut found = None;
        for token in argv.iter().skip(1).filter_map(|t| t.to_str()) {
            if token == "--" {
                break;
            }
            if let Some(long) = token.strip_prefix("--") {
                let name = long.split_once('=').map_or(long, |(name, _)| name);
                if dependent.matches_long(name) {
                    found = Some(format!("--{}", name));
                }
            } else if let Some(cluster) = token.strip_prefix('-') {
                for c in cluster.chars() {
                    if dependent.get_short() == Some(c) {
                        found = Some(format!("-{}", c));
                        break;
                    }
                    if self.value_shorts.contains(&c) {
                        break;
                    }
                }
            }
        }
        found
    }

    fn scan(&self, matches: &ArgMatches, argv: &[OsString]) -> Result<Namespace, ParseError> {
        let mut ns = Namespace::new();

        for arg in &self.plain {
            if let Some(value) = arg.read(matches)? {
                ns.commit(arg.id.clone(), value);
            }
        }

        for dependent in &self.dependents {
            let last = matches
                .try_get_raw_occurrences(dependent.id())?
                .and_then(|occurrences| occurrences.last());
            let Some(raw) = last else {
                continue;
            };

            let values: Vec<String> = raw.map(|v| v.to_string_lossy().into_owned()).collect();
            let option = self
                .typed_option(argv, dependent)
                .unwrap_or_else(|| dependent.display_name());
            let capture = Capture::new(
                option,
                to_value(values, dependent.is_multi_valued()),
                Arc::clone(dependent),
                Arc::clone(&self.table),
            );
            ns.capture(dependent.id(), capture);
        }

        debug!(
            committed = ns.len(),
            pending = ns.pending().count(),
            "scanned command line"
        );
        Ok(ns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::Discarded;

    fn demo_parser() -> DependentParser {
        DependentParser::builder("demo")
            .arg(Arg::new("primary1").long("primary1").action(ArgAction::SetTrue))
            .arg(Arg::new("primary2").long("primary2").action(ArgAction::SetTrue))
            .dependent(
                DependentArg::new("dependent", ["primary1", "primary2"])
                    .unwrap()
                    .long("dependent"),
            )
            .build()
            .unwrap()
    }

    fn run(parser: &DependentParser, args: &[&str]) -> (Namespace, Vec<Discarded>) {
        let argv = std::iter::once("demo").chain(args.iter().copied());
        let mut ns = parser.try_parse_from(argv).unwrap();
        let mut discarded = Vec::new();
        ns.resolve_with(|d| discarded.push(d.clone()));
        (ns, discarded)
    }

    fn permutations(items: &[&'static str]) -> Vec<Vec<&'static str>> {
        if items.len() <= 1 {
            return vec![items.to_vec()];
        }
        let mut out = Vec::new();
        for i in 0..items.len() {
            let mut rest = items.to_vec();
            let head = rest.remove(i);
            for mut tail in permutations(&rest) {
                tail.insert(0, head);
                out.push(tail);
            }
        }
        out
    }

    #[test]
    fn test_prerequisite_then_dependent() {
        let (ns, discarded) = run(&demo_parser(), &["--primary1", "--dependent", "value"]);
        assert!(ns.get_flag("primary1"));
        assert_eq!(ns.get_str("dependent"), Some("value"));
        assert!(discarded.is_empty());
    }

    #[test]
    fn test_dependent_then_prerequisite() {
        let (ns, discarded) = run(&demo_parser(), &["--dependent", "value", "--primary2"]);
        assert!(ns.get_flag("primary2"));
        assert_eq!(ns.get_str("dependent"), Some("value"));
        assert!(discarded.is_empty());
    }

    #[test]
    fn test_dependent_without_prerequisite() {
        let (ns, discarded) = run(&demo_parser(), &["--dependent", "value"]);
        assert!(!ns.contains("dependent"));
        assert_eq!(
            discarded,
            vec![Discarded {
                option: "--dependent".to_string(),
                dest: "dependent".to_string(),
                requires: vec!["--primary1".to_string(), "--primary2".to_string()],
            }]
        );
    }

    #[test]
    fn test_any_prerequisite_suffices() {
        let (ns, discarded) = run(&demo_parser(), &["--primary2", "--dependent", "value"]);
        assert!(!ns.get_flag("primary1"));
        assert_eq!(ns.get_str("dependent"), Some("value"));
        assert!(discarded.is_empty());
    }

    #[test]
    fn test_repeated_dependent_last_wins() {
        let (ns, _) = run(
            &demo_parser(),
            &["--dependent", "first", "--dependent", "second", "--primary1"],
        );
        assert_eq!(ns.get_str("dependent"), Some("second"));
    }

    #[test]
    fn test_scan_never_commits_dependent() {
        let parser = demo_parser();
        let ns = parser
            .try_parse_from(["demo", "--primary1", "--dependent", "value"])
            .unwrap();
        assert!(!ns.contains("dependent"));
        assert_eq!(ns.pending().collect::<Vec<_>>(), vec!["dependent"]);
    }

    #[test]
    fn test_order_independence() {
        let parser = demo_parser();
        let groups: [&[&'static str]; 2] = [&["--primary2", "--dependent=value"], &["--dependent=value"]];
        for group in groups {
            let expected = serde_json::to_value(&run(&parser, group).0).unwrap();
            for order in permutations(group) {
                let (ns, _) = run(&parser, &order);
                assert_eq!(serde_json::to_value(&ns).unwrap(), expected, "order {:?}", order);
            }
        }

        let flags = ["--primary1", "--primary2", "--dependent=value"];
        for order in permutations(&flags) {
            let (ns, discarded) = run(&parser, &order);
            assert_eq!(ns.get_str("dependent"), Some("value"));
            assert!(discarded.is_empty());
        }
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let parser = demo_parser();
        let mut ns = parser.try_parse_from(["demo", "--dependent", "value"]).unwrap();
        ns.resolve();
        let once = serde_json::to_value(&ns).unwrap();

        let mut calls = 0;
        ns.resolve_with(|_| calls += 1);
        assert_eq!(calls, 0);
        assert_eq!(serde_json::to_value(&ns).unwrap(), once);
    }

    #[test]
    fn test_multi_valued_dependent() {
        let parser = DependentParser::builder("demo")
            .arg(Arg::new("input"))
            .dependent(
                DependentArg::new("range", ["input"])
                    .unwrap()
                    .short('r')
                    .num_args(2),
            )
            .build()
            .unwrap();

        let (ns, _) = run(&parser, &["-r", "1", "5", "file.txt"]);
        assert_eq!(ns.get_str("input"), Some("file.txt"));
        assert_eq!(ns.get_list("range"), Some(&["1".to_string(), "5".to_string()][..]));

        let (ns, discarded) = run(&parser, &["-r", "1", "5"]);
        assert!(!ns.contains("range"));
        assert_eq!(discarded[0].to_string(), "-r ignored: requires one of input");
    }

    #[test]
    fn test_count_prerequisite() {
        let parser = DependentParser::builder("demo")
            .arg(Arg::new("verbose").short('v').action(ArgAction::Count))
            .dependent(DependentArg::new("log", ["verbose"]).unwrap().long("log"))
            .build()
            .unwrap();

        let (ns, _) = run(&parser, &["--log", "out.txt", "-vv"]);
        assert_eq!(ns.get("verbose"), Some(&Value::Count(2)));
        assert_eq!(ns.get_str("log"), Some("out.txt"));

        let (ns, discarded) = run(&parser, &["--log", "out.txt"]);
        assert!(!ns.contains("log"));
        assert_eq!(discarded.len(), 1);
    }

    #[test]
    fn test_build_rejects_unknown_requirement() {
        let err = DependentParser::builder("demo")
            .dependent(DependentArg::new("dependent", ["missing"]).unwrap().long("dependent"))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownRequiredArg {
                dependent: "dependent".to_string(),
                required: "missing".to_string()
            }
        );
    }

    #[test]
    fn test_build_rejects_self_and_dependent_requirements() {
        let err = DependentParser::builder("demo")
            .dependent(DependentArg::new("a", ["a"]).unwrap().long("a"))
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::SelfRequirement("a".to_string()));

        let err = DependentParser::builder("demo")
            .arg(Arg::new("flag").long("flag").action(ArgAction::SetTrue))
            .dependent(DependentArg::new("a", ["flag"]).unwrap().long("a"))
            .dependent(DependentArg::new("b", ["a"]).unwrap().long("b"))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::RequiresDependent {
                dependent: "b".to_string(),
                required: "a".to_string()
            }
        );
    }

    #[test]
    fn test_build_rejects_duplicate_id() {
        let err = DependentParser::builder("demo")
            .arg(Arg::new("flag").long("flag").action(ArgAction::SetTrue))
            .dependent(DependentArg::new("flag", ["other"]).unwrap().long("other-flag"))
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::DuplicateArg("flag".to_string()));
    }

    #[test]
    fn test_build_rejects_valueless_dependent() {
        let err = DependentParser::builder("demo")
            .arg(Arg::new("flag").long("flag").action(ArgAction::SetTrue))
            .dependent(DependentArg::new("a", ["flag"]).unwrap().long("a").num_args(0))
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDefinition(_)));
    }

    #[test]
    fn test_help_mentions_requirements() {
        let help = demo_parser().render_help();
        assert!(help.contains("[requires one of: --primary1, --primary2]"));
    }

    #[test]
    fn test_unknown_flag_is_parse_error() {
        let err = demo_parser().try_parse_from(["demo", "--nope"]).unwrap_err();
        assert!(matches!(err, ParseError::Clap(_)));
    }

    fn aliased_parser() -> DependentParser {
        DependentParser::builder("demo")
            .arg(Arg::new("primary1").long("primary1").action(ArgAction::SetTrue))
            .arg(Arg::new("verbose").short('v').action(ArgAction::Count))
            .dependent(
                DependentArg::new("dependent", ["primary1"])
                    .unwrap()
                    .long("dependent")
                    .short('d')
                    .alias("dep"),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_diagnostic_names_typed_option() {
        let parser = aliased_parser();
        let cases: [(&[&str], &str); 5] = [
            (&["-d", "value"], "-d"),
            (&["--dep", "value"], "--dep"),
            (&["--dep=value"], "--dep"),
            (&["-vd", "value"], "-d"),
            (&["--dependent", "first", "-d", "second"], "-d"),
        ];

        for (args, typed) in cases {
            let (ns, discarded) = run(&parser, args);
            assert!(!ns.contains("dependent"));
            assert_eq!(discarded.len(), 1, "args {:?}", args);
            assert_eq!(discarded[0].option, typed, "args {:?}", args);
            assert_eq!(discarded[0].requires, vec!["--primary1"]);
        }
    }

    #[test]
    fn test_alias_value_committed() {
        let (ns, discarded) = run(&aliased_parser(), &["--dep", "value", "--primary1"]);
        assert_eq!(ns.get_str("dependent"), Some("value"));
        assert!(discarded.is_empty());
    }

    #[test]
    fn test_build_rejects_duplicate_long() {
        let err = DependentParser::builder("demo")
            .arg(Arg::new("primary1").long("primary1").action(ArgAction::SetTrue))
            .dependent(DependentArg::new("other", ["primary1"]).unwrap().long("primary1"))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::DuplicateOption {
                option: "--primary1".to_string(),
                first: "primary1".to_string(),
                second: "other".to_string(),
            }
        );
    }

    #[test]
    fn test_build_rejects_duplicate_short_and_alias() {
        let err = DependentParser::builder("demo")
            .arg(Arg::new("verbose").short('v').action(ArgAction::Count))
            .dependent(DependentArg::new("other", ["verbose"]).unwrap().long("other").short('v'))
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateOption { ref option, .. } if option == "-v"));

        let err = DependentParser::builder("demo")
            .arg(Arg::new("quiet").long("quiet").alias("silent").action(ArgAction::SetTrue))
            .dependent(DependentArg::new("other", ["quiet"]).unwrap().long("silent"))
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateOption { ref option, .. } if option == "--silent"));
    }

    #[test]
    fn test_build_rejects_generated_help_and_version() {
        let err = DependentParser::builder("demo")
            .arg(Arg::new("flag").long("flag").action(ArgAction::SetTrue))
            .dependent(DependentArg::new("other", ["flag"]).unwrap().short('h'))
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateOption { ref first, .. } if first == "help"));

        let err = DependentParser::builder("demo")
            .version("1.0")
            .arg(Arg::new("flag").long("flag").action(ArgAction::SetTrue))
            .dependent(DependentArg::new("other", ["flag"]).unwrap().long("version"))
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateOption { ref first, .. } if first == "version"));

        // without a version, -V is free
        assert!(DependentParser::builder("demo")
            .arg(Arg::new("flag").long("flag").action(ArgAction::SetTrue))
            .dependent(DependentArg::new("other", ["flag"]).unwrap().short('V'))
            .build()
            .is_ok());
    }
}
