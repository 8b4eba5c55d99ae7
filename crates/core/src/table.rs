//! Registered argument names, used to word diagnostics

use clap::Arg;
use std::collections::BTreeMap;

/// Maps every registered argument id to the option string a user types
#[derive(Debug, Clone, Default)]
pub struct ArgTable {
    names: BTreeMap<String, String>,
}

impl ArgTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a plain clap argument
    pub fn insert_arg(&mut self, arg: &Arg) {
        self.insert(arg.get_id().as_str(), display_name(arg));
    }

    pub fn insert(&mut self, id: impl Into<String>, display: impl Into<String>) {
        self.names.insert(id.into(), display.into());
    }

    pub fn contains(&self, id: &str) -> bool {
        self.names.contains_key(id)
    }

    pub fn display_name(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Option strings for `ids`, in the order given.
    ///
    /// Ids that were never registered are left out.
    pub fn display_names(&self, ids: &[String]) -> Vec<String> {
        ids.iter()
            .filter_map(|id| self.display_name(id))
            .map(str::to_string)
            .collect()
    }
}

/// `--long`, else `-s`, else the bare id for positionals
pub fn display_name(arg: &Arg) -> String {
    if let Some(long) = arg.get_long() {
        format!("--{}", long)
    } else if let Some(short) = arg.get_short() {
        format!("-{}", short)
    } else {
        arg.get_id().as_str().to_string()
    }
}
