//! Parse results and deferred resolution of dependent arguments
//!
//! Scanning writes ordinary arguments straight into a [`Namespace`] as
//! committed values, while dependent arguments are parked as pending
//! [`Capture`]s. [`Namespace::resolve`] must be called once scanning is done:
//! it commits each capture whose requirements are met, drops the rest with a
//! warning, and leaves no pending entries behind.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::dependent::DependentArg;
use crate::table::ArgTable;
use crate::types::Value;

/// A dependent argument seen during scanning, not yet accepted
#[derive(Debug, Clone)]
pub struct Capture {
    option: String,
    raw: Value,
    spec: Arc<DependentArg>,
    table: Arc<ArgTable>,
}

impl Capture {
    pub fn new(
        option: impl Into<String>,
        raw: Value,
        spec: Arc<DependentArg>,
        table: Arc<ArgTable>,
    ) -> Self {
        Self {
            option: option.into(),
            raw,
            spec,
            table,
        }
    }

    /// The option string the value was supplied under
    pub fn option(&self) -> &str {
        &self.option
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn spec(&self) -> &DependentArg {
        &self.spec
    }
}

/// One destination in a [`Namespace`]
#[derive(Debug, Clone)]
pub enum Slot {
    Committed(Value),
    Pending(Capture),
}

/// A dependent argument dropped during resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discarded {
    pub option: String,
    pub dest: String,
    /// Option strings of the arguments it needed, in declaration order
    pub requires: Vec<String>,
}

impl fmt::Display for Discarded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ignored: requires one of {}",
            self.option,
            self.requires.join(", ")
        )
    }
}

/// Destination id to value mapping produced by a parse
#[derive(Debug, Clone, Default)]
pub struct Namespace {
    slots: BTreeMap<String, Slot>,
}

impl Namespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `id` to `value`, replacing whatever was there
    pub fn commit(&mut self, id: impl Into<String>, value: impl Into<Value>) {
        self.slots.insert(id.into(), Slot::Committed(value.into()));
    }

    /// Park a dependent argument until [`resolve`](Self::resolve).
    ///
    /// A later capture for the same id replaces an earlier one.
    pub fn capture(&mut self, id: impl Into<String>, capture: Capture) {
        let id = id.into();
        debug!(id = %id, option = %capture.option, "captured dependent argument");
        self.slots.insert(id, Slot::Pending(capture));
    }

    /// Committed value for `id`; pending captures are not visible
    pub fn get(&self, id: &str) -> Option<&Value> {
        match self.slots.get(id) {
            Some(Slot::Committed(value)) => Some(value),
            _ => None,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn get_str(&self, id: &str) -> Option<&str> {
        self.get(id).and_then(Value::as_str)
    }

    /// `false` when `id` is absent
    pub fn get_flag(&self, id: &str) -> bool {
        self.get(id).and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn get_list(&self, id: &str) -> Option<&[String]> {
        self.get(id).and_then(Value::as_list)
    }

    /// Absent ids are falsy
    pub fn is_truthy(&self, id: &str) -> bool {
        self.get(id).is_some_and(Value::is_truthy)
    }

    /// Committed values in id order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.slots.iter().filter_map(|(id, slot)| match slot {
            Slot::Committed(value) => Some((id.as_str(), value)),
            Slot::Pending(_) => None,
        })
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ids still waiting for resolution
    pub fn pending(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().filter_map(|(id, slot)| match slot {
            Slot::Pending(_) => Some(id.as_str()),
            Slot::Committed(_) => None,
        })
    }

    pub fn is_resolved(&self) -> bool {
        self.pending().next().is_none()
    }

    /// Accept or drop every pending dependent argument.
    ///
    /// Must be called after scanning and before reading dependent values.
    /// Each dropped argument is reported once through `tracing` at WARN.
    /// Calling it again is a no-op.
    pub fn resolve(&mut self) {
        self.resolve_with(|discarded| {
            let requires = discarded.requires.join(", ");
            warn!(option = %discarded.option, requires = %requires, "{}", discarded);
        });
    }

    /// Like [`resolve`](Self::resolve), handing each dropped argument to
    /// `on_discard` instead of logging it.
    ///
    /// Requirements are checked against the values committed before this
    /// call, so the outcome does not depend on the order captures are
    /// visited in.
    pub fn resolve_with<F>(&mut self, mut on_discard: F)
    where
        F: FnMut(&Discarded),
    {
        let (pending, committed): (Vec<_>, Vec<_>) = std::mem::take(&mut self.slots)
            .into_iter()
            .partition(|(_, slot)| matches!(slot, Slot::Pending(_)));
        self.slots = committed.into_iter().collect();

        let mut accepted = Vec::new();
        for (id, slot) in pending {
            let Slot::Pending(capture) = slot else {
                continue;
            };

            let required = capture.spec.required().names();
            if required.iter().any(|name| self.is_truthy(name)) {
                debug!(id = %id, option = %capture.option, "committed dependent argument");
                accepted.push((id, capture.raw));
            } else {
                on_discard(&Discarded {
                    option: capture.option,
                    dest: id,
                    requires: capture.table.display_names(required),
                });
            }
        }

        for (id, value) in accepted {
            self.commit(id, value);
        }
    }
}

impl Serialize for Namespace {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (id, value) in self.iter() {
            map.serialize_entry(id, value)?;
        }
        map.end()
    }
}
