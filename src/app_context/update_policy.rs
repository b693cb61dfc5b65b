use std::fmt;

use serde::{Deserialize, Serialize};

/// Presence of one optional mutation argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Patch<T> {
    /// Argument not supplied
    Absent,
    /// Argument supplied as an explicit null
    Null,
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Absent
    }
}

/// Decides which optional arguments of the details mutations overwrite stored values.
///
/// `Legacy` keeps the historical behaviour: `name`, `title` and `assigneeEmail`
/// are only written when non-empty, while `description` is written whenever it is
/// supplied, so an empty description is stored but an empty title is ignored.
/// Null arguments are treated as absent.
///
/// `ExplicitPresence` writes every supplied value, empty strings included. An
/// explicit null clears nullable columns and is ignored for text columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum UpdatePolicy {
    #[default]
    Legacy,
    ExplicitPresence,
}

impl UpdatePolicy {
    /// Resolve a text column that the legacy policy guards with a non-empty check.
    pub fn non_empty_text(self, patch: Patch<String>) -> Option<String> {
        match patch {
            Patch::Value(value) if self == UpdatePolicy::Legacy && value.is_empty() => None,
            Patch::Value(value) => Some(value),
            Patch::Absent | Patch::Null => None,
        }
    }

    /// Resolve a text column that is written whenever it is supplied.
    pub fn present_text(self, patch: Patch<String>) -> Option<String> {
        match patch {
            Patch::Value(value) => Some(value),
            Patch::Absent | Patch::Null => None,
        }
    }

    /// Resolve a nullable column. The outer `Option` says whether to write at all.
    pub fn nullable<T>(self, patch: Patch<T>) -> Option<Option<T>> {
        match patch {
            Patch::Value(value) => Some(Some(value)),
            Patch::Null if self == UpdatePolicy::ExplicitPresence => Some(None),
            Patch::Null | Patch::Absent => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UpdatePolicy::Legacy => "legacy",
            UpdatePolicy::ExplicitPresence => "explicit-presence",
        }
    }
}

impl fmt::Display for UpdatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
