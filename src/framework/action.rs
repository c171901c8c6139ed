//! # Lifecycle Actions
//!
//! The engine drives every resource type through the same five lifecycle actions.
//! Adapters receive the action on the policy hooks that may vary per action
//! (identifier key, result key, propagation delay).

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// A lifecycle action requested by the reconciliation engine.
///
/// The engine's set of actions can grow, so values it sends that this crate does
/// not know about deserialize to [`Action::Unknown`] instead of failing. Adapter
/// code matching on an `Action` should always carry a `_` arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
    List,
    #[serde(other)]
    Unknown,
}

impl Action {
    /// Actions that write to the remote system.
    pub fn is_write(&self) -> bool {
        matches!(self, Action::Create | Action::Update | Action::Delete)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "Create",
            Action::Read => "Read",
            Action::Update => "Update",
            Action::Delete => "Delete",
            Action::List => "List",
            Action::Unknown => "Unknown",
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = std::convert::Infallible;

    /// Parsing never fails; unrecognised names become [`Action::Unknown`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Create" => Action::Create,
            "Read" => Action::Read,
            "Update" => Action::Update,
            "Delete" => Action::Delete,
            "List" => Action::List,
            _ => Action::Unknown,
        })
    }
}
