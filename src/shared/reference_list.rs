// src/shared/reference_list.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Add or remove one id inside a list of references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceMethod {
    Add,
    Remove,
}

impl ReferenceMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceMethod::Add => "add",
            ReferenceMethod::Remove => "remove",
        }
    }

    /// `Add` appends even when the id is already present.
    /// `Remove` drops every occurrence and is a no-op when absent.
    pub fn apply(&self, ids: &mut Vec<String>, id: &str) {
        match self {
            ReferenceMethod::Add => ids.push(id.to_string()),
            ReferenceMethod::Remove => ids.retain(|existing| existing != id),
        }
    }
}

impl fmt::Display for ReferenceMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
