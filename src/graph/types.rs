//! Core identifier types for the idea graph

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an idea
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct IdeaId(String);

impl IdeaId {
    pub fn new(id: impl Into<String>) -> Self {
        IdeaId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdeaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for IdeaId {
    fn from(s: String) -> Self {
        IdeaId(s)
    }
}

impl From<&str> for IdeaId {
    fn from(s: &str) -> Self {
        IdeaId(s.to_string())
    }
}

/// Unique identifier for a cluster
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ClusterId(String);

impl ClusterId {
    pub fn new(id: impl Into<String>) -> Self {
        ClusterId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ClusterId {
    fn from(s: String) -> Self {
        ClusterId(s)
    }
}

impl From<&str> for ClusterId {
    fn from(s: &str) -> Self {
        ClusterId(s.to_string())
    }
}
