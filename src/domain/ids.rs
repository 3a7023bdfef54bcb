//! Id minting for new outline nodes.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Source of fresh node ids.
///
/// `taken` holds every id currently in the forest. Generators that can avoid
/// collisions cheaply should do so; the store treats any collision that slips
/// through as an invariant violation.
pub trait IdGenerator: fmt::Debug {
    fn next_id(&mut self, taken: &HashSet<String>) -> String;
}

/// Random v4 UUIDs. Default scheme.
#[derive(Debug, Default, Clone)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self, _taken: &HashSet<String>) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Monotonic `node-N` ids, skipping any already present in the forest.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("node")
    }
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self, taken: &HashSet<String>) -> String {
        loop {
            let candidate = format!("{}-{}", self.prefix, self.next);
            self.next += 1;
            if !taken.contains(&candidate) {
                return candidate;
            }
        }
    }
}

/// Configurable choice of generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdScheme {
    #[default]
    Uuid,
    Sequential,
}

impl IdScheme {
    pub fn generator(self) -> Box<dyn IdGenerator> {
        match self {
            IdScheme::Uuid => Box::new(UuidIds),
            IdScheme::Sequential => Box::new(SequentialIds::default()),
        }
    }
}

impl fmt::Display for IdScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdScheme::Uuid => write!(f, "uuid"),
            IdScheme::Sequential => write!(f, "sequential"),
        }
    }
}

impl FromStr for IdScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uuid" => Ok(IdScheme::Uuid),
            "sequential" => Ok(IdScheme::Sequential),
            other => Err(format!("unknown id scheme: {other}")),
        }
    }
}
