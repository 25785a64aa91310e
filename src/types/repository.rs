//! Repository domain type
//!
//! This module provides the Repo value object describing a GitHub
//! repository by numeric id, name, description and URL.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Immutable GitHub repository value object
///
/// All four fields are set at construction and exposed through read
/// accessors only. Structural equality and hashing are derived over the
/// full field set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
pub struct Repo {
    id: i64,
    name: String,
    description: String,
    url: String,
}

impl Repo {
    /// Creates a new Repo with the specified id, name, description and URL
    ///
    /// Values are accepted as-is: the id may be any integer including
    /// negative values, and the text fields may be empty. No URL format
    /// validation is performed.
    pub fn new<N, D, U>(id: i64, name: N, description: D, url: U) -> Self
    where
        N: Into<String>,
        D: Into<String>,
        U: Into<String>,
    {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            url: url.into(),
        }
    }

    /// Get the numeric repository id
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Get the repository name as a string
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the repository description as a string
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the repository URL as a string
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl std::fmt::Display for Repo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Repo {{ id: {}, name: {}, description: {}, url: {} }}",
            self.id, self.name, self.description, self.url
        )
    }
}
