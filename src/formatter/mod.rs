pub mod repository;
pub mod user;

use serde::{Deserialize, Serialize};

pub use repository::*;
pub use user::*;

/// Rendered markdown body for a domain value object
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct MarkdownContent(pub String);

impl MarkdownContent {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MarkdownContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
