//! User domain type
//!
//! This module provides the User value object identifying a GitHub account
//! by numeric id, login name and avatar URL.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Immutable GitHub user value object
///
/// Equality and hashing are derived over all three fields, so two users are
/// equal exactly when their `id`, `login` and `avatar_url` all match, and
/// equal users always hash identically. Fields are set at construction and
/// never change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
pub struct User {
    id: i64,
    login: String,
    avatar_url: String,
}

impl User {
    /// Creates a new User with the specified id, login and avatar URL
    ///
    /// Values are accepted as-is: no range check on the id and no format
    /// validation on the login or the URL. Empty strings are allowed.
    pub fn new<L: Into<String>, A: Into<String>>(id: i64, login: L, avatar_url: A) -> Self {
        Self {
            id,
            login: login.into(),
            avatar_url: avatar_url.into(),
        }
    }

    /// Get the numeric user id
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Get the login name as a string
    pub fn login(&self) -> &str {
        &self.login
    }

    /// Get the avatar URL as a string
    pub fn avatar_url(&self) -> &str {
        &self.avatar_url
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "User {{ id: {}, login: {}, avatar_url: {} }}",
            self.id, self.login, self.avatar_url
        )
    }
}
