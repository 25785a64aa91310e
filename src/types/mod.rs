//! Core type system and domain definitions
//!
//! This module provides the central type definitions for the GitHub Domain
//! library. All types are immutable value objects: identity is defined
//! entirely by field values, with equality, hashing and string formatting
//! derived from the field set rather than hand-written per type.

pub mod repository;
pub mod user;

pub use repository::*;
pub use user::*;
