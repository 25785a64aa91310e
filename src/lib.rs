/// Output formatting utilities for Markdown representations
pub mod formatter;

/// Core type definitions and domain models used throughout the library
pub mod types;
