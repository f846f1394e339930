//! Error types for the I/O surface around the parser and formatter.
//!
//! Parsing and formatting themselves never fail. We use `thiserror` for the
//! library-style errors below and `anyhow` for propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while reading a dump
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read input: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Input is empty")]
    Empty,
}

/// Errors that can occur while loading a theme file
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Failed to read theme file: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Theme TOML parse error: {0}")]
    ParseFailed(#[from] toml::de::Error),

    #[error("Unknown color '{value}' for {field}")]
    InvalidColor { field: String, value: String },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
