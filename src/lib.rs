/// Handles argument parsing.
pub mod cli;

/// Invokes the external TeX compiler over the saved document.
pub mod compile;

/// Configuration types, defaults and file handling.
pub mod config;

/// Constants used throughout the crate.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Renders the LaTeX source text from the configuration.
pub mod format;

/// Core generation pipeline orchestration.
pub mod maker;

/// Saves the generated text to disk.
pub mod save;

/// Configuration validation.
pub mod validate;
