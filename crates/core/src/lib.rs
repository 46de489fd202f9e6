//! shmock - generate Go test doubles for a `Querier` interface
//!
//! This crate provides functionality to:
//! - Parse a Go source file and locate its `Querier` interface
//! - Extract method signatures into a template-friendly IR
//! - Resolve the package's import path from the enclosing `go.mod`
//! - Render the IR through a template and optionally `gofmt` the result
pub mod config;
pub mod error;
pub mod generator;
pub mod module;
pub mod parser;
pub mod render;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use config::Opts;
pub use generator::{Generator, extract};
pub use render::{DEFAULT_TEMPLATE, GoFmt, SourceFormatter};
