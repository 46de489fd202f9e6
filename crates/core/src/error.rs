use std::io;
use std::path::PathBuf;

/// Errors that can occur while generating a mock
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Failed to read {}: {source}", path.display())]
    ReadFileError { path: PathBuf, source: io::Error },

    #[error("Tree-sitter error: {0}")]
    TreeSitterError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid import path {literal}: {reason}")]
    InvalidImportPath { literal: String, reason: String },

    #[error("no Querier found")]
    NoQuerierFound,

    #[error("Module resolution error: {0}")]
    ModuleError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to open template file {}: {source}", path.display())]
    TemplateReadError { path: PathBuf, source: io::Error },

    #[error("Template syntax error: {0}")]
    TemplateSyntaxError(#[source] minijinja::Error),

    #[error("Template execution error: {0}")]
    TemplateRenderError(#[source] minijinja::Error),

    #[error("Failed to format source: {0}")]
    FormatError(String),
}

impl Error {
    /// True when the input simply has no `Querier` to generate from.
    pub fn is_missing_target(&self) -> bool {
        matches!(self, Error::NoQuerierFound)
    }
}

/// Result type alias for shmock operations
pub type Result<T> = std::result::Result<T, Error>;
