//! Run configuration for a single generation pass

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Options for one input file -> one generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    pub input_file: PathBuf,
    /// `None` means the built-in template
    pub template_file: Option<PathBuf>,
    pub output_file: PathBuf,
    /// `None` means derive from the output directory name
    pub output_package: Option<String>,
    pub format: bool,
}

impl Opts {
    pub fn new(input_file: impl Into<PathBuf>, output_file: impl Into<PathBuf>) -> Self {
        Self {
            input_file: input_file.into(),
            template_file: None,
            output_file: output_file.into(),
            output_package: None,
            format: true,
        }
    }

    /// Empty paths are treated as "not given".
    pub fn with_template(mut self, template: Option<impl Into<PathBuf>>) -> Self {
        self.template_file = template
            .map(Into::into)
            .filter(|p: &PathBuf| !p.as_os_str().is_empty());
        self
    }

    /// Empty names are treated as "not given".
    pub fn with_package(mut self, package: Option<impl Into<String>>) -> Self {
        self.output_package = package.map(Into::into).filter(|p: &String| !p.is_empty());
        self
    }

    pub fn with_format(mut self, format: bool) -> Self {
        self.format = format;
        self
    }

    /// Package name for the generated file.
    ///
    /// Uses the explicit package when set, otherwise the base name of the
    /// directory the output file will be written into.
    pub fn gen_package(&self) -> Result<String> {
        if let Some(package) = &self.output_package {
            return Ok(package.clone());
        }
        let absolute = std::path::absolute(&self.output_file)?;
        absolute
            .parent()
            .and_then(Path::file_name)
            .and_then(|name| name.to_str())
            .map(str::to_string)
            .ok_or_else(|| {
                Error::ConfigError(format!(
                    "cannot derive a package name from output path {}",
                    self.output_file.display()
                ))
            })
    }
}
