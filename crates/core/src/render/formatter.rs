//! Post-render source formatting

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Reformats rendered source. Failures mean the template produced
/// source the formatter rejects.
pub trait SourceFormatter {
    fn format(&self, source: &[u8]) -> Result<Vec<u8>>;
}

impl<F> SourceFormatter for F
where
    F: Fn(&[u8]) -> Result<Vec<u8>>,
{
    fn format(&self, source: &[u8]) -> Result<Vec<u8>> {
        self(source)
    }
}

/// Formats Go source by piping it through `gofmt`.
#[derive(Debug, Clone)]
pub struct GoFmt {
    program: PathBuf,
}

impl Default for GoFmt {
    fn default() -> Self {
        Self {
            program: PathBuf::from("gofmt"),
        }
    }
}

impl GoFmt {
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl SourceFormatter for GoFmt {
    fn format(&self, source: &[u8]) -> Result<Vec<u8>> {
        tracing::debug!("Formatting {} bytes with {}", source.len(), self.program.display());

        let mut child = Command::new(&self.program)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                Error::FormatError(format!("failed to run {}: {e}", self.program.display()))
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| Error::FormatError("formatter stdin unavailable".to_string()))?;
        let input = source.to_vec();
        // Feed stdin from another thread so a large output cannot deadlock the pipe
        let writer = std::thread::spawn(move || stdin.write_all(&input));

        let output = child.wait_with_output()?;
        let written = writer
            .join()
            .map_err(|_| Error::FormatError("formatter input thread panicked".to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = stderr.trim();
            return Err(Error::FormatError(if message.is_empty() {
                format!("{} exited with {}", self.program.display(), output.status)
            } else {
                message.to_string()
            }));
        }
        written?;

        Ok(output.stdout)
    }
}
