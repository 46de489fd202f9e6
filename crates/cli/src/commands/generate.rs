use anyhow::{Context, Result};
use std::fs;
use tracing::{debug, info};

use shmock_core::{Generator, Opts};

/// Generate the mock and write it to `opts.output_file`.
///
/// The output file is only touched once generation has fully succeeded.
pub fn generate_command(opts: &Opts) -> Result<()> {
    debug!("Generating mock with {:?}", opts);

    let mut generator = Generator::new()?;
    let generated = generator.generate(opts)?;

    if let Some(parent) = opts.output_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(&opts.output_file, &generated)
        .with_context(|| format!("Failed to write {}", opts.output_file.display()))?;

    info!(
        "Wrote {} bytes to {}",
        generated.len(),
        opts.output_file.display()
    );
    Ok(())
}
