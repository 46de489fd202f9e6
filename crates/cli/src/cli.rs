use std::path::PathBuf;

use clap::{ArgAction, Parser};
use shmock_core::Opts;

/// Generate a Go test double for the Querier interface in a source file
#[derive(Parser, Debug)]
#[command(name = "shmock")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    /// Go source file declaring `type Querier interface`
    pub input: PathBuf,

    /// Template to render instead of the built-in one
    #[arg(short, long, env = "SHMOCK_TEMPLATE")]
    pub template: Option<PathBuf>,

    /// File to write the generated mock to
    #[arg(short, long)]
    pub output: PathBuf,

    /// Package name for the generated file (defaults to the output directory name)
    #[arg(short, long, env = "SHMOCK_PACKAGE")]
    pub package: Option<String>,

    /// Run the result through gofmt
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub format: bool,
}

impl Cli {
    pub fn into_opts(self) -> Opts {
        Opts::new(self.input, self.output)
            .with_template(self.template)
            .with_package(self.package)
            .with_format(self.format)
    }
}
