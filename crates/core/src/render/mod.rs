//! Template rendering of the extracted `Output`

pub mod filters;
pub mod formatter;

pub use formatter::{GoFmt, SourceFormatter};

use std::borrow::Cow;
use std::path::Path;

use minijinja::{Environment, UndefinedBehavior};

use crate::config::Opts;
use crate::error::{Error, Result};
use crate::types::Output;

/// Template used when no override is given.
pub const DEFAULT_TEMPLATE: &str = include_str!("../../templates/mock.go.tmpl");

const TEMPLATE_NAME: &str = "mock";

fn environment<'source>() -> Environment<'source> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    filters::register(&mut env);
    env
}

/// The override template at `path`, or the built-in one.
pub fn load_template(path: Option<&Path>) -> Result<Cow<'static, str>> {
    match path {
        Some(path) => {
            tracing::debug!("Loading template {}", path.display());
            std::fs::read_to_string(path)
                .map(Cow::Owned)
                .map_err(|source| Error::TemplateReadError {
                    path: path.to_path_buf(),
                    source,
                })
        }
        None => Ok(Cow::Borrowed(DEFAULT_TEMPLATE)),
    }
}

/// Render `template` against `output`.
///
/// Compile failures surface as [`Error::TemplateSyntaxError`], failures
/// while executing as [`Error::TemplateRenderError`].
pub fn render_template(template: &str, output: &Output) -> Result<String> {
    let mut env = environment();
    env.add_template(TEMPLATE_NAME, template)
        .map_err(Error::TemplateSyntaxError)?;
    let tmpl = env
        .get_template(TEMPLATE_NAME)
        .map_err(Error::TemplateSyntaxError)?;
    tmpl.render(output).map_err(Error::TemplateRenderError)
}

impl Output {
    /// Render with the configured template, formatting through `gofmt`
    /// when `opts.format` is set.
    pub fn render(&self, opts: &Opts) -> Result<Vec<u8>> {
        self.render_with(opts, &GoFmt::default())
    }

    pub fn render_with(&self, opts: &Opts, formatter: &dyn SourceFormatter) -> Result<Vec<u8>> {
        let template = load_template(opts.template_file.as_deref())?;
        let rendered = render_template(&template, self)?;
        if !opts.format {
            return Ok(rendered.into_bytes());
        }
        formatter.format(rendered.as_bytes())
    }
}
