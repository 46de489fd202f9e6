//! End-to-end pipeline: parse -> extract -> assemble -> render

use crate::{
    config::Opts,
    error::Result,
    module,
    parser::{GoAst, GoParser, collect_imports, extract_querier},
    render::{GoFmt, SourceFormatter},
    types::{MOCK_STRUCT_NAME, Output},
};

/// Build the parts of the IR that come from the source file alone.
///
/// `gen_package` and `model_path` are left empty; [`Generator::parse`]
/// fills them from the options and the enclosing module.
pub fn extract(ast: &GoAst) -> Result<Output> {
    let package = ast.package_name()?.to_string();
    let methods = extract_querier(ast, &package)?;
    let imports = collect_imports(ast)?;
    Ok(Output {
        gen_package: String::new(),
        model_path: String::new(),
        package,
        struct_name: MOCK_STRUCT_NAME.to_string(),
        imports,
        methods,
    })
}

pub struct Generator {
    parser: GoParser,
    formatter: Box<dyn SourceFormatter>,
}

impl Generator {
    pub fn new() -> Result<Self> {
        Ok(Self {
            parser: GoParser::new()?,
            formatter: Box::new(GoFmt::default()),
        })
    }

    pub fn with_formatter(mut self, formatter: impl SourceFormatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Parse `opts.input_file` into a complete `Output`.
    pub fn parse(&mut self, opts: &Opts) -> Result<Output> {
        tracing::debug!("Parsing {}", opts.input_file.display());
        let ast = self.parser.parse_file(&opts.input_file)?;

        let mut output = extract(&ast)?;
        output.gen_package = opts.gen_package()?;
        output.model_path = module::model_path(&opts.input_file)?;

        tracing::debug!(
            "Extracted {} methods and {} imports from package {} ({})",
            output.methods.len(),
            output.imports.len(),
            output.package,
            output.model_path
        );
        Ok(output)
    }

    pub fn render(&self, output: &Output, opts: &Opts) -> Result<Vec<u8>> {
        output.render_with(opts, self.formatter.as_ref())
    }

    /// Parse and render in one step. Nothing is written to disk.
    pub fn generate(&mut self, opts: &Opts) -> Result<Vec<u8>> {
        let output = self.parse(opts)?;
        self.render(&output, opts)
    }
}
