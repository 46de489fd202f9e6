//! Go source parsing and interface extraction using tree-sitter

pub mod fields;
pub mod go_parser;
pub mod imports;
pub mod interface;
pub mod type_renderer;
pub mod unquote;

// Re-export commonly used items
pub use fields::extract_fields;
pub use go_parser::{GoAst, GoParser};
pub use imports::collect_imports;
pub use interface::{TARGET_INTERFACE, extract_querier, find_type_spec};
pub use type_renderer::render_type;
