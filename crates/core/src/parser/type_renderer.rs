//! Canonical spelling of Go type expressions.
//!
//! Only the shapes a typical querier interface needs are supported:
//! identifiers, package-qualified identifiers, slices/arrays and pointers.
//! Anything else becomes a visible `<error_unhandled_KIND>` sentinel.
//!
//! Exported identifiers without a package are assumed to belong to the
//! interface's own package. This is a heuristic, not scope resolution.

use std::sync::LazyLock;

use regex::Regex;
use tree_sitter::Node;

use super::go_parser::GoAst;

/// Optional non-alphanumeric prefix (`*`, `[]`, ...) followed by an
/// exported name with no package qualifier.
static NEEDS_PACKAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^A-Za-z0-9]*)([A-Z][^.]*)$").expect("package qualifier pattern is valid")
});

/// Render a type node, qualifying bare exported names with `package`.
pub fn render_type(ast: &GoAst, node: Node<'_>, package: &str) -> String {
    qualify(&spell(ast, node), package)
}

/// Sentinel for a syntax shape that cannot be rendered.
pub fn unhandled(kind: &str) -> String {
    tracing::warn!("unhandled type {kind}");
    format!("<error_unhandled_{kind}>")
}

pub fn qualify(type_text: &str, package: &str) -> String {
    match NEEDS_PACKAGE.captures(type_text) {
        Some(caps) => format!("{}{package}.{}", &caps[1], &caps[2]),
        None => type_text.to_string(),
    }
}

fn spell(ast: &GoAst, node: Node<'_>) -> String {
    match node.kind() {
        "type_identifier" => ast.node_text(&node).to_string(),
        "qualified_type" => {
            match (
                node.child_by_field_name("package"),
                node.child_by_field_name("name"),
            ) {
                (Some(package), Some(name)) => {
                    format!("{}.{}", ast.node_text(&package), ast.node_text(&name))
                }
                _ => unhandled(node.kind()),
            }
        }
        // `[N]T` loses its length on purpose; both render as `[]T`
        "slice_type" | "array_type" => match node.child_by_field_name("element") {
            Some(element) => format!("[]{}", spell(ast, element)),
            None => unhandled(node.kind()),
        },
        "pointer_type" => match node.named_child(0) {
            Some(pointee) => format!("*{}", spell(ast, pointee)),
            None => unhandled(node.kind()),
        },
        other => unhandled(other),
    }
}
