//! Locating the target interface and walking its method set.

use tree_sitter::Node;

use super::fields::extract_fields;
use super::go_parser::GoAst;
use crate::error::{Error, Result};
use crate::types::Method;

/// The only interface name the generator looks for.
pub const TARGET_INTERFACE: &str = "Querier";

/// Depth-first search for the first `type_spec` or `type_alias` called `name`.
pub fn find_type_spec<'a>(ast: &'a GoAst, name: &str) -> Option<Node<'a>> {
    find_in(ast, ast.root(), name)
}

fn find_in<'a>(ast: &'a GoAst, node: Node<'a>, name: &str) -> Option<Node<'a>> {
    if matches!(node.kind(), "type_spec" | "type_alias")
        && node
            .child_by_field_name("name")
            .is_some_and(|ident| ast.node_text(&ident) == name)
    {
        return Some(node);
    }
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .find_map(|child| find_in(ast, child, name))
}

/// Methods of the `Querier` interface in declaration order.
///
/// Fails with [`Error::NoQuerierFound`] when the file has no such type.
pub fn extract_querier(ast: &GoAst, package: &str) -> Result<Vec<Method>> {
    let spec = find_type_spec(ast, TARGET_INTERFACE).ok_or(Error::NoQuerierFound)?;
    Ok(extract_methods(ast, spec, package))
}

/// One `Method` per method element declared directly in `spec`.
pub fn extract_methods(ast: &GoAst, spec: Node<'_>, package: &str) -> Vec<Method> {
    if let Some(params) = spec.child_by_field_name("type_parameters") {
        tracing::warn!(
            "type parameters {} on {TARGET_INTERFACE} are ignored",
            ast.node_text(&params)
        );
    }

    let Some(body) = spec.child_by_field_name("type") else {
        return Vec::new();
    };
    if body.kind() != "interface_type" {
        tracing::warn!(
            "{TARGET_INTERFACE} is a {} rather than an interface; no methods extracted",
            body.kind()
        );
        return Vec::new();
    }

    let mut methods = Vec::new();
    let mut cursor = body.walk();
    for elem in body.named_children(&mut cursor) {
        match elem.kind() {
            "method_elem" | "method_spec" => {
                let Some(name) = elem.child_by_field_name("name") else {
                    continue;
                };
                let method = Method {
                    name: ast.node_text(&name).to_string(),
                    input: extract_fields(ast, elem.child_by_field_name("parameters"), package),
                    output: extract_fields(ast, elem.child_by_field_name("result"), package),
                };
                tracing::debug!(
                    "Found method {} ({} inputs, {} outputs)",
                    method.name,
                    method.input.len(),
                    method.output.len()
                );
                methods.push(method);
            }
            "comment" => {}
            other => {
                tracing::debug!("Skipping {other} in {TARGET_INTERFACE}: {}", ast.node_text(&elem));
            }
        }
    }
    methods
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::GoParser;
    use crate::types::Field;

    fn methods(source: &str) -> Result<Vec<Method>> {
        let mut parser = GoParser::new().unwrap();
        let ast = parser.parse(source).unwrap();
        let package = ast.package_name().unwrap().to_string();
        extract_querier(&ast, &package)
    }

    #[test]
    fn test_get_user_scenario() {
        let source = r#"
package db

import "context"

type Querier interface {
	GetUser(ctx context.Context, id int) (*User, error)
}
"#;
        let methods = methods(source).unwrap();
        assert_eq!(
            methods,
            vec![Method {
                name: "GetUser".to_string(),
                input: vec![Field::new("ctx", "context.Context"), Field::new("id", "int")],
                output: vec![Field::unnamed("*db.User"), Field::unnamed("error")],
            }]
        );
    }

    #[test]
    fn test_declaration_order_is_preserved() {
        let source = r#"
package db

type Querier interface {
	UpdateAuthor(ctx context.Context, arg UpdateAuthorParams) error
	CreateAuthor(ctx context.Context, name string) (Author, error)
	ListAuthors(ctx context.Context) ([]Author, error)
	DeleteAuthor(ctx context.Context, id int64) error
}
"#;
        let names: Vec<String> = methods(source).unwrap().into_iter().map(|m| m.name).collect();
        assert_eq!(names, ["UpdateAuthor", "CreateAuthor", "ListAuthors", "DeleteAuthor"]);
    }

    #[test]
    fn test_missing_querier() {
        let source = "package db\n\ntype Store interface {\n\tPing() error\n}\n";
        let err = methods(source).unwrap_err();
        assert!(err.is_missing_target());
    }

    #[test]
    fn test_grouped_type_declaration() {
        let source = r#"
package db

type (
	Author struct{ ID int64 }
	Querier interface {
		GetAuthor(id int64) (Author, error)
	}
)
"#;
        let methods = methods(source).unwrap();
        assert_eq!(methods.len(), 1);
        assert_eq!(methods[0].output[0], Field::unnamed("db.Author"));
    }

    #[test]
    fn test_nested_declaration_is_found() {
        let source = r#"
package db

func build() {
	type Querier interface {
		Ping() error
	}
}
"#;
        assert_eq!(methods(source).unwrap()[0].name, "Ping");
    }

    #[test]
    fn test_zero_parameters_and_results() {
        let source = "package db\n\ntype Querier interface {\n\tReset()\n}\n";
        let methods = methods(source).unwrap();
        assert_eq!(methods[0].name, "Reset");
        assert!(methods[0].input.is_empty());
        assert!(methods[0].output.is_empty());
    }

    #[test]
    fn test_embedded_interfaces_contribute_nothing() {
        let source = r#"
package db

type Querier interface {
	io.Closer
	Pinger
	Ping() error
}
"#;
        let methods = methods(source).unwrap();
        assert_eq!(methods.len(), 1);
        assert_eq!(methods[0].name, "Ping");
    }

    #[test]
    fn test_unsupported_type_does_not_stop_siblings() {
        let source = r#"
package db

type Querier interface {
	Listen(ctx context.Context) (chan Event, error)
	Ping() error
}
"#;
        let methods = methods(source).unwrap();
        assert_eq!(methods.len(), 2);
        assert_eq!(methods[0].output[0], Field::unnamed("<error_unhandled_channel_type>"));
        assert_eq!(methods[1].output, vec![Field::unnamed("error")]);
    }

    #[test]
    fn test_alias_declaration_is_found() {
        let source = "package db\n\ntype Querier = interface {\n\tPing() error\n}\n";
        let methods = methods(source).unwrap();
        assert_eq!(methods.len(), 1);
        assert_eq!(methods[0].name, "Ping");
        assert_eq!(methods[0].output, vec![Field::unnamed("error")]);
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let source = "package db\n\ntype Querier interface {\n\tPing() error\n\tPing() bool\n}\n";
        assert_eq!(methods(source).unwrap().len(), 2);
    }

    #[test]
    fn test_non_interface_querier_has_no_methods() {
        let source = "package db\n\ntype Querier struct{ Get func() error }\n";
        assert!(methods(source).unwrap().is_empty());
    }

    #[test]
    fn test_comments_inside_interface() {
        let source = r#"
package db

type Querier interface {
	// Ping checks the connection.
	Ping() error // trailing
}
"#;
        let methods = methods(source).unwrap();
        assert_eq!(methods.len(), 1);
    }
}
