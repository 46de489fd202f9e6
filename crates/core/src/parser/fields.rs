use tree_sitter::Node;

use super::go_parser::GoAst;
use super::type_renderer::{render_type, unhandled};
use crate::types::Field;

/// Expand a parameter or result list into one `Field` per name.
///
/// `list` is either a `parameter_list` or, for single unnamed results,
/// the bare result type. `None` yields no fields.
pub fn extract_fields(ast: &GoAst, list: Option<Node<'_>>, package: &str) -> Vec<Field> {
    let Some(list) = list else {
        return Vec::new();
    };

    if list.kind() != "parameter_list" {
        return vec![Field::unnamed(render_type(ast, list, package))];
    }

    let mut fields = Vec::new();
    let mut cursor = list.walk();
    for decl in list.named_children(&mut cursor) {
        let type_text = match decl.kind() {
            "parameter_declaration" => match decl.child_by_field_name("type") {
                Some(type_node) => render_type(ast, type_node, package),
                None => unhandled(decl.kind()),
            },
            "variadic_parameter_declaration" => unhandled(decl.kind()),
            _ => continue,
        };

        let mut name_cursor = decl.walk();
        let names: Vec<&str> = decl
            .children_by_field_name("name", &mut name_cursor)
            .map(|name| ast.node_text(&name))
            .collect();

        if names.is_empty() {
            fields.push(Field::unnamed(type_text));
        } else {
            fields.extend(names.into_iter().map(|name| Field::new(name, type_text.clone())));
        }
    }
    fields
}
