use tree_sitter::Node;

use super::go_parser::GoAst;
use super::unquote::unquote;
use crate::error::{Error, Result};
use crate::types::Import;

/// Every import in the file, in source order.
///
/// Aliases are copied as written; no default alias is inferred.
pub fn collect_imports(ast: &GoAst) -> Result<Vec<Import>> {
    let root = ast.root();
    let mut imports = Vec::new();
    let mut cursor = root.walk();
    for decl in root
        .named_children(&mut cursor)
        .filter(|n| n.kind() == "import_declaration")
    {
        let mut decl_cursor = decl.walk();
        for child in decl.named_children(&mut decl_cursor) {
            match child.kind() {
                "import_spec" => imports.push(import_from_spec(ast, child)?),
                "import_spec_list" => {
                    let mut list_cursor = child.walk();
                    for spec in child
                        .named_children(&mut list_cursor)
                        .filter(|n| n.kind() == "import_spec")
                    {
                        imports.push(import_from_spec(ast, spec)?);
                    }
                }
                _ => {}
            }
        }
    }
    Ok(imports)
}

fn import_from_spec(ast: &GoAst, spec: Node<'_>) -> Result<Import> {
    let literal = spec
        .child_by_field_name("path")
        .map(|path| ast.node_text(&path))
        .ok_or_else(|| Error::ParseError("import without a path".to_string()))?;
    let path = unquote(literal).map_err(|e| Error::InvalidImportPath {
        literal: literal.to_string(),
        reason: e.to_string(),
    })?;
    let name = spec
        .child_by_field_name("name")
        .map(|name| ast.node_text(&name).to_string())
        .unwrap_or_default();
    Ok(Import { path, name })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::GoParser;

    fn imports(source: &str) -> Result<Vec<Import>> {
        let mut parser = GoParser::new().unwrap();
        let ast = parser.parse(source).unwrap();
        collect_imports(&ast)
    }

    fn import(path: &str, name: &str) -> Import {
        Import {
            path: path.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_grouped_and_single_imports() {
        let source = r#"
package db

import "context"

import (
	"database/sql"
	pg "github.com/jackc/pgx/v5/pgtype"
	_ "github.com/lib/pq"
	. "strings"
)
"#;
        assert_eq!(
            imports(source).unwrap(),
            vec![
                import("context", ""),
                import("database/sql", ""),
                import("github.com/jackc/pgx/v5/pgtype", "pg"),
                import("github.com/lib/pq", "_"),
                import("strings", "."),
            ]
        );
    }

    #[test]
    fn test_no_imports() {
        assert!(imports("package db\n").unwrap().is_empty());
    }

    #[test]
    fn test_raw_string_path() {
        let source = "package db\n\nimport `time`\n";
        assert_eq!(imports(source).unwrap(), vec![import("time", "")]);
    }

    #[test]
    fn test_bad_escape_is_fatal() {
        let source = "package db\n\nimport \"bad\\qpath\"\n";
        match imports(source) {
            Err(Error::InvalidImportPath { literal, .. }) => assert_eq!(literal, "\"bad\\qpath\""),
            other => panic!("expected invalid import path, got {other:?}"),
        }
    }
}
