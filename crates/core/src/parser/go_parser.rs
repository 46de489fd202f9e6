use crate::error::{Error, Result};
use std::path::Path;
use tree_sitter::{Node, Parser, Tree};

pub struct GoParser {
    parser: Parser,
}

impl GoParser {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_go::LANGUAGE.into())
            .map_err(|e| Error::TreeSitterError(format!("Failed to set language: {e}")))?;
        Ok(Self { parser })
    }

    /// Parse Go source, rejecting anything with syntax errors.
    pub fn parse(&mut self, source: &str) -> Result<GoAst> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| Error::ParseError("Failed to parse source code".to_string()))?;

        let root = tree.root_node();
        if root.has_error() {
            let location = first_error(root)
                .map(|node| {
                    let point = node.start_position();
                    format!(" at {}:{}", point.row + 1, point.column + 1)
                })
                .unwrap_or_default();
            return Err(Error::ParseError(format!(
                "source contains syntax errors{location}"
            )));
        }

        Ok(GoAst {
            tree,
            source: source.to_string(),
        })
    }

    pub fn parse_file(&mut self, path: &Path) -> Result<GoAst> {
        let source = std::fs::read_to_string(path).map_err(|source| Error::ReadFileError {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse(&source).map_err(|e| match e {
            Error::ParseError(msg) => Error::ParseError(format!("{}: {msg}", path.display())),
            other => other,
        })
    }
}

fn first_error<'t>(node: Node<'t>) -> Option<Node<'t>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .filter(|child| child.has_error() || child.is_missing())
        .find_map(first_error)
}

/// A parsed Go source file
pub struct GoAst {
    tree: Tree,
    source: String,
}

impl GoAst {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn node_text<'a>(&'a self, node: &Node) -> &'a str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }

    /// Name from the `package` clause.
    pub fn package_name(&self) -> Result<&str> {
        let root = self.root();
        let mut cursor = root.walk();
        root.children(&mut cursor)
            .find(|child| child.kind() == "package_clause")
            .and_then(|clause| {
                let mut cursor = clause.walk();
                clause
                    .named_children(&mut cursor)
                    .find(|child| child.kind() == "package_identifier")
            })
            .map(|ident| self.node_text(&ident))
            .ok_or_else(|| Error::ParseError("missing package clause".to_string()))
    }
}
