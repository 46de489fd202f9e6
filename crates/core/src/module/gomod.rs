//! Minimal `go.mod` reader: only the `module` directive matters here.

use crate::error::{Error, Result};
use crate::parser::unquote::unquote;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoMod {
    pub module_path: String,
}

impl GoMod {
    pub fn parse(content: &str) -> Result<Self> {
        let mut module_path: Option<String> = None;
        // Verb of the `verb ( ... )` block currently open, if any
        let mut block: Option<String> = None;

        for (index, raw_line) in content.lines().enumerate() {
            let line_no = index + 1;
            let tokens: Vec<&str> = strip_comment(raw_line).split_whitespace().collect();
            let Some(&first) = tokens.first() else {
                continue;
            };

            if let Some(verb) = block.as_deref() {
                if first == ")" {
                    block = None;
                } else if verb == "module" {
                    set_module(&mut module_path, &tokens, line_no)?;
                }
                continue;
            }

            if tokens.last() == Some(&"(") && tokens.len() == 2 {
                block = Some(first.to_string());
                continue;
            }

            if first == "module" {
                set_module(&mut module_path, &tokens[1..], line_no)?;
            }
        }

        if block.is_some() {
            return Err(Error::ModuleError("go.mod: unterminated block".to_string()));
        }

        module_path
            .map(|module_path| Self { module_path })
            .ok_or_else(|| Error::ModuleError("go.mod: no module directive".to_string()))
    }
}

fn set_module(slot: &mut Option<String>, args: &[&str], line_no: usize) -> Result<()> {
    if slot.is_some() {
        return Err(Error::ModuleError(format!(
            "go.mod:{line_no}: repeated module statement"
        )));
    }
    let [arg] = args else {
        return Err(Error::ModuleError(format!(
            "go.mod:{line_no}: usage: module module/path"
        )));
    };
    let path = if arg.starts_with('"') || arg.starts_with('`') {
        unquote(arg)
            .map_err(|e| Error::ModuleError(format!("go.mod:{line_no}: invalid quoted string: {e}")))?
    } else {
        arg.to_string()
    };
    if path.is_empty() {
        return Err(Error::ModuleError(format!("go.mod:{line_no}: empty module path")));
    }
    *slot = Some(path);
    Ok(())
}

/// Drop a trailing `//` comment that is not inside a quoted string.
fn strip_comment(line: &str) -> &str {
    let mut quote: Option<char> = None;
    let mut prev = '\0';
    for (i, c) in line.char_indices() {
        match quote {
            Some(q) if c == q && (q == '`' || prev != '\\') => quote = None,
            Some(_) => {}
            None if c == '"' || c == '`' => quote = Some(c),
            None if c == '/' && prev == '/' => return &line[..i - 1],
            None => {}
        }
        prev = c;
    }
    line
}
