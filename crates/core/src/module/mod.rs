//! Go module discovery: module root lookup and package path derivation

pub mod gomod;

pub use gomod::GoMod;

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

pub const GO_MOD: &str = "go.mod";

/// Walk up from `dir` until a directory holding a `go.mod` file is found.
pub fn find_module_root(dir: &Path) -> Option<PathBuf> {
    let mut current = dir.to_path_buf();
    loop {
        if current.join(GO_MOD).is_file() {
            return Some(current);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Fully-qualified import path of the package containing `input_file`.
///
/// The module path from `go.mod` followed by the input directory's
/// location below the module root, joined with `/`.
pub fn model_path(input_file: &Path) -> Result<String> {
    let absolute = input_file
        .canonicalize()
        .map_err(|source| Error::ReadFileError {
            path: input_file.to_path_buf(),
            source,
        })?;
    let dir = absolute.parent().ok_or_else(|| {
        Error::ModuleError(format!("{} has no parent directory", absolute.display()))
    })?;

    let root = find_module_root(dir).ok_or_else(|| {
        Error::ModuleError(format!(
            "no {GO_MOD} found in {} or any parent directory",
            dir.display()
        ))
    })?;
    tracing::debug!("Module root: {}", root.display());

    let mod_file = root.join(GO_MOD);
    let content = std::fs::read_to_string(&mod_file).map_err(|source| Error::ReadFileError {
        path: mod_file.clone(),
        source,
    })?;
    let gomod = GoMod::parse(&content).map_err(|e| match e {
        Error::ModuleError(msg) => Error::ModuleError(format!("{}: {msg}", mod_file.display())),
        other => other,
    })?;

    let relative = dir
        .strip_prefix(&root)
        .map_err(|e| Error::ModuleError(format!("{}: {e}", dir.display())))?;
    Ok(join_package_path(&gomod.module_path, relative))
}

fn join_package_path(module_path: &str, relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .fold(module_path.to_string(), |mut acc, part| {
            acc.push('/');
            acc.push_str(&part);
            acc
        })
}
