//! Reads a `compile_commands.json` compilation database and applies the
//! argument adjustment described in spec.md §6, grounded on
//! `examples/original_source/`'s `AbsoluteCompilationDatabase.cpp`: make
//! paths absolute, strip flags the extractor can't use, and inject
//! `-fsyntax-only` plus any configured defines.

use crate::domain::error::CoreError;
use crate::domain::ports::{CompileCommand, CompileDatabase};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct RawEntry {
    directory: PathBuf,
    file: PathBuf,
    #[serde(default)]
    arguments: Vec<String>,
    #[serde(default)]
    command: Option<String>,
}

/// Flags stripped from every compile command because they either affect
/// codegen (irrelevant to extraction) or would make the frontend invoke
/// the linker.
const IGNORED_FLAG_PREFIXES: &[&str] = &["-O", "-W", "-g", "-flto", "-fprofile"];

pub struct JsonCompileDatabase {
    path: PathBuf,
    extra_defines: Vec<String>,
}

impl JsonCompileDatabase {
    pub fn new(path: impl Into<PathBuf>, extra_defines: Vec<String>) -> Self {
        JsonCompileDatabase {
            path: path.into(),
            extra_defines,
        }
    }
}

impl CompileDatabase for JsonCompileDatabase {
    fn commands(&self) -> Result<Vec<CompileCommand>, CoreError> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| CoreError::Input {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        let entries: Vec<RawEntry> =
            serde_json::from_str(&text).map_err(|e| CoreError::Input {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        Ok(entries
            .into_iter()
            .map(|entry| adjust(entry, &self.extra_defines))
            .collect())
    }
}

fn adjust(entry: RawEntry, extra_defines: &[String]) -> CompileCommand {
    let raw_args = entry
        .arguments
        .clone()
        .into_iter()
        .chain(
            entry
                .command
                .iter()
                .flat_map(|c| c.split_whitespace().map(str::to_string)),
        )
        .collect::<Vec<_>>();

    let mut arguments: Vec<String> = raw_args
        .into_iter()
        .filter(|arg| !IGNORED_FLAG_PREFIXES.iter().any(|p| arg.starts_with(p)))
        .map(|arg| absolutize_if_path_like(&arg, &entry.directory))
        .collect();

    if !arguments.iter().any(|a| a == "-fsyntax-only") {
        arguments.push("-fsyntax-only".to_string());
    }
    for define in extra_defines {
        arguments.push(format!("-D{define}"));
    }

    CompileCommand {
        file: absolutize(&entry.file, &entry.directory),
        directory: entry.directory,
        arguments,
    }
}

fn absolutize(path: &Path, directory: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        directory.join(path)
    }
}

fn absolutize_if_path_like(arg: &str, directory: &Path) -> String {
    if let Some(rest) = arg.strip_prefix("-I") {
        if !rest.is_empty() && !Path::new(rest).is_absolute() {
            return format!("-I{}", directory.join(rest).display());
        }
    }
    arg.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_ignored_flags_and_injects_syntax_only() {
        let db = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(
            db.path(),
            r#"[{"directory": "/proj", "file": "a.cpp", "arguments": ["clang++", "-O2", "-Wall", "-Iinc"]}]"#,
        )
        .unwrap();
        let compiledb = JsonCompileDatabase::new(db.path(), vec![]);
        let commands = compiledb.commands().unwrap();
        assert_eq!(commands.len(), 1);
        let cmd = &commands[0];
        assert!(!cmd.arguments.iter().any(|a| a.starts_with("-O")));
        assert!(cmd.arguments.contains(&"-fsyntax-only".to_string()));
        assert_eq!(cmd.file, PathBuf::from("/proj/a.cpp"));
    }

    #[test]
    fn relative_include_paths_become_absolute() {
        let db = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(
            db.path(),
            r#"[{"directory": "/proj", "file": "a.cpp", "arguments": ["-Iinc"]}]"#,
        )
        .unwrap();
        let compiledb = JsonCompileDatabase::new(db.path(), vec![]);
        let commands = compiledb.commands().unwrap();
        assert_eq!(commands[0].arguments[0], "-I/proj/inc");
    }
}
