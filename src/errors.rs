use miette::Diagnostic;
use std::{fmt, path::PathBuf};
use thiserror::Error;

/// Filesystem step that failed while reading a description or building a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    Read,
    CreateFile,
    Mkdir,
}
impl fmt::Display for FileOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self {
            Self::Read => "reading",
            Self::CreateFile => "creating empty file",
            Self::Mkdir => "creating directory",
        };
        f.write_str(action)
    }
}

#[derive(Debug, Error, Diagnostic)]
#[error("{operation} '{path}' failed")]
#[diagnostic(
    code(arbo::io),
    help(
        "Check write permissions under the output directory, and that no file already \
         occupies a path the tree declares as a directory (or the reverse)."
    )
)]
pub struct IoError {
    pub operation: FileOperation,
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
impl IoError {
    pub fn new(operation: FileOperation, path: PathBuf, error: std::io::Error) -> Self {
        Self {
            operation,
            path,
            source: error,
        }
    }
}

/// `arbo.toml` exists but is not a valid configuration.
#[derive(Debug, Error, Diagnostic)]
#[error("Parsing error: invalid configuration in '{path}'")]
#[diagnostic(
    code(arbo::config::parse),
    help(
        "arbo.toml accepts only `structure` (description file), `output` (target \
         directory) and `confirm` (true/false)."
    )
)]
pub struct ParseError {
    pub path: PathBuf,
    #[source]
    pub source: toml::de::Error,
}
impl ParseError {
    pub fn new(path: PathBuf, error: toml::de::Error) -> Self {
        Self {
            path,
            source: error,
        }
    }
}
