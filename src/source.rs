use crate::errors::{FileOperation, IoError};
use miette::Diagnostic;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum SourceError {
    #[error("description file not found: '{path}'")]
    #[diagnostic(
        code(arbo::source::not_found),
        help("Create the file, or pass its path as the DESCRIPTION argument")
    )]
    NotFound { path: PathBuf },

    #[error("I/O error within source domain")]
    #[diagnostic(code(arbo::source::io))]
    Io(#[from] IoError),
}

/// Returns the tree diagram held in `content`.
///
/// Design documents usually keep the diagram in a fenced code block, so the
/// first ```` ``` ```` or `~~~` block wins. Text without a complete fence is
/// returned unchanged.
pub fn extract_tree(content: &str) -> &str {
    lazy_static::lazy_static! {
        static ref FENCED_BLOCK: regex::Regex = regex::Regex::new(
            r"(?msx)      # multi-line, dot matches newline, extended mode
            ^[\x20\t]*
            (?:
                # 1) backtick fence
                ```[^\n]*\n(?P<backtick>.*?)^[\x20\t]*```
                |
                # 2) tilde fence
                ~~~[^\n]*\n(?P<tilde>.*?)^[\x20\t]*~~~
            )"
        ).expect("a valid regex pattern");
    }

    let Some(captures) = FENCED_BLOCK.captures(content) else {
        return content;
    };

    captures
        .name("backtick")
        .or_else(|| captures.name("tilde"))
        .map(|block| block.as_str())
        .unwrap_or(content)
}

/// Reads the description at `path` and isolates its tree diagram.
///
/// # Errors
///
/// Returns [`SourceError::NotFound`] if nothing exists at `path`, and
/// [`SourceError::Io`] for any other read failure.
pub fn read_description<P: AsRef<Path>>(path: P) -> Result<String, SourceError> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|error| match error.kind() {
        io::ErrorKind::NotFound => SourceError::NotFound {
            path: path.to_path_buf(),
        },
        _ => IoError::new(FileOperation::Read, path.to_path_buf(), error).into(),
    })?;

    log::debug!("read {} bytes from {}", content.len(), path.display());

    Ok(extract_tree(&content).to_string())
}
