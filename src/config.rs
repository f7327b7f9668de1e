use crate::errors::{FileOperation, IoError, ParseError};
use miette::Diagnostic;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "arbo.toml";

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("I/O error within config domain")]
    #[diagnostic(code(arbo::config::io))]
    Io(#[from] IoError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// File holding the tree description.
    pub structure: PathBuf,
    /// Directory the tree is created under.
    pub output: PathBuf,
    /// Preview the tree and ask before writing anything.
    pub confirm: bool,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            structure: PathBuf::from("structure.md"),
            output: PathBuf::from("./output_project"),
            confirm: false,
        }
    }
}
impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path)
            .map_err(|error| IoError::new(FileOperation::Read, path.to_path_buf(), error))?;

        let parsed = toml::from_str(&content)
            .map_err(|error| ParseError::new(path.to_path_buf(), error))?;

        Ok(parsed)
    }
    /// Loads `explicit` if given, otherwise [`CONFIG_FILE_NAME`] from
    /// `working_dir` when it exists, otherwise the defaults.
    pub fn discover(working_dir: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let default_file = working_dir.join(CONFIG_FILE_NAME);

        if default_file.is_file() {
            log::debug!("using config {}", default_file.display());
            Self::from_file(default_file)
        } else {
            Ok(Self::default())
        }
    }
}
