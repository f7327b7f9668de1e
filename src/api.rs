use crate::{
    config::{self, Config},
    materialize::{self, materialize_with},
    preview::preview_as_tree,
    prompt,
    source::{self, read_description},
    vfs::{DiskFS, VirtualFS},
};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ArboError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Source(#[from] source::SourceError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Materialize(#[from] materialize::MaterializeError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Prompt(#[from] prompt::PromptError),
}

/// Caller overrides; anything left `None` comes from the [`Config`].
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub description: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    /// Only preview, never write.
    pub dry_run: bool,
    /// Ask before writing even if the config does not.
    pub confirm: bool,
    /// Never ask.
    pub assume_yes: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created { root: PathBuf, output: PathBuf },
    Planned { root: PathBuf, output: PathBuf },
    Canceled,
    /// The description held no entries.
    Empty,
}

/// Reads the description and creates its tree under the output directory.
///
/// Relative paths, including the default config file, resolve against the
/// process working directory.
///
/// # Errors
///
/// Returns an [`ArboError`] if:
///
/// - The configuration file exists but cannot be read or parsed.
/// - The description file is missing or unreadable.
/// - The user prompt fails.
/// - A directory or file cannot be created.
pub fn generate(options: &Options) -> Result<Outcome, ArboError> {
    let config = Config::discover(Path::new("."), options.config.as_deref())?;

    let description = options
        .description
        .clone()
        .unwrap_or_else(|| config.structure.clone());
    let output = options
        .output
        .clone()
        .unwrap_or_else(|| config.output.clone());

    log::debug!(
        "description: {}, output: {}",
        description.display(),
        output.display()
    );

    let text = read_description(&description)?;

    let mut plan = VirtualFS::new();
    let Some(root) = materialize_with(&mut plan, &output, &text)? else {
        return Ok(Outcome::Empty);
    };

    if options.dry_run {
        preview_as_tree(&plan, &output);
        return Ok(Outcome::Planned { root, output });
    }

    if (config.confirm || options.confirm) && !options.assume_yes {
        preview_as_tree(&plan, &output);

        if !prompt::apply_changes()? {
            log::debug!("tree creation canceled by user");
            return Ok(Outcome::Canceled);
        }
    }

    materialize_with(&mut DiskFS::reporting(), &output, &text)?;

    Ok(Outcome::Created { root, output })
}
