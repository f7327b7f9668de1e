use inquire::Confirm;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum PromptError {
    #[error("Error occurred trying to prompt user")]
    #[diagnostic(
        code(arbo::prompt::inquire),
        help("Pass --yes to create the tree without asking")
    )]
    Inquire(#[from] inquire::InquireError),
}

/// Asks whether the previewed tree should be written.
pub fn apply_changes() -> Result<bool, PromptError> {
    let answer = Confirm::new("Create this tree?")
        .with_default(false)
        .with_help_message("Existing files listed above will be emptied")
        .prompt()?;

    Ok(answer)
}
