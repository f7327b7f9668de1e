use arbo::api::{Options, Outcome};
use clap::{
    crate_authors, crate_description, crate_name, crate_version, value_parser, Arg, ArgAction,
    Command,
};
use colored::Colorize;
use std::path::PathBuf;

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .arg(
            Arg::new("description")
                .help("File holding the tree diagram [default: structure.md]")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Directory the tree is created under [default: ./output_project]")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Configuration file [default: arbo.toml when present]")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("dry-run")
                .short('n')
                .long("dry-run")
                .help("Preview the tree without creating anything")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("confirm")
                .long("confirm")
                .help("Preview the tree and ask before creating it")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("yes")
                .short('y')
                .long("yes")
                .help("Never ask for confirmation")
                .action(ArgAction::SetTrue)
                .conflicts_with("confirm"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let default_filter = if matches.get_flag("verbose") {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let options = Options {
        description: matches.get_one::<PathBuf>("description").cloned(),
        output: matches.get_one::<PathBuf>("output").cloned(),
        config: matches.get_one::<PathBuf>("config").cloned(),
        dry_run: matches.get_flag("dry-run"),
        confirm: matches.get_flag("confirm"),
        assume_yes: matches.get_flag("yes"),
    };

    match arbo::api::generate(&options)? {
        Outcome::Created { output, .. } => {
            println!("{} {}", "Tree created under".green(), output.display());
        }
        Outcome::Planned { root, .. } => {
            println!("{} {}", "Dry run, nothing written for".yellow(), root.display());
        }
        Outcome::Canceled => {
            println!("{}", "Canceled, nothing written".yellow());
        }
        Outcome::Empty => {
            println!("{}", "Description is empty, nothing to create".yellow());
        }
    }

    Ok(())
}
