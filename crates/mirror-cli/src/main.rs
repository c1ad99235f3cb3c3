//! Mirror CLI
//!
//! One-way mirroring of a source directory tree onto a destination.

mod cli;
mod commands;
mod error;
mod logging;

use clap::{CommandFactory, Parser};
use colored::Colorize;

use cli::Cli;
use commands::MirrorRequest;
use error::Result;

const RULE: &str =
    "==============================================================================";

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to initialize logging: {}", "warning".yellow().bold(), e);
    }

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    if !cli.json {
        println!("{RULE}\n{}\n{RULE}\n", "mirror".green().bold());
    }

    // Fewer than two paths is a request for usage, not an error.
    let (Some(source), Some(destination)) = (cli.source, cli.destination) else {
        println!("{}", Cli::command().render_help());
        return Ok(());
    };

    let filters = commands::build_filters(cli.config.as_deref(), &cli.exclude_ext, &cli.exclude_dir)?;

    commands::run_mirror(&MirrorRequest {
        source,
        destination,
        filters,
        dry_run: cli.dry_run,
        json: cli.json,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mirror_test_utils::TestTree;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("mirror").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn usage_request_touches_nothing() {
        let tree = TestTree::new();
        let only_source = tree.root().to_string_lossy().to_string();

        assert!(run(parse(&[])).is_ok());
        assert!(run(parse(&[only_source.as_str()])).is_ok());
        assert!(tree.listing().is_empty());
    }

    #[test]
    fn run_applies_extension_exclusions() {
        let source = TestTree::new();
        source.file("keep.txt", "k").file("drop.tmp", "d");
        let destination = TestTree::new();
        let src = source.root().to_string_lossy().to_string();
        let dst = destination.root().to_string_lossy().to_string();

        run(parse(&[src.as_str(), dst.as_str(), "-etmp"])).unwrap();

        assert_eq!(destination.listing(), vec!["keep.txt"]);
    }

    #[test]
    fn run_reports_missing_destination() {
        let source = TestTree::new();
        let src = source.root().to_string_lossy().to_string();
        let dst = source.path("missing").to_string_lossy().to_string();

        let err = run(parse(&[src.as_str(), dst.as_str()])).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
