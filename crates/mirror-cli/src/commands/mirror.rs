//! The mirror command: resolve exclusions, run the sync, print the result

use std::path::{Path, PathBuf};

use colored::Colorize;

use mirror_core::{
    ExclusionFilters, Mirror, Outcome, SyncAction, SyncEvent, SyncObserver, SyncOptions, SyncReport,
};
use mirror_fs::{LocalFs, NormalizedPath};

use crate::error::{CliError, Result};

/// Everything the mirror command needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct MirrorRequest {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub filters: ExclusionFilters,
    pub dry_run: bool,
    pub json: bool,
}

/// Merge config-file exclusions with the command-line lists, config first.
pub fn build_filters(
    config: Option<&Path>,
    exclude_ext: &[String],
    exclude_dir: &[String],
) -> Result<ExclusionFilters> {
    let from_config = match config {
        Some(path) => {
            if !path.is_file() {
                return Err(CliError::user(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            ExclusionFilters::load(&NormalizedPath::new(path))?
        }
        None => ExclusionFilters::new(),
    };

    let from_cli = ExclusionFilters::new()
        .with_extensions(exclude_ext.iter().flat_map(|list| ExclusionFilters::parse_list(list)))
        .with_dirs(exclude_dir.iter().flat_map(|list| ExclusionFilters::parse_list(list)));

    Ok(from_config.merge(from_cli))
}

/// Run the mirror command.
pub fn run_mirror(request: &MirrorRequest) -> Result<SyncReport> {
    let fs = LocalFs::new();
    let mirror = Mirror::new(
        &fs,
        NormalizedPath::new(&request.source),
        NormalizedPath::new(&request.destination),
    )
    .with_filters(request.filters.clone())
    .with_options(SyncOptions {
        dry_run: request.dry_run,
    });

    tracing::debug!(
        source = %mirror.source(),
        destination = %mirror.destination(),
        exclude_dirs = ?request.filters.dirs(),
        "Starting mirror"
    );

    if request.json {
        let report = mirror.run()?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(report);
    }

    let mut console = Console {
        dry_run: request.dry_run,
    };
    let report = mirror.run_with_observer(&mut console)?;
    print_summary(&report);

    Ok(report)
}

/// Prints the listing line by line while the run progresses.
struct Console {
    dry_run: bool,
}

impl SyncObserver for Console {
    fn on_enumerated(&mut self, source_count: usize, destination_count: usize) {
        println!("- Reading source tree.      File Count: {source_count}");
        println!("- Reading destination tree. File Count: {destination_count}");
        if self.dry_run {
            println!("- Synchronizing {}.", "(dry run)".yellow());
        } else {
            println!("- Synchronizing.");
        }
    }

    fn on_event(&mut self, event: &SyncEvent) {
        let marker = match event.action {
            SyncAction::CreateDir | SyncAction::CopyNew => event.action.marker().green(),
            SyncAction::CopyUpdated => event.action.marker().cyan(),
            SyncAction::DeleteFile | SyncAction::DeleteDir => event.action.marker().red(),
        };
        println!("{}{}", marker, event.path);
        if let Outcome::Failed(reason) = &event.outcome {
            println!("   {} {}", "failed:".red().bold(), reason);
        }
    }
}

fn print_summary(report: &SyncReport) {
    let failures = report.failures().count();
    if failures > 0 {
        println!(
            "- Finished with {} failed {}.",
            failures.to_string().red().bold(),
            if failures == 1 { "action" } else { "actions" }
        );
    } else {
        println!("- Finished.");
    }
}
