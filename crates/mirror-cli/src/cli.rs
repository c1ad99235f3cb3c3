//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Mirror - one-way synchronization of a source directory onto a destination
///
/// Files and directories missing or older at the destination are copied;
/// anything at the destination that is not in the source is deleted.
/// Exclusions apply to the source only.
///
/// Examples:
///   mirror D:/photos E:/backup/photos
///   mirror ./src ./dst -etmp,bak -dnode_modules,.git
///   mirror ./src ./dst --config mirror.toml --dry-run
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "mirror")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source directory
    pub source: Option<PathBuf>,

    /// Destination directory
    pub destination: Option<PathBuf>,

    /// Comma-separated file extensions to skip in the source (e.g. -etmp,bak)
    #[arg(short = 'e', long = "exclude-ext", value_name = "EXT,...")]
    pub exclude_ext: Vec<String>,

    /// Comma-separated substrings; source directories whose path contains one are skipped
    #[arg(short = 'd', long = "exclude-dir", value_name = "DIR,...")]
    pub exclude_dir: Vec<String>,

    /// Load exclusions from a TOML, JSON or YAML file
    #[arg(short, long, value_name = "FILE", env = "MIRROR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show what would change without touching the destination
    #[arg(long)]
    pub dry_run: bool,

    /// Print the sync report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
