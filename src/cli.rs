use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "lx",
    version,
    about = "List executables together with their lx: annotations",
    long_about = "lx walks a directory tree, finds executable text files and prints the comment \
                  following the `lx:` marker in each of them. Given a single file, it prints every \
                  annotation in that file instead."
)]
pub struct Cli {
    /// Directory to scan, or a single file to describe
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Directory to skip, matched exactly against walked paths (repeatable)
    #[arg(short, long = "skip", value_name = "DIR")]
    pub skip: Vec<PathBuf>,

    /// Annotation marker [default: lx:]
    #[arg(long, value_name = "TEXT")]
    pub sigil: Option<String>,

    /// Overall scan deadline in milliseconds, 0 disables it [default: 1000]
    #[arg(short, long, value_name = "MILLIS")]
    pub timeout: Option<u64>,

    /// Number of files processed concurrently [default: available parallelism]
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Follow symbolic links while walking
    #[arg(short = 'L', long)]
    pub follow_symlinks: bool,

    /// Output format [default: terminal]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file (overrides .lx.yaml discovery)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
