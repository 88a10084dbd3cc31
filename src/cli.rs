use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing::Level;

#[derive(Debug, Parser)]
#[command(name = "docq", version)]
#[command(about = "View documentation in the console, like ri", long_about = None)]
#[command(after_help = "Example: docq String#gsub")]
pub struct Cli {
    /// Path to an object (e.g. `Foo::Bar#baz`), or a pattern to search for
    pub query: Option<String>,

    #[arg(hide = true)]
    pub ignored: Vec<String>,

    /// Use a specified documentation database to search in
    #[arg(short = 'b', long = "db", value_name = "FILE", action = ArgAction::Append)]
    pub databases: Vec<PathBuf>,

    /// No pager
    #[arg(short = 'T', long)]
    pub no_pager: bool,

    /// Pager program to display documentation with
    #[arg(short, long, value_name = "PAGER")]
    pub pager: Option<String>,

    /// Do not look for documentation in cargo packages
    #[arg(long)]
    pub no_discovery: bool,

    /// Show no warnings
    #[arg(short, long, conflicts_with_all = ["verbose", "debug"])]
    pub quiet: bool,

    /// Show more information
    #[arg(long)]
    pub verbose: bool,

    /// Show debugging information
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    pub const fn log_level(&self) -> Level {
        if self.debug {
            Level::DEBUG
        } else if self.verbose {
            Level::INFO
        } else if self.quiet {
            Level::ERROR
        } else {
            Level::WARN
        }
    }
}
