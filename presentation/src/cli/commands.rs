//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for trivia-server
#[derive(Parser, Debug)]
#[command(name = "trivia-server")]
#[command(author, version, about = "Trivia API - categorized quiz questions over HTTP/JSON")]
#[command(long_about = r#"
Trivia API serves a bank of categorized trivia questions to the quiz
front-end: paginated listing, search, per-category listing, creation,
deletion and randomized quiz rounds.

Configuration is loaded from (in priority order):
1. TRIVIA_<SECTION>__<KEY> environment variables
2. --config <path>     Explicit config file
3. ./trivia.toml       Project-level config
4. ~/.config/trivia-api/config.toml   Global config

Command-line flags override all of the above.

Example:
  trivia-server --seed
  trivia-server --port 8080 --database /var/lib/trivia/trivia.db
  trivia-server -v --config ./deploy/trivia.toml
"#)]
pub struct Cli {
    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Address to bind
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// SQLite database file
    #[arg(long, value_name = "PATH")]
    pub database: Option<String>,

    /// Load the sample questions when the database is empty
    #[arg(long)]
    pub seed: bool,
}

impl Cli {
    /// Log filter forced by `-v`/`-q`, if any.
    pub fn log_filter_override(&self) -> Option<&'static str> {
        match (self.quiet, self.verbose) {
            (true, _) => Some("warn"),
            (false, 0) => None,
            (false, 1) => Some("debug"),
            (false, _) => Some("trace"),
        }
    }
}
