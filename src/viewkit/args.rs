use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "viewkit")]
#[command(about = "Resolve view-template names against a search path", long_about = None)]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a template name and print the matching file path
    #[command(alias = "r")]
    Resolve {
        /// Logical template name (suffix optional)
        name: String,

        /// Base directory to search; repeat to extend the search order
        #[arg(short, long = "path")]
        paths: Vec<String>,

        /// Suffix appended to names lacking an extension
        #[arg(short, long)]
        suffix: Option<String>,

        /// Disable parent-directory traversal protection
        #[arg(long)]
        no_lfi: bool,

        /// JSON file with resolver options (flags override it)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the normalized search path in search order
    Paths {
        /// Base directory; repeat to extend the search order
        #[arg(short, long = "path")]
        paths: Vec<String>,

        /// JSON file with resolver options (flags override it)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
