use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster", version)]
#[command(about = "Query a plain text student roster", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Roster files to load (one "id first last gpa major" record per line)
    #[arg(short, long = "input", global = true, value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// Write records to this file instead of stdout
    #[arg(short, long, global = true, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Normalize names and majors while loading
    #[arg(short, long, global = true)]
    pub normalize: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every student, most recently loaded first
    #[command(alias = "ls")]
    List,

    /// Show the student with the given id
    Get { id: i32 },

    /// Find students by exact last name
    #[command(name = "last-name", alias = "ln")]
    LastName { name: String },

    /// Find students whose major shares the first three characters
    Major {
        /// Major code (at least 3 characters)
        prefix: String,
    },

    /// Report whether an id is already taken
    Check { id: i32 },

    /// Get or set configuration
    Config {
        /// Configuration key (casing, normalize-on-load)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

impl Commands {
    /// Whether the command produces record lines (and so may open `--output`).
    pub fn lists_records(&self) -> bool {
        !matches!(self, Commands::Check { .. } | Commands::Config { .. })
    }
}
