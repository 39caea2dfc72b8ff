use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tenet", version, about = "Style-guide compliance checks for TypeScript sources")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Report progress and skipped files on stderr
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Check files against the configured rule set
    Check {
        /// Files to check (empty = walk the current directory)
        files: Vec<String>,
        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
    },

    /// List registered rules
    Rules,

    /// Write a starter tenet.json
    Init {
        /// Overwrite an existing tenet.json
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completion scripts
    Completion {
        /// Target shell (bash, zsh, fish, elvish, powershell)
        shell: String,
    },
}
