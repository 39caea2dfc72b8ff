//! tenet CLI — style-guide compliance checking for TypeScript sources.
//!
//! This binary provides the `tenet` command with subcommands for checking
//! files, listing rules, and writing a starter configuration. See
//! `tenet --help` for usage.

use clap::Parser;

mod cli_args;
mod commands;

use cli_args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let formatter: Box<dyn tenet_output::OutputFormatter> = if cli.json {
        Box::new(tenet_output::json::JsonFormatter)
    } else {
        Box::new(tenet_output::human::HumanFormatter)
    };

    let exit_code = match cli.command {
        Commands::Check { files, strict } => {
            commands::check::run(&*formatter, cli.verbose, files, strict)
        }
        Commands::Rules => commands::rules::run(&*formatter),
        Commands::Init { force } => commands::init::run(cli.verbose, force),
        Commands::Completion { shell } => commands::completion::run(&shell),
    };

    std::process::exit(exit_code);
}
