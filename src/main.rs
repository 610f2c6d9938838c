//! prq CLI entry point.
//!
//! Parses command-line arguments and dispatches to the appropriate command handler.

use clap::{Parser, Subcommand};
use prq::commands::{create_command, list_command, view_command};
use prq::output::print_error;

#[derive(Parser)]
#[command(name = "prq")]
#[command(
    version,
    about = "Open and update pull requests from the current branch",
    after_help = "EXAMPLES:
    # Open (or update) the pull request for the current branch
    prq create

    # Compare against master instead of the tracking branch
    prq create master

    # Open the recorded pull request in the browser
    prq view

    # Browse open pull requests
    prq list
    prq list 2"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a pull request for the current branch, or update the existing one
    Create {
        /// Compare against master instead of the tracking branch
        #[arg(value_parser = ["master"])]
        master: Option<String>,
    },

    /// Open the recorded pull request in the browser
    View,

    /// List open pull requests, or open one by index
    List {
        /// Index from `prq list` output to open in the browser
        index: Option<usize>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Create { master } => create_command(master.is_some()),
        Commands::View => view_command(),
        Commands::List { index } => list_command(index),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
