//! id3 - learn and apply ID3 decision trees
//!
//! Usage:
//!   id3 learn weather.csv --class play -o tree.json   # Learn a tree
//!   id3 learn weather.csv --class play                # Print the tree JSON
//!   id3 classify tree.json new.csv                    # One label per row
//!   id3 inspect tree.json                             # Rule listing

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod error;
mod output;

use commands::{classify, inspect, learn};

/// id3 - ID3 decision tree tool
///
/// Learns decision trees from categorical CSV data and applies them.
#[derive(Parser, Debug)]
#[command(name = "id3")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Learn a decision tree from a CSV file
    Learn {
        /// CSV file whose first record is the header
        #[arg(value_name = "CSV")]
        file: PathBuf,

        /// Column to predict
        #[arg(short, long, value_name = "COLUMN")]
        class: String,

        /// Write the tree to this file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Fail on contradictory rows instead of using the majority class
        #[arg(long)]
        strict: bool,
    },

    /// Classify every row of a CSV file with a saved tree
    Classify {
        /// Tree JSON written by `id3 learn`
        #[arg(value_name = "TREE")]
        tree: PathBuf,

        /// CSV file whose first record is the header
        #[arg(value_name = "CSV")]
        file: PathBuf,
    },

    /// Show a saved tree as rules
    Inspect {
        /// Tree JSON written by `id3 learn`
        #[arg(value_name = "TREE")]
        tree: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Learn {
            file,
            class,
            output,
            strict,
        } => learn::run(&learn::LearnArgs {
            file: &file,
            class: &class,
            output: output.as_deref(),
            strict,
            json: cli.json,
            verbose: cli.verbose,
            quiet: cli.quiet,
        }),

        Commands::Classify { tree, file } => classify::run(&tree, &file, cli.json, cli.verbose),

        Commands::Inspect { tree } => inspect::run(&tree, cli.json, cli.quiet),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_learn_with_globals() {
        let cli = Cli::try_parse_from([
            "id3", "learn", "weather.csv", "--class", "play", "-o", "tree.json", "--strict",
            "--json",
        ])
        .expect("valid arguments");
        assert!(cli.json);
        match cli.command {
            Commands::Learn {
                class,
                output,
                strict,
                ..
            } => {
                assert_eq!(class, "play");
                assert_eq!(output, Some(PathBuf::from("tree.json")));
                assert!(strict);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_learn_requires_class() {
        assert!(Cli::try_parse_from(["id3", "learn", "weather.csv"]).is_err());
    }
}
