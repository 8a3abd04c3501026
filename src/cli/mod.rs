use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

mod errors;
mod handlers;

pub use errors::{CliError, CliResult};
pub use handlers::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Output format. Overrides `output` from config.yaml.
    #[clap(short, long, global = true)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Split a query into tokens
    Tokenize {
        /// A KQL query, e.g. 'subject=report AND sender=anna'
        #[clap(allow_hyphen_values = true)]
        query: String,
    },
    /// Print whether the input is a KQL query or plain search text
    Check {
        #[clap(allow_hyphen_values = true)]
        query: String,
    },
    /// Tokenize and normalize a query
    Normalize {
        #[clap(allow_hyphen_values = true)]
        query: String,

        /// Group AND-runs so every level uses one connective
        #[clap(short, long, default_value = "false")]
        group: bool,
    },
    /// Print the messages matching a query
    Filter {
        #[clap(allow_hyphen_values = true)]
        query: String,

        /// JSON or YAML file with a list of messages.
        /// Defaults to `messages` from config.yaml.
        #[clap(short, long)]
        messages: Option<PathBuf>,

        /// Print the count
        #[clap(short = 'c', long, default_value = "false")]
        count: bool,
    },
}
