use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod utils;

#[derive(Parser)]
#[command(name = "execgraph-cmd")]
#[command(about = "Command-line utility for graph execution result messages")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a JSON execution result into a binary message
    Encode {
        /// Write a bare flatbuffer without length prefix and checksum
        #[arg(long)]
        unframed: bool,

        /// Path to the JSON file with the execution result
        json_path: String,

        /// Output message path
        output: String,
    },

    /// Decode a binary message into JSON
    Decode {
        /// Input is a bare flatbuffer without length prefix and checksum
        #[arg(long)]
        unframed: bool,

        /// Output file for the JSON (defaults to stdout if not specified)
        #[arg(short, long)]
        output: Option<String>,

        /// Message path
        input: String,
    },

    /// Display summary information about a message
    Inspect {
        /// Input is a bare flatbuffer without length prefix and checksum
        #[arg(long)]
        unframed: bool,

        /// Message path
        input: String,
    },

    /// Validate the framing and every record of a message
    Verify {
        /// Input is a bare flatbuffer without length prefix and checksum
        #[arg(long)]
        unframed: bool,

        /// Message path
        input: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    utils::init_logging(cli.verbose);

    match cli.command {
        Commands::Encode {
            unframed,
            json_path,
            output,
        } => commands::encode::run(json_path, output, unframed),
        Commands::Decode {
            unframed,
            output,
            input,
        } => commands::decode::run(input, output, unframed),
        Commands::Inspect { unframed, input } => commands::inspect::run(cli.verbose, input, unframed),
        Commands::Verify { unframed, input } => commands::verify::run(input, unframed),
    }
}
