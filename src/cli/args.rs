// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to TOML config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute (exec, operations, or init-config)
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run one gateway operation and print the JSON response
    Exec {
        /// Operation name: notes, search, createNote, updateNote, deleteNote
        #[arg(value_name = "OPERATION")]
        operation: String,

        /// Operation arguments as a JSON object
        #[arg(short, long, value_name = "JSON")]
        args: Option<String>,

        /// Email of the calling user
        #[arg(short, long, value_name = "EMAIL")]
        email: Option<String>,

        /// Note fields to return, comma separated (default: all)
        #[arg(short, long, value_name = "FIELDS", value_delimiter = ',')]
        fields: Vec<String>,

        /// JSON file backing the local note store; created if missing
        #[arg(short, long, value_name = "STORE")]
        store: Option<PathBuf>,
    },

    /// List supported operations
    Operations,

    /// Write a default config file
    InitConfig {
        /// Where to write the config
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
}
