use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::init::DEFAULT_CONFIG;

#[derive(Parser)]
#[command(name = "sozluk")]
#[command(about = "sozluk - Prefix search over a Turkish etymological dictionary.")]
#[command(version = env!("VERSION"))]
pub struct Cli {
    /// Path to one or more config files (merged in order). Only the default
    /// file may be missing.
    #[arg(long, default_value = DEFAULT_CONFIG, action = clap::ArgAction::Append)]
    pub config: Vec<PathBuf>,

    /// Dictionary JSON document (path or http(s) URL). Overrides `app.dataset`.
    #[arg(long)]
    pub dataset: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a sample config file.
    NewConfig {
        /// Output path for config file.
        #[arg(short, long, default_value = "config.toml")]
        path: PathBuf,
    },

    /// Run a single search and print the matching entries.
    Search {
        /// Query to search for.
        query: String,
    },

    /// Search interactively. Each line is a query; `:q` quits.
    Repl,
}
