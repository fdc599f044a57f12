//! Command-line arguments

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "scenario-console", version, about = "Edit IVR scenario questions on the admin backend")]
pub struct Cli {
    /// TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend origin, overrides config and environment
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Directory for log files
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List scenarios
    Scenarios,

    /// List the questions of a scenario
    Questions {
        scenario: u32,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Append a question and save
    Add { scenario: u32, text: String },

    /// Replace the text of question N (1-based) and save
    Edit {
        scenario: u32,
        index: usize,
        text: String,
    },

    /// Move question FROM onto question TO (1-based) and save; it lands
    /// just before TO, or last when TO is the last question
    Move { scenario: u32, from: usize, to: usize },

    /// Delete question N (1-based) from the backend
    Remove {
        scenario: u32,
        index: usize,
        /// Confirm the deletion; it cannot be undone
        #[arg(short, long)]
        yes: bool,
    },

    /// Copy a scenario together with its questions
    Copy { scenario: u32 },

    /// Create a scenario, optionally with its first questions
    NewScenario {
        name: String,
        greeting: String,
        #[arg(long)]
        disclaimer: Option<String>,
        /// Question text; repeat for several, in play order
        #[arg(short, long = "question")]
        questions: Vec<String>,
    },

    /// Rename a scenario, keeping its other settings
    Rename { scenario: u32, name: String },

    /// Delete a scenario and its questions
    DeleteScenario {
        scenario: u32,
        /// Confirm the deletion; it cannot be undone
        #[arg(short, long)]
        yes: bool,
    },
}
