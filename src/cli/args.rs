// src/cli/args.rs
use crate::domain::SortCriterion;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate notes from a markdown file or directory
    Generate {
        /// Markdown file or directory of markdown files
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Notes file to write (prints JSON to stdout when omitted)
        #[arg(short, long, value_name = "NOTES")]
        output: Option<PathBuf>,

        /// Descend into subdirectories
        #[arg(short, long)]
        recursive: bool,

        /// Add to the notes already in the output file instead of replacing them
        #[arg(long)]
        append: bool,

        /// Only generate sections whose title mentions this topic (up to 5)
        #[arg(short, long = "topic", value_name = "TOPIC")]
        topics: Vec<String>,
    },

    /// List notes after search, tag filter and sort
    List {
        /// Notes file
        #[arg(value_name = "NOTES")]
        notes: PathBuf,

        /// Case-insensitive text to find in titles and content
        #[arg(short, long, value_name = "SEARCH")]
        search: Option<String>,

        /// Keep notes carrying any of these tags
        #[arg(short, long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Sort criterion
        #[arg(long, value_name = "CRITERION")]
        sort: Option<SortCriterion>,

        /// Show the content of these notes
        #[arg(short, long = "expand", value_name = "ID")]
        expand: Vec<String>,

        /// Output the visible notes as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every tag used by the notes
    Tags {
        /// Notes file
        #[arg(value_name = "NOTES")]
        notes: PathBuf,
    },

    /// Toggle the star of a note
    Star {
        #[arg(value_name = "NOTES")]
        notes: PathBuf,
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Add a custom tag to a note
    Tag {
        #[arg(value_name = "NOTES")]
        notes: PathBuf,
        #[arg(value_name = "ID")]
        id: String,
        #[arg(value_name = "TAG")]
        tag: String,
    },

    /// Replace the content of a note (one line per content line)
    Edit {
        #[arg(value_name = "NOTES")]
        notes: PathBuf,
        #[arg(value_name = "ID")]
        id: String,
        #[arg(value_name = "CONTENT")]
        content: String,
    },

    /// Delete a note, asking for confirmation
    Delete {
        #[arg(value_name = "NOTES")]
        notes: PathBuf,
        #[arg(value_name = "ID")]
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Export all notes as HTML
    Export {
        #[arg(value_name = "NOTES")]
        notes: PathBuf,

        /// Open the exported file in the browser
        #[arg(long)]
        open: bool,
    },

    /// Copy a note to the clipboard as plain text
    Copy {
        #[arg(value_name = "NOTES")]
        notes: PathBuf,
        #[arg(value_name = "ID")]
        id: String,
    },
}
