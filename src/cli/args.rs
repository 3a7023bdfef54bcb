//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Travel guide outline editor: generate, edit and render section outlines
#[derive(Parser, Debug)]
#[command(name = "tripguide")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Config file (default: $XDG_CONFIG_HOME/tripguide/tripguide.toml)
    #[arg(long, global = true, value_hint = ValueHint::FilePath, env = "TRIPGUIDE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate an outline for a location
    New {
        /// Destination name
        location: String,
        /// Trip length in days
        #[arg(long)]
        days: Option<u32>,
        /// Budget level (free text)
        #[arg(long)]
        budget: Option<String>,
        /// Outline file to write
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: PathBuf,
    },

    /// Show outline as tree
    Show {
        /// Outline file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Rename a section
    Rename {
        /// Outline file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Section id
        id: String,
        /// New title
        title: String,
    },

    /// Append a subsection to a section
    AddChild {
        /// Outline file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Parent section id
        id: String,
    },

    /// Insert a section right after another
    AddSibling {
        /// Outline file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Anchor section id
        id: String,
    },

    /// Append a top-level chapter
    AddTop {
        /// Outline file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Delete a section and all its subsections
    Delete {
        /// Outline file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Section id
        id: String,
    },

    /// Show the chapter path to a section
    Path {
        /// Outline file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Section id
        id: String,
    },

    /// Check ids and levels
    Validate {
        /// Outline file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// List the article files a render would produce
    Plan {
        /// Outline file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Render the guide to HTML
    Render {
        /// Outline file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Regenerate only this section
        #[arg(long)]
        id: Option<String>,
        /// Target HTML file (default: <output_dir>/<location>_guide.html, or
        /// <output_dir>/<location>_<title>.html with --id)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Show effective settings
    Config,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
