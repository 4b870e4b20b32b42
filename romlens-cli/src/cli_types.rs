//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "romlens")]
#[command(about = "Inspect Nintendo 64 ROM headers", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Scan a folder of ROMs and list them
    Scan {
        /// Folder to scan (defaults to the saved ROM folder, then the current directory)
        dir: Option<PathBuf>,

        /// Only show ROMs whose region contains this text (e.g., PAL, NTSC-J, all)
        #[arg(short, long)]
        region: Option<String>,

        /// Number of files parsed concurrently
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show every decoded header field for one or more ROM files
    Info {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// List the known country codes
    Regions,

    /// Print emulator video-timing options for a ROM
    Timing { file: PathBuf },

    /// Show or change saved settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Print the current settings file
    Show,

    /// Print the settings file path
    Path,

    /// Save the default ROM folder used by `scan`
    SetRomDir { dir: PathBuf },

    /// Forget the saved ROM folder
    ClearRomDir,

    /// Save the default worker count used by `scan`
    SetJobs { jobs: usize },
}
