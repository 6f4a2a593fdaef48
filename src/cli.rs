use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cropwise", version, about = "Offline farming advisory")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override SQLite data directory
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run interactive setup
    Init,
    /// Manage farm profiles
    #[command(subcommand)]
    Profile(ProfileCommand),
    /// Fertilizer and irrigation advice
    Advise {
        /// Soil type (clay, sandy, loamy, silty); defaults to the active profile
        #[arg(long)]
        soil: Option<String>,
        /// Weather (dry, humid, moderate, rainy); defaults to the active profile
        #[arg(long)]
        weather: Option<String>,
        /// Problem description, kept with saved advice
        #[arg(long, default_value = "")]
        problem: String,
        /// Append the advice to history
        #[arg(long)]
        save: bool,
    },
    /// Show or clear saved advice
    History {
        #[arg(long)]
        clear: bool,
    },
    /// Crop calendar and scheduled plantings
    #[command(subcommand)]
    Calendar(CalendarCommand),
    /// Show the next "did you know" tip
    Tip {
        /// en, hi or or; defaults to the configured language
        #[arg(short, long)]
        language: Option<String>,
    },
    /// Search the knowledge base
    Knowledge {
        term: Option<String>,
    },
    /// Write all user data as JSON
    Export {
        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ProfileCommand {
    Create {
        name: String,
        #[arg(long)]
        soil: String,
        #[arg(long)]
        weather: String,
        #[arg(long, default_value = "")]
        location: String,
        #[arg(long, default_value = "")]
        notes: String,
    },
    List,
    Current,
    Switch {
        id: String,
    },
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        soil: Option<String>,
        #[arg(long)]
        weather: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    Delete {
        id: String,
    },
}

#[derive(Subcommand)]
pub enum CalendarCommand {
    /// Crop calendar, filtered to the active profile's soil
    Crops {
        /// Show every crop regardless of profile
        #[arg(long)]
        all: bool,
    },
    /// Add a crop to your planting calendar
    Schedule {
        crop: String,
        /// Planting date (YYYY-MM-DD); today when omitted
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Scheduled plantings for the active profile
    List {
        /// Include plantings of every profile
        #[arg(long)]
        all: bool,
    },
    Remove {
        id: String,
    },
}
