use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::constants::{DEFAULT_FAHRENHEIT_FILE, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};

#[derive(Parser)]
#[command(name = "wardrobe-processor")]
#[command(about = "Temperature-driven clothing recommendation processor")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(
        short,
        long,
        global = true,
        default_value = DEFAULT_INPUT_FILE,
        help = "Input CSV of location,temperature rows"
    )]
    pub input: PathBuf,

    #[arg(
        short,
        long,
        global = true,
        default_value = DEFAULT_OUTPUT_FILE,
        help = "Output CSV with the what_to_wear column appended"
    )]
    pub output: PathBuf,

    #[arg(
        long,
        global = true,
        default_value = DEFAULT_FAHRENHEIT_FILE,
        help = "Newline-delimited list of locations that record Fahrenheit"
    )]
    pub fahrenheit_locations: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recompute recommendations for every location in the input file
    Process,

    /// Append a location reading and recompute
    Add {
        city: String,

        #[arg(allow_hyphen_values = true)]
        temperature: i64,
    },

    /// Remove the matching location readings and recompute
    Remove {
        city: String,

        #[arg(allow_hyphen_values = true)]
        temperature: i64,
    },

    /// Display the recommendations currently on disk
    Show,
}
