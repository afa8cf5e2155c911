use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "theatre-data")]
#[command(about = "Validate and convert IMAX theatre CSV datasets")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        help = "Settings file [default: theatre-data.toml when present]"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Mirror the metric CSV tree with Height and Width in feet and inches
    Convert {
        #[arg(
            short,
            long,
            help = "Directory of metric CSV files [default: docs/assets/csv/metric]"
        )]
        source: Option<PathBuf>,

        #[arg(
            short,
            long,
            help = "Destination for the imperial copy [default: docs/assets/csv/imperial]"
        )]
        destination: Option<PathBuf>,
    },

    /// Validate theatre CSV files against the dataset rules
    Validate {
        #[arg(short, long, conflicts_with = "data_dir", help = "Validate a single file")]
        file: Option<PathBuf>,

        #[arg(
            long,
            help = "Directory searched recursively for CSV files [default: data]"
        )]
        data_dir: Option<PathBuf>,
    },
}
