use crate::core::records::RecordKind;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pantry")]
#[command(about = "Terminal back-office for a grocery catalog")]
#[command(
    version,
    long_about = "When run without any command, opens the admin tables on the products screen"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log at debug level regardless of configuration
    #[arg(long, short = 'v', global = true, help = "Enable debug logging")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive admin tables
    Browse(BrowseArgs),
    /// Write one collection to a CSV file
    Export(ExportArgs),
    /// Inspect or reset configuration
    Config(ConfigArgs),
    /// Fill the data directory with a demo catalog
    Seed(SeedArgs),
}

#[derive(Args, Debug, Default)]
pub struct BrowseArgs {
    /// Screen to open first
    #[arg(long, short = 's', value_enum, default_value_t = RecordKind::Products)]
    pub screen: RecordKind,

    /// Override the configured data directory
    #[arg(long, help = "Read and write catalog files in this directory")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Collection to export
    #[arg(value_enum)]
    pub kind: RecordKind,

    /// Output file (defaults to <export_dir>/<table name>.csv)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Override the configured data directory
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Print the configuration file location
    Path,
    /// Reset configuration to defaults
    Reset {
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Args, Debug)]
pub struct SeedArgs {
    /// Overwrite collections that already hold records
    #[arg(long, short = 'f', help = "Overwrite existing collections")]
    pub force: bool,

    /// Override the configured data directory
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

impl ExportArgs {
    pub fn validate(&self) -> crate::utils::Result<()> {
        if let Some(output) = &self.output {
            if output.is_dir() {
                return Err(crate::utils::PantryError::invalid_args(format!(
                    "Output path {} is a directory",
                    output.display()
                )));
            }
        }
        Ok(())
    }
}
