use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Instance file (JSON) with the parts to nest
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Folder to write the JSON solution and one SVG per sheet to
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    /// Optional [`NestConfig`](crate::config::NestConfig) file (JSON), missing fields take their default
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
