//! Command-line interface implementation for fngen.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for fngen.
#[derive(Parser, Debug)]
#[command(author, version, about = "fngen: render templates into a function directory", long_about = None)]
pub struct Args {
    /// Function directory generated files are written under
    #[arg(value_name = "FUNCTION_DIR")]
    pub function_dir: PathBuf,

    /// Template files or directories of templates
    #[arg(value_name = "TEMPLATE", required = true)]
    pub templates: Vec<PathBuf>,

    /// JSON or YAML file with data made available to templates
    #[arg(short, long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            if let Err(err) = Args::command().print_help() {
                eprintln!("Failed to print help: {err}");
            }
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    }
}
