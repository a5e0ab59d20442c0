use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Reads a student's data from a Home Access Center portal and prints it as JSON.
///
/// The login is taken from HAC_USERNAME and HAC_PASSWORD.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Options {
    /// TOML config file; defaults apply when it does not exist
    #[arg(long, default_value = "config.toml")]
    pub config: PathBuf,
    /// Portal base URL (e.g. https://hac.example-isd.org/), overrides portal.base_url
    #[arg(long)]
    pub url: Option<String>,
    /// Write the JSON result to this file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// The student's display name
    Name,
    /// Every class on the week view with its average
    Classes,
    /// Assignments and categories for one class
    Detail {
        /// Class name as shown on the week view
        class_name: String,
        /// Marking period; defaults to portal.marking_period
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        marking_period: Option<u32>,
    },
}
