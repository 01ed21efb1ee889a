use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prints the resolved PDF options as JSON
    Resolve {
        /// Path to the site configuration file
        #[clap(short, long, default_value = site_pdf::config::DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },
    /// Reports whether PDF generation is enabled in the current environment
    Check {
        /// Path to the site configuration file
        #[clap(short, long, default_value = site_pdf::config::DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },
}

#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Cli {
    /// Increase logging verbosity (-v, -vv, -vvv)
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[clap(subcommand)]
    pub command: Commands,
}
