use anyhow::{Context, Result};
use cli::{Cli, Commands};
use log::LevelFilter;
use site_pdf::{Configuration, Options};
use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    if let Err(e) = try_main() {
        eprintln!("{}: {e:#}", console::style("Error").red());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn init_logging(cli_verbosity: u8, plugin_verbose: bool) {
    let mut level = match cli_verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if plugin_verbose && level < LevelFilter::Debug {
        level = LevelFilter::Debug;
    }

    env_logger::Builder::new().filter_level(level).init();
}

fn try_main() -> Result<()> {
    use clap::Parser;
    let cli = Cli::parse();

    match &cli.command {
        Commands::Resolve { config } => {
            let Configuration { site, pdf } = Configuration::load(config)?;
            init_logging(cli.verbose, pdf.as_ref().is_some_and(|pdf| pdf.verbose));

            let Some(pdf) = pdf else {
                println!("No PDF output configured.");
                return Ok(());
            };

            let options = Options::new(&pdf, &site);
            let json = serde_json::to_string_pretty(&options)
                .with_context(|| "Failed to serialize resolved options")?;
            println!("{json}");
            Ok(())
        }
        Commands::Check { config } => {
            let Configuration { pdf, .. } = Configuration::load(config)?;
            init_logging(cli.verbose, pdf.as_ref().is_some_and(|pdf| pdf.verbose));

            let Some(pdf) = pdf else {
                println!("No PDF output configured.");
                return Ok(());
            };

            match (pdf.is_enabled(), pdf.enabled_if_env.as_deref()) {
                (true, _) => println!("PDF generation enabled."),
                (false, Some(name)) => {
                    println!("PDF generation disabled: set {name}=1 to enable it.")
                }
                (false, None) => println!("PDF generation disabled."),
            }
            Ok(())
        }
    }
}
