use std::io::Read;
use std::path::Path;
use std::process;

use adfmark::{AdfService, Options, ParseMode};
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, Commands, DocArgs};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

/// Logs go to stderr so stdout stays clean JSON. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Doc(args) => run_doc(args),
        Commands::Plain { file } => {
            let text = read_input(file.as_deref())?;
            println!("{}", AdfService::new().plain(Some(text.as_str())));
            Ok(())
        }
    }
}

fn run_doc(args: DocArgs) -> Result<()> {
    let mut options = Options {
        max_unescape_passes: args.max_unescape_passes,
        ..Options::default()
    };
    if args.single_paragraph {
        options.mode = ParseMode::SingleParagraph;
    }
    if let Some(heading) = args.criteria_heading {
        options.acceptance_criteria_heading = heading;
    }
    let service = AdfService::with_options(options)?;

    let text = read_input(args.file.as_deref())?;
    let document = match args.criteria.as_deref() {
        Some(path) => {
            let criteria = read_file(path)?;
            service.story_description(Some(text.as_str()), Some(criteria.as_str()))
        }
        None => service.convert(&text),
    };

    let json = if args.pretty {
        adfmark::to_json_pretty(&document)?
    } else {
        adfmark::to_json(&document)?
    };
    println!("{json}");
    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => read_file(path),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
