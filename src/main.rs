use std::path::PathBuf;

use clap::Parser;
use markdown2html::{Config, Error, convert_file};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "markdown2html")]
#[command(version, about = "Convert Markdown files to HTML")]
struct Cli {
    /// Input Markdown file
    input: PathBuf,

    /// Output HTML file (created or overwritten)
    output: PathBuf,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    // Usage errors exit with 1; help and version still go to stdout with 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = match &cli.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => Config::compiled_default(),
    };

    match convert_file(&cli.input, &cli.output, &config) {
        Ok(()) => {}
        Err(e @ Error::MissingInput(_)) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
