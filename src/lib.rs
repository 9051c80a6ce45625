mod block;
mod config;
mod error;
mod html;
mod parser;

pub use block::{Line, OpenBlock, Span};
pub use config::{Config, HeadingsConfig, OutputConfig};
pub use error::Error;
pub use parser::{classify, parse_inline};

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

static DEFAULT_CONFIG: LazyLock<Config> = LazyLock::new(Config::compiled_default);

/// Parse markdown text into a vector of classified lines.
pub fn parse(markdown: &str) -> Vec<Line<'_>> {
    parser::parse(markdown)
}

/// Convert markdown to HTML using default config.
pub fn markdown_to_html(markdown: &str) -> String {
    markdown_to_html_with_config(markdown, &DEFAULT_CONFIG)
}

/// Convert markdown to HTML with custom config.
pub fn markdown_to_html_with_config(markdown: &str, config: &Config) -> String {
    let lines = parse(markdown);
    let html = html::lines_to_html(&lines, config);
    tracing::debug!(lines = lines.len(), bytes = html.len(), "converted markdown");
    html
}

/// Convert a markdown file into an HTML file, creating or truncating the output.
///
/// Nothing is written if the input is missing or unreadable.
pub fn convert_file(input: &Path, output: &Path, config: &Config) -> Result<(), Error> {
    if !input.exists() {
        return Err(Error::MissingInput(input.to_path_buf()));
    }

    let markdown = fs::read_to_string(input).map_err(|source| Error::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;

    let html = markdown_to_html_with_config(&markdown, config);

    fs::write(output, html).map_err(|source| Error::WriteOutput {
        path: output.to_path_buf(),
        source,
    })?;

    tracing::debug!(input = %input.display(), output = %output.display(), "wrote html");
    Ok(())
}
