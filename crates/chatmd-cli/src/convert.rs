//! Convert command - extract messages and write the log

use anyhow::Result;
use chatmd_core::convert::{convert_file, derive_output_path};
use chatmd_core::render::OutputFormat;

use crate::cli::{Cli, Format};
use crate::output::colors;

pub fn run(cli: &Cli) -> Result<()> {
    let output = match &cli.output {
        Some(path) => path.clone(),
        None => derive_output_path(&cli.input),
    };

    let format = match cli.format {
        Format::Markdown => OutputFormat::Markdown,
        Format::Json => OutputFormat::Json,
        Format::Minimal => OutputFormat::Minimal,
    };

    let count = convert_file(&cli.input, &output, format)?;

    if !cli.quiet {
        println!(
            "{}",
            colors::success(&format!(
                "Wrote {} messages to {}",
                colors::format_count(count as i64),
                output.display()
            ))
        );
    }

    Ok(())
}
