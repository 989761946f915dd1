//! chatmd - convert saved ChatGPT HTML conversations to Markdown

mod cli;
mod convert;
mod output;

use anyhow::Result;
use clap::Parser;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.use_color() {
        colored::control::set_override(false);
    } else if cli.color {
        colored::control::set_override(true);
    }

    convert::run(&cli)
}
