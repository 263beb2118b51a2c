use crate::{
    input::{InputArgs, StyleArgs},
    io::FileOrStdout,
};
use anyhow::{Context, Result};
use clap::{self, Parser};
use std::io::Write;

/// Render values joined with a delimiter.
#[derive(Parser, Debug)]
pub struct Args {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    style: StyleArgs,

    /// Output file, `-` for standard output
    #[arg(long, default_value = "-")]
    output: FileOrStdout,
}

#[allow(clippy::needless_pass_by_value)]
pub fn run(args: Args) -> Result<()> {
    let values = args.input.read()?;
    let style = args.style.resolve()?;
    log::debug!("Rendering {} values with {:?}", values.len(), style);

    let mut output = args
        .output
        .create()
        .with_context(|| format!("Could not create output '{}'", args.output))?;
    style
        .print(&mut output, &values)
        .with_context(|| format!("Could not write to '{}'", args.output))?;
    output.flush()?;

    Ok(())
}
