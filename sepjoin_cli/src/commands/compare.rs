use crate::input::{InputArgs, StyleArgs};
use anyhow::{Context, Result, bail};
use clap::{self, Parser};
use itertools::Itertools;
use sepjoin::join::Strategy;
use std::{
    fmt,
    io::{Write, stdout},
};

/// Render values with every joining strategy and fail if the renderings differ.
#[derive(Parser, Debug)]
pub struct Args {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    style: StyleArgs,
}

#[allow(clippy::needless_pass_by_value)]
pub fn run(args: Args) -> Result<()> {
    let values = args.input.read()?;
    let style = args.style.resolve()?;

    let renderings = Strategy::ALL
        .iter()
        .map(|&strategy| {
            let rendering = style.clone().strategy(strategy).render(&values)?;
            log::debug!("{}: {:?}", strategy, rendering);
            Ok::<_, fmt::Error>((strategy, rendering))
        })
        .collect::<Result<Vec<_>, fmt::Error>>()
        .context("Could not format values")?;

    if !renderings.iter().map(|(_, rendering)| rendering).all_equal() {
        let summary = renderings
            .iter()
            .map(|(strategy, rendering)| format!("{strategy}: {rendering:?}"))
            .join(", ");
        bail!("Strategies disagree: {summary}");
    }
    log::info!("All {} strategies agree", renderings.len());

    if let Some((_, rendering)) = renderings.first() {
        let mut stdout = stdout().lock();
        stdout.write_all(rendering.as_bytes())?;
        stdout.flush()?;
    }

    Ok(())
}
