use anyhow::Result;
use clap::Parser;

mod clap_utils;
mod commands;
mod input;
mod io;

fn main() -> Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    commands::run(commands::Args::parse())
}
