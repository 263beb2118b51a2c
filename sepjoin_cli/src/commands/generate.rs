use crate::{input::StyleArgs, io::FileOrStdout};
use anyhow::{Context, Result};
use clap::{self, Parser};
use rand::{Rng, SeedableRng, rngs::StdRng};
use sepjoin::lazy::Lazy;
use std::io::Write;

/// Print random integers, generated one at a time while they are written.
#[derive(Parser, Debug)]
pub struct Args {
    /// Number of values to generate
    #[arg(long, default_value_t = 10)]
    count: usize,

    /// Largest value that can be generated
    #[arg(long, default_value_t = 100)]
    max: u32,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    style: StyleArgs,

    /// Output file, `-` for standard output
    #[arg(long, default_value = "-")]
    output: FileOrStdout,
}

#[allow(clippy::needless_pass_by_value)]
pub fn run(args: Args) -> Result<()> {
    let style = args.style.resolve()?;
    let mut rng = args
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    let max = args.max;
    let mut remaining = args.count;
    let mut values = Lazy::new(move || {
        if remaining == 0 {
            return None;
        }
        remaining -= 1;
        Some(rng.random_range(0..=max))
    });

    let mut output = args
        .output
        .create()
        .with_context(|| format!("Could not create output '{}'", args.output))?;
    style
        .print(&mut output, &mut values)
        .with_context(|| format!("Could not write to '{}'", args.output))?;
    output.flush()?;
    log::debug!("Generated {} values", values.produced());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate_to_file(name: &str, extra: &[&str]) -> String {
        let path = std::env::temp_dir().join(format!("sepjoin-{}-{}.txt", name, std::process::id()));
        let path_str = path.to_string_lossy().into_owned();
        let mut argv = vec!["generate", "--output", path_str.as_str()];
        argv.extend_from_slice(extra);

        run(Args::try_parse_from(argv).unwrap()).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(path).unwrap();
        contents
    }

    #[test]
    fn seeded_output_is_reproducible() {
        let extra = ["--count", "5", "--seed", "7", "--max", "9"];
        let first = generate_to_file("seeded-a", &extra);
        let second = generate_to_file("seeded-b", &extra);
        assert_eq!(first, second);

        let line = first.strip_suffix('\n').unwrap();
        let values = line.split(", ").collect::<Vec<_>>();
        assert_eq!(values.len(), 5);
        assert!(values.iter().all(|v| v.parse::<u32>().is_ok_and(|n| n <= 9)));
    }

    #[test]
    fn zero_count_writes_nothing() {
        assert_eq!(generate_to_file("empty", &["--count", "0", "--seed", "1"]), "");
    }
}
