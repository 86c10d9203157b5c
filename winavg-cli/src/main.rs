//! Command-line driver for the moving-average job.
//!
//! Reads one numeric sample per line from the input file, runs the
//! partition/shuffle/reduce pipeline locally, and writes one
//! `key<TAB>average` line per window to the output file, sorted by key.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use winavg_core::codec::format_key;
use winavg_core::config::WindowConfig;
use winavg_core::runtime::MovingAverageJob;

#[derive(Parser, Debug)]
#[command(name = "winavg")]
#[command(about = "Sliding-window moving average over a sample stream", long_about = None)]
struct Cli {
    /// Input file: one numeric sample per line, in temporal order.
    #[arg(long)]
    input: PathBuf,

    /// Output file: one "key<TAB>average" line per window, sorted by key.
    #[arg(long)]
    output: PathBuf,

    /// Window length in samples. May be fractional; capacity truncates.
    #[arg(long, default_value_t = 3.0)]
    window: f64,

    /// Number of parallel reduce workers.
    #[arg(long, default_value_t = 4)]
    parallelism: usize,
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = WindowConfig::new(cli.window)?;

    let input = File::open(&cli.input)
        .with_context(|| format!("cannot open input {}", cli.input.display()))?;
    let records: Vec<String> = BufReader::new(input)
        .lines()
        .collect::<Result<_, _>>()
        .context("failed reading input records")?;
    tracing::info!(records = records.len(), window = cli.window, "starting job");

    let job = MovingAverageJob::new(config);
    let results = job.execute_with_parallelism(records, cli.parallelism)?;

    let output = File::create(&cli.output)
        .with_context(|| format!("cannot create output {}", cli.output.display()))?;
    let mut writer = BufWriter::new(output);
    for (key, average) in &results {
        writeln!(writer, "{}\t{}", format_key(*key), average)?;
    }
    writer.flush()?;

    tracing::info!(windows = results.len(), output = %cli.output.display(), "job finished");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    run(&cli)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_writes_sorted_tab_separated_averages() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("samples.txt");
        let output = dir.path().join("smoothed.txt");
        std::fs::write(&input, "3\n6\n9\n12\n15\n").unwrap();

        let cli = Cli {
            input: input.clone(),
            output: output.clone(),
            window: 3.0,
            parallelism: 2,
        };
        run(&cli).unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(written, "1\t6.0\n2\t9.0\n3\t12.0\n");
    }

    #[test]
    fn test_run_fails_on_malformed_record() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("samples.txt");
        std::fs::write(&input, "1\nabc\n3\n").unwrap();

        let cli = Cli {
            input,
            output: dir.path().join("smoothed.txt"),
            window: 2.0,
            parallelism: 1,
        };
        assert!(run(&cli).is_err());
    }
}
