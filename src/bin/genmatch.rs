use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use la_matchgen::render::to_c_initializer;
use la_matchgen::row::parse_row;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Convert instruction bit-layout rows on stdin into C match/mask table entries"
)]
struct Opts {}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let _opts = Opts::parse();

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let matcher = parse_row(&line)?;
        tracing::debug!(mnemonic = %matcher.mnemonic, format = %matcher.format, "parsed row");
        writeln!(stdout, "{}", to_c_initializer(&matcher))?;
        stdout.flush()?;
    }

    Ok(())
}
