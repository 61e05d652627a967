mod decode;
mod error;
mod evaluate;
mod game;
mod round;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use crate::error::ScoreError;
use crate::evaluate::{evaluate, Mode};
use crate::round::{read_rounds, Round};

type Result<T> = std::result::Result<T, anyhow::Error>;

/// Scores a rock/paper/scissors strategy guide.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Strategy guide, one "<opponent> <self>" round per line ("-" for stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// 1: second column is the symbol to throw, 2: it is the outcome to aim for
    #[arg(required = true)]
    mode: Mode,

    /// Log every scored round
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn reads_stdin(path: &Path) -> bool {
    path == Path::new("-")
}

fn load_rounds(path: &Path) -> std::result::Result<Vec<Round>, ScoreError> {
    if reads_stdin(path) {
        return read_rounds(std::io::stdin().lock());
    }
    let file = File::open(path).map_err(|source| ScoreError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    read_rounds(BufReader::new(file))
}

fn run(path: &Path, mode: Mode) -> Result<u32> {
    let rounds = load_rounds(path)?;
    let total = evaluate(&rounds, mode)
        .with_context(|| format!("scoring {} in {} mode", path.display(), mode))?;
    Ok(total)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let total = run(&args.input, args.mode)?;
    println!("{}", total);

    Ok(())
}
