use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use tictactoe::cipher::{decrypt_file, encrypt_file, guess_key};

/// Caesar-shift a text file.
#[derive(Debug, clap::Parser)]
struct Opts {
    /// Shift to undo. Guessed from letter frequencies when left out.
    #[clap(long)]
    key: Option<i64>,
    /// Apply the shift instead of undoing it.
    #[clap(long)]
    encrypt: bool,

    input: PathBuf,
    output: PathBuf,
}

// An unreadable input is a silent no-op further down, so it falls back to 0 here too.
fn resolve_key(key: Option<i64>, input: &Path) -> i64 {
    match key {
        Some(key) => key,
        None => fs::read(input).ok().and_then(|text| guess_key(&text)).unwrap_or(0),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let opts: Opts = Opts::parse();
    log::debug!("Using options {:?}", opts);

    let key = resolve_key(opts.key, &opts.input);
    log::info!("using key {}", key);

    if opts.encrypt {
        encrypt_file(&opts.input, &opts.output, key)
    } else {
        decrypt_file(&opts.input, &opts.output, key)
    }
}
