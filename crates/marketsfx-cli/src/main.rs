//! marketsfx - sound effect generator for the stock market mod
//!
//! Running with no arguments writes `trade_success.ogg`, `trade_fail.ogg` and
//! `market_update.ogg` into the mod's sound directory.

use clap::Parser;
use marketsfx_audio::rng::DEFAULT_SEED;
use marketsfx_audio::{AudioFormat, DEFAULT_OUTPUT_DIR};
use std::process::ExitCode;

use marketsfx_cli::commands;

/// Generate the stock market mod sound effects
#[derive(Parser)]
#[command(name = "marketsfx")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output directory (created if missing)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    out_dir: String,

    /// Output encoding
    #[arg(long, default_value = "ogg", value_parser = ["ogg", "wav"])]
    format: String,

    /// Seed for the noise in trade_fail
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u32,

    /// Output a machine-readable JSON report (no colored output)
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let format = cli
        .format
        .parse::<AudioFormat>()
        .expect("clap should have validated format");

    match commands::generate::run(&cli.out_dir, format, cli.seed, cli.json) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
