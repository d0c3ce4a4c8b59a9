//! Cache locality demo.
//!
//! ```text
//! cache_demo filas      # row-major, cache-friendly
//! cache_demo columnas   # column-major, cache-unfriendly
//! ```
//!
//! Build with `--release`, otherwise bounds checks dominate the timing.

use cache_demo::config::N;
use cache_demo::{BenchError, Mode, run};
use clap::Parser;
use std::ffi::OsString;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "cache_demo")]
#[command(about = "Times a row-major or column-major pass over an NxN matrix", long_about = None)]
#[command(disable_help_flag = true)]
struct Cli {
    /// Traversal order: anything starting with `f`/`r` (rows) or `c` (columns)
    #[arg(value_name = "filas|columnas", allow_hyphen_values = true)]
    mode: OsString,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<OsString> = std::env::args_os().collect();
    let program = args
        .first()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "cache_demo".to_string());

    // Exactly one argument. Checked before clap, which would swallow `--`.
    if args.len() != 2 {
        return usage_error(program);
    }

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) => {
            // Nothing useful to do if stderr is gone.
            e.print().ok();
            return usage_error(program);
        }
    };

    let mode = match Mode::from_os_str(&cli.mode) {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("{}", e);
            return usage_error(program);
        }
    };

    log::debug!("mode = {}, N = {}", mode, N);

    match run(mode, N) {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn usage_error(program: String) -> ExitCode {
    eprintln!("{}", BenchError::Usage { program });
    ExitCode::FAILURE
}
