//! romlens CLI
//!
//! Command-line interface for inspecting Nintendo 64 ROM headers.

mod cli_types;
mod commands;
mod error;

use std::io::Write;

use clap::Parser;
use log::LevelFilter;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

/// Route `log` output to stdout. Normal runs print bare messages so
/// `log::info!` reads like `println!`; `--verbose` adds timestamps and
/// levels. `RUST_LOG` applies when neither flag is given.
fn init_logger(quiet: bool, verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    builder.target(env_logger::Target::Stdout);

    if verbose {
        builder.filter_level(LevelFilter::Debug);
        builder.format(|buf, record| {
            writeln!(
                buf,
                "[{} {:<5} {}] {}",
                buf.timestamp_millis(),
                record.level(),
                record.target(),
                record.args()
            )
        });
    } else {
        if quiet {
            builder.filter_level(LevelFilter::Warn);
        }
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }

    builder.init();
}

/// Blank spacer line that respects `--quiet`.
pub(crate) fn log_blank() {
    log::info!("");
}

fn run(cli: Cli) -> Result<(), CliError> {
    let quiet = cli.quiet;
    match cli.command {
        Commands::Scan {
            dir,
            region,
            jobs,
            json,
        } => commands::scan::run_scan(dir, region, jobs, json, quiet),
        Commands::Info { files } => commands::info::run_info(&files),
        Commands::Regions => {
            commands::regions::run_regions();
            Ok(())
        }
        Commands::Timing { file } => commands::timing::run_timing(&file),
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                commands::config::run_config_show();
                Ok(())
            }
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
            ConfigAction::SetRomDir { dir } => commands::config::run_set_rom_dir(&dir),
            ConfigAction::ClearRomDir => commands::config::run_clear_rom_dir(),
            ConfigAction::SetJobs { jobs } => commands::config::run_set_jobs(jobs),
        },
    }
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
