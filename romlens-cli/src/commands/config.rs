use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use romlens_lib::settings;

use crate::CliError;

/// Show the settings file and its contents.
pub(crate) fn run_config_show() {
    let path = settings::settings_path();

    log::info!(
        "{}",
        "romlens Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return;
    }
    crate::log_blank();

    match settings::load_settings_string() {
        Some(contents) if !contents.trim().is_empty() => {
            for line in contents.lines() {
                log::info!("  {}", line);
            }
        }
        Some(_) => log::info!("  {}", "(empty)".if_supports_color(Stdout, |t| t.dimmed())),
        None => log::warn!("  Settings file could not be parsed"),
    }
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings::settings_path().display());
}

pub(crate) fn run_set_rom_dir(dir: &Path) -> Result<(), CliError> {
    if !dir.is_dir() {
        return Err(CliError::config(format!(
            "{} is not a directory",
            dir.display()
        )));
    }
    let dir = dir.canonicalize()?;
    settings::save_rom_dir(Some(dir.as_path()))?;
    log::info!(
        "{} ROM folder set to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        dir.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

pub(crate) fn run_clear_rom_dir() -> Result<(), CliError> {
    settings::save_rom_dir(None)?;
    log::info!(
        "{} ROM folder cleared",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
    );
    Ok(())
}

pub(crate) fn run_set_jobs(jobs: usize) -> Result<(), CliError> {
    if jobs == 0 {
        return Err(CliError::config("jobs must be at least 1"));
    }
    settings::save_jobs(Some(jobs))?;
    log::info!(
        "{} Scan workers set to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        jobs,
    );
    Ok(())
}
