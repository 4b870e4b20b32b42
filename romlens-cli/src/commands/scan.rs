use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use romlens_lib::display::{COLUMN_TITLES, RomRow};
use romlens_lib::{filter_by_region, scan_rom_dir, scan_roms_parallel, settings};

use crate::CliError;
use crate::commands::print_table;

/// Run the scan command.
pub(crate) fn run_scan(
    dir: Option<PathBuf>,
    region: Option<String>,
    jobs: Option<usize>,
    json: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let folder = settings::resolve_rom_dir(dir);
    let jobs = settings::resolve_jobs(jobs);

    let paths = scan_rom_dir(&folder).map_err(|e| {
        CliError::Io(std::io::Error::new(
            e.kind(),
            format!("Cannot read {}: {}", folder.display(), e),
        ))
    })?;

    if !json {
        log::info!("Scanning ROMs in: {}", folder.display());
        log::debug!("{} candidate files, {} workers", paths.len(), jobs);
    }

    if paths.is_empty() {
        if json {
            println!("[]");
        } else {
            log::info!(
                "{}",
                format!("No .z64/.n64/.v64 files found in {}", folder.display())
                    .if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        return Ok(());
    }

    let pb = if quiet || json {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(paths.len() as u64);
        pb.set_style(
            ProgressStyle::with_template("  {bar:30.cyan/blue} {pos}/{len} {msg}")
                .map_err(|e| CliError::runtime(e.to_string()))?,
        );
        pb
    };

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {}", e)))?;

    let results = rt.block_on(scan_roms_parallel(paths, jobs, |info| {
        pb.set_message(info.file_name());
        pb.inc(1);
    }));
    pb.finish_and_clear();

    let shown = filter_by_region(&results, region.as_deref());

    if json {
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    crate::log_blank();
    let rows: Vec<RomRow> = shown.iter().map(|info| RomRow::from_info(info)).collect();
    let cells: Vec<[&str; 8]> = rows.iter().map(RomRow::cells).collect();
    print_table(&COLUMN_TITLES, &cells);
    crate::log_blank();

    let unreadable = results.iter().filter(|i| !i.valid).count();
    let mut summary = format!("{} ROMs", results.len());
    if shown.len() != results.len() {
        summary.push_str(&format!(", {} shown", shown.len()));
    }
    log::info!("{}", summary.if_supports_color(Stdout, |t| t.bold()));
    if unreadable > 0 {
        log::warn!(
            "{}",
            format!("{} file(s) could not be read", unreadable)
                .if_supports_color(Stdout, |t| t.yellow()),
        );
    }

    Ok(())
}
