use std::path::Path;

use romlens_lib::{VideoTiming, parse_rom};

use crate::CliError;

/// Print the emulator core options that match a ROM's video standard.
pub(crate) fn run_timing(file: &Path) -> Result<(), CliError> {
    let info = parse_rom(file);
    if !info.valid {
        log::warn!(
            "Could not read {}, falling back to NTSC timing",
            file.display()
        );
    }

    let timing = VideoTiming::for_rom(Some(&info).filter(|i| i.valid));
    log::debug!(
        "{}: {} at {} Hz",
        info.file_name(),
        timing.mode(),
        timing.refresh_hz()
    );
    for line in timing.core_option_lines() {
        log::info!("{}", line);
    }
    Ok(())
}
