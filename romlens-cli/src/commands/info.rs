use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use romlens_lib::display::detail_lines;
use romlens_lib::parse_rom;

use crate::CliError;

/// Print the detail view for each file. Fails (after printing everything)
/// if any file was unreadable.
pub(crate) fn run_info(files: &[PathBuf]) -> Result<(), CliError> {
    let mut unreadable = 0;

    for (i, path) in files.iter().enumerate() {
        if i > 0 {
            crate::log_blank();
        }
        let info = parse_rom(path);
        let mut lines = detail_lines(&info).into_iter();
        if let Some(title) = lines.next() {
            log::info!("{}", title.if_supports_color(Stdout, |t| t.bold()));
        }
        for line in lines {
            log::info!("{}", line);
        }
        if !info.valid {
            unreadable += 1;
        }
    }

    if unreadable > 0 {
        return Err(CliError::analysis(format!(
            "{} of {} file(s) could not be read",
            unreadable,
            files.len()
        )));
    }
    Ok(())
}
