pub(crate) mod config;
pub(crate) mod info;
pub(crate) mod regions;
pub(crate) mod scan;
pub(crate) mod timing;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

/// Display width of a cell. Counts chars, so flag emoji come out one
/// column narrow on most terminals.
fn cell_width(s: &str) -> usize {
    s.chars().count()
}

/// Compute column widths from titles and every row.
pub(crate) fn column_widths<R: AsRef<[S]>, S: AsRef<str>>(titles: &[&str], rows: &[R]) -> Vec<usize> {
    let mut widths: Vec<usize> = titles.iter().map(|t| cell_width(t)).collect();
    for row in rows {
        for (i, cell) in row.as_ref().iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell_width(cell.as_ref()));
            }
        }
    }
    widths
}

pub(crate) fn format_row<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| {
            let cell = cell.as_ref();
            let pad = w.saturating_sub(cell_width(cell));
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Print a bold title line followed by aligned rows.
pub(crate) fn print_table<R: AsRef<[S]>, S: AsRef<str>>(titles: &[&str], rows: &[R]) {
    let widths = column_widths(titles, rows);
    log::info!(
        "{}",
        format_row(titles, &widths).if_supports_color(Stdout, |t| t.bold()),
    );
    for row in rows {
        log::info!("{}", format_row(row.as_ref(), &widths));
    }
}
