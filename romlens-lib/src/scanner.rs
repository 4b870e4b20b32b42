//! Directory scanning and batch parsing for ROM collections.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use romlens_n64::FILE_EXTENSIONS;

use crate::rom_info::{RomInfo, parse_rom};
use crate::worker_pool::WorkerPool;

/// Build the extension set used to pick ROM files out of a folder.
pub fn extension_set(extensions: &[&str]) -> HashSet<String> {
    extensions.iter().map(|e| e.to_lowercase()).collect()
}

/// Check if a path has an extension in the allowed set (case-insensitive).
fn has_matching_extension(path: &Path, extensions: &HashSet<String>) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| extensions.contains(&e.to_lowercase()))
        .unwrap_or(false)
}

/// List the N64 ROM files directly inside `folder`, sorted by path.
///
/// Selection is by extension only; the extension says nothing about the
/// byte order, which is detected per file during parsing.
pub fn scan_rom_dir(folder: &Path) -> std::io::Result<Vec<PathBuf>> {
    let extensions = extension_set(FILE_EXTENSIONS);
    let mut files: Vec<PathBuf> = std::fs::read_dir(folder)?
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_file() && has_matching_extension(p, &extensions))
        .collect();

    files.sort();
    Ok(files)
}

/// Parse every path in order. One result per path; unreadable files come
/// back invalid instead of stopping the scan.
pub fn scan_roms(paths: &[PathBuf]) -> Vec<RomInfo> {
    paths.iter().map(|p| parse_rom(p)).collect()
}

/// Parse paths on a pool of `jobs` workers.
///
/// Parsing runs on tokio's blocking pool. `on_result` sees each result as it
/// completes (for progress display); the returned vector is in input order
/// and has exactly one entry per path.
pub async fn scan_roms_parallel<F>(paths: Vec<PathBuf>, jobs: usize, mut on_result: F) -> Vec<RomInfo>
where
    F: FnMut(&RomInfo),
{
    let items: Vec<(usize, PathBuf)> = paths.iter().cloned().enumerate().collect();

    let mut pool = WorkerPool::start(jobs, items, |(index, path)| async move {
        let task_path = path.clone();
        match tokio::task::spawn_blocking(move || parse_rom(&task_path)).await {
            Ok(info) => (index, info),
            Err(e) => {
                log::warn!("[ROM] Parser task failed for {}: {}", path.display(), e);
                (index, RomInfo::invalid(path, 0))
            }
        }
    });

    let mut slots: Vec<Option<RomInfo>> = vec![None; paths.len()];
    while let Some((index, info)) = pool.recv().await {
        on_result(&info);
        slots[index] = Some(info);
    }

    slots
        .into_iter()
        .zip(paths)
        .map(|(slot, path)| slot.unwrap_or_else(|| RomInfo::invalid(path, 0)))
        .collect()
}

/// Whether a ROM passes a region filter. `None`, empty and `"all"` pass
/// everything; otherwise the region code must contain the filter text,
/// ignoring case (so `"PAL"` matches `PAL-G` and `PAL-X`).
pub fn matches_region(info: &RomInfo, filter: Option<&str>) -> bool {
    match filter.map(str::trim) {
        None | Some("") => true,
        Some(f) if f.eq_ignore_ascii_case("all") => true,
        Some(f) => info
            .region
            .region
            .to_uppercase()
            .contains(&f.to_uppercase()),
    }
}

pub fn filter_by_region<'a>(infos: &'a [RomInfo], filter: Option<&str>) -> Vec<&'a RomInfo> {
    infos.iter().filter(|i| matches_region(i, filter)).collect()
}

#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod tests;
