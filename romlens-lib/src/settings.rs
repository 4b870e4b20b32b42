//! User settings (default ROM directory, scan worker count).
//!
//! The settings file lives at `~/.config/romlens/settings.toml`:
//!
//! ```toml
//! [library]
//! rom_dir = "/home/me/roms/n64"
//!
//! [scan]
//! jobs = 4
//! ```
//!
//! Updates go through `toml::Value` so unknown keys survive a rewrite.

use std::io;
use std::path::{Path, PathBuf};

/// Canonical path to the settings file: `~/.config/romlens/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("romlens").join("settings.toml")
}

fn load_document() -> Option<toml::Value> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    contents.parse().ok()
}

/// Read `library.rom_dir` from a parsed settings document.
pub fn rom_dir_from_toml(doc: &toml::Value) -> Option<PathBuf> {
    let dir = doc.get("library")?.get("rom_dir")?.as_str()?;
    if dir.is_empty() {
        None
    } else {
        Some(PathBuf::from(dir))
    }
}

/// Read `scan.jobs` from a parsed settings document. Zero and negative
/// values are treated as unset.
pub fn scan_jobs_from_toml(doc: &toml::Value) -> Option<usize> {
    let jobs = doc.get("scan")?.get("jobs")?.as_integer()?;
    usize::try_from(jobs).ok().filter(|&j| j > 0)
}

/// Resolve the ROM directory using a priority chain:
///
/// 1. CLI argument (if `Some`)
/// 2. Saved `library.rom_dir` in `settings.toml`
/// 3. Current working directory
pub fn resolve_rom_dir(cli_override: Option<PathBuf>) -> PathBuf {
    resolve_rom_dir_with(cli_override, load_document().as_ref())
}

pub fn resolve_rom_dir_with(cli_override: Option<PathBuf>, doc: Option<&toml::Value>) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = doc.and_then(rom_dir_from_toml) {
        return p;
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Resolve the scan worker count: CLI flag, then `scan.jobs`, then the
/// machine's available parallelism.
pub fn resolve_jobs(cli_override: Option<usize>) -> usize {
    resolve_jobs_with(cli_override, load_document().as_ref())
}

pub fn resolve_jobs_with(cli_override: Option<usize>, doc: Option<&toml::Value>) -> usize {
    cli_override
        .filter(|&j| j > 0)
        .or_else(|| doc.and_then(scan_jobs_from_toml))
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
        })
}

/// Set (or remove, with `None`) `key` inside `[section]`, creating the
/// section as needed.
pub fn update_document(
    doc: &mut toml::Value,
    section: &str,
    key: &str,
    value: Option<toml::Value>,
) -> io::Result<()> {
    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let entry = table
        .entry(section)
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let section_table = entry
        .as_table_mut()
        .ok_or_else(|| io::Error::other(format!("[{section}] is not a table")))?;

    match value {
        Some(v) => {
            section_table.insert(key.to_string(), v);
        }
        None => {
            section_table.remove(key);
        }
    }
    Ok(())
}

/// Parse existing settings text as the base for an update. Unparseable text
/// is replaced by an empty table, which drops every key the file held.
pub fn document_for_update(contents: &str, path: &Path) -> toml::Value {
    match contents.parse::<toml::Value>() {
        Ok(doc) => doc,
        Err(e) => {
            log::warn!(
                "{} is not valid TOML ({}); its contents will be replaced",
                path.display(),
                e
            );
            toml::Value::Table(Default::default())
        }
    }
}

fn update_settings(section: &str, key: &str, value: Option<toml::Value>) -> io::Result<()> {
    let settings = settings_path();
    let mut doc = match std::fs::read_to_string(&settings) {
        Ok(contents) => document_for_update(&contents, &settings),
        Err(_) => toml::Value::Table(Default::default()),
    };

    update_document(&mut doc, section, key, value)?;

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, &settings)?;

    log::debug!("Updated {}.{} in {}", section, key, settings.display());
    Ok(())
}

/// Save (or clear) the default ROM directory.
pub fn save_rom_dir(path: Option<&Path>) -> io::Result<()> {
    let value = path.map(|p| toml::Value::String(p.to_string_lossy().into_owned()));
    update_settings("library", "rom_dir", value)
}

/// Save (or clear) the default worker count.
pub fn save_jobs(jobs: Option<usize>) -> io::Result<()> {
    let value = jobs.map(|j| toml::Value::Integer(j as i64));
    update_settings("scan", "jobs", value)
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let doc = load_document()?;
    toml::to_string_pretty(&doc).ok()
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
