//! The per-file `RomInfo` aggregate and the top-level `parse_rom` entry point.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use romlens_core::AnalysisError;
use romlens_core::util::format_megabytes;
use romlens_n64::save::size_mbits;
use romlens_n64::{CicChip, CicDetection, N64Analysis, RegionInfo, RomFormat, RomHeader, SaveType};

use crate::hasher::content_digest;

/// Everything known about one ROM file after a scan.
///
/// Built once per scan and never mutated. When `valid` is false every
/// derived field holds its "Unknown" default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RomInfo {
    pub path: PathBuf,
    pub format: RomFormat,
    pub size_bytes: u64,
    pub header: RomHeader,
    pub region: RegionInfo,
    pub cic: CicDetection,
    pub save_type: SaveType,
    /// Truncated MD5 of the first MiB; empty when the file was not read
    pub digest: String,
    pub valid: bool,
}

impl RomInfo {
    /// Result for a file that could not be parsed.
    pub fn invalid(path: impl Into<PathBuf>, size_bytes: u64) -> Self {
        Self {
            path: path.into(),
            format: RomFormat::Unknown,
            size_bytes,
            header: RomHeader::default(),
            region: RegionInfo::default(),
            cic: CicDetection::default(),
            save_type: SaveType::Unknown,
            digest: String::new(),
            valid: false,
        }
    }

    fn from_analysis(path: &Path, analysis: N64Analysis, digest: String) -> Self {
        Self {
            path: path.to_path_buf(),
            format: analysis.format,
            size_bytes: analysis.file_size,
            header: analysis.header,
            region: analysis.region,
            cic: analysis.cic,
            save_type: analysis.save_type,
            digest,
            valid: true,
        }
    }

    pub fn cic_chip(&self) -> CicChip {
        self.cic.chip
    }

    pub fn size_mbits(&self) -> u64 {
        size_mbits(self.size_bytes)
    }

    /// Internal name, or the file stem when the header name is blank.
    pub fn display_name(&self) -> String {
        if !self.header.internal_name.is_empty() {
            return self.header.internal_name.clone();
        }
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Flag glyph followed by the short region code.
    pub fn region_display(&self) -> String {
        format!("{} {}", self.region.flag, self.region.region)
    }

    pub fn video_info(&self) -> String {
        format!("{} {}Hz", self.region.video, self.region.refresh_hz)
    }

    pub fn size_display(&self) -> String {
        format!("{} ({}Mbit)", format_megabytes(self.size_bytes), self.size_mbits())
    }

    /// Identity check on file content: equal digests mean the same leading bytes.
    pub fn same_content(&self, other: &RomInfo) -> bool {
        self.valid && other.valid && self.digest == other.digest
    }
}

impl std::fmt::Display for RomInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::display::detail_lines(self).join("\n"))
    }
}

/// Parse a ROM file into a [`RomInfo`].
///
/// Never fails: missing, empty, unreadable or truncated files come back with
/// `valid == false` and a logged warning, so a batch scan can keep going.
/// Reads at most 4 KiB for the header and 1 MiB for the digest.
pub fn parse_rom(path: &Path) -> RomInfo {
    let size_bytes = match fs::metadata(path) {
        Ok(meta) if meta.is_file() => meta.len(),
        Ok(_) => {
            log::warn!("[ROM] {} is not a regular file", path.display());
            return RomInfo::invalid(path, 0);
        }
        Err(e) => {
            log::warn!("[ROM] Cannot stat {}: {}", path.display(), e);
            return RomInfo::invalid(path, 0);
        }
    };

    if size_bytes == 0 {
        log::warn!("[ROM] {} is empty", path.display());
        return RomInfo::invalid(path, 0);
    }

    match read_rom(path) {
        Ok(info) => info,
        Err(e) => {
            log::warn!("[ROM] Error parsing {}: {}", path.display(), e);
            RomInfo::invalid(path, size_bytes)
        }
    }
}

fn read_rom(path: &Path) -> Result<RomInfo, AnalysisError> {
    let mut file = File::open(path)?;
    let analysis = romlens_n64::analyze(&mut file)?;
    let digest = content_digest(&mut file)?;
    log::debug!(
        "[ROM] {}: {} {} {}",
        path.display(),
        analysis.format,
        analysis.region.region,
        analysis.cic.chip
    );
    Ok(RomInfo::from_analysis(path, analysis, digest))
}

#[cfg(test)]
#[path = "tests/rom_info_tests.rs"]
mod tests;
