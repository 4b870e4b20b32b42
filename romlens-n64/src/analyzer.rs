//! Reader-level N64 analysis: bounded read, byte-order normalization,
//! header parsing and classification in one pass.

use std::io::{Read, SeekFrom};

use serde::{Deserialize, Serialize};

use romlens_core::{AnalysisError, ReadSeek};

use crate::byteorder::{RomFormat, detect_format};
use crate::cic::{CicDetection, detect_cic};
use crate::header::{BOOT_CODE_END, HEADER_SIZE, RomHeader, normalize};
use crate::region::{RegionInfo, classify_region};
use crate::save::{SaveType, classify_save_type, size_mbits};

/// File extensions commonly used for N64 dumps. Not authoritative: the
/// byte order is always detected from the data.
pub const FILE_EXTENSIONS: &[&str] = &["z64", "n64", "v64"];

/// Everything derived from the first 4 KiB of a ROM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct N64Analysis {
    pub format: RomFormat,
    pub header: RomHeader,
    pub region: RegionInfo,
    pub cic: CicDetection,
    pub save_type: SaveType,
    /// Total file size the save-type fallback was computed from
    pub file_size: u64,
}

/// Analyze the header region of an in-memory ROM prefix.
///
/// `raw` is the start of the file (only the first 0x1000 bytes are used);
/// `file_size` is the full size on disk.
pub fn analyze_bytes(raw: &[u8], file_size: u64) -> Result<N64Analysis, AnalysisError> {
    let format = detect_format(raw);
    if format == RomFormat::Unknown && raw.len() >= 4 {
        log::debug!(
            "unrecognized N64 magic bytes [{:02X}, {:02X}, {:02X}, {:02X}], parsing as-is",
            raw[0],
            raw[1],
            raw[2],
            raw[3]
        );
    }

    let raw = &raw[..raw.len().min(BOOT_CODE_END)];
    let image = normalize(raw, format.transform())
        .ok_or_else(|| AnalysisError::too_small(HEADER_SIZE as u64, raw.len() as u64))?;

    let header = RomHeader::parse(&image.header);
    let region = classify_region(header.country_code);
    let cic = detect_cic(&image.boot_code, header.entry_point);
    let save_type = classify_save_type(
        header.manufacturer_id,
        &header.cartridge_id,
        size_mbits(file_size),
    );

    Ok(N64Analysis {
        format,
        header,
        region,
        cic,
        save_type,
        file_size,
    })
}

/// Analyze a ROM from a reader. At most 0x1000 bytes are read regardless
/// of the file size.
pub fn analyze(reader: &mut dyn ReadSeek) -> Result<N64Analysis, AnalysisError> {
    let file_size = reader.seek(SeekFrom::End(0))?;
    reader.seek(SeekFrom::Start(0))?;

    let mut buf = Vec::with_capacity(BOOT_CODE_END);
    Read::take(&mut *reader, BOOT_CODE_END as u64).read_to_end(&mut buf)?;

    analyze_bytes(&buf, file_size)
}

#[cfg(test)]
#[path = "tests/analyzer_tests.rs"]
mod tests;
