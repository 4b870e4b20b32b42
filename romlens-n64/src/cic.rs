//! CIC lockout chip estimation.
//!
//! The chip is guessed from a byte sum over the IPL3 boot code, falling back
//! to the boot entry point when no checksum window matches.

use serde::{Deserialize, Serialize};

use crate::header::BOOT_CODE_SIZE;

/// CIC lockout chip variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CicChip {
    Cic6101,
    Cic6102,
    Cic6103,
    Cic6105,
    Cic6106,
    Cic7102,
    #[default]
    Unknown,
}

impl CicChip {
    pub fn name(self) -> &'static str {
        match self {
            CicChip::Cic6101 => "CIC-6101",
            CicChip::Cic6102 => "CIC-6102",
            CicChip::Cic6103 => "CIC-6103",
            CicChip::Cic6105 => "CIC-6105",
            CicChip::Cic6106 => "CIC-6106",
            CicChip::Cic7102 => "CIC-7102",
            CicChip::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for CicChip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How a [`CicDetection`] was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CicSource {
    /// Boot code sum fell inside a known checksum window
    BootChecksum,
    /// Entry point heuristic
    EntryPoint,
    /// Not enough boot code to decide
    #[default]
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CicDetection {
    pub chip: CicChip,
    pub source: CicSource,
}

/// Known boot code checksums, in match priority order.
///
/// The short values at the end are legacy identifiers. Matching only
/// considers constants above [`PRECISE_CHECKSUM_MIN`], so they never match.
pub const CIC_CHECKSUMS: &[(u32, CicChip)] = &[
    (0x6170A4A1, CicChip::Cic6101),
    (0x90BB6CB5, CicChip::Cic6102),
    (0x0B050EE0, CicChip::Cic6103),
    (0x98BC2C86, CicChip::Cic6105),
    (0xACC8580A, CicChip::Cic6106),
    (0x009E9EA3, CicChip::Cic7102),
    (0x3F, CicChip::Cic6101),
    (0x3F01, CicChip::Cic6102),
    (0x783F, CicChip::Cic6103),
    (0x913F, CicChip::Cic6105),
    (0x853F, CicChip::Cic6106),
];

/// Constants at or below this are legacy identifiers, not checksums.
pub const PRECISE_CHECKSUM_MIN: u32 = 0xFFFF;

/// Half-width of the window around each checksum that still counts as a match.
pub const CHECKSUM_TOLERANCE: u32 = 0x10000;

/// Entry points with a characteristic chip; anything else is treated as 6102.
const ENTRY_POINT_HINTS: &[(u32, CicChip)] = &[
    (0x80000400, CicChip::Cic6101),
    (0x80000480, CicChip::Cic6103),
    (0x800004C0, CicChip::Cic6106),
];

/// Unsigned 32-bit wrapping sum of the first [`BOOT_CODE_SIZE`] bytes.
pub fn boot_code_checksum(boot_code: &[u8]) -> u32 {
    boot_code
        .iter()
        .take(BOOT_CODE_SIZE)
        .fold(0u32, |acc, &b| acc.wrapping_add(b as u32))
}

fn match_checksum(checksum: u32) -> Option<CicChip> {
    CIC_CHECKSUMS
        .iter()
        .filter(|(known, _)| *known > PRECISE_CHECKSUM_MIN)
        .find(|(known, _)| checksum.abs_diff(*known) < CHECKSUM_TOLERANCE)
        .map(|&(_, chip)| chip)
}

/// Guess the chip from the boot entry point. 6102 is the most common chip,
/// so it is the default.
pub fn chip_from_entry_point(entry_point: u32) -> CicChip {
    ENTRY_POINT_HINTS
        .iter()
        .find(|(ep, _)| *ep == entry_point)
        .map(|&(_, chip)| chip)
        .unwrap_or(CicChip::Cic6102)
}

/// Classify the CIC chip. Boot code must already be big-endian.
pub fn detect_cic(boot_code: &[u8], entry_point: u32) -> CicDetection {
    if boot_code.len() < BOOT_CODE_SIZE {
        return CicDetection::default();
    }

    if let Some(chip) = match_checksum(boot_code_checksum(boot_code)) {
        return CicDetection {
            chip,
            source: CicSource::BootChecksum,
        };
    }

    CicDetection {
        chip: chip_from_entry_point(entry_point),
        source: CicSource::EntryPoint,
    }
}

#[cfg(test)]
#[path = "tests/cic_tests.rs"]
mod tests;
