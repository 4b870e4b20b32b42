//! Display helpers for ROM lists and detail views.
//!
//! Pure data-to-text transformation shared by every frontend.

use romlens_core::util::format_megabytes;
use romlens_n64::{COUNTRY_TABLE, CicSource};

use crate::RomInfo;

// ---------------------------------------------------------------------------
// List rows
// ---------------------------------------------------------------------------

pub const COLUMN_TITLES: [&str; 8] = [
    "Name", "Region", "Country", "Video", "Size", "CIC", "Save", "Format",
];

/// One line of a ROM browser list, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomRow {
    pub name: String,
    pub region: String,
    pub country: String,
    pub video: String,
    pub size: String,
    pub cic: String,
    pub save: String,
    pub format: String,
}

impl RomRow {
    pub fn from_info(info: &RomInfo) -> Self {
        Self {
            name: info.display_name(),
            region: info.region_display(),
            country: info.region.country.clone(),
            video: info.video_info(),
            size: format_megabytes(info.size_bytes),
            cic: info.cic.chip.name().to_string(),
            save: info.save_type.name().to_string(),
            format: info.format.label().to_string(),
        }
    }

    /// Cells in [`COLUMN_TITLES`] order.
    pub fn cells(&self) -> [&str; 8] {
        [
            self.name.as_str(),
            self.region.as_str(),
            self.country.as_str(),
            self.video.as_str(),
            self.size.as_str(),
            self.cic.as_str(),
            self.save.as_str(),
            self.format.as_str(),
        ]
    }
}

// ---------------------------------------------------------------------------
// Detail view
// ---------------------------------------------------------------------------

fn cic_source_note(source: CicSource) -> &'static str {
    match source {
        CicSource::BootChecksum => " (boot code checksum)",
        CicSource::EntryPoint => " (entry point heuristic)",
        CicSource::Unavailable => "",
    }
}

/// Save types not found in the game-code table are a guess from the
/// cartridge size.
fn save_note(info: &RomInfo) -> &'static str {
    if info.valid && !info.save_type.is_known_title() {
        " (size estimate)"
    } else {
        ""
    }
}

/// Multi-line summary of a ROM, one field per line.
pub fn detail_lines(info: &RomInfo) -> Vec<String> {
    let mut lines = vec![
        format!("N64 ROM: {}", info.display_name()),
        format!("  File: {}", info.file_name()),
        format!("  Format: {}", info.format.description()),
        format!(
            "  Region: {} ({})",
            info.region_display(),
            info.region.country
        ),
        format!("  Video: {}", info.video_info()),
        format!("  Size: {}", info.size_display()),
        format!("  Cart ID: {}", info.header.game_code()),
    ];

    if let Some(product) = info.header.product_code() {
        lines.push(format!("  Product: {}", product));
    }
    if info.valid {
        lines.push(format!("  Version: {}", info.header.version_label()));
    }

    lines.extend([
        format!(
            "  CIC: {}{}",
            info.cic.chip,
            cic_source_note(info.cic.source)
        ),
        format!("  Save: {}{}", info.save_type, save_note(info)),
        format!("  CRC: {:08X} {:08X}", info.header.crc1, info.header.crc2),
        format!("  MD5: {}", info.digest),
    ]);

    if !info.valid {
        lines.push("  Status: unreadable or truncated".to_string());
    }
    lines
}

// ---------------------------------------------------------------------------
// Region database
// ---------------------------------------------------------------------------

pub const REGION_COLUMN_TITLES: [&str; 6] = ["Code", "Region", "Country", "Video", "Hz", "Flag"];

/// The country-code table as display rows, ordered by code.
pub fn region_rows() -> Vec<[String; 6]> {
    COUNTRY_TABLE
        .iter()
        .map(|e| {
            [
                format!("0x{:02X}", e.code),
                e.region.to_string(),
                e.country.to_string(),
                e.video.to_string(),
                e.video.refresh_hz().to_string(),
                e.flag.to_string(),
            ]
        })
        .collect()
}
