//! Country code (header byte 0x3E) classification.

use serde::{Deserialize, Serialize};

use romlens_core::VideoStandard::{self, Ntsc, Pal};

/// One row of the country-code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryEntry {
    pub code: u8,
    pub region: &'static str,
    pub country: &'static str,
    pub video: VideoStandard,
    pub flag: &'static str,
}

const fn entry(
    code: u8,
    region: &'static str,
    country: &'static str,
    video: VideoStandard,
    flag: &'static str,
) -> CountryEntry {
    CountryEntry {
        code,
        region,
        country,
        video,
        flag,
    }
}

/// Known country codes, sorted by code.
pub const COUNTRY_TABLE: &[CountryEntry] = &[
    entry(0x00, "Demo", "Demo/Beta", Ntsc, "🎮"),
    entry(0x37, "NTSC-B", "Brazil", Ntsc, "🇧🇷"),
    entry(0x41, "NTSC-J", "Japan/Asia", Ntsc, "🇯🇵"),
    entry(0x42, "NTSC-B", "Brazil", Ntsc, "🇧🇷"),
    entry(0x43, "NTSC-C", "China", Ntsc, "🇨🇳"),
    entry(0x44, "PAL-G", "Germany", Pal, "🇩🇪"),
    entry(0x45, "NTSC-U", "USA", Ntsc, "🇺🇸"),
    entry(0x46, "PAL-F", "France", Pal, "🇫🇷"),
    entry(0x47, "PAL-G", "Germany", Pal, "🇩🇪"),
    entry(0x48, "PAL-NL", "Netherlands", Pal, "🇳🇱"),
    entry(0x49, "PAL-I", "Italy", Pal, "🇮🇹"),
    entry(0x4A, "NTSC-J", "Japan", Ntsc, "🇯🇵"),
    entry(0x4B, "NTSC-K", "Korea", Ntsc, "🇰🇷"),
    entry(0x4C, "PAL-X", "Gateway (PAL)", Pal, "🌍"),
    entry(0x4E, "NTSC-C", "Canada", Ntsc, "🇨🇦"),
    entry(0x50, "PAL", "Europe", Pal, "🇪🇺"),
    entry(0x53, "PAL-S", "Spain", Pal, "🇪🇸"),
    entry(0x55, "PAL-A", "Australia", Pal, "🇦🇺"),
    entry(0x57, "PAL-SC", "Scandinavia", Pal, "🇸🇪"),
    entry(0x58, "PAL-X", "Europe (X)", Pal, "🇪🇺"),
    entry(0x59, "PAL-X", "Europe (Y)", Pal, "🇪🇺"),
];

const UNKNOWN_FLAG: &str = "❓";
const NO_ROM_FLAG: &str = "🎮";

/// Region, country and video timing derived from a country code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionInfo {
    pub code: u8,
    /// Short code such as `NTSC-U` or `PAL-G`; `0xNN` for unlisted codes
    pub region: String,
    pub country: String,
    pub video: VideoStandard,
    pub refresh_hz: u8,
    pub flag: String,
}

impl Default for RegionInfo {
    /// Placeholder for ROMs that could not be parsed.
    fn default() -> Self {
        Self {
            code: 0,
            region: "Unknown".into(),
            country: "Unknown".into(),
            video: Ntsc,
            refresh_hz: Ntsc.refresh_hz(),
            flag: NO_ROM_FLAG.into(),
        }
    }
}

impl From<&CountryEntry> for RegionInfo {
    fn from(entry: &CountryEntry) -> Self {
        Self {
            code: entry.code,
            region: entry.region.into(),
            country: entry.country.into(),
            video: entry.video,
            refresh_hz: entry.video.refresh_hz(),
            flag: entry.flag.into(),
        }
    }
}

impl RegionInfo {
    pub fn is_pal(&self) -> bool {
        self.video == Pal
    }
}

/// Look up a country code in [`COUNTRY_TABLE`].
pub fn lookup_country(code: u8) -> Option<&'static CountryEntry> {
    COUNTRY_TABLE
        .binary_search_by_key(&code, |e| e.code)
        .ok()
        .map(|i| &COUNTRY_TABLE[i])
}

/// Classify a country code. Total: unlisted codes get an NTSC/60 Hz
/// fallback labelled with the hex code.
pub fn classify_region(code: u8) -> RegionInfo {
    match lookup_country(code) {
        Some(entry) => entry.into(),
        None => RegionInfo {
            code,
            region: format!("0x{:02X}", code),
            country: "Unknown".into(),
            video: Ntsc,
            refresh_hz: Ntsc.refresh_hz(),
            flag: UNKNOWN_FLAG.into(),
        },
    }
}

#[cfg(test)]
#[path = "tests/region_tests.rs"]
mod tests;
