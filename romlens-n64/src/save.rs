//! Save medium inference from the game code, with a cartridge-size fallback.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SaveType {
    Eeprom4K,
    Eeprom16K,
    Sram256K,
    Flash1M,
    ControllerPak,
    /// Size fallback for cartridges of 256 Mbit and up
    FlashRam,
    /// Size fallback for cartridges of 64 Mbit and up
    Sram,
    /// Size fallback for small cartridges
    Eeprom,
    /// ROM was not parsed
    #[default]
    Unknown,
}

impl SaveType {
    pub fn name(self) -> &'static str {
        match self {
            SaveType::Eeprom4K => "EEPROM 4K",
            SaveType::Eeprom16K => "EEPROM 16K",
            SaveType::Sram256K => "SRAM 256K",
            SaveType::Flash1M => "FLASH 1M",
            SaveType::ControllerPak => "CPAK",
            SaveType::FlashRam => "FlashRAM",
            SaveType::Sram => "SRAM",
            SaveType::Eeprom => "EEPROM",
            SaveType::Unknown => "Unknown",
        }
    }

    /// Whether the type came from the game-code table rather than the size guess.
    pub fn is_known_title(self) -> bool {
        matches!(
            self,
            SaveType::Eeprom4K
                | SaveType::Eeprom16K
                | SaveType::Sram256K
                | SaveType::Flash1M
                | SaveType::ControllerPak
        )
    }
}

impl std::fmt::Display for SaveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Game codes per save medium, checked in this order.
pub const SAVE_BUCKETS: &[(SaveType, &[&str])] = &[
    (
        SaveType::Eeprom4K,
        &["NSM", "NDY", "NWT", "NWQ", "NW2", "N3D", "NAD", "NB5", "NBD", "NBC"],
    ),
    (
        SaveType::Eeprom16K,
        &["NZL", "NMQ", "NPN", "NPW", "NPY", "NRE", "NRZ", "NSA", "NTE", "NVY"],
    ),
    (
        SaveType::Sram256K,
        &["NER", "NJF", "NKJ", "NMF", "NRI", "NS6", "NTJ", "NUB", "NYK"],
    ),
    (
        SaveType::Flash1M,
        &[
            "NCC", "NDA", "NDO", "NDP", "NFZ", "NGE", "NJM", "NKA", "NKI", "NM8", "NMV", "NMW",
            "NPD", "NR7", "NRH", "NSI", "NW4", "NZS",
        ],
    ),
    (
        SaveType::ControllerPak,
        &[
            "N64", "NB7", "NCH", "NCT", "NCU", "NCW", "NEA", "NEP", "NFH", "NFU", "NGL", "NGV",
            "NHA", "NHP", "NIB", "NIR", "NJG", "NK2", "NK4", "NKT",
        ],
    ),
];

/// Cartridge size in megabits (1 Mbit = 128 KiB), rounded down.
pub fn size_mbits(size_bytes: u64) -> u64 {
    size_bytes * 8 / (1024 * 1024)
}

/// Size-based guess used when the game code is not in [`SAVE_BUCKETS`].
pub fn save_type_from_size(size_mbits: u64) -> SaveType {
    if size_mbits >= 256 {
        SaveType::FlashRam
    } else if size_mbits >= 64 {
        SaveType::Sram
    } else {
        SaveType::Eeprom
    }
}

/// Classify the save medium. Either the full game code (manufacturer +
/// cartridge id) or the bare cartridge id may appear in a bucket.
pub fn classify_save_type(manufacturer_id: char, cartridge_id: &str, size_mbits: u64) -> SaveType {
    let game_code = format!("{}{}", manufacturer_id, cartridge_id);

    SAVE_BUCKETS
        .iter()
        .find(|(_, codes)| codes.contains(&game_code.as_str()) || codes.contains(&cartridge_id))
        .map(|&(save_type, _)| save_type)
        .unwrap_or_else(|| save_type_from_size(size_mbits))
}

#[cfg(test)]
#[path = "tests/save_tests.rs"]
mod tests;
