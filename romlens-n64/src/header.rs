//! Header normalization and field extraction.
//!
//! Layout of the canonical 64-byte header:
//!
//! | Offset      | Field                               |
//! |-------------|-------------------------------------|
//! | 0x00..0x04  | PI domain 1 latch (format magic)    |
//! | 0x04..0x08  | clock rate override                 |
//! | 0x08..0x0C  | entry point                         |
//! | 0x0C..0x10  | release address (libultra version)  |
//! | 0x10..0x18  | CRC1, CRC2                          |
//! | 0x20..0x34  | internal name, space padded         |
//! | 0x3B        | manufacturer / category id          |
//! | 0x3C..0x3E  | cartridge id                        |
//! | 0x3E        | country code                        |
//! | 0x3F        | ROM version                         |
//!
//! Boot code (IPL3) follows at 0x40..0x1000.

use serde::{Deserialize, Serialize};

use romlens_core::util::{decode_permissive, read_printable};

use crate::byteorder::ByteTransform;

pub const HEADER_SIZE: usize = 0x40;
pub const BOOT_CODE_END: usize = 0x1000;
pub const BOOT_CODE_SIZE: usize = BOOT_CODE_END - HEADER_SIZE; // 4032 bytes

/// Header and boot code in canonical big-endian order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalImage {
    pub header: [u8; HEADER_SIZE],
    /// Up to [`BOOT_CODE_SIZE`] bytes; shorter when the file is truncated.
    pub boot_code: Vec<u8>,
}

/// Split the first 4 KiB of a ROM into header and boot code and bring both
/// to big-endian order.
///
/// Returns `None` when fewer than [`HEADER_SIZE`] bytes are available.
pub fn normalize(raw: &[u8], transform: Option<ByteTransform>) -> Option<CanonicalImage> {
    if raw.len() < HEADER_SIZE {
        return None;
    }

    let mut header = [0u8; HEADER_SIZE];
    header.copy_from_slice(&raw[..HEADER_SIZE]);
    let mut boot_code = raw[HEADER_SIZE..raw.len().min(BOOT_CODE_END)].to_vec();

    if let Some(transform) = transform {
        transform.apply(&mut header);
        transform.apply(&mut boot_code);
    }

    Some(CanonicalImage { header, boot_code })
}

/// Structured view of the canonical cartridge header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RomHeader {
    pub clock_rate: u32,
    pub entry_point: u32,
    pub release_address: u32,
    pub crc1: u32,
    pub crc2: u32,
    /// Printable characters only, trimmed
    pub internal_name: String,
    /// 'N' when the header byte is zero
    pub manufacturer_id: char,
    /// Two characters, untrimmed
    pub cartridge_id: String,
    /// Raw byte, kept even when not in the country table
    pub country_code: u8,
    pub rom_version: u8,
}

impl Default for RomHeader {
    fn default() -> Self {
        Self {
            clock_rate: 0,
            entry_point: 0,
            release_address: 0,
            crc1: 0,
            crc2: 0,
            internal_name: String::new(),
            manufacturer_id: 'N',
            cartridge_id: String::new(),
            country_code: 0,
            rom_version: 0,
        }
    }
}

fn be_u32(buf: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([buf[offset], buf[offset + 1], buf[offset + 2], buf[offset + 3]])
}

impl RomHeader {
    /// Extract fields from a canonical header. Never fails: every byte
    /// pattern decodes to some value.
    pub fn parse(header: &[u8; HEADER_SIZE]) -> Self {
        let manufacturer_id = match header[0x3B] {
            0 => 'N',
            b => b as char,
        };

        Self {
            clock_rate: be_u32(header, 0x04),
            entry_point: be_u32(header, 0x08),
            release_address: be_u32(header, 0x0C),
            crc1: be_u32(header, 0x10),
            crc2: be_u32(header, 0x14),
            internal_name: read_printable(&header[0x20..0x34]),
            manufacturer_id,
            cartridge_id: decode_permissive(&header[0x3C..0x3E]),
            country_code: header[0x3E],
            rom_version: header[0x3F],
        }
    }

    /// Manufacturer id followed by cartridge id (e.g. "NSM").
    pub fn game_code(&self) -> String {
        format!("{}{}", self.manufacturer_id, self.cartridge_id)
    }

    /// Retail product code such as `NUS-NSME`, when every component byte is
    /// printable ASCII.
    pub fn product_code(&self) -> Option<String> {
        let dest = self.country_code as char;
        let printable = |c: char| (' '..='~').contains(&c);

        if !printable(self.manufacturer_id)
            || !printable(dest)
            || self.cartridge_id.chars().count() != 2
            || !self.cartridge_id.chars().all(printable)
        {
            return None;
        }

        Some(format!("NUS-{}{}{}", self.manufacturer_id, self.cartridge_id, dest))
    }

    pub fn version_label(&self) -> String {
        format!("v1.{}", self.rom_version)
    }
}

#[cfg(test)]
#[path = "tests/header_tests.rs"]
mod tests;
