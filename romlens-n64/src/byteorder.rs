//! N64 byte-order detection and normalization.
//!
//! Cartridge dumps exist in three byte orderings depending on the copier
//! hardware that produced them. Everything downstream works on the
//! canonical big-endian (.z64) layout.

use serde::{Deserialize, Serialize};

/// N64 ROM byte-order format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RomFormat {
    /// .z64: big-endian (canonical), no swap needed
    Z64,
    /// .n64: little-endian, reverse 4-byte groups
    N64,
    /// .v64: byte-swapped pairs
    V64,
    /// Magic bytes not recognized; parsed best-effort without swapping
    #[default]
    Unknown,
}

impl RomFormat {
    /// Transform that brings data in this format to big-endian order.
    pub fn transform(self) -> Option<ByteTransform> {
        match self {
            RomFormat::N64 => Some(ByteTransform::WordSwap),
            RomFormat::V64 => Some(ByteTransform::HalfwordSwap),
            RomFormat::Z64 | RomFormat::Unknown => None,
        }
    }

    /// Short upper-case label used in ROM lists.
    pub fn label(self) -> &'static str {
        match self {
            RomFormat::Z64 => "Z64",
            RomFormat::N64 => "N64",
            RomFormat::V64 => "V64",
            RomFormat::Unknown => "UNKNOWN",
        }
    }

    /// Extension plus byte order, for detail views.
    pub fn description(self) -> &'static str {
        match self {
            RomFormat::Z64 => "z64 (big-endian)",
            RomFormat::N64 => "n64 (little-endian)",
            RomFormat::V64 => "v64 (byte-swapped)",
            RomFormat::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for RomFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Byte reordering applied to reach the canonical layout.
///
/// Both transforms are involutions: applying one twice restores the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteTransform {
    /// `[A,B,C,D]` → `[D,C,B,A]`
    WordSwap,
    /// `[A,B]` → `[B,A]`
    HalfwordSwap,
}

impl ByteTransform {
    pub fn apply(self, data: &mut [u8]) {
        match self {
            ByteTransform::WordSwap => word_swap(data),
            ByteTransform::HalfwordSwap => halfword_swap(data),
        }
    }
}

/// Magic bytes for each N64 format.
pub const MAGIC_Z64: [u8; 4] = [0x80, 0x37, 0x12, 0x40];
pub const MAGIC_V64: [u8; 4] = [0x37, 0x80, 0x40, 0x12];
pub const MAGIC_N64: [u8; 4] = [0x40, 0x12, 0x37, 0x80];

/// Detect the byte-order format from the first 4 bytes of a ROM.
///
/// Matching is deliberately loose (two bytes per layout, then a lone 0x80
/// lead byte still counts as big-endian) so lightly damaged or homebrew
/// headers keep parsing. Fewer than 4 bytes yields `Unknown`.
pub fn detect_format(magic: &[u8]) -> RomFormat {
    let &[b0, b1, _, b3, ..] = magic else {
        return RomFormat::Unknown;
    };

    if b0 == 0x80 && b1 == 0x37 {
        RomFormat::Z64
    } else if b0 == 0x40 && b3 == 0x80 {
        RomFormat::N64
    } else if b0 == 0x37 && b1 == 0x80 {
        RomFormat::V64
    } else if b0 == 0x80 {
        RomFormat::Z64
    } else {
        RomFormat::Unknown
    }
}

/// Reverse every aligned 4-byte group in place. A trailing partial group is left alone.
pub fn word_swap(data: &mut [u8]) {
    for chunk in data.chunks_exact_mut(4) {
        chunk.reverse();
    }
}

/// Swap every aligned byte pair in place. A trailing odd byte is left alone.
pub fn halfword_swap(data: &mut [u8]) {
    for pair in data.chunks_exact_mut(2) {
        pair.swap(0, 1);
    }
}

#[cfg(test)]
#[path = "tests/byteorder_tests.rs"]
mod tests;
