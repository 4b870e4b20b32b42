//! Nintendo 64 cartridge header analysis.
//!
//! Supports:
//! - Big-endian ROMs (.z64)
//! - Byte-swapped ROMs (.v64)
//! - Little-endian ROMs (.n64)
//!
//! The pipeline is detect → normalize → parse → classify. Region, CIC chip
//! and save type classification are total: every header yields a value.

pub mod analyzer;
pub mod byteorder;
pub mod cic;
pub mod header;
pub mod region;
pub mod save;

pub use analyzer::{FILE_EXTENSIONS, N64Analysis, analyze, analyze_bytes};
pub use byteorder::{ByteTransform, RomFormat, detect_format};
pub use cic::{CicChip, CicDetection, CicSource};
pub use header::{CanonicalImage, RomHeader};
pub use region::{COUNTRY_TABLE, CountryEntry, RegionInfo, classify_region};
pub use save::SaveType;
