//! ROM library scanning for N64 collections.
//!
//! Turns ROM files on disk into [`RomInfo`] records: one file with
//! [`parse_rom`], a whole folder with the [`scanner`] functions.

pub mod display;
pub mod hasher;
pub mod rom_info;
pub mod scanner;
pub mod settings;
pub mod timing;
pub mod worker_pool;

pub use rom_info::{RomInfo, parse_rom};
pub use scanner::{filter_by_region, scan_rom_dir, scan_roms, scan_roms_parallel};
pub use timing::VideoTiming;
