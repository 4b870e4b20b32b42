use super::*;
use std::io::Write;

use romlens_core::VideoStandard;
use romlens_n64::CicSource;

/// Synthetic z64 ROM: 4 KiB header + boot code, padded to `size`.
fn make_rom(size: usize, country: u8) -> Vec<u8> {
    let mut rom = vec![0u8; size];
    rom[0..4].copy_from_slice(&[0x80, 0x37, 0x12, 0x40]);
    rom[0x08..0x0C].copy_from_slice(&0x80000480u32.to_be_bytes());
    rom[0x10..0x14].copy_from_slice(&0xA03CF036u32.to_be_bytes());
    rom[0x14..0x18].copy_from_slice(&0x6A5C7D2Bu32.to_be_bytes());
    rom[0x20..0x34].copy_from_slice(b"BANJO-KAZOOIE       ");
    rom[0x3B] = b'N';
    rom[0x3C] = b'B';
    rom[0x3D] = b'K';
    rom[0x3E] = country;
    rom
}

fn write_file(dir: &tempfile::TempDir, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = File::create(&path).unwrap();
    file.write_all(data).unwrap();
    path
}

#[test]
fn test_parse_valid_rom() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "banjo.z64", &make_rom(0x2000, b'P'));

    let info = parse_rom(&path);
    assert!(info.valid);
    assert_eq!(info.format, RomFormat::Z64);
    assert_eq!(info.size_bytes, 0x2000);
    assert_eq!(info.header.internal_name, "BANJO-KAZOOIE");
    assert_eq!(info.header.crc1, 0xA03CF036);
    assert_eq!(info.region.region, "PAL");
    assert_eq!(info.region.video, VideoStandard::Pal);
    assert_eq!(info.cic_chip(), CicChip::Cic6103);
    assert_eq!(info.cic.source, CicSource::EntryPoint);
    assert_eq!(info.save_type, SaveType::Eeprom);
    assert_eq!(info.digest.len(), 16);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let info = parse_rom(&dir.path().join("nope.z64"));
    assert!(!info.valid);
    assert_eq!(info.region.region, "Unknown");
    assert_eq!(info.cic_chip(), CicChip::Unknown);
    assert_eq!(info.save_type, SaveType::Unknown);
    assert!(info.digest.is_empty());
}

#[test]
fn test_zero_byte_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "empty.z64", &[]);
    let info = parse_rom(&path);
    assert!(!info.valid);
    assert_eq!(info.size_bytes, 0);
}

#[test]
fn test_truncated_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "short.n64", &make_rom(0x40, b'E')[..40]);
    let info = parse_rom(&path);
    assert!(!info.valid);
    assert_eq!(info.size_bytes, 40);
    assert_eq!(info.format, RomFormat::Unknown);
}

#[test]
fn test_directory_is_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let info = parse_rom(dir.path());
    assert!(!info.valid);
}

#[test]
fn test_header_only_rom_is_valid_without_cic() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "tiny.z64", &make_rom(0x100, b'E'));
    let info = parse_rom(&path);
    assert!(info.valid);
    assert_eq!(info.cic_chip(), CicChip::Unknown);
    assert_eq!(info.region.region, "NTSC-U");
}

#[test]
fn test_same_bytes_same_digest() {
    let dir = tempfile::tempdir().unwrap();
    let rom = make_rom(0x2000, b'E');
    let a = parse_rom(&write_file(&dir, "a.z64", &rom));
    let b = parse_rom(&write_file(&dir, "copy.v64", &rom));
    assert!(a.same_content(&b));
    assert_ne!(a, b);
}

#[test]
fn test_invalid_never_same_content() {
    let a = RomInfo::invalid("a.z64", 0);
    let b = RomInfo::invalid("b.z64", 0);
    assert!(!a.same_content(&b));
}

#[test]
fn test_display_helpers() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "banjo.z64", &make_rom(8 * 1024 * 1024, b'E'));
    let info = parse_rom(&path);
    assert_eq!(info.display_name(), "BANJO-KAZOOIE");
    assert_eq!(info.region_display(), "🇺🇸 NTSC-U");
    assert_eq!(info.video_info(), "NTSC 60Hz");
    assert_eq!(info.size_display(), "8.0 MB (64Mbit)");
    assert_eq!(info.size_mbits(), 64);
    assert_eq!(info.save_type, SaveType::Sram);
}

#[test]
fn test_display_name_falls_back_to_stem() {
    let info = RomInfo::invalid("/roms/Mystery Cart.v64", 0);
    assert_eq!(info.display_name(), "Mystery Cart");
    assert_eq!(info.file_name(), "Mystery Cart.v64");
}

#[test]
fn test_detail_summary() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "banjo.z64", &make_rom(0x2000, b'E'));
    let text = parse_rom(&path).to_string();
    assert!(text.starts_with("N64 ROM: BANJO-KAZOOIE"));
    assert!(text.contains("CRC: A03CF036 6A5C7D2B"));
    assert!(text.contains("Cart ID: NBK"));
    assert!(text.contains("CIC: CIC-6103"));
}
