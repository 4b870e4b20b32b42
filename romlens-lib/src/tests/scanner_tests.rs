use super::*;

use romlens_n64::classify_region;

fn with_region(code: u8) -> RomInfo {
    let mut info = RomInfo::invalid(format!("rom_{:02x}.z64", code), 0);
    info.region = classify_region(code);
    info
}

#[test]
fn test_extension_set_lowercases() {
    let set = extension_set(&["Z64", "v64"]);
    assert!(set.contains("z64"));
    assert!(set.contains("v64"));
}

#[test]
fn test_has_matching_extension_case_insensitive() {
    let set = extension_set(FILE_EXTENSIONS);
    assert!(has_matching_extension(Path::new("a.Z64"), &set));
    assert!(has_matching_extension(Path::new("b.n64"), &set));
    assert!(has_matching_extension(Path::new("c.V64"), &set));
    assert!(!has_matching_extension(Path::new("d.zip"), &set));
    assert!(!has_matching_extension(Path::new("z64"), &set));
}

#[test]
fn test_scan_rom_dir_filters_and_sorts() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["b.v64", "a.Z64", "notes.txt", "c.n64"] {
        std::fs::write(dir.path().join(name), b"x").unwrap();
    }
    std::fs::create_dir(dir.path().join("sub.z64")).unwrap();

    let files = scan_rom_dir(dir.path()).unwrap();
    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["a.Z64", "b.v64", "c.n64"]);
}

#[test]
fn test_scan_rom_dir_missing_folder() {
    let dir = tempfile::tempdir().unwrap();
    assert!(scan_rom_dir(&dir.path().join("missing")).is_err());
}

#[test]
fn test_region_filter_all() {
    let info = with_region(0x45);
    assert!(matches_region(&info, None));
    assert!(matches_region(&info, Some("")));
    assert!(matches_region(&info, Some("ALL")));
}

#[test]
fn test_region_filter_substring() {
    let germany = with_region(0x44);
    let usa = with_region(0x45);
    assert!(matches_region(&germany, Some("pal")));
    assert!(matches_region(&germany, Some("PAL-G")));
    assert!(!matches_region(&usa, Some("PAL")));
    assert!(matches_region(&usa, Some("ntsc-u")));
}

#[test]
fn test_filter_by_region_keeps_order() {
    let infos = vec![with_region(0x45), with_region(0x50), with_region(0x44)];
    let pal: Vec<u8> = filter_by_region(&infos, Some("PAL"))
        .iter()
        .map(|i| i.region.code)
        .collect();
    assert_eq!(pal, vec![0x50, 0x44]);
}
