use super::*;

#[test]
fn test_table_sorted_and_unique() {
    for pair in COUNTRY_TABLE.windows(2) {
        assert!(
            pair[0].code < pair[1].code,
            "table out of order at 0x{:02X}",
            pair[1].code
        );
    }
    assert_eq!(COUNTRY_TABLE.len(), 21);
}

#[test]
fn test_usa() {
    let info = classify_region(0x45);
    assert_eq!(info.region, "NTSC-U");
    assert_eq!(info.country, "USA");
    assert_eq!(info.video, VideoStandard::Ntsc);
    assert_eq!(info.refresh_hz, 60);
    assert!(!info.is_pal());
}

#[test]
fn test_germany_pal() {
    let info = classify_region(b'D');
    assert_eq!(info.region, "PAL-G");
    assert_eq!(info.country, "Germany");
    assert_eq!(info.video, VideoStandard::Pal);
    assert_eq!(info.refresh_hz, 50);
    assert!(info.is_pal());
}

#[test]
fn test_japan_variants() {
    assert_eq!(classify_region(b'J').country, "Japan");
    assert_eq!(classify_region(b'A').country, "Japan/Asia");
    assert_eq!(classify_region(b'J').region, "NTSC-J");
}

#[test]
fn test_demo_code() {
    let info = classify_region(0x00);
    assert_eq!(info.region, "Demo");
    assert_eq!(info.video, VideoStandard::Ntsc);
}

#[test]
fn test_unknown_code_fallback() {
    let info = classify_region(0xEE);
    assert_eq!(info.code, 0xEE);
    assert_eq!(info.region, "0xEE");
    assert_eq!(info.country, "Unknown");
    assert_eq!(info.video, VideoStandard::Ntsc);
    assert_eq!(info.refresh_hz, 60);
}

#[test]
fn test_fallback_hex_is_uppercase_two_digits() {
    assert_eq!(classify_region(0x0A).region, "0x0A");
}

#[test]
fn test_every_code_classifies() {
    for code in 0..=u8::MAX {
        let info = classify_region(code);
        assert_eq!(info.code, code);
        assert_eq!(info.refresh_hz, info.video.refresh_hz());
        match lookup_country(code) {
            Some(entry) => assert_eq!(info.region, entry.region),
            None => {
                assert_eq!(info.video, VideoStandard::Ntsc);
                assert_eq!(info.refresh_hz, 60);
            }
        }
    }
}

#[test]
fn test_pal_entries_are_50hz() {
    for entry in COUNTRY_TABLE {
        let info = RegionInfo::from(entry);
        let expected = if entry.region.starts_with("PAL") { 50 } else { 60 };
        assert_eq!(info.refresh_hz, expected, "code 0x{:02X}", entry.code);
    }
}

#[test]
fn test_default_is_unknown_ntsc() {
    let info = RegionInfo::default();
    assert_eq!(info.region, "Unknown");
    assert_eq!(info.country, "Unknown");
    assert_eq!(info.refresh_hz, 60);
}
