use super::*;

fn parse(text: &str) -> toml::Value {
    text.parse().unwrap()
}

#[test]
fn test_settings_path_location() {
    let path = settings_path();
    assert!(path.ends_with("romlens/settings.toml"));
}

#[test]
fn test_rom_dir_from_toml() {
    let doc = parse("[library]\nrom_dir = \"/roms/n64\"\n");
    assert_eq!(rom_dir_from_toml(&doc), Some(PathBuf::from("/roms/n64")));

    let empty = parse("[library]\nrom_dir = \"\"\n");
    assert_eq!(rom_dir_from_toml(&empty), None);

    let missing = parse("[scan]\njobs = 2\n");
    assert_eq!(rom_dir_from_toml(&missing), None);
}

#[test]
fn test_scan_jobs_from_toml() {
    assert_eq!(scan_jobs_from_toml(&parse("[scan]\njobs = 3\n")), Some(3));
    assert_eq!(scan_jobs_from_toml(&parse("[scan]\njobs = 0\n")), None);
    assert_eq!(scan_jobs_from_toml(&parse("[scan]\njobs = -2\n")), None);
    assert_eq!(scan_jobs_from_toml(&parse("[scan]\njobs = \"four\"\n")), None);
}

#[test]
fn test_resolve_rom_dir_priority() {
    let doc = parse("[library]\nrom_dir = \"/from/settings\"\n");

    let cli = resolve_rom_dir_with(Some(PathBuf::from("/from/cli")), Some(&doc));
    assert_eq!(cli, PathBuf::from("/from/cli"));

    let saved = resolve_rom_dir_with(None, Some(&doc));
    assert_eq!(saved, PathBuf::from("/from/settings"));

    let cwd = resolve_rom_dir_with(None, None);
    assert_eq!(cwd, std::env::current_dir().unwrap());
}

#[test]
fn test_resolve_jobs_priority() {
    let doc = parse("[scan]\njobs = 6\n");
    assert_eq!(resolve_jobs_with(Some(2), Some(&doc)), 2);
    assert_eq!(resolve_jobs_with(Some(0), Some(&doc)), 6);
    assert_eq!(resolve_jobs_with(None, Some(&doc)), 6);
    assert!(resolve_jobs_with(None, None) >= 1);
}

#[test]
fn test_update_document_preserves_other_keys() {
    let mut doc = parse("[library]\nrom_dir = \"/old\"\nextra = true\n\n[other]\nkey = 1\n");

    update_document(
        &mut doc,
        "library",
        "rom_dir",
        Some(toml::Value::String("/new".into())),
    )
    .unwrap();
    assert_eq!(rom_dir_from_toml(&doc), Some(PathBuf::from("/new")));
    assert_eq!(doc["library"]["extra"].as_bool(), Some(true));
    assert_eq!(doc["other"]["key"].as_integer(), Some(1));

    update_document(&mut doc, "library", "rom_dir", None).unwrap();
    assert_eq!(rom_dir_from_toml(&doc), None);
}

#[test]
fn test_update_document_creates_section() {
    let mut doc = toml::Value::Table(Default::default());
    update_document(&mut doc, "scan", "jobs", Some(toml::Value::Integer(8))).unwrap();
    assert_eq!(scan_jobs_from_toml(&doc), Some(8));
}

#[test]
fn test_update_document_rejects_non_table_section() {
    let mut doc = parse("library = \"oops\"\n");
    let result = update_document(&mut doc, "library", "rom_dir", None);
    assert!(result.is_err());
}

#[test]
fn test_document_for_update_keeps_valid_file() {
    let path = Path::new("settings.toml");
    let doc = document_for_update("[scan]\njobs = 4\n\n[other]\nkey = 1\n", path);
    assert_eq!(scan_jobs_from_toml(&doc), Some(4));
    assert_eq!(doc["other"]["key"].as_integer(), Some(1));
}

#[test]
fn test_document_for_update_replaces_broken_file() {
    let doc = document_for_update("[library\nrom_dir = ", Path::new("settings.toml"));
    assert!(doc.as_table().is_some_and(|t| t.is_empty()));

    let mut doc = doc;
    update_document(&mut doc, "scan", "jobs", Some(toml::Value::Integer(2))).unwrap();
    assert_eq!(scan_jobs_from_toml(&doc), Some(2));
}
