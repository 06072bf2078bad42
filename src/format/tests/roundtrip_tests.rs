//! Export→import round-trip tests.

use crate::format::CsvOptions;
use crate::model::ColorId;
use crate::registry::ColorRegistry;

fn create_catalog() -> ColorRegistry {
    let mut registry = ColorRegistry::new();
    registry.add_new_color("Cadmium Red", "PR108", 227, 0, 34);
    registry.add_new_color("", "", 0, 0, 0);
    registry.add_new_color("Ultramarine", "PB29", 18, 10, 143);
    registry.add_new_color("Titanium White", "PW6", 255, 255, 255);
    registry
}

#[test]
fn test_roundtrip_preserves_records_and_order() {
    let original = create_catalog();
    let text = original.export_as_csv();

    let mut restored = ColorRegistry::new();
    restored.add_new_color("to be replaced", "", 1, 2, 3);
    let report = restored.load_from_csv_content(&text).unwrap();

    assert!(report.is_clean());
    assert_eq!(report.imported, original.len());
    assert_eq!(restored.all_ids(), original.all_ids());
    assert_eq!(restored.records(), original.records());
}

#[test]
fn test_roundtrip_with_custom_delimiter() {
    let original = create_catalog();
    let options = CsvOptions::new().delimiter('\t');
    let text = original.export_csv(&options).unwrap();
    assert!(!text.contains(';'));

    let mut restored = ColorRegistry::new();
    restored.load_from_csv(&text, &options).unwrap();

    assert_eq!(restored.records(), original.records());
}

#[test]
fn test_unsafe_delimiter_does_not_empty_catalog() {
    let original = create_catalog();

    for delimiter in ['-', 'a', 'F', '1'] {
        let options = CsvOptions::new().delimiter(delimiter);
        assert!(original.export_csv(&options).is_err(), "{delimiter:?}");

        let mut restored = create_catalog();
        let text = original.export_as_csv();
        assert!(restored.load_from_csv(&text, &options).is_err());
        assert_eq!(restored.len(), original.len());
    }
}

#[test]
fn test_export_shape() {
    let registry = create_catalog();
    let text = registry.export_as_csv();

    assert!(text.ends_with('\n'));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    for (line, id) in lines.iter().zip(registry.all_ids()) {
        let fields: Vec<&str> = line.split(';').collect();
        assert_eq!(fields.len(), 6);
        assert_eq!(fields[0], id.to_string());
    }
    assert!(lines[1].ends_with(";;;0;0;0"));
}

#[test]
fn test_export_keeps_out_of_range_channels() {
    let mut registry = ColorRegistry::new();
    let id = registry.add_new_color("hot", "H", 999, 0, 0);

    assert_eq!(registry.export_as_csv(), format!("{id};hot;H;999;0;0\n"));
}

#[test]
fn test_delimiter_in_name_does_not_round_trip() {
    let mut registry = ColorRegistry::new();
    registry.add_new_color("a;b", "", 1, 2, 3);

    let text = registry.export_as_csv();
    let mut restored = ColorRegistry::new();
    let report = restored.load_from_csv_content(&text).unwrap();

    assert_eq!(report.imported, 0);
    assert_eq!(report.skipped_lines, 1);
}

#[test]
fn test_roundtrip_after_edits() {
    let mut registry = create_catalog();
    let ids = registry.all_ids();
    registry.set_name(&ids[1], "Ivory Black");
    registry.set_code(&ids[1], "PBk9");
    registry.remove(&ids[0]);

    let mut restored = ColorRegistry::new();
    restored
        .load_from_csv_content(&registry.export_as_csv())
        .unwrap();

    assert_eq!(restored.len(), 3);
    let edited = restored.get_copy(&ids[1]).unwrap();
    assert_eq!(edited.name, "Ivory Black");
    assert_eq!(edited.code, "PBk9");
    assert!(restored.get_copy(&ids[0]).is_none());
    assert!(!restored.contains(&ColorId::new()));
}
