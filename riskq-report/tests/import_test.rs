use riskq_core::errors::{ErrorCode, ExportError};
use riskq_report::ImportedFile;
use test_fixtures::{fixture_path, Panel};

#[test]
fn reads_name_and_bytes() {
    let file = ImportedFile::read(fixture_path("flooding_panel.json")).unwrap();
    assert_eq!(file.name, "flooding_panel.json");
    assert!(!file.is_empty());
    assert!(file.text().unwrap().contains("rf-flood"));

    let panel: Panel = file.parse_json().unwrap();
    assert_eq!(panel.risk_file.id, "rf-flood");
    assert_eq!(panel.direct.len(), 3);
}

#[test]
fn missing_file_is_a_read_error() {
    let err = ImportedFile::read(fixture_path("does_not_exist.json")).unwrap_err();
    assert!(matches!(err, ExportError::Read { .. }));
    assert_eq!(err.error_code(), "EXPORT_ERROR");
}

#[test]
fn malformed_content_is_a_parse_error() {
    let file = ImportedFile::from_bytes("notes.json", b"{ not json".to_vec());
    let err = file.parse_json::<serde_json::Value>().unwrap_err();
    match err {
        ExportError::Parse { name, .. } => assert_eq!(name, "notes.json"),
        other => panic!("unexpected {other:?}"),
    }

    let binary = ImportedFile::from_bytes("blob.bin", vec![0xff, 0xfe, 0x00]);
    assert!(binary.text().is_err());
}

#[test]
fn checksum_depends_only_on_content() {
    let a = ImportedFile::from_bytes("a.csv", b"id,title\n".to_vec());
    let b = ImportedFile::from_bytes("b.csv", b"id,title\n".to_vec());
    let c = ImportedFile::from_bytes("a.csv", b"id,name\n".to_vec());
    assert_eq!(a.checksum(), b.checksum());
    assert_ne!(a.checksum(), c.checksum());
    assert_eq!(a.len(), 9);
}
