// SPDX-License-Identifier: MPL-2.0
use photo_deck::config::{self, Config, DEFAULT_THUMBNAILS_PER_ROW};
use photo_deck::gallery::{import, PhotoLibrary};
use photo_deck::metadata::{format_value, formatted_fields, MetadataValue};
use std::fs::File;
use std::io::Write;
use tempfile::tempdir;

#[test]
fn test_thumbnail_columns_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let initial_config = Config {
        thumbnails_per_row: Some(DEFAULT_THUMBNAILS_PER_ROW),
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    assert_eq!(loaded.thumbnails_per_row, Some(DEFAULT_THUMBNAILS_PER_ROW));

    let wider_config = Config {
        thumbnails_per_row: Some(4),
    };
    config::save_to_path(&wider_config, &temp_config_file_path)
        .expect("Failed to write modified config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load modified config from path");
    assert_eq!(loaded.thumbnails_per_row, Some(4));

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_directory_import_populates_library() {
    let dir = tempdir().expect("Failed to create temporary directory");
    for name in ["b.jpg", "a.jpg", "notes.txt"] {
        let mut file = File::create(dir.path().join(name)).expect("create file");
        writeln!(file, "stub data").expect("write");
    }

    let photos = import::import_paths(
        import::scan_directory(dir.path()).expect("scan directory"),
    );
    assert_eq!(photos.len(), 2);

    let mut library = PhotoLibrary::new();
    library.extend(photos);
    assert_eq!(library.len(), 2);

    // Stub files carry no decodable metadata; every photo still formats.
    let first = library.get(0).expect("first photo");
    assert!(first.has_source());
    for field in formatted_fields(first) {
        assert_eq!(field.value, "N/A");
    }
}

#[test]
fn test_formatter_matches_camera_notation() {
    assert_eq!(
        format_value("FNumber", Some(&MetadataValue::Number(2.8))),
        "f/2.8"
    );
    assert_eq!(
        format_value("ExposureTime", Some(&MetadataValue::Number(0.005))),
        "1/200s"
    );
    assert_eq!(
        format_value(
            "ISOSpeedRatings",
            Some(&MetadataValue::List(vec![
                MetadataValue::Number(100.0),
                MetadataValue::Number(200.0),
            ]))
        ),
        "100, 200"
    );
    assert_eq!(
        format_value("FocalLengthIn35mmFilm", Some(&MetadataValue::Number(50.0))),
        "50mm (35mm equiv.)"
    );
    assert_eq!(format_value("DateTimeOriginal", None), "N/A");
}
