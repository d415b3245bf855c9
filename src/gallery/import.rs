// SPDX-License-Identifier: MPL-2.0
//! Photo import pipeline: file selection, directory scanning, and per-file
//! extraction of pixel dimensions and EXIF metadata.
//!
//! Import is best-effort per file. A photo that cannot be decoded still joins
//! the gallery with empty metadata; only an unreadable directory is an error.

use super::Photo;
use crate::error::{Error, Result};
use crate::metadata::{MetadataRecord, MetadataValue, EXIF_NAMESPACE, TIFF_NAMESPACE};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

const SUPPORTED_EXTENSIONS: [&str; 8] =
    ["jpg", "jpeg", "png", "gif", "webp", "bmp", "tiff", "tif"];

/// Returns true if the path's extension is a supported image format.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Scans a directory (non-recursively) for supported images, sorted by name.
pub fn scan_directory(directory: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_supported_image(&path) {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}

/// Opens the native multi-select picker and imports the chosen files.
///
/// A cancelled dialog yields an empty batch.
pub async fn pick_photos() -> Vec<Photo> {
    let picked = rfd::AsyncFileDialog::new()
        .set_title("Add Photos")
        .add_filter("Images", &SUPPORTED_EXTENSIONS)
        .pick_files()
        .await;

    match picked {
        Some(handles) => {
            import_paths(handles.iter().map(|h| h.path().to_path_buf()).collect())
        }
        None => Vec::new(),
    }
}

/// Imports every supported image found in `directory`.
pub async fn import_directory(directory: PathBuf) -> Vec<Photo> {
    match scan_directory(&directory) {
        Ok(paths) => import_paths(paths),
        Err(error) => {
            eprintln!(
                "Failed to scan directory {}: {}",
                directory.display(),
                error
            );
            Vec::new()
        }
    }
}

/// Builds photo entities for each path in order.
#[must_use]
pub fn import_paths(paths: Vec<PathBuf>) -> Vec<Photo> {
    paths.into_iter().map(|path| read_photo(path)).collect()
}

/// Reads dimensions and EXIF data for a single photo.
///
/// Never fails: a file that cannot be decoded keeps `None` dimensions and an
/// empty metadata record, so the detail view degrades to `"N/A"` fields.
#[must_use]
pub fn read_photo(path: PathBuf) -> Photo {
    let mut photo = Photo::from_path(path);

    match image_rs::image_dimensions(&photo.uri) {
        Ok((width, height)) => {
            photo.width = Some(width);
            photo.height = Some(height);
        }
        Err(error) => {
            eprintln!(
                "Could not read dimensions of {}: {}",
                photo.uri.display(),
                Error::from(error)
            );
        }
    }

    photo.metadata = read_metadata_record(&photo.uri);
    photo
}

/// Extracts the EXIF fields shown by the detail panel into a
/// [`MetadataRecord`], grouped the way camera files lay them out: primary-IFD
/// fields under `"TIFF"`, Exif-IFD fields under `"Exif"`.
#[must_use]
pub fn read_metadata_record(path: &Path) -> MetadataRecord {
    let mut record = MetadataRecord::new();

    let Ok(file) = File::open(path) else {
        return record;
    };
    let mut reader = BufReader::new(file);

    let Ok(exif) = exif::Reader::new().read_from_container(&mut reader) else {
        return record;
    };

    let mut tiff = MetadataRecord::new();
    if let Some(value) = text_field(&exif, exif::Tag::Make) {
        tiff.insert("Make", value);
    }
    if let Some(value) = text_field(&exif, exif::Tag::Model) {
        tiff.insert("Model", value);
    }

    let mut exif_ns = MetadataRecord::new();
    if let Some(value) = text_field(&exif, exif::Tag::LensModel) {
        exif_ns.insert("LensModel", value);
    }
    if let Some(value) = number_field(&exif, exif::Tag::FNumber) {
        exif_ns.insert("FNumber", value);
    }
    if let Some(value) = number_field(&exif, exif::Tag::ExposureTime) {
        exif_ns.insert("ExposureTime", value);
    }
    if let Some(value) = list_field(&exif, exif::Tag::PhotographicSensitivity) {
        exif_ns.insert("ISOSpeedRatings", value);
    }
    if let Some(value) = number_field(&exif, exif::Tag::FocalLength) {
        exif_ns.insert("FocalLength", value);
    }
    if let Some(value) = number_field(&exif, exif::Tag::FocalLengthIn35mmFilm) {
        exif_ns.insert("FocalLengthIn35mmFilm", value);
    }
    if let Some(value) = text_field(&exif, exif::Tag::DateTimeOriginal) {
        exif_ns.insert("DateTimeOriginal", value);
    }

    if !tiff.is_empty() {
        record.insert(TIFF_NAMESPACE, MetadataValue::Record(tiff));
    }
    if !exif_ns.is_empty() {
        record.insert(EXIF_NAMESPACE, MetadataValue::Record(exif_ns));
    }

    record
}

fn text_field(exif: &exif::Exif, tag: exif::Tag) -> Option<MetadataValue> {
    exif.get_field(tag, exif::In::PRIMARY).map(|field| {
        MetadataValue::Text(
            field
                .display_value()
                .to_string()
                .trim_matches('"')
                .to_string(),
        )
    })
}

fn number_field(exif: &exif::Exif, tag: exif::Tag) -> Option<MetadataValue> {
    exif.get_field(tag, exif::In::PRIMARY)
        .and_then(|field| first_number(&field.value))
        .map(MetadataValue::Number)
}

fn list_field(exif: &exif::Exif, tag: exif::Tag) -> Option<MetadataValue> {
    exif.get_field(tag, exif::In::PRIMARY).and_then(|field| {
        let numbers = all_numbers(&field.value);
        if numbers.is_empty() {
            None
        } else {
            Some(MetadataValue::List(
                numbers.into_iter().map(MetadataValue::Number).collect(),
            ))
        }
    })
}

fn first_number(value: &exif::Value) -> Option<f64> {
    all_numbers(value).into_iter().next()
}

fn all_numbers(value: &exif::Value) -> Vec<f64> {
    match value {
        exif::Value::Byte(v) => v.iter().map(|n| f64::from(*n)).collect(),
        exif::Value::Short(v) => v.iter().map(|n| f64::from(*n)).collect(),
        exif::Value::Long(v) => v.iter().map(|n| f64::from(*n)).collect(),
        exif::Value::Rational(v) => v.iter().map(|r| r.to_f64()).collect(),
        exif::Value::SByte(v) => v.iter().map(|n| f64::from(*n)).collect(),
        exif::Value::SShort(v) => v.iter().map(|n| f64::from(*n)).collect(),
        exif::Value::SLong(v) => v.iter().map(|n| f64::from(*n)).collect(),
        exif::Value::SRational(v) => v.iter().map(|r| r.to_f64()).collect(),
        exif::Value::Float(v) => v.iter().map(|n| f64::from(*n)).collect(),
        exif::Value::Double(v) => v.clone(),
        _ => Vec::new(),
    }
}
