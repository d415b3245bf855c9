// SPDX-License-Identifier: MPL-2.0
//! Display formatting for camera metadata.
//!
//! [`format_value`] turns one raw metadata value into the string shown in the
//! detail panel. It is total: every input shape, including missing data,
//! produces a printable string and no branch can panic.
//!
//! Key lookup precedence (flat key first, then the namespace sub-record) is
//! expressed as an ordered list of accessors so the rule is testable on its
//! own rather than buried in call sites.

use super::{MetadataRecord, MetadataValue, EXIF_NAMESPACE, TIFF_NAMESPACE};
use crate::gallery::Photo;

/// Placeholder for missing or unresolvable data.
pub const MISSING: &str = "N/A";

/// A resolved `(label, display string)` pair ready for rendering.
///
/// The display string is always present; consumers never need a null check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedField {
    pub label: &'static str,
    pub value: String,
}

/// One displayed metadata field: its panel label, record key, and the
/// namespace sub-record consulted when the flat key is absent.
struct FieldSpec {
    label: &'static str,
    key: &'static str,
    namespace: &'static str,
}

const DISPLAY_FIELDS: [FieldSpec; 8] = [
    FieldSpec {
        label: "Camera Make",
        key: "Make",
        namespace: TIFF_NAMESPACE,
    },
    FieldSpec {
        label: "Camera Model",
        key: "Model",
        namespace: TIFF_NAMESPACE,
    },
    FieldSpec {
        label: "Lens Model",
        key: "LensModel",
        namespace: EXIF_NAMESPACE,
    },
    FieldSpec {
        label: "Aperture",
        key: "FNumber",
        namespace: EXIF_NAMESPACE,
    },
    FieldSpec {
        label: "Shutter Speed",
        key: "ExposureTime",
        namespace: EXIF_NAMESPACE,
    },
    FieldSpec {
        label: "ISO",
        key: "ISOSpeedRatings",
        namespace: EXIF_NAMESPACE,
    },
    FieldSpec {
        label: "Focal Length",
        key: "FocalLength",
        namespace: EXIF_NAMESPACE,
    },
    FieldSpec {
        label: "Date Taken",
        key: "DateTimeOriginal",
        namespace: EXIF_NAMESPACE,
    },
];

/// Looks up `key` through the ordered accessor list: the flat top-level key
/// wins, then the namespace sub-record. First defined value is returned.
fn resolve<'a>(
    record: &'a MetadataRecord,
    key: &str,
    namespace: &str,
) -> Option<&'a MetadataValue> {
    let accessors: [&dyn Fn(&'a MetadataRecord) -> Option<&'a MetadataValue>; 2] = [
        &|r| r.get(key),
        &|r| r.namespace(namespace).and_then(|ns| ns.get(key)),
    ];

    accessors.iter().find_map(|lookup| lookup(record))
}

/// Formats a raw metadata value for display.
///
/// Missing data renders as `"N/A"`. Key-specific rules are tried first, in
/// priority order; anything else degrades to its plain or serialized form.
#[must_use]
pub fn format_value(key: &str, value: Option<&MetadataValue>) -> String {
    let Some(value) = value else {
        return MISSING.to_string();
    };

    match (key, value) {
        ("FNumber", v) => format!("f/{v}"),
        ("ExposureTime", MetadataValue::Number(secs)) => {
            if *secs < 1.0 {
                format!("1/{}s", (1.0 / secs).round())
            } else {
                format!("{secs}s")
            }
        }
        ("ISOSpeedRatings", MetadataValue::List(items)) => items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", "),
        ("FocalLengthIn35mmFilm", v) => format!("{v}mm (35mm equiv.)"),
        ("FocalLength", v) => format!("{v}mm"),
        (_, MetadataValue::Record(_) | MetadataValue::List(_)) => value.serialized(),
        (_, v) => v.to_string(),
    }
}

/// Renders pixel dimensions from the photo entity, which carries them
/// outside the metadata record.
#[must_use]
pub fn format_dimensions(width: Option<u32>, height: Option<u32>) -> String {
    match (width, height) {
        (Some(w), Some(h)) => format!("{w} x {h}"),
        _ => MISSING.to_string(),
    }
}

/// Resolves and formats every displayed field for one photo.
///
/// Recomputed on each render; the record is read-only and never cached.
#[must_use]
pub fn formatted_fields(photo: &Photo) -> Vec<FormattedField> {
    let mut fields: Vec<FormattedField> = DISPLAY_FIELDS
        .iter()
        .map(|spec| FormattedField {
            label: spec.label,
            value: format_value(
                spec.key,
                resolve(&photo.metadata, spec.key, spec.namespace),
            ),
        })
        .collect();

    fields.push(FormattedField {
        label: "Dimensions",
        value: format_dimensions(photo.width, photo.height),
    });

    fields
}
