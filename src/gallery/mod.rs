// SPDX-License-Identifier: MPL-2.0
//! Photo entities and the in-memory gallery they live in.
//!
//! The gallery is session-scoped: photos are imported through the picker or
//! a startup directory scan and forgotten when the application exits.

pub mod import;

use crate::metadata::MetadataRecord;
use std::path::PathBuf;

/// One photo as consumed by the detail view.
///
/// `uri` is treated as opaque by the viewer; an empty path marks a photo
/// whose source is missing, which the detail view surfaces as an error
/// display rather than a crash.
#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    pub id: String,
    pub uri: PathBuf,
    pub metadata: MetadataRecord,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl Photo {
    /// Builds a photo from a source path with empty metadata.
    #[must_use]
    pub fn from_path(path: PathBuf) -> Self {
        Self {
            id: path.to_string_lossy().into_owned(),
            uri: path,
            metadata: MetadataRecord::new(),
            width: None,
            height: None,
        }
    }

    /// Whether the photo has a usable source file reference.
    #[must_use]
    pub fn has_source(&self) -> bool {
        !self.uri.as_os_str().is_empty()
    }
}

/// The photos currently in the gallery, in import order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhotoLibrary {
    photos: Vec<Photo>,
}

impl PhotoLibrary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Photo> {
        self.photos.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Photo> {
        self.photos.iter()
    }

    /// Appends newly imported photos, keeping earlier imports in place.
    pub fn extend(&mut self, photos: Vec<Photo>) {
        self.photos.extend(photos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_from_path_derives_id_from_uri() {
        let photo = Photo::from_path(PathBuf::from("/photos/cat.jpg"));
        assert_eq!(photo.id, "/photos/cat.jpg");
        assert!(photo.has_source());
        assert!(photo.metadata.is_empty());
        assert!(photo.width.is_none());
    }

    #[test]
    fn empty_uri_marks_missing_source() {
        let photo = Photo::from_path(PathBuf::new());
        assert!(!photo.has_source());
    }

    #[test]
    fn library_extends_in_order() {
        let mut library = PhotoLibrary::new();
        assert!(library.is_empty());

        library.extend(vec![
            Photo::from_path(PathBuf::from("/a.jpg")),
            Photo::from_path(PathBuf::from("/b.jpg")),
        ]);
        library.extend(vec![Photo::from_path(PathBuf::from("/c.jpg"))]);

        assert_eq!(library.len(), 3);
        assert_eq!(library.get(0).map(|p| p.id.as_str()), Some("/a.jpg"));
        assert_eq!(library.get(2).map(|p| p.id.as_str()), Some("/c.jpg"));
        assert!(library.get(3).is_none());
    }
}
