//! Attaching local photos to a training entry.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::PickerError;
use crate::models::PhotoRef;

const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "heic", "webp"];

/// Source of local image references (the device media library)
pub trait MediaLibrary {
    fn pick(&mut self, requested: &[PathBuf]) -> Result<Vec<PhotoRef>, PickerError>;
}

/// Media library over the local filesystem: accepts existing image files only
#[derive(Debug, Default)]
pub struct FilesystemLibrary;

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
}

impl MediaLibrary for FilesystemLibrary {
    fn pick(&mut self, requested: &[PathBuf]) -> Result<Vec<PhotoRef>, PickerError> {
        requested
            .iter()
            .map(|path| {
                if !path.is_file() {
                    warn!(path = %path.display(), "photo not found");
                    return Err(PickerError::NotFound(path.clone()));
                }
                if !is_image(path) {
                    warn!(path = %path.display(), "rejected non-image photo");
                    return Err(PickerError::UnsupportedType(path.clone()));
                }
                Ok(PhotoRef(path.clone()))
            })
            .collect()
    }
}

/// Split a comma-separated list of paths as typed into the entry form
pub fn parse_photo_list(input: &str) -> Vec<PathBuf> {
    input.split(',').map(str::trim).filter(|s| !s.is_empty()).map(PathBuf::from).collect()
}
