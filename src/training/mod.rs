//! Session-only training log and photo attachment.

pub mod photos;
pub mod store;

pub use photos::{FilesystemLibrary, MediaLibrary, parse_photo_list};
pub use store::{InMemoryTrainingLog, TrainingLogStore};
