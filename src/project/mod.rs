//! Keil uVision project files (`.uvprojx`)

mod document;

pub use document::{ProjectDocument, FILE_PATH_TAG, INCLUDE_PATH_TAG};
