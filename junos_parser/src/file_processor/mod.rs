//! File ingestion for flat configuration dumps
//!
//! Validates size/encoding limits before any parsing happens and carries
//! file metadata through the rest of the pipeline.

pub mod processor;

pub use processor::{
    process_file, process_file_with_preferences, process_text, FileMetadata, FileProcessingResult,
    FileProcessorError,
};
