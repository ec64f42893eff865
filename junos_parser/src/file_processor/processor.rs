//! File processor implementation with compile-time limits and global logging

use crate::config::constants::compile_time::file_processing::{
    LARGE_FILE_THRESHOLD, MAX_FILE_SIZE, MAX_LINE_COUNT,
};
use crate::config::runtime::FileProcessorPreferences;
use crate::logging::codes;
use crate::{log_debug, log_error, log_success};
use std::fs;
use std::path::{Path, PathBuf};

/// File processor specific errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum FileProcessorError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Unexpected file extension: expected .conf/.cfg, found {extension:?}")]
    InvalidExtension { extension: Option<String> },

    #[error("File too large: {size} bytes (max: {max_size})")]
    FileTooLarge { size: u64, max_size: u64 },

    #[error("File is empty")]
    EmptyFile,

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("Invalid UTF-8 encoding in file: {path}")]
    InvalidEncoding { path: String },

    #[error("I/O error reading file: {message}")]
    IoError { message: String },

    #[error("File exceeds maximum line count: {lines} (max: {max_lines})")]
    TooManyLines { lines: usize, max_lines: usize },
}

impl FileProcessorError {
    /// Get the appropriate error code for this error type
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            FileProcessorError::FileNotFound { .. } => codes::file_processing::FILE_NOT_FOUND,
            FileProcessorError::InvalidExtension { .. } => {
                codes::file_processing::INVALID_EXTENSION
            }
            FileProcessorError::FileTooLarge { .. } => codes::file_processing::FILE_TOO_LARGE,
            FileProcessorError::EmptyFile => codes::file_processing::EMPTY_FILE,
            FileProcessorError::PermissionDenied { .. } => {
                codes::file_processing::PERMISSION_DENIED
            }
            FileProcessorError::InvalidEncoding { .. } => codes::file_processing::INVALID_ENCODING,
            FileProcessorError::IoError { .. } => codes::file_processing::IO_ERROR,
            FileProcessorError::TooManyLines { .. } => codes::file_processing::TOO_MANY_LINES,
        }
    }
}

/// File metadata collected during processing
#[derive(Debug, Clone)]
pub struct FileMetadata {
    /// Canonical file path
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
    /// Line count
    pub line_count: usize,
    /// Whether the file crosses the large-file threshold
    pub is_large: bool,
}

/// Result of file processing: content plus metadata
#[derive(Debug, Clone)]
pub struct FileProcessingResult {
    pub content: String,
    pub metadata: FileMetadata,
}

/// Read and validate a configuration file from disk
pub fn process_file(file_path: &str) -> Result<FileProcessingResult, FileProcessorError> {
    process_file_with_preferences(file_path, &FileProcessorPreferences::default())
}

/// Read and validate a configuration file with explicit preferences
pub fn process_file_with_preferences(
    file_path: &str,
    preferences: &FileProcessorPreferences,
) -> Result<FileProcessingResult, FileProcessorError> {
    let path = Path::new(file_path);

    if !path.exists() {
        let error = FileProcessorError::FileNotFound {
            path: file_path.to_string(),
        };
        log_error!(error.error_code(), "File not found", "path" => file_path);
        return Err(error);
    }

    if preferences.require_conf_extension {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_string);
        if !matches!(extension.as_deref(), Some("conf") | Some("cfg")) {
            let error = FileProcessorError::InvalidExtension { extension };
            log_error!(error.error_code(), "Unexpected file extension", "path" => file_path);
            return Err(error);
        }
    }

    let size = fs::metadata(path)
        .map_err(|e| io_error_for(path, e))?
        .len();

    if size > MAX_FILE_SIZE {
        let error = FileProcessorError::FileTooLarge {
            size,
            max_size: MAX_FILE_SIZE,
        };
        log_error!(error.error_code(), "File exceeds size limit",
            "size" => size,
            "max" => MAX_FILE_SIZE
        );
        return Err(error);
    }

    let bytes = fs::read(path).map_err(|e| io_error_for(path, e))?;

    if bytes.is_empty() {
        let error = FileProcessorError::EmptyFile;
        log_error!(error.error_code(), "File is empty", "path" => file_path);
        return Err(error);
    }

    let content = String::from_utf8(bytes).map_err(|_| {
        let error = FileProcessorError::InvalidEncoding {
            path: file_path.to_string(),
        };
        log_error!(error.error_code(), "File is not valid UTF-8", "path" => file_path);
        error
    })?;

    let line_count = content.lines().count();
    if line_count > MAX_LINE_COUNT {
        let error = FileProcessorError::TooManyLines {
            lines: line_count,
            max_lines: MAX_LINE_COUNT,
        };
        log_error!(error.error_code(), "File exceeds line count limit",
            "lines" => line_count,
            "max" => MAX_LINE_COUNT
        );
        return Err(error);
    }

    let is_large = size > LARGE_FILE_THRESHOLD;
    if is_large {
        log_debug!("Large file detected, reducing per-line diagnostics",
            "size" => size
        );
    }

    if preferences.enable_performance_logging {
        log_success!(codes::success::FILE_PROCESSING_SUCCESS,
            "Configuration file loaded",
            "path" => file_path,
            "size_bytes" => size,
            "lines" => line_count
        );
    }

    Ok(FileProcessingResult {
        content,
        metadata: FileMetadata {
            path: path.to_path_buf(),
            size,
            line_count,
            is_large,
        },
    })
}

fn io_error_for(path: &Path, err: std::io::Error) -> FileProcessorError {
    match err.kind() {
        std::io::ErrorKind::PermissionDenied => FileProcessorError::PermissionDenied {
            path: path.display().to_string(),
        },
        _ => FileProcessorError::IoError {
            message: err.to_string(),
        },
    }
}

/// Build a processing result directly from in-memory text (tests, stdin)
pub fn process_text(name: &str, content: &str) -> Result<FileProcessingResult, FileProcessorError> {
    if content.is_empty() {
        return Err(FileProcessorError::EmptyFile);
    }
    let line_count = content.lines().count();
    if line_count > MAX_LINE_COUNT {
        return Err(FileProcessorError::TooManyLines {
            lines: line_count,
            max_lines: MAX_LINE_COUNT,
        });
    }
    Ok(FileProcessingResult {
        metadata: FileMetadata {
            path: PathBuf::from(name),
            size: content.len() as u64,
            line_count,
            is_large: content.len() as u64 > LARGE_FILE_THRESHOLD,
        },
        content: content.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_is_reported() {
        let result = process_file("/nonexistent/router.conf");
        assert!(matches!(
            result,
            Err(FileProcessorError::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_reads_real_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "set system host-name r1").unwrap();
        let result = process_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(result.metadata.line_count, 1);
        assert!(result.content.contains("host-name"));
    }

    #[test]
    fn test_empty_file_rejected() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let result = process_file(file.path().to_str().unwrap());
        assert!(matches!(result, Err(FileProcessorError::EmptyFile)));
    }

    #[test]
    fn test_extension_check_is_opt_in() {
        let mut file = tempfile::Builder::new()
            .suffix(".txt")
            .tempfile()
            .unwrap();
        writeln!(file, "set system host-name r1").unwrap();

        // Default: extension is not enforced
        assert!(process_file(file.path().to_str().unwrap()).is_ok());

        let prefs = FileProcessorPreferences {
            require_conf_extension: true,
            ..Default::default()
        };
        let result = process_file_with_preferences(file.path().to_str().unwrap(), &prefs);
        assert!(matches!(
            result,
            Err(FileProcessorError::InvalidExtension { .. })
        ));
    }

    #[test]
    fn test_process_text() {
        let result = process_text("inline", "set system host-name r1\n").unwrap();
        assert_eq!(result.metadata.line_count, 1);
        assert!(process_text("inline", "").is_err());
    }
}
