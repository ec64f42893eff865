//! Error collector for multi-file processing with cargo-style output
//!
//! Provides organized error collection and reporting when extracting a
//! directory of configuration files.

use super::events::LogEvent;
use crate::config::compile_time::logging::*;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

// ============================================================================
// FILE PROCESSING CONTEXT
// ============================================================================

/// Context information for file processing
#[derive(Debug, Clone)]
pub struct FileProcessingContext {
    pub file_path: PathBuf,
    pub file_id: usize,
    pub start_time: Instant,
}

impl FileProcessingContext {
    pub fn new(file_path: PathBuf, file_id: usize) -> Self {
        Self {
            file_path,
            file_id,
            start_time: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

// ============================================================================
// PROCESSING SUMMARY
// ============================================================================

/// Summary of multi-file processing results
#[derive(Debug, Clone, Default)]
pub struct ProcessingSummary {
    pub total_files: usize,
    pub total_errors: usize,
    pub total_warnings: usize,
}

impl ProcessingSummary {
    pub fn has_errors(&self) -> bool {
        self.total_errors > 0
    }

    pub fn has_warnings(&self) -> bool {
        self.total_warnings > 0
    }
}

// ============================================================================
// ERROR COLLECTOR
// ============================================================================

/// Thread-safe error collector keyed by file path
pub struct ErrorCollector {
    /// Events organized by file path for cargo-style output
    file_events: Mutex<BTreeMap<PathBuf, Vec<LogEvent>>>,
    /// Known file contexts, in registration order
    file_contexts: Mutex<Vec<FileProcessingContext>>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self {
            file_events: Mutex::new(BTreeMap::new()),
            file_contexts: Mutex::new(Vec::new()),
        }
    }

    /// Register that a file is being processed
    pub fn record_file_context(&self, context: FileProcessingContext) {
        self.file_contexts.lock().unwrap().push(context);
    }

    /// Record an error or warning event against a file
    pub fn record_event(&self, file_path: &Path, event: LogEvent) {
        let mut events = self.file_events.lock().unwrap();

        let total: usize = events.values().map(Vec::len).sum();
        if total >= MAX_ERROR_COLLECTION {
            return; // collection is full, drop silently
        }

        events
            .entry(file_path.to_path_buf())
            .or_default()
            .push(event);
    }

    /// All events recorded for one file
    pub fn get_file_errors(&self, file_path: &Path) -> Vec<LogEvent> {
        self.file_events
            .lock()
            .unwrap()
            .get(file_path)
            .cloned()
            .unwrap_or_default()
    }

    /// Current capacity usage (current, max, fraction)
    pub fn get_capacity_info(&self) -> (usize, usize, f64) {
        let current: usize = self
            .file_events
            .lock()
            .unwrap()
            .values()
            .map(Vec::len)
            .sum();
        (
            current,
            MAX_ERROR_COLLECTION,
            current as f64 / MAX_ERROR_COLLECTION as f64,
        )
    }

    pub fn get_summary(&self) -> ProcessingSummary {
        let events = self.file_events.lock().unwrap();
        let contexts = self.file_contexts.lock().unwrap();

        let mut summary = ProcessingSummary {
            total_files: contexts.len().max(events.len()),
            ..Default::default()
        };
        for file_events in events.values() {
            summary.total_errors += file_events.iter().filter(|e| e.is_error()).count();
            summary.total_warnings += file_events.iter().filter(|e| e.is_warning()).count();
        }
        summary
    }

    pub fn clear(&self) {
        self.file_events.lock().unwrap().clear();
        self.file_contexts.lock().unwrap().clear();
    }
}

impl Default for ErrorCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// Render collected events the way cargo renders diagnostics: grouped by
/// file, errors first, then a one-line summary.
pub fn format_cargo_style_errors(collector: &ErrorCollector) -> String {
    let events = collector.file_events.lock().unwrap();
    let mut output = String::new();

    for (path, file_events) in events.iter() {
        if file_events.is_empty() {
            continue;
        }
        output.push_str(&format!("{}:\n", path.display()));
        for event in file_events.iter().filter(|e| e.is_error()) {
            output.push_str(&format!("  {}\n", event.format()));
        }
        for event in file_events.iter().filter(|e| e.is_warning()) {
            output.push_str(&format!("  {}\n", event.format()));
        }
    }
    drop(events);

    let summary = collector.get_summary();
    if summary.has_errors() || summary.has_warnings() {
        output.push_str(&format!(
            "{} error(s), {} warning(s) across {} file(s)\n",
            summary.total_errors, summary.total_warnings, summary.total_files
        ));
    } else {
        output.push_str("no errors or warnings\n");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::codes;

    #[test]
    fn test_collector_groups_by_file() {
        let collector = ErrorCollector::new();
        let path_a = PathBuf::from("a.conf");
        let path_b = PathBuf::from("b.conf");

        collector.record_event(
            &path_a,
            LogEvent::error(codes::syntax::UNEXPECTED_TOKEN, "bad token"),
        );
        collector.record_event(&path_b, LogEvent::warning("odd line"));

        assert_eq!(collector.get_file_errors(&path_a).len(), 1);
        assert_eq!(collector.get_file_errors(&path_b).len(), 1);

        let summary = collector.get_summary();
        assert_eq!(summary.total_errors, 1);
        assert_eq!(summary.total_warnings, 1);
    }

    #[test]
    fn test_cargo_style_output() {
        let collector = ErrorCollector::new();
        let path = PathBuf::from("router.conf");
        collector.record_event(
            &path,
            LogEvent::error(codes::hierarchy::UNDEFINED_GROUP, "no such group"),
        );

        let rendered = format_cargo_style_errors(&collector);
        assert!(rendered.contains("router.conf"));
        assert!(rendered.contains("1 error(s)"));
    }

    #[test]
    fn test_clear() {
        let collector = ErrorCollector::new();
        collector.record_event(Path::new("x.conf"), LogEvent::warning("w"));
        collector.clear();
        assert!(!collector.get_summary().has_warnings());
    }
}
