//! Structured warnings produced during extraction
//!
//! Three buckets: red flags (input that looks wrong), unimplemented
//! (recognized syntax outside the modeled subset), and pedantic
//! (harmless oddities). Serialized alongside the model so consumers can
//! judge extraction fidelity.

use junos_parser::config::constants::compile_time::extraction::MAX_WARNINGS;
use serde::{Deserialize, Serialize};

/// One warning with its source line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub text: String,
    pub line: u32,
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (line {})", self.text, self.line)
    }
}

/// Warning accumulator with a hard cap; overflow is counted, not stored
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Warnings {
    pub red_flags: Vec<Warning>,
    pub unimplemented: Vec<Warning>,
    pub pedantic: Vec<Warning>,
    /// Warnings dropped once the cap was reached
    pub overflow: usize,
}

impl Warnings {
    pub fn new() -> Self {
        Self::default()
    }

    fn total(&self) -> usize {
        self.red_flags.len() + self.unimplemented.len() + self.pedantic.len()
    }

    fn push(bucket: &mut Vec<Warning>, total: usize, overflow: &mut usize, text: String, line: u32) {
        if total >= MAX_WARNINGS {
            *overflow += 1;
            return;
        }
        bucket.push(Warning { text, line });
    }

    /// Input that is likely a real problem in the configuration
    pub fn red_flag(&mut self, text: impl Into<String>, line: u32) {
        let total = self.total();
        Self::push(
            &mut self.red_flags,
            total,
            &mut self.overflow,
            text.into(),
            line,
        );
    }

    /// Recognized syntax outside the modeled subset
    pub fn unimplemented(&mut self, text: impl Into<String>, line: u32) {
        let total = self.total();
        Self::push(
            &mut self.unimplemented,
            total,
            &mut self.overflow,
            text.into(),
            line,
        );
    }

    /// Harmless oddities worth surfacing in verbose runs
    pub fn pedantic(&mut self, text: impl Into<String>, line: u32) {
        let total = self.total();
        Self::push(
            &mut self.pedantic,
            total,
            &mut self.overflow,
            text.into(),
            line,
        );
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0 && self.overflow == 0
    }

    pub fn count(&self) -> usize {
        self.total() + self.overflow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buckets() {
        let mut warnings = Warnings::new();
        warnings.red_flag("bad value", 3);
        warnings.unimplemented("family inet6", 7);
        warnings.pedantic("empty group", 1);

        assert_eq!(warnings.red_flags.len(), 1);
        assert_eq!(warnings.unimplemented.len(), 1);
        assert_eq!(warnings.pedantic.len(), 1);
        assert_eq!(warnings.count(), 3);
        assert!(!warnings.is_empty());
    }

    #[test]
    fn test_display() {
        let warning = Warning {
            text: "unrecognized statement".to_string(),
            line: 12,
        };
        assert_eq!(warning.to_string(), "unrecognized statement (line 12)");
    }
}
