//! Token system for flat Juniper configuration text
//!
//! The lexicon is deliberately small: flat output is a sequence of lines,
//! each a line keyword followed by whitespace-separated words. Words come in
//! three shapes - bare, double-quoted, and `<...>` wildcard patterns - and
//! the distinction matters downstream (quoted words keep spaces, wildcard
//! words drive hierarchy expansion).
use serde::{Deserialize, Serialize};
use std::fmt;

/// Keywords that may start a configuration line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKeyword {
    /// `set` - defines a hierarchy path
    Set,
    /// `deactivate` - marks a hierarchy subtree inactive
    Deactivate,
    /// `activate` - recognized but unsupported in flat dumps
    Activate,
    /// `delete` - recognized but unsupported in flat dumps
    Delete,
}

impl LineKeyword {
    /// Parse a line keyword from the first word of a line
    pub fn from_str(word: &str) -> Option<Self> {
        match word {
            "set" => Some(Self::Set),
            "deactivate" => Some(Self::Deactivate),
            "activate" => Some(Self::Activate),
            "delete" => Some(Self::Delete),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Set => "set",
            Self::Deactivate => "deactivate",
            Self::Activate => "activate",
            Self::Delete => "delete",
        }
    }

    /// Whether this keyword's lines are processed (as opposed to flagged)
    pub fn is_supported(self) -> bool {
        matches!(self, Self::Set | Self::Deactivate)
    }
}

impl fmt::Display for LineKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tokens produced by the lexer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    /// Line keyword at the start of a line
    Keyword(LineKeyword),

    /// Bare word (path component or value)
    Word(String),

    /// Double-quoted word, quotes stripped
    Quoted(String),

    /// Wildcard pattern, angle brackets stripped
    Wildcard(String),

    /// Comment (# to end of line)
    Comment(String),

    /// End of a configuration line
    Newline,

    /// End of file marker
    Eof,
}

impl Token {
    /// Whether the parser should see this token (comments are filtered,
    /// newlines are structural and kept)
    pub fn is_significant(&self) -> bool {
        !matches!(self, Self::Comment(_))
    }

    /// Whether this token can be a path word on a line
    pub fn is_word_like(&self) -> bool {
        matches!(self, Self::Word(_) | Self::Quoted(_) | Self::Wildcard(_))
    }

    /// Get keyword if this token is a keyword
    pub fn as_keyword(&self) -> Option<LineKeyword> {
        match self {
            Self::Keyword(kw) => Some(*kw),
            _ => None,
        }
    }

    /// The word text if this token is word-like (quotes/brackets stripped)
    pub fn word_text(&self) -> Option<&str> {
        match self {
            Self::Word(s) | Self::Quoted(s) | Self::Wildcard(s) => Some(s),
            _ => None,
        }
    }

    /// Get the token as it appears in flat Junos source
    pub fn as_source_string(&self) -> String {
        match self {
            Self::Keyword(kw) => kw.as_str().to_string(),
            Self::Word(s) => s.clone(),
            Self::Quoted(s) => format!("\"{}\"", s),
            Self::Wildcard(s) => format!("<{}>", s),
            Self::Comment(text) => format!("#{}", text),
            Self::Newline => "\n".to_string(),
            Self::Eof => "<EOF>".to_string(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_source_string())
    }
}

/// Token classification for metrics and diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// Line keywords
    Structural,
    /// Bare and quoted words
    Word,
    /// Wildcard patterns
    Wildcard,
    /// Comments, newlines, EOF
    Special,
}

impl Token {
    /// Get the classification of this token
    pub fn token_class(&self) -> TokenClass {
        match self {
            Self::Keyword(_) => TokenClass::Structural,
            Self::Word(_) | Self::Quoted(_) => TokenClass::Word,
            Self::Wildcard(_) => TokenClass::Wildcard,
            Self::Comment(_) | Self::Newline | Self::Eof => TokenClass::Special,
        }
    }
}

/// Classify a word at line-start position: keyword or plain word
pub fn classify_line_start_word(word: &str) -> Token {
    match LineKeyword::from_str(word) {
        Some(kw) => Token::Keyword(kw),
        None => Token::Word(word.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_keyword_classification() {
        assert_eq!(
            classify_line_start_word("set"),
            Token::Keyword(LineKeyword::Set)
        );
        assert_eq!(
            classify_line_start_word("deactivate"),
            Token::Keyword(LineKeyword::Deactivate)
        );
        assert_eq!(
            classify_line_start_word("interfaces"),
            Token::Word("interfaces".to_string())
        );
    }

    #[test]
    fn test_supported_keywords() {
        assert!(LineKeyword::Set.is_supported());
        assert!(LineKeyword::Deactivate.is_supported());
        assert!(!LineKeyword::Delete.is_supported());
        assert!(!LineKeyword::Activate.is_supported());
    }

    #[test]
    fn test_source_round_trip() {
        assert_eq!(
            Token::Quoted("two words".to_string()).as_source_string(),
            "\"two words\""
        );
        assert_eq!(
            Token::Wildcard("ge-*".to_string()).as_source_string(),
            "<ge-*>"
        );
    }

    #[test]
    fn test_significance() {
        assert!(Token::Newline.is_significant());
        assert!(!Token::Comment(" note".to_string()).is_significant());
        assert!(Token::Word("bgp".to_string()).is_significant());
    }

    #[test]
    fn test_word_text() {
        assert_eq!(Token::Word("bgp".into()).word_text(), Some("bgp"));
        assert_eq!(Token::Quoted("a b".into()).word_text(), Some("a b"));
        assert_eq!(Token::Newline.word_text(), None);
    }
}
