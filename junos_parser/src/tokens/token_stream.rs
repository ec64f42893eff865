//! Span-accurate token stream management
//!
//! Comments are filtered for parsing but retained with their original spans
//! so diagnostics can point at exact source locations.

use crate::tokens::token::Token;
use crate::utils::{SourceMap, Span, Spanned};

/// A token with span information
pub type SpannedToken = Spanned<Token>;

/// Span-accurate token stream that maintains precise source locations
/// even when filtering out comments for parsing.
#[derive(Debug, Clone)]
pub struct TokenStream {
    /// All tokens (including comments) with original spans
    all_tokens: Vec<SpannedToken>,
    /// Indices into all_tokens for significant tokens
    significant_indices: Vec<usize>,
    /// Current position in significant_indices array
    position: usize,
    /// Source map for error reporting
    source_map: Option<SourceMap>,
}

impl TokenStream {
    /// Create a new token stream with automatic filtering
    pub fn new(tokens: Vec<SpannedToken>) -> Self {
        let mut stream = Self {
            all_tokens: tokens,
            significant_indices: Vec::new(),
            position: 0,
            source_map: None,
        };
        stream.rebuild_significant_indices();
        stream
    }

    /// Create stream with source map for enhanced error reporting
    pub fn with_source_map(tokens: Vec<SpannedToken>, source_map: SourceMap) -> Self {
        let mut stream = Self::new(tokens);
        stream.source_map = Some(source_map);
        stream
    }

    fn rebuild_significant_indices(&mut self) {
        self.significant_indices = self
            .all_tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| t.value.is_significant())
            .map(|(i, _)| i)
            .collect();
    }

    /// Number of significant tokens
    pub fn len(&self) -> usize {
        self.significant_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.significant_indices.is_empty()
    }

    /// Current position among significant tokens
    pub fn position(&self) -> usize {
        self.position
    }

    /// Peek at the current significant token
    pub fn peek(&self) -> Option<&SpannedToken> {
        self.peek_ahead(self.position)
    }

    /// Peek at an absolute significant-token index
    pub fn peek_ahead(&self, index: usize) -> Option<&SpannedToken> {
        self.significant_indices
            .get(index)
            .map(|&i| &self.all_tokens[i])
    }

    /// Advance past the current token, returning it
    pub fn next(&mut self) -> Option<SpannedToken> {
        let token = self.peek().cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    /// Whether the stream ends with an EOF token
    pub fn has_eof(&self) -> bool {
        self.significant_indices
            .last()
            .map(|&i| matches!(self.all_tokens[i].value, Token::Eof))
            .unwrap_or(false)
    }

    /// Span of the current token, or of the last token once exhausted
    pub fn current_span(&self) -> Span {
        self.peek()
            .map(|t| t.span)
            .or_else(|| self.all_tokens.last().map(|t| t.span))
            .unwrap_or_else(Span::dummy)
    }

    /// All tokens including comments, in source order
    pub fn all_tokens(&self) -> &[SpannedToken] {
        &self.all_tokens
    }

    /// Attached source map, if any
    pub fn source_map(&self) -> Option<&SourceMap> {
        self.source_map.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::token::LineKeyword;

    fn tok(value: Token) -> SpannedToken {
        Spanned::new(value, Span::dummy())
    }

    #[test]
    fn test_comments_filtered() {
        let stream = TokenStream::new(vec![
            tok(Token::Keyword(LineKeyword::Set)),
            tok(Token::Comment(" note".into())),
            tok(Token::Word("system".into())),
            tok(Token::Newline),
            tok(Token::Eof),
        ]);

        assert_eq!(stream.len(), 4);
        assert_eq!(stream.all_tokens().len(), 5);
        assert!(stream.has_eof());
    }

    #[test]
    fn test_next_advances() {
        let mut stream = TokenStream::new(vec![
            tok(Token::Word("a".into())),
            tok(Token::Word("b".into())),
            tok(Token::Eof),
        ]);

        assert_eq!(stream.next().unwrap().value, Token::Word("a".into()));
        assert_eq!(stream.position(), 1);
        assert_eq!(stream.peek().unwrap().value, Token::Word("b".into()));
    }

    #[test]
    fn test_empty_stream() {
        let mut stream = TokenStream::new(vec![]);
        assert!(stream.is_empty());
        assert!(!stream.has_eof());
        assert!(stream.next().is_none());
    }
}
