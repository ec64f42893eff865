//! Core lexical analyzer for flat Junos text
//!
//! Line-oriented tokenization: the only structure below the file level is
//! the line, so the lexer's one piece of state is whether it sits at the
//! start of a line (where `set`/`deactivate` are keywords rather than words).

use crate::config::constants::compile_time::lexical::*;
use crate::config::runtime::LexicalPreferences;
use crate::file_processor::FileProcessingResult;
use crate::logging::codes;
use crate::tokens::{classify_line_start_word, SpannedToken, Token, TokenStream};
use crate::utils::{Position, SourceMap, Span, Spanned};
use crate::{log_debug, log_error, log_success};

/// Lexical analysis errors with compile-time limits
#[derive(Debug, Clone, thiserror::Error)]
pub enum LexerError {
    #[error("Invalid character: {character:?} at line {line}, column {column}")]
    InvalidCharacter {
        character: char,
        line: u32,
        column: u32,
    },

    #[error("Unterminated quoted word starting at line {line}")]
    UnterminatedQuote { line: u32 },

    #[error("Unterminated wildcard pattern starting at line {line}")]
    UnterminatedWildcard { line: u32 },

    #[error("Word too long: {length} characters (max {MAX_WORD_LENGTH})")]
    WordTooLong { length: usize },

    #[error("Quoted word too long: {length} characters (max {MAX_QUOTED_LENGTH})")]
    QuotedTooLong { length: usize },

    #[error("Comment too long: {length} characters (max {MAX_COMMENT_LENGTH})")]
    CommentTooLong { length: usize },

    #[error("Too many tokens: {count} (max {MAX_TOKEN_COUNT})")]
    TooManyTokens { count: usize },
}

impl LexerError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            LexerError::InvalidCharacter { .. } => codes::lexical::INVALID_CHARACTER,
            LexerError::UnterminatedQuote { .. } => codes::lexical::UNTERMINATED_QUOTE,
            LexerError::UnterminatedWildcard { .. } => codes::lexical::UNTERMINATED_WILDCARD,
            LexerError::WordTooLong { .. } => codes::lexical::WORD_TOO_LONG,
            LexerError::QuotedTooLong { .. } => codes::lexical::QUOTED_TOO_LONG,
            LexerError::CommentTooLong { .. } => codes::lexical::COMMENT_TOO_LONG,
            LexerError::TooManyTokens { .. } => codes::lexical::TOO_MANY_TOKENS,
        }
    }
}

/// Essential lexical analysis metrics
#[derive(Debug, Default, Clone)]
pub struct LexicalMetrics {
    pub total_tokens: usize,
    pub keyword_tokens: usize,
    pub word_tokens: usize,
    pub quoted_tokens: usize,
    pub wildcard_tokens: usize,
    pub comment_count: usize,
    pub line_count: usize,
    pub max_word_length: usize,
}

impl LexicalMetrics {
    fn record_token(&mut self, token: &Token, preferences: &LexicalPreferences) {
        match token {
            Token::Keyword(_) => {
                self.total_tokens += 1;
                self.keyword_tokens += 1;
            }
            Token::Word(s) => {
                self.total_tokens += 1;
                self.word_tokens += 1;
                if preferences.collect_detailed_metrics {
                    self.max_word_length = self.max_word_length.max(s.len());
                }
            }
            Token::Quoted(s) => {
                self.total_tokens += 1;
                self.quoted_tokens += 1;
                if preferences.collect_detailed_metrics {
                    self.max_word_length = self.max_word_length.max(s.len());
                }
            }
            Token::Wildcard(_) => {
                self.total_tokens += 1;
                self.wildcard_tokens += 1;
            }
            Token::Comment(_) => {
                self.comment_count += 1;
                if preferences.include_all_tokens_in_counts {
                    self.total_tokens += 1;
                }
            }
            Token::Newline => {
                self.line_count += 1;
                if preferences.include_all_tokens_in_counts {
                    self.total_tokens += 1;
                }
            }
            Token::Eof => {}
        }
    }
}

/// Lexical analyzer with runtime preferences
pub struct LexicalAnalyzer {
    preferences: LexicalPreferences,
    metrics: LexicalMetrics,
}

impl LexicalAnalyzer {
    pub fn new() -> Self {
        Self::with_preferences(LexicalPreferences::default())
    }

    pub fn with_preferences(preferences: LexicalPreferences) -> Self {
        Self {
            preferences,
            metrics: LexicalMetrics::default(),
        }
    }

    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    /// Tokenize the content of a processed file
    pub fn tokenize_file_result(
        &mut self,
        file_result: FileProcessingResult,
    ) -> Result<TokenStream, LexerError> {
        let tokens = self.tokenize_source(&file_result.content)?;
        let source_map = SourceMap::new(file_result.content);
        let stream = TokenStream::with_source_map(tokens, source_map);

        if !file_result.metadata.is_large {
            log_success!(codes::success::TOKENIZATION_COMPLETE,
                "Tokenization completed",
                "tokens" => stream.len(),
                "lines" => self.metrics.line_count
            );
        }
        Ok(stream)
    }

    /// Tokenize raw source text
    pub fn tokenize_source(&mut self, source: &str) -> Result<Vec<SpannedToken>, LexerError> {
        let mut tokens: Vec<SpannedToken> = Vec::new();
        let mut chars = source.chars().peekable();
        let mut pos = Position::start();
        let mut at_line_start = true;

        while let Some(&ch) = chars.peek() {
            match ch {
                ' ' | '\t' | '\r' => {
                    chars.next();
                    pos = pos.advance(ch);
                }
                '\n' => {
                    let start = pos;
                    chars.next();
                    pos = pos.advance(ch);
                    self.push_token(&mut tokens, Token::Newline, Span::new(start, pos))?;
                    at_line_start = true;
                }
                '#' => {
                    let start = pos;
                    chars.next();
                    pos = pos.advance(ch);
                    let mut text = String::new();
                    while let Some(&c) = chars.peek() {
                        if c == '\n' {
                            break;
                        }
                        text.push(c);
                        chars.next();
                        pos = pos.advance(c);
                    }
                    if text.len() > MAX_COMMENT_LENGTH {
                        let error = LexerError::CommentTooLong { length: text.len() };
                        log_error!(error.error_code(), "Comment exceeds length limit",
                            "length" => text.len()
                        );
                        return Err(error);
                    }
                    self.push_token(&mut tokens, Token::Comment(text), Span::new(start, pos))?;
                }
                '"' => {
                    let start = pos;
                    let start_line = pos.line;
                    chars.next();
                    pos = pos.advance(ch);
                    let mut text = String::new();
                    let mut closed = false;
                    while let Some(&c) = chars.peek() {
                        chars.next();
                        pos = pos.advance(c);
                        if c == '"' {
                            closed = true;
                            break;
                        }
                        if c == '\n' {
                            break;
                        }
                        text.push(c);
                    }
                    if !closed {
                        let error = LexerError::UnterminatedQuote { line: start_line };
                        log_error!(error.error_code(), "Unterminated quoted word",
                            "line" => start_line
                        );
                        return Err(error);
                    }
                    if text.len() > MAX_QUOTED_LENGTH {
                        let error = LexerError::QuotedTooLong { length: text.len() };
                        log_error!(error.error_code(), "Quoted word exceeds length limit",
                            "length" => text.len()
                        );
                        return Err(error);
                    }
                    self.push_token(&mut tokens, Token::Quoted(text), Span::new(start, pos))?;
                    at_line_start = false;
                }
                '<' => {
                    let start = pos;
                    let start_line = pos.line;
                    chars.next();
                    pos = pos.advance(ch);
                    let mut text = String::new();
                    let mut closed = false;
                    while let Some(&c) = chars.peek() {
                        if c == '\n' {
                            break;
                        }
                        chars.next();
                        pos = pos.advance(c);
                        if c == '>' {
                            closed = true;
                            break;
                        }
                        text.push(c);
                    }
                    if !closed {
                        let error = LexerError::UnterminatedWildcard { line: start_line };
                        log_error!(error.error_code(), "Unterminated wildcard pattern",
                            "line" => start_line
                        );
                        return Err(error);
                    }
                    self.push_token(&mut tokens, Token::Wildcard(text), Span::new(start, pos))?;
                    at_line_start = false;
                }
                c if c.is_control() => {
                    let error = LexerError::InvalidCharacter {
                        character: c,
                        line: pos.line,
                        column: pos.column,
                    };
                    if self.preferences.include_position_in_errors {
                        log_error!(error.error_code(), "Invalid character in input",
                            "line" => pos.line,
                            "column" => pos.column
                        );
                    } else {
                        log_error!(error.error_code(), "Invalid character in input");
                    }
                    return Err(error);
                }
                _ => {
                    let start = pos;
                    let mut text = String::new();
                    while let Some(&c) = chars.peek() {
                        if c.is_whitespace() || c == '"' || c == '#' {
                            break;
                        }
                        text.push(c);
                        chars.next();
                        pos = pos.advance(c);
                    }
                    if text.len() > MAX_WORD_LENGTH {
                        let error = LexerError::WordTooLong { length: text.len() };
                        log_error!(error.error_code(), "Word exceeds length limit",
                            "length" => text.len()
                        );
                        return Err(error);
                    }
                    let token = if at_line_start {
                        classify_line_start_word(&text)
                    } else {
                        Token::Word(text)
                    };
                    self.push_token(&mut tokens, token, Span::new(start, pos))?;
                    at_line_start = false;
                }
            }
        }

        // Terminate a final unterminated line, then mark EOF
        if !matches!(tokens.last().map(|t| &t.value), Some(Token::Newline) | None) {
            self.push_token(&mut tokens, Token::Newline, Span::new(pos, pos))?;
        }
        self.push_token(&mut tokens, Token::Eof, Span::new(pos, pos))?;

        log_debug!("Tokenization produced token stream",
            "tokens" => tokens.len()
        );

        Ok(tokens)
    }

    fn push_token(
        &mut self,
        tokens: &mut Vec<SpannedToken>,
        token: Token,
        span: Span,
    ) -> Result<(), LexerError> {
        if tokens.len() >= MAX_TOKEN_COUNT {
            let error = LexerError::TooManyTokens {
                count: tokens.len(),
            };
            log_error!(error.error_code(), "Token count limit exceeded",
                "count" => tokens.len()
            );
            return Err(error);
        }
        self.metrics.record_token(&token, &self.preferences);
        tokens.push(Spanned::new(token, span));
        Ok(())
    }
}

impl Default for LexicalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::LineKeyword;

    fn tokenize(source: &str) -> Vec<Token> {
        LexicalAnalyzer::new()
            .tokenize_source(source)
            .unwrap()
            .into_iter()
            .map(|t| t.value)
            .collect()
    }

    #[test]
    fn test_basic_set_line() {
        let tokens = tokenize("set system host-name r1\n");
        assert_eq!(
            tokens,
            vec![
                Token::Keyword(LineKeyword::Set),
                Token::Word("system".into()),
                Token::Word("host-name".into()),
                Token::Word("r1".into()),
                Token::Newline,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_keyword_only_at_line_start() {
        let tokens = tokenize("set firewall filter set-filter\n");
        assert_eq!(tokens[3], Token::Word("set-filter".into()));
    }

    #[test]
    fn test_quoted_word_keeps_spaces() {
        let tokens = tokenize("set interfaces ge-0/0/0 description \"uplink to core\"\n");
        assert!(tokens.contains(&Token::Quoted("uplink to core".into())));
    }

    #[test]
    fn test_wildcard_word() {
        let tokens = tokenize("set groups g interfaces <ge-*> mtu 9000\n");
        assert!(tokens.contains(&Token::Wildcard("ge-*".into())));
    }

    #[test]
    fn test_comment_is_filtered_but_recorded() {
        let mut analyzer = LexicalAnalyzer::new();
        let tokens = analyzer
            .tokenize_source("# generated by export\nset system host-name r1\n")
            .unwrap();
        assert!(tokens.iter().any(|t| matches!(t.value, Token::Comment(_))));
        assert_eq!(analyzer.metrics().comment_count, 1);
    }

    #[test]
    fn test_unterminated_quote_fails() {
        let result = LexicalAnalyzer::new().tokenize_source("set x description \"oops\n");
        assert!(matches!(result, Err(LexerError::UnterminatedQuote { .. })));
    }

    #[test]
    fn test_unterminated_wildcard_fails() {
        let result = LexicalAnalyzer::new().tokenize_source("set groups g interfaces <ge-\n");
        assert!(matches!(
            result,
            Err(LexerError::UnterminatedWildcard { .. })
        ));
    }

    #[test]
    fn test_missing_trailing_newline_synthesized() {
        let tokens = tokenize("set system host-name r1");
        assert_eq!(tokens[tokens.len() - 2], Token::Newline);
        assert_eq!(tokens[tokens.len() - 1], Token::Eof);
    }

    #[test]
    fn test_metrics_counts() {
        let mut analyzer = LexicalAnalyzer::new();
        analyzer
            .tokenize_source("set system host-name r1\nset system domain-name example.com\n")
            .unwrap();
        let metrics = analyzer.metrics();
        assert_eq!(metrics.keyword_tokens, 2);
        assert_eq!(metrics.line_count, 2);
        assert!(metrics.word_tokens >= 6);
    }
}
