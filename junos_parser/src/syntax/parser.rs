//! Line parser: token stream to configuration line records
//!
//! The flat format has no nesting at the line level, so this stage is a
//! straight left-to-right scan with per-line recovery: a line that cannot
//! be used is recorded as skipped (with its reason) and parsing continues
//! on the next line.

use crate::config::constants::compile_time::syntax::*;
use crate::logging::codes;
use crate::syntax::error::{SyntaxError, SyntaxResult};
use crate::tokens::{LineKeyword, Token, TokenStream};
use crate::utils::{Span, Spanned};
use crate::{log_debug, log_error, log_success, log_warning};
use serde::{Deserialize, Serialize};

/// Shape of one path word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WordKind {
    Bare,
    Quoted,
    Wildcard,
}

/// One word of a configuration line path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// Text with quotes/brackets stripped
    pub text: String,
    pub kind: WordKind,
}

impl Word {
    pub fn bare(text: &str) -> Self {
        Self {
            text: text.to_string(),
            kind: WordKind::Bare,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        self.kind == WordKind::Wildcard
    }

    /// Render the word as it appears in source
    pub fn source_form(&self) -> String {
        match self.kind {
            WordKind::Bare => self.text.clone(),
            WordKind::Quoted => format!("\"{}\"", self.text),
            WordKind::Wildcard => format!("<{}>", self.text),
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A parsed configuration line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigLine {
    pub keyword: LineKeyword,
    pub words: Vec<Spanned<Word>>,
    pub span: Span,
    /// 1-based source line number
    pub line_number: u32,
}

impl ConfigLine {
    /// Path words as plain text, quotes/brackets stripped
    pub fn word_texts(&self) -> Vec<&str> {
        self.words.iter().map(|w| w.value.text.as_str()).collect()
    }

    /// Whether any path word is a wildcard pattern
    pub fn has_wildcard(&self) -> bool {
        self.words.iter().any(|w| w.value.is_wildcard())
    }
}

/// A line the parser could not use, with the reason it was skipped
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedLine {
    pub reason: String,
    pub span: Span,
}

/// Output of line parsing
#[derive(Debug, Clone)]
pub struct LineParseResult {
    pub lines: Vec<ConfigLine>,
    pub skipped: Vec<SkippedLine>,
}

/// Parse a token stream into configuration lines
pub fn parse_lines(mut tokens: TokenStream) -> SyntaxResult<LineParseResult> {
    if !tokens.has_eof() {
        let error = SyntaxError::missing_eof();
        log_error!(error.error_code(), "Token stream missing EOF token");
        return Err(error);
    }

    log_debug!("Starting line parse", "tokens" => tokens.len());

    let mut lines = Vec::new();
    let mut skipped = Vec::new();

    loop {
        let token = match tokens.peek() {
            Some(t) => t.clone(),
            None => break,
        };

        match token.value {
            Token::Eof => break,
            Token::Newline => {
                tokens.next();
            }
            Token::Keyword(keyword) => {
                tokens.next();
                if !keyword.is_supported() {
                    log_warning!("Unsupported line keyword, line skipped",
                        "keyword" => keyword
                    );
                    skipped.push(SkippedLine {
                        reason: format!("unsupported line keyword '{}'", keyword),
                        span: skip_to_newline(&mut tokens, token.span),
                    });
                    continue;
                }
                match parse_line_body(&mut tokens, keyword, token.span)? {
                    Ok(line) => lines.push(line),
                    Err(skip) => skipped.push(skip),
                }
            }
            _ => {
                // Line does not start with a keyword at all (e.g. raw
                // hierarchical config fed to the flat parser)
                log_warning!("Line does not start with a supported keyword, line skipped",
                    "found" => token.value
                );
                skipped.push(SkippedLine {
                    reason: format!("expected line keyword, found '{}'", token.value),
                    span: skip_to_newline(&mut tokens, token.span),
                });
            }
        }
    }

    log_success!(codes::success::LINE_PARSE_COMPLETE,
        "Line parse completed",
        "lines" => lines.len(),
        "skipped" => skipped.len()
    );

    Ok(LineParseResult { lines, skipped })
}

/// Parse the words after a line keyword. Returns Ok(Ok(line)) for a usable
/// line, Ok(Err(skip)) for a recoverable skip, Err for structural failure.
fn parse_line_body(
    tokens: &mut TokenStream,
    keyword: LineKeyword,
    keyword_span: Span,
) -> SyntaxResult<Result<ConfigLine, SkippedLine>> {
    let mut words: Vec<Spanned<Word>> = Vec::new();
    let mut span = keyword_span;

    loop {
        let token = match tokens.peek() {
            Some(t) => t.clone(),
            None => break,
        };
        match token.value {
            Token::Newline | Token::Eof => {
                if matches!(token.value, Token::Newline) {
                    tokens.next();
                }
                break;
            }
            Token::Word(text) => {
                tokens.next();
                span = span.merge(token.span);
                words.push(Spanned::new(
                    Word {
                        text,
                        kind: WordKind::Bare,
                    },
                    token.span,
                ));
            }
            Token::Quoted(text) => {
                tokens.next();
                span = span.merge(token.span);
                words.push(Spanned::new(
                    Word {
                        text,
                        kind: WordKind::Quoted,
                    },
                    token.span,
                ));
            }
            Token::Wildcard(text) => {
                tokens.next();
                span = span.merge(token.span);
                words.push(Spanned::new(
                    Word {
                        text,
                        kind: WordKind::Wildcard,
                    },
                    token.span,
                ));
            }
            other => {
                let error =
                    SyntaxError::unexpected_token("path word", &other.to_string(), token.span);
                log_error!(error.error_code(), "Unexpected token in line body",
                    span = token.span,
                    "found" => other
                );
                return Err(error);
            }
        }

        if words.len() > MAX_WORDS_PER_LINE {
            let error = SyntaxError::too_many_words(words.len(), span);
            log_error!(error.error_code(), "Line exceeds word limit",
                span = span,
                "words" => words.len()
            );
            return Err(error);
        }
    }

    if words.is_empty() {
        log_warning!("Line keyword without a statement body, line skipped",
            "keyword" => keyword
        );
        return Ok(Err(SkippedLine {
            reason: format!("'{}' line with no statement body", keyword),
            span: keyword_span,
        }));
    }

    Ok(Ok(ConfigLine {
        keyword,
        words,
        span,
        line_number: keyword_span.line(),
    }))
}

/// Consume tokens through the next newline, returning the covered span
fn skip_to_newline(tokens: &mut TokenStream, mut span: Span) -> Span {
    while let Some(token) = tokens.peek() {
        let is_terminator = matches!(token.value, Token::Newline | Token::Eof);
        let is_eof = matches!(token.value, Token::Eof);
        span = span.merge(token.span);
        if !is_eof {
            tokens.next();
        }
        if is_terminator {
            break;
        }
    }
    span
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::LexicalAnalyzer;

    fn parse(source: &str) -> LineParseResult {
        let tokens = LexicalAnalyzer::new().tokenize_source(source).unwrap();
        parse_lines(TokenStream::new(tokens)).unwrap()
    }

    #[test]
    fn test_parses_set_lines() {
        let result = parse("set system host-name r1\nset interfaces ge-0/0/0 unit 0\n");
        assert_eq!(result.lines.len(), 2);
        assert_eq!(result.lines[0].keyword, LineKeyword::Set);
        assert_eq!(
            result.lines[0].word_texts(),
            vec!["system", "host-name", "r1"]
        );
        assert_eq!(result.lines[1].line_number, 2);
    }

    #[test]
    fn test_deactivate_line() {
        let result = parse("deactivate interfaces ge-0/0/0\n");
        assert_eq!(result.lines.len(), 1);
        assert_eq!(result.lines[0].keyword, LineKeyword::Deactivate);
    }

    #[test]
    fn test_unsupported_keyword_is_skipped() {
        let result = parse("delete interfaces ge-0/0/0\nset system host-name r1\n");
        assert_eq!(result.lines.len(), 1);
        assert_eq!(result.skipped.len(), 1);
        assert!(result.skipped[0].reason.contains("delete"));
    }

    #[test]
    fn test_non_keyword_line_is_skipped() {
        let result = parse("interfaces {\nset system host-name r1\n");
        assert_eq!(result.lines.len(), 1);
        assert_eq!(result.skipped.len(), 1);
    }

    #[test]
    fn test_bare_keyword_is_skipped() {
        let result = parse("set\nset system host-name r1\n");
        assert_eq!(result.lines.len(), 1);
        assert_eq!(result.skipped.len(), 1);
        assert!(result.skipped[0].reason.contains("no statement body"));
    }

    #[test]
    fn test_wildcard_flag() {
        let result = parse("set groups g interfaces <ge-*> mtu 9000\n");
        assert!(result.lines[0].has_wildcard());
        assert_eq!(result.lines[0].words[2].value.kind, WordKind::Wildcard);
    }

    #[test]
    fn test_blank_lines_and_comments_ignored() {
        let result = parse("\n\n# header comment\nset system host-name r1\n\n");
        assert_eq!(result.lines.len(), 1);
        assert!(result.skipped.is_empty());
    }
}
