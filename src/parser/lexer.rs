//! Lexer for locale date pattern strings.
//!
//! The lexer converts a pattern into a stream of tokens:
//! - Runs of identical field-marker characters (`d`, `M`, `y` - case matters,
//!   per TR35) become one `FieldRun` token each
//! - Everything else accumulates into `Literal` tokens, with `'...'` quoted
//!   sections contributing their unquoted content and `''` denoting a literal
//!   apostrophe

use crate::error::PatternError;
use crate::skeleton::DateField;

/// A token in a locale date pattern.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    /// A run of identical field-marker characters, e.g. `MMMM`.
    FieldRun { field: DateField, width: usize },
    /// Literal text between field runs, already unquoted.
    Literal(String),
}

/// Maps a field-marker character to its date field.
///
/// `d` is day of month, `M` is month, `y` is year. Any other character,
/// including other TR35 letters this crate does not arrange (`E`, `L`, `m`),
/// is literal text.
fn field_marker(ch: char) -> Option<DateField> {
    match ch {
        'd' => Some(DateField::Day),
        'M' => Some(DateField::Month),
        'y' => Some(DateField::Year),
        _ => None,
    }
}

/// A lexer for locale date patterns.
pub(crate) struct Lexer<'a> {
    /// The input string being tokenized.
    input: &'a str,
    /// The current position in the input.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given pattern.
    pub(crate) fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Returns the next token, or `None` at end of input.
    pub(crate) fn next_token(&mut self) -> Result<Option<Token>, PatternError> {
        let Some(ch) = self.current_char() else {
            return Ok(None);
        };

        if let Some(field) = field_marker(ch) {
            let width = self.count_run(|c| c == ch);
            return Ok(Some(Token::FieldRun { field, width }));
        }

        // Literal run: everything up to the next field marker.
        let mut text = String::new();
        while let Some(ch) = self.current_char() {
            if field_marker(ch).is_some() {
                break;
            }
            if ch == '\'' {
                self.lex_quoted(&mut text)?;
            } else {
                text.push(ch);
                self.advance();
            }
        }
        Ok(Some(Token::Literal(text)))
    }

    /// Returns all tokens as a vector. This consumes the lexer.
    pub(crate) fn tokenize(mut self) -> Result<Vec<Token>, PatternError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Returns the character at the current position, if any.
    fn current_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    /// Advances the position by one character.
    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += ch.len_utf8();
        }
    }

    /// Counts and consumes consecutive characters matching the predicate.
    /// Returns the count (always >= 1 since the current char matches).
    fn count_run<F>(&mut self, predicate: F) -> usize
    where
        F: Fn(char) -> bool,
    {
        let mut count = 0;
        while let Some(ch) = self.current_char() {
            if predicate(ch) {
                count += 1;
                self.advance();
            } else {
                break;
            }
        }
        count
    }

    /// Lexes a `'...'` section starting at the current quote, appending its
    /// unquoted content to `out`. `''` is a literal apostrophe both inside
    /// and outside a quoted section.
    fn lex_quoted(&mut self, out: &mut String) -> Result<(), PatternError> {
        let start = self.position;
        self.advance(); // Skip the opening quote

        if self.current_char() == Some('\'') {
            self.advance();
            out.push('\'');
            return Ok(());
        }

        loop {
            match self.current_char() {
                Some('\'') => {
                    self.advance();
                    if self.current_char() == Some('\'') {
                        self.advance();
                        out.push('\'');
                    } else {
                        return Ok(()); // Closing quote
                    }
                }
                Some(ch) => {
                    out.push(ch);
                    self.advance();
                }
                None => {
                    return Err(PatternError::UnterminatedQuote { position: start });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let mut lexer = Lexer::new("");
        assert_eq!(lexer.next_token().unwrap(), None);
    }

    #[test]
    fn test_single_marker() {
        let tokens = Lexer::new("d").tokenize().unwrap();
        assert_eq!(
            tokens,
            vec![Token::FieldRun {
                field: DateField::Day,
                width: 1
            }]
        );
    }

    #[test]
    fn test_run_grouping() {
        let tokens = Lexer::new("ddMMMMyy").tokenize().unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::FieldRun {
                    field: DateField::Day,
                    width: 2
                },
                Token::FieldRun {
                    field: DateField::Month,
                    width: 4
                },
                Token::FieldRun {
                    field: DateField::Year,
                    width: 2
                },
            ]
        );
    }

    #[test]
    fn test_literal_accumulation() {
        let tokens = Lexer::new("d. M").tokenize().unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::FieldRun {
                    field: DateField::Day,
                    width: 1
                },
                Token::Literal(". ".to_string()),
                Token::FieldRun {
                    field: DateField::Month,
                    width: 1
                },
            ]
        );
    }

    #[test]
    fn test_quoted_section_is_literal() {
        // The quoted 'de' must not be read as a day marker.
        let tokens = Lexer::new("d 'de' M").tokenize().unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::FieldRun {
                    field: DateField::Day,
                    width: 1
                },
                Token::Literal(" de ".to_string()),
                Token::FieldRun {
                    field: DateField::Month,
                    width: 1
                },
            ]
        );
    }

    #[test]
    fn test_doubled_quote_is_apostrophe() {
        let tokens = Lexer::new("d''M").tokenize().unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::FieldRun {
                    field: DateField::Day,
                    width: 1
                },
                Token::Literal("'".to_string()),
                Token::FieldRun {
                    field: DateField::Month,
                    width: 1
                },
            ]
        );
    }

    #[test]
    fn test_escaped_quote_inside_section() {
        let tokens = Lexer::new("y 'o''clock'").tokenize().unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::FieldRun {
                    field: DateField::Year,
                    width: 1
                },
                Token::Literal(" o'clock".to_string()),
            ]
        );
    }

    #[test]
    fn test_unterminated_quote() {
        let err = Lexer::new("d 'de M").tokenize().unwrap_err();
        assert_eq!(err, PatternError::UnterminatedQuote { position: 2 });
    }

    #[test]
    fn test_unrecognized_letters_are_literal() {
        let tokens = Lexer::new("E d").tokenize().unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Literal("E ".to_string()),
                Token::FieldRun {
                    field: DateField::Day,
                    width: 1
                },
            ]
        );
    }
}
