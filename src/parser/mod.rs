//! Parser for locale date patterns.
//!
//! A pattern arranges exactly one day run, one month run, and one year run,
//! interleaved with literal delimiter text. The parser preserves the source
//! order of the three fields - that order, not a fixed day/month/year order,
//! governs the rendered layout.

mod lexer;

use crate::error::PatternError;
use crate::skeleton::{DateField, DateSkeleton, FieldFormat, SkeletonToken};
use lexer::{Lexer, Token};

/// The marker character for a date field.
fn marker(field: DateField) -> char {
    match field {
        DateField::Day => 'd',
        DateField::Month => 'M',
        DateField::Year => 'y',
    }
}

/// Parse a locale date pattern into a `DateSkeleton`.
///
/// Fails if the pattern is empty, has an unterminated quoted section, or
/// does not contain exactly one run per field. A repeated run for the same
/// field (contiguous or not) is rejected rather than repaired.
pub fn parse(pattern: &str) -> Result<DateSkeleton, PatternError> {
    if pattern.is_empty() {
        return Err(PatternError::EmptyPattern);
    }

    let duplicate = |field| PatternError::DuplicateField {
        pattern: pattern.to_string(),
        field,
    };
    let missing = |field| PatternError::MissingField {
        pattern: pattern.to_string(),
        field,
    };

    let mut tokens = Vec::new();
    let mut day = None;
    let mut month = None;
    let mut year = None;

    for token in Lexer::new(pattern).tokenize()? {
        match token {
            Token::Literal(text) => tokens.push(SkeletonToken::Delimiter(text)),
            Token::FieldRun { field, width } => {
                let format = FieldFormat::for_run(field, width);
                match format {
                    FieldFormat::Day(f) => {
                        if day.replace(f).is_some() {
                            return Err(duplicate(DateField::Day));
                        }
                    }
                    FieldFormat::Month(f) => {
                        if month.replace(f).is_some() {
                            return Err(duplicate(DateField::Month));
                        }
                    }
                    FieldFormat::Year(f) => {
                        if year.replace(f).is_some() {
                            return Err(duplicate(DateField::Year));
                        }
                    }
                }
                tokens.push(SkeletonToken::Field {
                    format,
                    sub_pattern: marker(field).to_string().repeat(width),
                });
            }
        }
    }

    let day = day.ok_or_else(|| missing(DateField::Day))?;
    let month = month.ok_or_else(|| missing(DateField::Month))?;
    let year = year.ok_or_else(|| missing(DateField::Year))?;

    Ok(DateSkeleton::new(tokens, day, month, year))
}
