//! Typed representation of a parsed locale date pattern.

use crate::error::PatternError;
use std::fmt;

/// The three date fields a pattern arranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    Day,
    Month,
    Year,
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DateField::Day => "day",
            DateField::Month => "month",
            DateField::Year => "year",
        };
        f.write_str(name)
    }
}

/// Day-of-month formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFormat {
    /// `d` - day of month without leading zero (1-31)
    Numeric,
    /// `dd` - day of month with leading zero (01-31)
    Padded,
}

/// Month formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFormat {
    /// `M` - month as number without leading zero (1-12)
    Numeric,
    /// `MM` - month as number with leading zero (01-12)
    Padded,
    /// `MMM` - month as abbreviated name
    Abbreviated,
    /// `MMMM` - month as full name
    Full,
    /// `MMMMM` - month as narrow name (first character of the full name)
    Narrow,
}

/// Year formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearFormat {
    /// `yy` - two-digit year
    TwoDigit,
    /// `y`, `yyy`, `yyyy` - year at natural width
    Full,
}

/// A date field marker together with its resolved format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    Day(DayFormat),
    Month(MonthFormat),
    Year(YearFormat),
}

impl FieldFormat {
    /// Returns which date field this format belongs to.
    pub fn field(&self) -> DateField {
        match self {
            FieldFormat::Day(_) => DateField::Day,
            FieldFormat::Month(_) => DateField::Month,
            FieldFormat::Year(_) => DateField::Year,
        }
    }

    /// Resolves a marker run of the given width into a format.
    pub(crate) fn for_run(field: DateField, width: usize) -> FieldFormat {
        match field {
            DateField::Day => FieldFormat::Day(if width == 1 {
                DayFormat::Numeric
            } else {
                DayFormat::Padded
            }),
            DateField::Month => FieldFormat::Month(match width {
                1 => MonthFormat::Numeric,
                2 => MonthFormat::Padded,
                3 => MonthFormat::Abbreviated,
                4 => MonthFormat::Full,
                _ => MonthFormat::Narrow,
            }),
            DateField::Year => FieldFormat::Year(if width == 2 {
                YearFormat::TwoDigit
            } else {
                YearFormat::Full
            }),
        }
    }
}

/// A single token of a parsed skeleton.
#[derive(Debug, Clone, PartialEq)]
pub enum SkeletonToken {
    /// Literal text between fields, verbatim (quoted sections unquoted).
    Delimiter(String),
    /// A date field marker run.
    Field {
        format: FieldFormat,
        /// The verbatim marker run, e.g. `"MMMM"`.
        sub_pattern: String,
    },
}

impl SkeletonToken {
    /// Returns true if this token carries the given field.
    pub fn is_field(&self, field: DateField) -> bool {
        matches!(self, SkeletonToken::Field { format, .. } if format.field() == field)
    }
}

/// A locale date pattern resolved into field and delimiter tokens.
///
/// Field tokens appear in source-pattern order, and the parser guarantees
/// exactly one token per field kind. A skeleton is recomputed fresh for every
/// render call; it is never cached across locale or pattern changes.
#[derive(Debug, Clone, PartialEq)]
pub struct DateSkeleton {
    tokens: Vec<SkeletonToken>,
    day: DayFormat,
    month: MonthFormat,
    year: YearFormat,
}

impl DateSkeleton {
    pub(crate) fn new(
        tokens: Vec<SkeletonToken>,
        day: DayFormat,
        month: MonthFormat,
        year: YearFormat,
    ) -> Self {
        DateSkeleton {
            tokens,
            day,
            month,
            year,
        }
    }

    /// Parse a locale date pattern into a skeleton.
    pub fn parse(pattern: &str) -> Result<DateSkeleton, PatternError> {
        crate::parser::parse(pattern)
    }

    /// The tokens of this skeleton in source order.
    pub fn tokens(&self) -> &[SkeletonToken] {
        &self.tokens
    }

    /// The day sub-pattern's resolved format.
    pub fn day_format(&self) -> DayFormat {
        self.day
    }

    /// The month sub-pattern's resolved format.
    pub fn month_format(&self) -> MonthFormat {
        self.month
    }

    /// The year sub-pattern's resolved format.
    pub fn year_format(&self) -> YearFormat {
        self.year
    }

    /// The three fields in the order they appear in the pattern.
    pub fn field_order(&self) -> [DateField; 3] {
        let mut order = [DateField::Day; 3];
        let mut next = 0;
        for token in &self.tokens {
            if let SkeletonToken::Field { format, .. } = token {
                if next < 3 {
                    order[next] = format.field();
                    next += 1;
                }
            }
        }
        order
    }

    /// The skeleton's tokens with the day field elided, for month-and-year
    /// rendering.
    ///
    /// Drops the day token plus the delimiter immediately following it, or
    /// the one immediately preceding it when the day ends the pattern. For
    /// `MMMM d, y` this yields `MMMM y`; for `y年M月d日` it yields `y年M月`.
    pub fn month_year_tokens(&self) -> Vec<SkeletonToken> {
        let Some(day_index) = self
            .tokens
            .iter()
            .position(|t| t.is_field(DateField::Day))
        else {
            return self.tokens.clone();
        };

        let following = day_index + 1;
        let dropped_delimiter = if matches!(
            self.tokens.get(following),
            Some(SkeletonToken::Delimiter(_))
        ) {
            Some(following)
        } else if day_index > 0
            && matches!(
                self.tokens.get(day_index - 1),
                Some(SkeletonToken::Delimiter(_))
            )
        {
            Some(day_index - 1)
        } else {
            None
        };

        self.tokens
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != day_index && Some(*i) != dropped_delimiter)
            .map(|(_, token)| token.clone())
            .collect()
    }
}
