//! Date formatting against a parsed skeleton.

use chrono::{Datelike, NaiveDate};

use crate::locale::Locale;
use crate::skeleton::{
    DateSkeleton, DayFormat, FieldFormat, MonthFormat, SkeletonToken, YearFormat,
};

/// Format a date by walking the skeleton's tokens in order.
///
/// Field tokens render according to their format, delimiter tokens are
/// emitted verbatim, so the output reads exactly like the pattern the
/// skeleton was parsed from.
pub fn format_date(date: NaiveDate, skeleton: &DateSkeleton, locale: &Locale) -> String {
    let mut result = String::new();

    for token in skeleton.tokens() {
        match token {
            SkeletonToken::Delimiter(text) => result.push_str(text),
            SkeletonToken::Field { format, .. } => {
                let rendered = match format {
                    FieldFormat::Day(day) => day_label(*day, date.day()),
                    FieldFormat::Month(month) => month_label(*month, date.month(), locale),
                    FieldFormat::Year(year) => year_label(*year, date.year()),
                };
                result.push_str(&rendered);
            }
        }
    }

    result
}

/// Render a day-of-month number.
pub(crate) fn day_label(format: DayFormat, day: u32) -> String {
    match format {
        DayFormat::Numeric => format!("{}", day),
        DayFormat::Padded => format!("{:02}", day),
    }
}

/// Render a month. `month` is 1-based.
pub(crate) fn month_label(format: MonthFormat, month: u32, locale: &Locale) -> String {
    let index = (month - 1) as usize;
    match format {
        MonthFormat::Numeric => format!("{}", month),
        MonthFormat::Padded => format!("{:02}", month),
        MonthFormat::Abbreviated => locale.month_names_short[index].to_string(),
        MonthFormat::Full => locale.month_names_full[index].to_string(),
        MonthFormat::Narrow => {
            // First letter of the full month name
            locale.month_names_full[index]
                .chars()
                .next()
                .unwrap_or('?')
                .to_string()
        }
    }
}

/// Render a year.
pub(crate) fn year_label(format: YearFormat, year: i32) -> String {
    match format {
        YearFormat::TwoDigit => format!("{:02}", year.rem_euclid(100)),
        YearFormat::Full => format!("{}", year),
    }
}
