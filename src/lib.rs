//! dateselect - locale-aware day/month/year select controls
//!
//! This crate parses CLDR-style date patterns into an ordered skeleton of
//! day, month and year fields, builds the option lists each field offers,
//! and arranges rendered select fragments in the order the locale writes
//! a date, so `en-US` produces month/day/year and `ja-JP` produces
//! year/month/day without the caller hardcoding either.

pub mod element;
pub mod error;
pub mod options;
pub mod skeleton;

mod formatter;
mod locale;
pub mod parser;
pub mod render;

pub use element::{DateSelect, FormElement, MonthYearSelect, SelectField};
pub use error::{PatternError, RenderError};
pub use formatter::format_date;
pub use locale::{DateStyle, Locale};
pub use options::{day_options, month_options, year_options, OptionMap};
pub use render::{DateSelectHelper, HtmlSelectRenderer, MonthYearSelectHelper, SelectRenderer};
pub use skeleton::{
    DateField, DateSkeleton, DayFormat, FieldFormat, MonthFormat, SkeletonToken, YearFormat,
};
