//! Locale data: canonical date patterns and month names.

mod builtin;

pub use builtin::Locale;

/// Width of the locale date pattern a select group is arranged by.
///
/// There is deliberately no `Full` width: full patterns carry weekday
/// names, and a weekday has no select counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    /// Compact numeric pattern, e.g. `M/d/yy`.
    Short,
    /// Abbreviated month-name pattern, e.g. `MMM d, y`.
    Medium,
    /// Full month-name pattern, e.g. `MMMM d, y`.
    #[default]
    Long,
}
