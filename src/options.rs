//! Option lists for day, month and year selects.

use crate::formatter::{day_label, month_label, year_label};
use crate::locale::Locale;
use crate::skeleton::{DayFormat, MonthFormat, YearFormat};

/// An insertion-ordered map of option value => visible label.
///
/// Select options must render in exactly the order they were generated,
/// so this is a thin wrapper over a `Vec` of pairs rather than a hash map.
/// Lookups scan linearly; the lists here top out at a few hundred entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionMap {
    entries: Vec<(String, String)>,
}

impl OptionMap {
    pub fn new() -> Self {
        OptionMap { entries: Vec::new() }
    }

    /// Insert an option, replacing the label of an existing key in place.
    pub fn insert(&mut self, key: String, label: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = label,
            None => self.entries.push((key, label)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, label)| label.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Options in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl FromIterator<(String, String)> for OptionMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut map = OptionMap::new();
        for (key, label) in iter {
            map.insert(key, label);
        }
        map
    }
}

/// Build the day options `1..=31`, keyed by zero-padded day-of-month.
///
/// The range covers the longest possible month; trimming it to the month
/// actually chosen is a client-side concern.
pub fn day_options(format: DayFormat) -> OptionMap {
    let mut options = OptionMap::new();
    for day in 1u32..=31 {
        options.insert(format!("{:02}", day), day_label(format, day));
    }
    options
}

/// Build the month options `1..=12`, keyed by zero-padded month number.
pub fn month_options(format: MonthFormat, locale: &Locale) -> OptionMap {
    let mut options = OptionMap::new();
    for month in 1u32..=12 {
        options.insert(format!("{:02}", month), month_label(format, month, locale));
    }
    options
}

/// Build the year options `min_year..=max_year`, ascending.
///
/// Keys and labels are both the plain decimal year. An inverted range
/// yields an empty map rather than an error.
pub fn year_options(min_year: i32, max_year: i32) -> OptionMap {
    let mut options = OptionMap::new();
    for year in min_year..=max_year {
        options.insert(year.to_string(), year_label(YearFormat::Full, year));
    }
    options
}
