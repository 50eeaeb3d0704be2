//! Form elements carrying select state.

use std::any::Any;

use chrono::{Datelike, Local, NaiveDate};

use crate::options::OptionMap;

/// A renderable form element.
///
/// Helpers accept `&mut dyn FormElement` and downcast to the concrete
/// element they know how to render, so a mismatched element is reported
/// instead of silently mis-rendered.
pub trait FormElement {
    /// The element's assigned name, possibly empty.
    fn name(&self) -> &str;

    /// Element kind for error reporting, e.g. `"DateSelect"`.
    fn kind(&self) -> &'static str;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// One select control: an option list plus the current selection.
#[derive(Debug, Clone, Default)]
pub struct SelectField {
    name: String,
    options: OptionMap,
    empty_option: Option<String>,
    selected: Option<String>,
}

impl SelectField {
    pub fn new(name: &str) -> Self {
        SelectField {
            name: name.to_string(),
            ..SelectField::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the installed option list.
    pub fn set_value_options(&mut self, options: OptionMap) {
        self.options = options;
    }

    pub fn value_options(&self) -> &OptionMap {
        &self.options
    }

    /// Add a selectable blank entry with the given visible label.
    pub fn set_empty_option(&mut self, label: String) {
        self.empty_option = Some(label);
    }

    pub fn clear_empty_option(&mut self) {
        self.empty_option = None;
    }

    pub fn empty_option(&self) -> Option<&str> {
        self.empty_option.as_deref()
    }

    /// Mark an option key as selected. The key is stored as-is whether or
    /// not it exists in the installed options.
    pub fn set_value(&mut self, key: String) {
        self.selected = Some(key);
    }

    pub fn value(&self) -> Option<&str> {
        self.selected.as_deref()
    }
}

fn default_year_range() -> (i32, i32) {
    let current = Local::now().year();
    (current - 100, current)
}

/// A date picked through three coordinated selects.
///
/// The sub-fields are owned by the element and named `<name>[day]`,
/// `<name>[month]` and `<name>[year]`, matching how nested form values
/// are submitted.
#[derive(Debug, Clone)]
pub struct DateSelect {
    name: String,
    day: SelectField,
    month: SelectField,
    year: SelectField,
    min_year: i32,
    max_year: i32,
    create_empty_option: bool,
}

impl DateSelect {
    /// New element with the year range defaulting to the last hundred
    /// years ending at the current one.
    pub fn new(name: &str) -> Self {
        let (min_year, max_year) = default_year_range();
        DateSelect {
            name: name.to_string(),
            day: SelectField::new(&format!("{name}[day]")),
            month: SelectField::new(&format!("{name}[month]")),
            year: SelectField::new(&format!("{name}[year]")),
            min_year,
            max_year,
            create_empty_option: false,
        }
    }

    pub fn min_year(&self) -> i32 {
        self.min_year
    }

    pub fn set_min_year(&mut self, year: i32) {
        self.min_year = year;
    }

    pub fn max_year(&self) -> i32 {
        self.max_year
    }

    pub fn set_max_year(&mut self, year: i32) {
        self.max_year = year;
    }

    pub fn should_create_empty_option(&self) -> bool {
        self.create_empty_option
    }

    pub fn set_should_create_empty_option(&mut self, flag: bool) {
        self.create_empty_option = flag;
    }

    pub fn day_element(&self) -> &SelectField {
        &self.day
    }

    pub fn day_element_mut(&mut self) -> &mut SelectField {
        &mut self.day
    }

    pub fn month_element(&self) -> &SelectField {
        &self.month
    }

    pub fn month_element_mut(&mut self) -> &mut SelectField {
        &mut self.month
    }

    pub fn year_element(&self) -> &SelectField {
        &self.year
    }

    pub fn year_element_mut(&mut self) -> &mut SelectField {
        &mut self.year
    }

    /// Spread a date across the three sub-field selections, using the
    /// zero-padded keys the option builders generate.
    pub fn set_value(&mut self, date: NaiveDate) {
        self.day.set_value(format!("{:02}", date.day()));
        self.month.set_value(format!("{:02}", date.month()));
        self.year.set_value(date.year().to_string());
    }

    /// Reassemble the sub-field selections into a date.
    ///
    /// `None` until all three sub-fields hold a selection that forms a
    /// real calendar date.
    pub fn value(&self) -> Option<NaiveDate> {
        let year: i32 = self.year.value()?.parse().ok()?;
        let month: u32 = self.month.value()?.parse().ok()?;
        let day: u32 = self.day.value()?.parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

impl FormElement for DateSelect {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &'static str {
        "DateSelect"
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A month-and-year pair picked through two coordinated selects.
#[derive(Debug, Clone)]
pub struct MonthYearSelect {
    name: String,
    month: SelectField,
    year: SelectField,
    min_year: i32,
    max_year: i32,
    create_empty_option: bool,
}

impl MonthYearSelect {
    pub fn new(name: &str) -> Self {
        let (min_year, max_year) = default_year_range();
        MonthYearSelect {
            name: name.to_string(),
            month: SelectField::new(&format!("{name}[month]")),
            year: SelectField::new(&format!("{name}[year]")),
            min_year,
            max_year,
            create_empty_option: false,
        }
    }

    pub fn min_year(&self) -> i32 {
        self.min_year
    }

    pub fn set_min_year(&mut self, year: i32) {
        self.min_year = year;
    }

    pub fn max_year(&self) -> i32 {
        self.max_year
    }

    pub fn set_max_year(&mut self, year: i32) {
        self.max_year = year;
    }

    pub fn should_create_empty_option(&self) -> bool {
        self.create_empty_option
    }

    pub fn set_should_create_empty_option(&mut self, flag: bool) {
        self.create_empty_option = flag;
    }

    pub fn month_element(&self) -> &SelectField {
        &self.month
    }

    pub fn month_element_mut(&mut self) -> &mut SelectField {
        &mut self.month
    }

    pub fn year_element(&self) -> &SelectField {
        &self.year
    }

    pub fn year_element_mut(&mut self) -> &mut SelectField {
        &mut self.year
    }

    pub fn set_value(&mut self, year: i32, month: u32) {
        self.month.set_value(format!("{:02}", month));
        self.year.set_value(year.to_string());
    }

    /// `None` until both sub-fields hold a selection with a month in
    /// `1..=12`.
    pub fn value(&self) -> Option<(i32, u32)> {
        let year: i32 = self.year.value()?.parse().ok()?;
        let month: u32 = self.month.value()?.parse().ok()?;
        if !(1..=12).contains(&month) {
            return None;
        }
        Some((year, month))
    }
}

impl FormElement for MonthYearSelect {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &'static str {
        "MonthYearSelect"
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_fields_get_bracketed_names() {
        let element = DateSelect::new("birth");
        assert_eq!(element.day_element().name(), "birth[day]");
        assert_eq!(element.month_element().name(), "birth[month]");
        assert_eq!(element.year_element().name(), "birth[year]");
    }

    #[test]
    fn test_default_year_range_spans_a_century() {
        let element = DateSelect::new("d");
        assert_eq!(element.max_year() - element.min_year(), 100);
    }

    #[test]
    fn test_date_value_round_trips_with_padded_keys() {
        let mut element = DateSelect::new("d");
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        element.set_value(date);
        assert_eq!(element.day_element().value(), Some("29"));
        assert_eq!(element.month_element().value(), Some("02"));
        assert_eq!(element.year_element().value(), Some("2024"));
        assert_eq!(element.value(), Some(date));
    }

    #[test]
    fn test_value_is_none_until_all_sub_fields_are_set() {
        let mut element = DateSelect::new("d");
        assert_eq!(element.value(), None);
        element.day_element_mut().set_value("07".into());
        element.month_element_mut().set_value("06".into());
        assert_eq!(element.value(), None);
        element.year_element_mut().set_value("1999".into());
        assert_eq!(element.value(), NaiveDate::from_ymd_opt(1999, 6, 7));
    }

    #[test]
    fn test_impossible_dates_read_back_as_none() {
        let mut element = DateSelect::new("d");
        element.day_element_mut().set_value("31".into());
        element.month_element_mut().set_value("02".into());
        element.year_element_mut().set_value("2024".into());
        assert_eq!(element.value(), None);
    }

    #[test]
    fn test_garbage_selections_read_back_as_none() {
        let mut element = DateSelect::new("d");
        element.day_element_mut().set_value("xx".into());
        element.month_element_mut().set_value("01".into());
        element.year_element_mut().set_value("2024".into());
        assert_eq!(element.value(), None);
    }

    #[test]
    fn test_month_year_value_round_trips() {
        let mut element = MonthYearSelect::new("issued");
        element.set_value(2021, 9);
        assert_eq!(element.month_element().value(), Some("09"));
        assert_eq!(element.value(), Some((2021, 9)));
    }

    #[test]
    fn test_month_year_rejects_out_of_range_month() {
        let mut element = MonthYearSelect::new("issued");
        element.month_element_mut().set_value("13".into());
        element.year_element_mut().set_value("2021".into());
        assert_eq!(element.value(), None);
    }

    #[test]
    fn test_empty_option_can_be_set_and_cleared() {
        let mut field = SelectField::new("f");
        assert_eq!(field.empty_option(), None);
        field.set_empty_option(String::new());
        assert_eq!(field.empty_option(), Some(""));
        field.clear_empty_option();
        assert_eq!(field.empty_option(), None);
    }
}
