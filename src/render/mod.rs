//! View helpers that arrange select fragments into a date control.

mod html;

pub use html::HtmlSelectRenderer;

use crate::element::{DateSelect, FormElement, MonthYearSelect, SelectField};
use crate::error::RenderError;
use crate::locale::{DateStyle, Locale};
use crate::options::{day_options, month_options, year_options};
use crate::skeleton::{DateField, DateSkeleton, SkeletonToken};

/// Renders a single select control to an output fragment.
///
/// Implementations own the whole fragment; the helpers splice the
/// returned strings between delimiter texts without inspecting them.
pub trait SelectRenderer {
    fn render(&self, field: &SelectField) -> String;
}

/// Arranges a [`DateSelect`] element into day, month and year selects
/// laid out by a locale date pattern.
#[derive(Debug, Clone)]
pub struct DateSelectHelper<R> {
    locale: Locale,
    style: DateStyle,
    pattern: Option<String>,
    renderer: R,
}

impl<R: SelectRenderer> DateSelectHelper<R> {
    pub fn new(locale: Locale, renderer: R) -> Self {
        DateSelectHelper {
            locale,
            style: DateStyle::default(),
            pattern: None,
            renderer,
        }
    }

    /// Pick which of the locale's pattern widths to arrange by.
    pub fn set_style(&mut self, style: DateStyle) {
        self.style = style;
    }

    pub fn with_style(mut self, style: DateStyle) -> Self {
        self.set_style(style);
        self
    }

    /// Pin an explicit date pattern, bypassing the locale's.
    pub fn set_pattern(&mut self, pattern: &str) {
        self.pattern = Some(pattern.to_string());
    }

    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.set_pattern(pattern);
        self
    }

    /// The pattern the next render will be laid out by.
    pub fn pattern(&self) -> &str {
        match &self.pattern {
            Some(pattern) => pattern,
            None => self.locale.date_pattern(self.style),
        }
    }

    /// Render the element as select controls in pattern order.
    ///
    /// The element must be a [`DateSelect`] with a non-empty name; both
    /// are checked before the element is touched. Option lists for all
    /// three sub-fields are installed on the element as a side effect,
    /// so inspecting the element afterwards shows what was offered.
    pub fn render(&self, element: &mut dyn FormElement) -> Result<String, RenderError> {
        let found = element.kind();
        let element = match element.as_any_mut().downcast_mut::<DateSelect>() {
            Some(element) => element,
            None => {
                return Err(RenderError::InvalidElementType {
                    expected: "DateSelect",
                    found,
                })
            }
        };
        if element.name().is_empty() {
            return Err(RenderError::MissingName);
        }

        let skeleton = DateSkeleton::parse(self.pattern())?;

        let days = day_options(skeleton.day_format());
        let months = month_options(skeleton.month_format(), &self.locale);
        let years = year_options(element.min_year(), element.max_year());
        element.day_element_mut().set_value_options(days);
        element.month_element_mut().set_value_options(months);
        element.year_element_mut().set_value_options(years);

        if element.should_create_empty_option() {
            element.day_element_mut().set_empty_option(String::new());
            element.month_element_mut().set_empty_option(String::new());
            element.year_element_mut().set_empty_option(String::new());
        }

        let day = self.renderer.render(element.day_element());
        let month = self.renderer.render(element.month_element());
        let year = self.renderer.render(element.year_element());

        let mut output = String::new();
        for token in skeleton.tokens() {
            match token {
                SkeletonToken::Delimiter(text) => output.push_str(text),
                SkeletonToken::Field { format, .. } => output.push_str(match format.field() {
                    DateField::Day => &day,
                    DateField::Month => &month,
                    DateField::Year => &year,
                }),
            }
        }

        Ok(output)
    }
}

/// Arranges a [`MonthYearSelect`] element into month and year selects.
///
/// The pattern is still a full date pattern; the day field and the
/// delimiter next to it are dropped from the arrangement, so `en-US`
/// `MMMM d, y` comes out as a month select, a space, and the year
/// select.
#[derive(Debug, Clone)]
pub struct MonthYearSelectHelper<R> {
    locale: Locale,
    style: DateStyle,
    pattern: Option<String>,
    renderer: R,
}

impl<R: SelectRenderer> MonthYearSelectHelper<R> {
    pub fn new(locale: Locale, renderer: R) -> Self {
        MonthYearSelectHelper {
            locale,
            style: DateStyle::default(),
            pattern: None,
            renderer,
        }
    }

    pub fn set_style(&mut self, style: DateStyle) {
        self.style = style;
    }

    pub fn with_style(mut self, style: DateStyle) -> Self {
        self.set_style(style);
        self
    }

    pub fn set_pattern(&mut self, pattern: &str) {
        self.pattern = Some(pattern.to_string());
    }

    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.set_pattern(pattern);
        self
    }

    pub fn pattern(&self) -> &str {
        match &self.pattern {
            Some(pattern) => pattern,
            None => self.locale.date_pattern(self.style),
        }
    }

    /// Render the element as select controls in pattern order, day
    /// dropped.
    pub fn render(&self, element: &mut dyn FormElement) -> Result<String, RenderError> {
        let found = element.kind();
        let element = match element.as_any_mut().downcast_mut::<MonthYearSelect>() {
            Some(element) => element,
            None => {
                return Err(RenderError::InvalidElementType {
                    expected: "MonthYearSelect",
                    found,
                })
            }
        };
        if element.name().is_empty() {
            return Err(RenderError::MissingName);
        }

        let skeleton = DateSkeleton::parse(self.pattern())?;

        let months = month_options(skeleton.month_format(), &self.locale);
        let years = year_options(element.min_year(), element.max_year());
        element.month_element_mut().set_value_options(months);
        element.year_element_mut().set_value_options(years);

        if element.should_create_empty_option() {
            element.month_element_mut().set_empty_option(String::new());
            element.year_element_mut().set_empty_option(String::new());
        }

        let month = self.renderer.render(element.month_element());
        let year = self.renderer.render(element.year_element());

        let tokens = skeleton.month_year_tokens();
        let mut output = String::new();
        for token in &tokens {
            match token {
                SkeletonToken::Delimiter(text) => output.push_str(text),
                SkeletonToken::Field { format, .. } => match format.field() {
                    DateField::Month => output.push_str(&month),
                    DateField::Year => output.push_str(&year),
                    // month_year_tokens has already removed the day field
                    DateField::Day => {}
                },
            }
        }

        Ok(output)
    }
}
