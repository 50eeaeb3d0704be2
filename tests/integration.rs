//! End-to-end tests: locale lookup through HTML output.

use chrono::NaiveDate;
use dateselect::{
    DateSelect, DateSelectHelper, DateStyle, HtmlSelectRenderer, Locale, MonthYearSelect,
    MonthYearSelectHelper,
};

#[test]
fn test_english_birthday_control() {
    let helper = DateSelectHelper::new(Locale::en_us(), HtmlSelectRenderer);
    let mut element = DateSelect::new("birth");
    element.set_min_year(2024);
    element.set_max_year(2024);

    let html = helper.render(&mut element).unwrap();

    // Month first, then day, then year, joined by the pattern's own text.
    assert!(html.starts_with("<select name=\"birth[month]\"><option value=\"01\">January</option>"));
    assert!(html.contains("</select> <select name=\"birth[day]\">"));
    assert!(html.contains("</select>, <select name=\"birth[year]\">"));
    assert!(html.ends_with("<option value=\"2024\">2024</option></select>"));
    assert_eq!(html.matches("<option").count(), 12 + 31 + 1);
    assert_eq!(html.matches("<select").count(), 3);
}

#[test]
fn test_japanese_control_orders_year_first() {
    let helper = DateSelectHelper::new(Locale::ja_jp(), HtmlSelectRenderer);
    let mut element = DateSelect::new("entry");
    element.set_min_year(2020);
    element.set_max_year(2025);

    let html = helper.render(&mut element).unwrap();

    let year = html.find("entry[year]").unwrap();
    let month = html.find("entry[month]").unwrap();
    let day = html.find("entry[day]").unwrap();
    assert!(year < month && month < day);
    assert!(html.contains("</select>年<select"));
    assert!(html.contains("</select>月<select"));
    assert!(html.ends_with("</select>日"));
}

#[test]
fn test_preselected_value_marks_options() {
    let helper = DateSelectHelper::new(Locale::en_gb(), HtmlSelectRenderer);
    let mut element = DateSelect::new("birth");
    element.set_min_year(1990);
    element.set_max_year(2000);
    element.set_value(NaiveDate::from_ymd_opt(1993, 5, 9).unwrap());

    let html = helper.render(&mut element).unwrap();

    assert!(html.contains("<option value=\"09\" selected>9</option>"));
    assert!(html.contains("<option value=\"05\" selected>May</option>"));
    assert!(html.contains("<option value=\"1993\" selected>1993</option>"));
    assert_eq!(html.matches(" selected>").count(), 3);
}

#[test]
fn test_empty_options_render_before_real_ones() {
    let helper = DateSelectHelper::new(Locale::en_us(), HtmlSelectRenderer);
    let mut element = DateSelect::new("birth");
    element.set_min_year(2024);
    element.set_max_year(2024);
    element.set_should_create_empty_option(true);

    let html = helper.render(&mut element).unwrap();

    assert_eq!(html.matches("<option value=\"\"></option>").count(), 3);
    assert!(html.contains("<select name=\"birth[day]\"><option value=\"\"></option>"));
}

#[test]
fn test_element_names_are_escaped_in_output() {
    let helper = DateSelectHelper::new(Locale::en_us(), HtmlSelectRenderer);
    let mut element = DateSelect::new("user<dates>&stuff");

    let html = helper.render(&mut element).unwrap();

    assert!(html.contains("<select name=\"user&lt;dates&gt;&amp;stuff[day]\">"));
    assert!(!html.contains("name=\"user<dates>"));
}

#[test]
fn test_locale_lookup_drives_the_whole_flow() {
    let locale = Locale::for_tag("de_DE").unwrap();
    let helper = DateSelectHelper::new(locale, HtmlSelectRenderer).with_style(DateStyle::Medium);
    let mut element = DateSelect::new("geburtstag");
    element.set_min_year(1980);
    element.set_max_year(1981);

    // Medium German is dd.MM.y: all-numeric labels, dot delimiters.
    let html = helper.render(&mut element).unwrap();
    assert!(html.contains("<option value=\"04\">04</option>"));
    assert!(html.contains("</select>.<select"));
    assert!(html.contains("<option value=\"1980\">1980</option>"));
}

#[test]
fn test_month_year_control_end_to_end() {
    let helper = MonthYearSelectHelper::new(Locale::en_us(), HtmlSelectRenderer);
    let mut element = MonthYearSelect::new("card_expiry");
    element.set_min_year(2026);
    element.set_max_year(2030);
    element.set_value(2027, 11);

    let html = helper.render(&mut element).unwrap();

    assert_eq!(html.matches("<select").count(), 2);
    assert!(!html.contains("[day]"));
    assert!(html.contains("<option value=\"11\" selected>November</option>"));
    assert!(html.contains("<option value=\"2027\" selected>2027</option>"));
    assert!(html.contains("</select> <select name=\"card_expiry[year]\">"));
}

#[test]
fn test_rendered_element_round_trips_its_value() {
    let helper = DateSelectHelper::new(Locale::fr_fr(), HtmlSelectRenderer);
    let mut element = DateSelect::new("rdv");
    let date = NaiveDate::from_ymd_opt(2001, 2, 3).unwrap();
    element.set_value(date);
    helper.render(&mut element).unwrap();

    // Rendering installs options but never rewrites the selection.
    assert_eq!(element.value(), Some(date));
    assert!(element.day_element().value_options().contains_key("03"));
}
