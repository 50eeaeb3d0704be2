//! Plain-HTML select rendering.

use crate::element::SelectField;
use crate::render::SelectRenderer;

/// Renders a [`SelectField`] as a flat `<select>` tag.
///
/// The fragment is a single line: the opening tag, the empty option when
/// one is set, then one `<option>` per installed entry in order. The
/// entry matching the field's current value gets a `selected` attribute.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlSelectRenderer;

impl SelectRenderer for HtmlSelectRenderer {
    fn render(&self, field: &SelectField) -> String {
        let mut out = String::new();
        out.push_str("<select name=\"");
        out.push_str(&escape(field.name()));
        out.push_str("\">");

        if let Some(label) = field.empty_option() {
            out.push_str("<option value=\"\">");
            out.push_str(&escape(label));
            out.push_str("</option>");
        }

        for (key, label) in field.value_options().iter() {
            out.push_str("<option value=\"");
            out.push_str(&escape(key));
            out.push('"');
            if field.value() == Some(key) {
                out.push_str(" selected");
            }
            out.push('>');
            out.push_str(&escape(label));
            out.push_str("</option>");
        }

        out.push_str("</select>");
        out
    }
}

/// Escape a string for HTML attribute and text content.
fn escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            c => result.push(c),
        }
    }
    result
}
