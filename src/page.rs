#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use crate::{constants::PAGE_TEMPLATE, grade::GradePlan};

/// What the page shows alongside the input form.
#[derive(Debug, Clone, Copy)]
pub enum PageView<'a> {
    /// The bare form, with no result or error panel.
    Form,
    /// The validation error panel with the given message.
    Error(&'a str),
    /// The results panel for a computed plan.
    Plan(&'a GradePlan),
}

/// Renders the full HTML document for the given view.
pub fn render(view: &PageView) -> String {
    PAGE_TEMPLATE.replace("{{panel}}", &panel(view))
}

/// Renders the results panel, the error panel, or nothing.
fn panel(view: &PageView) -> String {
    match view {
        PageView::Form => String::new(),
        PageView::Error(message) => format!(
            r#"        <div class="error">
            <p>{}</p>
        </div>"#,
            escape(message)
        ),
        PageView::Plan(plan) => format!(
            r#"        <div class="result">
            <h3>Results:</h3>
            <p>Prelim Grade: {prelim}</p>
            <p>Required Midterm Grade: {midterm}</p>
            <p>Required Final Grade: {final_required}</p>
            <p>{pass}</p>
            <p>Dean's Lister Status: {dean}</p>
        </div>"#,
            prelim = escape(&plan.prelim_grade.to_string()),
            midterm = escape(&plan.midterm_required.to_string()),
            final_required = escape(&plan.final_required.to_string()),
            pass = escape(&plan.pass_outlook.to_string()),
            dean = escape(&plan.dean_outlook.to_string()),
        ),
    }
}

/// Escapes text for interpolation into the HTML body.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_handles_markup() {
        assert_eq!(escape(r#"<b>&"x"</b>"#), "&lt;b&gt;&amp;&quot;x&quot;&lt;/b&gt;");
    }

    #[test]
    fn bare_form_has_no_panels() {
        let html = render(&PageView::Form);
        assert!(html.contains("Grade Computation Tool"));
        assert!(html.contains(r#"name="prelim_grade""#));
        assert!(!html.contains(r#"class="result""#));
        assert!(!html.contains(r#"class="error""#));
        assert!(!html.contains("{{panel}}"));
    }
}
