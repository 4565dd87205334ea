//! Server-rendered HTML. Every page is a plain string built with `format!`;
//! anything that came from a request goes through [`escape`] first.

pub mod site;
pub mod wizard;

use chrono::Datelike;

use crate::errors::ValidationErrors;
use crate::models::BookingDraft;

pub static STYLE_CSS: &str = include_str!("../web/style.css");
pub static MAP_JS: &str = include_str!("../web/map.js");

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn layout(title: &str, body: &str) -> String {
    let year = chrono::Local::now().year();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | CitizExperience</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<main class="page">
{body}
</main>
<footer class="footer">&copy; {year} CitizExperience. All Rights Reserved.</footer>
</body>
</html>
"#,
        title = escape(title),
    )
}

pub fn field_error(errors: Option<&ValidationErrors>, field: &str) -> String {
    errors
        .and_then(|e| e.message_for(field))
        .map(|msg| format!(r#"<p class="field-error">{}</p>"#, escape(msg)))
        .unwrap_or_default()
}

pub fn notice(text: &str) -> String {
    format!(r#"<div class="notice notice-error" role="alert">{}</div>"#, escape(text))
}

/// Carries the wizard state collected so far through a form post.
pub fn hidden_fields(draft: &BookingDraft) -> String {
    let fields = [
        ("date", &draft.date),
        ("time", &draft.time),
        ("visitors", &draft.visitors),
        ("name", &draft.name),
        ("email", &draft.email),
        ("whatsapp", &draft.whatsapp),
    ];
    fields
        .iter()
        .filter_map(|(name, value)| {
            value.as_ref().map(|v| {
                format!(
                    r#"<input type="hidden" name="{name}" value="{}">"#,
                    escape(v)
                )
            })
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<script>alert("x" & 'y')</script>"#),
            "&lt;script&gt;alert(&quot;x&quot; &amp; &#39;y&#39;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_hidden_fields_only_present_values() {
        let draft = BookingDraft {
            date: Some("2026-10-20".to_string()),
            name: Some("A \"B\"".to_string()),
            ..Default::default()
        };
        let html = hidden_fields(&draft);
        assert!(html.contains(r#"name="date" value="2026-10-20""#));
        assert!(html.contains(r#"value="A &quot;B&quot;""#));
        assert!(!html.contains("name=\"time\""));
    }

    #[test]
    fn test_layout_wraps_body() {
        let html = layout("Home", "<p>hi</p>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Home | CitizExperience</title>"));
        assert!(html.contains("<p>hi</p>"));
    }
}
