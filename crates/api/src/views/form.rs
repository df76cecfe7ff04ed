//! Rendering of input forms with inline field errors.

use std::fmt::Write;

use registrar_core::validation::FieldErrors;

use super::escape;

/// One labelled input.
#[derive(Debug, Clone, Copy)]
pub struct Field<'a> {
    /// Form field name, as submitted.
    pub name: &'a str,
    pub label: &'a str,
    /// Previously submitted value, re-filled after a failed submission.
    pub value: &'a str,
    /// HTML input type (`text`, `email`, `search`).
    pub input_type: &'a str,
}

impl<'a> Field<'a> {
    pub fn text(name: &'a str, label: &'a str, value: &'a str) -> Self {
        Self {
            name,
            label,
            value,
            input_type: "text",
        }
    }

    pub fn email(name: &'a str, label: &'a str, value: &'a str) -> Self {
        Self {
            input_type: "email",
            ..Self::text(name, label, value)
        }
    }
}

/// Render a `POST` form to `action` with one block per field.
///
/// Errors for a field are listed directly beneath its input.
pub fn render(action: &str, fields: &[Field<'_>], errors: &FieldErrors, submit: &str) -> String {
    let mut html = String::new();
    let _ = writeln!(html, "<form method=\"post\" action=\"{}\">", escape(action));

    for field in fields {
        let messages = errors.messages_for(field.name);
        let class = if messages.is_empty() {
            "field"
        } else {
            "field invalid"
        };
        let name = escape(field.name);

        let _ = writeln!(
            html,
            "<div class=\"{class}\">\n<label for=\"{name}\">{}</label>\n\
             <input type=\"{}\" id=\"{name}\" name=\"{name}\" value=\"{}\">",
            escape(field.label),
            escape(field.input_type),
            escape(field.value),
        );
        if !messages.is_empty() {
            html.push_str("<ul class=\"errors\">");
            for message in messages {
                let _ = write!(html, "<li>{}</li>", escape(message));
            }
            html.push_str("</ul>\n");
        }
        html.push_str("</div>\n");
    }

    let _ = writeln!(
        html,
        "<button type=\"submit\">{}</button>\n</form>",
        escape(submit)
    );
    html
}
