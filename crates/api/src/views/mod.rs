//! Server-rendered HTML.
//!
//! Pages are plain Rust string templates wrapped in a shared [`layout`].
//! Every value that originates from a request or a database row passes
//! through [`escape`] before interpolation.

pub mod form;
pub mod pages;

use std::fmt::Write;

use crate::flash::Flash;

/// Escape text for inclusion in HTML element content or a quoted attribute.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

const STYLE: &str = "\
body { font-family: sans-serif; margin: 0; background: #f5f6f8; color: #222; }
nav { background: #2b3e50; padding: 0.75rem 1.5rem; }
nav a { color: #fff; margin-right: 1.25rem; text-decoration: none; }
main { max-width: 760px; margin: 2rem auto; background: #fff; padding: 1.5rem 2rem; border-radius: 6px; }
.flash { padding: 0.75rem 1rem; border-radius: 4px; margin-bottom: 1rem; }
.flash-success { background: #dff0d8; color: #3c763d; }
.field { margin-bottom: 1rem; }
.field label { display: block; font-weight: bold; margin-bottom: 0.25rem; }
.field input { width: 100%; padding: 0.4rem; box-sizing: border-box; }
.field.invalid input { border: 1px solid #a94442; }
.errors { color: #a94442; font-size: 0.9rem; margin: 0.25rem 0 0; padding-left: 1.2rem; }
table { width: 100%; border-collapse: collapse; margin-top: 1rem; }
th, td { text-align: left; padding: 0.4rem; border-bottom: 1px solid #ddd; }
";

const NAV: &[(&str, &str)] = &[
    ("/", "Menu"),
    ("/InsertingStudent", "Add Student"),
    ("/InsertingInstructor", "Add Instructor"),
    ("/InsertingAdvisor", "Add Advisor"),
    ("/StudentSearch", "Student Search"),
    ("/InstructorSearch", "Instructor Search"),
];

/// Wrap a page body in the shared document shell.
///
/// `body` must already be escaped; `title` is escaped here.
pub fn layout(title: &str, flash: Option<Flash>, body: &str) -> String {
    let mut html = String::with_capacity(body.len() + STYLE.len() + 1024);
    let title = escape(title);

    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>\n{STYLE}</style>\n</head>\n<body>\n<nav>"
    );
    for (href, label) in NAV {
        let _ = write!(html, "<a href=\"{href}\">{label}</a>");
    }
    html.push_str("</nav>\n<main>\n");

    if let Some(flash) = flash {
        let _ = writeln!(
            html,
            "<div class=\"flash flash-{}\">{}</div>",
            flash.category(),
            escape(flash.message())
        );
    }

    html.push_str(body);
    html.push_str("\n</main>\n</body>\n</html>\n");
    html
}
