//! Full pages, one function per view.

use std::fmt::Write;

use axum::http::StatusCode;
use registrar_core::forms::{
    AdvisorInsertionForm, InstructorInsertionForm, SearchForm, StudentInsertionForm,
};
use registrar_core::validation::FieldErrors;
use registrar_db::models::instructor::Instructor;
use registrar_db::models::student::Student;

use super::form::{render as render_form, Field};
use super::{escape, layout};
use crate::flash::Flash;

/// Landing page linking every use case.
pub fn menu(flash: Option<Flash>) -> String {
    let body = "<h1>University Records</h1>\n\
        <ul>\n\
        <li><a href=\"/InsertingStudent\">Insert a student</a></li>\n\
        <li><a href=\"/InsertingInstructor\">Insert an instructor</a></li>\n\
        <li><a href=\"/InsertingAdvisor\">Appoint an advisor</a></li>\n\
        <li><a href=\"/StudentSearch\">Search students</a></li>\n\
        <li><a href=\"/InstructorSearch\">Search instructors</a></li>\n\
        </ul>";
    layout("menu", flash, body)
}

pub fn student_form(form: &StudentInsertionForm, errors: &FieldErrors) -> String {
    let fields = [
        Field::text("student_id", "Student ID", &form.student_id),
        Field::text("name", "Student Name", &form.name),
        Field::email("email", "Student Email", &form.email),
        Field::text("dept_name", "Department", &form.dept_name),
    ];
    let body = format!(
        "<h1>Insert Student</h1>\n{}",
        render_form("/InsertingStudent", &fields, errors, "Add Student")
    );
    layout("insert student", None, &body)
}

pub fn instructor_form(form: &InstructorInsertionForm, errors: &FieldErrors) -> String {
    let fields = [
        Field::text("ins_id", "Instructor ID", &form.ins_id),
        Field::text("name", "Instructor Name", &form.name),
        Field::email("email", "Instructor Email", &form.email),
        Field::text("dept_name", "Department", &form.dept_name),
    ];
    let body = format!(
        "<h1>Insert Instructor</h1>\n{}",
        render_form("/InsertingInstructor", &fields, errors, "Add Instructor")
    );
    layout("Instructor Insertion", None, &body)
}

pub fn advisor_form(form: &AdvisorInsertionForm, errors: &FieldErrors) -> String {
    let fields = [
        Field::text("ins_id", "Instructor ID", &form.ins_id),
        Field::text("std_id", "Student ID", &form.std_id),
    ];
    let body = format!(
        "<h1>Appoint Advisor</h1>\n{}",
        render_form("/InsertingAdvisor", &fields, errors, "Add Advisor")
    );
    layout("Advisor Insertion", None, &body)
}

/// A row in a search results table.
trait ResultRow {
    fn cells(&self) -> [&str; 4];
}

impl ResultRow for Student {
    fn cells(&self) -> [&str; 4] {
        [
            self.std_id.as_str(),
            self.std_name.as_str(),
            self.std_email.as_str(),
            self.dept_name.as_str(),
        ]
    }
}

impl ResultRow for Instructor {
    fn cells(&self) -> [&str; 4] {
        [
            self.ins_id.as_str(),
            self.ins_name.as_str(),
            self.ins_email.as_str(),
            self.dept_name.as_str(),
        ]
    }
}

fn search_page<R: ResultRow>(
    title: &str,
    action: &str,
    form: &SearchForm,
    errors: &FieldErrors,
    results: &[R],
) -> String {
    let fields = [Field {
        input_type: "search",
        ..Field::text("search", "Perform Search", &form.search)
    }];

    let mut body = format!(
        "<h1>{}</h1>\n{}",
        escape(title),
        render_form(action, &fields, errors, "Search")
    );

    if results.is_empty() {
        body.push_str("<p class=\"no-results\">No results found.</p>\n");
        return layout(title, None, &body);
    }

    body.push_str(
        "<table>\n<thead><tr><th>ID</th><th>Name</th><th>Email</th><th>Department</th></tr></thead>\n<tbody>\n",
    );
    for row in results {
        body.push_str("<tr>");
        for cell in row.cells() {
            let _ = write!(body, "<td>{}</td>", escape(cell));
        }
        body.push_str("</tr>\n");
    }
    body.push_str("</tbody>\n</table>\n");

    layout(title, None, &body)
}

pub fn student_search(form: &SearchForm, errors: &FieldErrors, results: &[Student]) -> String {
    search_page("Student Search", "/StudentSearch", form, errors, results)
}

pub fn instructor_search(
    form: &SearchForm,
    errors: &FieldErrors,
    results: &[Instructor],
) -> String {
    search_page("Instructor Search", "/InstructorSearch", form, errors, results)
}

/// Generic failure page.
pub fn error(status: StatusCode, code: &str, message: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        "<h1>{} {}</h1>\n<p class=\"error\" data-code=\"{}\">{}</p>\n<p><a href=\"/\">Back to menu</a></p>",
        status.as_u16(),
        escape(reason),
        escape(code),
        escape(message),
    );
    layout(reason, None, &body)
}
