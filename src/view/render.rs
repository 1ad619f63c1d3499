use std::fmt::{self, Write};

use crate::core::AppState;
use crate::view::components::{new_party_form, party_list, selected_party};
use crate::view::form::PartyForm;
use crate::view::tree::{InputKind, View};

pub const TITLE: &str = "Party Planner";
pub const SELECTED_ANCHOR: &str = "selected";

/// Rebuild the whole application tree from scratch.
pub fn render(state: &AppState, form: &PartyForm) -> View {
    View::section(vec![
        View::heading(1, TITLE),
        View::Columns(vec![
            View::section(vec![
                View::heading(2, "Upcoming Parties"),
                party_list(state),
                View::heading(3, "Add a new party"),
                new_party_form(form),
            ]),
            View::Section {
                anchor: Some(SELECTED_ANCHOR),
                children: vec![View::heading(2, "Party Details"), selected_party(state)],
            },
        ]),
    ])
}

/// Lower a tree to indented plain text.
pub fn render_text(view: &View) -> String {
    let mut out = String::new();
    let _ = write_view(&mut out, view, 0);
    out
}

fn write_view(out: &mut String, view: &View, depth: usize) -> fmt::Result {
    let indent = "  ".repeat(depth);
    match view {
        View::Heading { level, text } => {
            writeln!(out, "{indent}{} {text}", "#".repeat(usize::from(*level)))?;
        }
        View::Paragraph(text) => writeln!(out, "{indent}{text}")?,
        View::Time { label, .. } => writeln!(out, "{indent}{label}")?,
        View::Address(location) => writeln!(out, "{indent}@ {location}")?,
        View::Item(item) => {
            let marker = if item.selected { '>' } else { '-' };
            writeln!(out, "{indent}{marker} {}", item.label)?;
        }
        View::Button { label, .. } => writeln!(out, "{indent}[{label}]")?,
        View::Form(form) => {
            for field in &form.fields {
                let hint = match field.kind {
                    InputKind::Date => " (YYYY-MM-DD)",
                    InputKind::Text => "",
                };
                writeln!(out, "{indent}{}{hint}: {}", field.label, field.value)?;
            }
            writeln!(out, "{indent}[{}]", form.submit_label)?;
        }
        View::List(children) => {
            for child in children {
                write_view(out, child, depth + 1)?;
            }
        }
        View::Section { children, .. } | View::Columns(children) => {
            for child in children {
                write_view(out, child, depth)?;
            }
        }
    }
    Ok(())
}
