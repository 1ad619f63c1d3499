//! Tests for the view functions and the render pass.
//!
//! Tests cover:
//! - One selectable entry per party, in collection order
//! - Selected marker and detail panel contents
//! - Guest filtering by RSVP
//! - Full page layout and the text renderer

mod common;

use common::*;
use party_planner::view::{
    self, Action, Field, InputKind, Item, PartyForm, SELECT_PROMPT, SELECTED_ANCHOR, View,
};

fn state_with(parties: Vec<Party>, rsvps: Vec<Rsvp>, guests: Vec<Guest>) -> AppState {
    let mut state = AppState::default();
    state.apply(Change::Parties(parties));
    state.apply(Change::Rsvps(rsvps));
    state.apply(Change::Guests(guests));
    state
}

fn select(state: &mut AppState, party: Party) {
    let ticket = state.begin_selection();
    state.apply(Change::Selected { ticket, party });
}

fn list_items(view: &View) -> Vec<Item> {
    match view {
        View::List(children) => children
            .iter()
            .map(|child| match child {
                View::Item(item) => item.clone(),
                other => panic!("expected list item, got {other:?}"),
            })
            .collect(),
        other => panic!("expected list, got {other:?}"),
    }
}

#[test]
fn test_party_list_one_entry_per_party_in_order() {
    let state = state_with(
        vec![make_party(9, "Zeta"), make_party(2, "Alpha"), make_party(5, "Mid")],
        vec![],
        vec![],
    );

    let items = list_items(&view::party_list(&state));

    let labels: Vec<_> = items.iter().map(|item| item.label.as_str()).collect();
    assert_eq!(labels, ["Zeta", "Alpha", "Mid"]);
    let actions: Vec<_> = items.iter().map(|item| item.action).collect();
    assert_eq!(
        actions,
        [
            Some(Action::SelectParty(9)),
            Some(Action::SelectParty(2)),
            Some(Action::SelectParty(5)),
        ]
    );
    assert!(items.iter().all(|item| !item.selected));
}

#[test]
fn test_party_list_marks_selected() {
    let mut state = state_with(vec![make_party(1, "A"), make_party(2, "B")], vec![], vec![]);
    select(&mut state, make_party(2, "B"));

    let items = list_items(&view::party_list(&state));

    assert!(!items[0].selected);
    assert!(items[1].selected);
    assert_eq!(view::party_list_item(&state, &make_party(2, "B")), View::Item(items[1].clone()));
}

#[test]
fn test_empty_party_list() {
    let state = AppState::default();
    assert_eq!(view::party_list(&state), View::List(vec![]));
}

#[test]
fn test_selected_party_placeholder() {
    let state = AppState::default();
    assert_eq!(
        view::selected_party(&state),
        View::Paragraph(SELECT_PROMPT.to_string())
    );
}

#[test]
fn test_selected_party_details() {
    let mut state = state_with(
        vec![make_party(4, "Gala")],
        vec![make_rsvp(1, 10, 4)],
        vec![make_guest(10, "Ada")],
    );
    select(&mut state, make_party(4, "Gala"));

    let View::Section { children, .. } = view::selected_party(&state) else {
        panic!("expected detail section");
    };

    assert_eq!(children[0], View::heading(3, "Gala #4"));
    assert_eq!(
        children[1],
        View::Time {
            datetime: "2025-06-01T18:30:00.000Z".to_string(),
            label: "2025-06-01".to_string(),
        }
    );
    assert_eq!(children[2], View::Address("Town Hall".to_string()));
    assert_eq!(children[3], View::Paragraph("Gala description".to_string()));
    assert_eq!(list_items(&children[4]).len(), 1);
    assert_eq!(
        children[5],
        View::Button {
            label: "Delete party".to_string(),
            action: Action::DeleteParty(4),
        }
    );
}

#[test]
fn test_guest_list_filters_by_rsvp() {
    let mut state = state_with(
        vec![make_party(1, "One"), make_party(2, "Two")],
        vec![
            make_rsvp(1, 30, 1),
            make_rsvp(2, 10, 1),
            make_rsvp(3, 20, 2),
            make_rsvp(4, 99, 1),
        ],
        vec![
            make_guest(10, "Ada"),
            make_guest(20, "Brian"),
            make_guest(30, "Cleo"),
        ],
    );
    select(&mut state, make_party(1, "One"));

    let names: Vec<_> = list_items(&view::guest_list(&state))
        .into_iter()
        .map(|item| item.label)
        .collect();

    // Guest order, not RSVP order; guest 99 does not exist.
    assert_eq!(names, ["Ada", "Cleo"]);
}

#[test]
fn test_guest_list_empty_without_selection() {
    let state = state_with(
        vec![make_party(1, "One")],
        vec![make_rsvp(1, 10, 1)],
        vec![make_guest(10, "Ada")],
    );
    assert_eq!(view::guest_list(&state), View::List(vec![]));
}

#[test]
fn test_new_party_form_fields() {
    let mut form = PartyForm::default();
    form.set(Field::Name, "Draft");

    let View::Form(form_view) = view::new_party_form(&form) else {
        panic!("expected form");
    };

    let labels: Vec<_> = form_view.fields.iter().map(|field| field.label).collect();
    assert_eq!(labels, ["Name", "Description", "Date", "Location"]);
    assert!(form_view.fields.iter().all(|field| field.required));
    assert_eq!(form_view.fields[0].value, "Draft");
    assert_eq!(form_view.fields[2].kind, InputKind::Date);
    assert_eq!(form_view.submit_label, "Add party");
    assert_eq!(form_view.action, Action::SubmitForm);
}

#[test]
fn test_render_layout() {
    let mut state = state_with(vec![make_party(1, "Picnic")], vec![], vec![]);
    select(&mut state, make_party(1, "Picnic"));

    let tree = view::render(&state, &PartyForm::default());

    let View::Section { children, .. } = &tree else {
        panic!("expected root section");
    };
    assert_eq!(children[0], View::heading(1, "Party Planner"));
    let View::Columns(columns) = &children[1] else {
        panic!("expected two columns");
    };
    assert_eq!(columns.len(), 2);

    let details = tree.find_anchor(SELECTED_ANCHOR).expect("details section");
    let View::Section { children, .. } = details else {
        unreachable!();
    };
    assert_eq!(children[0], View::heading(2, "Party Details"));

    let selectable: Vec<_> = tree
        .items()
        .into_iter()
        .filter(|item| item.action.is_some())
        .collect();
    assert_eq!(selectable.len(), 1);
    assert!(selectable[0].selected);
}

#[test]
fn test_render_text() {
    let mut state = state_with(
        vec![make_party(1, "Picnic"), make_party(2, "Gala")],
        vec![make_rsvp(1, 10, 2)],
        vec![make_guest(10, "Ada")],
    );
    select(&mut state, make_party(2, "Gala"));

    let text = view::render_text(&view::render(&state, &PartyForm::default()));

    assert!(text.starts_with("# Party Planner\n"));
    assert!(text.contains("## Upcoming Parties"));
    assert!(text.contains("  - Picnic\n"));
    assert!(text.contains("  > Gala\n"));
    assert!(text.contains("### Gala #2"));
    assert!(text.contains("2025-06-01\n"));
    assert!(text.contains("@ Town Hall"));
    assert!(text.contains("  - Ada\n"));
    assert!(text.contains("Date (YYYY-MM-DD): \n"));
    assert!(text.contains("[Add party]"));
    assert!(text.contains("[Delete party]"));
}

#[test]
fn test_render_text_without_selection() {
    let text = view::render_text(&view::render(&AppState::default(), &PartyForm::default()));
    assert!(text.contains(SELECT_PROMPT));
    assert!(!text.contains("[Delete party]"));
}
