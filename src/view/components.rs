use crate::core::AppState;
use crate::models::Party;
use crate::view::form::{Field, PartyForm};
use crate::view::tree::{Action, FieldView, FormView, InputKind, Item, View};

pub const SELECT_PROMPT: &str = "Please select a party to learn more.";

/// Party name that shows more details about the party when pressed.
pub fn party_list_item(state: &AppState, party: &Party) -> View {
    View::Item(Item {
        label: party.name.clone(),
        selected: state.is_selected(party.id),
        action: Some(Action::SelectParty(party.id)),
    })
}

/// The names of all parties, in the order the API returned them.
pub fn party_list(state: &AppState) -> View {
    View::List(
        state
            .parties()
            .iter()
            .map(|party| party_list_item(state, party))
            .collect(),
    )
}

/// Details of the selected party, or a prompt when nothing is selected.
pub fn selected_party(state: &AppState) -> View {
    let Some(party) = state.selected() else {
        return View::Paragraph(SELECT_PROMPT.to_string());
    };

    View::section(vec![
        View::heading(3, format!("{} #{}", party.name, party.id)),
        View::Time {
            datetime: party.date.clone(),
            label: party.day().to_string(),
        },
        View::Address(party.location.clone()),
        View::Paragraph(party.description.clone()),
        guest_list(state),
        View::Button {
            label: "Delete party".to_string(),
            action: Action::DeleteParty(party.id),
        },
    ])
}

/// Guests attending the selected party.
pub fn guest_list(state: &AppState) -> View {
    let guests = match state.selected() {
        Some(party) => state
            .guests_attending(party.id)
            .map(|guest| {
                View::Item(Item {
                    label: guest.name.clone(),
                    selected: false,
                    action: None,
                })
            })
            .collect(),
        None => Vec::new(),
    };
    View::List(guests)
}

pub fn new_party_form(form: &PartyForm) -> View {
    let fields = Field::ALL
        .into_iter()
        .map(|field| FieldView {
            field,
            label: field.label(),
            kind: match field {
                Field::Date => InputKind::Date,
                _ => InputKind::Text,
            },
            value: form.value(field).to_string(),
            required: true,
        })
        .collect();

    View::Form(FormView {
        fields,
        submit_label: "Add party".to_string(),
        action: Action::SubmitForm,
    })
}
