mod components;
mod form;
mod render;
mod tree;

pub use components::{
    SELECT_PROMPT, guest_list, new_party_form, party_list, party_list_item, selected_party,
};
pub use form::{Field, FormError, PartyForm, to_iso_timestamp};
pub use render::{SELECTED_ANCHOR, TITLE, render, render_text};
pub use tree::{Action, FieldView, FormView, InputKind, Item, View};
