use iced::{
    Element, Fill, Length,
    widget::{Column, Row, button, container, scrollable, text, text_input},
};
use iced_widget::container::bordered_box;

use crate::gui::Message;
use crate::view::{Action, FieldView, FormView, InputKind, Item, View};

fn heading_size(level: u8) -> f32 {
    match level {
        1 => 32.0,
        2 => 24.0,
        3 => 20.0,
        _ => 16.0,
    }
}

/// The whole window: the lowered tree inside a scrollable, padded page.
pub fn page(tree: &View) -> Element<'_, Message> {
    scrollable(container(lower(tree)).padding(20).width(Fill))
        .height(Fill)
        .into()
}

pub fn lower(view: &View) -> Element<'_, Message> {
    match view {
        View::Heading { level, text: content } => {
            text(content.as_str()).size(heading_size(*level)).into()
        }
        View::Paragraph(content) => text(content.as_str()).into(),
        View::Time { label, .. } => text(label.as_str()).into(),
        View::Address(location) => text(location.as_str()).size(14.0).into(),
        View::List(children) => Column::with_children(children.iter().map(lower))
            .spacing(4)
            .padding([0, 12])
            .into(),
        View::Item(item) => list_item(item),
        View::Button { label, action } => action_button(label, *action),
        View::Form(form) => form_view(form),
        View::Section { children, .. } => Column::with_children(children.iter().map(lower))
            .spacing(12)
            .into(),
        View::Columns(columns) => Row::with_children(columns.iter().map(|column| {
            container(lower(column))
                .width(Length::FillPortion(1))
                .into()
        }))
        .spacing(32)
        .into(),
    }
}

fn list_item(item: &Item) -> Element<'_, Message> {
    let label = text(item.label.as_str());
    let row: Element<'_, Message> = match item.action {
        Some(action) => button(label)
            .style(button::text)
            .on_press(Message::Act(action))
            .into(),
        None => label.into(),
    };

    if item.selected {
        container(row).style(bordered_box).width(Fill).into()
    } else {
        container(row).width(Fill).into()
    }
}

fn action_button(label: &str, action: Action) -> Element<'_, Message> {
    let style = match action {
        Action::DeleteParty(_) => button::danger,
        _ => button::primary,
    };
    button(text(label)).style(style).on_press(Message::Act(action)).into()
}

fn form_view(form: &FormView) -> Element<'_, Message> {
    let fields = form.fields.iter().map(field_view);
    Column::with_children(fields)
        .push(action_button(&form.submit_label, form.action))
        .spacing(8)
        .into()
}

fn field_view(field: &FieldView) -> Element<'_, Message> {
    let placeholder = match field.kind {
        InputKind::Date => "YYYY-MM-DD",
        InputKind::Text => field.label,
    };
    let key = field.field;
    Column::new()
        .push(text(field.label))
        .push(
            text_input(placeholder, &field.value)
                .on_input(move |value| Message::Edit(key, value))
                .on_submit(Message::Act(Action::SubmitForm))
                .padding(6),
        )
        .spacing(2)
        .into()
}
