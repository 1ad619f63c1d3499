use std::future::Future;

use iced::{Element, Task};

use crate::core::{ApiClient, ApiResult, AppState, Change, sync};
use crate::view::{self, Action, PartyForm, View};

use super::{Message, widgets};

pub struct PartyPlannerApp {
    client: ApiClient,
    state: AppState,
    form: PartyForm,
    /// Tree produced by the last render pass; `view` only lowers it.
    tree: View,
}

impl PartyPlannerApp {
    pub fn boot(client: ApiClient) -> (Self, Task<Message>) {
        let state = AppState::default();
        let form = PartyForm::default();
        let tree = view::render(&state, &form);
        let app = Self {
            client,
            state,
            form,
            tree,
        };

        let startup = app
            .request(
                |client| async move { sync::refresh_parties(&client).await },
                Message::Synced,
            )
            .chain(app.request(
                |client| async move { sync::refresh_rsvps(&client).await },
                Message::Synced,
            ))
            .chain(app.request(
                |client| async move { sync::refresh_guests(&client).await },
                Message::Synced,
            ));

        (app, startup)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn form(&self) -> &PartyForm {
        &self.form
    }

    pub fn tree(&self) -> &View {
        &self.tree
    }

    pub fn title(&self) -> String {
        view::TITLE.to_string()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::Edit(field, value) => {
                self.form.set(field, value);
                Task::none()
            }
            Message::Act(Action::SelectParty(id)) => {
                let ticket = self.state.begin_selection();
                self.request(
                    move |client| async move { sync::select_party(&client, id, ticket).await },
                    Message::Synced,
                )
            }
            Message::Act(Action::DeleteParty(id)) => {
                if self.state.is_selected(id) {
                    self.request(
                        move |client| async move { sync::delete_party(&client, id).await },
                        Message::Synced,
                    )
                } else {
                    Task::none()
                }
            }
            Message::Act(Action::SubmitForm) => match self.form.submit() {
                Ok(party) => self.request(
                    move |client| async move { sync::create_party(&client, &party).await },
                    Message::Created,
                ),
                Err(err) => {
                    tracing::warn!(error = %err, "Party form rejected");
                    Task::none()
                }
            },
            Message::Synced(result) => {
                self.state.absorb(result);
                Task::none()
            }
            Message::Created(result) => {
                self.state.absorb(result);
                self.form.reset();
                Task::none()
            }
        };

        self.rerender();
        task
    }

    pub fn view(&self) -> Element<'_, Message> {
        widgets::page(&self.tree)
    }

    fn rerender(&mut self) {
        self.tree = view::render(&self.state, &self.form);
    }

    /// Run a sync operation on a clone of the client and map its result.
    fn request<F, Fut>(&self, op: F, to_message: fn(ApiResult<Change>) -> Message) -> Task<Message>
    where
        F: FnOnce(ApiClient) -> Fut,
        Fut: Future<Output = ApiResult<Change>> + Send + 'static,
    {
        Task::perform(op(self.client.clone()), to_message)
    }
}

pub fn run(client: ApiClient) -> iced::Result {
    iced::application(
        move || PartyPlannerApp::boot(client.clone()),
        PartyPlannerApp::update,
        PartyPlannerApp::view,
    )
    .title(PartyPlannerApp::title)
    .window_size((1000.0, 700.0))
    .run()
}
