use crate::core::{ApiResult, Change};
use crate::view::{Action, Field};

#[derive(Debug, Clone)]
pub enum Message {
    Act(Action),
    Edit(Field, String),
    Synced(ApiResult<Change>),
    /// Result of a form submission; the form resets whatever the outcome.
    Created(ApiResult<Change>),
}
