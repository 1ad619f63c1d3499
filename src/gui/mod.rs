mod app;
mod message;
mod widgets;

pub use app::{PartyPlannerApp, run};
pub use message::Message;
