mod auth;
mod client;
mod event;
mod repo;

pub use client::Client;
pub use event::{Action, EventPayload};
pub use repo::RepoContext;

pub(crate) use auth::resolve_token;
