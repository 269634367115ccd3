//! Audit event module

mod api;
mod models;

pub use api::event_types;
pub use models::{Event, EventEntity};
