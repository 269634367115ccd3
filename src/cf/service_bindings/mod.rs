//! Service binding module

mod api;
mod models;

pub use models::{ServiceBinding, ServiceBindingEntity};
