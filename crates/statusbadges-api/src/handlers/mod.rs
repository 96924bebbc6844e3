//! Route handlers organized by endpoint.

pub mod badge;
pub mod health;
pub mod presence;
pub mod redirect;
