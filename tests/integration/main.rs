//! HTTP-level integration tests, run against the real router over an
//! in-memory presence store.

mod badge_test;
mod health_test;
mod helpers;
mod presence_test;
mod redirect_test;
