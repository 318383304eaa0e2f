//! # API crate — remote data and the login flow
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`UserDirectory`] / [`RecipeSource`] traits and the `reqwest`-based [`DummyJsonClient`] |
//! | [`auth`] | [`authenticate`] and [`AuthFlow`]: demo credential check plus session persistence |
//!
//! Both traits are plain async traits without `Send` bounds: everything runs
//! on the browser's single event loop.

pub mod auth;
pub mod client;

pub use auth::{authenticate, AuthFlow, FILL_ALL_FIELDS};
pub use client::{DummyJsonClient, RecipeSource, UserDirectory};
pub use store::{RecipeRecord, SessionRecord, UserRecord};
