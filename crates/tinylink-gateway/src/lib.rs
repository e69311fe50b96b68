//! HTTP gateway for tinylink.
//!
//! Exposes the resolve (`POST /s`), redirect (`GET /s/{code}`) and health
//! endpoints on top of a [`Registry`][tinylink_core::Registry].

pub mod app;
pub mod auth;
pub mod error;
pub mod handlers;
pub mod input;
pub mod model;
pub mod state;

pub use app::App;
pub use error::AppError;
pub use state::AppState;
