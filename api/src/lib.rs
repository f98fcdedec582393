//! HTTP API layer for the pizza order backend
//!
//! A thin actix-web transport over `po_core`: JSON bodies in, the core's
//! typed results out, each error kind mapped to one status code.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod routes;

pub use app::create_app;
pub use routes::AppState;
