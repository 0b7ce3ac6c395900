//! Server-rendered explorer for a REST API's route documentation catalog.
//!
//! The catalog is fetched once from the configured documentation endpoint
//! and rendered as a two-pane page: a namespace navigation sidebar and a
//! list of expandable per-route panels.

pub mod api;
pub mod app_state;
pub mod config;
pub mod core;
pub mod debug;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod routes;
pub mod view;
