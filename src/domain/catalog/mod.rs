//! Route catalog domain: entities, namespace formatting and the bootstrap fetch.

pub mod entity;
pub mod namespace;
pub mod service;
