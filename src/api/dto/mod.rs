//! API DTOs

pub mod catalog_dto;

use serde::Serialize;

use crate::domain::catalog::entity::route_catalog::SUCCESS_STATE;

/// Envelope shared with the upstream documentation endpoint.
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub state: &'static str,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            state: SUCCESS_STATE,
            data,
        }
    }
}
