pub mod catalog_runtime_state;
pub mod catalog_runtime_state_manager;
pub mod catalog_runtime_state_repository;
pub mod catalog_runtime_state_repository_trait;
