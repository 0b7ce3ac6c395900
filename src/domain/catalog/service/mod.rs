pub mod catalog_bootstrap_service;
