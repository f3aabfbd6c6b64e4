pub mod export_service;
pub mod response_store;
pub mod stats_service;
