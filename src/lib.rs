pub mod aggregation;
pub mod app_state;
pub mod configuration;
pub mod domain;
pub mod request_id;
pub mod routes;
pub mod startup;
pub mod storage;
pub mod telemetry;
