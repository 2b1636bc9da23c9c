pub mod assertions;
pub mod authentication;
pub mod configuration;
pub mod domain;
pub mod journey_client;
pub mod telemetry;
pub mod utils;
