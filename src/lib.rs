pub mod authentication;
pub mod configuration;
pub mod domain;
pub mod scenarios;
pub mod session;
pub mod startup;
pub mod telemetry;
