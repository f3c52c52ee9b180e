//! wilddns application layer: embedded-address extraction, per-question
//! dispatch and answer aggregation.
pub mod ports;
pub mod services;
pub mod use_cases;
