//! stubdns application layer: the answer policy and the ports it talks through.
pub mod ports;
pub mod services;
pub mod use_cases;
