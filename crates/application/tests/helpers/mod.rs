#![allow(dead_code)]

mod mock_ports;

pub use messages::*;
pub use mock_ports::*;
