pub mod dns_wire;
pub mod http_echo_mock;

pub use dns_wire::{make_handler, query_bytes, query_message};
pub use http_echo_mock::HttpEchoMock;
