#![allow(dead_code)]

use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::sync::Arc;
use wilddns_application::services::ResolverConfig;
use wilddns_application::use_cases::HandleDnsQueryUseCase;
use wilddns_domain::FallbackAddresses;
use wilddns_infrastructure::dns::DnsServerHandler;

pub const FALLBACK_V4: &str = "203.0.113.7";
pub const FALLBACK_V6: &str = "2001:db8::7";

pub fn make_handler() -> DnsServerHandler {
    make_handler_with(FallbackAddresses::new(FALLBACK_V4, FALLBACK_V6))
}

pub fn make_handler_with(fallback: FallbackAddresses) -> DnsServerHandler {
    let resolver = ResolverConfig::new(fallback).unwrap();
    let use_case = HandleDnsQueryUseCase::new(Arc::new(resolver));
    DnsServerHandler::new(Arc::new(use_case))
}

pub fn query_message(id: u16, questions: &[(&str, RecordType)]) -> Message {
    let mut message = Message::new();
    message
        .set_id(id)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true);
    for (name, record_type) in questions {
        message.add_query(Query::query(Name::from_ascii(name).unwrap(), *record_type));
    }
    message
}

pub fn query_bytes(id: u16, questions: &[(&str, RecordType)]) -> Vec<u8> {
    to_bytes(&query_message(id, questions))
}

pub fn to_bytes(message: &Message) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut encoder = BinEncoder::new(&mut buf);
    message.emit(&mut encoder).unwrap();
    buf
}
