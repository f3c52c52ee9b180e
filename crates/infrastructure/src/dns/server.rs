use super::message_codec;
use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::{A, AAAA};
use hickory_proto::rr::{DNSClass, Name, RData, Record};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, error, warn};
use wilddns_application::use_cases::HandleDnsQueryUseCase;
use wilddns_domain::{DnsAnswer, DnsQuestion};

/// Wire-level request handler: one datagram in, at most one datagram out.
///
/// Holds no mutable state, so a single instance is shared by every request
/// task.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Decode, answer and encode one datagram.
    ///
    /// Returns `None` when nothing should be sent back: the datagram is
    /// shorter than a DNS header, has QR set (decodable or not), or the
    /// reply could not be encoded.
    pub fn handle_raw(&self, query: &[u8]) -> Option<Vec<u8>> {
        let reply = match message_codec::decode(query) {
            Ok(request) => self.handle_message(&request)?,
            Err(e) => {
                if message_codec::is_response(query) {
                    debug!(error = %e, "Ignoring malformed DNS response sent to the listener");
                    return None;
                }
                let id = message_codec::header_id(query)?;
                debug!(error = %e, id, "Malformed query, answering FORMERR");
                error_reply(id, OpCode::Query, ResponseCode::FormErr)
            }
        };

        match message_codec::encode(&reply) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                error!(error = %e, id = reply.id(), "Failed to encode reply");
                None
            }
        }
    }

    pub fn handle_message(&self, request: &Message) -> Option<Message> {
        if request.message_type() == MessageType::Response {
            debug!(id = request.id(), "Ignoring DNS response sent to the listener");
            return None;
        }

        if request.op_code() != OpCode::Query {
            warn!(id = request.id(), op_code = ?request.op_code(), "Unsupported opcode");
            let mut reply = reply_to(request);
            reply.set_response_code(ResponseCode::NotImp);
            return Some(reply);
        }

        let questions: Vec<DnsQuestion> = request
            .queries()
            .iter()
            .map(|query| {
                DnsQuestion::new(
                    query.name().to_ascii(),
                    RecordTypeMapper::from_hickory(query.query_type()),
                )
            })
            .collect();

        for question in &questions {
            debug!(
                id = request.id(),
                name = %question.name,
                record_type = %question.record_type,
                "DNS query received"
            );
        }

        let answers = self.use_case.execute(&questions);

        // Each address question gets exactly one answer, in question order.
        let owners = request
            .queries()
            .iter()
            .zip(&questions)
            .filter(|(_, question)| question.record_type.is_address())
            .map(|(query, _)| query.name());

        let mut reply = reply_to(request);
        reply.add_answers(
            owners
                .zip(&answers)
                .map(|(owner, answer)| to_record(owner.clone(), answer)),
        );

        debug!(id = request.id(), answers = answers.len(), "Sending response");
        Some(reply)
    }
}

/// Header of a direct response to `request`: same id and opcode, QR set,
/// RD and CD copied, every question echoed.
fn reply_to(request: &Message) -> Message {
    let mut reply = Message::new();
    reply
        .set_id(request.id())
        .set_message_type(MessageType::Response)
        .set_op_code(request.op_code())
        .set_recursion_desired(request.recursion_desired())
        .set_checking_disabled(request.checking_disabled())
        .set_response_code(ResponseCode::NoError)
        .add_queries(request.queries().to_vec());
    reply
}

fn error_reply(id: u16, op_code: OpCode, code: ResponseCode) -> Message {
    let mut reply = Message::new();
    reply
        .set_id(id)
        .set_message_type(MessageType::Response)
        .set_op_code(op_code)
        .set_response_code(code);
    reply
}

/// An answer without an address becomes a record of the requested type
/// with empty RDATA.
fn to_record(name: Name, answer: &DnsAnswer) -> Record {
    let mut record = match answer.address {
        Some(IpAddr::V4(ipv4)) => Record::from_rdata(name, answer.ttl, RData::A(A(ipv4))),
        Some(IpAddr::V6(ipv6)) => Record::from_rdata(name, answer.ttl, RData::AAAA(AAAA(ipv6))),
        None => Record::with(
            name,
            RecordTypeMapper::to_hickory(answer.record_type),
            answer.ttl,
        ),
    };
    record.set_dns_class(DNSClass::IN);
    record
}
