use super::{ResolverConfig, ResponseBuilder};
use std::sync::Arc;
use tracing::debug;
use wilddns_domain::{AddressFamily, DnsAnswer, DnsQuestion};

/// Routes one question to the extractor for its family.
///
/// A yields an IPv4 answer, AAAA an IPv6 answer; every other type yields
/// nothing, which is not an error.
pub struct QuestionDispatcher {
    resolver: Arc<ResolverConfig>,
}

impl QuestionDispatcher {
    pub fn new(resolver: Arc<ResolverConfig>) -> Self {
        Self { resolver }
    }

    pub fn dispatch(&self, question: &DnsQuestion) -> Option<DnsAnswer> {
        let Some(family) = AddressFamily::from_record_type(question.record_type) else {
            debug!(
                name = %question.name,
                record_type = %question.record_type,
                "Unsupported record type, no answer"
            );
            return None;
        };

        let address = self.resolver.resolve_address(&question.name, family);
        Some(ResponseBuilder::build(family, &question.name, &address))
    }
}
