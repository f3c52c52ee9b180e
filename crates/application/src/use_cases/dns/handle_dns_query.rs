use crate::services::{QuestionDispatcher, ResolverConfig};
use std::sync::Arc;
use tracing::debug;
use wilddns_domain::{DnsAnswer, DnsQuestion};

/// Use case: answer every question of one query
///
/// Questions are dispatched in order and the answers concatenated in the
/// same order. A query whose questions all go unanswered yields an empty
/// answer list, not an error.
pub struct HandleDnsQueryUseCase {
    dispatcher: QuestionDispatcher,
}

impl HandleDnsQueryUseCase {
    pub fn new(resolver: Arc<ResolverConfig>) -> Self {
        Self {
            dispatcher: QuestionDispatcher::new(resolver),
        }
    }

    pub fn execute(&self, questions: &[DnsQuestion]) -> Vec<DnsAnswer> {
        let answers: Vec<DnsAnswer> = questions
            .iter()
            .filter_map(|question| self.dispatcher.dispatch(question))
            .collect();

        for answer in &answers {
            debug!(
                name = %answer.name,
                record_type = %answer.record_type,
                address = ?answer.address,
                "Answer resolved"
            );
        }

        answers
    }
}
