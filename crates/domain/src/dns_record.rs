pub mod answer;
pub mod record_type;

pub use answer::{DnsAnswer, ANSWER_TTL};
pub use record_type::RecordType;
