pub mod address_extractor;
pub mod question_dispatcher;
pub mod resolver_config;
pub mod response_builder;

pub use address_extractor::AddressExtractor;
pub use question_dispatcher::QuestionDispatcher;
pub use resolver_config::ResolverConfig;
pub use response_builder::ResponseBuilder;
