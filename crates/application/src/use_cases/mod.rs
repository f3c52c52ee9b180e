pub mod dns;
pub mod startup;

// Re-export use cases
pub use dns::HandleDnsQueryUseCase;
pub use startup::FetchFallbackAddressesUseCase;
