mod fetch_fallback_addresses;

pub use fetch_fallback_addresses::FetchFallbackAddressesUseCase;
