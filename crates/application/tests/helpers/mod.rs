pub mod mock_address_source;

pub use mock_address_source::MockPublicAddressSource;
