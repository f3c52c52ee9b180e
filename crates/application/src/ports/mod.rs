mod public_address_source;

pub use public_address_source::PublicAddressSource;
