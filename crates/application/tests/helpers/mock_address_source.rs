#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;
use wilddns_application::ports::PublicAddressSource;
use wilddns_domain::{AddressFamily, DomainError};

pub struct MockPublicAddressSource {
    responses: RwLock<HashMap<AddressFamily, Result<String, DomainError>>>,
    calls: AtomicUsize,
}

impl MockPublicAddressSource {
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_address(self, family: AddressFamily, body: &str) -> Self {
        self.responses
            .write()
            .unwrap()
            .insert(family, Ok(body.to_string()));
        self
    }

    pub fn with_failure(self, family: AddressFamily) -> Self {
        self.responses.write().unwrap().insert(
            family,
            Err(DomainError::AddressFetch {
                family: family.to_string(),
                reason: "connection refused".to_string(),
            }),
        );
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PublicAddressSource for MockPublicAddressSource {
    async fn fetch(&self, family: AddressFamily) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .read()
            .unwrap()
            .get(&family)
            .cloned()
            .unwrap_or_else(|| {
                Err(DomainError::AddressFetch {
                    family: family.to_string(),
                    reason: "no response configured".to_string(),
                })
            })
    }
}
