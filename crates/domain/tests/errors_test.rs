use wilddns_domain::DomainError;

#[test]
fn test_http_client_error_message() {
    let err = DomainError::HttpClient("no TLS backend".to_string());
    assert_eq!(err.to_string(), "HTTP client error: no TLS backend");
}

#[test]
fn test_address_fetch_error_names_family() {
    let err = DomainError::AddressFetch {
        family: "ipv6".to_string(),
        reason: "HTTP 500".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Failed to fetch external ipv6 address: HTTP 500"
    );
}
