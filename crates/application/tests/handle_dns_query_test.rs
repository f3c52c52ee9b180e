use std::net::IpAddr;
use std::sync::Arc;
use wilddns_application::services::ResolverConfig;
use wilddns_application::use_cases::HandleDnsQueryUseCase;
use wilddns_domain::{DnsQuestion, FallbackAddresses, RecordType};

fn make_use_case() -> HandleDnsQueryUseCase {
    let resolver =
        ResolverConfig::new(FallbackAddresses::new("203.0.113.7", "2001:db8::7")).unwrap();
    HandleDnsQueryUseCase::new(Arc::new(resolver))
}

fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

#[test]
fn test_single_question_single_answer() {
    let answers = make_use_case().execute(&[DnsQuestion::new(
        "192.168.1.5.example.com.",
        RecordType::A,
    )]);

    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0].address, Some(ip("192.168.1.5")));
}

#[test]
fn test_answers_follow_question_order() {
    let answers = make_use_case().execute(&[
        DnsQuestion::new("2001-db8--1.example.com.", RecordType::AAAA),
        DnsQuestion::new("example.com.", RecordType::Other(15)),
        DnsQuestion::new("10.0.0.1.example.com.", RecordType::A),
        DnsQuestion::new("example.com.", RecordType::A),
    ]);

    assert_eq!(answers.len(), 3);
    assert_eq!(&*answers[0].name, "2001-db8--1.example.com.");
    assert_eq!(answers[0].address, Some(ip("2001:db8::1")));
    assert_eq!(&*answers[1].name, "10.0.0.1.example.com.");
    assert_eq!(answers[1].address, Some(ip("10.0.0.1")));
    assert_eq!(&*answers[2].name, "example.com.");
    assert_eq!(answers[2].address, Some(ip("203.0.113.7")));
}

#[test]
fn test_all_answers_have_zero_ttl() {
    let answers = make_use_case().execute(&[
        DnsQuestion::new("1.2.3.4.example.com.", RecordType::A),
        DnsQuestion::new("example.com.", RecordType::AAAA),
    ]);

    assert_eq!(answers.len(), 2);
    assert!(answers.iter().all(|a| a.ttl == 0));
}

#[test]
fn test_unsupported_only_yields_empty_answers() {
    let answers = make_use_case().execute(&[DnsQuestion::new("example.com.", RecordType::Other(15))]);
    assert!(answers.is_empty());
}

#[test]
fn test_no_questions_yields_empty_answers() {
    assert!(make_use_case().execute(&[]).is_empty());
}

#[test]
fn test_use_case_is_shareable_across_threads() {
    let use_case = Arc::new(make_use_case());

    let handles: Vec<_> = (1..=4u8)
        .map(|i| {
            let use_case = Arc::clone(&use_case);
            std::thread::spawn(move || {
                let name = format!("10.0.0.{}.example.com.", i);
                use_case.execute(&[DnsQuestion::new(name, RecordType::A)])
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let answers = handle.join().unwrap();
        assert_eq!(answers[0].address, Some(ip(&format!("10.0.0.{}", i + 1))));
    }
}
