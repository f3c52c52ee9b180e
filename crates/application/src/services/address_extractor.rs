use fancy_regex::Regex;
use tracing::warn;
use wilddns_domain::{AddressFamily, DomainError};

/// Four dot-separated groups of 1-3 digits. Group values are not
/// range-checked, so `999.0.0.1` still matches.
const IPV4_PATTERN: &str = r"\b(?:[0-9]{1,3}\.){3}[0-9]{1,3}\b";

/// IPv6 textual forms with every `:` written as `-`, one pattern per form.
const IPV6_PATTERNS: [&str; 12] = [
    // 1-2-3-4-5-6-7-8
    r"(?:[0-9a-fA-F]{1,4}-){7}[0-9a-fA-F]{1,4}",
    // 1--  ...  1-2-3-4-5-6-7--
    r"(?:[0-9a-fA-F]{1,4}-){1,7}-",
    r"(?:[0-9a-fA-F]{1,4}-){1,6}-[0-9a-fA-F]{1,4}",
    r"(?:[0-9a-fA-F]{1,4}-){1,5}(?:-[0-9a-fA-F]{1,4}){1,2}",
    r"(?:[0-9a-fA-F]{1,4}-){1,4}(?:-[0-9a-fA-F]{1,4}){1,3}",
    r"(?:[0-9a-fA-F]{1,4}-){1,3}(?:-[0-9a-fA-F]{1,4}){1,4}",
    r"(?:[0-9a-fA-F]{1,4}-){1,2}(?:-[0-9a-fA-F]{1,4}){1,5}",
    r"[0-9a-fA-F]{1,4}-(?:(?:-[0-9a-fA-F]{1,4}){1,6})",
    // --1  ...  --2-3-4-5-6-7-8, and --
    r"-(?:(?:-[0-9a-fA-F]{1,4}){1,7}|-)",
    // link-local with zone index
    r"fe80-(?:-[0-9a-fA-F]{0,4}){0,4}%[0-9a-zA-Z]{1,}",
    // --ffff-1.2.3.4 (IPv4-mapped) and --1.2.3.4
    r"--(?:ffff(?:-0{1,4}){0,1}-){0,1}(?:(?:25[0-5]|(?:2[0-4]|1{0,1}[0-9]){0,1}[0-9])\.){3,3}(?:25[0-5]|(?:2[0-4]|1{0,1}[0-9]){0,1}[0-9])",
    // 64-ff9b--1.2.3.4 (IPv4-embedded)
    r"(?:[0-9a-fA-F]{1,4}-){1,4}-(?:(?:25[0-5]|(?:2[0-4]|1{0,1}[0-9]){0,1}[0-9])\.){3,3}(?:25[0-5]|(?:2[0-4]|1{0,1}[0-9]){0,1}[0-9])",
];

/// Finds an address of a given family embedded in a hostname.
///
/// Hostnames cannot carry `:`, so IPv6 addresses are written with `-` in
/// its place (`2001-db8--1.example.com`). The extractor returns the first
/// address-shaped substring, with colons restored for IPv6. It does not
/// check that the result is a valid address.
///
/// When several IPv6 forms match at the same leftmost position the longest
/// one wins, so `2001-db8--1` yields `2001:db8::1` rather than the shorter
/// `2001:db8::` prefix.
pub struct AddressExtractor {
    ipv4: Vec<Regex>,
    ipv6: Vec<Regex>,
}

impl AddressExtractor {
    pub fn new() -> Result<Self, DomainError> {
        Ok(Self {
            ipv4: compile(&[IPV4_PATTERN])?,
            ipv6: compile(&IPV6_PATTERNS)?,
        })
    }

    pub fn extract(&self, hostname: &str, family: AddressFamily) -> Option<String> {
        match family {
            AddressFamily::V4 => leftmost_longest(&self.ipv4, hostname).map(str::to_string),
            AddressFamily::V6 => leftmost_longest(&self.ipv6, hostname).map(restore_colons),
        }
    }
}

/// Turns the hyphenated hostname form of an IPv6 address back into its
/// colon form.
pub fn restore_colons(address: &str) -> String {
    address.replace('-', ":")
}

fn compile(patterns: &[&str]) -> Result<Vec<Regex>, DomainError> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern).map_err(|e| {
                DomainError::InvalidPattern(format!("Invalid pattern '{}': {}", pattern, e))
            })
        })
        .collect()
}

fn leftmost_longest<'h>(patterns: &[Regex], hostname: &'h str) -> Option<&'h str> {
    let mut best: Option<(usize, usize)> = None;

    for pattern in patterns {
        let found = match pattern.find(hostname) {
            Ok(Some(m)) => (m.start(), m.end()),
            Ok(None) => continue,
            Err(e) => {
                warn!(error = %e, hostname = %hostname, "Address pattern match failed");
                continue;
            }
        };

        best = match best {
            Some((start, end))
                if start < found.0 || (start == found.0 && end - start >= found.1 - found.0) =>
            {
                Some((start, end))
            }
            _ => Some(found),
        };
    }

    best.map(|(start, end)| &hostname[start..end])
}
