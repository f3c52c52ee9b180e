//! Wire encoding and decoding of DNS messages with `hickory-proto`.

use hickory_proto::op::Message;
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use wilddns_domain::DomainError;

pub const HEADER_LEN: usize = 12;

pub fn decode(bytes: &[u8]) -> Result<Message, DomainError> {
    Message::from_vec(bytes)
        .map_err(|e| DomainError::InvalidDnsMessage(format!("Failed to parse DNS message: {}", e)))
}

pub fn encode(message: &Message) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);

    message.emit(&mut encoder).map_err(|e| {
        DomainError::InvalidDnsMessage(format!("Failed to serialize DNS message: {}", e))
    })?;

    Ok(buf)
}

/// Transaction id of a datagram that is at least a full header long.
pub fn header_id(bytes: &[u8]) -> Option<u16> {
    if bytes.len() < HEADER_LEN {
        return None;
    }
    Some(u16::from_be_bytes([bytes[0], bytes[1]]))
}

/// Whether the QR bit is set, read straight from the header so it works on
/// datagrams that do not decode.
pub fn is_response(bytes: &[u8]) -> bool {
    bytes.len() >= HEADER_LEN && bytes[2] & 0x80 != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_id_requires_full_header() {
        assert_eq!(header_id(&[0xab, 0xcd]), None);
        assert_eq!(header_id(&[0u8; 11]), None);

        let mut header = [0u8; HEADER_LEN];
        header[0] = 0xab;
        header[1] = 0xcd;
        assert_eq!(header_id(&header), Some(0xabcd));
    }

    #[test]
    fn test_is_response_reads_qr_bit() {
        let mut header = [0u8; HEADER_LEN];
        assert!(!is_response(&header));

        header[2] = 0x81;
        assert!(is_response(&header));
        assert!(!is_response(&header[..3]));
    }

    #[test]
    fn test_decode_garbage_is_invalid_message() {
        let result = decode(&[0xff; 5]);
        assert!(matches!(result, Err(DomainError::InvalidDnsMessage(_))));
    }
}
