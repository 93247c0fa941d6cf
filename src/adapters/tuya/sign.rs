//! Request signing for the Tuya OpenAPI.
//!
//! Every call carries `sign = UPPER(hex(HMAC-SHA256(access_key, message)))`
//! where `message` is `client_id [+ access_token] + t + stringToSign` and
//! `stringToSign` is the request method, the SHA-256 of the body, an empty
//! signed-headers line, and the path with query string.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

/// Lowercase hex SHA-256 of a request body.
pub fn body_hash(body: &[u8]) -> String {
    hex_encode(&Sha256::digest(body))
}

/// Canonical string for a request. No headers participate in the signature.
pub fn string_to_sign(method: &str, body: &[u8], path_and_query: &str) -> String {
    format!("{}\n{}\n\n{}", method, body_hash(body), path_and_query)
}

/// Uppercase hex HMAC-SHA256 over the canonical message.
pub fn sign(access_key: &str, message: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(access_key.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    hex_encode_upper(&mac.finalize().into_bytes())
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

fn hex_encode_upper(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02X}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_hashes_to_the_known_digest() {
        // SHA-256 of the empty string.
        assert_eq!(
            body_hash(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn sign_matches_rfc_4231_case_2() {
        // RFC 4231 HMAC-SHA256 test case 2, uppercased.
        assert_eq!(
            sign("Jefe", "what do ya want for nothing?"),
            "5BDCC146BF60754E6A042426089575C75A003F089D2739839DEC58B964EC3843"
        );
    }

    #[test]
    fn string_to_sign_layout() {
        let canonical = string_to_sign("POST", b"", "/v1.0/token?grant_type=1");
        let lines: Vec<&str> = canonical.split('\n').collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "POST");
        assert_eq!(lines[1], body_hash(b""));
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "/v1.0/token?grant_type=1");
    }

    #[test]
    fn signature_is_64_uppercase_hex_chars() {
        let signature = sign("secret", "message");
        assert_eq!(signature.len(), 64);
        assert!(signature
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn signature_depends_on_the_key() {
        assert_ne!(sign("key-a", "message"), sign("key-b", "message"));
        assert_eq!(sign("key-a", "message"), sign("key-a", "message"));
    }
}
