//! Diagnostic message fingerprinting
//!
//! Dumps never contain a diagnostic's raw message text; they contain a
//! fixed-length digest of it. Baselines therefore survive cosmetic rewording
//! of how a message is phrased elsewhere in the line (severity, id, span),
//! while any change to the message text itself still changes the dump.
//!
//! The digest is SHA-256 over the UTF-8 bytes of the full message, rendered
//! as 64 lowercase hex characters with no truncation. A non-cryptographic
//! string hash would risk colliding two distinct messages into the same
//! fingerprint, which would make the dump blind to exactly the change it is
//! supposed to detect.

use sha2::{Digest, Sha256};

/// Fixed-length fingerprint of a diagnostic message
pub fn fingerprint(message: &str) -> String {
    hex::encode(Sha256::digest(message.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digests() {
        // Standard SHA-256 test vectors.
        assert_eq!(
            fingerprint(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            fingerprint("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_fingerprint_is_stable() {
        let message = "The directive 'page' expects an argument";
        assert_eq!(fingerprint(message), fingerprint(message));
    }

    #[test]
    fn test_distinct_messages_differ() {
        assert_ne!(fingerprint("Unexpected token"), fingerprint("Unexpected token."));
    }

    #[test]
    fn test_shape() {
        let digest = fingerprint("anything");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
