//! Ed25519 key pairs issued alongside digital IDs.
//!
//! The registry stores only the PEM public-key artifact; the private half is
//! returned to the caller once and never retained.

use ed25519_dalek::pkcs8::spki::der::pem::LineEnding;
use ed25519_dalek::pkcs8::spki::EncodePublicKey;
use ed25519_dalek::{SigningKey, VerifyingKey};
use rand::rngs::OsRng;

use crate::error::CryptoError;

/// A freshly generated signing/verifying pair.
pub struct IssuedKeyPair {
    pub signing: SigningKey,
    pub verifying: VerifyingKey,
}

/// Generate a new Ed25519 key pair from the OS RNG.
pub fn generate_keypair() -> IssuedKeyPair {
    let signing = SigningKey::generate(&mut OsRng);
    let verifying = signing.verifying_key();
    IssuedKeyPair { signing, verifying }
}

/// PEM-encode a public key (SubjectPublicKeyInfo).
pub fn public_key_pem(key: &VerifyingKey) -> Result<String, CryptoError> {
    key.to_public_key_pem(LineEnding::LF)
        .map_err(|e| CryptoError::Pem(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_keys_differ() {
        let a = generate_keypair();
        let b = generate_keypair();
        assert_ne!(a.verifying.to_bytes(), b.verifying.to_bytes());
    }

    #[test]
    fn public_key_pem_is_spki() {
        let pair = generate_keypair();
        let pem = public_key_pem(&pair.verifying).unwrap();
        assert!(pem.starts_with("-----BEGIN PUBLIC KEY-----"));
        assert!(pem.trim_end().ends_with("-----END PUBLIC KEY-----"));
    }

    #[test]
    fn verifying_key_matches_signing_key() {
        let pair = generate_keypair();
        assert_eq!(
            pair.signing.verifying_key().to_bytes(),
            pair.verifying.to_bytes()
        );
    }
}
