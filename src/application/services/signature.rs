use hmac::{Hmac, Mac};
use sha1::Sha1;
use subtle::ConstantTimeEq;

type HmacSha1 = Hmac<Sha1>;

/// Shared-secret key for signing and verifying callback payloads.
/// Signatures are hex-encoded HMAC-SHA1 over the exact raw body bytes;
/// any re-serialized form would break verification on whitespace or
/// key-order differences.
#[derive(Clone)]
pub struct SignatureKey {
    secret: Vec<u8>,
}

impl SignatureKey {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
        }
    }

    pub fn sign(&self, payload: &[u8]) -> String {
        hex::encode(self.mac(payload).finalize().into_bytes())
    }

    /// Constant-time comparison of a received hex signature against the
    /// one computed over `payload`. Malformed hex and length mismatches
    /// are non-equal without an early-exit byte comparison.
    pub fn verify(&self, provided_hex: &str, payload: &[u8]) -> bool {
        let Ok(provided) = hex::decode(provided_hex.trim()) else {
            return false;
        };
        let expected = self.mac(payload).finalize().into_bytes();
        expected.as_slice().ct_eq(provided.as_slice()).into()
    }

    fn mac(&self, payload: &[u8]) -> HmacSha1 {
        // HMAC accepts keys of any length, so construction cannot fail.
        let mut mac = HmacSha1::new_from_slice(&self.secret).expect("hmac key length");
        mac.update(payload);
        mac
    }
}

impl std::fmt::Debug for SignatureKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignatureKey").finish_non_exhaustive()
    }
}
