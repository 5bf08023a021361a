//! Gateway webhook signature verification.
//!
//! Implements verification of gateway notification signatures using
//! HMAC-SHA256 over the raw request body, compared in constant time.
//! The gateway sends the digest as lowercase hex in a request header;
//! verification accepts either hex case since comparison happens on
//! the decoded bytes.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::ReconciliationError;

/// Verifier for gateway webhook signatures.
///
/// Signatures cover the raw payload bytes exactly as received, so the
/// body must be verified before any JSON re-serialization.
pub struct WebhookVerifier {
    /// Shared signing secret configured in the gateway dashboard.
    secret: String,
}

impl WebhookVerifier {
    /// Creates a new verifier with the given signing secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Computes the hex encoded HMAC-SHA256 signature for a payload.
    ///
    /// This is the inverse of [`verify`] and exists so that delivery
    /// simulators and tests can produce signatures the verifier accepts.
    ///
    /// [`verify`]: WebhookVerifier::verify
    pub fn sign(&self, payload: &[u8]) -> String {
        hex::encode(self.compute_signature(payload))
    }

    /// Verifies a hex encoded signature against the payload.
    ///
    /// # Errors
    ///
    /// Returns [`ReconciliationError::InvalidSignature`] if the
    /// signature is not valid hex, has the wrong length, or does not
    /// match the expected digest. All three cases are deliberately
    /// indistinguishable to the caller.
    pub fn verify(&self, payload: &[u8], signature: &str) -> Result<(), ReconciliationError> {
        let provided =
            hex::decode(signature).map_err(|_| ReconciliationError::InvalidSignature)?;

        let expected = self.compute_signature(payload);

        if !constant_time_compare(&expected, &provided) {
            return Err(ReconciliationError::InvalidSignature);
        }

        Ok(())
    }

    /// Computes the raw HMAC-SHA256 digest of the payload.
    fn compute_signature(&self, payload: &[u8]) -> Vec<u8> {
        let mut mac =
            Hmac::<Sha256>::new_from_slice(self.secret.as_bytes()).expect("HMAC accepts any key");
        mac.update(payload);
        mac.finalize().into_bytes().to_vec()
    }
}

/// Performs constant-time comparison of two byte slices.
///
/// This prevents timing attacks that could leak information about the expected signature.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
