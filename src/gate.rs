//! Access gate
//!
//! Validates a submitted credential against the server-held secret using a
//! fixed-time comparison. The gate returns a plain boolean per request; no
//! session or token is issued. There is no rate limiting or lockout.

use sha2::{Digest, Sha256};

/// Shared-secret gate for chat access
#[derive(Clone)]
pub struct AccessGate {
    secret_digest: [u8; 32],
}

impl AccessGate {
    /// Create a gate for the configured secret
    pub fn new(secret: &str) -> Self {
        Self {
            secret_digest: digest(secret),
        }
    }

    /// Check a candidate credential against the secret.
    ///
    /// Both sides are reduced to SHA-256 digests and the digests compared
    /// with a branch-free fold, so the comparison takes the same time for
    /// every candidate regardless of length or matching prefix.
    pub fn verify(&self, candidate: &str) -> bool {
        let candidate_digest = digest(candidate);

        let mut diff = 0u8;
        for (a, b) in candidate_digest.iter().zip(self.secret_digest.iter()) {
            diff |= a ^ b;
        }
        diff == 0
    }
}

impl std::fmt::Debug for AccessGate {
    // Never print the secret digest
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessGate").finish_non_exhaustive()
    }
}

fn digest(input: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hasher.finalize().into()
}
