//! Authentication service for the shared control-panel password.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Fixed MAC key. Only used to map both sides to equal-length tags.
const CREDENTIAL_KEY: &[u8] = b"robot-control-center/credential";

/// A submitted password does not match the configured secret.
///
/// The message is shown verbatim on the login page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Password errata!")]
pub struct InvalidCredential;

/// Verifies submitted passwords against the configured secret.
///
/// The secret is kept only as an HMAC-SHA256 tag. Candidates are tagged the
/// same way and compared with [`Mac::verify_slice`], so the comparison takes
/// the same time regardless of where the inputs first differ or how long they
/// are. Tag equality is exact string equality of the inputs.
#[derive(Clone)]
pub struct AuthService {
    secret_tag: Vec<u8>,
}

impl AuthService {
    /// Creates a new authentication service for the given secret.
    pub fn new(secret: &str) -> Self {
        Self {
            secret_tag: tag(secret).finalize().into_bytes().to_vec(),
        }
    }

    /// Checks a submitted password.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCredential`] if the password does not match the
    /// configured secret exactly.
    pub fn verify(&self, candidate: &str) -> Result<(), InvalidCredential> {
        tag(candidate)
            .verify_slice(&self.secret_tag)
            .map_err(|_| InvalidCredential)
    }
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService").finish_non_exhaustive()
    }
}

fn tag(input: &str) -> HmacSha256 {
    let mut mac = HmacSha256::new_from_slice(CREDENTIAL_KEY).expect("HMAC accepts any key length");
    mac.update(input.as_bytes());
    mac
}
