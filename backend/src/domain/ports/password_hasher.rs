//! Driven port for one-way password hashing.
//!
//! A synchronous interface is intentional: hashing is CPU-only and must not
//! perform I/O. Adapters wrap a real key-derivation function; tests use the
//! deterministic fixture.

/// Errors raised by password hashing adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordHashError {
    /// The hashing primitive failed to produce a digest.
    #[error("password hashing failed: {message}")]
    Hash { message: String },
    /// The stored digest could not be parsed for verification.
    #[error("stored password digest is malformed: {message}")]
    MalformedDigest { message: String },
}

impl PasswordHashError {
    /// Create a hashing failure with the given message.
    pub fn hash(message: impl Into<String>) -> Self {
        Self::Hash {
            message: message.into(),
        }
    }

    /// Create a malformed-digest failure with the given message.
    pub fn malformed_digest(message: impl Into<String>) -> Self {
        Self::MalformedDigest {
            message: message.into(),
        }
    }
}

/// One-way password transformation used for storage and verification.
pub trait PasswordHasher: Send + Sync {
    /// Produce a storable digest for the plaintext.
    fn hash(&self, plaintext: &str) -> Result<String, PasswordHashError>;

    /// Check the plaintext against a stored digest.
    fn verify(&self, plaintext: &str, digest: &str) -> Result<bool, PasswordHashError>;
}

/// Deterministic hasher for tests and fixtures.
///
/// Prefixes the plaintext so digests are recognisable, never equal to the
/// input, and cheap to verify. Must never back a production wiring.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePasswordHasher;

const FIXTURE_PREFIX: &str = "fixture$";

impl PasswordHasher for FixturePasswordHasher {
    fn hash(&self, plaintext: &str) -> Result<String, PasswordHashError> {
        Ok(format!("{FIXTURE_PREFIX}{plaintext}"))
    }

    fn verify(&self, plaintext: &str, digest: &str) -> Result<bool, PasswordHashError> {
        let Some(stored) = digest.strip_prefix(FIXTURE_PREFIX) else {
            return Err(PasswordHashError::malformed_digest(
                "missing fixture prefix",
            ));
        };
        Ok(stored == plaintext)
    }
}
