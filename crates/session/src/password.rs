//! Salted password hashing for roster credentials.
//!
//! Credentials are stored as `salt$digest`, both base64url encoded,
//! where `digest = SHA-256(salt || password)`. Plaintext is never
//! stored or compared.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use entities::Credential;
use rand::Rng;
use sha2::{Digest, Sha256};

const SALT_LEN: usize = 16;

/// Hashes a password with a fresh random salt.
pub fn hash_password(password: &str) -> Credential {
    let mut rng = rand::rng();
    let salt: Vec<u8> = (0..SALT_LEN).map(|_| rng.random::<u8>()).collect();
    encode(&salt, password)
}

/// Verifies a password against a stored credential.
pub fn verify_password(password: &str, credential: &Credential) -> bool {
    let Some((salt_part, _)) = credential.encoded().split_once('$') else {
        return false;
    };
    let Ok(salt) = URL_SAFE_NO_PAD.decode(salt_part) else {
        return false;
    };
    encode(&salt, password).encoded() == credential.encoded()
}

fn encode(salt: &[u8], password: &str) -> Credential {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    let digest = hasher.finalize();
    Credential::from_encoded(format!(
        "{}${}",
        URL_SAFE_NO_PAD.encode(salt),
        URL_SAFE_NO_PAD.encode(digest)
    ))
}
