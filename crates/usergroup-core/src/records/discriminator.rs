use sha2::{Digest, Sha256};

use super::layout::DISCRIMINATOR_LEN;

/// Anchor discriminator: the first 8 bytes of `sha256("<namespace>:<name>")`.
///
/// Accounts use the `account` namespace and events the `event` namespace.
pub fn anchor_discriminator(namespace: &str, name: &str) -> [u8; DISCRIMINATOR_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(namespace.as_bytes());
    hasher.update(b":");
    hasher.update(name.as_bytes());
    let digest = hasher.finalize();
    let mut out = [0u8; DISCRIMINATOR_LEN];
    out.copy_from_slice(&digest[..DISCRIMINATOR_LEN]);
    out
}
