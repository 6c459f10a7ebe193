// src/domain/identity.rs
use base64::Engine;
use sha2::{Digest, Sha256};

pub const SYNTHETIC_PREFIX: &str = "synth:";
const SYNTHETIC_ID_BYTES: usize = 12;

/// Build a stable id for a record the provider sent without one.
/// The same record at the same position always gets the same id, so a
/// repeated search doesn't reshuffle identities.
pub fn synthesize_id(index: usize, title: &str, location: &str, price: Option<u64>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(index.to_le_bytes());
    hasher.update(title.as_bytes());
    hasher.update([0u8]);
    hasher.update(location.as_bytes());
    hasher.update([0u8]);
    hasher.update(price.unwrap_or(0).to_le_bytes());
    let digest = hasher.finalize();

    format!(
        "{SYNTHETIC_PREFIX}{}",
        base64_url_nopad(&digest[..SYNTHETIC_ID_BYTES])
    )
}

/// Suffix a source id that repeats within one response with its position.
/// Example: "12345#3"
pub fn disambiguate(raw_id: &str, index: usize) -> String {
    format!("{}#{index}", raw_id.trim())
}

fn base64_url_nopad(bytes: &[u8]) -> String {
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}
