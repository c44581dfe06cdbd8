use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngCore;
use uuid::Uuid;

/// Generate a random id of exactly `length` characters from `[a-z0-9]`.
///
/// Draws cryptographically strong random bytes, encodes them as URL-safe
/// base64, lowercases, and strips everything outside the alphabet,
/// accumulating across draws until `length` characters survive.
///
/// The alphabet never contains `-` or `_`: ids end up embedded in markup and
/// URLs, where separator characters get rewritten by client-side tooling.
///
/// Each draw requests 3x `length` raw bytes, so one draw almost always
/// suffices despite the ~62/64 filtering survival rate.
pub fn random_id(length: usize) -> String {
    let mut rng = rand::rng();
    let mut raw = vec![0u8; length.saturating_mul(3)];
    let mut id = String::with_capacity(length);
    while id.len() < length {
        rng.fill_bytes(&mut raw);
        let encoded = URL_SAFE_NO_PAD.encode(&raw).to_lowercase();
        id.extend(
            encoded
                .chars()
                .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
        );
    }
    id.truncate(length);
    id
}

/// Generate a random UUID (version 4) in canonical hyphenated form.
///
/// Used by the `uuid` strategy, which trades readability for skipping the
/// existence check entirely.
pub fn uuid_id() -> String {
    Uuid::new_v4().to_string()
}
