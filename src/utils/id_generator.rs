//! Short id generation.
//!
//! Ids are drawn uniformly, with replacement, from a fixed alphabet of upper
//! and lower case ASCII letters plus the digits `1`-`9`. The digit `0` is left
//! out so ids never contain a character easily confused with `O`/`o`.
//!
//! Generation does not check existing records; uniqueness is enforced by the
//! store and collisions are retried by
//! [`crate::application::services::RedirectService`].

use rand::Rng;

/// Characters a generated id may contain.
pub const ALPHABET: &[u8] = b"aAbBcCdDeEfFgGhHiIjJkKlLmMnNoOpPqQrRsStTuUvVwWxXyYzZ123456789";

/// Default length of generated ids.
pub const DEFAULT_ID_LENGTH: usize = 5;

/// Source of short ids.
///
/// Production uses [`RandomIdGenerator`]; tests substitute predictable
/// sequences to exercise collision handling.
pub trait IdGenerator: Send + Sync {
    /// Returns an id of exactly `length` characters.
    fn generate(&self, length: usize) -> String;
}

/// Thread-local RNG backed generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&self, length: usize) -> String {
        generate_id(length)
    }
}

/// Generates a random id of `length` characters from [`ALPHABET`].
pub fn generate_id(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Returns true if `id` has exactly `length` characters, all from [`ALPHABET`].
pub fn is_valid_id(id: &str, length: usize) -> bool {
    id.len() == length && id.bytes().all(|b| ALPHABET.contains(&b))
}
