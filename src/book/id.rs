use rand::Rng;

/// Length of generated book ids.
pub const ID_LEN: usize = 16;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Generate a random, URL-safe book id of [`ID_LEN`] characters.
///
/// 64 symbols over 16 positions: collisions are not checked for.
pub fn generate_id() -> String {
    let mut rng = rand::rng();
    (0..ID_LEN)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
