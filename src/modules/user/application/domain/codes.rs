use rand::{distributions::Alphanumeric, Rng};

const CODE_LENGTH: usize = 6;

/// One-time code sent by email.
pub fn generate_verification_code() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(CODE_LENGTH)
        .map(|c| char::from(c).to_ascii_uppercase())
        .collect()
}

/// Discriminator shown next to a nickname, e.g. `#0421`.
pub fn generate_tag() -> String {
    format!("#{:04}", rand::thread_rng().gen_range(0..10_000))
}
