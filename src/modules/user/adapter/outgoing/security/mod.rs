mod argon2_hasher;
mod totp_authenticator;

pub use argon2_hasher::Argon2Hasher;
pub use totp_authenticator::TotpAuthenticator;
