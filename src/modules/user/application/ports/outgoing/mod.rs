pub mod otp_authenticator;
pub mod password_hasher;
pub mod token_provider;
pub mod user_details_repository;
pub mod user_repository;

pub use otp_authenticator::{OtpAuthenticator, OtpEnrollment, OtpError};
pub use password_hasher::{HashError, PasswordHasher};
pub use token_provider::{TokenClaims, TokenError, TokenProvider};
pub use user_details_repository::{UserDetailsRepository, UserDetailsRepositoryError};
pub use user_repository::{UserRepository, UserRepositoryError};
