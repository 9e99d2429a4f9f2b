use totp_rs::{Algorithm, Secret, TOTP};

use crate::user::application::ports::outgoing::{OtpAuthenticator, OtpEnrollment, OtpError};

const DIGITS: usize = 6;
const SKEW: u8 = 1;
const STEP_SECONDS: u64 = 30;

/// RFC 6238 authenticator storing secrets base32-encoded.
#[derive(Debug, Clone)]
pub struct TotpAuthenticator {
    issuer: String,
}

impl TotpAuthenticator {
    pub fn new(issuer: impl Into<String>) -> Self {
        Self {
            issuer: issuer.into(),
        }
    }

    fn totp(&self, secret_bytes: Vec<u8>, account: &str) -> Result<TOTP, OtpError> {
        TOTP::new(
            Algorithm::SHA1,
            DIGITS,
            SKEW,
            STEP_SECONDS,
            secret_bytes,
            Some(self.issuer.clone()),
            account.to_string(),
        )
        .map_err(|e| OtpError::InvalidSecret(e.to_string()))
    }
}

impl OtpAuthenticator for TotpAuthenticator {
    fn enroll(&self, account: &str) -> Result<OtpEnrollment, OtpError> {
        let secret = Secret::generate_secret();
        let secret_bytes = secret
            .to_bytes()
            .map_err(|e| OtpError::InvalidSecret(e.to_string()))?;

        let totp = self.totp(secret_bytes, account)?;

        Ok(OtpEnrollment {
            secret: secret.to_encoded().to_string(),
            qrcode: totp.get_url(),
        })
    }

    fn verify(&self, secret: &str, token: &str) -> Result<bool, OtpError> {
        let secret_bytes = Secret::Encoded(secret.to_string())
            .to_bytes()
            .map_err(|e| OtpError::InvalidSecret(e.to_string()))?;

        // the account label plays no part in code derivation
        self.totp(secret_bytes, "verify")?
            .check_current(token)
            .map_err(|e| OtpError::Clock(e.to_string()))
    }
}
