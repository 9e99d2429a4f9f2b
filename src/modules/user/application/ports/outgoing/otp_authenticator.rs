#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OtpError {
    #[error("Invalid two factor secret: {0}")]
    InvalidSecret(String),

    #[error("Clock error: {0}")]
    Clock(String),
}

/// A freshly generated secret and the otpauth URI rendered as QR code by clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpEnrollment {
    pub secret: String,
    pub qrcode: String,
}

pub trait OtpAuthenticator: Send + Sync {
    fn enroll(&self, account: &str) -> Result<OtpEnrollment, OtpError>;
    fn verify(&self, secret: &str, token: &str) -> Result<bool, OtpError>;
}
