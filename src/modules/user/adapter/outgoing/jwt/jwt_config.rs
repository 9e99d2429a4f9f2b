use std::env;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    fn parse_expiry(key: &str, default: &str) -> Result<i64, String> {
        env::var(key)
            .unwrap_or_else(|_| default.to_string())
            .parse::<i64>()
            .map_err(|_| format!("Invalid {} value", key))
    }

    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let secret_key = env::var("JWT_SECRET").map_err(|_| "JWT_SECRET must be set")?;

        // HS256 requires at least 32 bytes
        if secret_key.len() < 32 {
            return Err(
                "JWT_SECRET must be at least 32 characters long for HS256 algorithm".to_string(),
            );
        }

        let access_token_expiry = Self::parse_expiry("JWT_ACCESS_EXPIRY", "3600")?;
        if access_token_expiry <= 0 || access_token_expiry > 86400 {
            return Err(
                "JWT_ACCESS_EXPIRY must be between 1 and 86400 seconds (24 hours)".to_string(),
            );
        }

        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "TableRise".to_string());

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
    }
}
