use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::fmt;
use uuid::Uuid;

use super::jwt_config::JwtConfig;
use crate::user::application::ports::outgoing::{TokenClaims, TokenError, TokenProvider};

const ACCESS_TOKEN: &str = "access";

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(
        &self,
        user_id: Uuid,
        is_verified: bool,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.config.access_token_expiry);

        let claims = TokenClaims {
            sub: user_id,
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            token_type: ACCESS_TOKEN.to_string(),
            is_verified,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;

        let decoded =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: Token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Token verification failed: Token not yet valid");
                        TokenError::TokenNotYetValid
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: Invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    _ => {
                        tracing::warn!("Token verification failed: Malformed token");
                        TokenError::MalformedToken
                    }
                }
            })?;

        if decoded.claims.token_type != ACCESS_TOKEN {
            tracing::warn!(
                "Token type mismatch: expected 'access', got '{}'",
                decoded.claims.token_type
            );
            return Err(TokenError::MalformedToken);
        }

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(expiry: i64) -> JwtConfig {
        JwtConfig {
            secret_key: "test_secret_key_for_testing_only_32b".to_string(),
            issuer: "TableRise".to_string(),
            access_token_expiry: expiry,
        }
    }

    #[test]
    fn test_generate_and_verify_access_token() {
        let service = JwtTokenService::new(config(3600));
        let user_id = Uuid::new_v4();

        let token = service.generate_access_token(user_id, true).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.token_type, "access");
        assert!(claims.is_verified);
    }

    #[test]
    fn test_unverified_flag_survives_round_trip() {
        let service = JwtTokenService::new(config(3600));
        let token = service.generate_access_token(Uuid::new_v4(), false).unwrap();

        assert!(!service.verify_token(&token).unwrap().is_verified);
    }

    #[test]
    fn test_malformed_token() {
        let service = JwtTokenService::new(config(3600));
        let result = service.verify_token("invalid.jwt.token");
        assert!(matches!(result, Err(TokenError::MalformedToken)));
    }

    #[test]
    fn test_expired_token() {
        // beyond the 30s leeway
        let service = JwtTokenService::new(config(-35));
        let token = service.generate_access_token(Uuid::new_v4(), true).unwrap();

        let result = service.verify_token(&token);
        assert!(matches!(result, Err(TokenError::TokenExpired)));
    }

    #[test]
    fn test_invalid_signature() {
        let service = JwtTokenService::new(config(3600));
        let token = service.generate_access_token(Uuid::new_v4(), true).unwrap();

        let mut other = config(3600);
        other.secret_key = format!("{}_DIFFERENT", other.secret_key);
        let result = JwtTokenService::new(other).verify_token(&token);

        assert!(matches!(result, Err(TokenError::InvalidSignature)));
    }

    #[test]
    fn test_debug_hides_secret() {
        let service = JwtTokenService::new(config(3600));
        let debug = format!("{:?}", service);
        assert!(!debug.contains("test_secret_key"));
    }
}
