use anyhow::{Context, Result};
use std::env;

/// Outgoing mail transport.
#[derive(Debug, Clone, PartialEq)]
pub enum SmtpConfig {
    /// Unauthenticated local catcher (Mailpit, MailHog).
    Local { host: String, port: u16 },
    Relay {
        server: String,
        username: String,
        password: String,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub email_from: String,
    pub smtp: SmtpConfig,
    pub two_factor_issuer: String,
}

fn required(key: &str) -> Result<String> {
    env::var(key).with_context(|| format!("{} is not set", key))
}

impl AppConfig {
    pub fn environment() -> String {
        env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string())
    }

    /// Loads `.env.{RUST_ENV}` and falls back to `.env`.
    pub fn load_dotenv() {
        let env_file = format!(".env.{}", Self::environment());
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }
    }

    pub fn from_env() -> Result<Self> {
        let environment = Self::environment();

        let port = required("PORT")?
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let smtp = if environment == "test" {
            SmtpConfig::Local {
                host: env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string()),
                port: env::var("SMTP_PORT")
                    .unwrap_or_else(|_| "1025".to_string())
                    .parse()
                    .context("Invalid SMTP_PORT")?,
            }
        } else {
            SmtpConfig::Relay {
                server: required("SMTP_SERVER")?,
                username: required("SMTP_USERNAME")?,
                password: required("SMTP_PASSWORD")?,
            }
        };

        Ok(Self {
            host: required("HOST")?,
            port,
            database_url: required("DATABASE_URL")?,
            email_from: required("EMAIL_FROM")?,
            smtp,
            two_factor_issuer: env::var("TWO_FACTOR_ISSUER")
                .unwrap_or_else(|_| "TableRise".to_string()),
            environment,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_url() {
        let config = AppConfig {
            environment: "test".to_string(),
            host: "127.0.0.1".to_string(),
            port: 8080,
            database_url: "postgres://localhost/tablerise".to_string(),
            email_from: "noreply@tablerise.test".to_string(),
            smtp: SmtpConfig::Local {
                host: "localhost".to_string(),
                port: 1025,
            },
            two_factor_issuer: "TableRise".to_string(),
        };

        assert_eq!(config.server_url(), "127.0.0.1:8080");
        assert!(!config.is_production());
    }
}
