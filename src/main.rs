pub mod config;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::{catalog, email, system, user};

#[cfg(feature = "test-helpers")]
mod test_helpers;

#[cfg(test)]
mod tests;

use crate::catalog::adapter::incoming::web::routes::configure_catalog_routes;
use crate::catalog::adapter::outgoing::CatalogRepositoryPostgres;
use crate::catalog::application::CatalogUseCases;
use crate::config::{AppConfig, SmtpConfig};
use crate::email::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::email::application::services::VerificationEmailService;
use crate::shared::api::json_config::{
    custom_json_config, custom_path_config, custom_query_config,
};
use crate::system::adapter::incoming::web::routes::configure_system_routes;
use crate::system::adapter::outgoing::SystemRepositoryPostgres;
use crate::system::application::SystemUseCases;
use crate::user::adapter::incoming::web::routes::configure_profile_routes;
use crate::user::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::user::adapter::outgoing::security::{Argon2Hasher, TotpAuthenticator};
use crate::user::adapter::outgoing::{UserDetailsRepositoryPostgres, UserRepositoryPostgres};
use crate::user::application::ports::outgoing::TokenProvider;
use crate::user::application::{UserCollaborators, UserUseCases};

use actix_web::{web, App, HttpServer};
use anyhow::{anyhow, Context};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Clone)]
pub struct AppState {
    pub user: UserUseCases,
    pub catalog: CatalogUseCases,
    pub system: SystemUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    AppConfig::load_dotenv();
    let config = AppConfig::from_env()?;

    #[cfg(feature = "test-helpers")]
    {
        if config.is_production() {
            anyhow::bail!("test-helpers feature enabled in production environment");
        }
        tracing::warn!(
            "Test helper routes are ENABLED for environment: {}",
            config.environment
        );
    }

    let smtp_sender = match &config.smtp {
        SmtpConfig::Local { host, port } => {
            SmtpEmailSender::new_local(host, *port, &config.email_from)
        }
        SmtpConfig::Relay {
            server,
            username,
            password,
        } => SmtpEmailSender::new(server, username, password, &config.email_from)
            .map_err(|e| anyhow!(e))?,
    };

    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let db_arc = Arc::new(
        Database::connect(opt)
            .await
            .context("Failed to connect to database")?,
    );

    let jwt_service = JwtTokenService::new(JwtConfig::from_env().map_err(|e| anyhow!(e))?);
    let token_provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let hasher = Argon2Hasher::from_env().context("Invalid Argon2 parameters")?;

    let deps = UserCollaborators {
        hasher: Arc::new(hasher),
        otp: Arc::new(TotpAuthenticator::new(config.two_factor_issuer.clone())),
        tokens: token_provider.clone(),
        notifier: Arc::new(VerificationEmailService::new(Arc::new(smtp_sender))),
    };

    let state = AppState {
        user: UserUseCases::wire(
            UserRepositoryPostgres::new(Arc::clone(&db_arc)),
            UserDetailsRepositoryPostgres::new(Arc::clone(&db_arc)),
            deps,
        ),
        catalog: CatalogUseCases::wire(CatalogRepositoryPostgres::new(Arc::clone(&db_arc))),
        system: SystemUseCases::wire(SystemRepositoryPostgres::new(Arc::clone(&db_arc))),
    };

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        let app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(custom_path_config())
            .configure(init_routes);

        #[cfg(feature = "test-helpers")]
        let app = app.configure(test_helpers::configure_routes);

        app
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    configure_profile_routes(cfg);
    configure_system_routes(cfg);
    configure_catalog_routes(cfg);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
