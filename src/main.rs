use actix_web::{middleware, web, App, HttpServer};
use portal_auth::auth::{gate::access_gate, Authenticator, SessionManager};
use portal_auth::config::EnvConfig;
use portal_auth::db::credential_store::CredentialStore;
use portal_auth::routes::configure_routes;
use std::sync::Arc;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = match EnvConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    let addr = format!("0.0.0.0:{}", config.port);

    let credential_store = match CredentialStore::new(&config.db_url).await {
        Ok(store) => Arc::new(store),
        Err(e) => {
            error!("failed to initialize credential store: {e}");
            std::process::exit(1);
        }
    };
    let authenticator = web::Data::new(Authenticator::new(Arc::clone(&credential_store)));
    let sessions = web::Data::new(SessionManager::new(&config.session));

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&credential_store)))
            .app_data(authenticator.clone())
            .app_data(sessions.clone())
            .wrap(middleware::from_fn(access_gate))
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
