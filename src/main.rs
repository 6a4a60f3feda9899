use actix_web::{middleware::Logger, web, App, HttpServer};
use social_api::config::EnvConfig;
use social_api::db::database_service::DatabaseService;
use social_api::routes::configure_routes;
use social_api::utils::token::TokenService;
use std::io;
use std::sync::Arc;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init();

    let config = EnvConfig::from_env().map_err(|e| {
        error!("Invalid configuration: {e}");
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    let database_service = Arc::new(
        DatabaseService::connect(&config.db_url)
            .await
            .map_err(|e| {
                error!("Failed to initialize DatabaseService: {e}");
                io::Error::other(e)
            })?
    );
    let tokens = TokenService::new(&config.secret_key);

    info!("Starting server on {}:{}", config.bind_address, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(Arc::clone(&database_service)))
            .app_data(web::Data::new(tokens.clone()))
            .configure(configure_routes)
    })
    .bind((config.bind_address.as_str(), config.port))?
    .run()
    .await
}
