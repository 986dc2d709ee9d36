use std::env;
use std::time::Instant;

use actix_web::{App, HttpServer, middleware, web};
use config::{Config, Environment, File};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use dotenvy::dotenv;

use resource_organizer::db::establish_connection_pool;
use resource_organizer::models::config::ServerConfig;
use resource_organizer::repository::DieselRepository;
use resource_organizer::routes;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        .add_source(File::with_name("config/default"))
        .add_source(File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(Environment::with_prefix("APP"))
        .build();

    let server_config = match settings.and_then(|s| s.try_deserialize::<ServerConfig>()) {
        Ok(server_config) => server_config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    match pool.get() {
        Ok(mut conn) => {
            if let Err(e) = conn.run_pending_migrations(MIGRATIONS) {
                log::error!("Failed to run migrations: {e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            log::error!("Failed to get a connection for migrations: {e}");
            std::process::exit(1);
        }
    }

    let repo = web::Data::new(DieselRepository::new(pool));
    let started_at = web::Data::new(Instant::now());
    let bind_address = (server_config.address.clone(), server_config.port);

    log::info!(
        "Serving {} on {}:{}",
        server_config.database_url,
        server_config.address,
        server_config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(routes::json_config())
            .app_data(repo.clone())
            .app_data(started_at.clone())
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
