mod config;
mod constants;
mod db;
mod errors;
mod handlers;
mod models;
mod repositories;
mod routes;
mod services;
mod utils;
mod views;

use std::io;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{error, info};

use crate::config::CONFIG;
use crate::repositories::UserRepository;
use crate::services::UserService;
use crate::views::Templates;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    info!("Connecting to database at {}...", CONFIG.database_url);
    let pool = db::connect(&CONFIG).await.map_err(|e| {
        error!("Failed to connect to database: {}", e);
        io::Error::other(e)
    })?;

    UserRepository::prepare_schema(&pool, CONFIG.schema_mode)
        .await
        .map_err(|e| {
            error!("Failed to prepare schema: {}", e);
            io::Error::other(e)
        })?;
    info!("Connected to database successfully!");

    // Initialize services
    let user_service = web::Data::new(UserService::new(pool.clone()));
    let templates = web::Data::new(Templates::default());

    // Start HTTP server
    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(user_service.clone())
            .app_data(templates.clone())
            .configure(routes::configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await?;

    if let Err(e) = UserRepository::finish_schema(&pool, CONFIG.schema_mode).await {
        error!("Failed to drop schema on shutdown: {}", e);
    }

    pool.close().await;
    info!("Server stopped");
    Ok(())
}
