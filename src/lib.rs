#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_web::cookie::Key;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
#[cfg(feature = "server")]
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
#[cfg(feature = "server")]
use pushkind_common::db::establish_connection_pool;
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::db::run_migrations;
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::DieselRepository;
#[cfg(feature = "server")]
use crate::routes::main::show_index;
#[cfg(feature = "server")]
use crate::routes::vehicle_make::{
    create_make, delete_make, list_makes, show_create_make, show_delete_make, show_edit_make,
    show_make, update_make,
};
#[cfg(feature = "server")]
use crate::routes::vehicle_model::{
    create_model, delete_model, list_models, show_create_model, show_delete_model,
    show_edit_model, show_model, update_model,
};

#[cfg(feature = "server")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod pipeline;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "server")]
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
///
/// Applies pending migrations and seeds the catalog on an empty database
/// before accepting requests.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let applied = run_migrations(&pool)
        .map_err(|e| std::io::Error::other(format!("Failed to run migrations: {e}")))?;
    log::info!(applied = applied; "Applied {applied} pending migrations");

    let repo = DieselRepository::new(pool);

    if repo
        .seed_catalog()
        .map_err(|e| std::io::Error::other(format!("Failed to seed catalog: {e}")))?
    {
        log::info!("Seeded empty catalog with default makes and models");
    }

    let secret_key = Key::from(server_config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .configure(configure_routes)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}

/// Registers every catalog handler. Literal `create` segments come before
/// `{id}` patterns so they are not parsed as ids.
#[cfg(feature = "server")]
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(show_index)
        .service(list_makes)
        .service(show_create_make)
        .service(create_make)
        .service(show_make)
        .service(show_edit_make)
        .service(update_make)
        .service(show_delete_make)
        .service(delete_make)
        .service(list_models)
        .service(show_create_model)
        .service(create_model)
        .service(show_model)
        .service(show_edit_model)
        .service(update_model)
        .service(show_delete_model)
        .service(delete_model);
}
