mod engine;
mod model;
mod routes;

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use model::LinearRegressor;
use routes::configure_routes;
use std::env;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    dotenv::dotenv().ok();

    if let Ok(current_dir) = env::current_dir() {
        log::info!("Current working directory: {}", current_dir.display());
    } else {
        log::error!("Failed to get the current working directory.");
    }

    let frontend_dir = if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
        format!("{}/../frontend/dist", manifest_dir)
    } else {
        "/usr/src/app/frontend/dist".to_string()
    };

    let model_path = env::var("MODEL_PATH").unwrap_or_else(|_| {
        if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
            format!("{}/../model/calories_model.json", manifest_dir)
        } else {
            "/usr/src/app/model/calories_model.json".to_string()
        }
    });

    // Predictions are refused wholesale when the artifact is missing or
    // malformed; there is no degraded mode without a model.
    let model = match LinearRegressor::load(&model_path) {
        Ok(model) => Arc::new(model),
        Err(e) => {
            log::error!("Failed to load model at startup: {e}");
            return Err(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Model loading failed: {e}"),
            ));
        }
    };
    log::info!("Loaded calorie regression model from {model_path}");

    let port = env::var("PORT").unwrap_or_else(|_| "8081".to_string());
    let bind_address = format!("0.0.0.0:{}", port);
    log::info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allowed_headers(vec![
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                    ])
                    .max_age(3600),
            )
            .app_data(web::Data::new(model.clone()))
            .configure(|cfg| configure_routes(cfg, frontend_dir.clone()))
    })
    .bind(&bind_address)?
    .run()
    .await
}
