use crate::engine;
use crate::model::LinearRegressor;
use actix_files::Files;
use actix_web::{HttpResponse, web};
use log::debug;
use serde_json::json;
use shared::{FEATURE_NAMES, PredictionRequest};
use std::sync::Arc;

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: String) {
    cfg.service(web::resource("/api/predict").route(web::post().to(handle_predict)))
        .service(web::resource("/api/health").route(web::get().to(health)))
        .service(Files::new("/static", frontend_dir).index_file("index.html"));
}

async fn handle_predict(
    model: web::Data<Arc<LinearRegressor>>,
    request: web::Json<PredictionRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    let response = engine::predict(model.get_ref().as_ref(), &request);
    debug!(
        "Predicted {:.1} kcal ({:.2} kcal/min) for {:?}",
        response.calories_kcal, response.calories_per_minute, request
    );
    HttpResponse::Ok().json(response)
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "model": {
            "loaded": true,
            "features": FEATURE_NAMES,
        },
    }))
}
