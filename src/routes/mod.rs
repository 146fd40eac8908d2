// Route exports
pub mod submit;

use crate::models::ErrorResponse;
use actix_web::{error, web, HttpResponse};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
        .service(web::scope("/api").configure(submit::configure));
}

/// Handle JSON payload errors with the same single-field envelope the
/// submission handler uses for its own rejections.
pub fn handle_json_payload_error(
    err: error::JsonPayloadError,
    req: &actix_web::HttpRequest,
) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    let response =
        HttpResponse::BadRequest().json(ErrorResponse::new(format!("Invalid JSON: {}", err)));
    error::InternalError::from_response(err, response).into()
}
