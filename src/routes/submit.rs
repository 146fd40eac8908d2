use crate::core;
use crate::models::{ErrorResponse, HealthResponse, SubmitRequest, SubmitResponse, WaitlistEntry};
use crate::services::SupabaseClient;
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub supabase: Arc<SupabaseClient>,
}

/// Configure all waitlist routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/submit", web::post().to(submit));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Waitlist submission endpoint
///
/// POST /api/submit
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "email": "string",
///   "features": ["string"]
/// }
/// ```
///
/// Validation order is fixed: presence before email format. Normalization
/// (trim name, trim+lowercase email) happens only after both checks pass,
/// and exactly one insert is attempted per call.
async fn submit(state: web::Data<AppState>, req: web::Json<SubmitRequest>) -> impl Responder {
    // Fixed order: presence first, then email shape.
    if let Err(failure) = core::validate_submission(&req) {
        tracing::info!("Rejected submission: {}", failure.message());
        return HttpResponse::BadRequest().json(ErrorResponse::new(failure.message()));
    }

    // Labels outside the fixed option list are stored verbatim, but worth a
    // note in the logs since the form never produces them.
    for feature in &req.features {
        if !core::is_known_feature(feature) {
            tracing::warn!("Submission carries unknown feature label: {:?}", feature);
        }
    }

    let entry = WaitlistEntry::new(
        core::normalize_name(&req.name),
        core::normalize_email(&req.email),
        req.features.clone(),
    );

    tracing::info!("Inserting waitlist entry for {}", entry.email);

    match state.supabase.insert_entry(&entry).await {
        Ok(stored) => {
            tracing::info!("Waitlist entry stored for {}", stored.email);
            HttpResponse::Ok().json(SubmitResponse {
                success: true,
                message: "Successfully joined the waitlist".to_string(),
                data: stored,
            })
        }
        Err(e) if e.is_unique_violation() => {
            tracing::info!("Duplicate waitlist signup for {}", entry.email);
            HttpResponse::Conflict()
                .json(ErrorResponse::new("This email is already on the waitlist"))
        }
        Err(e) => {
            // Raw storage detail stays in the logs, never in the response.
            tracing::error!("Failed to store waitlist entry: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "Failed to process your submission. Please try again.",
            ))
        }
    }
}
