// src/api/handlers/execute.rs
use actix_web::{HttpResponse, Result, web};
use serde_json::json;
use uuid::Uuid;

use crate::api::AppState;
use crate::backend::PistonBackend;
use crate::errors::RelayError;
use crate::relay::{self, RunRequest};

/// The relay endpoint. Program failures (nonzero exit) are not transport
/// errors and come back as 200 with `success: false`; only bad input (400)
/// and backend/transport trouble (500) change the status.
pub async fn execute_code(
    state: web::Data<AppState>,
    req: web::Json<RunRequest>,
) -> Result<HttpResponse> {
    let run_id = Uuid::new_v4();
    let request = req.into_inner();

    log::info!(
        "[{}] run requested: language={} version={}",
        run_id,
        request.language,
        request.version
    );

    let backend = PistonBackend::new(state.client.clone(), state.config.backend.clone());

    match relay::execute(&backend, &request).await {
        Ok(result) => {
            log::info!("[{}] run finished: success={}", run_id, result.success);
            Ok(HttpResponse::Ok().json(result))
        }
        Err(e) => {
            // Diagnostic side channel for backend/transport failures only;
            // validation failures are the caller's problem.
            if !matches!(e, RelayError::MissingFields) {
                log::error!("[{}] execution failed: {}", run_id, e);
            }

            let body = json!({
                "success": false,
                "error": e.to_string(),
            });
            match e.status_code() {
                400 => Ok(HttpResponse::BadRequest().json(body)),
                _ => Ok(HttpResponse::InternalServerError().json(body)),
            }
        }
    }
}
