//! Response builders shared by the API handlers.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde_json::json;

/// Returns a 200 OK response with a `status` message.
#[must_use]
pub fn ok_status(status: &str) -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": status }))
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> HttpResponse {
    let status = StatusCode::from_u16(status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status).json(json!({ "error": message }))
}
