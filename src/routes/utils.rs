use std::fmt::Debug;

use actix_web::HttpResponse;

use crate::types::{ErrorResponse, INTERNAL_SERVER_ERROR_MESSAGE};

/// Bad Request
pub fn response_400(error_message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error_message.to_string(),
    })
}

/// Conflict
pub fn response_409(error_message: &str) -> HttpResponse {
    HttpResponse::Conflict().json(ErrorResponse {
        error: error_message.to_string(),
    })
}

/// Internal Server Error: with logging
pub fn response_500<T: Debug>(e: T) -> HttpResponse {
    tracing::event!(target: "backend", tracing::Level::ERROR, "{:#?}", e);
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: INTERNAL_SERVER_ERROR_MESSAGE.to_string(),
    })
}
