use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AiError {
    #[error("Error calling AI provider: {0}")]
    Http(#[from] reqwest::Error),

    #[error("AI provider responded with status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("AI provider returned a completion without text content")]
    EmptyCompletion,

    #[error("AI provider returned no image URL")]
    MissingImageUrl,
}

impl AiError {
    fn kind(&self) -> &'static str {
        match self {
            AiError::Http(_) => "provider_unreachable",
            AiError::Api { .. } => "provider_error",
            AiError::EmptyCompletion | AiError::MissingImageUrl => "empty_response",
        }
    }
}

// Every provider failure surfaces as a generic server error.
impl ResponseError for AiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type("application/json")
            .json(json!({
                "error": {
                    "message": self.to_string(),
                    "type": self.kind(),
                }
            }))
    }
}
