use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub const UPDATE_NOT_FOUND: &str = "Ticket Not Found";
pub const DELETE_NOT_FOUND: &str = "Ticket not found, deletion failed";

#[derive(Debug)]
pub enum AppError {
    /// Rendered with 200; clients tell a miss apart by the `error` key.
    TicketNotFound(&'static str),
    Anyhow(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::TicketNotFound(msg) => (StatusCode::OK, msg.to_string()),
            AppError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            },
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Anyhow(err.into())
    }
}
