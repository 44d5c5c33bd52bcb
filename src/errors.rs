use axum::{http::StatusCode, response::IntoResponse, Json};
use sqlx::error::DatabaseError;

use crate::JsonResponse;

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("Bad Request")]
    BadRequest,
    #[error("Not Found")]
    NotFound,
    #[error("Internal Error")]
    ServerError,
    #[error(transparent)]
    DatabaseError(#[from] sqlx::Error),
}

#[derive(Debug, serde::Serialize)]
pub struct RequestErrorJson {
    msg: &'static str,
}

impl RequestErrorJson {
    pub fn new(msg: &'static str) -> RequestErrorJson {
        RequestErrorJson { msg }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> axum::response::Response {
        self.to_json_response().into_response()
    }
}

impl RequestError {
    pub fn to_json_response(&self) -> JsonResponse<RequestErrorJson> {
        let (status_code, json) = match self {
            RequestError::BadRequest => (StatusCode::BAD_REQUEST, RequestErrorJson::new("Bad Request")),
            RequestError::NotFound => (StatusCode::NOT_FOUND, RequestErrorJson::new("Not Found")),
            RequestError::ServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                RequestErrorJson::new("Internal Error"),
            ),
            RequestError::DatabaseError(sqlx::Error::Database(e)) if is_client_fault(&**e) => {
                tracing::debug!(error = %e, "storage rejected request data");
                (StatusCode::BAD_REQUEST, RequestErrorJson::new("Bad Request"))
            }
            RequestError::DatabaseError(e) => {
                tracing::error!(error = %e, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    RequestErrorJson::new("Internal Error"),
                )
            }
        };
        (status_code, Json(json))
    }
}

/// Constraint and type failures reported by SQLite are caused by the data a client sent.
fn is_client_fault(error: &dyn DatabaseError) -> bool {
    let message = error.message();
    message.contains("constraint failed") || message.contains("datatype mismatch")
}
