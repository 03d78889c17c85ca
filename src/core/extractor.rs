use axum::{
    body::Body,
    extract::{
        rejection::{JsonRejection, PathRejection},
        FromRequest, FromRequestParts, Path, Request,
    },
    http::request::Parts,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;

/// Custom JSON extractor that provides consistent error responses
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppJsonRejection(rejection)),
        }
    }
}

pub struct AppJsonRejection(JsonRejection);

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        let message = match self.0 {
            JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err),
            JsonRejection::JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err),
            JsonRejection::MissingJsonContentType(err) => {
                format!("Missing JSON content type: {}", err)
            }
            _ => "Failed to parse JSON body".to_string(),
        };

        AppError::BadRequest(message).into_response()
    }
}

/// Path extractor that treats an undecodable parameter (e.g. a non-UUID id)
/// as a path that matches no resource
pub struct AppPath<T>(pub T);

impl<T, S> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(path_rejection_to_error(rejection)),
        }
    }
}

fn path_rejection_to_error(rejection: PathRejection) -> AppError {
    match rejection {
        PathRejection::FailedToDeserializePathParams(err) => {
            tracing::debug!("Unmatched path parameter: {}", err.body_text());
            AppError::NotFound("Resource not found".to_string())
        }
        PathRejection::MissingPathParams(err) => AppError::Internal(err.body_text()),
        other => AppError::BadRequest(other.body_text()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};
    use axum_test::TestServer;
    use uuid::Uuid;

    async fn echo_id(AppPath(id): AppPath<Uuid>) -> String {
        id.to_string()
    }

    fn server() -> TestServer {
        TestServer::new(Router::new().route("/items/{id}", get(echo_id))).unwrap()
    }

    #[tokio::test]
    async fn test_app_path_decodes_uuid() {
        let id = Uuid::new_v4();
        let response = server().get(&format!("/items/{}", id)).await;
        response.assert_status_ok();
        response.assert_text(id.to_string());
    }

    #[tokio::test]
    async fn test_app_path_undecodable_param_is_not_found() {
        let response = server().get("/items/not-a-uuid").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }
}
