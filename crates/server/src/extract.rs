//! Request extractors whose rejections become 422 `JsonApiError` bodies
//! carrying the deserializer's message.

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use service::errors::ServiceError;

use crate::errors::JsonApiError;

/// `Json<T>` with malformed or mistyped bodies reported as 422.
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(JsonApiError::unprocessable(rejection.body_text())),
        }
    }
}

/// Integer record id taken from the `:id` path segment.
///
/// Non-integer segments are rejected with 422. Integers outside the `i32`
/// id range cannot name a stored row, so they are rejected as not found.
#[derive(Debug, Clone, Copy)]
pub struct RecordId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| JsonApiError::unprocessable(rejection.body_text()))?;
        i32::try_from(raw)
            .map(Self)
            .map_err(|_| JsonApiError::from(ServiceError::not_found("Cheque")))
    }
}
