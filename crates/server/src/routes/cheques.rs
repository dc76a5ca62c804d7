use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use common::types::MessageResponse;
use models::cheque;
use service::NewCheque;

use crate::{errors::JsonApiError, extract::{RecordId, ValidJson}, state::ServerState};

#[utoipa::path(
    post, path = "/api/cheques", tag = "cheques",
    request_body = crate::openapi::NewChequeDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ChequeDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(input): ValidJson<NewCheque>,
) -> Result<(StatusCode, Json<cheque::Model>), JsonApiError> {
    let created = state.cheques.create(input).await?;
    info!(id = created.id, "cheque created");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/api/cheques", tag = "cheques",
    responses((status = 200, description = "All cheques, newest first", body = [crate::openapi::ChequeDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<cheque::Model>>, JsonApiError> {
    let rows = state.cheques.list().await?;
    info!(count = rows.len(), "list cheques");
    Ok(Json(rows))
}

#[utoipa::path(
    delete, path = "/api/cheques", tag = "cheques",
    responses((status = 200, description = "All cheques removed", body = crate::openapi::MessageDoc))
)]
pub async fn clear(State(state): State<ServerState>) -> Result<Json<MessageResponse>, JsonApiError> {
    let removed = state.cheques.clear().await?;
    info!(removed, "cheques cleared");
    Ok(Json(MessageResponse::new("All cheques cleared successfully")))
}

#[utoipa::path(
    get, path = "/api/cheques/{id}", tag = "cheques",
    params(("id" = i32, Path, description = "The ID of the cheque to retrieve")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ChequeDoc),
        (status = 404, description = "Cheque not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    RecordId(id): RecordId,
) -> Result<Json<cheque::Model>, JsonApiError> {
    Ok(Json(state.cheques.get(id).await?))
}

#[utoipa::path(
    delete, path = "/api/cheques/{id}", tag = "cheques",
    params(("id" = i32, Path, description = "The ID of the cheque to delete")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Cheque not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    RecordId(id): RecordId,
) -> Result<Json<MessageResponse>, JsonApiError> {
    state.cheques.delete(id).await?;
    info!(id, "cheque deleted");
    Ok(Json(MessageResponse::new("Cheque deleted successfully")))
}
