//! The five item handlers. Each decodes, calls the repository through the
//! capability trait, and maps the outcome to a status per route. Error detail
//! goes to the logs keyed by operation name, never into response bodies.

use crate::convert;
use crate::error::RepoError;
use crate::gateway::model::{
    CreateItemRequestBody, CreateItemResponseBody, ListItemsResponseBody, UpdateItemRequestBody,
};
use crate::gateway::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Non-numeric id segments are rejected outright rather than silently parsed
/// as zero, so no handler ever operates on a phantom id 0.
fn parse_item_id(raw: &str) -> Result<i64, StatusCode> {
    raw.parse().map_err(|_| StatusCode::BAD_REQUEST)
}

pub async fn create_item(
    State(state): State<AppState>,
    body: Result<Json<CreateItemRequestBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::error!(error = %rejection, "create item: decode body");
            return StatusCode::UNPROCESSABLE_ENTITY.into_response();
        }
    };

    let item = convert::item_from_create_request(&body);
    match state.repo.create_item(&item).await {
        Ok(id) => (StatusCode::CREATED, Json(CreateItemResponseBody { id })).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "create item");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn get_item(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_item_id(&id) {
        Ok(id) => id,
        Err(status) => return status.into_response(),
    };

    match state.repo.get_item_by_id(id).await {
        Ok(item) => (StatusCode::OK, Json(convert::item_to_wire(&item))).into_response(),
        Err(RepoError::NotFound) => StatusCode::NOT_FOUND.into_response(),
        Err(err) => {
            tracing::error!(error = %err, id, "get item by id");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateItemRequestBody>, JsonRejection>,
) -> Response {
    let id = match parse_item_id(&id) {
        Ok(id) => id,
        Err(status) => return status.into_response(),
    };
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::error!(error = %rejection, id, "update item: decode body");
            return StatusCode::UNPROCESSABLE_ENTITY.into_response();
        }
    };

    let item = convert::item_from_update_request(id, &body);
    // An update miss keeps the historical 500 of this endpoint, not 404.
    match state.repo.update_item(&item).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(err) => {
            tracing::error!(error = %err, id, "update item");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn list_items(State(state): State<AppState>) -> Response {
    match state.repo.list_items().await {
        Ok(items) => {
            let items = items.iter().map(convert::item_to_wire).collect();
            (StatusCode::OK, Json(ListItemsResponseBody { items })).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "list items");
            StatusCode::BAD_REQUEST.into_response()
        }
    }
}

pub async fn delete_item(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_item_id(&id) {
        Ok(id) => id,
        Err(status) => return status.into_response(),
    };

    match state.repo.delete_item(id).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(RepoError::NoRowsAffected) => StatusCode::NOT_FOUND.into_response(),
        Err(err) => {
            tracing::error!(error = %err, id, "delete item");
            StatusCode::BAD_REQUEST.into_response()
        }
    }
}
