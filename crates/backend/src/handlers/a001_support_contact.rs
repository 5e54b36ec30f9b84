use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a001_support_contact::aggregate::{SupportContact, SupportContactId};
use contracts::domain::a001_support_contact::dto::{MutationResponse, SupportContactDraft};
use serde_json::json;

use crate::domain::a001_support_contact;

fn internal_error(context: &str, e: anyhow::Error) -> StatusCode {
    tracing::error!("{}: {:#}", context, e);
    StatusCode::INTERNAL_SERVER_ERROR
}

/// GET /api/support_contact
pub async fn list_all() -> Result<Json<Vec<SupportContact>>, StatusCode> {
    a001_support_contact::service::list_all()
        .await
        .map(Json)
        .map_err(|e| internal_error("list support contacts", e))
}

/// GET /api/support_contact/:id
pub async fn get_by_id(
    Path(id): Path<SupportContactId>,
) -> Result<Json<SupportContact>, StatusCode> {
    match a001_support_contact::service::get_by_id(id).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => Err(internal_error("get support contact", e)),
    }
}

/// POST /api/support_contact
pub async fn create(
    Json(draft): Json<SupportContactDraft>,
) -> Result<Json<MutationResponse>, StatusCode> {
    a001_support_contact::service::create(draft)
        .await
        .map(Json)
        .map_err(|e| internal_error("create support contact", e))
}

/// PUT /api/support_contact/:id
pub async fn update(
    Path(id): Path<SupportContactId>,
    Json(draft): Json<SupportContactDraft>,
) -> Result<Json<MutationResponse>, StatusCode> {
    a001_support_contact::service::update(id, draft)
        .await
        .map(Json)
        .map_err(|e| internal_error("update support contact", e))
}

/// DELETE /api/support_contact/:id
pub async fn delete(
    Path(id): Path<SupportContactId>,
) -> Result<Json<MutationResponse>, StatusCode> {
    a001_support_contact::service::delete(id)
        .await
        .map(Json)
        .map_err(|e| internal_error("delete support contact", e))
}

/// POST /api/support_contact/testdata
pub async fn insert_test_data() -> Result<Json<serde_json::Value>, StatusCode> {
    match a001_support_contact::service::insert_test_data().await {
        Ok(count) => Ok(Json(json!({ "inserted": count }))),
        Err(e) => Err(internal_error("insert support contact test data", e)),
    }
}
