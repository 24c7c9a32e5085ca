//! Forum definition handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::db::UserRepository;
use crate::definition::{DefinitionService, DefinitionWithAuthor, FieldInput};
use crate::web::dto::request::CreateDefinitionRequest;
use crate::web::dto::response::{ApiResponse, DefinitionResponse};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;
use crate::web::middleware::{AdminUser, AuthUser};

/// GET /api/fields - List all forum definitions.
pub async fn list_definitions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<DefinitionResponse>>>, ApiError> {
    let service = DefinitionService::new(state.db.pool());
    let definitions = service.list().await?;

    let responses: Vec<DefinitionResponse> = definitions
        .into_iter()
        .map(DefinitionResponse::from)
        .collect();
    Ok(Json(ApiResponse::new(responses)))
}

/// POST /api/fields - Create a forum definition.
pub async fn create_definition(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Json(req): Json<CreateDefinitionRequest>,
) -> Result<(StatusCode, Json<ApiResponse<DefinitionResponse>>), ApiError> {
    let fields = req
        .fields
        .into_iter()
        .map(|f| FieldInput {
            name: f.name,
            field_type: f.field_type,
        })
        .collect();

    let service = DefinitionService::new(state.db.pool());
    let definition = service.create(claims.sub, req.forum_name, fields).await?;

    let author_name = UserRepository::new(state.db.pool())
        .get_by_id(claims.sub)
        .await
        .ok()
        .flatten()
        .map(|u| u.username)
        .unwrap_or_else(|| "unknown".to_string());

    let response = DefinitionResponse::from(DefinitionWithAuthor {
        definition,
        author_name,
    });

    Ok((StatusCode::CREATED, Json(ApiResponse::new(response))))
}

/// DELETE /api/fields/:forum_name - Delete a definition by forum name.
pub async fn delete_definition(
    State(state): State<Arc<AppState>>,
    AdminUser(_claims): AdminUser,
    Path(forum_name): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let service = DefinitionService::new(state.db.pool());
    service.delete(&forum_name).await?;

    Ok(Json(ApiResponse::new(())))
}
