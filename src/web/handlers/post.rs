//! Forum post handlers.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::db::UserRepository;
use crate::post::{PostService, PostWithAuthor, UploadedFile};
use crate::web::dto::response::{ApiResponse, PostResponse};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;
use crate::web::middleware::{AdminUser, AuthUser};

/// Fields collected from a multipart post submission.
#[derive(Default)]
struct PostForm {
    titles: Vec<String>,
    notes: Vec<String>,
    files: Vec<UploadedFile>,
}

/// Read a multipart body into titles, notes, and uploaded files.
///
/// `title` and `note` may repeat for batch submissions; `images` carries the
/// uploaded files. Unknown parts are ignored.
async fn read_post_form(mut multipart: Multipart) -> Result<PostForm, ApiError> {
    let mut form = PostForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart data: {}", e)))?
    {
        let name = field.name().map(|n| n.to_string());
        match name.as_deref() {
            Some("title") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Invalid title field: {}", e)))?;
                form.titles.push(value);
            }
            Some("note") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Invalid note field: {}", e)))?;
                form.notes.push(value);
            }
            Some("images") => {
                let original_name = field.file_name().unwrap_or("upload").to_string();
                let content = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Invalid image upload: {}", e)))?;
                form.files.push(UploadedFile {
                    original_name,
                    content: content.to_vec(),
                });
            }
            _ => {}
        }
    }

    Ok(form)
}

/// GET /api/forums - List all posts.
pub async fn list_posts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<PostResponse>>>, ApiError> {
    let service = PostService::new(state.db.pool(), &state.storage);
    let posts = service.list().await?;

    let responses: Vec<PostResponse> = posts.into_iter().map(PostResponse::from).collect();
    Ok(Json(ApiResponse::new(responses)))
}

/// POST /api/forums - Create one or more posts.
///
/// Multipart form: repeated `title`/`note` pairs plus `images` files, which
/// are partitioned across the posts in chunks of five.
pub async fn create_posts(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<Vec<PostResponse>>>), ApiError> {
    let form = read_post_form(multipart).await?;

    let service = PostService::new(state.db.pool(), &state.storage);
    let created = service
        .create(claims.sub, form.titles, form.notes, form.files)
        .await?;

    let author_name = UserRepository::new(state.db.pool())
        .get_by_id(claims.sub)
        .await
        .ok()
        .flatten()
        .map(|u| u.username)
        .unwrap_or_else(|| "unknown".to_string());

    let responses: Vec<PostResponse> = created
        .into_iter()
        .map(|post| {
            PostResponse::from(PostWithAuthor {
                post,
                author_name: author_name.clone(),
            })
        })
        .collect();

    Ok((StatusCode::CREATED, Json(ApiResponse::new(responses))))
}

/// PUT /api/forums/:id - Update a post.
///
/// Multipart form: optional `title`/`note` (empty values keep the prior
/// content) and optional `images` which fully replace the attached files.
pub async fn update_post(
    State(state): State<Arc<AppState>>,
    AdminUser(_claims): AdminUser,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> Result<Json<ApiResponse<PostResponse>>, ApiError> {
    let form = read_post_form(multipart).await?;

    if form.titles.len() > 1 || form.notes.len() > 1 {
        return Err(ApiError::bad_request(
            "Update accepts a single title and note",
        ));
    }

    let service = PostService::new(state.db.pool(), &state.storage);
    let updated = service
        .update(
            id,
            form.titles.into_iter().next(),
            form.notes.into_iter().next(),
            form.files,
        )
        .await?;

    let author_name = UserRepository::new(state.db.pool())
        .get_by_id(updated.author_id)
        .await
        .ok()
        .flatten()
        .map(|u| u.username)
        .unwrap_or_else(|| "unknown".to_string());

    Ok(Json(ApiResponse::new(PostResponse::from(PostWithAuthor {
        post: updated,
        author_name,
    }))))
}

/// DELETE /api/forums/:id - Delete a post and its attached files.
pub async fn delete_post(
    State(state): State<Arc<AppState>>,
    AdminUser(_claims): AdminUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let service = PostService::new(state.db.pool(), &state.storage);
    service.delete(id).await?;

    Ok(Json(ApiResponse::new(())))
}
