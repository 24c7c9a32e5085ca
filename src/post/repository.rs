//! Forum post repository.

use sqlx::{QueryBuilder, SqlitePool};

use super::model::{ForumPost, NewPost, PostUpdate};
use crate::{AppError, Result};

/// Raw row shape; `images` is stored as a JSON array of filenames.
#[derive(sqlx::FromRow)]
struct PostRow {
    id: i64,
    title: String,
    note: String,
    images: String,
    author_id: i64,
    created_at: String,
}

impl PostRow {
    fn into_post(self) -> ForumPost {
        let images = serde_json::from_str(&self.images).unwrap_or_default();
        ForumPost {
            id: self.id,
            title: self.title,
            note: self.note,
            images,
            author_id: self.author_id,
            created_at: self.created_at,
        }
    }
}

/// Repository for forum post CRUD operations.
pub struct PostRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PostRepository<'a> {
    /// Create a new PostRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    fn encode_images(images: &[String]) -> Result<String> {
        serde_json::to_string(images)
            .map_err(|e| AppError::Database(format!("failed to encode images: {e}")))
    }

    /// Create a new post.
    ///
    /// Returns the created post with the assigned ID.
    pub async fn create(&self, new_post: &NewPost) -> Result<ForumPost> {
        let images = Self::encode_images(&new_post.images)?;

        let result = sqlx::query(
            "INSERT INTO posts (title, note, images, author_id) VALUES (?, ?, ?, ?)",
        )
        .bind(&new_post.title)
        .bind(&new_post.note)
        .bind(images)
        .bind(new_post.author_id)
        .execute(self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("forum post".to_string()))
    }

    /// Get a post by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<ForumPost>> {
        let row = sqlx::query_as::<_, PostRow>(
            "SELECT id, title, note, images, author_id, created_at FROM posts WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(row.map(PostRow::into_post))
    }

    /// List all posts in insertion order.
    pub async fn list(&self) -> Result<Vec<ForumPost>> {
        let rows = sqlx::query_as::<_, PostRow>(
            "SELECT id, title, note, images, author_id, created_at FROM posts ORDER BY id",
        )
        .fetch_all(self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(PostRow::into_post).collect())
    }

    /// Update a post by ID.
    ///
    /// Only fields that are set in the update will be modified.
    /// Returns the updated post, or None if not found.
    pub async fn update(&self, id: i64, update: &PostUpdate) -> Result<Option<ForumPost>> {
        if update.is_empty() {
            return self.get_by_id(id).await;
        }

        let mut query: QueryBuilder<sqlx::Sqlite> = QueryBuilder::new("UPDATE posts SET ");
        let mut separated = query.separated(", ");

        if let Some(ref title) = update.title {
            separated.push("title = ");
            separated.push_bind_unseparated(title);
        }
        if let Some(ref note) = update.note {
            separated.push("note = ");
            separated.push_bind_unseparated(note);
        }
        if let Some(ref images) = update.images {
            separated.push("images = ");
            separated.push_bind_unseparated(Self::encode_images(images)?);
        }

        query.push(" WHERE id = ");
        query.push_bind(id);

        let result = query
            .build()
            .execute(self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }

    /// Delete a post by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
