//! Forum definition repository.

use sqlx::SqlitePool;

use super::model::{ForumDefinition, NewDefinition};
use crate::{AppError, Result};

/// Raw row shape; `fields` is stored as a JSON array of {name, type}.
#[derive(sqlx::FromRow)]
struct DefinitionRow {
    id: i64,
    forum_name: String,
    fields: String,
    created_by: i64,
    created_at: String,
    updated_at: String,
}

impl DefinitionRow {
    fn into_definition(self) -> ForumDefinition {
        let fields = serde_json::from_str(&self.fields).unwrap_or_default();
        ForumDefinition {
            id: self.id,
            forum_name: self.forum_name,
            fields,
            created_by: self.created_by,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Repository for forum definition CRUD operations.
pub struct DefinitionRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> DefinitionRepository<'a> {
    /// Create a new DefinitionRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new forum definition.
    ///
    /// Returns `AppError::Conflict` if a definition with the same forum
    /// name already exists.
    pub async fn create(&self, new_definition: &NewDefinition) -> Result<ForumDefinition> {
        let fields = serde_json::to_string(&new_definition.fields)
            .map_err(|e| AppError::Database(format!("failed to encode fields: {e}")))?;

        let result = sqlx::query(
            "INSERT INTO definitions (forum_name, fields, created_by) VALUES (?, ?, ?)",
        )
        .bind(&new_definition.forum_name)
        .bind(fields)
        .bind(new_definition.created_by)
        .execute(self.pool)
        .await
        .map_err(|e| {
            if e.to_string().contains("UNIQUE") {
                AppError::Conflict(format!(
                    "forum '{}' already has a definition",
                    new_definition.forum_name
                ))
            } else {
                AppError::Database(e.to_string())
            }
        })?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("forum definition".to_string()))
    }

    /// Get a definition by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<ForumDefinition>> {
        let row = sqlx::query_as::<_, DefinitionRow>(
            "SELECT id, forum_name, fields, created_by, created_at, updated_at
             FROM definitions WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(row.map(DefinitionRow::into_definition))
    }

    /// Get a definition by forum name.
    pub async fn get_by_name(&self, forum_name: &str) -> Result<Option<ForumDefinition>> {
        let row = sqlx::query_as::<_, DefinitionRow>(
            "SELECT id, forum_name, fields, created_by, created_at, updated_at
             FROM definitions WHERE forum_name = ?",
        )
        .bind(forum_name)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(row.map(DefinitionRow::into_definition))
    }

    /// List all definitions in insertion order.
    pub async fn list(&self) -> Result<Vec<ForumDefinition>> {
        let rows = sqlx::query_as::<_, DefinitionRow>(
            "SELECT id, forum_name, fields, created_by, created_at, updated_at
             FROM definitions ORDER BY id",
        )
        .fetch_all(self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(DefinitionRow::into_definition).collect())
    }

    /// Delete a definition by forum name.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete_by_name(&self, forum_name: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM definitions WHERE forum_name = ?")
            .bind(forum_name)
            .execute(self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::definition::model::{FieldDescriptor, FieldType};

    fn sample_fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new("Name", FieldType::Text),
            FieldDescriptor::new("Age", FieldType::Number),
        ]
    }

    #[tokio::test]
    async fn test_create_and_get_definition() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = DefinitionRepository::new(db.pool());

        let def = repo
            .create(&NewDefinition::new("general", sample_fields(), 1))
            .await
            .unwrap();

        assert_eq!(def.forum_name, "general");
        assert_eq!(def.fields.len(), 2);
        assert_eq!(def.fields[1].field_type, FieldType::Number);

        let fetched = repo.get_by_name("general").await.unwrap().unwrap();
        assert_eq!(fetched.id, def.id);
        assert_eq!(fetched.fields, def.fields);
    }

    #[tokio::test]
    async fn test_duplicate_forum_name_is_conflict() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = DefinitionRepository::new(db.pool());

        repo.create(&NewDefinition::new("general", sample_fields(), 1))
            .await
            .unwrap();

        let result = repo
            .create(&NewDefinition::new("general", sample_fields(), 2))
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_list_insertion_order() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = DefinitionRepository::new(db.pool());

        repo.create(&NewDefinition::new("alpha", sample_fields(), 1))
            .await
            .unwrap();
        repo.create(&NewDefinition::new("beta", sample_fields(), 1))
            .await
            .unwrap();

        let defs = repo.list().await.unwrap();
        assert_eq!(defs.len(), 2);
        assert_eq!(defs[0].forum_name, "alpha");
        assert_eq!(defs[1].forum_name, "beta");
    }

    #[tokio::test]
    async fn test_delete_by_name() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = DefinitionRepository::new(db.pool());

        repo.create(&NewDefinition::new("general", sample_fields(), 1))
            .await
            .unwrap();

        assert!(repo.delete_by_name("general").await.unwrap());
        assert!(repo.get_by_name("general").await.unwrap().is_none());
        assert!(!repo.delete_by_name("general").await.unwrap());
    }
}
