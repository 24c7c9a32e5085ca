//! Forum definition service.
//!
//! Validates incoming definitions before they reach the repository.
//! Validation is ordered: forum name first, then the field list, then each
//! field in turn, so the client always sees the earliest failure.

use sqlx::SqlitePool;

use crate::db::UserRepository;
use crate::{AppError, Result};

use super::model::{FieldDescriptor, FieldType, ForumDefinition, NewDefinition};
use super::repository::DefinitionRepository;

/// Display name used when a definition's creator no longer exists.
const UNKNOWN_AUTHOR: &str = "unknown";

/// A field as submitted by a client, before its type has been checked.
#[derive(Debug, Clone)]
pub struct FieldInput {
    /// Field label.
    pub name: String,
    /// Requested input type, validated against [`FieldType`].
    pub field_type: String,
}

/// A definition joined with its creator's display name.
#[derive(Debug, Clone)]
pub struct DefinitionWithAuthor {
    /// The definition.
    pub definition: ForumDefinition,
    /// Resolved creator username, or the "unknown" placeholder.
    pub author_name: String,
}

/// High-level operations on forum definitions.
pub struct DefinitionService<'a> {
    pool: &'a SqlitePool,
}

impl<'a> DefinitionService<'a> {
    /// Create a new DefinitionService.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a forum definition after validating it.
    pub async fn create(
        &self,
        created_by: i64,
        forum_name: String,
        fields: Vec<FieldInput>,
    ) -> Result<ForumDefinition> {
        if forum_name.trim().is_empty() {
            return Err(AppError::Validation("forum name is required".to_string()));
        }
        if fields.is_empty() {
            return Err(AppError::Validation(
                "at least one field is required".to_string(),
            ));
        }

        let mut validated = Vec::with_capacity(fields.len());
        for field in fields {
            if field.name.trim().is_empty() {
                return Err(AppError::Validation("field name is required".to_string()));
            }
            if field.field_type.is_empty() {
                return Err(AppError::Validation("field type is required".to_string()));
            }
            let field_type: FieldType = field.field_type.parse().map_err(|_| {
                AppError::Validation(format!("invalid field type: {}", field.field_type))
            })?;
            validated.push(FieldDescriptor::new(field.name, field_type));
        }

        let repo = DefinitionRepository::new(self.pool);
        repo.create(&NewDefinition::new(forum_name, validated, created_by))
            .await
    }

    /// List all definitions with their creators resolved to display names.
    pub async fn list(&self) -> Result<Vec<DefinitionWithAuthor>> {
        let repo = DefinitionRepository::new(self.pool);
        let user_repo = UserRepository::new(self.pool);

        let definitions = repo.list().await?;

        let mut result = Vec::with_capacity(definitions.len());
        for definition in definitions {
            let author_name = user_repo
                .get_by_id(definition.created_by)
                .await
                .ok()
                .flatten()
                .map(|u| u.username)
                .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());

            result.push(DefinitionWithAuthor {
                definition,
                author_name,
            });
        }

        Ok(result)
    }

    /// Delete a definition by forum name.
    pub async fn delete(&self, forum_name: &str) -> Result<()> {
        let repo = DefinitionRepository::new(self.pool);
        if !repo.delete_by_name(forum_name).await? {
            return Err(AppError::NotFound("forum definition".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{Database, NewUser};

    fn field(name: &str, ty: &str) -> FieldInput {
        FieldInput {
            name: name.to_string(),
            field_type: ty.to_string(),
        }
    }

    async fn setup() -> (Database, i64) {
        let db = Database::open_in_memory().await.unwrap();
        let user = UserRepository::new(db.pool())
            .create(&NewUser::new("creator", "hash"))
            .await
            .unwrap();
        (db, user.id)
    }

    #[tokio::test]
    async fn test_create_valid_definition() {
        let (db, user_id) = setup().await;
        let service = DefinitionService::new(db.pool());

        let def = service
            .create(
                user_id,
                "general".to_string(),
                vec![field("Name", "text"), field("Subscribed", "checkbox")],
            )
            .await
            .unwrap();

        assert_eq!(def.forum_name, "general");
        assert_eq!(def.fields[1].field_type, FieldType::Checkbox);
    }

    #[tokio::test]
    async fn test_validation_order_forum_name_first() {
        let (db, user_id) = setup().await;
        let service = DefinitionService::new(db.pool());

        // Both the name and the fields are invalid; the name wins.
        let err = service
            .create(user_id, "  ".to_string(), vec![])
            .await
            .unwrap_err();

        match err {
            AppError::Validation(msg) => assert!(msg.contains("forum name")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_rejects_empty_field_list() {
        let (db, user_id) = setup().await;
        let service = DefinitionService::new(db.pool());

        let err = service
            .create(user_id, "general".to_string(), vec![])
            .await
            .unwrap_err();

        match err {
            AppError::Validation(msg) => assert!(msg.contains("at least one field")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_rejects_missing_field_type() {
        let (db, user_id) = setup().await;
        let service = DefinitionService::new(db.pool());

        let err = service
            .create(
                user_id,
                "general".to_string(),
                vec![field("Email", "")],
            )
            .await
            .unwrap_err();

        match err {
            AppError::Validation(msg) => assert!(msg.contains("field type")),
            other => panic!("expected validation error, got {other:?}"),
        }

        // Nothing was persisted
        let listed = service.list().await.unwrap();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn test_rejects_invalid_field_type() {
        let (db, user_id) = setup().await;
        let service = DefinitionService::new(db.pool());

        let err = service
            .create(
                user_id,
                "general".to_string(),
                vec![field("Name", "text"), field("Color", "dropdown")],
            )
            .await
            .unwrap_err();

        match err {
            AppError::Validation(msg) => assert!(msg.contains("dropdown")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_list_resolves_creators() {
        let (db, user_id) = setup().await;
        let service = DefinitionService::new(db.pool());

        service
            .create(user_id, "general".to_string(), vec![field("Name", "text")])
            .await
            .unwrap();

        let listed = service.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].author_name, "creator");
    }

    #[tokio::test]
    async fn test_delete_missing_definition() {
        let (db, _user_id) = setup().await;
        let service = DefinitionService::new(db.pool());

        let result = service.delete("nope").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
