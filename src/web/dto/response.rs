//! Response DTOs for the Web API.

use serde::Serialize;

use crate::definition::{DefinitionWithAuthor, FieldDescriptor};
use crate::post::PostWithAuthor;

/// Generic API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a new API response.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Author information.
#[derive(Debug, Serialize)]
pub struct AuthorInfo {
    /// User ID.
    pub id: i64,
    /// Username, or "unknown" when the user no longer exists.
    pub username: String,
}

/// Signup response.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    /// User ID.
    pub id: i64,
    /// Username.
    pub username: String,
    /// Whether the user is an administrator.
    pub is_admin: bool,
    /// Account creation timestamp.
    pub created_at: String,
}

/// Signin response.
#[derive(Debug, Serialize)]
pub struct SigninResponse {
    /// Access token (JWT).
    pub token: String,
    /// Whether the signed-in user is an administrator.
    pub is_admin: bool,
    /// Token expiry in seconds.
    pub expires_in: u64,
}

/// Forum post response.
#[derive(Debug, Serialize)]
pub struct PostResponse {
    /// Post ID.
    pub id: i64,
    /// Post title.
    pub title: String,
    /// Post body.
    pub note: String,
    /// Stored filenames of attached images, in upload order.
    pub images: Vec<String>,
    /// Author info.
    pub author: AuthorInfo,
    /// Creation timestamp.
    pub created_at: String,
}

impl From<PostWithAuthor> for PostResponse {
    fn from(item: PostWithAuthor) -> Self {
        Self {
            id: item.post.id,
            title: item.post.title,
            note: item.post.note,
            images: item.post.images,
            author: AuthorInfo {
                id: item.post.author_id,
                username: item.author_name,
            },
            created_at: item.post.created_at,
        }
    }
}

/// Forum definition response.
#[derive(Debug, Serialize)]
pub struct DefinitionResponse {
    /// Definition ID.
    pub id: i64,
    /// Forum name.
    #[serde(rename = "forumName")]
    pub forum_name: String,
    /// Ordered form fields.
    pub fields: Vec<FieldDescriptor>,
    /// Creator info.
    pub created_by: AuthorInfo,
    /// Creation timestamp.
    pub created_at: String,
    /// Last-write timestamp.
    pub updated_at: String,
}

impl From<DefinitionWithAuthor> for DefinitionResponse {
    fn from(item: DefinitionWithAuthor) -> Self {
        Self {
            id: item.definition.id,
            forum_name: item.definition.forum_name,
            fields: item.definition.fields,
            created_by: AuthorInfo {
                id: item.definition.created_by,
                username: item.author_name,
            },
            created_at: item.definition.created_at,
            updated_at: item.definition.updated_at,
        }
    }
}
