//! forumhub - Forum posting service
//!
//! A forum backend with custom per-forum form definitions, image-carrying
//! posts, and JWT-authenticated, admin-gated mutation.

pub mod auth;
pub mod config;
pub mod db;
pub mod definition;
pub mod error;
pub mod file;
pub mod logging;
pub mod post;
pub mod web;

pub use auth::{
    hash_password, validate_password, verify_password, PasswordError, MAX_PASSWORD_LENGTH,
    MIN_PASSWORD_LENGTH,
};
pub use config::Config;
pub use db::{Database, NewUser, User, UserRepository};
pub use definition::{
    DefinitionRepository, DefinitionService, FieldDescriptor, FieldType, ForumDefinition,
    NewDefinition,
};
pub use error::{AppError, Result};
pub use file::FileStorage;
pub use post::{
    ForumPost, NewPost, PostRepository, PostService, PostUpdate, MAX_FILES_PER_POST,
};
pub use web::WebServer;
