//! Forum posts: models, persistence, and the lifecycle service.

mod model;
mod repository;
mod service;

pub use model::{ForumPost, NewPost, PostUpdate};
pub use repository::PostRepository;
pub use service::{PostService, PostWithAuthor, UploadedFile, MAX_FILES_PER_POST};
