//! Post lifecycle service.
//!
//! Orchestrates creation, update, and deletion of forum posts together with
//! the upload store. Multi-step operations are not transactional across the
//! file system and the database; the ordering here bounds the failure
//! window: uploads are written before records are inserted (with
//! compensating cleanup if insertion fails), and on deletion files are
//! removed before the record so a crash leaves at worst a record pointing
//! at missing files, which read paths tolerate.

use sqlx::SqlitePool;
use tracing::{debug, warn};

use crate::db::UserRepository;
use crate::file::FileStorage;
use crate::{AppError, Result};

use super::model::{ForumPost, NewPost, PostUpdate};
use super::repository::PostRepository;

/// Maximum number of image files attached to a single post. Batch
/// submissions partition their files into chunks of this size.
pub const MAX_FILES_PER_POST: usize = 5;

/// Display name used when a post's author no longer exists.
const UNKNOWN_AUTHOR: &str = "unknown";

/// An uploaded file before it reaches the store.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Client-supplied filename (used for the extension only).
    pub original_name: String,
    /// File content.
    pub content: Vec<u8>,
}

/// A post joined with its author's display name.
#[derive(Debug, Clone)]
pub struct PostWithAuthor {
    /// The post.
    pub post: ForumPost,
    /// Resolved author username, or the "unknown" placeholder.
    pub author_name: String,
}

/// High-level operations on forum posts.
pub struct PostService<'a> {
    pool: &'a SqlitePool,
    storage: &'a FileStorage,
}

impl<'a> PostService<'a> {
    /// Create a new PostService.
    pub fn new(pool: &'a SqlitePool, storage: &'a FileStorage) -> Self {
        Self { pool, storage }
    }

    /// Create one or more posts.
    ///
    /// `titles` and `notes` are parallel sequences: a single-element pair is
    /// the plain form, longer pairs are the batch form. Uploaded files are
    /// partitioned across the resulting posts in input order, in chunks of
    /// [`MAX_FILES_PER_POST`]: post i receives files [i*5, i*5+5).
    ///
    /// Files are written to the store before any record is inserted. If
    /// insertion fails, files not referenced by an already-persisted post
    /// are removed again.
    pub async fn create(
        &self,
        author_id: i64,
        titles: Vec<String>,
        notes: Vec<String>,
        files: Vec<UploadedFile>,
    ) -> Result<Vec<ForumPost>> {
        if titles.is_empty() || notes.is_empty() {
            return Err(AppError::Validation(
                "title and note are required".to_string(),
            ));
        }
        if titles.len() != notes.len() {
            return Err(AppError::Validation(
                "title and note counts must match".to_string(),
            ));
        }
        if titles.iter().any(|t| t.trim().is_empty())
            || notes.iter().any(|n| n.trim().is_empty())
        {
            return Err(AppError::Validation(
                "title and note are required".to_string(),
            ));
        }
        if files.len() > titles.len() * MAX_FILES_PER_POST {
            return Err(AppError::Validation(format!(
                "at most {MAX_FILES_PER_POST} images per post"
            )));
        }

        // Write uploads first; clean them all up if any write fails.
        let stored = self.store_files(&files)?;

        let repo = PostRepository::new(self.pool);
        let mut created = Vec::with_capacity(titles.len());

        for (i, (title, note)) in titles.into_iter().zip(notes).enumerate() {
            let start = (i * MAX_FILES_PER_POST).min(stored.len());
            let end = ((i + 1) * MAX_FILES_PER_POST).min(stored.len());
            let images = stored[start..end].to_vec();

            let new_post = NewPost::new(title, note, author_id).with_images(images);
            match repo.create(&new_post).await {
                Ok(post) => created.push(post),
                Err(e) => {
                    // Files from this and later chunks are unreferenced now
                    self.remove_files(&stored[start..]);
                    return Err(e);
                }
            }
        }

        Ok(created)
    }

    /// Partially update a post.
    ///
    /// Empty title/note values are treated as absent and keep the prior
    /// value. When new files are supplied the images list is fully
    /// replaced and the previously referenced files are removed from the
    /// store after a successful save.
    pub async fn update(
        &self,
        id: i64,
        title: Option<String>,
        note: Option<String>,
        files: Vec<UploadedFile>,
    ) -> Result<ForumPost> {
        if files.len() > MAX_FILES_PER_POST {
            return Err(AppError::Validation(format!(
                "at most {MAX_FILES_PER_POST} images per post"
            )));
        }

        let repo = PostRepository::new(self.pool);
        let existing = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("forum post".to_string()))?;

        let mut update = PostUpdate::new();
        if let Some(title) = title.filter(|t| !t.trim().is_empty()) {
            update = update.title(title);
        }
        if let Some(note) = note.filter(|n| !n.trim().is_empty()) {
            update = update.note(note);
        }

        let replaced_images = if files.is_empty() {
            None
        } else {
            let stored = self.store_files(&files)?;
            update = update.images(stored);
            Some(existing.images.clone())
        };

        let updated = match repo.update(id, &update).await {
            Ok(Some(post)) => post,
            Ok(None) => {
                // Deleted between lookup and save
                if let Some(ref new_images) = update.images {
                    self.remove_files(new_images);
                }
                return Err(AppError::NotFound("forum post".to_string()));
            }
            Err(e) => {
                if let Some(ref new_images) = update.images {
                    self.remove_files(new_images);
                }
                return Err(e);
            }
        };

        // Replaced files are unreferenced now
        if let Some(old_images) = replaced_images {
            self.remove_files(&old_images);
        }

        Ok(updated)
    }

    /// Delete a post and its attached files.
    ///
    /// Files are removed first, then the record. Missing files are skipped
    /// silently; a file-system failure is logged and swallowed so it blocks
    /// neither the remaining files nor the record.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let repo = PostRepository::new(self.pool);
        let post = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("forum post".to_string()))?;

        self.remove_files(&post.images);

        if !repo.delete(id).await? {
            return Err(AppError::NotFound("forum post".to_string()));
        }

        Ok(())
    }

    /// List all posts with their authors resolved to display names.
    pub async fn list(&self) -> Result<Vec<PostWithAuthor>> {
        let repo = PostRepository::new(self.pool);
        let user_repo = UserRepository::new(self.pool);

        let posts = repo.list().await?;

        let mut result = Vec::with_capacity(posts.len());
        for post in posts {
            let author_name = user_repo
                .get_by_id(post.author_id)
                .await
                .ok()
                .flatten()
                .map(|u| u.username)
                .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());

            result.push(PostWithAuthor { post, author_name });
        }

        Ok(result)
    }

    /// Write uploads to the store, returning the stored names.
    ///
    /// If any write fails, already-written files are removed again.
    fn store_files(&self, files: &[UploadedFile]) -> Result<Vec<String>> {
        let mut stored = Vec::with_capacity(files.len());
        for file in files {
            match self.storage.save(&file.content, &file.original_name) {
                Ok(name) => stored.push(name),
                Err(e) => {
                    self.remove_files(&stored);
                    return Err(e);
                }
            }
        }
        Ok(stored)
    }

    /// Best-effort removal of stored files. Missing files are skipped;
    /// failures are logged and swallowed.
    fn remove_files(&self, stored_names: &[String]) {
        for name in stored_names {
            match self.storage.delete(name) {
                Ok(true) => debug!(file = %name, "removed stored file"),
                Ok(false) => debug!(file = %name, "stored file already absent"),
                Err(e) => warn!(file = %name, error = %e, "failed to remove stored file"),
            }
        }
    }
}
