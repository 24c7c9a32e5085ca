//! Forum post models.

/// A forum post: a title, a note, and an ordered list of attached images.
///
/// `images` holds stored filenames; each referred to a file that existed in
/// the upload store at the time of the last successful save. `author_id` is
/// a weak reference used for display only.
#[derive(Debug, Clone)]
pub struct ForumPost {
    /// Unique post ID.
    pub id: i64,
    /// Post title.
    pub title: String,
    /// Post body.
    pub note: String,
    /// Stored filenames of attached images, in upload order.
    pub images: Vec<String>,
    /// Author user ID.
    pub author_id: i64,
    /// Creation timestamp.
    pub created_at: String,
}

/// Data for creating a new forum post.
#[derive(Debug, Clone)]
pub struct NewPost {
    /// Post title.
    pub title: String,
    /// Post body.
    pub note: String,
    /// Stored filenames of attached images.
    pub images: Vec<String>,
    /// Author user ID.
    pub author_id: i64,
}

impl NewPost {
    /// Create a new post with no images.
    pub fn new(title: impl Into<String>, note: impl Into<String>, author_id: i64) -> Self {
        Self {
            title: title.into(),
            note: note.into(),
            images: Vec::new(),
            author_id,
        }
    }

    /// Set the attached images.
    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }
}

/// Data for partially updating a forum post.
///
/// Unset fields retain their prior value.
#[derive(Debug, Clone, Default)]
pub struct PostUpdate {
    /// New title.
    pub title: Option<String>,
    /// New note.
    pub note: Option<String>,
    /// Full replacement for the images list.
    pub images: Option<Vec<String>>,
}

impl PostUpdate {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a new title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set a new note.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Replace the images list.
    pub fn images(mut self, images: Vec<String>) -> Self {
        self.images = Some(images);
        self
    }

    /// Check if any fields are set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.note.is_none() && self.images.is_none()
    }
}
