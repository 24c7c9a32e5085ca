//! Database schema migrations for forumhub.
//!
//! Each entry is applied in order inside its own transaction and recorded
//! in the `schema_version` table.

/// Ordered list of schema migrations.
pub const MIGRATIONS: &[&str] = &[
    // v1: users
    "CREATE TABLE users (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        username    TEXT NOT NULL UNIQUE,
        password    TEXT NOT NULL,
        is_admin    INTEGER NOT NULL DEFAULT 0,
        created_at  TEXT NOT NULL DEFAULT (datetime('now'))
    );
    CREATE INDEX idx_users_username ON users(username);",
    // v2: forum posts; images is a JSON array of stored filenames
    "CREATE TABLE posts (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        title       TEXT NOT NULL,
        note        TEXT NOT NULL,
        images      TEXT NOT NULL DEFAULT '[]',
        author_id   INTEGER NOT NULL,
        created_at  TEXT NOT NULL DEFAULT (datetime('now'))
    );
    CREATE INDEX idx_posts_author ON posts(author_id);",
    // v3: forum definitions; fields is a JSON array of {name, type}
    "CREATE TABLE definitions (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        forum_name  TEXT NOT NULL UNIQUE,
        fields      TEXT NOT NULL,
        created_by  INTEGER NOT NULL,
        created_at  TEXT NOT NULL DEFAULT (datetime('now')),
        updated_at  TEXT NOT NULL DEFAULT (datetime('now'))
    );
    CREATE INDEX idx_definitions_forum_name ON definitions(forum_name);",
];
