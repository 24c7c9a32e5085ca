//! API handlers.

pub mod auth;
pub mod definition;
pub mod post;

pub use auth::*;
pub use definition::*;
pub use post::*;
