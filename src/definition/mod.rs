//! Forum definition management.
//!
//! A definition describes the custom form a forum presents: a unique forum
//! name plus an ordered list of typed fields.

pub mod model;
pub mod repository;
pub mod service;

pub use model::{FieldDescriptor, FieldType, ForumDefinition, NewDefinition};
pub use repository::DefinitionRepository;
pub use service::{DefinitionService, DefinitionWithAuthor, FieldInput};
