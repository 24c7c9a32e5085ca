//! Request DTOs for the Web API.

use serde::Deserialize;

/// Signup request.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    /// Desired username.
    pub username: String,
    /// Password.
    pub password: String,
}

/// Signin request.
#[derive(Debug, Deserialize)]
pub struct SigninRequest {
    /// Username.
    pub username: String,
    /// Password.
    pub password: String,
}

/// One field of a definition create request.
///
/// The type arrives as a plain string and is validated by the definition
/// service, so a bad type yields the same ordered validation failure as an
/// empty field name.
#[derive(Debug, Deserialize)]
pub struct FieldRequest {
    /// Field label.
    #[serde(default)]
    pub name: String,
    /// Requested input type. Missing key becomes the empty string so the
    /// service reports it as a validation failure rather than a parse error.
    #[serde(rename = "type", default)]
    pub field_type: String,
}

/// Definition create request.
#[derive(Debug, Deserialize)]
pub struct CreateDefinitionRequest {
    /// Forum name.
    #[serde(rename = "forumName", default)]
    pub forum_name: String,
    /// Ordered form fields.
    #[serde(default)]
    pub fields: Vec<FieldRequest>,
}
