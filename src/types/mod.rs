use serde::{Deserialize, Serialize};

use std::fmt;

/// Raw values held by the sign-in form
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub email: String,
    pub password: String,
    pub remember: bool,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            remember: true,
        }
    }
}

impl FormValues {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            ..Default::default()
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }
}

/// Inputs that carry validation rules
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Email,
    Password,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::Email, Field::Password];

    pub fn name(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where an error is displayed: next to an input, or on the form itself.
///
/// Parsed from the `type` string sent by the authentication service.
/// `"email"` and `"password"` bind to their inputs; `"root"`,
/// `"root.<suffix>"` and any unknown name are form-level and keep the
/// original string as their key.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ErrorPath {
    Field(Field),
    Root(String),
}

pub const ROOT_PATH: &str = "root";

impl ErrorPath {
    pub fn root() -> Self {
        ErrorPath::Root(ROOT_PATH.to_string())
    }

    pub fn root_with(suffix: &str) -> Self {
        ErrorPath::Root(format!("{}.{}", ROOT_PATH, suffix))
    }

    pub fn field(&self) -> Option<Field> {
        match self {
            ErrorPath::Field(field) => Some(*field),
            ErrorPath::Root(_) => None,
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self, ErrorPath::Root(_))
    }
}

impl From<Field> for ErrorPath {
    fn from(field: Field) -> Self {
        ErrorPath::Field(field)
    }
}

impl From<&str> for ErrorPath {
    fn from(path: &str) -> Self {
        match path {
            "email" => ErrorPath::Field(Field::Email),
            "password" => ErrorPath::Field(Field::Password),
            other => ErrorPath::Root(other.to_string()),
        }
    }
}

impl From<String> for ErrorPath {
    fn from(path: String) -> Self {
        match path.as_str() {
            "email" => ErrorPath::Field(Field::Email),
            "password" => ErrorPath::Field(Field::Password),
            _ => ErrorPath::Root(path),
        }
    }
}

impl From<ErrorPath> for String {
    fn from(path: ErrorPath) -> Self {
        path.to_string()
    }
}

impl fmt::Display for ErrorPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorPath::Field(field) => write!(f, "{}", field),
            ErrorPath::Root(key) => f.write_str(key),
        }
    }
}

/// An error message bound to an [`ErrorPath`]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(rename = "type")]
    pub path: ErrorPath,
    pub message: String,
}

impl FieldError {
    pub fn new(path: impl Into<ErrorPath>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn root(message: impl Into<String>) -> Self {
        Self::new(ErrorPath::root(), message)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Public user information (safe to expose to frontend)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserPublic {
    pub id: String,
    pub email: String,
    pub username: Option<String>,
}

/// Login request payload
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Outcome of a sign-in attempt as carried over the wire
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignInReply {
    Authenticated(UserPublic),
    Rejected(Vec<FieldError>),
}

impl SignInReply {
    pub fn into_result(self) -> Result<UserPublic, Vec<FieldError>> {
        match self {
            SignInReply::Authenticated(user) => Ok(user),
            SignInReply::Rejected(errors) => Err(errors),
        }
    }
}

impl From<Result<UserPublic, Vec<FieldError>>> for SignInReply {
    fn from(result: Result<UserPublic, Vec<FieldError>>) -> Self {
        match result {
            Ok(user) => SignInReply::Authenticated(user),
            Err(errors) => SignInReply::Rejected(errors),
        }
    }
}
