//! Frontend Models
//!
//! Identifiers, payloads and server responses carried by the list controller.

use std::fmt;

use serde::Deserialize;

/// Form field Django reads the anti-forgery token from
pub const CSRF_FORM_FIELD: &str = "csrfmiddlewaretoken";

/// Opaque identifier of a routine or exercise, as rendered into the page
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityRef(String);

impl EntityRef {
    /// Blank values are not identifiers.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Anti-forgery token captured once per page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfToken(String);

impl CsrfToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Serialized form fields, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPayload(Vec<(String, String)>);

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.push((name.into(), value.into()));
        self
    }

    /// First value submitted under `name`
    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    /// `application/x-www-form-urlencoded` body
    pub fn encode(&self) -> Result<String, serde_urlencoded::ser::Error> {
        serde_urlencoded::to_string(&self.0)
    }
}

impl From<Vec<(String, String)>> for FormPayload {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }
}

/// Body returned by the delete endpoints
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeleteResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub reason: Option<String>,
}

/// Why a delete was refused by the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteFailure {
    /// The entity no longer exists
    NotFound,
    /// Any other code, or none at all
    Other(Option<String>),
}

impl DeleteFailure {
    pub fn classify(reason: Option<&str>, not_found_code: &str) -> Self {
        match reason {
            Some(code) if code == not_found_code => Self::NotFound,
            other => Self::Other(other.map(str::to_string)),
        }
    }

    pub fn message(&self, entity_name: &str) -> String {
        match self {
            Self::NotFound => format!(
                "The {} you're trying to delete may already have been deleted. Try refreshing the page.",
                entity_name
            ),
            Self::Other(_) => format!("There was a problem deleting the {}.", entity_name),
        }
    }

    /// Reason code reported by the server, if any
    pub fn code<'a>(&'a self, not_found_code: &'a str) -> Option<&'a str> {
        match self {
            Self::NotFound => Some(not_found_code),
            Self::Other(code) => code.as_deref(),
        }
    }
}

/// User actions that issue a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Add,
    Edit,
    Delete,
}

impl ActionKind {
    /// Alert shown when the request never got a usable answer
    pub fn transport_failure_message(self) -> &'static str {
        match self {
            ActionKind::Add | ActionKind::Delete => "Server error. Bummer.",
            ActionKind::Edit => "Server failure.",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActionState {
    #[default]
    Idle,
    Submitting,
}

/// The two in-place dialogs of a list page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    Add,
    Edit,
}
