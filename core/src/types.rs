//! Domain types and the request-parameter model for the todos API.
//!
//! # Design
//! `Todo` owns its wire rendering: field names are camelCase and timestamps
//! serialize as ISO-8601 UTC with exactly millisecond precision, so every
//! layer that emits JSON goes through the same serde impls. `TodoId` is a
//! validated newtype over the 24-hex-character document identifier format;
//! a value of the type is always well-formed. Request parameters use the
//! explicit three-state `Param` type instead of `Option` because "key
//! absent" and "key present but unusable" map to different error statuses.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A persisted todo record.
///
/// `id` and both timestamps are assigned by the storage collaborator at
/// creation time and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
    #[serde(with = "iso8601_millis")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "iso8601_millis")]
    pub updated_at: DateTime<Utc>,
}

/// Creation payload handed to the storage collaborator after validation.
///
/// Carries only the caller-supplied fields; the store assigns everything
/// else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
}

/// Unique todo identifier: 24 lowercase hex characters.
///
/// The rendered form is the document-store native identifier layout —
/// 4 bytes of big-endian creation seconds followed by 8 random bytes, hex
/// encoded. Construction goes through [`TodoId::generate`] or
/// [`TodoId::parse`], so a value of this type is always well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TodoId(String);

impl TodoId {
    /// Rendered length in characters.
    pub const LEN: usize = 24;

    /// Generates a fresh identifier from the current time and random bytes.
    pub fn generate() -> Self {
        let secs = Utc::now().timestamp() as u32;
        let entropy = Uuid::new_v4().into_bytes();

        let mut raw = [0u8; 12];
        raw[..4].copy_from_slice(&secs.to_be_bytes());
        raw[4..].copy_from_slice(&entropy[..8]);

        Self(raw.iter().map(|byte| format!("{byte:02x}")).collect())
    }

    /// Identifier-syntax check independent of existence.
    pub fn is_valid_format(raw: &str) -> bool {
        raw.len() == Self::LEN && raw.bytes().all(|b| b.is_ascii_hexdigit())
    }

    /// Parses a raw identifier, normalizing hex digits to lowercase.
    pub fn parse(raw: &str) -> Result<Self, InvalidTodoId> {
        if Self::is_valid_format(raw) {
            Ok(Self(raw.to_ascii_lowercase()))
        } else {
            Err(InvalidTodoId)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TodoId {
    type Error = InvalidTodoId;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<TodoId> for String {
    fn from(id: TodoId) -> Self {
        id.0
    }
}

/// A raw identifier failed the 24-hex-character format check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTodoId;

impl fmt::Display for InvalidTodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid todo identifier: expected {} hex characters",
            TodoId::LEN
        )
    }
}

impl std::error::Error for InvalidTodoId {}

/// A request parameter as it appeared in the inbound payload.
///
/// Distinguishes a key that was never sent from one that was sent with an
/// unusable value; the two take different validation paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param<T> {
    /// The key was not present at all.
    Missing,
    /// The key was present but held null or a value of the wrong type.
    Invalid,
    /// The key held a usable value.
    Value(T),
}

/// Parameters of the create operation, extracted from the request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateParams {
    pub title: Param<String>,
}

impl CreateParams {
    /// Extracts creation parameters from a decoded JSON body.
    ///
    /// A non-object body has no `title` key and reads as missing.
    pub fn from_value(body: &Value) -> Self {
        let title = match body.get("title") {
            None => Param::Missing,
            Some(Value::String(title)) => Param::Value(title.clone()),
            Some(_) => Param::Invalid,
        };
        Self { title }
    }

    /// Extracts creation parameters from a raw request body.
    ///
    /// Decoding is lenient: a body that is not valid JSON reads the same as
    /// an empty one, so the framework's own rejection responses never
    /// preempt the contract's error shapes.
    pub fn from_bytes(body: &[u8]) -> Self {
        let value: Value = serde_json::from_slice(body).unwrap_or(Value::Null);
        Self::from_value(&value)
    }
}

/// ISO-8601 UTC rendering at exactly millisecond precision, e.g.
/// `"2022-02-21T23:00:00.000Z"`.
mod iso8601_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
