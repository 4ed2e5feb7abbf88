use compact_str::CompactString;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::id::PollId;

/// Registration payload, built per call and never stored
#[derive(Clone, Copy, Serialize)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

impl<'a> Credentials<'a> {
    pub fn new(username: &'a str, password: &'a str) -> Self {
        Self { username, password }
    }
}

impl std::fmt::Debug for Credentials<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Offset pagination forwarded verbatim as `skip` and `limit` query parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    pub skip: u32,
    pub limit: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { skip: 0, limit: 10 }
    }
}

impl PageRequest {
    pub fn new(skip: u32, limit: u32) -> Self {
        Self { skip, limit }
    }

    pub fn with_skip(mut self, skip: u32) -> Self {
        self.skip = skip;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// The page directly after this one, with the same page size
    pub fn next_page(&self) -> Self {
        Self {
            skip: self.skip.saturating_add(self.limit),
            limit: self.limit,
        }
    }
}

/// A poll as returned by `GET /polls`
///
/// Only `id` and `question` are required; anything else the server sends
/// (options, owner, timestamps, ...) is kept untouched in `extra`.
///
/// An element with a missing or `null` `question`, or an `id` that is neither
/// an integer nor a string, fails to decode, and with it the whole page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poll {
    pub id: PollId,
    pub question: CompactString,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Poll {
    /// Look up a field by its wire name, including the unrecognized ones
    pub fn field(&self, name: &str) -> Option<Value> {
        match name {
            "id" => serde_json::to_value(&self.id).ok(),
            "question" => Some(Value::String(self.question.to_string())),
            _ => self.extra.get(name).cloned(),
        }
    }
}

/// Successful response to `POST /register`
///
/// The body describes the created user; its shape is left to the server, so it
/// is kept as text and decoded on request.
#[derive(Debug, Clone)]
pub struct RegisterResponse {
    pub status: StatusCode,
    pub body: CompactString,
}

impl RegisterResponse {
    pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.body)
    }
}
