//! Polly API client modules
//!
//! [`PollyApi`] performs the HTTP calls and reports tagged errors.
//! [`PollyService`] and the free [`register`] / [`list_polls`] functions sit on
//! top of it and collapse every failure into `None` plus a log entry.

pub mod api;
pub mod config;
pub mod error;
pub mod service;

pub use api::PollyApi;
pub use config::{ClientConfig, RequestConfig};
pub use error::{ClientError, Result};
pub use service::{PollyService, list_polls, register};
