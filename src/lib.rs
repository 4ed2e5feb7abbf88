//! Client for the Polly polling API: user registration and paginated poll
//! listing.

pub mod client;
pub mod domain;
pub mod id;
pub mod logging;

pub use client::{ClientConfig, ClientError, PollyApi, PollyService, list_polls, register};
pub use domain::{Credentials, PageRequest, Poll, RegisterResponse};
pub use id::PollId;
