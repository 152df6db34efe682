//! HTTP client for the essays backend
//!
//! Wraps every backend call with bearer authentication and a single
//! transparent refresh-and-retry when the access token has expired.

#[macro_use]
extern crate tracing;

pub mod client;

pub use client::{EssayClient, EssayClientBuilder, error::ClientError, retry::Attempt};
