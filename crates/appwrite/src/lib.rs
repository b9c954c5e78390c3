//! Appwrite REST client library.
//!
//! Wraps the subset of the Appwrite HTTP API this service talks to:
//! client configuration (endpoint, project, API key) and the Messaging
//! service's push-notification endpoint.

pub mod client;
pub mod messaging;
