//! Interface to the remote code-hosting platform.
//!
//! The driver only sees the narrow `Forge` trait; the GitHub implementation
//! lives behind it so unit tests can inject a mock.

/// Remote connection configuration.
pub mod config;

/// GitHub API client implementation.
pub mod github;

/// Request and snapshot types exchanged with the forge.
pub mod request;

/// The `Forge` trait abstraction.
pub mod traits;
