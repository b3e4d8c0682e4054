// GitHub API module.
// Provides the client, typed endpoints, and response types for the REST API.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::{GitHubClient, UserFetcher};
pub use types::{Repository, UserProfile};
