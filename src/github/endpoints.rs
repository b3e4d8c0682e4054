// GitHub API endpoint functions.
// Provides typed methods for fetching data from the GitHub REST API.

use async_trait::async_trait;

use crate::error::{HubviewError, Result};

use super::client::{GitHubClient, UserFetcher};
use super::types::{Repository, UserProfile};

#[async_trait]
impl UserFetcher for GitHubClient {
    /// Get a user's profile.
    async fn fetch_user(&self, username: &str) -> Result<UserProfile> {
        let response = self.get(&format!("/users/{}", username)).await?;
        let user: UserProfile = response.json().await.map_err(HubviewError::Transport)?;
        Ok(user)
    }

    /// Get a user's public repositories (first page only, no pagination).
    async fn fetch_repos(&self, username: &str) -> Result<Vec<Repository>> {
        let response = self.get(&format!("/users/{}/repos", username)).await?;
        let repos: Vec<Repository> = response.json().await.map_err(HubviewError::Transport)?;
        Ok(repos)
    }
}
