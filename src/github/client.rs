// GitHub API HTTP client.
// Handles request construction and response status checking.

use async_trait::async_trait;
use reqwest::{
    Client, Response,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::{HubviewError, Result};

use super::types::{Repository, UserProfile};

const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Source of user profiles and repository lists.
///
/// The command loop depends on this trait rather than on `GitHubClient`
/// directly, so tests can drive it with scripted responses.
#[async_trait]
pub trait UserFetcher: Send + Sync {
    /// Fetch a user's profile by username.
    async fn fetch_user(&self, username: &str) -> Result<UserProfile>;

    /// Fetch a user's repositories. Only the first page the API returns.
    async fn fetch_repos(&self, username: &str) -> Result<Vec<Repository>>;
}

/// GitHub API client for unauthenticated requests.
pub struct GitHubClient {
    client: Client,
}

impl GitHubClient {
    /// Create a new GitHub client with the standard API headers.
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("hubview-cli"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(HubviewError::Transport)?;

        Ok(Self { client })
    }

    /// Make a GET request to the GitHub API.
    pub(crate) async fn get(&self, endpoint: &str) -> Result<Response> {
        let url = format!("{}{}", GITHUB_API_BASE, endpoint);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(HubviewError::Transport)?;

        check_response(response)
    }
}

/// Check response status and convert non-2xx into a status error.
fn check_response(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(HubviewError::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        })
    }
}
