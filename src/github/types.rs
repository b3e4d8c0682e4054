// GitHub API response types.
// Defines structs for deserializing GitHub REST API responses.

use serde::Deserialize;

/// User profile from `GET /users/{username}`.
///
/// `created_at` is kept as the raw timestamp string the API returns; it is
/// only ever displayed, never parsed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserProfile {
    pub login: String,
    pub public_repos: u32,
    pub created_at: String,
    pub followers: u32,
    pub following: u32,
}

/// Repository entry from `GET /users/{username}/repos`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Repository {
    pub name: String,
    pub html_url: String,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_user_profile() {
        let json = r#"{
            "login": "octocat",
            "id": 583231,
            "public_repos": 8,
            "created_at": "2011-01-25T18:44:36Z",
            "followers": 100,
            "following": 9
        }"#;
        let user: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(user.login, "octocat");
        assert_eq!(user.public_repos, 8);
        assert_eq!(user.created_at, "2011-01-25T18:44:36Z");
    }

    #[test]
    fn repository_description_may_be_null() {
        let json = r#"[
            {"name": "Hello-World", "html_url": "https://github.com/octocat/Hello-World", "description": null},
            {"name": "Spoon-Knife", "html_url": "https://github.com/octocat/Spoon-Knife", "description": "A fork me repo"}
        ]"#;
        let repos: Vec<Repository> = serde_json::from_str(json).unwrap();
        assert_eq!(repos[0].description, None);
        assert_eq!(repos[1].description.as_deref(), Some("A fork me repo"));
    }
}
