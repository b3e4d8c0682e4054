// Session cache for fetched users.
// In-memory only: entries live until the process exits, with no eviction.

use std::collections::HashMap;

use crate::github::{Repository, UserProfile};

/// A user's profile and repository list, cached as one unit.
///
/// Assembled only after both fetches succeed and never mutated afterwards,
/// so the repos always belong to the same fetch as the profile fields.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedUser {
    pub login: String,
    pub public_repos: u32,
    pub created_at: String,
    pub followers: u32,
    pub following: u32,
    pub repos: Vec<Repository>,
}

impl CachedUser {
    /// Combine a profile and its repository list, preserving API order.
    pub fn assemble(profile: UserProfile, repos: Vec<Repository>) -> Self {
        Self {
            login: profile.login,
            public_repos: profile.public_repos,
            created_at: profile.created_at,
            followers: profile.followers,
            following: profile.following,
            repos,
        }
    }
}

/// A repository search hit, qualified by the cached user it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct RepoMatch {
    pub login: String,
    pub name: String,
    pub html_url: String,
}

/// Map from username (exactly as typed, case-sensitive) to cached aggregate.
#[derive(Debug, Default)]
pub struct UserCache {
    entries: HashMap<String, CachedUser>,
}

impl UserCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a user by the exact key it was cached under.
    pub fn get(&self, username: &str) -> Option<&CachedUser> {
        self.entries.get(username)
    }

    /// Insert a freshly assembled user. The only mutation the cache supports.
    pub fn put(&mut self, username: String, user: CachedUser) {
        self.entries.insert(username, user);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All cache keys, sorted for stable output.
    pub fn logins(&self) -> Vec<&str> {
        let mut logins: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        logins.sort_unstable();
        logins
    }

    /// Cache keys containing `term`, case-insensitively.
    pub fn search_logins(&self, term: &str) -> Vec<&str> {
        let term = term.to_lowercase();
        let mut matches: Vec<&str> = self
            .entries
            .keys()
            .filter(|login| login.to_lowercase().contains(&term))
            .map(String::as_str)
            .collect();
        matches.sort_unstable();
        matches
    }

    /// Repositories across all cached users whose name contains `term`,
    /// case-insensitively.
    pub fn search_repos(&self, term: &str) -> Vec<RepoMatch> {
        let term = term.to_lowercase();
        let mut matches: Vec<RepoMatch> = Vec::new();
        for login in self.logins() {
            let user = &self.entries[login];
            for repo in &user.repos {
                if repo.name.to_lowercase().contains(&term) {
                    matches.push(RepoMatch {
                        login: user.login.clone(),
                        name: repo.name.clone(),
                        html_url: repo.html_url.clone(),
                    });
                }
            }
        }
        matches
    }
}
