// Line-oriented output formatting.
// All functions write to a generic handle so tests can capture output.

use std::io::{self, Write};

use crate::cache::{CachedUser, RepoMatch};

/// Print the main menu.
pub fn menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "=== GitHub CLI Menu ===")?;
    writeln!(out, "1. Fetch user info")?;
    writeln!(out, "2. List cached users")?;
    writeln!(out, "3. Search cached users")?;
    writeln!(out, "4. Search cached repositories")?;
    writeln!(out, "5. Exit")
}

/// Print a cached user's profile and repository list.
pub fn user_details(out: &mut impl Write, user: &CachedUser) -> io::Result<()> {
    writeln!(out, "=== User Info for {} ===", user.login)?;
    writeln!(out, "Public repos: {}", user.public_repos)?;
    writeln!(out, "Account created at: {}", user.created_at)?;
    writeln!(out, "Followers: {}", user.followers)?;
    writeln!(out, "Following: {}", user.following)?;
    writeln!(out, "Repositories:")?;
    for repo in &user.repos {
        writeln!(out, "- {}: {}", repo.name, repo.html_url)?;
    }
    writeln!(out)
}

/// Print all cache keys, or a placeholder when nothing is cached.
pub fn cached_logins(out: &mut impl Write, logins: &[&str]) -> io::Result<()> {
    if logins.is_empty() {
        return writeln!(out, "No users cached.\n");
    }
    writeln!(out, "Cached users:")?;
    for login in logins {
        writeln!(out, "- {}", login)?;
    }
    writeln!(out)
}

/// Print username search results.
pub fn login_matches(out: &mut impl Write, matches: &[&str]) -> io::Result<()> {
    if matches.is_empty() {
        return writeln!(out, "No matching users found.\n");
    }
    writeln!(out, "Matching users:")?;
    for login in matches {
        writeln!(out, "- {}", login)?;
    }
    writeln!(out)
}

/// Print repository search results as `login/name -> url` lines.
pub fn repo_matches(out: &mut impl Write, matches: &[RepoMatch]) -> io::Result<()> {
    if matches.is_empty() {
        return writeln!(out, "No matching repositories found.\n");
    }
    writeln!(out, "Matching repositories:")?;
    for hit in matches {
        writeln!(out, "{}/{} -> {}", hit.login, hit.name, hit.html_url)?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::Repository;

    fn octocat() -> CachedUser {
        CachedUser {
            login: "octocat".to_string(),
            public_repos: 8,
            created_at: "2011-01-25T18:44:36Z".to_string(),
            followers: 100,
            following: 9,
            repos: vec![Repository {
                name: "Hello-World".to_string(),
                html_url: "https://github.com/octocat/Hello-World".to_string(),
                description: None,
            }],
        }
    }

    fn rendered(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn user_details_formats_profile_and_repos() {
        let output = rendered(|out| user_details(out, &octocat()));
        assert!(output.contains("=== User Info for octocat ==="));
        assert!(output.contains("Public repos: 8"));
        assert!(output.contains("Account created at: 2011-01-25T18:44:36Z"));
        assert!(output.contains("Followers: 100"));
        assert!(output.contains("Following: 9"));
        assert!(output.contains("- Hello-World: https://github.com/octocat/Hello-World"));
    }

    #[test]
    fn empty_results_print_not_found_messages() {
        assert!(rendered(|out| cached_logins(out, &[])).contains("No users cached."));
        assert!(rendered(|out| login_matches(out, &[])).contains("No matching users found."));
        assert!(rendered(|out| repo_matches(out, &[])).contains("No matching repositories found."));
    }

    #[test]
    fn repo_matches_use_qualified_arrow_lines() {
        let hits = vec![RepoMatch {
            login: "octocat".to_string(),
            name: "Hello-World".to_string(),
            html_url: "https://github.com/octocat/Hello-World".to_string(),
        }];
        let output = rendered(|out| repo_matches(out, &hits));
        assert!(
            output.contains("octocat/Hello-World -> https://github.com/octocat/Hello-World\n")
        );
    }
}
