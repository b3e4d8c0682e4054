// App state and main command loop.
// Reads menu choices line by line and dispatches to fetch, list, and search.

use std::io::{BufRead, Write};

use crate::cache::{CachedUser, UserCache};
use crate::error::Result;
use crate::github::UserFetcher;
use crate::render;

/// Main application state.
pub struct App<F> {
    fetcher: F,
    cache: UserCache,
    /// Whether the app should exit.
    should_quit: bool,
}

impl<F: UserFetcher> App<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            cache: UserCache::new(),
            should_quit: false,
        }
    }

    /// Main command loop. Returns on menu choice "5" or end of input.
    pub async fn run(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
        while !self.should_quit {
            render::menu(out)?;
            let Some(choice) = prompt(input, out, "Enter your choice: ")? else {
                break;
            };
            self.dispatch(&choice, input, out).await?;
        }
        Ok(())
    }

    /// Handle one menu choice. Fetch errors are printed here, not propagated.
    async fn dispatch(
        &mut self,
        choice: &str,
        input: &mut impl BufRead,
        out: &mut impl Write,
    ) -> Result<()> {
        match choice {
            "1" => {
                let Some(username) = prompt(input, out, "Enter GitHub username: ")? else {
                    return Ok(());
                };
                self.show_user(&username, out).await?;
            }
            "2" => render::cached_logins(out, &self.cache.logins())?,
            "3" => {
                let Some(term) = prompt(input, out, "Enter search term for username: ")? else {
                    return Ok(());
                };
                render::login_matches(out, &self.cache.search_logins(&term))?;
            }
            "4" => {
                let Some(term) = prompt(input, out, "Enter search term for repository name: ")?
                else {
                    return Ok(());
                };
                render::repo_matches(out, &self.cache.search_repos(&term))?;
            }
            "5" => {
                writeln!(out, "Goodbye!")?;
                self.should_quit = true;
            }
            _ => writeln!(out, "Invalid choice. Please try again.\n")?,
        }
        Ok(())
    }

    /// Print a user's details, fetching and caching on a miss.
    ///
    /// The profile fetch runs first, then the repo fetch; the aggregate is
    /// cached only when both succeed. Either failure aborts this iteration
    /// with a printed error and no cache write.
    async fn show_user(&mut self, username: &str, out: &mut impl Write) -> Result<()> {
        if let Some(user) = self.cache.get(username) {
            writeln!(out, "User '{}' is already cached.", username)?;
            render::user_details(out, user)?;
            return Ok(());
        }

        let profile = match self.fetcher.fetch_user(username).await {
            Ok(profile) => profile,
            Err(e) => {
                writeln!(out, "Error fetching user: {}\n", e)?;
                return Ok(());
            }
        };
        let repos = match self.fetcher.fetch_repos(username).await {
            Ok(repos) => repos,
            Err(e) => {
                writeln!(out, "Error fetching repos: {}\n", e)?;
                return Ok(());
            }
        };

        let user = CachedUser::assemble(profile, repos);
        render::user_details(out, &user)?;
        self.cache.put(username.to_string(), user);
        Ok(())
    }
}

/// Write a prompt, then read and trim one line. `None` means end of input.
fn prompt(
    input: &mut impl BufRead,
    out: &mut impl Write,
    text: &str,
) -> Result<Option<String>> {
    write!(out, "{}", text)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
