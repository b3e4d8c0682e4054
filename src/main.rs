// hubview: interactive CLI for browsing GitHub user profiles and repositories.

mod app;
mod cache;
mod error;
mod github;
mod render;

use std::io;

use app::App;
use error::Result;
use github::GitHubClient;

#[tokio::main]
async fn main() -> Result<()> {
    let client = GitHubClient::new()?;
    let mut app = App::new(client);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    app.run(&mut input, &mut out).await
}
