//! Debug script to inspect raw TVMaze responses next to their normalized form
//!
//! Usage: cargo run --example debug_search -- "twin peaks"

use showfinder_core::url::{BASE_URL, build_episodes_url, build_search_url};
use showfinder_core::{parse_episode_list, parse_show_search};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let term = std::env::args().nth(1).unwrap_or_else(|| "batman".to_string());
    let client = reqwest::Client::new();

    println!("Searching shows for '{}'...\n", term);
    let body = client
        .get(build_search_url(BASE_URL, &term))
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    std::fs::write("debug_search.json", &body)?;
    println!("Raw response saved to debug_search.json");

    let shows = parse_show_search(&body)?;
    for show in &shows {
        println!("{:>8}  {}  [{}]", show.id, show.name, show.image);
    }

    let Some(first) = shows.first() else {
        println!("No results");
        return Ok(());
    };

    println!("\n=== Episodes of {} ===\n", first.name);
    let body = client
        .get(build_episodes_url(BASE_URL, first.id))
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    for episode in parse_episode_list(&body)? {
        println!("{}", episode.label());
    }

    Ok(())
}
