//! Shared fixtures for the integration tests

#![allow(dead_code)]

use serde_json::{Value, json};
use showfinder_core::{ClientConfig, Controller, ControllerConfig, MemoryPage, TvMazeClient};
use wiremock::MockServer;

/// Route test logs through the test harness; safe to call repeatedly
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("showfinder_core=debug")
        .with_test_writer()
        .try_init();
}

pub fn client_for(server: &MockServer) -> TvMazeClient {
    TvMazeClient::with_config(ClientConfig::with_base_url(server.uri()))
        .expect("client should build")
}

pub fn controller_for(server: &MockServer, config: ControllerConfig) -> Controller<MemoryPage> {
    Controller::with_config(client_for(server), MemoryPage::new(), config)
}

/// One `/search/shows` hit
pub fn hit(id: u64, name: &str, summary: Option<&str>, medium: Option<&str>) -> Value {
    json!({
        "score": 0.9,
        "show": {
            "id": id,
            "url": format!("https://www.tvmaze.com/shows/{}", id),
            "name": name,
            "type": "Scripted",
            "summary": summary,
            "image": medium.map(|m| json!({ "medium": m, "original": m })),
        }
    })
}

/// One `/shows/{id}/episodes` element
pub fn episode(id: u64, name: &str, season: u32, number: u32) -> Value {
    json!({
        "id": id,
        "url": format!("https://www.tvmaze.com/episodes/{}", id),
        "name": name,
        "season": season,
        "number": number,
        "type": "regular",
        "airdate": "1966-01-12",
        "runtime": 30,
        "summary": null,
    })
}
