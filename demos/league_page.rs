//! League Page Example
//!
//! A small keeper-league roster page. Clicking a roster entry opens the
//! player modal; the player card fragment is served by the same app at
//! `/leagues/{league_id}/players/{player_id}` and honors the page's
//! `stat_source` query parameter.
//!
//! Run with: cargo run --example league_page
//! Then open http://127.0.0.1:3000 in your browser
//! (or http://127.0.0.1:3000/?stat_source=espn to switch stat sources)

use axum::{
    extract::{Path, Query},
    response::Html,
    routing::get,
};
use courtside::{HttpFragmentSource, PageState, RouterConfig, create_router};
use std::collections::HashMap;

const LEAGUE_ID: &str = "12";

const ROSTER: [(&str, &str, &str); 4] = [
    ("203999", "Nikola Jokic", "C"),
    ("1628369", "Jayson Tatum", "F"),
    ("1629029", "Luka Doncic", "G"),
    ("201939", "Stephen Curry", "G"),
];

#[tokio::main]
async fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let state = PageState::new(HttpFragmentSource::new("http://127.0.0.1:3000"));

    // Build the roster list with one modal trigger per player
    let rows: String = ROSTER
        .iter()
        .map(|(id, name, position)| {
            format!(
                r#"        <li><button class="player-modal-trigger" data-player-id="{id}" data-league-id="{LEAGUE_ID}">{name} ({position})</button></li>
"#
            )
        })
        .collect();
    let html = include_str!("league_page.html").replace("{{roster}}", &rows);

    let config = RouterConfig::new(state, html).title("Pacific Division Keeper League");

    // The fragment endpoint lives on the same app
    let app = create_router(config).route(
        "/leagues/{league_id}/players/{player_id}",
        get(player_fragment),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000")
        .await
        .unwrap();

    println!("Server running on http://127.0.0.1:3000");

    axum::serve(listener, app).await.unwrap();
}

async fn player_fragment(
    Path((league_id, player_id)): Path<(String, String)>,
    Query(params): Query<HashMap<String, String>>,
) -> Html<String> {
    let source = params
        .get("stat_source")
        .map(String::as_str)
        .unwrap_or("league");
    let card = match ROSTER.iter().find(|(id, ..)| *id == player_id) {
        Some((id, name, position)) => format!(
            r#"<div class="p-12">
  <h2>{name}</h2>
  <p>#{id} &middot; {position} &middot; league {league_id}</p>
  <p class="text-sm text-gray-500">stats via {source}</p>
</div>"#
        ),
        None => {
            format!(r#"<div class="p-12"><p>No player {player_id} in league {league_id}.</p></div>"#)
        }
    };
    Html(card)
}
