//! Courtside - realtime league pages with a player detail modal
//!
//! Courtside renders fantasy basketball league pages where the state layer is in Rust
//! and the UI is in HTML, connected by a JSON protocol over WebSocket. Its one
//! interactive feature is the player modal: click a roster entry and a modal opens
//! with a loading spinner, the player card is fetched as an HTML fragment and
//! injected, and `Escape` or the close control animates the modal away.
//!
//! # Architecture
//!
//! - **Rust Layer**: Owns the modal state machine ([`ModalState`]: closed, loading,
//!   open) and the fragment fetch. All transitions are pure functions from state to
//!   [`RenderOp`] batches; no DOM state is tracked by re-reading the page.
//! - **HTML Layer**: A fixed modal shell (overlay, scrim, animated panel, content
//!   slot) appended to every page, plus whatever league markup the application
//!   provides. Trigger elements carry `data-player-id` and `data-league-id`.
//! - **JSON Protocol**: The client runtime forwards delegated DOM events (clicks
//!   with their ancestor chain, keydowns) to the server; the server pushes render
//!   ops (show/hide, set-html, class toggles, scroll lock) that the runtime applies
//!   verbatim.
//!
//! Event handling is delegated: the client installs a single document-level click
//! listener and the server walks the reported ancestor chain for a matching class.
//! Roster entries are produced by realtime page updates, so per-element listeners
//! would go stale; delegation covers elements inserted at any time.
//!
//! # DOM contract
//!
//! The page template ships one modal shell with fixed element ids:
//!
//! | id | region |
//! |----|--------|
//! | `player-modal` | shell root, hidden while closed |
//! | `player-modal-bg` | background scrim |
//! | `player-modal-container` | animated panel |
//! | `player-modal-content` | content slot |
//!
//! Trigger elements match `.player-modal-trigger` and must carry
//! `data-player-id` and `data-league-id`; close controls match
//! `.player-modal-close`; `Escape` also closes. The fragment for a trigger is
//! fetched from `/leagues/{league_id}/players/{player_id}`, with the hosting
//! page's `stat_source` query parameter appended verbatim when present.
//!
//! # Example
//!
//! ```no_run
//! use courtside::{HttpFragmentSource, PageState, RouterConfig, create_router};
//!
//! #[tokio::main]
//! async fn main() {
//!     let state = PageState::new(HttpFragmentSource::new("http://127.0.0.1:3000"));
//!
//!     let html = r#"
//!         <h1>Pacific Division Keeper League</h1>
//!         <button class="player-modal-trigger"
//!                 data-player-id="203999" data-league-id="12">
//!             Nikola Jokic
//!         </button>
//!     "#;
//!
//!     let config = RouterConfig::new(state, html).title("Courtside");
//!     let app = create_router(config);
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:3000")
//!         .await
//!         .unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

use axum::{
    Router,
    extract::{
        Query, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::{Html, IntoResponse},
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};
use thiserror::Error;
use tokio::sync::broadcast;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Shell root element id. Hidden while the modal is closed.
pub const MODAL_ID: &str = "player-modal";
/// Background scrim element id.
pub const MODAL_BG_ID: &str = "player-modal-bg";
/// Animated panel element id.
pub const MODAL_CONTAINER_ID: &str = "player-modal-container";
/// Content slot element id. Receives the loading placeholder, then the fragment.
pub const MODAL_CONTENT_ID: &str = "player-modal-content";
/// Class that marks trigger elements.
pub const TRIGGER_CLASS: &str = "player-modal-trigger";
/// Class that marks close controls.
pub const CLOSE_CLASS: &str = "player-modal-close";
/// Key that closes the modal.
pub const CLOSE_KEY: &str = "Escape";

// The entrance classes go on a beat after the shell is revealed so the CSS
// transition animates instead of snapping; the exit delay covers the reverse
// transition before the shell is hidden again.
const ENTRANCE_DELAY: Duration = Duration::from_millis(10);
const EXIT_DELAY: Duration = Duration::from_millis(200);

const SCRIM_ENTER_CLASSES: [&str; 1] = ["opacity-100"];
const PANEL_ENTER_CLASSES: [&str; 3] = ["opacity-100", "translate-y-0", "sm:scale-100"];
const PANEL_EXIT_CLASSES: [&str; 4] = [
    "opacity-0",
    "translate-y-4",
    "sm:translate-y-0",
    "sm:scale-95",
];

const LOADING_HTML: &str = r#"<div class="p-12 flex items-center justify-center">
  <div class="flex flex-col items-center gap-3">
    <svg class="animate-spin h-8 w-8 text-blue-600" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24">
      <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
      <path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"></path>
    </svg>
    <span class="text-sm text-gray-500">Loading player...</span>
  </div>
</div>"#;

const LOAD_FAILED_HTML: &str = r#"<div class="p-12 flex items-center justify-center">
  <div class="text-red-600 text-sm">Failed to load player data</div>
</div>"#;

/// JSON Protocol: Events from client to server
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum ClientEvent {
    #[serde(rename = "click")]
    Click {
        #[serde(default)]
        path: Vec<EventNode>,
    },
    #[serde(rename = "keydown")]
    Keydown { key: String },
}

/// JSON Protocol: Messages from server to client
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
#[serde(tag = "type")]
enum ServerMessage {
    #[serde(rename = "render")]
    Render { ops: Vec<RenderOp> },
}

/// One element on a delegated event's ancestor chain, innermost first.
///
/// The client runtime serializes `id`, the class list, and the `data-*`
/// attributes (as the DOM `dataset`, so `data-player-id` arrives under
/// `playerId`) for the clicked element and each of its ancestors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventNode {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub data: HashMap<String, String>,
}

/// A single DOM mutation pushed to the client runtime.
///
/// This is the entire rendering boundary: transition functions return batches
/// of ops and the client applies them verbatim. `show`/`hide` toggle the
/// `hidden` class; `lock_scroll`/`unlock_scroll` mark the page body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
#[serde(tag = "op")]
pub enum RenderOp {
    #[serde(rename = "show")]
    Show { id: String },
    #[serde(rename = "hide")]
    Hide { id: String },
    #[serde(rename = "set_html")]
    SetHtml { id: String, html: String },
    #[serde(rename = "add_class")]
    AddClass { id: String, classes: Vec<String> },
    #[serde(rename = "remove_class")]
    RemoveClass { id: String, classes: Vec<String> },
    #[serde(rename = "lock_scroll")]
    LockScroll,
    #[serde(rename = "unlock_scroll")]
    UnlockScroll,
}

fn class_list(classes: &[&str]) -> Vec<String> {
    classes.iter().map(|class| class.to_string()).collect()
}

/// Identifies the player a trigger element points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRef {
    pub league_id: String,
    pub player_id: String,
}

impl PlayerRef {
    pub fn new(league_id: impl Into<String>, player_id: impl Into<String>) -> Self {
        Self {
            league_id: league_id.into(),
            player_id: player_id.into(),
        }
    }

    /// Reads `data-league-id` and `data-player-id` off a trigger element.
    /// Returns `None` when either is missing or empty.
    pub fn from_trigger(node: &EventNode) -> Option<Self> {
        let player_id = node.data.get("playerId").filter(|id| !id.is_empty())?;
        let league_id = node.data.get("leagueId").filter(|id| !id.is_empty())?;
        Some(Self::new(league_id.clone(), player_id.clone()))
    }

    /// Request path for this player's card fragment. A non-empty `stat_source`
    /// from the hosting page's URL is appended verbatim.
    ///
    /// # Example
    /// ```
    /// use courtside::PlayerRef;
    ///
    /// let player = PlayerRef::new("12", "203999");
    /// assert_eq!(player.fragment_path(None), "/leagues/12/players/203999");
    /// assert_eq!(
    ///     player.fragment_path(Some("espn")),
    ///     "/leagues/12/players/203999?stat_source=espn",
    /// );
    /// ```
    pub fn fragment_path(&self, stat_source: Option<&str>) -> String {
        let path = format!("/leagues/{}/players/{}", self.league_id, self.player_id);
        match stat_source {
            Some(source) if !source.is_empty() => format!("{path}?stat_source={source}"),
            _ => path,
        }
    }
}

/// Where the modal currently is. `Loading` covers the window between a trigger
/// click and the fragment settling; a failed fetch lands in `Open` with the
/// error message as content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    Closed,
    Loading,
    Open,
}

/// Render ops to apply after a fixed delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timed {
    pub delay: Duration,
    pub ops: Vec<RenderOp>,
}

/// The fetch an open transition asks for. The generation ties the eventual
/// result back to the open that issued it; stale results are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentRequest {
    pub path: String,
    pub generation: u64,
}

/// Effects of an open transition: immediate ops (reveal the shell, render the
/// loading placeholder, lock scrolling), delayed entrance ops, and the
/// fragment fetch to issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenEffects {
    pub ops: Vec<RenderOp>,
    pub entrance: Timed,
    pub fetch: FragmentRequest,
}

/// Effects of a close transition: immediate exit-animation ops, then the
/// delayed ops that hide the shell and unlock scrolling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseEffects {
    pub ops: Vec<RenderOp>,
    pub settle: Timed,
}

/// The player modal's state machine.
///
/// There is one modal per page, reused across opens. Transitions are pure:
/// they take the event's data and return the render ops, delays, and fetch
/// request to perform, leaving all I/O to the caller ([`PageState`] wires
/// them to the broadcast channel and the tokio runtime).
///
/// Each open bumps a generation counter and each close bumps it again, so a
/// fragment that resolves after a newer open, or after the modal was closed,
/// is recognized as stale and dropped instead of overwriting newer content.
///
/// # Example
/// ```
/// use courtside::{ModalPhase, ModalState, PlayerRef};
///
/// let mut modal = ModalState::new();
/// let effects = modal.open(&PlayerRef::new("12", "203999"), None);
/// assert_eq!(modal.phase(), ModalPhase::Loading);
///
/// let ops = modal.fragment_loaded(effects.fetch.generation, "<div>card</div>");
/// assert!(!ops.is_empty());
/// assert_eq!(modal.phase(), ModalPhase::Open);
/// ```
#[derive(Debug)]
pub struct ModalState {
    phase: ModalPhase,
    generation: u64,
}

impl ModalState {
    pub fn new() -> Self {
        Self {
            phase: ModalPhase::Closed,
            generation: 0,
        }
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    /// Starts (or restarts) the loading sequence for `player`. Valid while
    /// closed and while already open; an open-while-open simply reloads the
    /// shared shell with the new player.
    pub fn open(&mut self, player: &PlayerRef, stat_source: Option<&str>) -> OpenEffects {
        self.generation += 1;
        self.phase = ModalPhase::Loading;
        OpenEffects {
            ops: vec![
                RenderOp::Show {
                    id: MODAL_ID.to_string(),
                },
                RenderOp::SetHtml {
                    id: MODAL_CONTENT_ID.to_string(),
                    html: LOADING_HTML.to_string(),
                },
                RenderOp::LockScroll,
            ],
            entrance: Timed {
                delay: ENTRANCE_DELAY,
                ops: vec![
                    RenderOp::AddClass {
                        id: MODAL_BG_ID.to_string(),
                        classes: class_list(&SCRIM_ENTER_CLASSES),
                    },
                    RenderOp::Show {
                        id: MODAL_CONTAINER_ID.to_string(),
                    },
                    RenderOp::RemoveClass {
                        id: MODAL_CONTAINER_ID.to_string(),
                        classes: class_list(&PANEL_EXIT_CLASSES),
                    },
                    RenderOp::AddClass {
                        id: MODAL_CONTAINER_ID.to_string(),
                        classes: class_list(&PANEL_ENTER_CLASSES),
                    },
                ],
            },
            fetch: FragmentRequest {
                path: player.fragment_path(stat_source),
                generation: self.generation,
            },
        }
    }

    /// Applies a fetched fragment. The body replaces the content slot exactly
    /// as received. Returns no ops when the result is stale.
    pub fn fragment_loaded(&mut self, generation: u64, html: &str) -> Vec<RenderOp> {
        if !self.accepts(generation) {
            return Vec::new();
        }
        self.phase = ModalPhase::Open;
        vec![RenderOp::SetHtml {
            id: MODAL_CONTENT_ID.to_string(),
            html: html.to_string(),
        }]
    }

    /// Applies a fetch failure: the content slot shows the fixed error message
    /// and the modal stays open for another attempt. Returns no ops when the
    /// result is stale.
    pub fn fragment_failed(&mut self, generation: u64) -> Vec<RenderOp> {
        if !self.accepts(generation) {
            return Vec::new();
        }
        self.phase = ModalPhase::Open;
        vec![RenderOp::SetHtml {
            id: MODAL_CONTENT_ID.to_string(),
            html: LOAD_FAILED_HTML.to_string(),
        }]
    }

    fn accepts(&self, generation: u64) -> bool {
        self.phase == ModalPhase::Loading && generation == self.generation
    }

    /// Closes the modal. Returns `None` when already closed, so repeated
    /// closes (close control, `Escape`, or both) are no-ops.
    pub fn close(&mut self) -> Option<CloseEffects> {
        if self.phase == ModalPhase::Closed {
            return None;
        }
        self.phase = ModalPhase::Closed;
        // Invalidate any in-flight fetch; its result must not be written into
        // a closed shell.
        self.generation += 1;
        Some(CloseEffects {
            ops: vec![
                RenderOp::RemoveClass {
                    id: MODAL_BG_ID.to_string(),
                    classes: class_list(&SCRIM_ENTER_CLASSES),
                },
                RenderOp::RemoveClass {
                    id: MODAL_CONTAINER_ID.to_string(),
                    classes: class_list(&PANEL_ENTER_CLASSES),
                },
                RenderOp::AddClass {
                    id: MODAL_CONTAINER_ID.to_string(),
                    classes: class_list(&PANEL_EXIT_CLASSES),
                },
            ],
            settle: Timed {
                delay: EXIT_DELAY,
                ops: vec![
                    RenderOp::Hide {
                        id: MODAL_ID.to_string(),
                    },
                    RenderOp::Hide {
                        id: MODAL_CONTAINER_ID.to_string(),
                    },
                    RenderOp::UnlockScroll,
                ],
            },
        })
    }
}

impl Default for ModalState {
    fn default() -> Self {
        Self::new()
    }
}

/// Error from a [`FragmentSource`].
#[derive(Debug, Error)]
pub enum FragmentError {
    /// The HTTP request itself failed (connection, TLS, body read). Response
    /// status codes are not errors; any response body counts as a fragment.
    #[error("fragment request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// A non-HTTP source could not produce the fragment.
    #[error("fragment source unavailable: {0}")]
    Unavailable(String),
}

/// Produces player card fragments for the modal.
///
/// The production implementation is [`HttpFragmentSource`]; tests and
/// embedded setups can serve fragments from anywhere else.
#[async_trait::async_trait]
pub trait FragmentSource: Send + Sync {
    async fn fetch(&self, path: &str) -> Result<String, FragmentError>;
}

/// Fetches fragments over HTTP from a base URL, typically the page's own
/// origin. One GET per fragment: no extra headers, no body, no timeout, no
/// retry. The response text is returned verbatim whatever the status code.
pub struct HttpFragmentSource {
    base: String,
    client: reqwest::Client,
}

impl HttpFragmentSource {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl FragmentSource for HttpFragmentSource {
    async fn fetch(&self, path: &str) -> Result<String, FragmentError> {
        let url = format!("{}{}", self.base.trim_end_matches('/'), path);
        Ok(self.client.get(&url).send().await?.text().await?)
    }
}

/// Page state shared by all socket connections.
///
/// Holds the modal state machine, the fragment source, and the broadcast
/// channel render ops go out on. Incoming delegated events are dispatched
/// here; effects are performed here (immediate ops broadcast, delayed ops via
/// spawned timers, the fetch in its own task).
///
/// # Thread Safety
/// `PageState` is designed to be shared across async tasks and cloned freely.
/// All mutation is protected by internal locks.
#[derive(Clone)]
pub struct PageState {
    modal: Arc<Mutex<ModalState>>,
    fragments: Arc<dyn FragmentSource>,
    update_tx: broadcast::Sender<ServerMessage>,
}

impl PageState {
    pub fn new(fragments: impl FragmentSource + 'static) -> Self {
        let (tx, _) = broadcast::channel(100);
        Self {
            modal: Arc::new(Mutex::new(ModalState::new())),
            fragments: Arc::new(fragments),
            update_tx: tx,
        }
    }

    pub fn modal_phase(&self) -> ModalPhase {
        self.modal.lock().unwrap().phase()
    }

    /// Opens the modal for a trigger element. Aborts with a diagnostic and no
    /// UI change when the trigger is missing either identifier.
    pub fn open_player_modal(&self, trigger: &EventNode, stat_source: Option<&str>) {
        let Some(player) = PlayerRef::from_trigger(trigger) else {
            tracing::error!("player modal trigger is missing data-player-id or data-league-id");
            return;
        };
        let effects = self.modal.lock().unwrap().open(&player, stat_source);
        tracing::debug!(
            league = %player.league_id,
            player = %player.player_id,
            path = %effects.fetch.path,
            "opening player modal"
        );
        self.broadcast(effects.ops);
        self.schedule(effects.entrance);

        let state = self.clone();
        let FragmentRequest { path, generation } = effects.fetch;
        tokio::spawn(async move {
            let ops = match state.fragments.fetch(&path).await {
                Ok(html) => state.modal.lock().unwrap().fragment_loaded(generation, &html),
                Err(err) => {
                    tracing::error!("error fetching player fragment from {path}: {err}");
                    state.modal.lock().unwrap().fragment_failed(generation)
                }
            };
            if ops.is_empty() {
                tracing::debug!(%path, "dropping stale player fragment");
            }
            state.broadcast(ops);
        });
    }

    /// Closes the modal. No-op while already closed.
    pub fn close_player_modal(&self) {
        let Some(effects) = self.modal.lock().unwrap().close() else {
            return;
        };
        self.broadcast(effects.ops);
        self.schedule(effects.settle);
    }

    fn handle_click(&self, path: &[EventNode], stat_source: Option<&str>) {
        if let Some(trigger) = matching_ancestor(path, TRIGGER_CLASS) {
            self.open_player_modal(trigger, stat_source);
        } else if matching_ancestor(path, CLOSE_CLASS).is_some() {
            self.close_player_modal();
        }
    }

    fn handle_keydown(&self, key: &str) {
        if key == CLOSE_KEY {
            self.close_player_modal();
        }
    }

    fn broadcast(&self, ops: Vec<RenderOp>) {
        if ops.is_empty() {
            return;
        }
        let _ = self.update_tx.send(ServerMessage::Render { ops });
    }

    fn schedule(&self, timed: Timed) {
        let state = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(timed.delay).await;
            state.broadcast(timed.ops);
        });
    }
}

/// Walks a delegated event's ancestor chain, innermost first, for the first
/// element carrying `class`.
fn matching_ancestor<'a>(path: &'a [EventNode], class: &str) -> Option<&'a EventNode> {
    path.iter()
        .find(|node| node.classes.iter().any(|candidate| candidate == class))
}

#[derive(Debug, Deserialize)]
struct SocketParams {
    stat_source: Option<String>,
}

async fn websocket_handler(
    ws: WebSocketUpgrade,
    Query(params): Query<SocketParams>,
    State(state): State<PageState>,
) -> impl IntoResponse {
    // The client runtime copies the page's query string onto the socket URL,
    // which is how the hosting page's stat_source reaches the server.
    ws.on_upgrade(move |socket| websocket(socket, state, params.stat_source))
}

async fn websocket(stream: WebSocket, state: PageState, stat_source: Option<String>) {
    use futures_util::sink::SinkExt;
    use futures_util::stream::StreamExt;

    let (mut sender, mut receiver) = stream.split();

    // Subscribe to render ops from the page state
    let mut update_rx = state.update_tx.subscribe();

    // Spawn task to forward render ops to this client
    let mut send_task = tokio::spawn(async move {
        while let Ok(msg) = update_rx.recv().await {
            let json = serde_json::to_string(&msg).unwrap();
            if sender.send(Message::Text(json.into())).await.is_err() {
                break;
            }
        }
    });

    // Handle incoming delegated events
    let state_clone = state.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            if let Message::Text(text) = msg
                && let Ok(event) = serde_json::from_str::<ClientEvent>(&text)
            {
                match event {
                    ClientEvent::Click { path } => {
                        state_clone.handle_click(&path, stat_source.as_deref());
                    }
                    ClientEvent::Keydown { key } => {
                        state_clone.handle_keydown(&key);
                    }
                }
            }
        }
    });

    // Wait for either task to finish
    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    }
}

// The one modal shell every page carries. Hidden until a trigger is clicked;
// reused across opens, never recreated.
const MODAL_SHELL_HTML: &str = r#"    <div id="player-modal" class="hidden fixed inset-0 z-50 overflow-y-auto">
        <div id="player-modal-bg" class="fixed inset-0 bg-scrim opacity-0 transition-opacity duration-200"></div>
        <div class="flex min-h-screen items-center justify-center p-4">
            <div id="player-modal-container" class="hidden relative bg-white rounded-xl shadow-xl max-w-lg w-full opacity-0 translate-y-4 sm:translate-y-0 sm:scale-95 transition-all duration-200">
                <button type="button" class="player-modal-close modal-close-button" aria-label="Close">&times;</button>
                <div id="player-modal-content"></div>
            </div>
        </div>
    </div>"#;

// Default HTML template - wraps user content and appends the modal shell and
// the client runtime
fn generate_html(title: &str, body_content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="/static/courtside.css">
</head>
<body>
{body_content}
{modal_shell}
    <script src="/static/courtside.js"></script>
</body>
</html>"#,
        title = title,
        body_content = body_content,
        modal_shell = MODAL_SHELL_HTML,
    )
}

/// Configuration for creating a Courtside router
pub struct RouterConfig {
    /// Page state
    pub state: PageState,
    /// Path to static files directory (the client runtime and stylesheet)
    pub static_dir: String,
    /// HTML page title
    pub title: String,
    /// HTML body content (the league page layout)
    pub body_html: String,
}

impl RouterConfig {
    /// Creates a new router configuration
    pub fn new(state: PageState, body_html: impl Into<String>) -> Self {
        Self {
            state,
            static_dir: "static".to_string(),
            title: "Courtside".to_string(),
            body_html: body_html.into(),
        }
    }

    /// Sets the page title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the static files directory
    pub fn static_dir(mut self, dir: impl Into<String>) -> Self {
        self.static_dir = dir.into();
        self
    }
}

/// Creates an Axum router configured for Courtside.
///
/// The router includes:
/// - `/` - Serves the league page with the modal shell appended
/// - `/ws` - WebSocket endpoint for delegated events and render ops
/// - `/static` - Serves static files (courtside.js, courtside.css)
///
/// The player fragment endpoint (`GET /leagues/{league_id}/players/{player_id}`)
/// is the application's to provide; merge it onto the returned router or point
/// [`HttpFragmentSource`] at wherever it is served.
///
/// # Example
/// ```no_run
/// use courtside::{HttpFragmentSource, PageState, RouterConfig, create_router};
///
/// #[tokio::main]
/// async fn main() {
///     let state = PageState::new(HttpFragmentSource::new("http://127.0.0.1:3000"));
///
///     let html = r#"
///         <button class="player-modal-trigger"
///                 data-player-id="203999" data-league-id="12">
///             Nikola Jokic
///         </button>
///     "#;
///
///     let config = RouterConfig::new(state, html).title("Courtside");
///     let app = create_router(config);
///
///     let listener = tokio::net::TcpListener::bind("127.0.0.1:3000")
///         .await
///         .unwrap();
///     axum::serve(listener, app).await.unwrap();
/// }
/// ```
pub fn create_router(config: RouterConfig) -> Router {
    let html_content = generate_html(&config.title, &config.body_html);
    let state = config.state.clone();

    Router::new()
        .route("/", get(move || async move { Html(html_content) }))
        .route("/ws", get(websocket_handler))
        .nest_service("/static", ServeDir::new(config.static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Convenience function to start a Courtside server.
///
/// # Arguments
/// - `state`: The page state
/// - `html`: HTML body content for the league page
/// - `title`: Page title
/// - `addr`: Address to bind to (e.g., "127.0.0.1:3000")
pub async fn start_server(
    state: PageState,
    html: impl Into<String>,
    title: impl Into<String>,
    addr: impl AsRef<str>,
) -> Result<(), std::io::Error> {
    let config = RouterConfig::new(state, html).title(title);
    let app = create_router(config);

    let listener = tokio::net::TcpListener::bind(addr.as_ref()).await?;
    tracing::info!("server running on http://{}", addr.as_ref());

    axum::serve(listener, app).await
}
