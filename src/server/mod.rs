//! HTTP front end.
//!
//! The wire carries move intents only: sessions are held server side in a
//! table keyed by an opaque id handed out by `POST /start`, so no client
//! supplied board state is ever trusted.

mod error;

pub use error::ApiError;

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tokio::sync::{Mutex, RwLock};

use crate::common::ShotOutcome;
use crate::grid::Grid;
use crate::session::{ComputerShot, GameSession, Phase};
use crate::ship::Orientation;

/// Shared server state: the session table and the RNG feeding it.
#[derive(Clone)]
pub struct AppState {
    sessions: Arc<RwLock<HashMap<String, GameSession>>>,
    rng: Arc<Mutex<SmallRng>>,
}

impl AppState {
    /// Fresh state. A fixed `seed` makes every session reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => SmallRng::seed_from_u64(s),
            None => SmallRng::from_os_rng(),
        };
        AppState {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            rng: Arc::new(Mutex::new(rng)),
        }
    }
}

/// A ship the player still has to place.
#[derive(Debug, Clone, Serialize)]
pub struct ShipToPlace {
    pub name: &'static str,
    pub size: usize,
}

#[derive(Debug, Serialize)]
pub struct StartResponse {
    pub session_id: String,
    pub player_board: Grid,
    pub player_view: Grid,
    pub ships_to_place: Vec<ShipToPlace>,
    pub player_hits: usize,
    pub phase: Phase,
}

#[derive(Debug, Deserialize)]
pub struct PlaceShipRequest {
    pub session_id: String,
    pub row: usize,
    pub col: usize,
    pub size: usize,
    pub direction: Orientation,
}

#[derive(Debug, Serialize)]
pub struct PlaceShipResponse {
    pub result: &'static str,
    pub player_board: Grid,
    pub ships_to_place: Vec<ShipToPlace>,
    pub phase: Phase,
}

#[derive(Debug, Deserialize)]
pub struct ShotRequest {
    pub session_id: String,
    pub row: usize,
    pub col: usize,
}

/// One computer shot as reported back to the client.
#[derive(Debug, Serialize)]
pub struct ComputerShotReport {
    pub row: usize,
    pub col: usize,
    pub result: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ShotResponse {
    pub result: &'static str,
    pub sunk_ship: Option<&'static str>,
    pub player_turn: bool,
    pub player_hits: usize,
    pub player_view: Grid,
    pub player_board: Grid,
    pub computer_shots: Vec<ComputerShotReport>,
    pub phase: Phase,
}

fn outcome_label(outcome: ShotOutcome) -> &'static str {
    match outcome {
        ShotOutcome::Hit => "hit",
        ShotOutcome::Miss => "miss",
        ShotOutcome::Sunk(_) => "sunk",
    }
}

fn ships_to_place(session: &GameSession) -> Vec<ShipToPlace> {
    session
        .pending_ships()
        .iter()
        .map(|class| ShipToPlace {
            name: class.name(),
            size: class.length(),
        })
        .collect()
}

/// `POST /start` — create a session with a randomly placed computer fleet.
pub async fn start(State(state): State<AppState>) -> Result<Json<StartResponse>, ApiError> {
    let (session, session_id) = {
        let mut rng = state.rng.lock().await;
        let session = GameSession::new(&mut *rng)?;
        let session_id = format!("{:032x}", rng.random::<u128>());
        (session, session_id)
    };
    log::info!("session {} started", session_id);
    let response = StartResponse {
        session_id: session_id.clone(),
        player_board: session.player_board().own_view(),
        player_view: session.computer_board().tracking_view(),
        ships_to_place: ships_to_place(&session),
        player_hits: session.player_hits(),
        phase: session.phase(),
    };
    state.sessions.write().await.insert(session_id, session);
    Ok(Json(response))
}

/// `POST /place_ship` — place the next pending ship on the player board.
pub async fn place_ship(
    State(state): State<AppState>,
    Json(req): Json<PlaceShipRequest>,
) -> Result<Json<PlaceShipResponse>, ApiError> {
    let mut sessions = state.sessions.write().await;
    let session = sessions
        .get_mut(&req.session_id)
        .ok_or_else(|| ApiError::SessionNotFound(format!("no session {}", req.session_id)))?;
    let next = session
        .pending_ship()
        .ok_or_else(|| ApiError::BadRequest("fleet is already fully placed".to_string()))?;
    if next.length() != req.size {
        return Err(ApiError::BadRequest(format!(
            "next ship to place is the {} (size {}), not size {}",
            next.name(),
            next.length(),
            req.size
        )));
    }
    session.place_player_ship(req.row, req.col, req.direction)?;
    Ok(Json(PlaceShipResponse {
        result: "success",
        player_board: session.player_board().own_view(),
        ships_to_place: ships_to_place(session),
        phase: session.phase(),
    }))
}

/// `POST /player_click` — resolve the player's shot. On a miss the computer
/// plays out its whole turn before the response is assembled, so the client
/// always gets the board back in a state where it may act again (or the
/// game is over).
pub async fn player_click(
    State(state): State<AppState>,
    Json(req): Json<ShotRequest>,
) -> Result<Json<ShotResponse>, ApiError> {
    let mut sessions = state.sessions.write().await;
    let session = sessions
        .get_mut(&req.session_id)
        .ok_or_else(|| ApiError::SessionNotFound(format!("no session {}", req.session_id)))?;

    let outcome = session.player_shot(req.row, req.col)?;

    let mut computer_shots = Vec::new();
    if session.phase() == Phase::ComputerTurn {
        let mut rng = state.rng.lock().await;
        for ComputerShot { row, col, outcome } in session.computer_turn(&mut *rng)? {
            computer_shots.push(ComputerShotReport {
                row,
                col,
                result: outcome_label(outcome),
            });
        }
    }

    let result = match (outcome, session.phase()) {
        (_, Phase::PlayerWon) => "win",
        (ShotOutcome::Sunk(_), _) => "sunk",
        (ShotOutcome::Hit, _) => "hit",
        (ShotOutcome::Miss, _) => "continue",
    };
    if session.phase().is_terminal() {
        log::info!("session {} finished: {:?}", req.session_id, session.phase());
    }

    Ok(Json(ShotResponse {
        result,
        sunk_ship: match outcome {
            ShotOutcome::Sunk(name) => Some(name),
            _ => None,
        },
        player_turn: session.phase() == Phase::PlayerTurn,
        player_hits: session.player_hits(),
        player_view: session.computer_board().tracking_view(),
        player_board: session.player_board().own_view(),
        computer_shots,
        phase: session.phase(),
    }))
}

/// Build the router over the shared state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/start", post(start))
        .route("/place_ship", post(place_ship))
        .route("/player_click", post(player_click))
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(bind: &str, state: AppState) -> anyhow::Result<()> {
    let listener = TcpListener::bind(bind).await?;
    log::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
