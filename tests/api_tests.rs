use axum::extract::State;
use axum::Json;
use broadside::server::{self, ApiError, AppState, PlaceShipRequest, ShotRequest};
use broadside::{Cell, Orientation, Phase, BOARD_SIZE, NUM_SHIPS, TOTAL_SHIP_CELLS};

async fn started_session(state: &AppState) -> (String, Vec<usize>) {
    let Json(resp) = server::start(State(state.clone())).await.unwrap();
    let sizes = resp.ships_to_place.iter().map(|s| s.size).collect();
    (resp.session_id, sizes)
}

async fn place_full_fleet(state: &AppState, session_id: &str, sizes: &[usize]) {
    for (row, &size) in sizes.iter().enumerate() {
        let req = PlaceShipRequest {
            session_id: session_id.to_string(),
            row,
            col: 0,
            size,
            direction: Orientation::Horizontal,
        };
        let Json(resp) = server::place_ship(State(state.clone()), Json(req))
            .await
            .unwrap();
        assert_eq!(resp.result, "success");
    }
}

#[tokio::test]
async fn start_returns_a_masked_placement_session() {
    let state = AppState::new(Some(11));
    let Json(resp) = server::start(State(state.clone())).await.unwrap();

    assert_eq!(resp.phase, Phase::Placement);
    assert_eq!(resp.player_hits, 0);
    assert_eq!(resp.ships_to_place.len(), NUM_SHIPS);
    // the player board is untouched and the computer fleet stays hidden
    assert_eq!(resp.player_board.count(Cell::Empty), BOARD_SIZE * BOARD_SIZE);
    assert_eq!(resp.player_view.count(Cell::Ship), 0);

    // ids are opaque and unique per session
    let Json(other) = server::start(State(state.clone())).await.unwrap();
    assert_ne!(resp.session_id, other.session_id);
}

#[tokio::test]
async fn placing_the_fleet_starts_the_battle() {
    let state = AppState::new(Some(12));
    let (session_id, sizes) = started_session(&state).await;

    for (row, &size) in sizes.iter().enumerate() {
        let req = PlaceShipRequest {
            session_id: session_id.clone(),
            row,
            col: 0,
            size,
            direction: Orientation::Horizontal,
        };
        let Json(resp) = server::place_ship(State(state.clone()), Json(req))
            .await
            .unwrap();
        assert_eq!(resp.result, "success");
        assert_eq!(resp.ships_to_place.len(), NUM_SHIPS - row - 1);
        assert_eq!(resp.player_board.count(Cell::Ship), sizes[..=row].iter().sum::<usize>());
        if row + 1 == sizes.len() {
            assert_eq!(resp.phase, Phase::PlayerTurn);
        } else {
            assert_eq!(resp.phase, Phase::Placement);
        }
    }
}

#[tokio::test]
async fn place_ship_rejects_a_size_mismatch() {
    let state = AppState::new(Some(13));
    let (session_id, sizes) = started_session(&state).await;

    let req = PlaceShipRequest {
        session_id,
        row: 0,
        col: 0,
        size: sizes[0] + 1,
        direction: Orientation::Horizontal,
    };
    let err = server::place_ship(State(state.clone()), Json(req))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
}

#[tokio::test]
async fn unknown_session_is_a_not_found_error() {
    let state = AppState::new(Some(14));
    let req = ShotRequest {
        session_id: "deadbeef".to_string(),
        row: 0,
        col: 0,
    };
    let err = server::player_click(State(state.clone()), Json(req))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::SessionNotFound(_)));
}

#[tokio::test]
async fn shots_are_rejected_during_placement() {
    let state = AppState::new(Some(15));
    let (session_id, _) = started_session(&state).await;
    let req = ShotRequest {
        session_id,
        row: 0,
        col: 0,
    };
    let err = server::player_click(State(state.clone()), Json(req))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
}

#[tokio::test]
async fn re_shooting_a_resolved_cell_conflicts() {
    let state = AppState::new(Some(16));
    let (session_id, sizes) = started_session(&state).await;
    place_full_fleet(&state, &session_id, &sizes).await;

    let req = ShotRequest {
        session_id: session_id.clone(),
        row: 0,
        col: 0,
    };
    let Json(resp) = server::player_click(State(state.clone()), Json(req))
        .await
        .unwrap();

    if resp.player_turn {
        let req = ShotRequest {
            session_id,
            row: 0,
            col: 0,
        };
        let err = server::player_click(State(state.clone()), Json(req))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::AlreadyShot(_)));
    }
}

#[tokio::test]
async fn a_session_plays_through_to_a_terminal_phase() {
    let state = AppState::new(Some(17));
    let (session_id, sizes) = started_session(&state).await;
    place_full_fleet(&state, &session_id, &sizes).await;

    let mut final_phase = None;
    'outer: for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let req = ShotRequest {
                session_id: session_id.clone(),
                row,
                col,
            };
            let Json(resp) = server::player_click(State(state.clone()), Json(req))
                .await
                .unwrap();

            match resp.result {
                "win" => {
                    assert_eq!(resp.phase, Phase::PlayerWon);
                    assert_eq!(resp.player_hits, TOTAL_SHIP_CELLS);
                    assert!(!resp.player_turn);
                }
                "sunk" => assert!(resp.sunk_ship.is_some()),
                "hit" => assert!(resp.player_turn),
                "continue" => {
                    // a miss always hands the computer its turn; the trace
                    // ends with its miss unless it won outright
                    assert!(!resp.computer_shots.is_empty());
                    if resp.phase == Phase::PlayerTurn {
                        assert_eq!(resp.computer_shots.last().unwrap().result, "miss");
                    }
                }
                other => panic!("unexpected result {:?}", other),
            }
            // the opponent view never leaks an unhit ship
            assert_eq!(resp.player_view.count(Cell::Ship), 0);

            if resp.phase.is_terminal() {
                final_phase = Some(resp.phase);
                break 'outer;
            }
        }
    }

    let phase = final_phase.expect("game did not terminate");
    assert!(matches!(phase, Phase::PlayerWon | Phase::ComputerWon));

    // a finished game rejects further shots
    let req = ShotRequest {
        session_id,
        row: 0,
        col: 0,
    };
    let err = server::player_click(State(state.clone()), Json(req))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApiError::BadRequest(_) | ApiError::AlreadyShot(_)
    ));
}
