use axum::body::Body;
use axum::http::{Request, StatusCode};
use fakeartist::catalog::Catalog;
use fakeartist::protocol::{ClientMessage, ServerMessage};
use fakeartist::state::AppState;
use fakeartist::types::{GameConfig, Phase, Subject, Winner};
use fakeartist::view::Screen;
use fakeartist::ws::handlers::handle_message;
use std::sync::Arc;
use tower::ServiceExt;

fn seeded_state(seed: u64) -> Arc<AppState> {
    Arc::new(AppState::with_seed(
        GameConfig::default(),
        Catalog::builtin(),
        seed,
    ))
}

/// Send a message and fail the test on an error response
async fn send(state: &Arc<AppState>, msg: ClientMessage) {
    if let Some(ServerMessage::Error { code, msg }) = handle_message(msg, state).await {
        panic!("Unexpected error {code}: {msg}");
    }
}

async fn enter_names(state: &Arc<AppState>, names: &[&str]) {
    for (index, name) in names.iter().enumerate() {
        if index >= state.get_game().await.players.len() {
            send(state, ClientMessage::AddPlayer).await;
        }
        send(
            state,
            ClientMessage::RenamePlayer {
                index,
                name: name.to_string(),
            },
        )
        .await;
    }
}

async fn reveal_all(state: &Arc<AppState>) {
    let count = state.get_game().await.players.len();
    for _ in 0..count {
        send(state, ClientMessage::RevealRole).await;
        send(state, ClientMessage::NextPlayer).await;
    }
}

/// End-to-end flow through every screen of a three round game
#[tokio::test]
async fn test_full_game_flow() {
    let state = seeded_state(2024);
    let mut rx = state.broadcast.subscribe();

    // 1. Roster
    enter_names(&state, &["Alva", "Bosse", "Cissi", "Dani"]).await;
    let game = state.get_game().await;
    assert_eq!(game.phase, Phase::Waiting);
    assert_eq!(game.players.len(), 4);
    assert!(game.players.iter().all(|p| !p.fake_artist));

    // 2. Round 1: group finds the fake artist, who then misses the subject
    send(&state, ClientMessage::StartGame).await;
    let game = state.get_game().await;
    assert_eq!(game.phase, Phase::Preparing);
    assert_eq!(game.session.current_round, 1);
    assert_eq!(game.players.iter().filter(|p| p.fake_artist).count(), 1);

    reveal_all(&state).await;
    assert_eq!(state.get_game().await.phase, Phase::Playing);

    send(&state, ClientMessage::FinishDrawing).await;
    send(&state, ClientMessage::Vote { identified: true }).await;
    assert_eq!(state.get_game().await.phase, Phase::Guessing);

    send(&state, ClientMessage::Guess { correct: false }).await;
    let game = state.get_game().await;
    assert_eq!(game.phase, Phase::Summary);
    assert_eq!(game.session.current_round_winner, Some(Winner::RealArtists));
    assert_eq!(game.players.iter().map(|p| p.points).sum::<u32>(), 3);

    // 3. Round 2: fake artist slips through the vote
    send(&state, ClientMessage::NextRound).await;
    assert_eq!(state.get_game().await.session.current_round, 2);
    reveal_all(&state).await;
    send(&state, ClientMessage::FinishDrawing).await;
    send(&state, ClientMessage::Vote { identified: false }).await;
    let game = state.get_game().await;
    assert_eq!(game.phase, Phase::Summary);
    assert_eq!(game.session.current_round_winner, Some(Winner::FakeArtist));
    assert_eq!(game.players.iter().map(|p| p.points).sum::<u32>(), 4);

    // 4. Round 3: fake artist is caught but guesses the subject
    send(&state, ClientMessage::NextRound).await;
    reveal_all(&state).await;
    send(&state, ClientMessage::FinishDrawing).await;
    send(&state, ClientMessage::Vote { identified: true }).await;
    send(&state, ClientMessage::Guess { correct: true }).await;

    let game = state.get_game().await;
    assert_eq!(game.phase, Phase::Finished);
    assert_eq!(game.session.current_round, 3);
    assert_eq!(game.players.iter().map(|p| p.points).sum::<u32>(), 5);
    for pair in game.players.windows(2) {
        assert!(pair[0].points >= pair[1].points);
    }

    let screen = state.screen().await;
    assert_eq!(
        screen.heading,
        format!("{} är dagens vinnare!", game.players[0].name)
    );

    // 5. New game keeps the names and clears everything else
    send(&state, ClientMessage::NewGame).await;
    let game = state.get_game().await;
    assert_eq!(game.phase, Phase::Waiting);
    assert_eq!(game.session.current_round, 0);
    assert!(game.players.iter().all(|p| p.points == 0 && !p.fake_artist));
    assert_eq!(game.players.len(), 4);

    // Every applied action reached the broadcast channel
    let mut last_version = 0;
    while let Ok(msg) = rx.try_recv() {
        if let ServerMessage::Screen { screen, .. } = msg {
            assert!(screen.version > last_version);
            last_version = screen.version;
        }
    }
    assert_eq!(last_version, game.version);
}

#[tokio::test]
async fn test_start_requires_names() {
    let state = seeded_state(1);
    enter_names(&state, &["Alva", "", "Cissi"]).await;

    match handle_message(ClientMessage::StartGame, &state).await {
        Some(ServerMessage::Error { code, .. }) => assert_eq!(code, "EMPTY_NAME"),
        other => panic!("Expected Error message, got {other:?}"),
    }
    assert_eq!(state.get_game().await.phase, Phase::Waiting);
}

#[tokio::test]
async fn test_roster_cap() {
    let state = seeded_state(1);
    for _ in 0..20 {
        send(&state, ClientMessage::AddPlayer).await;
    }
    assert_eq!(state.get_game().await.players.len(), 10);
}

#[tokio::test]
async fn test_fake_artist_screen_never_shows_subject() {
    let state = Arc::new(AppState::with_seed(
        GameConfig::default(),
        Catalog::new(vec![Subject::new("midsommarstång", "högtider")]),
        77,
    ));
    enter_names(&state, &["Alva", "Bosse", "Cissi"]).await;
    send(&state, ClientMessage::StartGame).await;

    for index in 0..3 {
        send(&state, ClientMessage::RevealRole).await;
        let game = state.get_game().await;
        let screen = state.screen().await;
        let shows_subject = screen.highlight.as_deref() == Some("midsommarstång");
        assert_eq!(shows_subject, !game.players[index].fake_artist);
        send(&state, ClientMessage::NextPlayer).await;
    }
}

#[tokio::test]
async fn test_out_of_order_actions_are_rejected() {
    let state = seeded_state(1);
    for msg in [
        ClientMessage::RevealRole,
        ClientMessage::FinishDrawing,
        ClientMessage::Vote { identified: true },
        ClientMessage::Guess { correct: true },
        ClientMessage::NextRound,
        ClientMessage::NewGame,
    ] {
        match handle_message(msg, &state).await {
            Some(ServerMessage::Error { code, .. }) => assert_eq!(code, "INVALID_ACTION"),
            other => panic!("Expected Error message, got {other:?}"),
        }
    }
    assert_eq!(state.get_game().await.version, 1);
}

#[tokio::test]
async fn test_http_api() {
    let state = seeded_state(5);
    let app = fakeartist::app(state.clone(), "static");

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/screen")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let screen: Screen = serde_json::from_slice(&body).unwrap();
    assert_eq!(screen.phase, Phase::Waiting);

    let rename = serde_json::to_string(&ClientMessage::RenamePlayer {
        index: 0,
        name: "Alva".to_string(),
    })
    .unwrap();
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/action")
                .header("content-type", "application/json")
                .body(Body::from(rename))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(state.get_game().await.players[0].name, "Alva");

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/action")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"t":"start_game"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["t"], "error");
    assert_eq!(error["code"], "EMPTY_NAME");
}
