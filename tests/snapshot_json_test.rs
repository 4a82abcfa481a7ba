use blockfall::core::{Board, GameConfig, GameSnapshot, GameState, ScriptedSource};
use blockfall::types::{Command, PieceKind};

#[test]
fn snapshot_json_has_expected_shape() {
    let mut board = Board::new();
    board.set(0, 19, Some(PieceKind::O));
    let gs = GameState::with_board(board, 1000, ScriptedSource::new(vec![PieceKind::T, PieceKind::I]))
        .unwrap();

    let v = serde_json::to_value(gs.snapshot()).unwrap();
    assert_eq!(v["width"], 10);
    assert_eq!(v["height"], 20);
    assert_eq!(v["board"].as_array().unwrap().len(), 20);
    assert_eq!(v["board"][19][0], "O");
    assert!(v["board"][19][1].is_null());
    assert_eq!(v["active"]["kind"], "T");
    assert_eq!(v["active"]["x"], 3);
    assert_eq!(v["active"]["y"], 0);
    assert_eq!(v["active"]["shape"][0], serde_json::json!([false, true, false]));
    assert_eq!(v["next"]["kind"], "I");
    assert_eq!(v["next"]["shape"].as_array().unwrap().len(), 4);
    assert_eq!(v["ghost_y"], 18);
    assert_eq!(v["score"], 0);
    assert_eq!(v["game_over"], false);
}

#[test]
fn snapshot_roundtrips_through_json() {
    let mut gs = GameState::new(GameConfig::default(), 42).unwrap();
    for _ in 0..60 {
        gs.apply(Command::SoftDropNow);
    }
    let snap = gs.snapshot();
    let json = serde_json::to_string(&snap).unwrap();
    let back: GameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snap);
}

#[test]
fn command_stream_parses_from_json() {
    let stream = r#"[
        {"type":"moveLeft"},
        {"type":"rotate"},
        {"type":"tick","elapsedMs":1200},
        {"type":"softDropNow"},
        {"type":"moveRight"}
    ]"#;
    let commands: Vec<Command> = serde_json::from_str(stream).unwrap();
    assert_eq!(
        commands,
        [
            Command::MoveLeft,
            Command::Rotate,
            Command::tick(1200),
            Command::SoftDropNow,
            Command::MoveRight,
        ]
    );

    let mut gs = GameState::with_source(GameConfig::default(), ScriptedSource::repeat(PieceKind::L))
        .unwrap();
    for command in commands {
        assert!(gs.apply(command));
    }
    assert_eq!((gs.active().x, gs.active().y), (3, 2));
}

#[test]
fn game_over_snapshot_is_not_playable() {
    let mut board = Board::new();
    board.set(5, 0, Some(PieceKind::Z));
    let gs = GameState::with_board(board, 1000, ScriptedSource::repeat(PieceKind::O)).unwrap();
    let snap = gs.snapshot();
    assert!(snap.game_over);
    assert!(!snap.playable());
    assert_eq!(snap.ghost_y, snap.active.y);
}
