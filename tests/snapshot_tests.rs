//! Snapshot tests - JSON round-trips, restore semantics, and load
//! failure reporting

use color_lines::core::{GameSession, LoadError, Snapshot};
use color_lines::types::{Color, Coord, TurnPhase, CELL_COUNT};

#[test]
fn test_roundtrip_from_reachable_states() {
    let mut session = GameSession::new(123);

    let mut snapshots = vec![Snapshot::capture(&session)]; // Spawning
    session.advance();
    session.tick_time(17);
    snapshots.push(Snapshot::capture(&session)); // AwaitingMove

    let from = first_occupied(&session);
    let to = empty_in_row(&session, from.y);
    assert!(session.attempt_move(from, to));
    snapshots.push(Snapshot::capture(&session)); // Matching

    session.pause();
    snapshots.push(Snapshot::capture(&session)); // Paused

    for snapshot in snapshots {
        let json = snapshot.to_json().unwrap();
        let decoded = Snapshot::from_json(&json).unwrap();
        assert_eq!(decoded, snapshot);

        let mut restored = GameSession::new(1);
        restored.restore(&decoded).unwrap();
        assert_eq!(restored.score(), snapshot.score);
        assert_eq!(restored.elapsed_secs(), snapshot.time);
        assert_eq!(restored.phase(), snapshot.state);
        assert_eq!(restored.board().cells().to_vec(), snapshot.tiles);
    }
}

#[test]
fn test_restored_pause_resumes_to_awaiting_move() {
    let mut session = GameSession::new(55);
    session.advance();
    session.pause();

    let snapshot = Snapshot::capture(&session);
    let mut restored = GameSession::new(2);
    restored.restore(&snapshot).unwrap();
    assert_eq!(restored.phase(), TurnPhase::Paused);

    restored.resume();
    assert_eq!(restored.phase(), TurnPhase::AwaitingMove);
}

#[test]
fn test_restored_session_keeps_playing() {
    let mut session = GameSession::new(9);
    session.advance();
    let snapshot = Snapshot::capture(&session);

    let mut restored = GameSession::new(1);
    restored.restore(&snapshot).unwrap();

    // The restored session honors the move contract and the turn cycle.
    let from = first_occupied(&restored);
    let to = empty_in_row(&restored, from.y);
    assert!(restored.attempt_move(from, to));
    assert!(restored.advance());
    assert_eq!(restored.phase(), TurnPhase::Spawning);
    assert!(restored.advance());
    assert_eq!(restored.phase(), TurnPhase::AwaitingMove);
}

#[test]
fn test_hand_written_snapshot_loads() {
    let tiles: Vec<String> = (0..CELL_COUNT)
        .map(|idx| {
            if idx == 0 {
                "\"A\"".to_string()
            } else {
                "\"Empty\"".to_string()
            }
        })
        .collect();
    let json = format!(
        "{{\"score\":12,\"time\":34,\"state\":\"AwaitingMove\",\"tiles\":[{}]}}",
        tiles.join(",")
    );

    let snapshot = Snapshot::from_json(&json).unwrap();
    assert_eq!(snapshot.score, 12);
    assert_eq!(snapshot.time, 34);
    assert_eq!(snapshot.state, TurnPhase::AwaitingMove);
    assert_eq!(snapshot.tiles[0], Color::A);
    assert_eq!(snapshot.tiles[1], Color::Empty);
}

#[test]
fn test_load_failures_are_typed() {
    // Not JSON at all.
    assert!(matches!(
        Snapshot::from_json("###"),
        Err(LoadError::Malformed(_))
    ));

    // Missing fields.
    assert!(matches!(
        Snapshot::from_json("{\"score\":1,\"time\":2}"),
        Err(LoadError::Malformed(_))
    ));

    // Unknown color tag.
    let good = Snapshot::capture(&GameSession::new(1)).to_json().unwrap();
    let bad_tag = good.replacen("\"Empty\"", "\"Purple\"", 1);
    assert!(matches!(
        Snapshot::from_json(&bad_tag),
        Err(LoadError::Malformed(_))
    ));

    // Unknown phase tag.
    let bad_phase = good.replace("\"Spawning\"", "\"Lobby\"");
    assert!(matches!(
        Snapshot::from_json(&bad_phase),
        Err(LoadError::Malformed(_))
    ));
}

#[test]
fn test_short_tile_sequence_rejected_before_mutation() {
    let mut snapshot = Snapshot::capture(&GameSession::new(1));
    snapshot.tiles.truncate(10);

    // from_json rejects it...
    let json = snapshot.to_json().unwrap();
    assert!(matches!(
        Snapshot::from_json(&json),
        Err(LoadError::BadTileCount { expected: 81, found: 10 })
    ));

    // ...and so does a direct restore, leaving the session untouched.
    let mut session = GameSession::new(77);
    session.advance();
    session.tick_time(5);
    let before = session.board().cells().to_vec();
    assert!(session.restore(&snapshot).is_err());
    assert_eq!(session.board().cells().to_vec(), before);
    assert_eq!(session.elapsed_secs(), 5);
}

fn first_occupied(session: &GameSession) -> Coord {
    for y in 0..9u8 {
        for x in 0..9u8 {
            if !session.board().color_at(x, y).unwrap().is_empty() {
                return Coord::new(x, y);
            }
        }
    }
    panic!("no occupied cell");
}

fn empty_in_row(session: &GameSession, y: u8) -> Coord {
    for x in 0..9u8 {
        if session.board().color_at(x, y).unwrap().is_empty() {
            return Coord::new(x, y);
        }
    }
    panic!("row {} is full", y);
}
