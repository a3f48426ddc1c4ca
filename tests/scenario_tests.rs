//! End-to-end game scenarios driven through the public engine API.

use kalah_engine::{GameConfig, GameEngine, GameError, GameResult, MoveOutcome, PlayerId};

fn engine(stones: u32) -> GameEngine {
    GameEngine::new(GameConfig::new().with_stones_per_pit(stones))
}

fn set(engine: &mut GameEngine, index: usize, stones: i64) {
    engine.board_mut().pit_mut(index).unwrap().set_stones(stones).unwrap();
}

/// A1 with 3 stones feeds A2-A4; no capture, no free turn, then B's turn.
#[test]
fn test_opening_move_and_turn_switch() {
    let mut engine = engine(3);

    let report = engine.make_move_named("A1").unwrap();

    assert_eq!(report.player, PlayerId::A);
    assert_eq!(report.last_index, 3);
    assert_eq!(report.captured, 0);
    assert_eq!(report.outcome, MoveOutcome::TurnComplete);

    let stones: Vec<_> = engine.pits().iter().map(|p| p.stones()).collect();
    assert_eq!(stones, vec![0, 4, 4, 4, 3, 3, 0, 3, 3, 3, 3, 3, 3, 0]);

    assert_eq!(engine.switch_turn(), Ok(PlayerId::B));
    assert_eq!(engine.current_player().name(), "Player B");
    assert_eq!(engine.legal_moves(), vec![7, 8, 9, 10, 11, 12]);
}

/// A6 with one stone lands in MancalaA: free turn with a fresh undo budget.
#[test]
fn test_free_turn_scenario() {
    let mut engine = engine(3);

    // Spend one undo first so the refresh is visible.
    engine.make_move(0).unwrap();
    engine.undo().unwrap();
    assert_eq!(engine.current_player().undos_used(), 1);

    set(&mut engine, 5, 1);
    let report = engine.make_move_named("A6").unwrap();

    assert!(report.outcome.is_free_turn());
    assert_eq!(engine.active_player(), PlayerId::A);
    assert_eq!(engine.current_player().undos_used(), 0);
    assert!(!engine.current_player().has_moved());
    assert_eq!(engine.score(PlayerId::A), 1);

    // A moves again, and may undo that move.
    engine.make_move(1).unwrap();
    assert!(engine.can_undo());
}

/// Both sides empty and 18 stones in each store is a tie.
#[test]
fn test_tie_scenario() {
    let mut engine = engine(3);
    for i in (0..=5).chain(7..=12) {
        set(&mut engine, i, 0);
    }
    set(&mut engine, 6, 18);
    set(&mut engine, 13, 18);

    assert!(engine.is_game_over());
    assert_eq!(engine.game_result(), Some(GameResult::Draw));
    assert_eq!(engine.winner(), None);
    assert_eq!(
        engine.result_text(),
        "It's a tie! Final scores - Player A: 18, Player B: 18"
    );
}

/// A's side empty: B's remaining stones are swept into MancalaB first.
#[test]
fn test_winner_after_sweep() {
    let mut engine = engine(3);
    for i in 0..=5 {
        set(&mut engine, i, 0);
    }
    set(&mut engine, 6, 15);
    set(&mut engine, 13, 12);

    assert_eq!(engine.winner(), Some(PlayerId::B));
    assert_eq!(engine.score(PlayerId::A), 15);
    assert_eq!(engine.score(PlayerId::B), 30);
    assert_eq!(engine.board().side_total(PlayerId::B), 0);
}

/// B captures across the board from B2 into the empty B1.
#[test]
fn test_player_b_capture() {
    let mut engine = engine(3);
    engine.make_move(0).unwrap();
    engine.switch_turn().unwrap();

    // B2 (index 11) holds 1, B1 (index 12) is empty, A1's opposite is B1.
    set(&mut engine, 11, 1);
    set(&mut engine, 12, 0);
    set(&mut engine, 0, 6);

    let report = engine.make_move_named("B2").unwrap();

    assert_eq!(report.last_index, 12);
    assert_eq!(report.captured, 7);
    assert_eq!(engine.score(PlayerId::B), 7);
    assert_eq!(engine.board()[0].stones(), 0);
    assert_eq!(engine.board()[12].stones(), 0);
}

/// Selecting a pit on the wrong side is routine and leaves the game as it was.
#[test]
fn test_wrong_side_rejected() {
    let mut engine = engine(4);
    let before = *engine.board();

    let err = engine.make_move_named("B3").unwrap_err();

    assert_eq!(err, GameError::InvalidPit { index: 9 });
    assert!(err.is_user_facing());
    assert_eq!(*engine.board(), before);
    assert_eq!(engine.active_player(), PlayerId::A);
    assert_eq!(engine.make_move_named("MancalaA"), Err(GameError::InvalidPit { index: 6 }));
}

/// The move log follows commits and undos.
#[test]
fn test_move_log() {
    let mut engine = engine(3);

    engine.make_move(2).unwrap();
    engine.undo().unwrap();
    engine.make_move(1).unwrap();
    engine.switch_turn().unwrap();
    engine.make_move(8).unwrap();

    let log: Vec<_> = engine.move_log().iter().map(|r| (r.player, r.pit, r.turn)).collect();
    assert_eq!(log, vec![(PlayerId::A, 1, 1), (PlayerId::B, 8, 2)]);

    let json = serde_json::to_string(engine.move_log()).unwrap();
    assert!(json.contains("\"pit\":8"));
}
