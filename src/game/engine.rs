//! The game engine: board, players, turn order and undo.
//!
//! `GameEngine` is the only mutable owner of game state. UI collaborators
//! feed it pit selections, undo requests and turn switches, and read back the
//! board, current player and result.
//!
//! ## Turn flow
//!
//! 1. The player to move calls `make_move` once.
//! 2. They may `undo` (up to the budget) and move again.
//! 3. `switch_turn` hands the board to the opponent.
//!
//! A move ending in the mover's store grants a free turn: the same player
//! moves again with a fresh undo budget. When either side runs out of
//! stones the board is swept and the game is over.

use im::Vector;
use tracing::{debug, info, instrument};

use super::listener::GameListener;
use crate::core::{
    Board, BoardStyle, GameConfig, GameError, MoveOutcome, MoveRecord, MoveReport, Pit, Player,
    PlayerId, PlayerMap, BOARD_SIZE,
};
use crate::rules::{sow, GameResult};
use crate::undo::UndoManager;

/// Message used when a result is requested mid-game.
pub const IN_PROGRESS: &str = "Game is still in progress";

/// Two-player Kalah engine.
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    players: PlayerMap<Player>,
    active: PlayerId,
    undo: UndoManager,
    turn_number: u32,
    move_log: Vector<MoveRecord>,
    listeners: Vec<Box<dyn GameListener>>,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("config", &self.config)
            .field("board", &self.board)
            .field("players", &self.players)
            .field("active", &self.active)
            .field("turn_number", &self.turn_number)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl GameEngine {
    /// Create an engine and lay out the board from `config`.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let players = PlayerMap::new(|p| Player::new(config.player_names[p].clone()));
        let mut engine = Self {
            board: Board::new(config.stones_per_pit),
            players,
            active: PlayerId::A,
            undo: UndoManager::new(config.max_undos),
            turn_number: 1,
            move_log: Vector::new(),
            listeners: Vec::new(),
            config,
        };
        engine.initialize();
        engine
    }

    // === Configuration ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn stones_per_pit(&self) -> u32 {
        self.config.stones_per_pit
    }

    /// Choose the starting count for `initialize()`.
    pub fn set_stones_per_pit(&mut self, stones: i64) -> Result<(), GameError> {
        self.config.stones_per_pit = GameError::check_non_negative("stones per pit", stones)?;
        Ok(())
    }

    #[must_use]
    pub fn board_style(&self) -> Option<BoardStyle> {
        self.config.board_style
    }

    pub fn set_board_style(&mut self, style: BoardStyle) {
        self.config.board_style = Some(style);
    }

    /// Check that the UI chose a board style and a stone count.
    pub fn ensure_ready(&self) -> Result<(), GameError> {
        if self.config.board_style.is_none() {
            return Err(GameError::StyleNotChosen);
        }
        if self.config.stones_per_pit == 0 {
            return Err(GameError::StonesNotChosen);
        }
        Ok(())
    }

    /// Register a listener for board updates and messages.
    pub fn add_listener(&mut self, listener: impl GameListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Reset the board and both players for a new game.
    ///
    /// Uses the current `stones_per_pit` as is; a count of 0 yields a board
    /// that is already finished.
    #[instrument(skip(self))]
    pub fn initialize(&mut self) {
        self.board = Board::new(self.config.stones_per_pit);
        self.active = PlayerId::A;
        for (_, player) in self.players.iter_mut() {
            player.reset();
        }
        self.undo.reset_undo(PlayerId::A, &mut self.players);
        self.turn_number = 1;
        self.move_log.clear();

        info!(stones_per_pit = self.config.stones_per_pit, "game initialized");
        self.notify_board();
    }

    // === Queries ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for setting up positions.
    ///
    /// Call `sync_scores()` afterwards if a store was changed.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[must_use]
    pub fn pits(&self) -> &[Pit; BOARD_SIZE] {
        self.board.pits()
    }

    /// Resolve a pit label to its index.
    pub fn pit_index(&self, name: &str) -> Result<usize, GameError> {
        Board::index_of(name).ok_or_else(|| GameError::UnknownPit {
            name: name.to_string(),
        })
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    #[must_use]
    pub fn is_turn_of(&self, player: PlayerId) -> bool {
        self.active == player
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.active]
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn score(&self, id: PlayerId) -> u32 {
        self.players[id].score()
    }

    /// Starts at 1 and increases with every `switch_turn`.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Committed moves, oldest first. Undone moves are removed.
    #[must_use]
    pub fn move_log(&self) -> &Vector<MoveRecord> {
        &self.move_log
    }

    /// Pits the current player may sow from right now.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_game_over() || self.current_player().has_moved() {
            return Vec::new();
        }
        self.active
            .pit_range()
            .filter(|&i| !self.board[i].is_empty())
            .collect()
    }

    /// Whether an undo request would be honored.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.is_game_over()
            && self.current_player().has_moved()
            && self.undo.can_undo(&self.players)
    }

    // === Moves ===

    /// Sow from the pit at `index` for the current player.
    ///
    /// Rejected moves leave the board, scores, turn and undo history
    /// untouched.
    #[instrument(skip(self), fields(player = %self.active))]
    pub fn make_move(&mut self, index: usize) -> Result<MoveReport, GameError> {
        let player = self.active;

        if self.is_game_over() {
            let result = self.result_text();
            return Err(self.reject(GameError::GameOver { result }));
        }
        if self.players[player].has_moved() {
            let name = self.players[player].name().to_string();
            return Err(self.reject(GameError::AlreadyMoved { player: name }));
        }
        if !player.owns_pit(index) {
            return Err(self.reject(GameError::InvalidPit { index }));
        }
        if self.board[index].is_empty() {
            return Err(self.reject(GameError::EmptyPit { index }));
        }

        self.undo.save_state(&self.board, &self.players, player);

        let sowed = sow(&mut self.board, player, index);
        self.sync_scores();

        let outcome = if self.is_game_over() {
            self.end_game();
            MoveOutcome::GameOver(GameResult::from_scores(&self.scores()))
        } else {
            self.players[player].did_move(true);
            self.undo.clear_undo_flag();
            if sowed.free_turn {
                self.undo.reset_undo_for_free_turn(&mut self.players);
                self.players[player].did_move(false);
                MoveOutcome::FreeTurn
            } else {
                MoveOutcome::TurnComplete
            }
        };

        let report = MoveReport {
            player,
            pit: index,
            last_index: sowed.last_index,
            captured: sowed.captured,
            outcome,
        };
        self.move_log
            .push_back(MoveRecord::from_report(&report, self.turn_number));

        self.notify_board();
        match &report.outcome {
            MoveOutcome::FreeTurn => {
                info!(%player, "free turn");
                let text = format!("{} gets a free turn!", self.players[player].name());
                self.notify_message(&text);
            }
            MoveOutcome::GameOver(result) => {
                info!(?result, "game over");
                let text = self.result_text();
                self.notify_message(&text);
            }
            MoveOutcome::TurnComplete => {}
        }

        Ok(report)
    }

    /// Sow from the pit with the given label, e.g. `"A3"`.
    pub fn make_move_named(&mut self, name: &str) -> Result<MoveReport, GameError> {
        match Board::index_of(name) {
            Some(index) => self.make_move(index),
            None => Err(self.reject(GameError::UnknownPit {
                name: name.to_string(),
            })),
        }
    }

    /// Take back the current player's last move.
    #[instrument(skip(self), fields(player = %self.active))]
    pub fn undo(&mut self) -> Result<(), GameError> {
        if self.is_game_over() {
            let result = self.result_text();
            return Err(self.reject(GameError::GameOver { result }));
        }
        if !self.current_player().has_moved() {
            return Err(self.reject(GameError::NoMoveToUndo));
        }

        let Some(snapshot) = self.undo.undo(&mut self.players) else {
            let err = if self.current_player().undos_used() >= self.config.max_undos {
                GameError::MaxUndosReached
            } else {
                GameError::NoMoveToUndo
            };
            return Err(self.reject(err));
        };

        self.board = snapshot.board;
        self.active = snapshot.active;
        self.sync_scores();
        self.players[self.active].did_move(false);
        self.move_log.pop_back();

        info!(
            undos_used = self.current_player().undos_used(),
            "move undone"
        );
        self.notify_board();
        Ok(())
    }

    /// Hand the turn to the opponent.
    ///
    /// Requires a committed move this turn. Clears the undo history and
    /// gives the new player a fresh budget.
    #[instrument(skip(self), fields(player = %self.active))]
    pub fn switch_turn(&mut self) -> Result<PlayerId, GameError> {
        if self.is_game_over() {
            let result = self.result_text();
            return Err(self.reject(GameError::GameOver { result }));
        }
        if !self.current_player().has_moved() {
            return Err(self.reject(GameError::MustMoveFirst));
        }

        let next = self.active.opponent();
        self.active = next;
        self.undo.reset_undo(next, &mut self.players);
        self.players[next].did_move(false);
        self.turn_number += 1;

        info!(%next, turn = self.turn_number, "turn switched");
        self.notify_board();
        Ok(next)
    }

    // === Scoring and game end ===

    /// Copy both stores into the players' scores.
    pub fn sync_scores(&mut self) {
        for (id, player) in self.players.iter_mut() {
            player.mirror_score(self.board.store(id));
        }
    }

    /// Either side has no stones left in its regular pits.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        PlayerId::all().any(|p| self.board.side_is_empty(p))
    }

    /// Sweep what is left on each side into its owner's store.
    ///
    /// Safe to call repeatedly; an empty side sweeps nothing.
    pub fn end_game(&mut self) {
        for player in PlayerId::all() {
            let swept = self.board.sweep_side(player);
            if swept > 0 {
                debug!(%player, swept, "swept remaining stones");
            }
        }
        self.sync_scores();
    }

    /// Final result, or `None` while the game is still running.
    ///
    /// Sweeps the board first so the scores are final.
    pub fn game_result(&mut self) -> Option<GameResult> {
        if !self.is_game_over() {
            return None;
        }
        self.end_game();
        Some(GameResult::from_scores(&self.scores()))
    }

    /// The winner, or `None` for a tie or a game still in progress.
    pub fn winner(&mut self) -> Option<PlayerId> {
        self.game_result().and_then(|r| r.winner())
    }

    /// Human-readable result with final scores.
    pub fn result_text(&mut self) -> String {
        let Some(result) = self.game_result() else {
            return IN_PROGRESS.to_string();
        };
        let a = &self.players[PlayerId::A];
        let b = &self.players[PlayerId::B];
        let scores = format!(
            "Final scores - {}: {}, {}: {}",
            a.name(),
            a.score(),
            b.name(),
            b.score()
        );
        match result {
            GameResult::Winner(id) => format!("{} wins! {}", self.players[id].name(), scores),
            GameResult::Draw => format!("It's a tie! {}", scores),
        }
    }

    // === Internals ===

    fn scores(&self) -> PlayerMap<u32> {
        PlayerMap::new(|p| self.players[p].score())
    }

    fn reject(&mut self, err: GameError) -> GameError {
        debug!(error = %err, "rejected");
        let text = err.to_string();
        self.notify_message(&text);
        err
    }

    fn notify_board(&mut self) {
        for listener in &mut self.listeners {
            listener.board_changed(&self.board, self.active);
        }
    }

    fn notify_message(&mut self, text: &str) {
        for listener in &mut self.listeners {
            listener.message(text);
        }
    }
}
