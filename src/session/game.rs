//! Game session: the single source of truth for one game's lifecycle.
//!
//! A `GameSession` owns its configuration, the rules engine selected from it,
//! and the current `GameState`. Every accepted action replaces the state with
//! a new snapshot; every rejected action leaves it untouched.
//!
//! The session is synchronous and holds no locks. Whoever drives it (a local
//! controller or a per-room actor) must serialize calls; see `SessionArena`.

use tracing::{debug, info, instrument, trace};

use crate::core::{
    Cell, GameConfig, GameResult, GameState, Grid, MoveError, Player, Point, SavedGame, SeatKind,
};
use crate::rules::{MoveContext, Position, Rules, RulesEngine};

/// One game, from start to finish.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    rules: Rules,
    state: GameState,
}

impl GameSession {
    /// Start a fresh game.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rules = Rules::for_game(config.game_type());
        let state = fresh_state(&config, &rules);
        info!(
            game = %config.game_type(),
            size = config.board_size(),
            "Starting new game session"
        );
        Self {
            config,
            rules,
            state,
        }
    }

    /// Replace the session with a fresh game.
    #[instrument(skip(self))]
    pub fn start(&mut self, config: GameConfig) -> GameState {
        *self = Self::new(config);
        self.state.clone()
    }

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn rules(&self) -> Rules {
        self.rules
    }

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.state.current_player
    }

    /// Whether the player to move sits in an AI seat.
    #[must_use]
    pub fn is_ai_turn(&self) -> bool {
        !self.state.is_game_over && self.config.seat(self.state.current_player) == SeatKind::Ai
    }

    /// Legal placements for the player to move, including the ko check.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Point> {
        if self.state.is_game_over {
            return Vec::new();
        }
        let grid = &self.state.grid;
        let player = self.state.current_player;
        let ctx = self.move_context();
        self.rules
            .legal_moves(grid, player)
            .into_iter()
            .filter(|&point| self.rules.apply_move(grid, point, player, &ctx).is_ok())
            .collect()
    }

    /// Place a stone for the player to move.
    ///
    /// # Errors
    ///
    /// `GameOver` after the end, `OutOfBounds` for coordinates outside the
    /// board, otherwise whatever the active rules reject. State is unchanged
    /// on error.
    ///
    /// Under rules with forced passes, a player left without any legal
    /// placement passes instead of placing, and the pass is returned.
    #[instrument(skip(self), fields(game = %self.config.game_type(), player = %self.state.current_player))]
    pub fn make_move(&mut self, x: i32, y: i32) -> Result<GameState, MoveError> {
        if self.state.is_game_over {
            debug!("Rejecting move: game is over");
            return Err(MoveError::GameOver);
        }
        let Some(point) = self.state.grid.point(x, y) else {
            debug!("Rejecting move: out of bounds");
            return Err(MoveError::OutOfBounds);
        };

        let mover = self.state.current_player;
        if self.rules.check_can_move(&self.state.grid, mover) == Err(MoveError::NoLegalMove) {
            self.force_pass(mover);
            self.refresh_valid_moves();
            return Ok(self.state.clone());
        }

        let mutation = self
            .rules
            .apply_move(&self.state.grid, point, mover, &self.move_context())
            .inspect_err(|err| debug!(code = err.code(), "Rejecting move"))?;

        self.state.history.push_back(mutation.grid.clone());
        self.state.grid = mutation.grid;
        self.state.prisoners[mover] += mutation.captured;
        self.state.last_move = Some(point);
        self.state.current_player = mover.opponent();
        debug!(
            %point,
            captured = mutation.captured,
            flipped = mutation.flipped,
            "Move accepted"
        );

        let position = Position {
            grid: &self.state.grid,
            last_move: Some(point),
            last_mover: mover,
            prisoners: &self.state.prisoners,
            consecutive_passes: 0,
        };
        if let Some(result) = self.rules.outcome(&position) {
            self.finish(result);
        } else {
            let next = self.state.current_player;
            self.state.message = if mutation.captured > 0 {
                format!("{next}'s turn. {mover} captured {}.", mutation.captured)
            } else {
                format!("{next}'s turn.")
            };
            self.force_pass_if_stuck();
        }

        self.refresh_valid_moves();
        Ok(self.state.clone())
    }

    /// Roll back the last ply.
    ///
    /// No-op at the opening position. Captures made by the undone ply are
    /// subtracted from the mover's prisoners so counts match the restored
    /// grid. Under rules with forced passes, trailing passes are rolled back
    /// together with the placement that caused them.
    #[instrument(skip(self), fields(game = %self.config.game_type()))]
    pub fn undo(&mut self) -> GameState {
        if self.state.history.len() <= 1 {
            debug!("Nothing to undo");
            return self.state.clone();
        }

        while let Some(popped) = self.state.history.pop_back() {
            let Some(top) = self.state.history.last() else {
                break;
            };
            let mover = self.state.current_player.opponent();
            self.state.current_player = mover;
            let was_pass = popped == *top;
            if !was_pass {
                let restored = captured_between(top, &popped, mover);
                let tally = &mut self.state.prisoners[mover];
                *tally = tally.saturating_sub(restored);
            }
            if !(was_pass && self.rules.forces_passes() && self.state.history.len() > 1) {
                break;
            }
        }

        if let Some(top) = self.state.history.last() {
            self.state.grid = top.clone();
        }
        self.state.is_game_over = false;
        self.state.winner = None;
        self.state.last_move = None;
        self.state.message = format!("Undo. {}'s turn.", self.state.current_player);
        self.refresh_valid_moves();

        debug!(plies = self.state.ply_count(), "Undo applied");
        self.state.clone()
    }

    /// Pass the turn without placing.
    ///
    /// # Errors
    ///
    /// `GameOver` after the end, `NotYourTurn` when `player` is not to move,
    /// `MustPlay` where the rules forbid passing with a legal placement.
    #[instrument(skip(self), fields(game = %self.config.game_type()))]
    pub fn pass(&mut self, player: Player) -> Result<GameState, MoveError> {
        if self.state.is_game_over {
            return Err(MoveError::GameOver);
        }
        if player != self.state.current_player {
            debug!(current = %self.state.current_player, "Rejecting pass: not this player's turn");
            return Err(MoveError::NotYourTurn);
        }
        self.rules
            .check_pass(&self.state.grid, player)
            .inspect_err(|err| debug!(code = err.code(), "Rejecting pass"))?;

        self.record_pass(player);
        self.state.message = format!("{player} passed.");

        let position = Position {
            grid: &self.state.grid,
            last_move: None,
            last_mover: player,
            prisoners: &self.state.prisoners,
            consecutive_passes: self.state.consecutive_passes(),
        };
        if let Some(result) = self.rules.outcome(&position) {
            self.finish(result);
        }

        self.refresh_valid_moves();
        Ok(self.state.clone())
    }

    /// Concede the game. The opponent wins regardless of whose turn it is.
    ///
    /// # Errors
    ///
    /// `GameOver` if the game already ended.
    #[instrument(skip(self), fields(game = %self.config.game_type()))]
    pub fn resign(&mut self, player: Player) -> Result<GameState, MoveError> {
        if self.state.is_game_over {
            return Err(MoveError::GameOver);
        }
        let winner = player.opponent();
        self.state.is_game_over = true;
        self.state.winner = Some(GameResult::Winner(winner));
        self.state.message = format!("{player} resigned. {winner} wins!");
        self.state.valid_moves.clear();
        info!(%player, %winner, "Player resigned");
        Ok(self.state.clone())
    }

    /// Replace the whole session with externally supplied config and state.
    ///
    /// The loaded history is trusted as-is; saves may come from another
    /// process and are not re-validated.
    #[instrument(skip(self, state), fields(game = %config.game_type(), plies = state.ply_count()))]
    pub fn load(&mut self, config: GameConfig, state: GameState) -> GameState {
        info!("Loading game session");
        self.rules = Rules::for_game(config.game_type());
        self.config = config;
        self.state = state;
        self.state.clone()
    }

    /// `load` from a persistence envelope.
    pub fn load_saved(&mut self, saved: SavedGame) -> GameState {
        self.load(saved.config, saved.state)
    }

    /// Snapshot the session for persistence.
    #[must_use]
    pub fn save(&self, timestamp: u64) -> SavedGame {
        SavedGame::new(self.config.clone(), self.state.clone(), timestamp)
    }

    /// Position before the opponent's last ply.
    fn move_context(&self) -> MoveContext<'_> {
        let history = &self.state.history;
        MoveContext {
            previous: history.len().checked_sub(2).and_then(|i| history.get(i)),
        }
    }

    fn record_pass(&mut self, passer: Player) {
        self.state.history.push_back(self.state.grid.clone());
        self.state.last_move = None;
        self.state.current_player = passer.opponent();
    }

    /// Record a pass for the player to move when the rules force one.
    fn force_pass_if_stuck(&mut self) {
        let stuck = self.state.current_player;
        if self.rules.check_can_move(&self.state.grid, stuck) == Err(MoveError::NoLegalMove) {
            self.force_pass(stuck);
        }
    }

    /// Pass for `stuck`, ending the game if the opponent is stuck as well.
    fn force_pass(&mut self, stuck: Player) {
        self.record_pass(stuck);
        let next = self.state.current_player;
        trace!(%stuck, "Forced pass");
        self.state.message = format!("{stuck} has no legal move and passes. {next}'s turn.");

        let position = Position {
            grid: &self.state.grid,
            last_move: None,
            last_mover: stuck,
            prisoners: &self.state.prisoners,
            consecutive_passes: self.state.consecutive_passes(),
        };
        if let Some(result) = self.rules.outcome(&position) {
            self.finish(result);
        }
    }

    fn finish(&mut self, result: GameResult) {
        self.state.is_game_over = true;
        self.state.winner = Some(result);
        self.state.message = format!("Game over. {result}");
        info!(%result, plies = self.state.ply_count(), "Game finished");
    }

    fn refresh_valid_moves(&mut self) {
        self.state.valid_moves = if self.state.is_game_over || !self.rules.publishes_valid_moves() {
            Vec::new()
        } else {
            self.rules
                .legal_moves(&self.state.grid, self.state.current_player)
        };
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

fn fresh_state(config: &GameConfig, rules: &Rules) -> GameState {
    let opening = rules.initial_grid(config.board_size());
    let mut state = GameState::new(config, opening);
    if rules.publishes_valid_moves() {
        state.valid_moves = rules.legal_moves(&state.grid, state.current_player);
    }
    state
}

/// Opponent stones present in `before` and gone in `after`.
fn captured_between(before: &Grid, after: &Grid, mover: Player) -> u32 {
    let opponent = Cell::from(mover.opponent());
    before
        .points()
        .filter(|&p| before.get(p) == Some(opponent) && after.get(p) == Some(Cell::Empty))
        .count() as u32
}
