//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - What placements are legal and which grid they produce
//! - Whether a player may pass
//! - Win/draw conditions
//!
//! ## Implementation Notes
//!
//! - `apply_move`: Pure. Returns a new grid or a typed rejection, never
//!   mutates its input.
//! - `legal_moves`: Return empty vec if the player can't place anywhere
//! - `outcome`: Return `None` if the game continues

use crate::core::{GameResult, GameType, Grid, MoveError, Player, PlayerMap, Point};
use crate::games::{GoRules, GomokuRules, ReversiRules};

/// An accepted placement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mutation {
    /// Grid after placement, captures and flips.
    pub grid: Grid,
    /// Opponent stones removed (Go).
    pub captured: u32,
    /// Opponent discs turned over (Reversi).
    pub flipped: u32,
}

impl Mutation {
    /// A plain placement with no side effects.
    #[must_use]
    pub fn placed(grid: Grid) -> Self {
        Self {
            grid,
            captured: 0,
            flipped: 0,
        }
    }
}

/// History the engine may consult when validating a placement.
#[derive(Clone, Copy, Debug, Default)]
pub struct MoveContext<'a> {
    /// Position before the opponent's last ply, for the ko check.
    pub previous: Option<&'a Grid>,
}

impl<'a> MoveContext<'a> {
    #[must_use]
    pub fn with_previous(previous: &'a Grid) -> Self {
        Self {
            previous: Some(previous),
        }
    }
}

/// View of a position for end-of-game evaluation.
#[derive(Clone, Copy, Debug)]
pub struct Position<'a> {
    pub grid: &'a Grid,
    /// Last placement, `None` after a pass.
    pub last_move: Option<Point>,
    /// Player who made the last ply.
    pub last_mover: Player,
    pub prisoners: &'a PlayerMap<u32>,
    pub consecutive_passes: usize,
}

/// Rules engine trait.
///
/// Implemented by each game and by the `Rules` union that selects one.
pub trait RulesEngine {
    /// The game these rules play.
    fn game_type(&self) -> GameType;

    /// Opening position for a board of the given size.
    fn initial_grid(&self, size: usize) -> Grid {
        Grid::empty(size)
    }

    /// Validate a placement and compute the resulting grid.
    fn apply_move(
        &self,
        grid: &Grid,
        point: Point,
        player: Player,
        ctx: &MoveContext<'_>,
    ) -> Result<Mutation, MoveError>;

    /// Every coordinate `player` may place on, in row-major order.
    ///
    /// History-dependent checks (ko) are not applied here.
    fn legal_moves(&self, grid: &Grid, player: Player) -> Vec<Point>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn outcome(&self, position: &Position<'_>) -> Option<GameResult>;

    /// Whether `player` has any placement at all.
    ///
    /// `Err(NoLegalMove)` tells the session to record a forced pass where
    /// the rules have them.
    fn check_can_move(&self, _grid: &Grid, _player: Player) -> Result<(), MoveError> {
        Ok(())
    }

    /// Whether `player` may pass on `grid`.
    fn check_pass(&self, _grid: &Grid, _player: Player) -> Result<(), MoveError> {
        Ok(())
    }

    /// Whether these rules report `legal_moves` in the session snapshot.
    fn publishes_valid_moves(&self) -> bool {
        true
    }

    /// Whether a player left without a legal placement passes automatically.
    ///
    /// Such passes are undone together with the placement that caused them.
    fn forces_passes(&self) -> bool {
        false
    }
}

/// The closed set of supported games.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rules {
    Go(GoRules),
    Gomoku(GomokuRules),
    Reversi(ReversiRules),
}

impl Rules {
    /// Select the engine for a game type.
    #[must_use]
    pub fn for_game(game_type: GameType) -> Self {
        match game_type {
            GameType::Go => Rules::Go(GoRules),
            GameType::Gomoku => Rules::Gomoku(GomokuRules),
            GameType::Reversi => Rules::Reversi(ReversiRules),
        }
    }
}

impl RulesEngine for Rules {
    fn game_type(&self) -> GameType {
        match self {
            Rules::Go(rules) => rules.game_type(),
            Rules::Gomoku(rules) => rules.game_type(),
            Rules::Reversi(rules) => rules.game_type(),
        }
    }

    fn initial_grid(&self, size: usize) -> Grid {
        match self {
            Rules::Go(rules) => rules.initial_grid(size),
            Rules::Gomoku(rules) => rules.initial_grid(size),
            Rules::Reversi(rules) => rules.initial_grid(size),
        }
    }

    fn apply_move(
        &self,
        grid: &Grid,
        point: Point,
        player: Player,
        ctx: &MoveContext<'_>,
    ) -> Result<Mutation, MoveError> {
        match self {
            Rules::Go(rules) => rules.apply_move(grid, point, player, ctx),
            Rules::Gomoku(rules) => rules.apply_move(grid, point, player, ctx),
            Rules::Reversi(rules) => rules.apply_move(grid, point, player, ctx),
        }
    }

    fn legal_moves(&self, grid: &Grid, player: Player) -> Vec<Point> {
        match self {
            Rules::Go(rules) => rules.legal_moves(grid, player),
            Rules::Gomoku(rules) => rules.legal_moves(grid, player),
            Rules::Reversi(rules) => rules.legal_moves(grid, player),
        }
    }

    fn outcome(&self, position: &Position<'_>) -> Option<GameResult> {
        match self {
            Rules::Go(rules) => rules.outcome(position),
            Rules::Gomoku(rules) => rules.outcome(position),
            Rules::Reversi(rules) => rules.outcome(position),
        }
    }

    fn check_can_move(&self, grid: &Grid, player: Player) -> Result<(), MoveError> {
        match self {
            Rules::Go(rules) => rules.check_can_move(grid, player),
            Rules::Gomoku(rules) => rules.check_can_move(grid, player),
            Rules::Reversi(rules) => rules.check_can_move(grid, player),
        }
    }

    fn check_pass(&self, grid: &Grid, player: Player) -> Result<(), MoveError> {
        match self {
            Rules::Go(rules) => rules.check_pass(grid, player),
            Rules::Gomoku(rules) => rules.check_pass(grid, player),
            Rules::Reversi(rules) => rules.check_pass(grid, player),
        }
    }

    fn publishes_valid_moves(&self) -> bool {
        match self {
            Rules::Go(rules) => rules.publishes_valid_moves(),
            Rules::Gomoku(rules) => rules.publishes_valid_moves(),
            Rules::Reversi(rules) => rules.publishes_valid_moves(),
        }
    }

    fn forces_passes(&self) -> bool {
        match self {
            Rules::Go(rules) => rules.forces_passes(),
            Rules::Gomoku(rules) => rules.forces_passes(),
            Rules::Reversi(rules) => rules.forces_passes(),
        }
    }
}

/// Legal placements for `player` under the rules of `game_type`.
///
/// Entry point for hinting and for AI collaborators.
#[must_use]
pub fn legal_moves(game_type: GameType, grid: &Grid, player: Player) -> Vec<Point> {
    Rules::for_game(game_type).legal_moves(grid, player)
}
