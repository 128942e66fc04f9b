//! Gomoku rules.
//!
//! Placement only requires an empty point and never removes stones. Five or
//! more consecutive stones along any axis through the last placement wins;
//! a full board without a five is a draw.

use crate::core::{Cell, GameResult, GameType, Grid, MoveError, Player, Point};
use crate::rules::{MoveContext, Mutation, Position, RulesEngine};

/// Stones in a row needed to win.
pub const WIN_LENGTH: usize = 5;

/// Horizontal, vertical, diagonal ↘, diagonal ↙.
const AXES: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Gomoku rules engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GomokuRules;

impl RulesEngine for GomokuRules {
    fn game_type(&self) -> GameType {
        GameType::Gomoku
    }

    fn apply_move(
        &self,
        grid: &Grid,
        point: Point,
        player: Player,
        _ctx: &MoveContext<'_>,
    ) -> Result<Mutation, MoveError> {
        match grid.get(point) {
            None => Err(MoveError::OutOfBounds),
            Some(cell) if !cell.is_empty() => Err(MoveError::Occupied),
            Some(_) => Ok(Mutation::placed(grid.with_cell(point, Cell::from(player)))),
        }
    }

    fn legal_moves(&self, grid: &Grid, _player: Player) -> Vec<Point> {
        grid.points().filter(|&point| grid.is_empty_at(point)).collect()
    }

    fn outcome(&self, position: &Position<'_>) -> Option<GameResult> {
        if let Some(last) = position.last_move {
            if has_five_in_row(position.grid, last, position.last_mover) {
                return Some(GameResult::Winner(position.last_mover));
            }
        }
        position.grid.is_full().then_some(GameResult::Draw)
    }
}

/// Whether `player` has at least five in a row through `point`.
#[must_use]
pub fn has_five_in_row(grid: &Grid, point: Point, player: Player) -> bool {
    if grid.player_at(point) != Some(player) {
        return false;
    }
    AXES.iter().any(|&(dx, dy)| {
        let run = 1 + run_length(grid, point, player, dx, dy) + run_length(grid, point, player, -dx, -dy);
        run >= WIN_LENGTH
    })
}

/// Consecutive `player` stones from `point` (exclusive) in one direction.
fn run_length(grid: &Grid, point: Point, player: Player, dx: isize, dy: isize) -> usize {
    let mut count = 0;
    let mut current = point;
    while let Some(next) = grid.step(current, dx, dy) {
        if grid.player_at(next) != Some(player) {
            break;
        }
        count += 1;
        current = next;
    }
    count
}
