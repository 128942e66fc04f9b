//! Reversi rules.
//!
//! A placement is legal only when, along at least one of the eight
//! directions, it is followed by a contiguous run of opponent discs ending in
//! one of the mover's discs. Every such run flips.
//!
//! The game ends when the board is full or neither player can move; the
//! player with more discs wins. Passing is only allowed without a legal
//! placement (the session records those passes automatically).

use crate::core::{Cell, GameResult, GameType, Grid, MoveError, Player, Point};
use crate::rules::{MoveContext, Mutation, Position, RulesEngine};

const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Reversi rules engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReversiRules;

impl ReversiRules {
    /// Discs that would flip if `player` placed at `point`.
    ///
    /// Empty when the point is occupied, off the board, or flanks nothing.
    #[must_use]
    pub fn flips(&self, grid: &Grid, point: Point, player: Player) -> Vec<Point> {
        if !grid.is_empty_at(point) {
            return Vec::new();
        }
        let opponent = player.opponent();
        let mut flips = Vec::new();

        for (dx, dy) in DIRECTIONS {
            let mut run = Vec::new();
            let mut current = point;
            while let Some(next) = grid.step(current, dx, dy) {
                match grid.player_at(next) {
                    Some(p) if p == opponent => run.push(next),
                    Some(_) => {
                        flips.append(&mut run);
                        break;
                    }
                    None => break,
                }
                current = next;
            }
        }

        flips
    }

    /// Whether `player` has any legal placement. Stops at the first one.
    #[must_use]
    pub fn has_legal_move(&self, grid: &Grid, player: Player) -> bool {
        grid.points()
            .any(|point| !self.flips(grid, point, player).is_empty())
    }
}

impl RulesEngine for ReversiRules {
    fn game_type(&self) -> GameType {
        GameType::Reversi
    }

    /// Standard opening: the four center points, same colors on the diagonal.
    fn initial_grid(&self, size: usize) -> Grid {
        let grid = Grid::empty(size);
        if size < 2 {
            return grid;
        }
        let lo = size / 2 - 1;
        let hi = size / 2;
        grid.with_cells([Point::new(lo, lo), Point::new(hi, hi)], Cell::White)
            .with_cells([Point::new(hi, lo), Point::new(lo, hi)], Cell::Black)
    }

    fn apply_move(
        &self,
        grid: &Grid,
        point: Point,
        player: Player,
        _ctx: &MoveContext<'_>,
    ) -> Result<Mutation, MoveError> {
        match grid.get(point) {
            None => return Err(MoveError::OutOfBounds),
            Some(cell) if !cell.is_empty() => return Err(MoveError::Occupied),
            Some(_) => {}
        }

        let flips = self.flips(grid, point, player);
        if flips.is_empty() {
            return Err(MoveError::NoFlank);
        }

        let flipped = flips.len() as u32;
        let next = grid
            .with_cell(point, Cell::from(player))
            .with_cells(flips, Cell::from(player));

        Ok(Mutation {
            grid: next,
            captured: 0,
            flipped,
        })
    }

    fn legal_moves(&self, grid: &Grid, player: Player) -> Vec<Point> {
        grid.points()
            .filter(|&point| !self.flips(grid, point, player).is_empty())
            .collect()
    }

    fn outcome(&self, position: &Position<'_>) -> Option<GameResult> {
        let grid = position.grid;
        let finished = grid.is_full()
            || (!self.has_legal_move(grid, Player::Black) && !self.has_legal_move(grid, Player::White));
        finished.then(|| GameResult::by_count(grid.count(Cell::Black), grid.count(Cell::White)))
    }

    fn check_can_move(&self, grid: &Grid, player: Player) -> Result<(), MoveError> {
        if self.has_legal_move(grid, player) {
            Ok(())
        } else {
            Err(MoveError::NoLegalMove)
        }
    }

    fn check_pass(&self, grid: &Grid, player: Player) -> Result<(), MoveError> {
        match self.check_can_move(grid, player) {
            Err(MoveError::NoLegalMove) => Ok(()),
            _ => Err(MoveError::MustPlay),
        }
    }

    fn forces_passes(&self) -> bool {
        true
    }
}
