//! Go rules.
//!
//! Per placement:
//! 1. Reject occupied points.
//! 2. Place the stone on a copy of the grid.
//! 3. Remove every adjacent opponent group left without liberties. Each
//!    group is examined once per move.
//! 4. Only when nothing was captured, reject the move if the placed stone's
//!    group has no liberties (suicide). Captures always free a liberty next
//!    to the placed stone, so the check must not run after a capture.
//! 5. Reject a result identical to the position before the opponent's last
//!    ply (single-repeat ko, not positional superko).
//!
//! The game ends after two consecutive passes. Territory is not scored, so
//! the player with more captures wins and equal captures draw.

use rustc_hash::FxHashSet;
use tracing::trace;

use crate::core::{Cell, GameResult, GameType, Grid, MoveError, Player, Point};
use crate::rules::{find_group, MoveContext, Mutation, Position, RulesEngine};

/// Go rules engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GoRules;

impl GoRules {
    /// Place, capture and check suicide, ignoring ko.
    fn place(&self, grid: &Grid, point: Point, player: Player) -> Result<Mutation, MoveError> {
        match grid.get(point) {
            None => return Err(MoveError::OutOfBounds),
            Some(cell) if !cell.is_empty() => return Err(MoveError::Occupied),
            Some(_) => {}
        }

        let mut next = grid.with_cell(point, Cell::from(player));
        let opponent = Cell::from(player.opponent());
        let mut processed: FxHashSet<Point> = FxHashSet::default();
        let mut captured = 0u32;

        for neighbor in next.neighbors(point) {
            if next.get(neighbor) != Some(opponent) || processed.contains(&neighbor) {
                continue;
            }
            let Some(group) = find_group(&next, neighbor) else {
                continue;
            };
            processed.extend(group.stones.iter().copied());
            if group.is_captured() {
                trace!(at = %neighbor, stones = group.len(), "capturing group");
                captured += group.len() as u32;
                next = next.with_cells(group.stones.iter().copied(), Cell::Empty);
            }
        }

        if captured == 0 {
            let own_liberties = find_group(&next, point).map_or(0, |g| g.liberty_count());
            if own_liberties == 0 {
                return Err(MoveError::Suicide);
            }
        }

        Ok(Mutation {
            grid: next,
            captured,
            flipped: 0,
        })
    }
}

impl RulesEngine for GoRules {
    fn game_type(&self) -> GameType {
        GameType::Go
    }

    fn apply_move(
        &self,
        grid: &Grid,
        point: Point,
        player: Player,
        ctx: &MoveContext<'_>,
    ) -> Result<Mutation, MoveError> {
        let mutation = self.place(grid, point, player)?;

        if let Some(previous) = ctx.previous {
            if *previous == mutation.grid {
                return Err(MoveError::KoViolation);
            }
        }

        Ok(mutation)
    }

    fn legal_moves(&self, grid: &Grid, player: Player) -> Vec<Point> {
        grid.points()
            .filter(|&point| grid.is_empty_at(point))
            .filter(|&point| self.place(grid, point, player).is_ok())
            .collect()
    }

    fn outcome(&self, position: &Position<'_>) -> Option<GameResult> {
        if position.consecutive_passes < 2 {
            return None;
        }
        let prisoners = position.prisoners;
        Some(GameResult::by_count(
            prisoners[Player::Black] as usize,
            prisoners[Player::White] as usize,
        ))
    }

    fn publishes_valid_moves(&self) -> bool {
        false
    }
}
