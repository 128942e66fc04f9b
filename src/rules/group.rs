//! Connected group discovery for Go.
//!
//! A group is the maximal set of same-colored stones connected through
//! orthogonal adjacency. Its liberties are the *distinct* empty points next to
//! any of its stones: two stones touching the same empty point contribute one
//! liberty, not two.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::core::{Cell, Grid, Player, Point};

/// A connected group and its liberties.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    /// Color of every stone in the group.
    pub color: Player,
    pub stones: FxHashSet<Point>,
    pub liberties: FxHashSet<Point>,
}

impl Group {
    #[must_use]
    pub fn len(&self) -> usize {
        self.stones.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    #[must_use]
    pub fn liberty_count(&self) -> usize {
        self.liberties.len()
    }

    /// No liberties left.
    #[must_use]
    pub fn is_captured(&self) -> bool {
        self.liberties.is_empty()
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.stones.contains(&point)
    }
}

/// Breadth-first search from `start` over same-colored orthogonal neighbors.
///
/// Returns `None` when `start` is empty or off the board. Runs in
/// O(group size) and never modifies the grid.
#[must_use]
pub fn find_group(grid: &Grid, start: Point) -> Option<Group> {
    let color = grid.player_at(start)?;
    let stone = Cell::from(color);

    let mut stones = FxHashSet::default();
    let mut liberties = FxHashSet::default();
    let mut queue = VecDeque::new();

    stones.insert(start);
    queue.push_back(start);

    while let Some(point) = queue.pop_front() {
        for neighbor in grid.neighbors(point) {
            match grid.get(neighbor) {
                Some(Cell::Empty) => {
                    liberties.insert(neighbor);
                }
                Some(cell) if cell == stone => {
                    if stones.insert(neighbor) {
                        queue.push_back(neighbor);
                    }
                }
                _ => {}
            }
        }
    }

    Some(Group {
        color,
        stones,
        liberties,
    })
}
