//! Board grid: a fixed-size square matrix of cells.
//!
//! `Grid` is an immutable value. Cells live in an `im::Vector`, so cloning is
//! O(1) and every mutation (`with_cell`, `with_cells`) returns a new grid that
//! shares structure with the old one. History snapshots never alias mutable
//! storage.
//!
//! Coordinates are `(x, y)` with `x` the column and `y` the row; row 0 is the
//! top of the board.

use im::Vector;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;

use super::error::GridError;
use super::player::Player;

/// State of one intersection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// The occupying player, if any.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

impl From<Option<Player>> for Cell {
    fn from(player: Option<Player>) -> Self {
        player.map_or(Cell::Empty, Cell::from)
    }
}

/// An on-board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Orthogonal neighbors of a point. Never more than four.
pub type Neighbors = SmallVec<[Point; 4]>;

/// Square matrix of cells, side length `size`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vector<Cell>,
}

impl Grid {
    /// All-empty grid.
    #[must_use]
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: std::iter::repeat(Cell::Empty).take(size * size).collect(),
        }
    }

    /// Build a grid from rows, rejecting jagged or non-square input.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, GridError>
    where
        R: AsRef<[Cell]>,
    {
        let size = rows.len();
        if size == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vector::new();
        for (row, cells_in_row) in rows.iter().enumerate() {
            let cells_in_row = cells_in_row.as_ref();
            if cells_in_row.len() != size {
                return Err(GridError::NotSquare {
                    row,
                    expected: size,
                    found: cells_in_row.len(),
                });
            }
            cells.extend(cells_in_row.iter().copied());
        }

        Ok(Self { size, cells })
    }

    /// Parse a diagram of `X` (black), `O` (white) and `.` (empty) rows.
    ///
    /// Whitespace inside a row is ignored, which keeps test boards readable.
    ///
    /// ```
    /// use board_rules::core::{Cell, Grid, Point};
    ///
    /// let grid = Grid::parse(&["X . .", ". O .", ". . ."]).unwrap();
    /// assert_eq!(grid.get(Point::new(0, 0)), Some(Cell::Black));
    /// assert_eq!(grid.get(Point::new(1, 1)), Some(Cell::White));
    /// ```
    pub fn parse(rows: &[&str]) -> Result<Self, GridError> {
        let rows: Vec<Vec<Cell>> = rows
            .iter()
            .map(|row| {
                row.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| match c {
                        'X' | 'x' | 'B' => Cell::Black,
                        'O' | 'o' | 'W' => Cell::White,
                        _ => Cell::Empty,
                    })
                    .collect()
            })
            .collect();
        Self::from_rows(&rows)
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Convert signed caller input to an on-board point.
    ///
    /// Returns `None` for anything outside `[0, size)` on either axis.
    #[must_use]
    pub fn point(&self, x: i32, y: i32) -> Option<Point> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        self.contains(Point::new(x, y)).then_some(Point::new(x, y))
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x < self.size && point.y < self.size
    }

    /// Cell at `point`, or `None` when off the board.
    #[must_use]
    pub fn get(&self, point: Point) -> Option<Cell> {
        if !self.contains(point) {
            return None;
        }
        self.cells.get(self.index(point)).copied()
    }

    /// Occupying player at `point`. `None` when empty or off the board.
    #[must_use]
    pub fn player_at(&self, point: Point) -> Option<Player> {
        self.get(point).and_then(Cell::player)
    }

    #[must_use]
    pub fn is_empty_at(&self, point: Point) -> bool {
        self.get(point) == Some(Cell::Empty)
    }

    /// New grid with one cell replaced. Off-board points leave it unchanged.
    #[must_use]
    pub fn with_cell(&self, point: Point, cell: Cell) -> Self {
        self.with_cells(std::iter::once(point), cell)
    }

    /// New grid with every listed point set to `cell`.
    #[must_use]
    pub fn with_cells(&self, points: impl IntoIterator<Item = Point>, cell: Cell) -> Self {
        let mut next = self.clone();
        for point in points {
            if next.contains(point) {
                let index = next.index(point);
                next.cells.set(index, cell);
            }
        }
        next
    }

    /// Orthogonal neighbors that lie on the board.
    #[must_use]
    pub fn neighbors(&self, point: Point) -> Neighbors {
        let mut out = Neighbors::new();
        if point.x > 0 {
            out.push(Point::new(point.x - 1, point.y));
        }
        if point.x + 1 < self.size {
            out.push(Point::new(point.x + 1, point.y));
        }
        if point.y > 0 {
            out.push(Point::new(point.x, point.y - 1));
        }
        if point.y + 1 < self.size {
            out.push(Point::new(point.x, point.y + 1));
        }
        out
    }

    /// Step from `point` by `(dx, dy)`, staying on the board.
    #[must_use]
    pub fn step(&self, point: Point, dx: isize, dy: isize) -> Option<Point> {
        let x = point.x.checked_add_signed(dx)?;
        let y = point.y.checked_add_signed(dy)?;
        let next = Point::new(x, y);
        self.contains(next).then_some(next)
    }

    /// All points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.size).flat_map(move |y| (0..self.size).map(move |x| Point::new(x, y)))
    }

    /// Number of cells in the given state.
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c.is_empty())
    }

    /// Rows of optional players, the wire representation.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<Option<Player>>> {
        (0..self.size)
            .map(|y| {
                (0..self.size)
                    .map(|x| self.player_at(Point::new(x, y)))
                    .collect()
            })
            .collect()
    }

    fn index(&self, point: Point) -> usize {
        point.y * self.size + point.x
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                let ch = match self.get(Point::new(x, y)) {
                    Some(Cell::Black) => 'X',
                    Some(Cell::White) => 'O',
                    _ => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rows().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows: Vec<Vec<Option<Player>>> = Vec::deserialize(deserializer)?;
        let rows: Vec<Vec<Cell>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(Cell::from).collect())
            .collect();
        Grid::from_rows(&rows).map_err(D::Error::custom)
    }
}
