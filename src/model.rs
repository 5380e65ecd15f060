//! Core game model: the NxN grid, whose turn it is, and win detection.
//! Nothing in here touches the DOM, so all of it is tested natively.

use std::fmt;

use crate::error::GameError;

pub const MIN_GRID_SIZE: usize = 2;
pub const MAX_GRID_SIZE: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Numeric cell value used in the UI (1 or 2).
    pub fn value(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Player::One => "X",
            Player::Two => "O",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Player::One => "red",
            Player::Two => "blue",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.value())
    }
}

/// A grid position. Both coordinates are 1-indexed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
}

impl Cell {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub player_one: u32,
    pub player_two: u32,
}

impl Score {
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player_one,
            Player::Two => self.player_two,
        }
    }

    fn increment(&mut self, player: Player) {
        let slot = match player {
            Player::One => &mut self.player_one,
            Player::Two => &mut self.player_two,
        };
        *slot = slot.saturating_add(1);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress(Player),
    Won(Player),
    Draw,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The mark was placed and play continues.
    Placed,
    /// The mark completed at least one line.
    Won(Player),
    /// A player had already won; the grid was not touched.
    Ignored,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    /// Row-major cells; length = size * size.
    cells: Vec<Option<Player>>,
    size: usize,
    turn: Player,
    winner: Option<Player>,
    score: Score,
}

impl Default for GameState {
    fn default() -> Self {
        Self::empty(3, 3 * 3)
    }
}

/// Checks `size` against the grid limits and returns the number of cells.
pub fn cell_count(size: usize) -> Result<usize, GameError> {
    if size < MIN_GRID_SIZE {
        return Err(GameError::GridTooSmall {
            requested: size,
            min: MIN_GRID_SIZE,
        });
    }
    let too_large = GameError::GridTooLarge {
        requested: size,
        max: MAX_GRID_SIZE,
    };
    if size > MAX_GRID_SIZE {
        return Err(too_large);
    }
    size.checked_mul(size).ok_or(too_large)
}

impl GameState {
    pub fn new(size: usize) -> Result<Self, GameError> {
        let count = cell_count(size)?;
        Ok(Self::empty(size, count))
    }

    fn empty(size: usize, count: usize) -> Self {
        Self {
            cells: vec![None; count],
            size,
            turn: Player::One,
            winner: None,
            score: Score::default(),
        }
    }

    pub fn grid_size(&self) -> usize {
        self.size
    }

    pub fn current_player(&self) -> Player {
        self.turn
    }

    pub fn has_winner(&self) -> bool {
        self.winner.is_some()
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn moves_played(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(p) => GameStatus::Won(p),
            None if self.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress(self.turn),
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (1..=self.size).contains(&cell.row) && (1..=self.size).contains(&cell.column)
    }

    pub fn cell_value(&self, cell: Cell) -> Result<Option<Player>, GameError> {
        let idx = self.index(cell)?;
        Ok(self.cells[idx])
    }

    /// Every cell in row-major order with its current value.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, Option<Player>)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, v)| (Cell::new(i / size + 1, i % size + 1), *v))
    }

    pub fn player_move(&mut self, cell: Cell) -> Result<MoveOutcome, GameError> {
        let idx = self.index(cell)?;
        if self.winner.is_some() {
            return Ok(MoveOutcome::Ignored);
        }
        if self.cells[idx].is_some() {
            return Err(GameError::CellOccupied(cell));
        }
        let player = self.turn;
        self.cells[idx] = Some(player);
        self.turn = player.other();

        if self.completes_line(cell, player) {
            self.score.increment(player);
            self.winner = Some(player);
            return Ok(MoveOutcome::Won(player));
        }
        Ok(MoveOutcome::Placed)
    }

    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = None);
        self.turn = Player::One;
        self.winner = None;
    }

    pub fn set_grid_size(&mut self, size: usize) -> Result<(), GameError> {
        let count = cell_count(size)?;
        if size == self.size {
            return Err(GameError::GridUnchanged(size));
        }
        self.size = size;
        self.cells = vec![None; count];
        self.reset();
        Ok(())
    }

    fn index(&self, cell: Cell) -> Result<usize, GameError> {
        if !self.contains(cell) {
            return Err(GameError::OutOfBounds {
                cell,
                size: self.size,
            });
        }
        Ok((cell.row - 1) * self.size + (cell.column - 1))
    }

    fn at(&self, row: usize, column: usize) -> Option<Player> {
        self.cells[row * self.size + column]
    }

    // Only lines through `cell` can have been completed by this move.
    fn completes_line(&self, cell: Cell, player: Player) -> bool {
        let n = self.size;
        let (r, c) = (cell.row - 1, cell.column - 1);
        let full = |f: &dyn Fn(usize) -> Option<Player>| (0..n).all(|i| f(i) == Some(player));

        let diagonal = r == c && full(&|i| self.at(i, i));
        let anti_diagonal = r + c == n - 1 && full(&|i| self.at(i, n - 1 - i));
        let row = full(&|i| self.at(r, i));
        let column = full(&|i| self.at(i, c));
        diagonal || anti_diagonal || row || column
    }
}
