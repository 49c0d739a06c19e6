//! Board state representation and the rules of play

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{game::Outcome, lines::LineAnalyzer};

/// Number of rows and columns on the board
pub const BOARD_SIZE: usize = 3;
/// Number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
///
/// X moves first and is the maximizing side; O is the minimizing side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A move: the (row, column) of the cell to mark
///
/// Both coordinates are always in `0..3`; the constructors reject anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    /// Every move on the board in row-major order
    pub const ALL: [Move; CELL_COUNT] = {
        let mut all = [Move { row: 0, col: 0 }; CELL_COUNT];
        let mut i = 0;
        while i < CELL_COUNT {
            all[i] = Move {
                row: i / BOARD_SIZE,
                col: i % BOARD_SIZE,
            };
            i += 1;
        }
        all
    };

    pub fn new(row: usize, col: usize) -> Result<Self, crate::Error> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(crate::Error::InvalidPosition { row, col });
        }
        Ok(Move { row, col })
    }

    /// Build a move from a row-major position (0-8)
    pub fn from_index(index: usize) -> Result<Self, crate::Error> {
        if index >= CELL_COUNT {
            return Err(crate::Error::InvalidPosition {
                row: index / BOARD_SIZE,
                col: index % BOARD_SIZE,
            });
        }
        Ok(Self::ALL[index])
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major position (0-8)
    pub fn index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }
}

impl TryFrom<(usize, usize)> for Move {
    type Error = crate::Error;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Move::new(row, col)
    }
}

impl From<Move> for (usize, usize) {
    fn from(mv: Move) -> Self {
        (mv.row, mv.col)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A 3x3 Tic-Tac-Toe board, stored row-major
///
/// Boards are plain `Copy` values. Every operation that places a marker returns
/// a fresh board and leaves the receiver untouched. The player to move is not
/// stored; it follows from the number of markers already placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create the empty starting board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Create a board from explicit rows.
    ///
    /// No reachability checks are made; use [`Board::from_string`] for
    /// validated input.
    pub fn from_rows(rows: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut cells = [Cell::Empty; CELL_COUNT];
        for (r, row) in rows.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                cells[r * BOARD_SIZE + c] = cell;
            }
        }
        Board { cells }
    }

    /// Parse a board from its text form.
    ///
    /// The string must hold exactly 9 cell characters (`X`, `O` and `.`, `_` or
    /// `-` for empty cells) in row-major order. Whitespace and the separators
    /// `|` and `/` are ignored, so `"XO./.X./..O"` and `"XO. .X. ..O"` both work.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The string does not contain exactly 9 cell characters
    /// - Any character is not a valid cell representation
    /// - The piece counts cannot come from X-first alternating play
    /// - Both players own a winning line
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|' && *c != '/')
            .collect();

        if chars.len() != CELL_COUNT {
            return Err(crate::Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let board = Board { cells };
        let (x_count, o_count) = board.piece_counts();
        if x_count != o_count && x_count != o_count + 1 {
            return Err(crate::Error::InvalidPieceCounts { x_count, o_count });
        }
        if board.has_won(Player::X) && board.has_won(Player::O) {
            return Err(crate::Error::ConflictingWinners {
                context: s.to_string(),
            });
        }

        Ok(board)
    }

    /// The cells in row-major order
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Get the cell a move targets
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.index()]
    }

    fn piece_counts(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(x, o), cell| match cell {
                Cell::X => (x + 1, o),
                Cell::O => (x, o + 1),
                Cell::Empty => (x, o),
            })
    }

    /// Count the number of occupied cells on the board
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// The player whose turn it is.
    ///
    /// An even number of markers means X moves, odd means O. The answer is only
    /// meaningful for non-terminal boards reached through alternating play;
    /// check [`Board::is_terminal`] first.
    pub fn side_to_move(&self) -> Player {
        if self.occupied_count().is_multiple_of(2) {
            Player::X
        } else {
            Player::O
        }
    }

    /// Every empty cell as a move, in row-major order.
    ///
    /// The order is fixed: search relies on it for deterministic tie-breaking.
    /// The list is empty exactly when the board is full.
    pub fn legal_moves(&self) -> Vec<Move> {
        Move::ALL
            .into_iter()
            .filter(|&mv| self.get(mv) == Cell::Empty)
            .collect()
    }

    /// Place the side to move's marker and return the new board
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::IllegalMove`] if the target cell is occupied.
    #[must_use = "apply returns a new board; the original is unchanged"]
    pub fn apply(&self, mv: Move) -> Result<Board, crate::Error> {
        if self.get(mv) != Cell::Empty {
            return Err(crate::Error::IllegalMove {
                row: mv.row(),
                col: mv.col(),
            });
        }
        Ok(self.place(mv))
    }

    /// Place the side to move's marker without checking the target cell.
    ///
    /// Callers must pass a move taken from [`Board::legal_moves`].
    pub(crate) fn place(&self, mv: Move) -> Board {
        let mut next = *self;
        next.cells[mv.index()] = self.side_to_move().to_cell();
        next
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Check if the board has no empty cell left
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// The result of a finished game, `None` while play continues
    pub fn outcome(&self) -> Option<Outcome> {
        match self.winner() {
            Some(player) => Some(Outcome::Win(player)),
            None if self.is_full() => Some(Outcome::Draw),
            None => None,
        }
    }

    /// Score a terminal board: +1 if X won, -1 if O won, 0 for a draw.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotTerminal`] while the game is still running.
    pub fn utility(&self) -> Result<i32, crate::Error> {
        self.outcome()
            .map(Outcome::utility)
            .ok_or(crate::Error::NotTerminal)
    }

    /// Compact 9-character form, accepted by [`Board::from_string`]
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(BOARD_SIZE) && i < CELL_COUNT - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
