//! Maze board storage with bounds-checked access and text rendering
//!
//! Boards are dense 2D cell grids. The solver's only placement assumption is
//! that the start cell sits in the top row, so parsing enforces it. Rendering
//! reproduces the space-joined row format of the console demos, optionally
//! overdrawing the cells entered by a move sequence with `+`.

use ndarray::Array2;

use crate::algorithm::moves::{Direction, MovePath};
use crate::io::error::{MazeError, Result};

/// Classification of a single board cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// Impassable wall (`#`)
    Wall,
    /// Open floor (` `)
    Open,
    /// Start cell (`s`), always in the top row
    Start,
    /// Finish cell (`f`)
    Finish,
}

impl Cell {
    /// Character used for this cell in board text
    pub const fn to_char(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Open => ' ',
            Self::Start => 's',
            Self::Finish => 'f',
        }
    }

    /// Parse a board character, `None` for unknown glyphs
    pub const fn from_char(glyph: char) -> Option<Self> {
        match glyph {
            '#' => Some(Self::Wall),
            ' ' => Some(Self::Open),
            's' => Some(Self::Start),
            'f' => Some(Self::Finish),
            _ => None,
        }
    }

    /// Whether a move may end on this cell
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

/// Signed board coordinates
///
/// Coordinates are signed so positions one step outside the board are
/// representable before a bounds check rejects them. `x` grows rightward
/// and `y` grows downward, matching row-major board text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    /// Column index, growing rightward
    pub x: i32,
    /// Row index, growing downward
    pub y: i32,
}

impl Position {
    /// Create a position from column and row indices
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position reached by taking one step in the given direction
    pub const fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Rectangular maze board
///
/// Stores cells row-major with the validated start location cached. Boards
/// are immutable once built; the carver and the parser are the only
/// constructors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    cells: Array2<Cell>,
    start: Position,
}

impl Maze {
    /// The hard-coded 5×5 demo board
    ///
    /// Start in the top row, finish near the bottom-right corner. Its unique
    /// shortest solution is `DDRDD`.
    pub fn fixed_five_by_five() -> Self {
        let layout = [
            [Cell::Wall, Cell::Wall, Cell::Start, Cell::Wall, Cell::Wall],
            [Cell::Open, Cell::Open, Cell::Open, Cell::Wall, Cell::Wall],
            [Cell::Open, Cell::Wall, Cell::Open, Cell::Open, Cell::Wall],
            [Cell::Open, Cell::Wall, Cell::Wall, Cell::Open, Cell::Wall],
            [Cell::Open, Cell::Open, Cell::Open, Cell::Finish, Cell::Wall],
        ];

        let mut cells = Array2::from_elem((5, 5), Cell::Wall);
        for (y, row) in layout.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if let Some(slot) = cells.get_mut((y, x)) {
                    *slot = cell;
                }
            }
        }

        Self {
            cells,
            start: Position::new(2, 0),
        }
    }

    /// Parse a board from text rows
    ///
    /// Rows must be non-empty, rectangular, and drawn from the `# sf`
    /// alphabet, with exactly one start in the top row and at least one
    /// finish anywhere.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidMazeData`] when any of those constraints
    /// is violated.
    pub fn parse(rows: &[&str]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.chars().count());
        if height == 0 || width == 0 {
            return Err(MazeError::InvalidMazeData {
                reason: "board must have at least one row and one column".to_string(),
            });
        }

        let mut cells = Array2::from_elem((height, width), Cell::Wall);
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(MazeError::InvalidMazeData {
                    reason: format!("row {y} has {} cells, expected {width}", row.chars().count()),
                });
            }
            for (x, glyph) in row.chars().enumerate() {
                let cell = Cell::from_char(glyph).ok_or_else(|| MazeError::InvalidMazeData {
                    reason: format!("unknown board character '{glyph}' at row {y}, column {x}"),
                })?;
                if let Some(slot) = cells.get_mut((y, x)) {
                    *slot = cell;
                }
            }
        }

        Self::from_cells(cells)
    }

    /// Build a board from a cell grid, validating start and finish placement
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidMazeData`] when the grid does not contain
    /// exactly one start in the top row, contains a start elsewhere, or has
    /// no finish cell.
    pub fn from_cells(cells: Array2<Cell>) -> Result<Self> {
        let mut start = None;
        let mut finish_count = 0usize;

        for ((y, x), &cell) in cells.indexed_iter() {
            match cell {
                Cell::Start => {
                    if y != 0 {
                        return Err(MazeError::InvalidMazeData {
                            reason: format!("start cell at row {y} must be in the top row"),
                        });
                    }
                    if start.is_some() {
                        return Err(MazeError::InvalidMazeData {
                            reason: "board has more than one start cell".to_string(),
                        });
                    }
                    start = Some(Position::new(x as i32, y as i32));
                }
                Cell::Finish => finish_count += 1,
                Cell::Wall | Cell::Open => {}
            }
        }

        let start = start.ok_or_else(|| MazeError::InvalidMazeData {
            reason: "board has no start cell in the top row".to_string(),
        })?;
        if finish_count == 0 {
            return Err(MazeError::InvalidMazeData {
                reason: "board has no finish cell".to_string(),
            });
        }

        Ok(Self { cells, start })
    }

    /// Number of board rows
    pub fn rows(&self) -> usize {
        self.cells.dim().0
    }

    /// Number of board columns
    pub fn cols(&self) -> usize {
        self.cells.dim().1
    }

    /// Board dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// The validated start position, always in the top row
    pub const fn start(&self) -> Position {
        self.start
    }

    /// Whether a position lies inside the board
    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as usize) < self.cols()
            && (position.y as usize) < self.rows()
    }

    /// Cell at a position, `None` when out of bounds
    pub fn cell(&self, position: Position) -> Option<Cell> {
        if position.x < 0 || position.y < 0 {
            return None;
        }
        self.cells
            .get((position.y as usize, position.x as usize))
            .copied()
    }

    /// Whether a move may end at this position: inside the board and not a wall
    pub fn is_passable(&self, position: Position) -> bool {
        self.cell(position).is_some_and(Cell::is_passable)
    }

    /// Whether this position is a finish cell
    pub fn is_finish(&self, position: Position) -> bool {
        self.cell(position) == Some(Cell::Finish)
    }

    /// Render the board as space-joined rows
    pub fn render(&self) -> String {
        self.render_internal(&[])
    }

    /// Render the board with every cell entered by the path drawn as `+`
    ///
    /// The walk begins after the first move, so the start glyph stays
    /// untouched unless a later move re-enters the start cell; a path ending
    /// on the finish overdraws the finish glyph. Both match the original
    /// console demos. Steps leaving the board are skipped rather than marked.
    pub fn render_with_path(&self, path: &MovePath) -> String {
        let entered = path.walk(self);
        self.render_internal(&entered)
    }

    fn render_internal(&self, marked: &[Position]) -> String {
        let (rows, cols) = self.dimensions();
        let mut out = String::with_capacity(rows * (cols * 2 + 1));
        for y in 0..rows {
            if y > 0 {
                out.push('\n');
            }
            for x in 0..cols {
                if x > 0 {
                    out.push(' ');
                }
                let position = Position::new(x as i32, y as i32);
                let glyph = if marked.contains(&position) {
                    '+'
                } else {
                    self.cell(position).map_or('#', Cell::to_char)
                };
                out.push(glyph);
            }
        }
        out
    }
}
