use super::direction::Direction;
use crate::consts;
use thiserror::Error;

/// A grid-aligned position, in cell units.  Components are signed so that a
/// head that has just left the board (e.g., `x == -1`) can be represented and
/// tested.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Cell {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Cell {
    pub(crate) const fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }

    /// Return the cell one step away from `self` in `direction`.  Moving in
    /// [`Direction::None`] returns `self`.
    pub(crate) fn step(self, direction: Direction) -> Cell {
        let (dx, dy) = direction.vector();
        Cell {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// The playing field.  All snake & food cells live in
/// `0..width × 0..height`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Board {
    /// Width in cells
    width: u16,

    /// Height in cells
    height: u16,

    /// Edge length of a cell in pixels
    cell_size: u16,
}

impl Board {
    /// Construct a board from pixel dimensions and a cell size.  A partial
    /// trailing row or column counts as a full one, so that every pixel
    /// coordinate below the pixel bounds lies in some in-bounds cell.
    pub(crate) fn from_pixels(
        pixel_width: u16,
        pixel_height: u16,
        cell_size: u16,
    ) -> Result<Board, BoardError> {
        if cell_size == 0 {
            return Err(BoardError::ZeroCellSize);
        }
        Board::new(
            pixel_width.div_ceil(cell_size),
            pixel_height.div_ceil(cell_size),
            cell_size,
        )
    }

    /// Construct a board measuring `width` × `height` cells
    pub(crate) fn new(width: u16, height: u16, cell_size: u16) -> Result<Board, BoardError> {
        if cell_size == 0 {
            return Err(BoardError::ZeroCellSize);
        }
        if u32::from(width) * u32::from(height) < 2 {
            return Err(BoardError::TooSmall { width, height });
        }
        Ok(Board {
            width,
            height,
            cell_size,
        })
    }

    pub(crate) fn width(self) -> u16 {
        self.width
    }

    pub(crate) fn height(self) -> u16 {
        self.height
    }

    /// Pixel dimensions of the board as `(width, height)`
    pub(crate) fn pixel_size(self) -> (u32, u32) {
        let size = u32::from(self.cell_size);
        (u32::from(self.width) * size, u32::from(self.height) * size)
    }

    /// Total number of cells on the board
    pub(crate) fn area(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    pub(crate) fn in_bounds(self, cell: Cell) -> bool {
        (0..i32::from(self.width)).contains(&cell.x)
            && (0..i32::from(self.height)).contains(&cell.y)
    }

    pub(crate) fn center(self) -> Cell {
        Cell::new(i32::from(self.width / 2), i32::from(self.height / 2))
    }

    /// Iterate over every cell on the board in row-major order
    pub(crate) fn cells(self) -> impl Iterator<Item = Cell> {
        let width = i32::from(self.width);
        (0..i32::from(self.height)).flat_map(move |y| (0..width).map(move |x| Cell::new(x, y)))
    }

    /// Return the cell with row-major index `i`, if any
    pub(crate) fn nth_cell(self, i: usize) -> Option<Cell> {
        if i >= self.area() {
            return None;
        }
        let width = usize::from(self.width);
        let x = i32::try_from(i % width).ok()?;
        let y = i32::try_from(i / width).ok()?;
        Some(Cell::new(x, y))
    }
}

impl Default for Board {
    fn default() -> Board {
        Board {
            width: consts::BOARD_PIXEL_WIDTH.div_ceil(consts::CELL_SIZE),
            height: consts::BOARD_PIXEL_HEIGHT.div_ceil(consts::CELL_SIZE),
            cell_size: consts::CELL_SIZE,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum BoardError {
    #[error("cell size must be nonzero")]
    ZeroCellSize,
    #[error("board of {width}×{height} cells is too small; at least two cells are required")]
    TooSmall { width: u16, height: u16 },
}
