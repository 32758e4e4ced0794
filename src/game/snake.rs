use super::direction::Direction;
use super::grid::Cell;
use std::collections::VecDeque;

/// The snake's body.  The head is the front of `cells` and the tail is the
/// back.  There is always at least one cell.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    cells: VecDeque<Cell>,
}

impl Snake {
    /// Create a new snake consisting of just a head at `head`
    pub(crate) fn new(head: Cell) -> Snake {
        Snake {
            cells: VecDeque::from([head]),
        }
    }

    /// Create a snake from a sequence of cells, head first.  Returns `None`
    /// if `cells` is empty.
    #[cfg(test)]
    pub(crate) fn from_cells<I: IntoIterator<Item = Cell>>(cells: I) -> Option<Snake> {
        let cells = cells.into_iter().collect::<VecDeque<_>>();
        (!cells.is_empty()).then_some(Snake { cells })
    }

    pub(crate) fn head(&self) -> Cell {
        self.cells[0]
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    /// Return the snake's cells, head first
    pub(crate) fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Return the cell the head would move into if the snake advanced in
    /// `direction`
    pub(crate) fn next_head(&self, direction: Direction) -> Cell {
        self.head().step(direction)
    }

    /// Move the snake one cell in `direction`: push a new head on the front
    /// and, unless `grow` is true, drop the tail.  Advancing in
    /// [`Direction::None`] leaves the snake unchanged.
    pub(crate) fn advance(&mut self, direction: Direction, grow: bool) {
        if direction.is_none() {
            return;
        }
        let head = self.next_head(direction);
        self.cells.push_front(head);
        if !grow {
            let _ = self.cells.pop_back();
        }
    }

    /// Does `cell` equal any cell of the snake, head included?
    pub(crate) fn occupies(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Does `cell` equal any cell of the snake other than the head?
    pub(crate) fn occupies_except_head(&self, cell: Cell) -> bool {
        self.cells.iter().skip(1).any(|&c| c == cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn line_snake() -> Snake {
        Snake::from_cells([
            Cell::new(5, 5),
            Cell::new(4, 5),
            Cell::new(3, 5),
        ])
        .expect("snake should be nonempty")
    }

    #[rstest]
    #[case(Direction::Right, false, vec![Cell::new(6, 5), Cell::new(5, 5), Cell::new(4, 5)])]
    #[case(Direction::Up, false, vec![Cell::new(5, 4), Cell::new(5, 5), Cell::new(4, 5)])]
    #[case(
        Direction::Down,
        true,
        vec![Cell::new(5, 6), Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)]
    )]
    #[case(
        Direction::None,
        false,
        vec![Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)]
    )]
    #[case(
        Direction::None,
        true,
        vec![Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)]
    )]
    fn test_advance(#[case] d: Direction, #[case] grow: bool, #[case] after: Vec<Cell>) {
        let mut snake = line_snake();
        snake.advance(d, grow);
        assert_eq!(snake.cells().collect::<Vec<_>>(), after);
    }

    #[test]
    fn length_is_invariant_without_growth() {
        let mut snake = line_snake();
        for d in [Direction::Right, Direction::Down, Direction::Left, Direction::Down] {
            snake.advance(d, false);
            assert_eq!(snake.len(), 3);
        }
        snake.advance(Direction::Left, true);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Cell::new(4, 7));
        assert_eq!(snake.cells().last(), Some(Cell::new(6, 6)));
    }

    #[test]
    fn occupancy() {
        let snake = line_snake();
        assert!(snake.occupies(Cell::new(5, 5)));
        assert!(snake.occupies(Cell::new(3, 5)));
        assert!(!snake.occupies(Cell::new(2, 5)));
    }

    #[rstest]
    #[case(Cell::new(5, 5), false)]
    #[case(Cell::new(4, 5), true)]
    #[case(Cell::new(3, 5), true)]
    #[case(Cell::new(2, 5), false)]
    fn test_occupies_except_head(#[case] cell: Cell, #[case] r: bool) {
        assert_eq!(line_snake().occupies_except_head(cell), r);
    }

    #[test]
    fn single_cell_snake() {
        let mut snake = Snake::new(Cell::new(0, 0));
        assert_eq!(snake.len(), 1);
        snake.advance(Direction::Right, false);
        assert_eq!(snake.cells().collect::<Vec<_>>(), [Cell::new(1, 0)]);
        assert!(!snake.occupies(Cell::new(0, 0)));
        assert!(!snake.occupies_except_head(Cell::new(1, 0)));
    }
}
