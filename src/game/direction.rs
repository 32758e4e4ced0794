#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum Direction {
    /// No movement; the snake stays put until a direction is chosen
    #[default]
    None,
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// Return the unit vector `(dx, dy)` for the direction, with `y`
    /// increasing downwards
    pub(crate) fn vector(self) -> (i32, i32) {
        match self {
            Direction::None => (0, 0),
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::None => Direction::None,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
        }
    }

    /// Is `self` the exact opposite of `other`?  `None` is opposite to
    /// nothing.
    pub(crate) fn opposes(self, other: Direction) -> bool {
        self != Direction::None && self.reverse() == other
    }

    pub(crate) fn is_none(self) -> bool {
        self == Direction::None
    }
}
