use super::grid::Board;
use super::snake::Snake;
use std::fmt;

/// Index of the first body cell that the head can collide with.  Cells 1
/// through 3 directly behind the head never count as a self-collision.
pub(crate) const SELF_COLLISION_OFFSET: usize = 4;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Collision {
    SelfCollision,
    Wall,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collision::SelfCollision => write!(f, "ran into itself"),
            Collision::Wall => write!(f, "hit a wall"),
        }
    }
}

/// Check whether the snake's head has left the board or run into its own
/// body
pub(crate) fn check_collision(snake: &Snake, board: Board) -> Option<Collision> {
    let head = snake.head();
    if snake
        .cells()
        .skip(SELF_COLLISION_OFFSET)
        .any(|cell| cell == head)
    {
        Some(Collision::SelfCollision)
    } else if !board.in_bounds(head) {
        Some(Collision::Wall)
    } else {
        None
    }
}
