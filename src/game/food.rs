use super::grid::{Board, Cell};
use super::snake::Snake;
use rand::{seq::IteratorRandom, Rng};

/// How many uniformly-sampled cells to try before falling back to choosing
/// from the enumerated free cells
pub(crate) const MAX_FOOD_ATTEMPTS: usize = 64;

/// Choose a cell for the next piece of food uniformly at random from the
/// cells of `board` not occupied by `snake`.  Returns `None` if the snake
/// covers the whole board.
pub(crate) fn place_food<R: Rng>(board: Board, snake: &Snake, rng: &mut R) -> Option<Cell> {
    let area = board.area();
    if snake.len() < area {
        for _ in 0..MAX_FOOD_ATTEMPTS {
            let Some(cell) = board.nth_cell(rng.random_range(0..area)) else {
                continue;
            };
            if !snake.occupies(cell) {
                return Some(cell);
            }
        }
        log::warn!(
            "No free cell found after {MAX_FOOD_ATTEMPTS} random tries; choosing from enumerated free cells"
        );
    } else {
        log::debug!("Snake covers all {area} cells; looking for a free one anyway");
    }
    board
        .cells()
        .filter(|&cell| !snake.occupies(cell))
        .choose(rng)
}
