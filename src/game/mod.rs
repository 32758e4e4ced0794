mod collision;
mod direction;
mod food;
mod gameover;
mod grid;
mod snake;
mod speed;
mod view;
pub(crate) use self::collision::Collision;
pub(crate) use self::direction::Direction;
pub(crate) use self::gameover::{DialogChoice, GameOverDialog};
pub(crate) use self::grid::{Board, BoardError, Cell};
pub(crate) use self::speed::{SpeedError, SpeedRamp};
use self::collision::check_collision;
use self::food::place_food;
use self::snake::Snake;
use crate::ticker::Ticker;
use rand::Rng;
use std::fmt;
use std::time::{Duration, Instant};

/// The fixed parameters of a game
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Settings {
    pub(crate) board: Board,
    pub(crate) speed: SpeedRamp,
}

/// Everything that changes while a session is played
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GameState {
    snake: Snake,

    /// The direction the snake will move in on the next tick
    direction: Direction,

    /// The direction the snake moved in on the most recent tick
    heading: Direction,

    /// `None` only once the snake has filled the board.  A fresh one-cell
    /// snake always leaves room, as boards have at least two cells.
    food: Option<Cell>,

    score: u32,

    /// Current time between ticks
    interval: Duration,
}

impl GameState {
    fn new<R: Rng>(settings: Settings, rng: &mut R) -> GameState {
        let snake = Snake::new(settings.board.center());
        let food = place_food(settings.board, &snake, rng);
        GameState {
            snake,
            direction: Direction::None,
            heading: Direction::None,
            food,
            score: 0,
            interval: settings.speed.initial(),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Session {
    /// No session has been started yet
    Idle,
    Running,
    /// The most recent session has ended.  A new one can be started.
    GameOver(Ending),
}

/// Why a session ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Ending {
    Collision(Collision),
    /// The snake has filled the board and there are no more cells to place
    /// food in.
    BoardFilled,
}

impl fmt::Display for Ending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ending::Collision(c) => write!(f, "snake {c}"),
            Ending::BoardFilled => write!(f, "snake filled the board"),
        }
    }
}

/// What happened on a tick
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum TickOutcome {
    /// No session is running; nothing changed
    Inactive,
    Moved,
    Ate { score: u32, interval: Duration },
    Over { score: u32, ending: Ending },
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    settings: Settings,
    session: Session,
    state: GameState,
    ticker: Ticker,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(settings: Settings) -> Self {
        Game::new_with_rng(settings, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(settings: Settings, mut rng: R) -> Game<R> {
        let state = GameState::new(settings, &mut rng);
        Game {
            rng,
            settings,
            session: Session::Idle,
            state,
            ticker: Ticker::new(),
        }
    }

    /// Begin a new session, discarding any previous one.  A tick pending from
    /// an earlier session is cancelled before anything is reset.
    pub(crate) fn start(&mut self, now: Instant) {
        self.ticker.disarm();
        self.state = GameState::new(self.settings, &mut self.rng);
        self.session = Session::Running;
        self.ticker.arm(self.state.interval, now);
        let (pixel_width, pixel_height) = self.settings.board.pixel_size();
        log::info!(
            "Started new session on {}×{} board ({pixel_width}×{pixel_height} px); snake at {:?}, food at {:?}",
            self.settings.board.width(),
            self.settings.board.height(),
            self.state.snake.head(),
            self.state.food,
        );
    }

    /// If a tick is due at `now`, perform it
    pub(crate) fn poll_tick(&mut self, now: Instant) -> Option<TickOutcome> {
        self.ticker.fire(now).then(|| self.tick(now))
    }

    /// Advance the game by one step.  Does nothing unless a session is
    /// running.
    pub(crate) fn tick(&mut self, now: Instant) -> TickOutcome {
        if self.session != Session::Running {
            return TickOutcome::Inactive;
        }
        let st = &mut self.state;
        let direction = st.direction;
        let grow = st.food == Some(st.snake.next_head(direction)) && !direction.is_none();
        st.snake.advance(direction, grow);
        st.heading = direction;
        if let Some(collision) = check_collision(&st.snake, self.settings.board) {
            return self.end(Ending::Collision(collision));
        }
        if !grow {
            return TickOutcome::Moved;
        }
        st.score += 1;
        st.food = place_food(self.settings.board, &st.snake, &mut self.rng);
        let interval = self.settings.speed.next(st.interval);
        if interval == self.settings.speed.floor() && interval != st.interval {
            log::debug!("Tick interval has reached its floor of {interval:?}");
        }
        st.interval = interval;
        let score = st.score;
        if st.food.is_none() {
            return self.end(Ending::BoardFilled);
        }
        self.ticker.arm(interval, now);
        log::info!(
            "Food eaten; score is now {score}, tick interval {interval:?}, next food at {:?}",
            self.state.food,
        );
        TickOutcome::Ate { score, interval }
    }

    fn end(&mut self, ending: Ending) -> TickOutcome {
        self.ticker.disarm();
        self.session = Session::GameOver(ending);
        let score = self.state.score;
        log::info!("Game over: {ending}; final score {score}");
        TickOutcome::Over { score, ending }
    }
}

impl<R> Game<R> {
    /// Request that the snake move in `candidate` from the next tick on.
    /// The request is ignored if it would reverse the snake onto itself or if
    /// the last session has ended.  Returns whether the request was accepted.
    pub(crate) fn set_direction(&mut self, candidate: Direction) -> bool {
        if matches!(self.session, Session::GameOver(_)) || candidate.is_none() {
            return false;
        }
        let st = &mut self.state;
        if candidate.opposes(st.direction) || candidate.opposes(st.heading) {
            log::debug!(
                "Ignoring reversal to {candidate:?} (pending {:?}, heading {:?})",
                st.direction,
                st.heading
            );
            return false;
        }
        st.direction = candidate;
        true
    }

    /// Return how long until the next tick is due, or `None` if no tick is
    /// scheduled
    pub(crate) fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.ticker.time_until(now)
    }

    pub(crate) fn session(&self) -> Session {
        self.session
    }

    pub(crate) fn score(&self) -> u32 {
        self.state.score
    }

    pub(crate) fn board(&self) -> Board {
        self.settings.board
    }

    /// Return the snake's cells, head first
    pub(crate) fn snake_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.state.snake.cells()
    }

    pub(crate) fn food(&self) -> Option<Cell> {
        self.state.food
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn new_game(board: Board) -> Game<ChaCha12Rng> {
        let settings = Settings {
            board,
            speed: SpeedRamp::default(),
        };
        Game::new_with_rng(settings, ChaCha12Rng::seed_from_u64(RNG_SEED))
    }

    fn started_game() -> (Game<ChaCha12Rng>, Instant) {
        let mut game = new_game(Board::default());
        let now = Instant::now();
        game.start(now);
        (game, now)
    }

    fn assert_food_off_snake<R>(game: &Game<R>) {
        let food = game.food().expect("food should be placed");
        assert!(game.board().in_bounds(food));
        assert!(!game.state.snake.occupies(food));
    }

    #[test]
    fn idle_until_started() {
        let mut game = new_game(Board::default());
        let now = Instant::now();
        assert_eq!(game.session(), Session::Idle);
        assert_eq!(game.time_until_tick(now), None);
        assert_eq!(game.tick(now), TickOutcome::Inactive);
        assert_eq!(game.poll_tick(now + Duration::from_secs(5)), None);
    }

    #[test]
    fn start_resets_state() {
        let (game, now) = started_game();
        assert_eq!(game.session(), Session::Running);
        assert_eq!(game.snake_cells().collect::<Vec<_>>(), [Cell::new(30, 14)]);
        assert_eq!(game.state.direction, Direction::None);
        assert_eq!(game.score(), 0);
        assert_eq!(game.state.interval, Duration::from_millis(200));
        assert_eq!(game.time_until_tick(now), Some(Duration::from_millis(200)));
        assert_food_off_snake(&game);
    }

    #[test]
    fn no_movement_before_first_direction() {
        let (mut game, now) = started_game();
        game.state.food = Some(Cell::new(0, 0));
        for i in 1..=5 {
            assert_eq!(game.tick(now + i * game.state.interval), TickOutcome::Moved);
        }
        assert_eq!(game.snake_cells().collect::<Vec<_>>(), [Cell::new(30, 14)]);
        assert!(game.session() == Session::Running);
    }

    #[test]
    fn eat_food_end_to_end() {
        let (mut game, now) = started_game();
        game.state.food = Some(Cell::new(33, 14));
        assert!(game.set_direction(Direction::Right));
        assert_eq!(game.tick(now), TickOutcome::Moved);
        assert_eq!(game.snake_cells().collect::<Vec<_>>(), [Cell::new(31, 14)]);
        assert_eq!(game.tick(now), TickOutcome::Moved);
        assert_eq!(game.state.snake.len(), 1);
        let later = now + Duration::from_millis(450);
        assert_eq!(
            game.tick(later),
            TickOutcome::Ate {
                score: 1,
                interval: Duration::from_millis(190)
            }
        );
        assert_eq!(game.score(), 1);
        assert_eq!(
            game.snake_cells().collect::<Vec<_>>(),
            [Cell::new(33, 14), Cell::new(32, 14)]
        );
        assert_food_off_snake(&game);
        assert_ne!(game.food(), Some(Cell::new(33, 14)));
        assert_eq!(game.state.interval, Duration::from_millis(190));
        assert_eq!(game.time_until_tick(later), Some(Duration::from_millis(190)));
    }

    #[test]
    fn speed_floors_after_twenty_meals() {
        let (mut game, now) = started_game();
        assert!(game.set_direction(Direction::Right));
        for k in 1..=20 {
            let ahead = game.state.snake.next_head(Direction::Right);
            game.state.food = Some(ahead);
            let outcome = game.tick(now);
            assert!(
                matches!(outcome, TickOutcome::Ate { score, .. } if score == k),
                "meal {k} gave {outcome:?}"
            );
            assert_eq!(game.state.interval, SpeedRamp::default().after(k));
            assert_food_off_snake(&game);
        }
        assert_eq!(game.state.interval, Duration::from_millis(50));
        assert_eq!(game.state.snake.len(), 21);
    }

    #[test]
    fn length_invariant_without_food() {
        let (mut game, now) = started_game();
        game.state.food = Some(Cell::new(0, 0));
        game.state.snake = Snake::from_cells([
            Cell::new(30, 14),
            Cell::new(29, 14),
            Cell::new(28, 14),
        ])
        .expect("nonempty");
        game.state.heading = Direction::Right;
        for d in [Direction::Right, Direction::Down, Direction::Left, Direction::Down] {
            assert!(game.set_direction(d));
            assert_eq!(game.tick(now), TickOutcome::Moved);
            assert_eq!(game.state.snake.len(), 3);
        }
    }

    #[test]
    fn reversal_is_rejected() {
        let (mut game, now) = started_game();
        game.state.food = Some(Cell::new(0, 0));
        assert!(game.set_direction(Direction::Right));
        assert!(!game.set_direction(Direction::Left));
        assert_eq!(game.state.direction, Direction::Right);
        let _ = game.tick(now);
        assert!(!game.set_direction(Direction::Left));
        assert!(!game.set_direction(Direction::Left));
        assert_eq!(game.state.direction, Direction::Right);
    }

    #[test]
    fn two_turns_within_one_tick_cannot_reverse() {
        let (mut game, now) = started_game();
        game.state.food = Some(Cell::new(0, 0));
        assert!(game.set_direction(Direction::Right));
        let _ = game.tick(now);
        assert!(game.set_direction(Direction::Up));
        assert!(!game.set_direction(Direction::Left));
        assert_eq!(game.state.direction, Direction::Up);
        assert_eq!(game.tick(now), TickOutcome::Moved);
        assert_eq!(game.state.snake.head(), Cell::new(31, 13));
    }

    #[test]
    fn direction_accepted_while_idle() {
        let mut game = new_game(Board::default());
        assert!(game.set_direction(Direction::Down));
        game.start(Instant::now());
        assert_eq!(game.state.direction, Direction::None);
    }

    #[test]
    fn wall_ends_session() {
        let mut game = new_game(Board::new(6, 4, 20).expect("board should be valid"));
        let now = Instant::now();
        game.start(now);
        game.state.food = Some(Cell::new(5, 3));
        assert_eq!(game.state.snake.head(), Cell::new(3, 2));
        assert!(game.set_direction(Direction::Left));
        assert_eq!(game.tick(now), TickOutcome::Moved);
        assert_eq!(game.tick(now), TickOutcome::Moved);
        assert_eq!(game.tick(now), TickOutcome::Moved);
        assert_eq!(
            game.tick(now),
            TickOutcome::Over {
                score: 0,
                ending: Ending::Collision(Collision::Wall)
            }
        );
        assert_eq!(game.session(), Session::GameOver(Ending::Collision(Collision::Wall)));
        assert_eq!(game.time_until_tick(now), None);
        let cells = game.snake_cells().collect::<Vec<_>>();
        assert_eq!(cells, [Cell::new(-1, 2)]);

        // Re-firing the timer changes nothing
        assert_eq!(game.tick(now), TickOutcome::Inactive);
        assert_eq!(game.poll_tick(now + Duration::from_secs(10)), None);
        assert_eq!(game.snake_cells().collect::<Vec<_>>(), cells);
        assert!(!game.set_direction(Direction::Down));
    }

    #[test]
    fn self_collision_ends_session() {
        let (mut game, now) = started_game();
        game.state.food = Some(Cell::new(0, 0));
        game.state.score = 4;
        game.state.snake = Snake::from_cells([
            Cell::new(5, 5),
            Cell::new(6, 5),
            Cell::new(6, 6),
            Cell::new(5, 6),
            Cell::new(4, 6),
            Cell::new(4, 5),
        ])
        .expect("nonempty");
        game.state.direction = Direction::Left;
        game.state.heading = Direction::Left;
        assert!(game.set_direction(Direction::Down));
        assert_eq!(
            game.tick(now),
            TickOutcome::Over {
                score: 4,
                ending: Ending::Collision(Collision::SelfCollision)
            }
        );
        assert!(game.session() != Session::Running);
    }

    #[test]
    fn restart_after_game_over() {
        let (mut game, now) = started_game();
        game.state.food = Some(Cell::new(0, 0));
        game.state.score = 7;
        assert!(game.set_direction(Direction::Up));
        while game.session() == Session::Running {
            let _ = game.tick(now);
        }
        game.start(now);
        assert_eq!(game.session(), Session::Running);
        assert_eq!(game.score(), 0);
        assert_eq!(game.state.interval, Duration::from_millis(200));
        assert_eq!(game.snake_cells().collect::<Vec<_>>(), [Cell::new(30, 14)]);
        assert!(game.set_direction(Direction::Down));
    }

    #[test]
    fn restart_while_running_replaces_schedule() {
        let (mut game, now) = started_game();
        assert!(game.set_direction(Direction::Right));
        let ahead = game.state.snake.next_head(Direction::Right);
        game.state.food = Some(ahead);
        let _ = game.tick(now);
        assert_eq!(game.time_until_tick(now), Some(Duration::from_millis(190)));
        let later = now + Duration::from_millis(100);
        game.start(later);
        assert_eq!(game.time_until_tick(later), Some(Duration::from_millis(200)));
        assert_eq!(game.poll_tick(now + Duration::from_millis(290)), None);
        assert_eq!(game.state.direction, Direction::None);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn poll_tick_follows_schedule() {
        let (mut game, now) = started_game();
        game.state.food = Some(Cell::new(0, 0));
        assert!(game.set_direction(Direction::Down));
        assert_eq!(game.poll_tick(now + Duration::from_millis(199)), None);
        assert_eq!(
            game.poll_tick(now + Duration::from_millis(200)),
            Some(TickOutcome::Moved)
        );
        assert_eq!(game.state.snake.head(), Cell::new(30, 15));
        assert_eq!(game.poll_tick(now + Duration::from_millis(300)), None);
    }

    #[test]
    fn start_on_smallest_board_places_food() {
        for board in [
            Board::new(2, 1, 20).expect("board should be valid"),
            Board::new(1, 2, 20).expect("board should be valid"),
        ] {
            let mut game = new_game(board);
            let now = Instant::now();
            game.start(now);
            assert_eq!(game.session(), Session::Running);
            assert_food_off_snake(&game);
            assert_eq!(game.time_until_tick(now), Some(Duration::from_millis(200)));
        }
    }

    #[test]
    fn filling_the_board_ends_session() {
        let mut game = new_game(Board::new(2, 1, 20).expect("board should be valid"));
        let now = Instant::now();
        game.start(now);
        assert_eq!(game.state.snake.head(), Cell::new(1, 0));
        assert_eq!(game.food(), Some(Cell::new(0, 0)));
        assert!(game.set_direction(Direction::Left));
        assert_eq!(
            game.tick(now),
            TickOutcome::Over {
                score: 1,
                ending: Ending::BoardFilled
            }
        );
        assert_eq!(game.food(), None);
        assert_eq!(game.time_until_tick(now), None);
    }
}
