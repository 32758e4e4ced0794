//! Assorted constants & hard-coded configuration
use ratatui::style::{Color, Modifier, Style};
use std::time::Duration;

/// Default board width in pixels
pub(crate) const BOARD_PIXEL_WIDTH: u16 = 1200;

/// Default board height in pixels
pub(crate) const BOARD_PIXEL_HEIGHT: u16 = 550;

/// Default edge length of a grid cell (and thus of a snake segment) in pixels
pub(crate) const CELL_SIZE: u16 = 20;

/// Time between movements of the snake at the start of a session
pub(crate) const INITIAL_TICK_INTERVAL: Duration = Duration::from_millis(200);

/// How much the time between movements shrinks each time food is eaten
pub(crate) const TICK_DECREMENT: Duration = Duration::from_millis(10);

/// The time between movements never drops below this
pub(crate) const TICK_FLOOR: Duration = Duration::from_millis(50);

/// Glyph for the snake's head
pub(crate) const SNAKE_HEAD_SYMBOL: char = '@';

/// Glyph for the parts of the snake's body between the head and the tail
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the last cell of the snake
pub(crate) const SNAKE_TAIL_SYMBOL: char = '·';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph for the snake's head when it's collided with a wall or itself
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's body and tail
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the snake's head
pub(crate) const SNAKE_HEAD_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
