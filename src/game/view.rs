use super::{Cell, Collision, Ending, Game, Session};
use crate::consts;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
    Frame,
};

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    /// The size of the area needed to draw the game: the bordered board plus
    /// a score bar above it and two message lines below it
    fn display_size(&self) -> Size {
        let board = self.board();
        Size {
            width: board.width().saturating_add(2),
            height: board.height().saturating_add(5),
        }
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = center_rect(area, self.display_size());
        let [score_area, block_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(format!(" Score: {}", self.score()), consts::SCORE_BAR_STYLE)
            .render(score_area, buf);

        Block::bordered().render(block_area, buf);
        let level_area = block_area.inner(Margin::new(1, 1));
        let mut level = Canvas {
            area: level_area,
            buf,
        };
        let cells = self.snake_cells().collect::<Vec<_>>();
        if let Some((&tail, body)) = cells[1..].split_last() {
            level.draw_cell(tail, consts::SNAKE_TAIL_SYMBOL, consts::SNAKE_STYLE);
            for &c in body {
                level.draw_cell(c, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
            }
        }
        if let Some(food) = self.food() {
            level.draw_cell(food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        }
        // Draw the head last so that, if it's a collision, we overwrite
        // whatever it's colliding with
        let head = cells[0];
        match self.session() {
            Session::GameOver(Ending::Collision(Collision::Wall)) => {
                // The head is outside the board, so mark where it went through
                // the border.
                let mut border = Canvas {
                    area: block_area,
                    buf: level.buf,
                };
                border.draw_cell(
                    Cell::new(head.x.saturating_add(1), head.y.saturating_add(1)),
                    consts::COLLISION_SYMBOL,
                    consts::COLLISION_STYLE,
                );
            }
            Session::GameOver(Ending::Collision(Collision::SelfCollision))
                if self.state.snake.occupies_except_head(head) =>
            {
                level.draw_cell(head, consts::COLLISION_SYMBOL, consts::COLLISION_STYLE);
            }
            _ => level.draw_cell(head, consts::SNAKE_HEAD_SYMBOL, consts::SNAKE_HEAD_STYLE),
        }

        match self.session() {
            Session::Idle => {
                Line::from_iter([
                    Span::raw(" Press "),
                    Span::styled("Enter", consts::KEY_STYLE),
                    Span::raw(" to start — steer with ← ↓ ↑ →, h j k l, a s w d, or by dragging"),
                ])
                .render(msg1_area, buf);
                Line::from_iter([
                    Span::raw(" Quit ("),
                    Span::styled("q", consts::KEY_STYLE),
                    Span::raw(")"),
                ])
                .render(msg2_area, buf);
            }
            Session::Running => (),
            Session::GameOver(ending) => {
                Span::from(format!(" — GAME OVER — ({ending})")).render(msg1_area, buf);
                Line::from_iter([
                    Span::raw(" Play Again ("),
                    Span::styled("Enter", consts::KEY_STYLE),
                    Span::raw(") — Quit ("),
                    Span::styled("q", consts::KEY_STYLE),
                    Span::raw(")"),
                ])
                .render(msg2_area, buf);
            }
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    /// Draw `symbol` at the given cell, relative to the top-left of the
    /// canvas.  Cells outside the canvas are not drawn.
    fn draw_cell(&mut self, cell: Cell, symbol: char, style: Style) {
        let (Ok(cx), Ok(cy)) = (u16::try_from(cell.x), u16::try_from(cell.y)) else {
            return;
        };
        if cx >= self.area.width || cy >= self.area.height {
            return;
        }
        if let Some(bc) = self.buf.cell_mut((self.area.x + cx, self.area.y + cy)) {
            bc.set_char(symbol);
            bc.set_style(Style::reset().patch(style));
        }
    }
}
