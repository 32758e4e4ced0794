use super::Ending;
use crate::command::Command;
use crate::consts;
use crossterm::event::Event;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};

/// A pop-up announcing the end of a session and its final score.  While it's
/// shown, nothing else happens until it's dismissed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct GameOverDialog {
    score: u32,
    ending: Ending,
}

impl GameOverDialog {
    const HEIGHT: u16 = 6;

    pub(crate) fn new(score: u32, ending: Ending) -> GameOverDialog {
        GameOverDialog { score, ending }
    }

    pub(crate) fn message(&self) -> String {
        format!("Game Over! Your score was {}", self.score)
    }

    /// The size of the `Rect` that should be passed to `render()`
    pub(crate) fn size(&self) -> Size {
        let text_width = self
            .message()
            .chars()
            .count()
            .max(self.ending.to_string().chars().count());
        Size {
            width: u16::try_from(text_width)
                .unwrap_or(u16::MAX)
                .saturating_add(4),
            height: Self::HEIGHT,
        }
    }

    /// Handle an input event.  Returns `Some` if the user made a choice.
    pub(crate) fn handle_event(&self, event: &Event) -> Option<DialogChoice> {
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::Start | Command::Esc => Some(DialogChoice::Dismiss),
            Command::Q | Command::Quit => Some(DialogChoice::Quit),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum DialogChoice {
    Dismiss,
    Quit,
}

impl Widget for GameOverDialog {
    /*
     * ┌──────── GAME OVER ────────┐
     * │Game Over! Your score was 3│
     * │      snake hit a wall     │
     * │                           │
     * │         OK (Enter)        │
     * └───────────────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::bordered()
            .title(" GAME OVER ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(area);
        block.render(area, buf);
        let lines = [
            Line::from(self.message()),
            Line::from(self.ending.to_string()),
            Line::default(),
            Line::from_iter([
                Span::raw("OK ("),
                Span::styled("Enter", consts::KEY_STYLE),
                Span::raw(")"),
            ]),
        ];
        for (line, row) in lines.into_iter().zip(inner.rows()) {
            line.centered().render(row, buf);
        }
    }
}
