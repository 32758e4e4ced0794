use crate::command::Command;
use crate::game::{DialogChoice, Game, GameOverDialog, TickOutcome};
use crate::swipe::Swipe;
use crate::util::center_rect;
use crossterm::event::{poll, read, Event, MouseButton, MouseEventKind};
use rand::Rng;
use ratatui::{backend::Backend, Frame, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// The top-level event loop.  Input events and ticks are handled one at a
/// time; after each, the screen is redrawn.
#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    game: Game<R>,
    swipe: Swipe,
    dialog: Option<GameOverDialog>,
    quitting: bool,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(game: Game<R>) -> App<R> {
        App {
            game,
            swipe: Swipe::new(),
            dialog: None,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            terminal.draw(|frame| self.draw(frame))?;
            self.process_input()?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame<'_>) {
        self.game.draw(frame);
        if let Some(dialog) = self.dialog {
            let area = center_rect(frame.area(), dialog.size());
            frame.render_widget(dialog, area);
        }
    }

    /// Wait for either the next input event or the next tick, whichever comes
    /// first, and handle it
    fn process_input(&mut self) -> io::Result<()> {
        match self.wait(Instant::now(), poll)? {
            Wakeup::Tick => {
                if let Some(outcome) = self.game.poll_tick(Instant::now()) {
                    self.notify(outcome);
                }
            }
            Wakeup::Input => self.handle_event(&read()?, Instant::now()),
        }
        Ok(())
    }

    /// Decide whether the next thing to handle is a tick or an input event.
    /// A tick that is already due is handled before any queued input.
    fn wait<P>(&self, now: Instant, poll: P) -> io::Result<Wakeup>
    where
        P: FnOnce(Duration) -> io::Result<bool>,
    {
        let Some(wait) = self.game.time_until_tick(now) else {
            return Ok(Wakeup::Input);
        };
        if wait.is_zero() || !poll(wait)? {
            Ok(Wakeup::Tick)
        } else {
            Ok(Wakeup::Input)
        }
    }

    /// Pass the result of a tick on to everything outside the game that
    /// needs to react to it.  The score bar & board are redrawn by the main
    /// loop after every tick.
    fn notify(&mut self, outcome: TickOutcome) {
        if let TickOutcome::Over { score, ending } = outcome {
            self.dialog = Some(GameOverDialog::new(score, ending));
        }
    }

    fn handle_event(&mut self, event: &Event, now: Instant) {
        if let Some(dialog) = self.dialog {
            match dialog.handle_event(event) {
                Some(DialogChoice::Dismiss) => self.dialog = None,
                Some(DialogChoice::Quit) => self.quitting = true,
                None => (),
            }
            return;
        }
        match event {
            Event::Key(_) => {
                let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event)
                else {
                    return;
                };
                match cmd {
                    Command::Quit | Command::Q => self.quitting = true,
                    Command::Start => self.game.start(now),
                    _ => {
                        if let Some(d) = cmd.direction() {
                            let _ = self.game.set_direction(d);
                        }
                    }
                }
            }
            Event::Mouse(ev) => match ev.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    self.swipe.start(i32::from(ev.column), i32::from(ev.row));
                }
                MouseEventKind::Drag(MouseButton::Left) => {
                    if let Some(d) = self.swipe.moved(i32::from(ev.column), i32::from(ev.row)) {
                        let _ = self.game.set_direction(d);
                    }
                }
                _ => (),
            },
            _ => (),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Wakeup {
    Tick,
    Input,
}
