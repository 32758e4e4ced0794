use crate::game::Direction;

/// Classifies a press-and-drag gesture into a single direction change.
///
/// A press records an anchor point; the first movement after it is compared
/// against the anchor along both axes, and the anchor is then forgotten, so
/// each gesture yields at most one direction.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Swipe {
    anchor: Option<(i32, i32)>,
}

impl Swipe {
    pub(crate) fn new() -> Swipe {
        Swipe::default()
    }

    /// Record the start of a gesture at `(x, y)`
    pub(crate) fn start(&mut self, x: i32, y: i32) {
        self.anchor = Some((x, y));
    }

    /// Classify a movement to `(x, y)` against the recorded anchor.  The
    /// larger-magnitude axis wins, with ties going to the vertical axis.
    /// Returns `None` if there is no anchor or there was no displacement
    /// along the winning axis.
    pub(crate) fn moved(&mut self, x: i32, y: i32) -> Option<Direction> {
        let (x0, y0) = self.anchor.take()?;
        let dx = x.saturating_sub(x0);
        let dy = y.saturating_sub(y0);
        if dx.unsigned_abs() > dy.unsigned_abs() {
            match dx.signum() {
                -1 => Some(Direction::Left),
                1 => Some(Direction::Right),
                _ => None,
            }
        } else {
            match dy.signum() {
                -1 => Some(Direction::Up),
                1 => Some(Direction::Down),
                _ => None,
            }
        }
    }
}
