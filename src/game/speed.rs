use std::time::Duration;
use thiserror::Error;

/// Parameters of the speed ramp: the tick interval starts at `initial` and
/// drops by `decrement` each time food is eaten, never going below `floor`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct SpeedRamp {
    initial: Duration,
    decrement: Duration,
    floor: Duration,
}

impl SpeedRamp {
    pub(crate) fn new(
        initial: Duration,
        decrement: Duration,
        floor: Duration,
    ) -> Result<SpeedRamp, SpeedError> {
        if floor.is_zero() {
            Err(SpeedError::ZeroFloor)
        } else if floor > initial {
            Err(SpeedError::FloorAboveInitial { floor, initial })
        } else {
            Ok(SpeedRamp {
                initial,
                decrement,
                floor,
            })
        }
    }

    pub(crate) fn initial(self) -> Duration {
        self.initial
    }

    pub(crate) fn floor(self) -> Duration {
        self.floor
    }

    /// Return the interval that follows `interval`
    pub(crate) fn next(self, interval: Duration) -> Duration {
        interval.saturating_sub(self.decrement).max(self.floor)
    }

    /// Return the interval after `k` pieces of food have been eaten
    pub(crate) fn after(self, k: u32) -> Duration {
        self.initial
            .saturating_sub(self.decrement.saturating_mul(k))
            .max(self.floor)
    }
}

impl Default for SpeedRamp {
    fn default() -> SpeedRamp {
        SpeedRamp {
            initial: crate::consts::INITIAL_TICK_INTERVAL,
            decrement: crate::consts::TICK_DECREMENT,
            floor: crate::consts::TICK_FLOOR,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum SpeedError {
    #[error("minimum tick interval must be nonzero")]
    ZeroFloor,
    #[error("minimum tick interval {floor:?} is greater than initial interval {initial:?}")]
    FloorAboveInitial { floor: Duration, initial: Duration },
}
