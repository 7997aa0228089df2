//! Single-slot frame latch.
//!
//! The latch holds at most one frame. While it holds one, every further
//! offer is rejected without touching the held frame; the consumer frees the
//! slot with [`FrameLatch::take`] or [`FrameLatch::reset`]. A rejection is
//! ordinary flow control, not a failure.

#[derive(Clone, Debug)]
enum LatchState<F> {
    Empty,
    Held(F),
}

#[derive(Clone, Debug)]
pub struct FrameLatch<F> {
    state: LatchState<F>,
}

impl<F> Default for FrameLatch<F> {
    fn default() -> Self {
        Self {
            state: LatchState::Empty,
        }
    }
}

impl<F> FrameLatch<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `frame` if the latch is empty. Returns whether it was accepted;
    /// a rejected frame is dropped.
    pub fn offer(&mut self, frame: F) -> bool {
        match self.state {
            LatchState::Held(_) => false,
            LatchState::Empty => {
                self.state = LatchState::Held(frame);
                true
            }
        }
    }

    pub fn is_held(&self) -> bool {
        matches!(self.state, LatchState::Held(_))
    }

    pub fn frame(&self) -> Option<&F> {
        match &self.state {
            LatchState::Held(frame) => Some(frame),
            LatchState::Empty => None,
        }
    }

    /// Hand the held frame to the caller and reopen the latch.
    pub fn take(&mut self) -> Option<F> {
        match std::mem::replace(&mut self.state, LatchState::Empty) {
            LatchState::Held(frame) => Some(frame),
            LatchState::Empty => None,
        }
    }

    /// Drop the held frame, if any, and reopen the latch.
    pub fn reset(&mut self) {
        self.state = LatchState::Empty;
    }
}
