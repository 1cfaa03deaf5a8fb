//! Cursor bookkeeping for the two-pointer manifest walk.

use std::cmp::Ordering;

/// Which manifests have had their last record consumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanState {
    /// Both manifests still have records to visit
    #[default]
    GoAhead,
    /// The first manifest is exhausted, the second is not
    FirstFinished,
    /// The second manifest is exhausted, the first is not
    SecondFinished,
    BothFinished,
}

impl ScanState {
    const fn from_flags(first: bool, second: bool) -> Self {
        match (first, second) {
            (false, false) => Self::GoAhead,
            (true, false) => Self::FirstFinished,
            (false, true) => Self::SecondFinished,
            (true, true) => Self::BothFinished,
        }
    }

    #[must_use]
    pub const fn first_finished(self) -> bool {
        matches!(self, Self::FirstFinished | Self::BothFinished)
    }

    #[must_use]
    pub const fn second_finished(self) -> bool {
        matches!(self, Self::SecondFinished | Self::BothFinished)
    }

    #[must_use]
    pub const fn finish_first(self) -> Self {
        Self::from_flags(true, self.second_finished())
    }

    #[must_use]
    pub const fn finish_second(self) -> Self {
        Self::from_flags(self.first_finished(), true)
    }

    /// Name comparison outcome imposed by exhaustion.
    ///
    /// Once one side is finished every remaining record of the other side is
    /// unmatched, so the step is forced toward the side that still has data.
    #[must_use]
    pub const fn forced_outcome(self) -> Option<Ordering> {
        match self {
            Self::FirstFinished => Some(Ordering::Greater),
            Self::SecondFinished => Some(Ordering::Less),
            Self::GoAhead | Self::BothFinished => None,
        }
    }
}

/// Current scan position in each manifest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursors {
    pub first: usize,
    pub second: usize,
}

impl Cursors {
    /// Consume the records the step's `outcome` used and return the new state.
    ///
    /// `Less` or `Equal` consumes the first side's record, `Greater` or
    /// `Equal` the second's. Consuming a side's last record finishes that side
    /// instead of moving its cursor, so cursors never leave `0..len`.
    pub fn advance(
        &mut self,
        outcome: Ordering,
        first_len: usize,
        second_len: usize,
        state: ScanState,
    ) -> ScanState {
        let mut state = state;
        if outcome != Ordering::Greater {
            if self.first + 1 < first_len {
                self.first += 1;
            } else {
                state = state.finish_first();
            }
        }
        if outcome != Ordering::Less {
            if self.second + 1 < second_len {
                self.second += 1;
            } else {
                state = state.finish_second();
            }
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_flags() {
        assert_eq!(ScanState::GoAhead.finish_first(), ScanState::FirstFinished);
        assert_eq!(ScanState::GoAhead.finish_second(), ScanState::SecondFinished);
        assert_eq!(
            ScanState::FirstFinished.finish_second(),
            ScanState::BothFinished
        );
        assert_eq!(
            ScanState::SecondFinished.finish_first(),
            ScanState::BothFinished
        );
        assert_eq!(
            ScanState::FirstFinished.finish_first(),
            ScanState::FirstFinished
        );
    }

    #[test]
    fn test_forced_outcome() {
        assert_eq!(ScanState::GoAhead.forced_outcome(), None);
        assert_eq!(
            ScanState::FirstFinished.forced_outcome(),
            Some(Ordering::Greater)
        );
        assert_eq!(
            ScanState::SecondFinished.forced_outcome(),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn test_equal_step_moves_both() {
        let mut cursors = Cursors::default();
        let state = cursors.advance(Ordering::Equal, 3, 3, ScanState::GoAhead);
        assert_eq!(state, ScanState::GoAhead);
        assert_eq!(cursors, Cursors { first: 1, second: 1 });
    }

    #[test]
    fn test_mismatch_moves_smaller_side_only() {
        let mut cursors = Cursors::default();
        cursors.advance(Ordering::Less, 3, 3, ScanState::GoAhead);
        assert_eq!(cursors, Cursors { first: 1, second: 0 });

        cursors.advance(Ordering::Greater, 3, 3, ScanState::GoAhead);
        assert_eq!(cursors, Cursors { first: 1, second: 1 });
    }

    #[test]
    fn test_last_record_finishes_side() {
        let mut cursors = Cursors { first: 0, second: 1 };
        let state = cursors.advance(Ordering::Less, 1, 3, ScanState::GoAhead);
        assert_eq!(state, ScanState::FirstFinished);
        assert_eq!(cursors, Cursors { first: 0, second: 1 });

        let state = cursors.advance(Ordering::Greater, 1, 3, state);
        assert_eq!(state, ScanState::FirstFinished);
        assert_eq!(cursors.second, 2);

        let state = cursors.advance(Ordering::Greater, 1, 3, state);
        assert_eq!(state, ScanState::BothFinished);
        assert_eq!(cursors.second, 2);
    }

    #[test]
    fn test_unconsumed_last_record_keeps_side_open() {
        // Both cursors on their last record, first name sorts lower: only the
        // first side is consumed, the second still owes its record.
        let mut cursors = Cursors::default();
        let state = cursors.advance(Ordering::Less, 1, 1, ScanState::GoAhead);
        assert_eq!(state, ScanState::FirstFinished);
    }
}
