//! # Selection State
//!
//! The single mutable cell of the showcase: which record is on screen.
//! Two writers touch it, the rotation tick ([`SelectionState::advance`]) and a
//! direct indicator jump ([`SelectionState::select`]). Neither knows about the
//! other; in particular a manual jump leaves the timer's cadence alone.

use crate::ShowcaseError;

/// Index of the record currently displayed.
///
/// Invariant: `0 <= current < len` for the store it was validated against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    current: usize,
}

impl SelectionState {
    /// Fresh selection pointing at the first record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Move to the next record, wrapping to 0 after the last one.
    ///
    /// # Example
    /// ```
    /// use showcase_lib::selection::SelectionState;
    ///
    /// let mut state = SelectionState::new();
    /// state.advance(2).unwrap();
    /// assert_eq!(state.current(), 1);
    /// state.advance(2).unwrap();
    /// assert_eq!(state.current(), 0);
    /// ```
    pub fn advance(&mut self, len: usize) -> Result<usize, ShowcaseError> {
        if len == 0 {
            return Err(ShowcaseError::EmptyStore);
        }
        self.current = (self.current + 1) % len;
        Ok(self.current)
    }

    /// Jump straight to `index`.
    ///
    /// Out-of-range input is rejected rather than clamped.
    pub fn select(&mut self, index: usize, len: usize) -> Result<usize, ShowcaseError> {
        if index >= len {
            return Err(ShowcaseError::IndexOutOfRange { index, len });
        }
        self.current = index;
        Ok(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(SelectionState::new().current(), 0);
    }

    #[test]
    fn test_wrap_law() {
        for len in 1..=5 {
            for k in 1..=3 {
                let mut state = SelectionState::new();
                for _ in 0..len * k {
                    state.advance(len).unwrap();
                    assert!(state.current() < len, "invariant broken for len {len}");
                }
                assert_eq!(state.current(), 0, "len {len}, k {k} should wrap to 0");
            }
        }
    }

    #[test]
    fn test_advance_empty_store() {
        let mut state = SelectionState::new();
        assert_eq!(state.advance(0), Err(ShowcaseError::EmptyStore));
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn test_select_sets_index() {
        let mut state = SelectionState::new();
        assert_eq!(state.select(2, 3), Ok(2));
        assert_eq!(state.current(), 2);
    }

    #[test]
    fn test_select_out_of_range_leaves_state() {
        let mut state = SelectionState::new();
        state.select(1, 3).unwrap();
        assert_eq!(
            state.select(3, 3),
            Err(ShowcaseError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(state.current(), 1);
    }

    #[test]
    fn test_advance_after_select_continues_from_selection() {
        let mut state = SelectionState::new();
        state.select(1, 3).unwrap();
        assert_eq!(state.advance(3), Ok(2));
        assert_eq!(state.advance(3), Ok(0));
    }
}
