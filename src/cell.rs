//! This module contains the definition of a single board cell and of the
//! [Progress] signal that propagation steps report.

use crate::error::{SudokuError, SudokuResult};
use crate::util::ValueSet;

use std::fmt::{self, Display, Formatter};

/// The result of one propagation step, be it on a single cell, a rule, or an
/// entire board.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Progress {

    /// Indicates that the step deduced nothing new.
    NoChange,

    /// Indicates that the step changed the state of at least one cell, so
    /// running propagation again may deduce more.
    Changed,

    /// Indicates that the step proved the current state unsolvable, that is,
    /// some cell has no remaining candidate or some value has no remaining
    /// host. The board in question is a dead end.
    Contradiction
}

impl Progress {

    /// Combines the results of two propagation steps into the result of the
    /// compound step. `Contradiction` dominates every other result,
    /// `NoChange` is the neutral element, and `Changed` absorbs `NoChange`.
    ///
    /// This operation is associative, so folding any number of step results
    /// is well-defined. It is *not* freely commutative in general reasoning
    /// about propagation: only the dominance of `Contradiction` is
    /// order-independent, so callers must not reorder steps expecting
    /// identical intermediate states.
    pub fn combine(self, other: Progress) -> Progress {
        match self {
            Progress::Contradiction => Progress::Contradiction,
            Progress::NoChange => other,
            Progress::Changed =>
                if other == Progress::Contradiction {
                    Progress::Contradiction
                }
                else {
                    Progress::Changed
                }
        }
    }
}

/// A single cell of a [SudokuBoard](crate::SudokuBoard). A cell knows its
/// coordinates, may hold a value, and tracks the set of candidate values
/// still possible while it is empty.
///
/// A cell can also be *blocked*, which permanently excludes it from play.
/// Blocked cells are used to carve holes into composite board shapes such as
/// the Samurai layout. They never hold a value, never constrain their rules,
/// and are never chosen for branching during search.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SudokuCell {
    x: usize,
    y: usize,
    max_value: usize,
    value: Option<usize>,
    candidates: ValueSet,
    blocked: bool
}

impl SudokuCell {

    pub(crate) fn new(x: usize, y: usize, max_value: usize) -> SudokuCell {
        SudokuCell {
            x,
            y,
            max_value,
            value: None,
            candidates: ValueSet::new(max_value),
            blocked: false
        }
    }

    /// Gets the x-coordinate (column) of this cell.
    pub fn x(&self) -> usize {
        self.x
    }

    /// Gets the y-coordinate (row) of this cell.
    pub fn y(&self) -> usize {
        self.y
    }

    /// Gets the highest value this cell can hold.
    pub fn max_value(&self) -> usize {
        self.max_value
    }

    /// Gets the value held by this cell, or `None` if it is empty.
    pub fn value(&self) -> Option<usize> {
        self.value
    }

    /// Indicates whether this cell holds a value.
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Indicates whether this cell is permanently excluded from play.
    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    /// Gets the set of values that are still considered possible for this
    /// cell. The set is only meaningful after candidates have been
    /// initialized with
    /// [SudokuBoard::reset_candidates](crate::SudokuBoard::reset_candidates)
    /// or a solve.
    pub fn candidates(&self) -> &ValueSet {
        &self.candidates
    }

    /// Indicates whether the given value is still a candidate for this cell.
    pub fn is_value_possible(&self, value: usize) -> bool {
        self.candidates.contains(value)
    }

    /// Gets the number of values still considered possible for this cell.
    /// A blocked cell always reports 1, so it can never look like the most
    /// constrained branching target.
    pub fn possible_count(&self) -> usize {
        if self.blocked {
            1
        }
        else {
            self.candidates.len()
        }
    }

    pub(crate) fn block(&mut self) {
        self.blocked = true;
    }

    pub(crate) fn set_value(&mut self, value: usize) -> SudokuResult<()> {
        if value < 1 || value > self.max_value {
            return Err(SudokuError::InvalidValue);
        }

        self.value = Some(value);
        Ok(())
    }

    pub(crate) fn clear_value(&mut self) {
        self.value = None;
    }

    pub(crate) fn reset_candidates(&mut self) {
        self.candidates = match self.value {
            Some(value) =>
                ValueSet::singleton(self.max_value, value).unwrap(),
            None => ValueSet::full(self.max_value)
        };
    }

    pub(crate) fn fix(&mut self, value: usize) -> Progress {
        self.value = Some(value);
        self.reset_candidates();
        Progress::Changed
    }

    pub(crate) fn eliminate(&mut self, values: &ValueSet) -> Progress {
        if self.blocked {
            return Progress::NoChange;
        }

        self.candidates -= values;

        if self.candidates.is_empty() {
            return Progress::Contradiction;
        }

        if self.candidates.len() == 1 && !self.has_value() {
            let remaining = self.candidates.iter().next().unwrap();
            return self.fix(remaining);
        }

        Progress::NoChange
    }
}

impl Display for SudokuCell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(value) =>
                write!(f, "value {} at ({}, {})", value, self.x, self.y),
            None =>
                write!(f, "{} candidates at ({}, {})", self.candidates.len(),
                    self.x, self.y)
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn combine_contradiction_dominates() {
        let all = [Progress::NoChange, Progress::Changed,
            Progress::Contradiction];

        for &other in all.iter() {
            assert_eq!(Progress::Contradiction,
                Progress::Contradiction.combine(other));
            assert_eq!(Progress::Contradiction,
                other.combine(Progress::Contradiction));
        }
    }

    #[test]
    fn combine_no_change_is_neutral() {
        assert_eq!(Progress::NoChange,
            Progress::NoChange.combine(Progress::NoChange));
        assert_eq!(Progress::Changed,
            Progress::NoChange.combine(Progress::Changed));
        assert_eq!(Progress::Changed,
            Progress::Changed.combine(Progress::NoChange));
    }

    #[test]
    fn combine_changed_absorbs() {
        assert_eq!(Progress::Changed,
            Progress::Changed.combine(Progress::Changed));
    }

    fn cell(max_value: usize) -> SudokuCell {
        let mut cell = SudokuCell::new(0, 0, max_value);
        cell.reset_candidates();
        cell
    }

    #[test]
    fn set_value_rejects_out_of_range() {
        let mut cell = cell(4);
        assert_eq!(Err(SudokuError::InvalidValue), cell.set_value(0));
        assert_eq!(Err(SudokuError::InvalidValue), cell.set_value(5));
        assert_eq!(Ok(()), cell.set_value(4));
        assert_eq!(Some(4), cell.value());
    }

    #[test]
    fn set_value_leaves_candidates_untouched() {
        let mut cell = cell(4);
        cell.set_value(2).unwrap();
        assert_eq!(4, cell.candidates().len());
        cell.reset_candidates();
        assert_eq!(1, cell.candidates().len());
        assert!(cell.is_value_possible(2));
    }

    #[test]
    fn eliminate_reports_no_change() {
        let mut cell = cell(4);
        let removed = ValueSet::singleton(4, 1).unwrap();
        assert_eq!(Progress::NoChange, cell.eliminate(&removed));
        assert_eq!(3, cell.possible_count());
    }

    #[test]
    fn eliminate_fixes_last_candidate() {
        let mut cell = cell(4);
        let mut removed = ValueSet::new(4);
        removed.insert(1).unwrap();
        removed.insert(2).unwrap();
        removed.insert(4).unwrap();
        assert_eq!(Progress::Changed, cell.eliminate(&removed));
        assert_eq!(Some(3), cell.value());
        assert_eq!(1, cell.possible_count());
    }

    #[test]
    fn eliminate_detects_contradiction() {
        let mut cell = cell(2);
        let mut removed = ValueSet::new(2);
        removed.insert(1).unwrap();
        removed.insert(2).unwrap();
        assert_eq!(Progress::Contradiction, cell.eliminate(&removed));
    }

    #[test]
    fn eliminate_ignores_blocked_cells() {
        let mut cell = cell(2);
        cell.block();
        let mut removed = ValueSet::new(2);
        removed.insert(1).unwrap();
        removed.insert(2).unwrap();
        assert_eq!(Progress::NoChange, cell.eliminate(&removed));
        assert_eq!(2, cell.candidates().len());
        assert_eq!(1, cell.possible_count());
    }

    #[test]
    fn fix_resets_candidates() {
        let mut cell = cell(4);
        assert_eq!(Progress::Changed, cell.fix(3));
        assert_eq!(Some(3), cell.value());
        assert_eq!(vec![3], cell.candidates().iter().collect::<Vec<_>>());
    }
}
