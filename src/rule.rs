//! This module contains the definition of [SudokuRule], the constraint group
//! that all solving logic operates on.
//!
//! A rule is nothing more than a named set of cells that must hold pairwise
//! distinct values. Rows, columns, boxes, hyper regions, and the segments of
//! composite boards are all expressed as rules, which is what allows the
//! engine to solve irregular layouts without knowing anything about their
//! geometry. A cell may belong to any number of rules, so overlapping
//! regions need no special treatment.
//!
//! Rules reference cells by coordinates rather than holding them directly.
//! This makes copying a board during search a plain clone: the rule set of
//! the copy automatically refers to the cells of the copy.

use crate::cell::{Progress, SudokuCell};
use crate::index;
use crate::util::ValueSet;

use serde::{Deserialize, Serialize};

use std::fmt::{self, Display, Formatter};

/// A group of cells that must hold pairwise distinct values once assigned.
/// Rules are created through
/// [SudokuBoard::create_rule](crate::SudokuBoard::create_rule) and are
/// immutable afterwards. The description is only used for diagnostics.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SudokuRule {
    description: String,
    cells: Vec<(usize, usize)>
}

impl SudokuRule {

    pub(crate) fn new(description: &str, cells: Vec<(usize, usize)>)
            -> SudokuRule {
        let mut deduplicated = Vec::with_capacity(cells.len());

        for cell in cells {
            if !deduplicated.contains(&cell) {
                deduplicated.push(cell);
            }
        }

        SudokuRule {
            description: String::from(description),
            cells: deduplicated
        }
    }

    /// Gets the description of this rule, e.g. `"Row 3"` or `"Hyper A"`.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Gets the coordinates of the cells governed by this rule, in the order
    /// in which they were registered. The order is relevant for tie-breaking
    /// during search, so it is kept stable.
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    fn assigned_values(&self, cells: &[SudokuCell], width: usize) -> ValueSet {
        let max_value = self.cells.first()
            .map(|&(x, y)| cells[index(x, y, width)].max_value())
            .unwrap_or(0);
        let mut assigned = ValueSet::new(max_value);

        for &(x, y) in &self.cells {
            if let Some(value) = cells[index(x, y, width)].value() {
                assigned.insert(value).unwrap();
            }
        }

        assigned
    }

    pub(crate) fn check_valid(&self, cells: &[SudokuCell], width: usize)
            -> bool {
        let mut seen: Option<ValueSet> = None;

        for &(x, y) in &self.cells {
            let cell = &cells[index(x, y, width)];

            if let Some(value) = cell.value() {
                let seen = seen.get_or_insert_with(||
                    ValueSet::new(cell.max_value()));

                if seen.contains(value) {
                    return false;
                }

                seen.insert(value).unwrap();
            }
        }

        true
    }

    pub(crate) fn check_complete(&self, cells: &[SudokuCell], width: usize)
            -> bool {
        let all_assigned = self.cells.iter().all(|&(x, y)| {
            let cell = &cells[index(x, y, width)];
            cell.has_value() || cell.is_blocked()
        });
        all_assigned && self.check_valid(cells, width)
    }

    pub(crate) fn propagate_eliminations(&self, cells: &mut [SudokuCell],
            width: usize) -> Progress {
        let assigned = self.assigned_values(cells, width);
        let mut result = Progress::NoChange;

        for &(x, y) in &self.cells {
            let cell = &mut cells[index(x, y, width)];

            if cell.has_value() {
                continue;
            }

            result = result.combine(cell.eliminate(&assigned));
        }

        result
    }

    pub(crate) fn propagate_forced_placements(&self, cells: &mut [SudokuCell],
            width: usize) -> Progress {
        let assigned = self.assigned_values(cells, width);
        let mut result = Progress::NoChange;

        for value in 1..=self.cells.len() {
            if assigned.contains(value) {
                continue;
            }

            let mut host = None;
            let mut host_count = 0;

            for &(x, y) in &self.cells {
                let cell = &cells[index(x, y, width)];

                if cell.has_value() || !cell.is_value_possible(value) {
                    continue;
                }

                host_count += 1;
                host = Some((x, y));
            }

            if host_count == 0 {
                // No cell can hold this value anymore, so the rule can never
                // be completed.
                return Progress::Contradiction;
            }

            if host_count == 1 {
                let (x, y) = host.unwrap();
                let cell = &mut cells[index(x, y, width)];

                // A blocked cell absorbs host positions so that rules
                // crossing the holes of a composite board stay solvable, but
                // it must never receive a value.
                if !cell.is_blocked() {
                    result = result.combine(cell.fix(value));
                }
            }
        }

        result
    }

    pub(crate) fn solve_step(&self, cells: &mut [SudokuCell], width: usize)
            -> Progress {
        let eliminations = self.propagate_eliminations(cells, width);
        let placements = self.propagate_forced_placements(cells, width);
        eliminations.combine(placements)
    }
}

impl Display for SudokuRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}
