//! This module contains optional deduction techniques that can be layered on
//! top of the solving engine. They mirror techniques a human solver would
//! use, operating purely on the candidate sets of the board's cells.
//!
//! The engine itself is complete without them: its propagation finds naked
//! and hidden singles, and branching covers everything else. Strategies can
//! shrink candidate sets further before branching, which reduces the number
//! of branches a hard puzzle needs. They never guess, so everything they
//! eliminate is a genuine deduction.
//!
//! A [Strategy] receives a mutable board whose candidates have been
//! initialized, for example by
//! [SudokuBoard::reset_candidates](crate::SudokuBoard::reset_candidates)
//! followed by
//! [SudokuBoard::solve_to_fixed_point](crate::SudokuBoard::solve_to_fixed_point),
//! and reports its findings as a [Progress]. [solve_to_fixed_point_with]
//! alternates engine propagation and a strategy until neither deduces
//! anything new.
//!
//! ```
//! use sudoku_rules::cell::Progress;
//! use sudoku_rules::factory;
//! use sudoku_rules::strategy::{NakedTupleStrategy, Strategy};
//!
//! let mut board = factory::classic().unwrap();
//! board.reset_candidates();
//! board.solve_to_fixed_point();
//!
//! // An empty board holds no tuples, so nothing is deduced.
//! assert_eq!(Progress::NoChange, NakedTupleStrategy::new(4).apply(&mut board));
//! ```

use crate::SudokuBoard;
use crate::cell::Progress;
use crate::util::ValueSet;

/// A deduction technique operating on the candidate sets of a board. See the
/// [module documentation](crate::strategy) for the contract.
pub trait Strategy {

    /// Applies this strategy to the given board, whose candidates must have
    /// been initialized. Returns [Progress::Changed] if any candidate was
    /// eliminated or any cell fixed, [Progress::Contradiction] if the board
    /// was proven unsolvable, and [Progress::NoChange] otherwise.
    fn apply(&self, board: &mut SudokuBoard) -> Progress;
}

// Cell elimination only reports a change when it fixes the cell, since the
// engine re-derives plain candidate removals from the assigned values every
// round. Strategies cannot rely on that: their deductions come from the
// candidate sets themselves, so a removal must count as progress for the
// fixed-point alternation to pick it up.
fn eliminate_tracked(board: &mut SudokuBoard, x: usize, y: usize,
        values: &ValueSet) -> Progress {
    let before = board.cell(x, y).unwrap().candidates().len();
    let result = board.eliminate(x, y, values).unwrap();
    let after = board.cell(x, y).unwrap().candidates().len();

    if before != after {
        result.combine(Progress::Changed)
    }
    else {
        result
    }
}

#[derive(Clone)]
struct Tuple {
    cells: Vec<(usize, usize)>,
    values: ValueSet
}

impl Tuple {
    fn new(max_value: usize) -> Tuple {
        Tuple {
            cells: Vec::new(),
            values: ValueSet::new(max_value)
        }
    }

    fn add_cell(&mut self, x: usize, y: usize, candidates: &ValueSet) {
        self.cells.push((x, y));
        self.values |= candidates;
    }

    fn is_full(&self) -> bool {
        self.values.len() >= 2 && self.values.len() <= self.cells.len()
    }
}

fn find_tuples_rec(members: &[((usize, usize), ValueSet)], max_size: usize,
        mut current: Tuple, accumulator: &mut Vec<Tuple>) {
    if current.values.len() > max_size {
        return;
    }

    if current.is_full() {
        accumulator.push(current);
        return;
    }

    if let Some(((x, y), candidates)) = members.first() {
        let rest = &members[1..];

        find_tuples_rec(rest, max_size, current.clone(), accumulator);
        current.add_cell(*x, *y, candidates);
        find_tuples_rec(rest, max_size, current, accumulator);
    }
}

/// A [Strategy] which searches every rule for naked tuples: groups of 2 or
/// more open cells that together have no more candidate values than there
/// are cells in the group. Those values must all be used up by the group, so
/// they can be eliminated from every other cell of the rule.
///
/// As an example, if two cells of a row both have exactly the candidates 3
/// and 4, then 3 and 4 must go into those two cells in some order, and no
/// other cell of the row can hold either. The same argument covers pairs,
/// triples, quadruples, and larger tuples alike.
#[derive(Clone)]
pub struct NakedTupleStrategy {
    max_size: usize
}

impl NakedTupleStrategy {

    /// Creates a new naked tuple strategy that considers tuples of at most
    /// `max_size` cells. Larger bounds find more eliminations but take
    /// exponentially longer on large rules; 4 is a common choice.
    pub fn new(max_size: usize) -> NakedTupleStrategy {
        NakedTupleStrategy {
            max_size
        }
    }
}

impl Strategy for NakedTupleStrategy {

    fn apply(&self, board: &mut SudokuBoard) -> Progress {
        let mut result = Progress::NoChange;

        for rule_index in 0..board.rules().len() {
            let members: Vec<((usize, usize), ValueSet)> =
                board.rules()[rule_index].cells()
                    .iter()
                    .filter_map(|&(x, y)| {
                        let cell = board.cell(x, y).unwrap();

                        if cell.has_value() || cell.is_blocked() {
                            None
                        }
                        else {
                            Some(((x, y), cell.candidates().clone()))
                        }
                    })
                    .collect();
            let mut tuples = Vec::new();
            find_tuples_rec(&members, self.max_size,
                Tuple::new(board.max_value()), &mut tuples);

            for tuple in tuples {
                for &((x, y), _) in &members {
                    if tuple.cells.contains(&(x, y)) {
                        continue;
                    }

                    result = result.combine(
                        eliminate_tracked(board, x, y, &tuple.values));
                }
            }
        }

        result
    }
}

/// A [Strategy] which searches for locked candidates: if all cells that can
/// still host some value within one rule also belong to a second rule, then
/// that value is used up inside the overlap, and it can be eliminated from
/// the cells of the second rule outside the first.
///
/// In classic layouts this covers the pointing and claiming interactions
/// between boxes and lines. Because it reasons over arbitrary rule pairs, it
/// applies just as well to hyper regions, jigsaw areas, and the grid
/// segments of composite boards.
#[derive(Clone)]
pub struct IntersectionStrategy;

impl Strategy for IntersectionStrategy {

    fn apply(&self, board: &mut SudokuBoard) -> Progress {
        let mut result = Progress::NoChange;

        for first_index in 0..board.rules().len() {
            let first_cells: Vec<(usize, usize)> =
                board.rules()[first_index].cells().to_vec();

            // The reasoning below requires that the rule must eventually
            // contain every value, which does not hold for rules crossing
            // the holes of a composite board.
            let any_blocked = first_cells.iter()
                .any(|&(x, y)| board.cell(x, y).unwrap().is_blocked());

            if any_blocked {
                continue;
            }

            for value in 1..=first_cells.len() {
                let hosts: Vec<(usize, usize)> = first_cells.iter()
                    .filter(|&&(x, y)| {
                        let cell = board.cell(x, y).unwrap();
                        !cell.has_value() && cell.is_value_possible(value)
                    })
                    .cloned()
                    .collect();
                let assigned = first_cells.iter()
                    .any(|&(x, y)|
                        board.cell(x, y).unwrap().value() == Some(value));

                if hosts.is_empty() || assigned {
                    continue;
                }

                for second_index in 0..board.rules().len() {
                    if second_index == first_index {
                        continue;
                    }

                    let second = &board.rules()[second_index];

                    if !hosts.iter().all(|host| second.cells().contains(host)) {
                        continue;
                    }

                    let targets: Vec<(usize, usize)> = second.cells()
                        .iter()
                        .filter(|&&(x, y)| {
                            let cell = board.cell(x, y).unwrap();
                            !first_cells.contains(&(x, y)) &&
                                !cell.has_value() && !cell.is_blocked() &&
                                cell.is_value_possible(value)
                        })
                        .cloned()
                        .collect();

                    if targets.is_empty() {
                        continue;
                    }

                    let eliminated =
                        ValueSet::singleton(board.max_value(), value).unwrap();

                    for (x, y) in targets {
                        result = result.combine(
                            eliminate_tracked(board, x, y, &eliminated));
                    }
                }
            }
        }

        result
    }
}

/// A [Strategy] which applies a list of strategies in order, combining their
/// results. This allows treating a whole catalogue of techniques as one
/// strategy.
pub struct CompositeStrategy {
    strategies: Vec<Box<dyn Strategy>>
}

impl CompositeStrategy {

    /// Creates a new composite strategy without any members.
    pub fn new() -> CompositeStrategy {
        CompositeStrategy {
            strategies: Vec::new()
        }
    }

    /// Adds a strategy to this composite. Strategies are applied in
    /// insertion order.
    pub fn add(&mut self, strategy: impl Strategy + 'static) {
        self.strategies.push(Box::new(strategy));
    }
}

impl Default for CompositeStrategy {
    fn default() -> CompositeStrategy {
        CompositeStrategy::new()
    }
}

impl Strategy for CompositeStrategy {

    fn apply(&self, board: &mut SudokuBoard) -> Progress {
        let mut result = Progress::NoChange;

        for strategy in &self.strategies {
            result = result.combine(strategy.apply(board));
        }

        result
    }
}

/// Alternates engine propagation and the given strategy until neither
/// deduces anything new or a contradiction is found, and returns the final
/// result, which is either [Progress::NoChange] or [Progress::Contradiction].
///
/// The board's candidates must have been initialized with
/// [SudokuBoard::reset_candidates](crate::SudokuBoard::reset_candidates).
pub fn solve_to_fixed_point_with(board: &mut SudokuBoard,
        strategy: &impl Strategy) -> Progress {
    loop {
        if board.solve_to_fixed_point() == Progress::Contradiction {
            return Progress::Contradiction;
        }

        match strategy.apply(board) {
            Progress::NoChange => return Progress::NoChange,
            Progress::Contradiction => return Progress::Contradiction,
            Progress::Changed => { }
        }
    }
}
