// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate implements a rule-based Sudoku engine. Instead of hardcoding
//! the classic 9x9 shape, a board is a rectangular grid of cells together
//! with an arbitrary collection of *rules*, where each rule is a group of
//! cells that must hold pairwise distinct values. Rows, columns, boxes,
//! hyper regions, irregular areas, and the overlapping segments of composite
//! boards such as Samurai Sudoku are all just rules, so the same propagation
//! and search machinery solves all of them. Key features:
//!
//! * Boards of any width, height, and value alphabet, with support for
//! blocked cells that carve holes into composite shapes
//! * Ready-made layouts for classic, hyper, Samurai, and custom region
//! boards in the [factory] module
//! * Lazy enumeration of all solutions through constraint propagation and
//! depth-first search
//! * Optional human-style deduction techniques in the [strategy] module
//! * Random board generation and puzzle reduction in the [generator] module
//!
//! # Building and solving a board
//!
//! Boards are usually created through the [factory] module and filled from
//! rows of text, where each character is a digit, `'.'` for an empty cell,
//! or `'/'` for a blocked cell.
//!
//! ```
//! use sudoku_rules::factory;
//!
//! let mut board = factory::size_and_boxes(4, 4, 2, 2).unwrap();
//! board.add_row("1243").unwrap();
//! board.add_row("3421").unwrap();
//! board.add_row("431.").unwrap();
//! board.add_row("....").unwrap();
//!
//! let solutions: Vec<_> = board.solve().collect();
//!
//! assert_eq!(1, solutions.len());
//! assert_eq!("2134", solutions[0].to_row_strings().unwrap()[3]);
//! ```
//!
//! [SudokuBoard::solve] yields solutions lazily, so a caller that only wants
//! to know whether a puzzle is solvable, or only wants a single solution,
//! can stop after the first element and no further search work is done.
//! A puzzle without solutions simply yields an empty iterator; that is an
//! expected outcome, not an error.
//!
//! # Custom rules
//!
//! Rules can be registered directly for layouts the [factory] module does
//! not cover. The board below is a 2x2 grid whose rows and columns must
//! contain the values 1 and 2.
//!
//! ```
//! use sudoku_rules::SudokuBoard;
//!
//! let mut board = SudokuBoard::new(2, 2, 2).unwrap();
//! board.set_value(0, 0, 1).unwrap();
//!
//! let solution = board.solve().next().unwrap();
//!
//! assert_eq!(vec!["12", "21"], solution.to_row_strings().unwrap());
//! ```
//!
//! Line rules for rows and columns were registered automatically here, since
//! the maximum value of the board equals its dimensions. Further groups are
//! added with [SudokuBoard::create_rule], as the [factory] module does for
//! boxes and hyper regions.

pub mod cell;
pub mod error;
pub mod factory;
pub mod generator;
pub mod rule;
pub mod strategy;
pub mod util;


use crate::cell::{Progress, SudokuCell};
use crate::error::{
    SudokuError,
    SudokuParseError,
    SudokuParseResult,
    SudokuResult
};
use crate::rule::SudokuRule;
use crate::util::ValueSet;

use std::fmt::{self, Display, Formatter};

pub(crate) fn index(x: usize, y: usize, width: usize) -> usize {
    y * width + x
}

/// A board is a rectangular grid of [SudokuCell]s together with the set of
/// [SudokuRule]s that govern them. It is the central type of this crate:
/// layouts configure it, callers assign the given values, and
/// [SudokuBoard::solve] enumerates every assignment that satisfies all
/// rules.
///
/// The width, height, and maximum value are independent, so irregular and
/// composite shapes can be expressed. When the maximum value equals the
/// width or the height, rules for all rows and columns are registered
/// automatically at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct SudokuBoard {
    width: usize,
    height: usize,
    max_value: usize,
    cells: Vec<SudokuCell>,
    rules: Vec<SudokuRule>,
    next_row: usize
}

impl SudokuBoard {

    /// Creates a new, empty board with the given dimensions and value
    /// alphabet.
    ///
    /// # Arguments
    ///
    /// * `width`: The number of cell columns. Must be greater than 0.
    /// * `height`: The number of cell rows. Must be greater than 0.
    /// * `max_value`: The highest value a cell can hold; cells hold values
    /// from 1 to this number. It does not need to equal the width or the
    /// height, which is what permits composite shapes such as the 21x21
    /// Samurai board with values 1 to 9. Must be greater than 0.
    ///
    /// # Errors
    ///
    /// If `width`, `height`, or `max_value` is zero. In that case,
    /// `SudokuError::InvalidDimensions` is returned.
    pub fn new(width: usize, height: usize, max_value: usize)
            -> SudokuResult<SudokuBoard> {
        if width == 0 || height == 0 || max_value == 0 {
            return Err(SudokuError::InvalidDimensions);
        }

        let mut cells = Vec::with_capacity(width * height);

        for y in 0..height {
            for x in 0..width {
                cells.push(SudokuCell::new(x, y, max_value));
            }
        }

        let mut board = SudokuBoard {
            width,
            height,
            max_value,
            cells,
            rules: Vec::new(),
            next_row: 0
        };

        if max_value == width || max_value == height {
            board.setup_line_rules();
        }

        Ok(board)
    }

    /// Creates a new, empty board whose maximum value is the larger of the
    /// given dimensions. See [SudokuBoard::new] for details.
    ///
    /// # Errors
    ///
    /// If `width` or `height` is zero. In that case,
    /// `SudokuError::InvalidDimensions` is returned.
    pub fn new_default(width: usize, height: usize)
            -> SudokuResult<SudokuBoard> {
        SudokuBoard::new(width, height, width.max(height))
    }

    fn setup_line_rules(&mut self) {
        for x in 0..self.width {
            let cells = (0..self.height).map(|y| (x, y)).collect();
            self.rules.push(SudokuRule::new(&format!("Column {}", x), cells));
        }

        for y in 0..self.height {
            let cells = (0..self.width).map(|x| (x, y)).collect();
            self.rules.push(SudokuRule::new(&format!("Row {}", y), cells));
        }
    }

    /// Gets the number of cell columns of this board.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Gets the number of cell rows of this board.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Gets the highest value a cell of this board can hold.
    pub fn max_value(&self) -> usize {
        self.max_value
    }

    fn verify_coordinates(&self, x: usize, y: usize) -> SudokuResult<()> {
        if x >= self.width || y >= self.height {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(())
        }
    }

    /// Gets a reference to the cell at the given coordinates.
    ///
    /// # Errors
    ///
    /// If `x` is at least the width or `y` is at least the height. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn cell(&self, x: usize, y: usize) -> SudokuResult<&SudokuCell> {
        self.verify_coordinates(x, y)?;
        Ok(&self.cells[index(x, y, self.width)])
    }

    /// Sets the value of the cell at the given coordinates. Candidate sets
    /// are not touched by this operation; they are rebuilt from the assigned
    /// values when a solve starts.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` if the coordinates lie outside the
    /// board.
    /// * `SudokuError::InvalidValue` if `value` is 0 or greater than the
    /// maximum value.
    pub fn set_value(&mut self, x: usize, y: usize, value: usize)
            -> SudokuResult<()> {
        self.verify_coordinates(x, y)?;
        let width = self.width;
        self.cells[index(x, y, width)].set_value(value)
    }

    /// Clears the value of the cell at the given coordinates. If the cell is
    /// already empty, it is left that way.
    ///
    /// # Errors
    ///
    /// If the coordinates lie outside the board. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn clear_value(&mut self, x: usize, y: usize) -> SudokuResult<()> {
        self.verify_coordinates(x, y)?;
        let width = self.width;
        self.cells[index(x, y, width)].clear_value();
        Ok(())
    }

    /// Permanently excludes the cell at the given coordinates from play.
    /// Blocked cells never hold values and never constrain their rules; they
    /// are used to carve holes into composite board shapes.
    ///
    /// # Errors
    ///
    /// If the coordinates lie outside the board. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn block(&mut self, x: usize, y: usize) -> SudokuResult<()> {
        self.verify_coordinates(x, y)?;
        let width = self.width;
        self.cells[index(x, y, width)].block();
        Ok(())
    }

    /// Registers a new rule governing the cells at the given coordinates.
    /// Duplicate coordinates are dropped; the remaining order is kept, since
    /// it determines tie-breaking during search.
    ///
    /// # Arguments
    ///
    /// * `description`: A label for the rule used in diagnostics, e.g.
    /// `"Box 1, 2"`.
    /// * `cells`: The coordinates of the governed cells.
    ///
    /// # Errors
    ///
    /// If any of the coordinates lie outside the board. In that case,
    /// `SudokuError::OutOfBounds` is returned and the rule is not
    /// registered.
    pub fn create_rule(&mut self, description: &str,
            cells: impl IntoIterator<Item = (usize, usize)>)
            -> SudokuResult<()> {
        let cells: Vec<(usize, usize)> = cells.into_iter().collect();

        for &(x, y) in &cells {
            self.verify_coordinates(x, y)?;
        }

        self.rules.push(SudokuRule::new(description, cells));
        Ok(())
    }

    /// Registers box rules dividing the board into `boxes_x` times `boxes_y`
    /// equally sized rectangles.
    ///
    /// # Errors
    ///
    /// If `boxes_x` does not divide the width or `boxes_y` does not divide
    /// the height evenly, or either is zero. In that case,
    /// `SudokuError::InvalidDimensions` is returned.
    pub fn add_box_rules(&mut self, boxes_x: usize, boxes_y: usize)
            -> SudokuResult<()> {
        if boxes_x == 0 || boxes_y == 0 || self.width % boxes_x != 0 ||
                self.height % boxes_y != 0 {
            return Err(SudokuError::InvalidDimensions);
        }

        let size_x = self.width / boxes_x;
        let size_y = self.height / boxes_y;

        for box_y in 0..boxes_y {
            for box_x in 0..boxes_x {
                let mut cells = Vec::with_capacity(size_x * size_y);

                for y in 0..size_y {
                    for x in 0..size_x {
                        cells.push((box_x * size_x + x, box_y * size_y + y));
                    }
                }

                self.rules.push(SudokuRule::new(
                    &format!("Box {}, {}", box_x, box_y), cells));
            }
        }

        Ok(())
    }

    /// Gets the rules registered on this board, in registration order.
    pub fn rules(&self) -> &[SudokuRule] {
        &self.rules
    }

    /// Assigns one row of cells from text, top to bottom: the first call
    /// fills the first row, the second call the second row, and so on. Each
    /// character stands for one cell: a digit from 1 to 9 assigns that
    /// value, `'.'` leaves the cell empty, and `'/'` blocks it.
    ///
    /// # Errors
    ///
    /// * `SudokuParseError::TooManyRows` if all rows have been filled
    /// already.
    /// * `SudokuParseError::WrongRowLength` if the text does not contain
    /// exactly one character per cell.
    /// * `SudokuParseError::InvalidCharacter` if a character is neither a
    /// digit nor `'.'` nor `'/'`.
    /// * `SudokuParseError::InvalidValue` if a digit is 0 or greater than
    /// the maximum value.
    pub fn add_row(&mut self, row: &str) -> SudokuParseResult<()> {
        if self.next_row >= self.height {
            return Err(SudokuParseError::TooManyRows);
        }

        if row.chars().count() != self.width {
            return Err(SudokuParseError::WrongRowLength);
        }

        let y = self.next_row;
        let width = self.width;

        for (x, c) in row.chars().enumerate() {
            match c {
                '.' => { },
                '/' => self.cells[index(x, y, width)].block(),
                '0'..='9' => {
                    let value = c.to_digit(10).unwrap() as usize;
                    self.cells[index(x, y, width)].set_value(value)
                        .map_err(|_| SudokuParseError::InvalidValue)?;
                },
                _ => return Err(SudokuParseError::InvalidCharacter)
            }
        }

        self.next_row += 1;
        Ok(())
    }

    /// Renders the board as one string per cell row, using the same
    /// character mapping as [SudokuBoard::add_row]: digits for values, `'.'`
    /// for empty cells, and `'/'` for blocked cells.
    ///
    /// # Errors
    ///
    /// If the maximum value of this board is greater than 9, since larger
    /// values have no single-character representation. In that case,
    /// `SudokuError::InvalidValue` is returned.
    pub fn to_row_strings(&self) -> SudokuResult<Vec<String>> {
        if self.max_value > 9 {
            return Err(SudokuError::InvalidValue);
        }

        let mut rows = Vec::with_capacity(self.height);

        for y in 0..self.height {
            let mut row = String::with_capacity(self.width);

            for x in 0..self.width {
                let cell = &self.cells[index(x, y, self.width)];
                let c = if cell.is_blocked() {
                    '/'
                }
                else if let Some(value) = cell.value() {
                    (b'0' + value as u8) as char
                }
                else {
                    '.'
                };
                row.push(c);
            }

            rows.push(row);
        }

        Ok(rows)
    }

    /// Indicates whether the current assignment violates no rule. Empty and
    /// blocked cells are ignored, so a board with open cells can be valid.
    pub fn check_valid(&self) -> bool {
        self.rules.iter().all(|rule| rule.check_valid(&self.cells, self.width))
    }

    /// Indicates whether every rule of this board is complete, that is, all
    /// of its cells are assigned or blocked and no rule is violated.
    pub fn check_complete(&self) -> bool {
        self.rules.iter()
            .all(|rule| rule.check_complete(&self.cells, self.width))
    }

    /// Rebuilds the candidate set of every cell: an empty cell is given the
    /// full value alphabet, an assigned cell only its value. This
    /// establishes the clean starting point from which propagation deduces,
    /// independent of any prior solve.
    pub fn reset_candidates(&mut self) {
        for cell in &mut self.cells {
            cell.reset_candidates();
        }
    }

    /// Removes the given values from the candidate set of the cell at the
    /// given coordinates, with the usual cell semantics: a blocked cell is
    /// unaffected, a cell whose candidates drop to a single value is fixed
    /// to it, and a cell whose candidates run empty reports a
    /// [Progress::Contradiction].
    ///
    /// This is the hook through which additional deduction techniques, such
    /// as those in the [strategy] module, feed their conclusions back into
    /// the board.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` if the coordinates lie outside the
    /// board.
    /// * `SudokuError::InvalidValue` if the bounds of `values` differ from
    /// the value alphabet of this board.
    pub fn eliminate(&mut self, x: usize, y: usize, values: &ValueSet)
            -> SudokuResult<Progress> {
        self.verify_coordinates(x, y)?;

        if values.max() != self.max_value {
            return Err(SudokuError::InvalidValue);
        }

        let width = self.width;
        Ok(self.cells[index(x, y, width)].eliminate(values))
    }

    /// Runs one propagation round: first every rule is validated, and any
    /// violation makes the whole round report a contradiction immediately.
    /// Otherwise every rule eliminates the values already assigned within it
    /// from its open cells and fixes values that have only one remaining
    /// host. The results of all rules are folded with [Progress::combine].
    ///
    /// Candidates must have been initialized with
    /// [SudokuBoard::reset_candidates] before the first round.
    pub fn simplify(&mut self) -> Progress {
        if !self.check_valid() {
            return Progress::Contradiction;
        }

        let mut result = Progress::NoChange;

        for rule in &self.rules {
            result = result.combine(rule.solve_step(&mut self.cells,
                self.width));
        }

        result
    }

    /// Runs [SudokuBoard::simplify] rounds until one of them deduces nothing
    /// new or proves a contradiction, and returns that final result. At a
    /// [Progress::NoChange] fixed point, deductive propagation is exhausted
    /// and further progress requires branching.
    pub fn solve_to_fixed_point(&mut self) -> Progress {
        let mut progress = Progress::Changed;

        while progress == Progress::Changed {
            progress = self.simplify();
        }

        progress
    }

    /// Finds the cell to branch on: among all open cells, one with the
    /// smallest number of remaining candidates greater than 1. Cells are
    /// enumerated rule by rule in registration order, and the first cell
    /// with the smallest count wins, so the choice is deterministic. Blocked
    /// cells report a single candidate and are therefore never chosen.
    pub(crate) fn branching_cell(&self) -> Option<(usize, usize)> {
        let mut best: Option<((usize, usize), usize)> = None;

        for rule in &self.rules {
            for &(x, y) in rule.cells() {
                let count =
                    self.cells[index(x, y, self.width)].possible_count();

                if count <= 1 {
                    continue;
                }

                let better = match best {
                    None => true,
                    Some((_, best_count)) => count < best_count
                };

                if better {
                    best = Some(((x, y), count));
                }
            }
        }

        best.map(|(coordinates, _)| coordinates)
    }

    pub(crate) fn fix_cell(&mut self, x: usize, y: usize, value: usize) {
        let width = self.width;
        self.cells[index(x, y, width)].fix(value);
    }

    /// Solves this board, yielding every assignment that satisfies all rules
    /// as an independent, fully assigned board. The iterator is lazy: search
    /// only runs while elements are pulled, so taking the first solution of
    /// a puzzle does not pay for an exhaustive enumeration, and an
    /// unsatisfiable board simply yields nothing.
    ///
    /// The board itself is not modified; each call starts a fresh search
    /// from the currently assigned values.
    pub fn solve(&self) -> Solutions {
        Solutions {
            pending: vec![self.clone()]
        }
    }
}

impl Display for SudokuBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let rows = self.to_row_strings().map_err(|_| fmt::Error)?;

        for (y, row) in rows.iter().enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }

            f.write_str(row)?;
        }

        Ok(())
    }
}

/// A lazy iterator over the solutions of a [SudokuBoard], created by
/// [SudokuBoard::solve]. Each element is an independent, fully assigned,
/// rule-valid board.
///
/// The search is depth-first: propagation runs to a fixed point, then the
/// open cell with the fewest candidates is fixed to each of its candidate
/// values in ascending order, each time on an independent copy of the board.
/// Dropping the iterator abandons all remaining search work.
pub struct Solutions {
    pending: Vec<SudokuBoard>
}

impl Iterator for Solutions {
    type Item = SudokuBoard;

    fn next(&mut self) -> Option<SudokuBoard> {
        while let Some(mut board) = self.pending.pop() {
            board.reset_candidates();

            if board.solve_to_fixed_point() == Progress::Contradiction {
                continue;
            }

            let (x, y) = match board.branching_cell() {
                None => return Some(board),
                Some(coordinates) => coordinates
            };

            let candidates: Vec<usize> =
                board.cells[index(x, y, board.width)].candidates()
                    .iter()
                    .collect();

            // Children are pushed in descending value order so that the
            // stack explores candidates in ascending order.
            for &value in candidates.iter().rev() {
                let mut copy = board.clone();
                copy.fix_cell(x, y, value);
                self.pending.push(copy);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn new_rejects_zero_dimensions() {
        assert_eq!(Err(SudokuError::InvalidDimensions),
            SudokuBoard::new(0, 4, 4).map(|_| ()));
        assert_eq!(Err(SudokuError::InvalidDimensions),
            SudokuBoard::new(4, 0, 4).map(|_| ()));
        assert_eq!(Err(SudokuError::InvalidDimensions),
            SudokuBoard::new(4, 4, 0).map(|_| ()));
    }

    #[test]
    fn line_rules_registered_when_alphabet_matches() {
        let board = SudokuBoard::new(4, 4, 4).unwrap();
        assert_eq!(8, board.rules().len());

        let board = SudokuBoard::new(4, 4, 9).unwrap();
        assert!(board.rules().is_empty());
    }

    #[test]
    fn new_default_uses_larger_dimension() {
        let board = SudokuBoard::new_default(6, 4).unwrap();
        assert_eq!(6, board.max_value());
    }

    #[test]
    fn cell_access_checks_bounds() {
        let board = SudokuBoard::new(4, 4, 4).unwrap();
        assert!(board.cell(3, 3).is_ok());
        assert_eq!(Err(SudokuError::OutOfBounds),
            board.cell(4, 0).map(|_| ()));
        assert_eq!(Err(SudokuError::OutOfBounds),
            board.cell(0, 4).map(|_| ()));
    }

    #[test]
    fn set_value_checks_range() {
        let mut board = SudokuBoard::new(4, 4, 4).unwrap();
        assert_eq!(Ok(()), board.set_value(1, 2, 4));
        assert_eq!(Some(4), board.cell(1, 2).unwrap().value());
        assert_eq!(Err(SudokuError::InvalidValue), board.set_value(1, 2, 5));
        assert_eq!(Err(SudokuError::OutOfBounds), board.set_value(4, 2, 1));
    }

    #[test]
    fn create_rule_checks_bounds() {
        let mut board = SudokuBoard::new(4, 4, 4).unwrap();
        assert_eq!(Ok(()),
            board.create_rule("Diagonal", (0..4).map(|i| (i, i))));
        assert_eq!(9, board.rules().len());
        assert_eq!(Err(SudokuError::OutOfBounds),
            board.create_rule("Broken", vec![(0, 0), (4, 4)]));
        assert_eq!(9, board.rules().len());
    }

    #[test]
    fn add_box_rules_checks_divisibility() {
        let mut board = SudokuBoard::new(4, 4, 4).unwrap();
        assert_eq!(Err(SudokuError::InvalidDimensions),
            board.add_box_rules(3, 2));
        assert_eq!(Ok(()), board.add_box_rules(2, 2));
        assert_eq!(12, board.rules().len());
    }

    #[test]
    fn add_row_assigns_values_and_blocks() {
        let mut board = SudokuBoard::new(4, 4, 4).unwrap();
        board.add_row("1.2/").unwrap();
        assert_eq!(Some(1), board.cell(0, 0).unwrap().value());
        assert_eq!(None, board.cell(1, 0).unwrap().value());
        assert_eq!(Some(2), board.cell(2, 0).unwrap().value());
        assert!(board.cell(3, 0).unwrap().is_blocked());
    }

    #[test]
    fn add_row_rejects_wrong_length() {
        let mut board = SudokuBoard::new(4, 4, 4).unwrap();
        assert_eq!(Err(SudokuParseError::WrongRowLength),
            board.add_row("123"));
        assert_eq!(Err(SudokuParseError::WrongRowLength),
            board.add_row("12345"));
    }

    #[test]
    fn add_row_rejects_invalid_characters() {
        let mut board = SudokuBoard::new(4, 4, 4).unwrap();
        assert_eq!(Err(SudokuParseError::InvalidCharacter),
            board.add_row("1x.."));
        assert_eq!(Err(SudokuParseError::InvalidValue),
            board.add_row("5..."));
        assert_eq!(Err(SudokuParseError::InvalidValue),
            board.add_row("0..."));
    }

    #[test]
    fn add_row_rejects_excess_rows() {
        let mut board = SudokuBoard::new(2, 2, 2).unwrap();
        board.add_row("..").unwrap();
        board.add_row("..").unwrap();
        assert_eq!(Err(SudokuParseError::TooManyRows), board.add_row(".."));
    }

    #[test]
    fn row_strings_round_trip() {
        let mut board = SudokuBoard::new(4, 4, 4).unwrap();
        board.add_row("1.2/").unwrap();
        board.add_row("....").unwrap();
        board.add_row("/421").unwrap();
        board.add_row("3...").unwrap();
        assert_eq!(vec!["1.2/", "....", "/421", "3..."],
            board.to_row_strings().unwrap());
    }

    #[test]
    fn display_renders_rows() {
        let mut board = SudokuBoard::new(2, 2, 2).unwrap();
        board.add_row("1.").unwrap();
        assert_eq!("1.\n..", format!("{}", board));
    }

    #[test]
    fn check_valid_detects_rule_violation() {
        let mut board = SudokuBoard::new(4, 4, 4).unwrap();
        board.set_value(0, 0, 3).unwrap();
        assert!(board.check_valid());
        board.set_value(3, 0, 3).unwrap();
        assert!(!board.check_valid());
    }

    #[test]
    fn simplify_reports_contradiction_on_invalid_board() {
        let mut board = SudokuBoard::new(4, 4, 4).unwrap();
        board.set_value(0, 0, 3).unwrap();
        board.set_value(3, 0, 3).unwrap();
        board.reset_candidates();
        assert_eq!(Progress::Contradiction, board.simplify());
    }

    #[test]
    fn fixed_point_is_stable() {
        let mut board = SudokuBoard::new(4, 4, 4).unwrap();
        board.add_box_rules(2, 2).unwrap();
        board.set_value(0, 0, 1).unwrap();
        board.set_value(1, 1, 2).unwrap();
        board.reset_candidates();
        assert_eq!(Progress::NoChange, board.solve_to_fixed_point());
        assert_eq!(Progress::NoChange, board.simplify());
    }

    #[test]
    fn solve_does_not_change_the_board() {
        let mut board = SudokuBoard::new(2, 2, 2).unwrap();
        board.set_value(0, 0, 1).unwrap();
        board.solve().next().unwrap();
        assert_eq!(None, board.cell(1, 1).unwrap().value());
        assert_eq!(Some(1), board.cell(0, 0).unwrap().value());
    }

    #[test]
    fn solve_enumerates_all_solutions_in_order() {
        // A 2x2 board with row and column rules has exactly two solutions,
        // distinguished by the top-left value.
        let board = SudokuBoard::new(2, 2, 2).unwrap();
        let solutions: Vec<Vec<String>> = board.solve()
            .map(|solution| solution.to_row_strings().unwrap())
            .collect();
        assert_eq!(vec![
            vec![String::from("12"), String::from("21")],
            vec![String::from("21"), String::from("12")]
        ], solutions);
    }

    #[test]
    fn solve_is_restartable() {
        let board = SudokuBoard::new(2, 2, 2).unwrap();
        assert_eq!(2, board.solve().count());
        assert_eq!(2, board.solve().count());
    }
}
