//! This module contains the error and result definitions used in this crate.
//!
//! Note that an unsolvable board is *not* an error. Unsatisfiability is an
//! expected outcome of solving and is communicated by an empty iterator from
//! [SudokuBoard::solve](crate::SudokuBoard::solve). The errors in this module
//! only cover malformed construction and malformed input.

/// Miscellaneous errors that can occur when constructing or manipulating
/// boards. Errors raised while reading a board from text are covered by
/// [SudokuParseError] instead.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that the dimensions specified for a created board are
    /// invalid. This is the case if the width, height, or maximum value is
    /// zero.
    InvalidDimensions,

    /// Indicates that some value is invalid for the board in question. This
    /// is the case if it is less than 1 or greater than the board's maximum
    /// value, or if a board whose maximum value exceeds 9 is rendered as
    /// text.
    InvalidValue,

    /// Indicates that the specified coordinates lie outside the board in
    /// question, that is, the x-coordinate is at least the width or the
    /// y-coordinate is at least the height.
    OutOfBounds,

    /// An error that is raised when a board shall be filled with a complete
    /// solution, but no assignment satisfies its rules.
    UnsatisfiableBoard
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when building a board from
/// rows of text.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SudokuParseError {

    /// Indicates that a row of text does not contain exactly one character
    /// per cell, that is, its length differs from the board width.
    WrongRowLength,

    /// Indicates that more rows were added to a board than it has cell rows.
    TooManyRows,

    /// Indicates that a character is neither a digit, nor `'.'` for an empty
    /// cell, nor `'/'` for a blocked cell.
    InvalidCharacter,

    /// Indicates that a digit is not a valid value for the board, that is, it
    /// is 0 or greater than the board's maximum value.
    InvalidValue,

    /// Indicates that the dimensions deduced for a board built from text are
    /// invalid (a zero width or height).
    InvalidDimensions
}

/// Syntactic sugar for `Result<V, SudokuParseError>`.
pub type SudokuParseResult<V> = Result<V, SudokuParseError>;
