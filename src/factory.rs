//! This module contains ready-made board layouts. Each function configures a
//! [SudokuBoard] with the rule set of a well-known puzzle shape; the caller
//! then assigns the given values, for example with
//! [SudokuBoard::add_row](crate::SudokuBoard::add_row), and solves.
//!
//! The layouts offered here are:
//!
//! * [classic]: the ordinary 9x9 grid with 3x3 boxes.
//! * [size_and_boxes]: a grid of any size divided into equally sized boxes.
//! * [classic_with_hyper]: the classic grid with four additional overlapping
//! "hyper" box regions.
//! * [samurai]: five overlapping 9x9 grids arranged in a cross, built as a
//! single 21x21 board whose unused corners are blocked.
//! * [custom_areas]: irregular regions described by a character map.
//!
//! All of these only use the public configuration interface of
//! [SudokuBoard], so they double as examples for defining custom layouts.

use crate::SudokuBoard;
use crate::error::{SudokuParseError, SudokuParseResult, SudokuResult};

const CLASSIC_SIZE: usize = 9;
const BOX_SIZE: usize = 3;
const HYPER_MARGIN: usize = 1;
const SAMURAI_AREAS: usize = 7;

/// Returns an iterator over all coordinates of a `size_x` times `size_y`
/// rectangle, row by row. Useful for assembling the cell lists of custom
/// layouts.
pub fn box_coords(size_x: usize, size_y: usize)
        -> impl Iterator<Item = (usize, usize)> {
    (0..size_y).flat_map(move |y| (0..size_x).map(move |x| (x, y)))
}

/// Creates a board of the given dimensions divided into `boxes_x` times
/// `boxes_y` equally sized box rules, with row and column rules registered
/// automatically.
///
/// # Errors
///
/// * `SudokuError::InvalidDimensions` if a dimension is zero or the boxes do
/// not divide the board evenly.
pub fn size_and_boxes(width: usize, height: usize, boxes_x: usize,
        boxes_y: usize) -> SudokuResult<SudokuBoard> {
    let mut board = SudokuBoard::new_default(width, height)?;
    board.add_box_rules(boxes_x, boxes_y)?;
    Ok(board)
}

/// Creates the classic 9x9 board with 3x3 boxes and row and column rules.
pub fn classic() -> SudokuResult<SudokuBoard> {
    size_and_boxes(CLASSIC_SIZE, CLASSIC_SIZE, BOX_SIZE, BOX_SIZE)
}

/// Creates a classic 9x9 board with four additional 3x3 "hyper" regions,
/// which overlap the ordinary boxes. The hyper regions sit one cell away
/// from the board edges.
pub fn classic_with_hyper() -> SudokuResult<SudokuBoard> {
    let mut board = classic()?;
    let second = HYPER_MARGIN + BOX_SIZE + HYPER_MARGIN;
    let origins = [
        ("Hyper A", HYPER_MARGIN, HYPER_MARGIN),
        ("Hyper B", second, HYPER_MARGIN),
        ("Hyper C", HYPER_MARGIN, second),
        ("Hyper D", second, second)
    ];

    for &(description, origin_x, origin_y) in origins.iter() {
        let cells = box_coords(BOX_SIZE, BOX_SIZE)
            .map(|(x, y)| (origin_x + x, origin_y + y));
        board.create_rule(description, cells)?;
    }

    Ok(board)
}

/// Creates a Samurai board: five overlapping 9x9 grids arranged in a cross,
/// expressed as one 21x21 board with values 1 to 9. The four 3x6 and 6x3
/// corner areas that belong to no grid are blocked. Box rules are created
/// for every 3x3 area outside the holes, and row and column rules for the
/// 9-cell line segments of each grid.
pub fn samurai() -> SudokuResult<SudokuBoard> {
    let size = SAMURAI_AREAS * BOX_SIZE;
    let mut board = SudokuBoard::new(size, size, CLASSIC_SIZE)?;

    // The corner areas between the arms of the cross contain no playable
    // cells.
    for (x, y) in box_coords(BOX_SIZE, BOX_SIZE * 2) {
        board.block(x + CLASSIC_SIZE, y)?;
        board.block(x + CLASSIC_SIZE, y + 2 * CLASSIC_SIZE - BOX_SIZE)?;
    }

    for (x, y) in box_coords(BOX_SIZE * 2, BOX_SIZE) {
        board.block(x, y + CLASSIC_SIZE)?;
        board.block(x + 2 * CLASSIC_SIZE - BOX_SIZE, y + CLASSIC_SIZE)?;
    }

    for (area_x, area_y) in box_coords(SAMURAI_AREAS, SAMURAI_AREAS) {
        let cells: Vec<(usize, usize)> = box_coords(BOX_SIZE, BOX_SIZE)
            .map(|(x, y)| (area_x * BOX_SIZE + x, area_y * BOX_SIZE + y))
            .collect();
        let (first_x, first_y) = cells[0];

        if board.cell(first_x, first_y)?.is_blocked() {
            continue;
        }

        board.create_rule(&format!("Area {}, {}", area_x, area_y), cells)?;
    }

    let lower_offset = CLASSIC_SIZE + BOX_SIZE;
    let middle_offset = BOX_SIZE * 2;

    for i in 0..size {
        board.create_rule(&format!("Column upper {}", i),
            (0..CLASSIC_SIZE).map(|y| (i, y)))?;
        board.create_rule(&format!("Column lower {}", i),
            (0..CLASSIC_SIZE).map(|y| (i, y + lower_offset)))?;
        board.create_rule(&format!("Row left {}", i),
            (0..CLASSIC_SIZE).map(|x| (x, i)))?;
        board.create_rule(&format!("Row right {}", i),
            (0..CLASSIC_SIZE).map(|x| (x + lower_offset, i)))?;

        if i >= middle_offset && i < middle_offset + CLASSIC_SIZE {
            board.create_rule(&format!("Column middle {}", i),
                (0..CLASSIC_SIZE).map(|y| (i, y + middle_offset)))?;
            board.create_rule(&format!("Row middle {}", i),
                (0..CLASSIC_SIZE).map(|x| (x + middle_offset, i)))?;
        }
    }

    Ok(board)
}

/// Creates a board with irregular regions described by a character map. All
/// rows must have the same length; cells marked with the same character form
/// one region rule. Row and column rules are registered automatically when
/// the value alphabet, the larger of the two dimensions, matches a
/// dimension. For example, the map
///
/// ```text
/// AABB
/// AABB
/// CCDD
/// CCDD
/// ```
///
/// reproduces the boxes of a 4x4 board, while maps with jagged regions
/// describe jigsaw puzzles.
///
/// # Errors
///
/// * `SudokuParseError::InvalidDimensions` if the map has no rows or no
/// columns.
/// * `SudokuParseError::WrongRowLength` if the rows have differing lengths.
pub fn custom_areas(areas: &[&str]) -> SudokuParseResult<SudokuBoard> {
    let height = areas.len();
    let width = areas.first().map(|row| row.chars().count()).unwrap_or(0);

    if areas.iter().any(|row| row.chars().count() != width) {
        return Err(SudokuParseError::WrongRowLength);
    }

    let mut board = SudokuBoard::new_default(width, height)
        .map_err(|_| SudokuParseError::InvalidDimensions)?;
    let joined: Vec<char> = areas.iter()
        .flat_map(|row| row.chars())
        .collect();
    let mut regions = Vec::new();

    for &c in &joined {
        if !regions.contains(&c) {
            regions.push(c);
        }
    }

    for region in regions {
        let cells: Vec<(usize, usize)> = joined.iter()
            .enumerate()
            .filter(|&(_, &c)| c == region)
            .map(|(i, _)| (i % width, i / width))
            .collect();
        board.create_rule(&format!("Area {}", region), cells)
            .map_err(|_| SudokuParseError::InvalidDimensions)?;
    }

    Ok(board)
}
