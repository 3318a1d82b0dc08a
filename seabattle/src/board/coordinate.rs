// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// The coordinates of a cell in the board.
///
/// Coordinates carry no validation of their own; whether a coordinate is
/// on the board is the [`Board`][crate::board::Board]'s concern, so values
/// outside the grid can be constructed freely and rejected later.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Coordinate {
    /// Vertical position of the cell, 0-indexed from the top.
    pub row: usize,
    /// Horizontal position of the cell, 0-indexed from the left.
    pub col: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `col`.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The coordinate displaced by the given deltas, or `None` if the
    /// displacement would move past the top or left edge.
    pub fn offset(self, drow: isize, dcol: isize) -> Option<Self> {
        Some(Self {
            row: add_delta(self.row, drow)?,
            col: add_delta(self.col, dcol)?,
        })
    }
}

fn add_delta(base: usize, delta: isize) -> Option<usize> {
    if delta < 0 {
        base.checked_sub(-delta as usize)
    } else {
        base.checked_add(delta as usize)
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(row, col)` pair.
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into a `(row, col)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}
