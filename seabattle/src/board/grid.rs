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

//! Defines the cell states of the board and their storage.

use std::ops::{Index, IndexMut};

use crate::board::Coordinate;

/// Render state of a single cell in a player's grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Cell {
    /// Nothing known about the cell.
    Empty,
    /// An un-hit ship segment.
    Ship,
    /// A shot that found only open water.
    Miss,
    /// A shot that hit a ship segment.
    Hit,
    /// Revealed contour of a destroyed ship.
    Buffer,
}

impl Cell {
    /// The symbol used for this cell in the text rendering. A hidden board
    /// disguises un-hit ship segments as empty water.
    pub fn symbol(self, hidden: bool) -> &'static str {
        match self {
            Cell::Empty => "0",
            Cell::Ship if hidden => "0",
            Cell::Ship => "■",
            Cell::Miss => "T",
            Cell::Hit => "X",
            Cell::Buffer => ".",
        }
    }
}

/// Square storage for the cells of a single board.
#[derive(Debug)]
pub(super) struct Grid {
    /// Width and height of the grid.
    size: usize,
    /// Cells in row-major order.
    cells: Box<[Cell]>,
}

impl Grid {
    pub(super) fn new(size: usize) -> Self {
        let cells = vec![Cell::Empty; size * size].into_boxed_slice();
        Self { size, cells }
    }

    /// Convert a coordinate to a linear index within the grid.
    /// Returns `None` if the coordinate is out of range.
    fn try_linearize(&self, coord: Coordinate) -> Option<usize> {
        if coord.row < self.size && coord.col < self.size {
            Some(coord.row * self.size + coord.col)
        } else {
            None
        }
    }

    /// Get the cell at the given [`Coordinate`].
    pub(super) fn get(&self, coord: Coordinate) -> Option<&Cell> {
        self.try_linearize(coord).and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(super) fn get_mut(&mut self, coord: Coordinate) -> Option<&mut Cell> {
        self.try_linearize(coord).and_then(move |i| self.cells.get_mut(i))
    }
}

impl Index<Coordinate> for Grid {
    type Output = Cell;

    fn index(&self, coord: Coordinate) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl IndexMut<Coordinate> for Grid {
    fn index_mut(&mut self, coord: Coordinate) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}
