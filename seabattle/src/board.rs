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

//! Types that make up the game board.

use std::collections::HashSet;
use std::fmt;

use crate::ships::Ship;

pub use self::{
    coordinate::Coordinate,
    errors::{CannotPlaceReason, CannotShootReason},
    grid::Cell,
};

use self::grid::Grid;

mod coordinate;
mod errors;
mod grid;

/// Width and height of every board.
pub const BOARD_SIZE: usize = 6;

/// Outcome of a successfully-fired shot.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// Nothing was hit.
    Miss,
    /// A ship was hit but not sunk.
    Hit,
    /// A ship was hit and it was sunk.
    Sunk,
}

impl ShotOutcome {
    /// True if the shooter keeps the turn. Only a hit that did not sink
    /// the ship lets the same player fire again.
    pub fn repeats_turn(self) -> bool {
        match self {
            ShotOutcome::Hit => true,
            ShotOutcome::Miss | ShotOutcome::Sunk => false,
        }
    }
}

/// Represents a single player's board: their ships, the render state of
/// every cell, and the unified set of reserved coordinates.
///
/// The reserved set does double duty, exactly as the rules require.
/// During fleet placement it holds ship cells plus the contour around
/// every placed ship, which is what enforces the contact-free rule. Once
/// placement is finished the caller clears it with
/// [`clear_reservations`][Board::clear_reservations] and the same set
/// becomes the shot history, blocking repeat fire.
pub struct Board {
    /// Render state of every cell.
    grid: Grid,
    /// Unified set of reserved coordinates.
    occupied: HashSet<Coordinate>,
    /// Ships on the board, in placement order.
    ships: Vec<Ship>,
    /// Number of ships with no remaining segments.
    destroyed: usize,
    /// Whether the rendering disguises un-hit ship cells.
    hidden: bool,
}

impl Board {
    /// Construct an empty board. Boards start revealed; use
    /// [`set_hidden`][Board::set_hidden] for the opponent's view.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(BOARD_SIZE),
            occupied: HashSet::new(),
            ships: Vec::new(),
            destroyed: 0,
            hidden: false,
        }
    }

    /// Width and height of the board.
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Whether the rendering disguises un-hit ship cells as empty water.
    pub fn hidden(&self) -> bool {
        self.hidden
    }

    /// Control whether un-hit ship cells render disguised.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Check if the given coordinate is on the board.
    pub fn in_bounds(&self, coord: Coordinate) -> bool {
        coord.row < BOARD_SIZE && coord.col < BOARD_SIZE
    }

    /// The render state of the cell at the given coordinate, or `None` if
    /// the coordinate is out of bounds.
    pub fn cell(&self, coord: Coordinate) -> Option<Cell> {
        self.grid.get(coord).copied()
    }

    /// The ships on the board, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships destroyed so far.
    pub fn destroyed(&self) -> usize {
        self.destroyed
    }

    /// True once every ship on the board has been destroyed.
    pub fn is_defeated(&self) -> bool {
        self.destroyed == self.ships.len()
    }

    /// Attempts to add a ship to the board.
    ///
    /// Every dot of the ship is validated to be in bounds and outside the
    /// reserved set before any cell is touched, so a failed placement
    /// leaves the board exactly as it was. On success the ship's cells
    /// are marked and reserved, and the contour around the ship is
    /// reserved as well, which keeps later ships from touching this one.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), CannotPlaceReason> {
        let dots = ship.dots();
        for dot in &dots {
            if !self.in_bounds(*dot) {
                return Err(CannotPlaceReason::InsufficientSpace);
            }
            if self.occupied.contains(dot) {
                return Err(CannotPlaceReason::AlreadyOccupied);
            }
        }
        for dot in &dots {
            self.grid[*dot] = Cell::Ship;
            self.occupied.insert(*dot);
        }
        self.ships.push(ship);
        self.contour(&dots, false);
        Ok(())
    }

    /// Resolve a shot at the given coordinate.
    ///
    /// The coordinate is reserved so it can never be fired at twice. A
    /// shot that reduces a ship to zero remaining segments reveals the
    /// contour around the wreck, which also blocks those cells from
    /// future fire since no ship can occupy them.
    pub fn shoot(&mut self, coord: Coordinate) -> Result<ShotOutcome, CannotShootReason> {
        if !self.in_bounds(coord) {
            return Err(CannotShootReason::OutOfBounds);
        }
        if !self.occupied.insert(coord) {
            return Err(CannotShootReason::AlreadyShot);
        }
        for i in 0..self.ships.len() {
            if self.ships[i].occupies(coord) {
                self.ships[i].record_hit();
                self.grid[coord] = Cell::Hit;
                if self.ships[i].is_sunk() {
                    self.destroyed += 1;
                    let dots = self.ships[i].dots();
                    self.contour(&dots, true);
                    return Ok(ShotOutcome::Sunk);
                }
                return Ok(ShotOutcome::Hit);
            }
        }
        self.grid[coord] = Cell::Miss;
        Ok(ShotOutcome::Miss)
    }

    /// Drop all reservations, leaving ships and cell states in place.
    ///
    /// Call once fleet placement is complete: the placement-time
    /// reservations are discarded and the same set starts over as the
    /// shot history. Placements made after this point are no longer
    /// checked against the ships already on the board.
    pub fn clear_reservations(&mut self) {
        self.occupied.clear();
    }

    /// Reserve every in-bounds cell within one step (including diagonals)
    /// of the given dots. In reveal mode the newly reserved cells are
    /// also marked with the buffer dot.
    fn contour(&mut self, dots: &[Coordinate], reveal: bool) {
        for dot in dots {
            for drow in -1..=1 {
                for dcol in -1..=1 {
                    let neighbor = match dot.offset(drow, dcol) {
                        Some(n) if self.in_bounds(n) => n,
                        _ => continue,
                    };
                    if self.occupied.insert(neighbor) && reveal {
                        self.grid[neighbor] = Cell::Buffer;
                    }
                }
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Renders the text grid: a 1-indexed column header, then one line
    /// per row prefixed with its 1-indexed number. Hit, miss and buffer
    /// markers always render; ship cells honor the hidden flag.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, " ")?;
        for col in 1..=BOARD_SIZE {
            write!(f, " | {}", col)?;
        }
        write!(f, " |")?;
        for row in 0..BOARD_SIZE {
            write!(f, "\n{}", row + 1)?;
            for col in 0..BOARD_SIZE {
                let cell = self.grid[Coordinate::new(row, col)];
                write!(f, " | {}", cell.symbol(self.hidden))?;
            }
            write!(f, " |")?;
        }
        Ok(())
    }
}
