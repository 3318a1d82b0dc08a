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

//! Types used for defining ships and tracking their damage.

use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::board::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Distribution<Orientation> for Standard {
    /// Draw one of the two orientations with equal probability.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.gen() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A straight line of cells anchored at the bow, with the number of
/// undamaged segments tracked as the ship takes hits.
///
/// A ship belongs to exactly one board; the board it was added to owns it
/// and is the only thing that records hits against it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    /// Anchor cell from which the rest of the ship extends.
    bow: Coordinate,
    /// Number of cells the ship covers.
    length: usize,
    /// Axis the ship extends along.
    orientation: Orientation,
    /// Segments not yet hit.
    remaining: usize,
}

impl Ship {
    /// Construct a ship with the specified bow, length and orientation.
    /// Panics if `length` is 0.
    pub fn new(bow: Coordinate, length: usize, orientation: Orientation) -> Self {
        assert!(length > 0);
        Self {
            bow,
            length,
            orientation,
            remaining: length,
        }
    }

    /// The anchor cell of the ship.
    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    /// Number of cells the ship covers.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Axis the ship extends along.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The ordered cells the ship covers, bow first, stepping one column
    /// per cell when horizontal or one row per cell when vertical.
    pub fn dots(&self) -> Vec<Coordinate> {
        (0..self.length)
            .map(|i| match self.orientation {
                Orientation::Horizontal => Coordinate::new(self.bow.row, self.bow.col + i),
                Orientation::Vertical => Coordinate::new(self.bow.row + i, self.bow.col),
            })
            .collect()
    }

    /// True if the ship covers the given cell.
    pub fn occupies(&self, coord: Coordinate) -> bool {
        self.dots().contains(&coord)
    }

    /// Segments not yet hit.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// True once every segment has been hit.
    pub fn is_sunk(&self) -> bool {
        self.remaining == 0
    }

    /// Record a confirmed hit on one of the ship's cells.
    pub(crate) fn record_hit(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dots_extend_along_the_orientation_axis() {
        let ship = Ship::new(Coordinate::new(1, 2), 3, Orientation::Horizontal);
        assert_eq!(
            ship.dots(),
            vec![
                Coordinate::new(1, 2),
                Coordinate::new(1, 3),
                Coordinate::new(1, 4),
            ],
        );

        let ship = Ship::new(Coordinate::new(1, 2), 3, Orientation::Vertical);
        assert_eq!(
            ship.dots(),
            vec![
                Coordinate::new(1, 2),
                Coordinate::new(2, 2),
                Coordinate::new(3, 2),
            ],
        );
    }

    #[test]
    fn occupies_exactly_its_dots() {
        let ship = Ship::new(Coordinate::new(0, 0), 2, Orientation::Horizontal);
        assert!(ship.occupies(Coordinate::new(0, 0)));
        assert!(ship.occupies(Coordinate::new(0, 1)));
        assert!(!ship.occupies(Coordinate::new(0, 2)));
        assert!(!ship.occupies(Coordinate::new(1, 0)));
    }

    #[test]
    fn sinks_after_one_hit_per_segment() {
        let mut ship = Ship::new(Coordinate::new(0, 0), 3, Orientation::Vertical);
        assert_eq!(ship.remaining(), 3);
        ship.record_hit();
        ship.record_hit();
        assert!(!ship.is_sunk());
        ship.record_hit();
        assert!(ship.is_sunk());
    }
}
