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

//! Pairs two boards into a game and tracks the alternating turns.

use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::board::{Board, CannotShootReason, Coordinate, ShotOutcome};

/// Identifies one of the two players in a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    P1,
    P2,
}

impl Side {
    /// Get the opponent of this side.
    pub fn opponent(self) -> Self {
        match self {
            Side::P1 => Side::P2,
            Side::P2 => Side::P1,
        }
    }

    /// Index of this side's board within the game.
    fn index(self) -> usize {
        match self {
            Side::P1 => 0,
            Side::P2 => 1,
        }
    }
}

impl Distribution<Side> for Standard {
    /// Draw one of the two sides with equal probability.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Side {
        if rng.gen() {
            Side::P1
        } else {
            Side::P2
        }
    }
}

/// Holds both players' boards and tracks whose turn it is.
///
/// The game owns the boards outright; callers address them by [`Side`]
/// and all mutation during play goes through [`fire`][Game::fire]. This
/// keeps the player/board relationship a pair of lookups instead of a
/// web of shared references.
pub struct Game {
    /// The two boards, indexed by side.
    boards: [Board; 2],
    /// The side whose turn it is.
    current: Side,
}

impl Game {
    /// Build a game from the two players' boards. [`Side::P1`] owns the
    /// first board and takes the first turn.
    pub fn new(first: Board, second: Board) -> Self {
        Self {
            boards: [first, second],
            current: Side::P1,
        }
    }

    /// The side whose turn it currently is.
    pub fn current(&self) -> Side {
        self.current
    }

    /// The board owned by the given side.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    /// Fire at the current side's opponent.
    ///
    /// On success the turn passes to the opponent unless the outcome
    /// keeps it with the shooter. A failed shot leaves the turn where it
    /// was so the shooter can pick a new target.
    pub fn fire(&mut self, target: Coordinate) -> Result<ShotOutcome, CannotShootReason> {
        let outcome = self.boards[self.current.opponent().index()].shoot(target)?;
        if !outcome.repeats_turn() {
            self.current = self.current.opponent();
        }
        Ok(outcome)
    }

    /// The winning side, if either board is fully defeated.
    pub fn winner(&self) -> Option<Side> {
        if self.board(Side::P1).is_defeated() {
            Some(Side::P2)
        } else if self.board(Side::P2).is_defeated() {
            Some(Side::P1)
        } else {
            None
        }
    }

    /// True once either board is fully defeated.
    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ships::{Orientation, Ship};

    /// A board with a single ship of the given length laid horizontally
    /// from (0, 0), ready for play.
    fn board_with_ship(length: usize) -> Board {
        let mut board = Board::new();
        board
            .add_ship(Ship::new(Coordinate::new(0, 0), length, Orientation::Horizontal))
            .unwrap();
        board.clear_reservations();
        board
    }

    #[test]
    fn miss_passes_the_turn() {
        let mut game = Game::new(board_with_ship(2), board_with_ship(2));
        assert_eq!(game.current(), Side::P1);
        assert_eq!(game.fire(Coordinate::new(5, 5)).unwrap(), ShotOutcome::Miss);
        assert_eq!(game.current(), Side::P2);
    }

    #[test]
    fn hit_keeps_the_turn_until_the_ship_sinks() {
        let mut game = Game::new(board_with_ship(2), board_with_ship(2));
        assert_eq!(game.fire(Coordinate::new(0, 0)).unwrap(), ShotOutcome::Hit);
        assert_eq!(game.current(), Side::P1);
        assert_eq!(game.fire(Coordinate::new(0, 1)).unwrap(), ShotOutcome::Sunk);
        assert_eq!(game.current(), Side::P2);
    }

    #[test]
    fn failed_shots_leave_the_turn_unchanged() {
        let mut game = Game::new(board_with_ship(2), board_with_ship(2));
        assert_eq!(
            game.fire(Coordinate::new(6, 0)).unwrap_err(),
            CannotShootReason::OutOfBounds,
        );
        assert_eq!(game.current(), Side::P1);

        assert_eq!(game.fire(Coordinate::new(5, 5)).unwrap(), ShotOutcome::Miss);
        assert_eq!(game.current(), Side::P2);
        // P2 fires at P1's board, where (5,5) is still fresh.
        assert_eq!(game.fire(Coordinate::new(5, 5)).unwrap(), ShotOutcome::Miss);
        assert_eq!(game.current(), Side::P1);
        // Now (5,5) on P2's board is spent.
        assert_eq!(
            game.fire(Coordinate::new(5, 5)).unwrap_err(),
            CannotShootReason::AlreadyShot,
        );
        assert_eq!(game.current(), Side::P1);
    }

    #[test]
    fn sinking_the_last_ship_decides_the_winner() {
        let mut game = Game::new(board_with_ship(1), board_with_ship(1));
        assert_eq!(game.winner(), None);
        assert!(!game.is_over());

        // P1 sinks P2's only ship.
        assert_eq!(game.fire(Coordinate::new(0, 0)).unwrap(), ShotOutcome::Sunk);
        assert_eq!(game.winner(), Some(Side::P1));
        assert!(game.is_over());
    }
}
