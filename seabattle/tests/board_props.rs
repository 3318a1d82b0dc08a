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

use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use seabattle::{
    random_board, Board, CannotShootReason, Coordinate, Orientation, Ship, ShotOutcome,
    BOARD_SIZE, FLEET_LENGTHS,
};

/// Chebyshev distance between two cells; touching cells are at most 1
/// apart, including diagonally.
fn chebyshev(a: Coordinate, b: Coordinate) -> usize {
    let drow = (a.row as isize - b.row as isize).abs() as usize;
    let dcol = (a.col as isize - b.col as isize).abs() as usize;
    drow.max(dcol)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn repeat_shots_always_fail(seed in any::<u64>(), row in 0..BOARD_SIZE, col in 0..BOARD_SIZE) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = random_board(&mut rng);
        let coord = Coordinate::new(row, col);
        board.shoot(coord).unwrap();
        prop_assert_eq!(
            board.shoot(coord).unwrap_err(),
            CannotShootReason::AlreadyShot,
        );
    }

    #[test]
    fn generated_fleets_never_touch(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let board = random_board(&mut rng);
        let ships = board.ships();
        prop_assert_eq!(ships.len(), FLEET_LENGTHS.len());
        for (i, a) in ships.iter().enumerate() {
            for b in &ships[i + 1..] {
                for da in a.dots() {
                    for db in b.dots() {
                        prop_assert!(chebyshev(da, db) >= 2);
                    }
                }
            }
        }
    }

    #[test]
    fn single_cell_placements_succeed_exactly_when_clear(
        first_row in 0..BOARD_SIZE,
        first_col in 0..BOARD_SIZE,
        second_row in 0..BOARD_SIZE,
        second_col in 0..BOARD_SIZE,
    ) {
        let mut board = Board::new();
        let first = Coordinate::new(first_row, first_col);
        let second = Coordinate::new(second_row, second_col);
        board
            .add_ship(Ship::new(first, 1, Orientation::Horizontal))
            .unwrap();
        // A second one-cell ship is accepted iff it is clear of the
        // first ship and its contour.
        match board.add_ship(Ship::new(second, 1, Orientation::Vertical)) {
            Ok(()) => prop_assert!(chebyshev(first, second) >= 2),
            Err(_) => prop_assert!(chebyshev(first, second) <= 1),
        }
    }

    #[test]
    fn shooting_every_cell_defeats_the_board(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = random_board(&mut rng);
        let mut sunk = 0;
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                // Cells blocked by a revealed wreck contour are skipped;
                // no ship can occupy those anyway.
                if let Ok(outcome) = board.shoot(Coordinate::new(row, col)) {
                    if outcome == ShotOutcome::Sunk {
                        sunk += 1;
                    }
                }
            }
        }
        prop_assert_eq!(sunk, FLEET_LENGTHS.len());
        prop_assert_eq!(board.destroyed(), FLEET_LENGTHS.len());
        prop_assert!(board.is_defeated());
    }
}
