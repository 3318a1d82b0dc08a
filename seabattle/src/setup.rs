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

//! Random fleet placement and random targeting.
//!
//! Everything here takes the rng as a parameter so callers can inject a
//! seeded source for reproducible boards and tests.

use rand::Rng;

use crate::board::{Board, Coordinate, BOARD_SIZE};
use crate::ships::Ship;

/// Ship lengths of the standard fleet, placed largest first.
pub const FLEET_LENGTHS: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Placement attempts allowed for one candidate board before it is
/// discarded and generation starts over from empty.
const MAX_PLACE_ATTEMPTS: u32 = 2000;

/// Draw a uniformly random in-range coordinate.
pub fn random_target<R: Rng>(rng: &mut R) -> Coordinate {
    Coordinate::new(rng.gen_range(0, BOARD_SIZE), rng.gen_range(0, BOARD_SIZE))
}

/// Generate a board with the standard fleet placed at random.
///
/// Individual placements are rejection-sampled against the contact-free
/// rule; a candidate board that exhausts its attempt budget is thrown
/// away entirely, so dead-end partial layouts cannot wedge generation.
/// Termination is probabilistic but each cycle is bounded.
pub fn random_board<R: Rng>(rng: &mut R) -> Board {
    loop {
        if let Some(board) = try_random_board(rng) {
            return board;
        }
    }
}

/// Attempt one candidate board. Returns `None` when the attempt budget
/// runs out before the whole fleet is placed.
fn try_random_board<R: Rng>(rng: &mut R) -> Option<Board> {
    let mut board = Board::new();
    let mut attempts = 0;
    for &length in FLEET_LENGTHS.iter() {
        loop {
            attempts += 1;
            if attempts > MAX_PLACE_ATTEMPTS {
                return None;
            }
            let ship = Ship::new(random_target(rng), length, rng.gen());
            if board.add_ship(ship).is_ok() {
                break;
            }
        }
    }
    // Placement reservations become shot history from here on.
    board.clear_reservations();
    Some(board)
}
