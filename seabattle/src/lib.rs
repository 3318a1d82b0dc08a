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

//! Implementation of the classic game Sea Battle: two players alternate
//! firing at each other's fixed 6x6 boards until one fleet is destroyed.
//!
//! [`board`] holds the core of the game: the grid, ship occupancy, the
//! contact-free placement rule and shot resolution. [`game`] pairs two
//! boards and tracks whose turn it is. [`setup`] generates random fleets.
//! [`ships`] defines the ships themselves.
//!
//! The library never performs console I/O; rendering a [`Board`] goes
//! through its `Display` impl and all interaction lives in the front end.

pub mod board;
pub mod game;
pub mod setup;
pub mod ships;

pub use board::{
    Board, CannotPlaceReason, CannotShootReason, Cell, Coordinate, ShotOutcome, BOARD_SIZE,
};
pub use game::{Game, Side};
pub use setup::{random_board, random_target, FLEET_LENGTHS};
pub use ships::{Orientation, Ship};
