//! Compass quantization of gradient vectors.
//!
//! `y` follows the vertical Sobel convention: positive means intensity grows
//! towards the top of the grid, i.e. NORTH is row − 1.
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// One of eight compass directions, each centred on a multiple of 45°.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    East,
    NorthEast,
    North,
    NorthWest,
    West,
    SouthWest,
    South,
    SouthEast,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::NorthEast,
        Direction::North,
        Direction::NorthWest,
        Direction::West,
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
    ];

    /// Grid step `(d_row, d_col)` one pixel along this direction.
    #[inline]
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::East => (0, 1),
            Direction::NorthEast => (-1, 1),
            Direction::North => (-1, 0),
            Direction::NorthWest => (-1, -1),
            Direction::West => (0, -1),
            Direction::SouthWest => (1, -1),
            Direction::South => (1, 0),
            Direction::SouthEast => (1, 1),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::East => Direction::West,
            Direction::NorthEast => Direction::SouthWest,
            Direction::North => Direction::South,
            Direction::NorthWest => Direction::SouthEast,
            Direction::West => Direction::East,
            Direction::SouthWest => Direction::NorthEast,
            Direction::South => Direction::North,
            Direction::SouthEast => Direction::NorthWest,
        }
    }
}

/// Quantize the vector `(x, y)` to a compass direction.
///
/// A vertical vector (`x == 0`) maps straight to NORTH or SOUTH; the zero
/// vector (and anything non-finite) has no direction. Otherwise the angle is
/// taken into `[0, 2π)` and split, per quadrant, into sub-ranges of width π/8,
/// π/4 and π/8 so that every compass point owns a π/4 sector centred on it.
pub fn quantize_direction(x: f64, y: f64) -> Option<Direction> {
    if x == 0.0 {
        return if y > 0.0 {
            Some(Direction::North)
        } else if y < 0.0 {
            Some(Direction::South)
        } else {
            None
        };
    }

    let angle = y.atan2(x);
    if x > 0.0 && y >= 0.0 {
        Some(if angle < PI / 8.0 {
            Direction::East
        } else if angle < 3.0 * PI / 8.0 {
            Direction::NorthEast
        } else {
            Direction::North
        })
    } else if x < 0.0 && y >= 0.0 {
        // atan2 of (-0.0, x < 0) is −π, which lands in the WEST branch.
        Some(if (PI / 2.0..5.0 * PI / 8.0).contains(&angle) {
            Direction::North
        } else if (5.0 * PI / 8.0..7.0 * PI / 8.0).contains(&angle) {
            Direction::NorthWest
        } else {
            Direction::West
        })
    } else if x < 0.0 && y < 0.0 {
        let angle = angle + 2.0 * PI;
        Some(if angle < 9.0 * PI / 8.0 {
            Direction::West
        } else if angle < 11.0 * PI / 8.0 {
            Direction::SouthWest
        } else {
            Direction::South
        })
    } else if x > 0.0 && y < 0.0 {
        let angle = angle + 2.0 * PI;
        Some(if angle < 13.0 * PI / 8.0 {
            Direction::South
        } else if angle < 15.0 * PI / 8.0 {
            Direction::SouthEast
        } else {
            Direction::East
        })
    } else {
        None
    }
}
