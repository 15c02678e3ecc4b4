//! Exit directions and sets of open directions.
//!
//! Each [`Direction`] is a single bit and the bits double going clockwise
//! (north → east → south → west). A [`DirectionSet`] is a union of those bits,
//! which is how connection points advertise where a connector may leave them.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use glam::{DVec2, dvec2};

/// One of the four cardinal exit directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Direction {
    North = 1,
    East = 2,
    South = 4,
    West = 8,
}

impl Direction {
    /// All directions in enumeration order (ascending bit value).
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    #[inline]
    pub fn bits(self) -> u8 {
        self as u8
    }

    /// The direction with exactly this bit, if any.
    pub fn from_bits(bits: u8) -> Option<Direction> {
        match bits {
            1 => Some(Direction::North),
            2 => Some(Direction::East),
            4 => Some(Direction::South),
            8 => Some(Direction::West),
            _ => None,
        }
    }

    /// Rotate a quarter turn clockwise. Same as doubling the bit, wrapping
    /// west back to north.
    pub fn next_clockwise(self) -> Direction {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// Rotate a quarter turn counter-clockwise. Same as halving the bit,
    /// wrapping north back to west.
    pub fn next_counter_clockwise(self) -> Direction {
        match self {
            Direction::North => Direction::West,
            Direction::East => Direction::North,
            Direction::South => Direction::East,
            Direction::West => Direction::South,
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Unit step along this direction (north is −y).
    pub fn unit(self) -> DVec2 {
        match self {
            Direction::North => dvec2(0.0, -1.0),
            Direction::East => dvec2(1.0, 0.0),
            Direction::South => dvec2(0.0, 1.0),
            Direction::West => dvec2(-1.0, 0.0),
        }
    }

    /// Direction of travel from `from` to `to` for an axis-aligned step.
    /// `None` for diagonal or zero-length steps.
    pub fn of_step(from: DVec2, to: DVec2) -> Option<Direction> {
        let d = to - from;
        match (d.x == 0.0, d.y == 0.0) {
            (true, false) if d.y < 0.0 => Some(Direction::North),
            (true, false) => Some(Direction::South),
            (false, true) if d.x > 0.0 => Some(Direction::East),
            (false, true) => Some(Direction::West),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        };
        f.write_str(name)
    }
}

/// A set of open exit directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DirectionSet {
    bits: u8,
}

impl DirectionSet {
    pub const NONE: DirectionSet = DirectionSet { bits: 0 };
    pub const NORTH: DirectionSet = DirectionSet { bits: 1 };
    pub const EAST: DirectionSet = DirectionSet { bits: 2 };
    pub const SOUTH: DirectionSet = DirectionSet { bits: 4 };
    pub const WEST: DirectionSet = DirectionSet { bits: 8 };
    pub const NORTH_EAST: DirectionSet = DirectionSet { bits: 1 | 2 };
    pub const SOUTH_EAST: DirectionSet = DirectionSet { bits: 4 | 2 };
    pub const SOUTH_WEST: DirectionSet = DirectionSet { bits: 4 | 8 };
    pub const NORTH_WEST: DirectionSet = DirectionSet { bits: 1 | 8 };
    pub const ALL: DirectionSet = DirectionSet { bits: 0b1111 };

    /// Build a set from raw bits; bits above the four directions are dropped.
    pub fn from_bits_truncate(bits: u8) -> Self {
        DirectionSet {
            bits: bits & Self::ALL.bits,
        }
    }

    #[inline]
    pub fn bits(self) -> u8 {
        self.bits
    }

    #[inline]
    pub fn contains(self, dir: Direction) -> bool {
        self.bits & dir.bits() != 0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Members in north, east, south, west order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |d| self.contains(*d))
    }
}

impl From<Direction> for DirectionSet {
    fn from(dir: Direction) -> Self {
        DirectionSet { bits: dir.bits() }
    }
}

impl BitOr for Direction {
    type Output = DirectionSet;
    fn bitor(self, rhs: Direction) -> DirectionSet {
        DirectionSet {
            bits: self.bits() | rhs.bits(),
        }
    }
}

impl BitOr for DirectionSet {
    type Output = DirectionSet;
    fn bitor(self, rhs: DirectionSet) -> DirectionSet {
        DirectionSet {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitOr<Direction> for DirectionSet {
    type Output = DirectionSet;
    fn bitor(self, rhs: Direction) -> DirectionSet {
        DirectionSet {
            bits: self.bits | rhs.bits(),
        }
    }
}

impl BitOrAssign<Direction> for DirectionSet {
    fn bitor_assign(&mut self, rhs: Direction) {
        self.bits |= rhs.bits();
    }
}

impl fmt::Display for DirectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("{}");
        }
        f.write_str("{")?;
        for (i, dir) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", dir)?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_are_distinct_single_bits() {
        let mut seen = 0u8;
        for dir in Direction::ALL {
            assert_eq!(dir.bits().count_ones(), 1);
            assert_eq!(seen & dir.bits(), 0);
            seen |= dir.bits();
            assert_eq!(Direction::from_bits(dir.bits()), Some(dir));
        }
        assert_eq!(seen, DirectionSet::ALL.bits());
        assert_eq!(Direction::from_bits(3), None);
    }

    #[test]
    fn clockwise_matches_bit_doubling() {
        for dir in [Direction::North, Direction::East, Direction::South] {
            assert_eq!(dir.next_clockwise().bits(), dir.bits() * 2);
        }
        assert_eq!(Direction::West.next_clockwise(), Direction::North);
        for dir in Direction::ALL {
            assert_eq!(dir.next_clockwise().next_counter_clockwise(), dir);
            assert_eq!(dir.next_clockwise().next_clockwise(), dir.opposite());
        }
    }

    #[test]
    fn unit_points_along_screen_axes() {
        assert_eq!(Direction::North.unit(), dvec2(0.0, -1.0));
        assert_eq!(Direction::East.unit(), dvec2(1.0, 0.0));
        for dir in Direction::ALL {
            assert_eq!(dir.unit(), -dir.opposite().unit());
        }
    }

    #[test]
    fn of_step_classifies_axis_steps() {
        let o = dvec2(1.0, 1.0);
        let steps = [
            (dvec2(1.0, -3.0), Direction::North),
            (dvec2(1.0, 2.0), Direction::South),
            (dvec2(4.0, 1.0), Direction::East),
            (dvec2(0.0, 1.0), Direction::West),
        ];
        for (to, dir) in steps {
            assert_eq!(Direction::of_step(o, to), Some(dir));
        }
        assert_eq!(Direction::of_step(o, o), None);
        assert_eq!(Direction::of_step(o, dvec2(2.0, 2.0)), None);
    }

    #[test]
    fn set_membership_and_union() {
        let ne = Direction::North | Direction::East;
        assert_eq!(ne, DirectionSet::NORTH_EAST);
        assert!(ne.contains(Direction::North));
        assert!(!ne.contains(Direction::South));
        assert_eq!(ne.len(), 2);

        let mut all = ne | DirectionSet::SOUTH_WEST;
        assert_eq!(all, DirectionSet::ALL);
        all |= Direction::West;
        assert_eq!(all, DirectionSet::ALL);

        assert!(DirectionSet::NONE.is_empty());
        assert_eq!(DirectionSet::from_bits_truncate(0xff), DirectionSet::ALL);
    }

    #[test]
    fn set_iterates_in_enumeration_order() {
        let dirs: Vec<_> = (DirectionSet::WEST | Direction::North).iter().collect();
        assert_eq!(dirs, vec![Direction::North, Direction::West]);
        assert_eq!(DirectionSet::ALL.to_string(), "{north, east, south, west}");
        assert_eq!(DirectionSet::NONE.to_string(), "{}");
    }
}
