//! Code for working with [`Location`]s on the Reversi board.

use crate::{EDGE_LENGTH, NUM_SPACES};
use arrayvec::ArrayVec;
use std::fmt::{self, Display, Formatter, Write};
use std::iter::FromIterator;
use std::ops::Deref;

/// A cell on the board, stored as a row-major square index.
/// Ordering follows row-major order: (0, 0) first, (7, 7) last.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location(u8);

/// An ordered list of distinct locations; never longer than the board.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LocationList(ArrayVec<Location, NUM_SPACES>);

/// The legal moves out of a position, in row-major order.
pub type MoveList = LocationList;

impl Location {
    /// Build a location from coordinates known to be on the board.
    /// Panics otherwise, so this is meant for constant tables.
    pub const fn new(row: usize, col: usize) -> Self {
        assert!(row < EDGE_LENGTH && col < EDGE_LENGTH);
        Self((row * EDGE_LENGTH + col) as u8)
    }

    /// Convert from row and column coordinates.
    /// Returns None if the coordinates are off the board.
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row < EDGE_LENGTH && col < EDGE_LENGTH {
            Some(Self::new(row, col))
        } else {
            None
        }
    }

    /// Convert from a row-major square index (0 is the upper-left corner).
    pub fn from_index(index: usize) -> Option<Self> {
        if index < NUM_SPACES {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn row(self) -> usize {
        self.to_index() / EDGE_LENGTH
    }

    #[inline]
    pub fn col(self) -> usize {
        self.to_index() % EDGE_LENGTH
    }

    /// Get the row and column coordinates.
    #[inline]
    pub fn to_coords(self) -> (usize, usize) {
        (self.row(), self.col())
    }

    /// Step `(d_row, d_col)` away from this location, or None if that leaves the board.
    #[inline]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.row() as isize + d_row;
        let col = self.col() as isize + d_col;
        if row < 0 || col < 0 {
            return None;
        }
        Self::from_coords(row as usize, col as usize)
    }

    /// Iterate over every location in row-major order.
    pub fn all() -> impl Iterator<Item = Location> {
        (0..NUM_SPACES as u8).map(Location)
    }
}

/// Convert this [`Location`] into string notation ("D3" is row 2, column 3).
impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (row, col) = self.to_coords();
        let row_str = "12345678".chars().nth(row).ok_or(fmt::Error)?;
        let col_str = "ABCDEFGH".chars().nth(col).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

#[derive(Debug, PartialEq)]
pub struct ParseLocationError;

impl Display for ParseLocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid location string")
    }
}

impl std::error::Error for ParseLocationError {}

/// Build a [`Location`] from a 1-indexed string notation ("D3").
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(ParseLocationError)?;
        let row = chars
            .next()
            .ok_or(ParseLocationError)?
            .to_digit(10)
            .ok_or(ParseLocationError)? as usize;

        if row == 0 || chars.next().is_some() {
            return Err(ParseLocationError);
        }

        Self::from_coords(row - 1, col).ok_or(ParseLocationError)
    }
}

impl LocationList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a location. Lists are bounded by the board size, and every
    /// producer in this crate pushes each cell at most once.
    #[inline]
    pub fn push(&mut self, loc: Location) {
        self.0.push(loc);
    }

    /// Returns whether `loc` is in this list.
    pub fn contains(&self, loc: Location) -> bool {
        self.0.contains(&loc)
    }
}

impl Deref for LocationList {
    type Target = [Location];

    fn deref(&self) -> &[Location] {
        &self.0
    }
}

impl FromIterator<Location> for LocationList {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Location> for LocationList {
    fn extend<I: IntoIterator<Item = Location>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

impl IntoIterator for LocationList {
    type Item = Location;
    type IntoIter = arrayvec::IntoIter<Location, NUM_SPACES>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a LocationList {
    type Item = &'a Location;
    type IntoIter = std::slice::Iter<'a, Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for LocationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = self
            .iter()
            .map(|mv| mv.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn location_from_coords() {
        assert_eq!(Location::from_coords(0, 0), Some(Location(0)));
        assert_eq!(Location::from_coords(7, 7), Some(Location(63)));
        assert_eq!(Location::from_coords(2, 3), Some(Location(19)));
        assert_eq!(Location::from_coords(0, 8), None);
        assert_eq!(Location::from_coords(8, 0), None);
    }

    #[test]
    #[should_panic]
    fn location_new_off_board() {
        Location::new(0, 8);
    }

    #[test]
    fn location_to_coords() {
        assert_eq!(Location(0).to_coords(), (0, 0));
        assert_eq!(Location(63).to_coords(), (7, 7));
        assert_eq!(Location(19).to_coords(), (2, 3));
    }

    #[test]
    fn location_offset() {
        let corner = Location::new(0, 0);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(1, 1), Some(Location::new(1, 1)));
        assert_eq!(Location::new(7, 7).offset(0, 1), None);
        assert_eq!(Location::new(3, 7).offset(1, -1), Some(Location::new(4, 6)));
    }

    #[test]
    fn location_all_is_row_major() {
        let all: Vec<Location> = Location::all().collect();
        assert_eq!(all.len(), NUM_SPACES);
        assert_eq!(all[0], Location::new(0, 0));
        assert_eq!(all[8], Location::new(1, 0));
        assert!(all.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn location_from_str_success() {
        assert_eq!(Location::from_str("A1"), Ok(Location::new(0, 0)));
        assert_eq!(Location::from_str("h8"), Ok(Location::new(7, 7)));
        assert_eq!(Location::from_str("D3"), Ok(Location::new(2, 3)));
        assert_eq!(Location::from_str(" c4\n"), Ok(Location::new(3, 2)));
    }

    #[test]
    fn location_from_str_fail() {
        assert_eq!(Location::from_str(""), Err(ParseLocationError));
        assert_eq!(Location::from_str("A12"), Err(ParseLocationError));
        assert_eq!(Location::from_str("AA"), Err(ParseLocationError));
        assert_eq!(Location::from_str("A9"), Err(ParseLocationError));
        assert_eq!(Location::from_str("A0"), Err(ParseLocationError));
        assert_eq!(Location::from_str("I5"), Err(ParseLocationError));
    }

    #[test]
    fn location_to_str() {
        assert_eq!(Location::new(7, 7).to_string(), "H8");
        assert_eq!(Location::new(0, 0).to_string(), "A1");
        assert_eq!(Location::from_str("E2").unwrap().to_string(), "E2");
        assert_eq!(Location::from_str("F6").unwrap().to_string(), "F6");
    }

    #[test]
    fn location_list_display_and_contains() {
        let list: LocationList = vec![Location::new(2, 3), Location::new(4, 5)]
            .into_iter()
            .collect();
        assert_eq!(list.to_string(), "[D3, F5]");
        assert!(list.contains(Location::new(4, 5)));
        assert!(!list.contains(Location::new(0, 0)));
        assert_eq!(LocationList::new().to_string(), "[]");
    }
}
