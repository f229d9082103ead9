//! Miscellaneous project utilities.

use crate::location::Location;
use crate::EDGE_LENGTH;
use std::fmt::{self, Formatter};

/// Write a labelled 8x8 grid, asking `glyph` for the character of each cell.
/// Rows are numbered from 1 and columns lettered from A, matching [`Location`] notation.
pub fn format_grid<G: Fn(Location) -> char>(f: &mut Formatter, glyph: G) -> fmt::Result {
    write!(f, "  A B C D E F G H")?;

    for row in 0..EDGE_LENGTH {
        write!(f, "\n{}", row + 1)?;
        for col in 0..EDGE_LENGTH {
            write!(f, " {}", glyph(Location::new(row, col)))?;
        }
    }

    Ok(())
}
