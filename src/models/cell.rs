// src/models/cell.rs
//
// Cells are addressed by index; the "square-<i>" identifier is the only
// handle pointer events carry back to the animator.

use std::fmt;
use std::iter::FusedIterator;

const ID_PREFIX: &str = "square-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub index: usize,
}

impl Cell {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    pub fn id(&self) -> String {
        format!("{}{}", ID_PREFIX, self.index)
    }

    /// Recovers the index from an identifier. Anything that is not exactly
    /// `square-` followed by a decimal index gives `None`.
    pub fn parse_id(id: &str) -> Option<usize> {
        let digits = id.strip_prefix(ID_PREFIX)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        // reject "square-007" so each index has one spelling
        if digits.len() > 1 && digits.starts_with('0') {
            return None;
        }
        digits.parse().ok()
    }

    /// Column and row of this cell in a grid `columns` wide.
    pub fn position(&self, columns: u32) -> Option<(u32, u32)> {
        if columns == 0 {
            return None;
        }
        let columns = columns as usize;
        Some(((self.index % columns) as u32, (self.index / columns) as u32))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ID_PREFIX, self.index)
    }
}

/// Lazy sequence of the cells of one grid generation. Cloning it, or asking
/// the dimensions for a fresh one, replays the same indices.
#[derive(Debug, Clone)]
pub struct Cells {
    next: usize,
    len: usize,
}

impl Cells {
    pub(crate) fn new(len: usize) -> Self {
        Self { next: 0, len }
    }
}

impl Iterator for Cells {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.next >= self.len {
            return None;
        }
        let cell = Cell::new(self.next);
        self.next += 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cells {}
impl FusedIterator for Cells {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GridDimensions;

    #[test]
    fn test_id_round_trip() {
        for index in [0, 1, 9, 10, 251, 100_000] {
            let cell = Cell::new(index);
            assert_eq!(Cell::parse_id(&cell.id()), Some(index));
            assert_eq!(cell.to_string(), cell.id());
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let tests = vec![
            "",
            "square-",
            "square",
            "square-x",
            "square--1",
            "square-+1",
            "square-1 ",
            " square-1",
            "Square-1",
            "circle-1",
            "square-01",
            "square-99999999999999999999999999",
        ];

        for id in tests {
            assert_eq!(Cell::parse_id(id), None, "Failed for {:?}", id);
        }
    }

    #[test]
    fn test_position() {
        assert_eq!(Cell::new(0).position(21), Some((0, 0)));
        assert_eq!(Cell::new(20).position(21), Some((20, 0)));
        assert_eq!(Cell::new(21).position(21), Some((0, 1)));
        assert_eq!(Cell::new(251).position(21), Some((20, 11)));
        assert_eq!(Cell::new(3).position(0), None);
    }

    #[test]
    fn test_cells_restartable() {
        let dims = GridDimensions::new(3, 2);
        let first: Vec<_> = dims.cells().collect();
        let second: Vec<_> = dims.cells().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 6);

        let mut cells = dims.cells();
        cells.next();
        let replay = cells.clone();
        assert_eq!(cells.len(), 5);
        assert_eq!(cells.collect::<Vec<_>>(), replay.collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_generation() {
        let mut cells = GridDimensions::new(0, 12).cells();
        assert_eq!(cells.len(), 0);
        assert_eq!(cells.next(), None);
        assert_eq!(cells.next(), None);
    }
}
