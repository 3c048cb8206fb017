//! This module defines `Tape`, a sparse bi-infinite tape. Only written cells occupy storage;
//! every other index reads as the blank symbol.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;

/// A bi-infinite tape indexed by signed integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape<S> {
    cells: BTreeMap<i64, S>,
    blank: S,
}

impl<S: Clone> Tape<S> {
    /// Creates an empty tape where every cell holds `blank`.
    pub fn new(blank: S) -> Self {
        Self {
            cells: BTreeMap::new(),
            blank,
        }
    }

    /// Returns the symbol at `index`. Reading never allocates a cell.
    pub fn get(&self, index: i64) -> &S {
        self.cells.get(&index).unwrap_or(&self.blank)
    }

    /// Writes `symbol` at `index`.
    pub fn set(&mut self, index: i64, symbol: S) {
        self.cells.insert(index, symbol);
    }

    /// Materializes every unwritten cell in `range` as blank, leaving written cells as they are.
    ///
    /// The range then counts towards [`Tape::bounds`] and [`Tape::window`].
    pub fn fill_blank(&mut self, range: RangeInclusive<i64>) {
        for index in range {
            self.cells
                .entry(index)
                .or_insert_with(|| self.blank.clone());
        }
    }

    /// Returns the lowest and highest written index, or `None` if nothing was written.
    pub fn bounds(&self) -> Option<(i64, i64)> {
        let (&min, _) = self.cells.first_key_value()?;
        let (&max, _) = self.cells.last_key_value()?;
        Some((min, max))
    }

    /// Returns the symbols from the lowest to the highest written index, inclusive.
    ///
    /// Unwritten cells between the two ends read as blank. A tape that was never written
    /// yields an empty window.
    pub fn window(&self) -> Vec<S> {
        match self.bounds() {
            Some((min, max)) => (min..=max).map(|i| self.get(i).clone()).collect(),
            None => Vec::new(),
        }
    }

    /// Returns the blank symbol.
    pub fn blank(&self) -> &S {
        &self.blank
    }

    /// Number of materialized cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Forgets every written cell.
    pub fn clear(&mut self) {
        self.cells.clear();
    }
}

impl<S: Clone + fmt::Display> fmt::Display for Tape<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.window() {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}
