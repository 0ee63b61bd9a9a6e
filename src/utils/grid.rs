//! Row-major character grid used by the columnar transposition cipher.
//!
//! A grid has a fixed column count; the last row may be shorter when the
//! grid is built without padding or rebuilt from ragged columns.

/// Character grid stored as rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Grid {
    rows: Vec<Vec<char>>,
    columns: usize,
}

impl Grid {
    /// Lays `symbols` out row-major over `columns` columns, filling the last
    /// row by wrapping back to the start of `symbols`.
    ///
    /// # Parameters
    /// - `symbols`: Cell contents in reading order.
    /// - `columns`: Number of columns (must be non-zero).
    pub(crate) fn wrapped(symbols: &[char], columns: usize) -> Self {
        let num_rows = symbols.len().div_ceil(columns);
        let cells: Vec<char> = symbols
            .iter()
            .copied()
            .cycle()
            .take(num_rows * columns)
            .collect();
        Grid {
            rows: cells.chunks(columns).map(<[char]>::to_vec).collect(),
            columns,
        }
    }

    /// Lays `symbols` out row-major without padding; the last row keeps only
    /// the symbols left over.
    pub(crate) fn ragged(symbols: &[char], columns: usize) -> Self {
        Grid {
            rows: symbols.chunks(columns).map(<[char]>::to_vec).collect(),
            columns,
        }
    }

    /// Rebuilds a grid from its columns, tolerating columns of unequal
    /// height.
    ///
    /// Row `r` collects the `r`-th cell of every column that has one, in
    /// column order.
    pub(crate) fn from_columns(columns: &[Vec<char>]) -> Self {
        let num_rows = columns.iter().map(Vec::len).max().unwrap_or(0);
        let rows = (0..num_rows)
            .map(|r| columns.iter().filter_map(|col| col.get(r).copied()).collect())
            .collect();
        Grid {
            rows,
            columns: columns.len(),
        }
    }

    /// Number of rows.
    pub(crate) fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[allow(dead_code)]
    pub(crate) fn num_columns(&self) -> usize {
        self.columns
    }

    /// Reads column `index` top to bottom, skipping empty cells.
    pub(crate) fn column(&self, index: usize) -> String {
        self.rows.iter().filter_map(|row| row.get(index)).collect()
    }

    /// Concatenates all cells row-major.
    pub(crate) fn into_text(self) -> String {
        self.rows.into_iter().flatten().collect()
    }
}
