/// Coordinates of a cell; `(0, 0)` is the top left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridPosition {
    pub row: usize,
    pub column: usize,
}

impl GridPosition {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Index into a row-major buffer, if the position lies inside `rows x columns`.
    pub fn index(&self, rows: usize, columns: usize) -> Option<usize> {
        (self.row < rows && self.column < columns).then(|| self.row * columns + self.column)
    }
}

impl From<(usize, usize)> for GridPosition {
    fn from((row, column): (usize, usize)) -> Self {
        Self { row, column }
    }
}
