use crate::{EdgeBehavior, GridPosition};

/// Row of the Moore neighborhood, relative to the cell being updated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum NeighborRow {
    Previous,
    Current,
    Next,
}

impl NeighborRow {
    pub(super) const ALL: [Self; 3] = [Self::Previous, Self::Current, Self::Next];

    const fn row_offset(self) -> isize {
        match self {
            Self::Previous => -1,
            Self::Current => 0,
            Self::Next => 1,
        }
    }

    const fn column_offsets(self) -> &'static [isize] {
        match self {
            Self::Current => &[-1, 1],
            Self::Previous | Self::Next => &[-1, 0, 1],
        }
    }

    /// `(row, column)` offsets of the neighbors lying in this row.
    fn offsets(self) -> impl Iterator<Item = (isize, isize)> {
        let dr = self.row_offset();
        self.column_offsets().iter().map(move |&dc| (dr, dc))
    }
}

/// What a single sweep did to the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct Sweep {
    pub changed: bool,
    pub population: usize,
}

const fn next_state(alive: bool, neighbors: usize) -> bool {
    matches!((alive, neighbors), (true, 2) | (_, 3))
}

fn count_in_row(row: &[bool], column: usize, offsets: &[isize], edge: EdgeBehavior) -> usize {
    offsets
        .iter()
        .filter_map(|&dc| edge.resolve(column, dc, row.len()))
        .filter(|&c| row[c])
        .count()
}

/// Number of living neighbors of a single cell.
pub(super) fn living_neighbors(
    cells: &[bool],
    columns: usize,
    position: GridPosition,
    edge: EdgeBehavior,
) -> usize {
    let rows = cells.len() / columns;
    NeighborRow::ALL
        .into_iter()
        .flat_map(NeighborRow::offsets)
        .filter_map(|(dr, dc)| {
            let r = edge.resolve(position.row, dr, rows)?;
            let c = edge.resolve(position.column, dc, columns)?;
            Some(r * columns + c)
        })
        .filter(|&i| cells[i])
        .count()
}

/// Advances a row-major field `columns` wide by one generation, in place.
///
/// Rows are rewritten top to bottom. Only the original of the row above
/// (and, for a torus, the original top row) is kept aside, so the extra
/// memory is `O(columns)` while every cell still sees the previous
/// generation only.
pub(super) fn advance(cells: &mut [bool], columns: usize, edge: EdgeBehavior) -> Sweep {
    let rows = cells.len() / columns;
    let wrap = edge == EdgeBehavior::WrapAround;

    // row 0 is overwritten before the bottom row reads it
    let first = if wrap {
        cells[..columns].to_vec()
    } else {
        Vec::new()
    };
    let mut previous = if wrap {
        cells[(rows - 1) * columns..].to_vec()
    } else {
        vec![false; columns]
    };
    let mut updating = vec![false; columns];
    let mut sweep = Sweep {
        changed: false,
        population: 0,
    };

    for r in 0..rows {
        let start = r * columns;
        {
            let current = &cells[start..start + columns];
            let above = (r > 0 || wrap).then_some(previous.as_slice());
            let below = if r + 1 < rows {
                Some(&cells[start + columns..start + 2 * columns])
            } else if wrap {
                Some(first.as_slice())
            } else {
                None
            };

            for (c, slot) in updating.iter_mut().enumerate() {
                let neighbors = [above, Some(current), below]
                    .into_iter()
                    .zip(NeighborRow::ALL)
                    .filter_map(|(row, neighbor_row)| Some((row?, neighbor_row)))
                    .map(|(row, neighbor_row)| {
                        count_in_row(row, c, neighbor_row.column_offsets(), edge)
                    })
                    .sum();
                *slot = next_state(current[c], neighbors);
            }

            sweep.changed |= updating.as_slice() != current;
            previous.copy_from_slice(current);
        }
        cells[start..start + columns].copy_from_slice(&updating);
        sweep.population += updating.iter().filter(|&&alive| alive).count();
    }

    sweep
}
