mod neighbors;
mod tests;

use crate::{EdgeBehavior, GridError, GridPosition};
use log::{debug, trace};
use std::fmt;

/// Phase of a single simulation run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Cells are being edited, nothing advances.
    #[default]
    Seeding,
    /// Generations advance on request.
    Running,
    /// The last generation was empty or identical to the one before it.
    Completed,
}

/// Observable effect of a mutation, delivered to every observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Change {
    CellToggled(GridPosition),
    EdgeBehaviorChanged(EdgeBehavior),
    /// The seed was replaced by a random one that differs from it.
    Randomized,
    /// The run was started and its first generation computed.
    Started,
    /// One notification per [`LifeEngine::step`] call, covering all
    /// `generations` it computed.
    Advanced { generations: usize },
    /// Back to an empty field in the seeding phase.
    Restarted,
}

/// Handle returned by [`LifeEngine::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

type Observer = Box<dyn FnMut(&LifeEngine, Change)>;

/// Conway's Game of Life on a fixed `rows x columns` field.
///
/// Commands issued in the wrong phase (or with positions outside of the
/// field) are ignored, leaving the engine untouched.
pub struct LifeEngine {
    cells: Vec<bool>, // row-major, `true` is alive
    rows: usize,
    columns: usize,
    generation: u64,
    state: GameState,
    edge_behavior: EdgeBehavior,
    revision: u64, // bumped on every notification
    observers: Vec<(ObserverId, Observer)>,
    next_observer_id: u64,
}

impl LifeEngine {
    /// Creates a field of dead cells in the [`GameState::Seeding`] phase.
    pub fn new(
        rows: usize,
        columns: usize,
        edge_behavior: EdgeBehavior,
    ) -> Result<Self, GridError> {
        if rows == 0 || columns == 0 {
            return Err(GridError::InvalidDimensions { rows, columns });
        }
        Ok(Self {
            cells: vec![false; rows * columns],
            rows,
            columns,
            generation: 0,
            state: GameState::Seeding,
            edge_behavior,
            revision: 0,
            observers: vec![],
            next_observer_id: 0,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// All cells, row by row.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn cell_rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks_exact(self.columns)
    }

    pub fn row(&self, row: usize) -> Option<&[bool]> {
        self.cell_rows().nth(row)
    }

    pub fn cell(&self, position: impl Into<GridPosition>) -> Option<bool> {
        let index = position.into().index(self.rows, self.columns)?;
        Some(self.cells[index])
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge_behavior
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Living neighbors of the cell under the current edge behavior.
    ///
    /// Returns `None` for positions outside of the field.
    pub fn living_neighbors(&self, position: impl Into<GridPosition>) -> Option<usize> {
        let position = position.into();
        position.index(self.rows, self.columns)?;
        Some(neighbors::living_neighbors(
            &self.cells,
            self.columns,
            position,
            self.edge_behavior,
        ))
    }

    /// Incremented once per delivered notification.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Registers a callback invoked after every mutation that changed
    /// observable state.
    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&LifeEngine, Change) + 'static,
    ) -> ObserverId {
        let id = ObserverId(self.next_observer_id);
        self.next_observer_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns `false` if no observer with this id was registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let len = self.observers.len();
        self.observers.retain(|(other, _)| *other != id);
        self.observers.len() != len
    }

    pub fn toggle_cell(&mut self, position: impl Into<GridPosition>) {
        let position = position.into();
        if self.state != GameState::Seeding {
            return;
        }
        let Some(index) = position.index(self.rows, self.columns) else {
            return;
        };
        self.cells[index] = !self.cells[index];
        self.notify(Change::CellToggled(position));
    }

    pub fn set_edge_behavior(&mut self, edge_behavior: EdgeBehavior) {
        if self.state != GameState::Seeding || self.edge_behavior == edge_behavior {
            return;
        }
        debug!("edge behavior: {:?} -> {:?}", self.edge_behavior, edge_behavior);
        self.edge_behavior = edge_behavior;
        self.notify(Change::EdgeBehaviorChanged(edge_behavior));
    }

    /// Fills the field with random cells while seeding.
    ///
    /// `fill_rate` - probability of a cell being alive
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn randomize(&mut self, fill_rate: f64, seed: Option<u64>) {
        use rand::{Rng, SeedableRng};

        if self.state != GameState::Seeding {
            return;
        }
        let mut rng = if let Some(x) = seed {
            rand_chacha::ChaCha8Rng::seed_from_u64(x)
        } else {
            rand_chacha::ChaCha8Rng::from_entropy()
        };
        let fill_rate = if fill_rate.is_nan() {
            0.
        } else {
            fill_rate.clamp(0., 1.)
        };
        let cells = (0..self.cells.len())
            .map(|_| rng.gen_bool(fill_rate))
            .collect::<Vec<_>>();
        if cells == self.cells {
            return;
        }
        self.cells = cells;
        self.notify(Change::Randomized);
    }

    /// Leaves the seeding phase and computes the first generation.
    pub fn start(&mut self) {
        if self.state != GameState::Seeding {
            return;
        }
        debug!(
            "starting {}x{} field ({}) with {} living cells",
            self.rows,
            self.columns,
            self.edge_behavior,
            self.population()
        );
        self.state = GameState::Running;
        self.advance(1);
        self.notify(Change::Started);
    }

    /// Computes up to `count` generations, stopping early once the run completes.
    ///
    /// Returns the number of generations computed.
    pub fn step(&mut self, count: usize) -> usize {
        let generations = self.advance(count);
        if generations != 0 {
            self.notify(Change::Advanced { generations });
        }
        generations
    }

    /// Returns to an empty field in the seeding phase.
    pub fn restart(&mut self) {
        let pristine = self.state == GameState::Seeding
            && self.generation == 0
            && !self.cells.contains(&true);
        self.state = GameState::Seeding;
        self.cells.fill(false);
        self.generation = 0;
        if !pristine {
            debug!("restarted");
            self.notify(Change::Restarted);
        }
    }

    fn advance(&mut self, count: usize) -> usize {
        let mut generations = 0;
        while generations < count && self.state == GameState::Running {
            let sweep = neighbors::advance(&mut self.cells, self.columns, self.edge_behavior);
            self.generation += 1;
            generations += 1;
            trace!(
                "generation {}: population {}",
                self.generation,
                sweep.population
            );
            if !sweep.changed || sweep.population == 0 {
                debug!("life ended at generation {}", self.generation);
                self.state = GameState::Completed;
            }
        }
        generations
    }

    fn notify(&mut self, change: Change) {
        self.revision += 1;
        let mut observers = std::mem::take(&mut self.observers);
        for (_, observer) in observers.iter_mut() {
            observer(self, change);
        }
        self.observers = observers;
    }
}

impl fmt::Debug for LifeEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifeEngine")
            .field("rows", &self.rows)
            .field("columns", &self.columns)
            .field("generation", &self.generation)
            .field("state", &self.state)
            .field("edge_behavior", &self.edge_behavior)
            .field("population", &self.population())
            .finish_non_exhaustive()
    }
}

/// One line per row, `#` for alive and `.` for dead cells.
impl fmt::Display for LifeEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cell_rows() {
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
