use std::collections::HashSet;

use metrohash::MetroBuildHasher;
use tracing::debug;

use crate::{pos, LifeError, LifeResult, Pos};

/// furthest distance from the origin a seed cell may lie on either axis.
///
/// a pattern grows by at most one cell per generation, so a world seeded inside
/// this limit stays addressable with `i64` for any reachable number of steps.
pub const COORD_LIMIT: i64 = 1 << 62;

pub(crate) type CellSet = HashSet<Pos, MetroBuildHasher>;

/// The live cells of one generation.
///
/// A world never stores empty cells: any position that is not a member is
/// dead. Worlds are never mutated once built; stepping produces a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct World {
    cells: CellSet,
}

impl World {
    /// builds a seed world, rejecting cells outside of [`COORD_LIMIT`].
    pub fn new(cells: impl IntoIterator<Item = Pos>) -> LifeResult<Self> {
        let cells = cells
            .into_iter()
            .map(check_bounds)
            .collect::<LifeResult<CellSet>>()?;
        debug!(population = cells.len(), "seeded world");
        Ok(Self { cells })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn from_cells(cells: CellSet) -> Self {
        Self { cells }
    }

    pub fn is_alive(&self, pos: Pos) -> bool {
        self.cells.contains(&pos)
    }

    pub fn population(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells.iter().copied()
    }

    /// the same pattern moved by `offset`.
    pub fn translated(&self, offset: Pos) -> LifeResult<Self> {
        Self::new(self.cells().map(|pos| {
            pos!(
                pos.x.saturating_add(offset.x),
                pos.y.saturating_add(offset.y)
            )
        }))
    }
}

fn check_bounds(pos: Pos) -> LifeResult<Pos> {
    let range = -COORD_LIMIT..=COORD_LIMIT;
    if range.contains(&pos.x) && range.contains(&pos.y) {
        Ok(pos)
    } else {
        Err(LifeError::OutOfBounds(pos))
    }
}
