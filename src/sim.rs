use std::{collections::HashMap, iter::FusedIterator};

use metrohash::MetroBuildHasher;
use tracing::{debug, trace};

use crate::{world::CellSet, Pos, World};

type NeighborCounts = HashMap<Pos, u8, MetroBuildHasher>;

impl World {
    /// the next generation under the classic rule: a live cell survives with
    /// 2 or 3 live neighbors, a dead cell is born with exactly 3.
    pub fn step(&self) -> World {
        let counts = neighbor_counts(self);

        let next: CellSet = counts
            .into_iter()
            .filter(|&(pos, count)| match (self.is_alive(pos), count) {
                (true, 2 | 3) => true, // stay
                (false, 3) => true,    // becomes alive
                _ => false,            // dies or stays dead
            })
            .map(|(pos, _)| pos)
            .collect();

        debug!(
            before = self.population(),
            after = next.len(),
            "stepped world"
        );
        World::from_cells(next)
    }

    /// a lazy sequence of the first `count` generations, starting with `self`.
    pub fn generations(&self, count: usize) -> Generations {
        Generations::new(self.clone(), count)
    }
}

/// live neighbors of every position touching at least one live cell.
fn neighbor_counts(world: &World) -> NeighborCounts {
    let mut counts = NeighborCounts::default();
    for neighbor in world.cells().flat_map(Pos::neighbors) {
        *counts.entry(neighbor).or_insert(0) += 1;
    }
    counts
}

/// Yields `W0, W1, ..., W(n-1)` where each world is the step of the previous.
///
/// Every call to `next` past the first computes exactly one step.
#[derive(Debug, Clone)]
pub struct Generations {
    seed: Option<World>,
    last: Option<World>,
    remaining: usize,
    index: usize,
}

impl Generations {
    fn new(seed: World, count: usize) -> Self {
        Self {
            seed: Some(seed),
            last: None,
            remaining: count,
            index: 0,
        }
    }
}

impl Iterator for Generations {
    type Item = World;

    fn next(&mut self) -> Option<World> {
        if self.remaining == 0 {
            return None;
        }
        let world = match self.seed.take() {
            Some(seed) => seed,
            None => self.last.as_ref()?.step(),
        };
        self.remaining -= 1;
        trace!(
            generation = self.index,
            population = world.population(),
            "yielding generation"
        );
        self.index += 1;
        if self.remaining > 0 {
            self.last = Some(world.clone());
        } else {
            self.last = None;
        }
        Some(world)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Generations {}

impl FusedIterator for Generations {}
