//! Chromosome encoding for the timetable GA.
//!
//! A chromosome is one complete candidate weekly schedule: a day-major grid
//! of genes, each gene a subject or a free period. Genes are tagged values,
//! not string sentinels, so a malformed subject name can never be confused
//! with a free period.

use std::collections::BTreeMap;
use std::fmt;

use log::warn;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogSnapshot;
use crate::grid::GridSpec;

/// Value assigned to one grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gene {
    /// Unassigned slot.
    Free,
    /// A lesson of the named subject.
    Subject(String),
}

impl Gene {
    pub fn is_free(&self) -> bool {
        matches!(self, Gene::Free)
    }

    pub fn as_subject(&self) -> Option<&str> {
        match self {
            Gene::Subject(name) => Some(name),
            Gene::Free => None,
        }
    }
}

impl fmt::Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gene::Free => f.write_str("-"),
            Gene::Subject(name) => f.write_str(name),
        }
    }
}

/// Flat multiset of genes used to seed initial chromosomes.
///
/// Built once per run: every subject contributes its weekly count of copies,
/// padded with free periods up to grid capacity. When the counts exceed
/// capacity, the pool is shuffled once and truncated — a uniform choice of
/// surviving copies. Overflow degrades quota scores; it is never an error.
#[derive(Debug, Clone)]
pub struct GenePool {
    genes: Vec<Gene>,
}

impl GenePool {
    pub fn build<R: Rng>(snapshot: &CatalogSnapshot, grid: &GridSpec, rng: &mut R) -> Self {
        let capacity = grid.capacity();
        let mut genes: Vec<Gene> = Vec::with_capacity(capacity);
        for (name, &count) in snapshot {
            for _ in 0..count {
                genes.push(Gene::Subject(name.clone()));
            }
        }

        if genes.len() > capacity {
            warn!(
                "Catalog requires {} lessons but the grid holds {}; dropping the excess",
                genes.len(),
                capacity
            );
            genes.shuffle(rng);
            genes.truncate(capacity);
        } else {
            genes.resize(capacity, Gene::Free);
        }

        Self { genes }
    }

    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

/// One candidate weekly schedule: an ordered grid of genes.
///
/// Invariant: the total gene count equals the grid capacity for every
/// chromosome ever produced or transformed by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chromosome {
    days: Vec<Vec<Gene>>,
}

impl Chromosome {
    /// Builds a uniformly-random chromosome from the gene pool.
    ///
    /// The pool is shuffled (Fisher–Yates, a uniform permutation) and laid
    /// into the grid in day-major order. The output shape always matches
    /// `grid` exactly.
    pub fn random<R: Rng>(pool: &GenePool, grid: &GridSpec, rng: &mut R) -> Self {
        let mut genes = pool.genes().to_vec();
        genes.shuffle(rng);

        let mut iter = genes.into_iter();
        let days = (0..grid.day_count())
            .map(|_| iter.by_ref().take(grid.slots_per_day).collect())
            .collect();
        Self { days }
    }

    pub(crate) fn from_days(days: Vec<Vec<Gene>>) -> Self {
        Self { days }
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn slots_per_day(&self) -> usize {
        self.days.first().map(|d| d.len()).unwrap_or(0)
    }

    pub fn day(&self, day: usize) -> &[Gene] {
        &self.days[day]
    }

    pub fn gene(&self, day: usize, slot: usize) -> &Gene {
        &self.days[day][slot]
    }

    pub fn iter_days(&self) -> impl Iterator<Item = &[Gene]> {
        self.days.iter().map(|d| d.as_slice())
    }

    /// Flat day-major iteration over all genes.
    pub fn genes(&self) -> impl Iterator<Item = &Gene> {
        self.days.iter().flatten()
    }

    pub fn gene_count(&self) -> usize {
        self.days.iter().map(|d| d.len()).sum()
    }

    /// Swaps the genes at two grid coordinates in place.
    pub(crate) fn swap(&mut self, a: (usize, usize), b: (usize, usize)) {
        if a.0 == b.0 {
            self.days[a.0].swap(a.1, b.1);
        } else {
            let (first, second) = if a.0 < b.0 { (a, b) } else { (b, a) };
            let (head, tail) = self.days.split_at_mut(second.0);
            std::mem::swap(&mut head[first.0][first.1], &mut tail[0][second.1]);
        }
    }

    pub fn matches_grid(&self, grid: &GridSpec) -> bool {
        self.days.len() == grid.day_count()
            && self.days.iter().all(|d| d.len() == grid.slots_per_day)
    }

    /// Renders the schedule as the day-major map served to callers, keyed by
    /// day label. Free periods render as `"-"`.
    pub fn day_map(&self, grid: &GridSpec) -> BTreeMap<String, Vec<String>> {
        grid.days
            .iter()
            .zip(&self.days)
            .map(|(label, slots)| {
                (
                    label.clone(),
                    slots.iter().map(|g| g.to_string()).collect(),
                )
            })
            .collect()
    }
}
