//! Genetic operators over timetable chromosomes.

use rand::Rng;

use super::chromosome::Chromosome;

/// Day-level single-point crossover at a fixed cut index.
///
/// The child takes days `[0, cut)` from `a` and days `[cut, day_count)` from
/// `b`. Pure: the same `(a, b, cut)` always yields the same child. `cut == 0`
/// is a deep copy of `b`; `cut == day_count` a deep copy of `a`.
pub fn crossover_at(a: &Chromosome, b: &Chromosome, cut: usize) -> Chromosome {
    let days = a
        .iter_days()
        .take(cut)
        .chain(b.iter_days().skip(cut))
        .map(|day| day.to_vec())
        .collect();
    Chromosome::from_days(days)
}

/// Crossover with the cut drawn uniformly from `[0, day_count]`, both ends
/// inclusive.
pub fn crossover<R: Rng>(a: &Chromosome, b: &Chromosome, rng: &mut R) -> Chromosome {
    let cut = rng.gen_range(0..=a.day_count());
    crossover_at(a, b, cut)
}

/// Swaps the genes at two distinct grid coordinates, in place.
///
/// Coordinates are drawn uniformly and resampled until they differ. The
/// multiset of genes is preserved; only positions change.
pub fn mutate<R: Rng>(chromosome: &mut Chromosome, rng: &mut R) {
    let days = chromosome.day_count();
    let slots = chromosome.slots_per_day();
    if days * slots < 2 {
        return;
    }

    let first = (rng.gen_range(0..days), rng.gen_range(0..slots));
    let mut second = (rng.gen_range(0..days), rng.gen_range(0..slots));
    while second == first {
        second = (rng.gen_range(0..days), rng.gen_range(0..slots));
    }

    chromosome.swap(first, second);
}
