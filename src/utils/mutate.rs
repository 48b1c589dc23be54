//! Seeded sequence perturbation for generating test fixtures.
//!
//! Applies a fixed number of single-base mutations (substitution,
//! deletion or insertion) to a nucleotide sequence and records each
//! change. Lives outside the aligners: its only consumers are tests
//! that need related sequence pairs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Alphabet used for generated bases
pub const DNA_BASES: [u8; 4] = *b"ACGT";

/// A single recorded mutation. Positions are 0-based and refer to the
/// sequence state at the time the mutation was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// One base replaced by a different one
    Substitution { pos: usize, old: u8, new: u8 },
    /// One base removed
    Deletion { pos: usize, deleted: u8 },
    /// One base inserted
    Insertion { pos: usize, inserted: u8 },
}

/// Pick a random base, optionally excluding one.
fn random_base(rng: &mut StdRng, exclude: Option<u8>) -> u8 {
    let choices: Vec<u8> = DNA_BASES
        .iter()
        .copied()
        .filter(|&base| Some(base) != exclude)
        .collect();
    choices[rng.gen_range(0..choices.len())]
}

/// Apply exactly `n_mutations` single-base mutations at random
/// positions, one base per mutation.
///
/// The same seed always yields the same mutated sequence and log. An
/// empty intermediate sequence can only grow again by insertion.
pub fn mutate_sequence(seq: &[u8], n_mutations: usize, seed: u64) -> (Vec<u8>, Vec<Mutation>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut mutated = seq.to_vec();
    let mut log = Vec::with_capacity(n_mutations);

    for _ in 0..n_mutations {
        let kind = if mutated.is_empty() {
            2
        } else {
            rng.gen_range(0..3)
        };

        match kind {
            0 => {
                let pos = rng.gen_range(0..mutated.len());
                let old = mutated[pos];
                let new = random_base(&mut rng, Some(old));
                mutated[pos] = new;
                log.push(Mutation::Substitution { pos, old, new });
            }
            1 => {
                let pos = rng.gen_range(0..mutated.len());
                let deleted = mutated.remove(pos);
                log.push(Mutation::Deletion { pos, deleted });
            }
            _ => {
                let pos = rng.gen_range(0..=mutated.len());
                let inserted = random_base(&mut rng, None);
                mutated.insert(pos, inserted);
                log.push(Mutation::Insertion { pos, inserted });
            }
        }
    }

    (mutated, log)
}
