//! Seeded randomness for synthetic rosters.
//!
//! A generated roster must be reproducible from its seed alone, so the
//! generator only draws through `RosterRng`. Members, skill levels and
//! engagement histories each read from their own PCG stream; drawing more
//! skills for one member never shifts the names or histories of others.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// Golden-ratio multiplier spreading stream indexes across the seed space.
const STREAM_SPREAD: u64 = 0x9e37_79b9_7f4a_7c15;

/// One generation stage's random source.
pub struct RosterRng {
    pub stream: GeneratorStream,
    inner: Pcg64Mcg,
}

impl RosterRng {
    pub fn new(roster_seed: u64, stream: GeneratorStream) -> Self {
        let stage_seed = roster_seed ^ (stream as u64).wrapping_mul(STREAM_SPREAD);
        Self {
            stream,
            inner: Pcg64Mcg::seed_from_u64(stage_seed),
        }
    }

    /// Index in `0..n`. `n` must be non-zero.
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        self.inner.gen_range(0..n)
    }

    /// True with probability `p`, clamped to [0, 1].
    pub fn chance(&mut self, p: f64) -> bool {
        self.inner.gen_bool(p.clamp(0.0, 1.0))
    }

    /// One element of a non-empty catalog list.
    pub fn pick<'s, T>(&mut self, items: &'s [T]) -> &'s T {
        &items[self.inner.gen_range(0..items.len())]
    }
}

/// Hands out per-stage generators for one roster seed.
pub struct RngBank {
    roster_seed: u64,
}

impl RngBank {
    pub fn new(roster_seed: u64) -> Self {
        Self { roster_seed }
    }

    pub fn for_stream(&self, stream: GeneratorStream) -> RosterRng {
        RosterRng::new(self.roster_seed, stream)
    }
}

/// Generation stages. The discriminant feeds the stage seed, so existing
/// values are fixed; new stages take the next free number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum GeneratorStream {
    Members = 0,
    Skills = 1,
    Engagements = 2,
}
