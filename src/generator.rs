//! Counter-based generator. State is three words: an immutable mix tweak
//! `x`, an immutable per-stream `increment`, and the counter. `next_u64`
//! only ever touches the counter, so skipping ahead is plain arithmetic
//! and splitting just harvests two outputs as fresh seed material.

use rand_core::{RngCore, SeedableRng, impls, le};
use serde::{Deserialize, Serialize};

use crate::expand::expand32;
use crate::mix::xnasam;
use crate::seed::SeedSource;

/// Base constant the masked stream tweak is xored onto. Keeps every
/// increment odd and usable as a counter step.
const INCREMENT_BASE: u64 = 0x5BE0CD19137E2179;

/// Splittable counter-based PRNG with 64-bit output.
///
/// Simulation-grade, not cryptographic. A single instance is not safe
/// for concurrent mutation; give each worker its own stream via
/// [`SplitRng::split`] instead of sharing one generator.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct XNasamRng {
    x: u64,
    increment: u64,
    ctr: u64,
}

/// Forks an independent stream off a generator.
pub trait SplitRng: Sized {
    /// Returns a generator sharing no mutable state with `self`.
    /// Advances `self` by the steps consumed as seed material.
    fn split(&mut self) -> Self;
}

/// Jumps along a stream in O(1) instead of iterating.
pub trait SkipRng {
    /// Equivalent to `distance` calls of `next_u64`; negative distances
    /// rewind. Counter arithmetic wraps mod 2^64.
    fn skip(&mut self, distance: i64);
}

impl XNasamRng {
    /// Builds the generator for stream `stream_idx` from `seed`.
    ///
    /// The increment is derived from the low 32 bits of the mixed
    /// stream index, shifted onto a fixed odd base; the expansion of
    /// its high half keeps distinct streams at least 6 bits apart in
    /// their increments. This bit layout is part of the contract.
    pub fn new(seed: u64, stream_idx: u64) -> Self {
        let ctr = xnasam(seed, 0);
        let tweak = xnasam(stream_idx, 1);
        let increment = INCREMENT_BASE ^ ((tweak & 0xFFFF_FFFF) << 2);
        let x = expand32((increment >> 32) as u32);
        Self { x, increment, ctr }
    }

    /// Builds a generator from an injected seed source.
    pub fn from_seed_source<S: SeedSource + ?Sized>(source: &mut S) -> Self {
        let (seed, stream_idx) = source.seed_pair();
        Self::new(seed, stream_idx)
    }

    /// Builds a generator from the thread-local OS-seeded entropy source.
    pub fn from_entropy() -> Self {
        Self::from_seed_source(&mut rand::rng())
    }

    /// Returns the next 64-bit word and advances the stream one step.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let old_ctr = self.ctr;
        self.ctr = self.ctr.wrapping_add(self.increment);
        xnasam(old_ctr, self.x)
    }

    /// Splits off one independent child per worker, in order.
    pub fn split_streams(&mut self, n: usize) -> Vec<Self> {
        (0..n).map(|_| self.split()).collect()
    }
}

impl SplitRng for XNasamRng {
    fn split(&mut self) -> Self {
        Self::from_seed_source(self)
    }
}

impl SkipRng for XNasamRng {
    #[inline]
    fn skip(&mut self, distance: i64) {
        self.ctr = self
            .ctr
            .wrapping_add((distance as u64).wrapping_mul(self.increment));
    }
}

impl RngCore for XNasamRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        XNasamRng::next_u64(self) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        XNasamRng::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for XNasamRng {
    /// Two little-endian words: seed, then stream index.
    type Seed = [u8; 16];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut words = [0u64; 2];
        le::read_u64_into(&seed, &mut words);
        Self::new(words[0], words[1])
    }
}
