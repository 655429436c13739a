//! Splittable, skippable counter-based PRNG built on the NASAM mixer.
//! Deterministic, simulation-grade, not cryptographic.

pub mod expand;
pub mod generator;
pub mod mix;
pub mod seed;

pub use generator::{SkipRng, SplitRng, XNasamRng};
pub use mix::xnasam;
pub use rand_core::{RngCore, SeedableRng};
pub use seed::SeedSource;
