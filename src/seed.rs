//! Seed acquisition. Construction needs exactly two independent 64-bit
//! words; where they come from is the caller's business, so the source
//! is injected rather than reached for globally.

use rand_core::RngCore;

/// Anything that can hand out two independent 64-bit seed words.
pub trait SeedSource {
    fn seed_pair(&mut self) -> (u64, u64);
}

/// Every `RngCore` qualifies, including `XNasamRng` itself (which is how
/// `split` works) and `rand::rng()` for OS-seeded entropy.
impl<R: RngCore + ?Sized> SeedSource for R {
    fn seed_pair(&mut self) -> (u64, u64) {
        (self.next_u64(), self.next_u64())
    }
}
