//! NASAM-style 64-bit mixer. Pure and stateless; every generator output
//! is one call to `xnasam` on the current counter.

/// Mixes `v` with `tweak` into an avalanche-diffused 64-bit word.
///
/// Two multiply/xorshift rounds behind a rotate-xor premix. The
/// multipliers, rotations and shifts are fixed: the generator's
/// statistical quality depends on these exact values.
#[inline]
pub fn xnasam(v: u64, tweak: u64) -> u64 {
    let mut v = v ^ tweak;
    v ^= v.rotate_right(25) ^ v.rotate_right(47);
    v = v.wrapping_mul(0x9E6C63D0676A9A99);
    v ^= (v >> 23) ^ (v >> 51);
    v = v.wrapping_mul(0x9E6D62D06F6A9A9B);
    v ^= (v >> 23) ^ (v >> 51);
    v
}
